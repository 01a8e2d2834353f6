use std::{
    cell::OnceCell,
    path::{Path, PathBuf},
};

use anyhow::Result;
use glob::Pattern;
use tracing::{debug, info};

use crate::{
    cli::args::CheckArgs,
    config::{Config, load_config},
    core::{
        analyzer::classify,
        collect::{DocumentSet, collect_documents, find_unreachable_files},
        data::{Analysis, Glossary, Occurrence},
        error::AnalysisError,
        glossary::{GlossaryExtraction, extract_glossary},
        usage::{ScanOptions, scan_usages},
    },
};

/// Core analysis context orchestrating the pipeline.
///
/// Collection runs eagerly in `new`, so a missing or unreadable entry file or
/// a missing include fails before anything is reported. Every later stage is
/// computed lazily on first access and exactly once per run:
///
/// 1. **Collection** → `documents` (eager)
/// 2. **Extraction** → `glossary_extraction()` (glossary, duplicates, ambiguities)
/// 3. **Scanning** → `occurrences()`
/// 4. **Analysis** → `analysis()`
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--threshold 3`)
/// 2. `.acrolintrc.json` config file
/// 3. Built-in defaults
pub struct AnalysisContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Directory that include paths are resolved against.
    pub root_dir: PathBuf,

    /// Entry file, relative to `root_dir`.
    pub entry: PathBuf,

    /// Where the document report goes.
    pub output: PathBuf,

    /// Collected files in reading order.
    pub documents: DocumentSet,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    /// Included files that existed but could not be read.
    skipped: Vec<AnalysisError>,

    excludes: Vec<Pattern>,

    extraction: OnceCell<GlossaryExtraction>,

    occurrences: OnceCell<Vec<Occurrence>>,

    analysis: OnceCell<Analysis>,

    unreachable: OnceCell<Vec<String>>,
}

impl AnalysisContext {
    /// Load configuration, apply CLI overrides and collect the document.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid, or the overrides make it invalid
    /// - The entry file or an included file does not exist
    /// - The entry file cannot be read
    pub fn new(args: &CheckArgs) -> Result<Self> {
        let verbose = args.verbose;

        // Config lookup starts at --root when given, otherwise the current directory
        let start_dir = args.root.clone().unwrap_or_else(|| PathBuf::from("."));
        let config_result = load_config(&start_dir)?;
        if !config_result.from_file {
            info!("no .acrolintrc.json found, using default configuration");
        }

        let mut config = config_result.config;
        if let Some(ref entry) = args.entry {
            config.entry_file = entry.to_string_lossy().to_string();
        }
        if let Some(ref root) = args.root {
            config.root_dir = root.to_string_lossy().to_string();
        }
        if let Some(ref output) = args.output {
            config.output = output.to_string_lossy().to_string();
        }
        if let Some(threshold) = args.threshold {
            config.informal_threshold = threshold;
        }
        config.validate()?;

        let root_dir = PathBuf::from(&config.root_dir);
        let entry = PathBuf::from(&config.entry_file);
        let output = PathBuf::from(&config.output);
        let excludes = config.exclude_patterns()?;

        debug!(
            root = %root_dir.display(),
            entry = %entry.display(),
            "collecting documents"
        );
        let collection = collect_documents(&root_dir, &entry, &excludes)?;
        debug!(files = collection.documents.len(), "collection finished");

        Ok(Self {
            config,
            root_dir,
            entry,
            output,
            documents: collection.documents,
            verbose,
            skipped: collection.skipped,
            excludes,
            extraction: OnceCell::new(),
            occurrences: OnceCell::new(),
            analysis: OnceCell::new(),
            unreachable: OnceCell::new(),
        })
    }

    /// Build a context over an already collected document (library use and tests).
    pub fn from_documents(config: Config, root_dir: &Path, documents: DocumentSet) -> Self {
        let excludes = config
            .excludes
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect();
        Self {
            entry: PathBuf::from(&config.entry_file),
            output: PathBuf::from(&config.output),
            config,
            root_dir: root_dir.to_path_buf(),
            documents,
            verbose: false,
            skipped: Vec::new(),
            excludes,
            extraction: OnceCell::new(),
            occurrences: OnceCell::new(),
            analysis: OnceCell::new(),
            unreachable: OnceCell::new(),
        }
    }

    /// Glossary extraction result (lazy initialization).
    pub fn glossary_extraction(&self) -> &GlossaryExtraction {
        self.extraction
            .get_or_init(|| extract_glossary(&self.documents, self.config.duplicate_definitions))
    }

    pub fn glossary(&self) -> &Glossary {
        &self.glossary_extraction().glossary
    }

    /// Every acronym usage in the document body (lazy initialization).
    pub fn occurrences(&self) -> &[Occurrence] {
        self.occurrences.get_or_init(|| {
            let options = ScanOptions {
                include_preamble: self.config.scan_preamble,
                ignored_acronyms: self.config.ignored_acronyms.iter().cloned().collect(),
            };
            scan_usages(&self.documents, self.glossary(), &options)
        })
    }

    /// Classified findings (lazy initialization).
    pub fn analysis(&self) -> &Analysis {
        self.analysis.get_or_init(|| {
            classify(
                self.glossary(),
                self.occurrences(),
                self.config.informal_threshold,
            )
        })
    }

    /// `.tex` files under the root that the entry file never includes.
    pub fn unreachable_files(&self) -> &[String] {
        self.unreachable.get_or_init(|| {
            find_unreachable_files(
                &self.root_dir,
                &self.documents,
                &self.skipped,
                &self.excludes,
            )
        })
    }

    pub fn skipped_files(&self) -> &[AnalysisError] {
        &self.skipped
    }
}
