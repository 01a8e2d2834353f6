//! Document collection: resolves the `.tex` files reachable from an entry file.
//!
//! ## Module Structure
//!
//! - `documents`: Collected files and reading-order line access (DocumentSet)
//! - `unreachable`: `.tex` files under the root that nothing includes

mod documents;
mod unreachable;

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use glob::Pattern;
use tracing::{debug, warn};

pub use documents::{DocumentLine, DocumentSet, SourceFile};
pub use unreachable::find_unreachable_files;

use documents::LineRef;

use crate::core::{
    data::SourceLocation,
    error::{AnalysisError, Result},
    matchers::{IncludeMatch, match_includes, strip_comment},
};

/// Output of a successful collection.
#[derive(Debug)]
pub struct Collection {
    pub documents: DocumentSet,
    /// Non-fatal errors: included files that could not be read.
    pub skipped: Vec<AnalysisError>,
}

/// Collect the document starting at `entry` (relative to `root`).
///
/// # Errors
///
/// - `FileNotFound` if the entry file or any followed include does not exist
/// - `Unreadable` if the entry file cannot be read
pub fn collect_documents(root: &Path, entry: &Path, excludes: &[Pattern]) -> Result<Collection> {
    let mut collector = Collector::new(root, excludes);
    collector.visit(entry, None)?;
    Ok(Collection {
        documents: DocumentSet::new(collector.files, collector.order),
        skipped: collector.skipped,
    })
}

struct Collector<'a> {
    root: &'a Path,
    excludes: &'a [Pattern],
    visited: HashSet<PathBuf>,
    files: Vec<SourceFile>,
    order: Vec<LineRef>,
    skipped: Vec<AnalysisError>,
}

impl<'a> Collector<'a> {
    fn new(root: &'a Path, excludes: &'a [Pattern]) -> Self {
        Self {
            root,
            excludes,
            visited: HashSet::new(),
            files: Vec::new(),
            order: Vec::new(),
            skipped: Vec::new(),
        }
    }

    fn visit(&mut self, relative: &Path, included_from: Option<SourceLocation>) -> Result<()> {
        let full_path = self.root.join(relative);
        if !full_path.is_file() {
            return Err(AnalysisError::FileNotFound {
                path: full_path,
                included_from,
            });
        }

        let canonical = full_path
            .canonicalize()
            .unwrap_or_else(|_| full_path.clone());
        if !self.visited.insert(canonical) {
            debug!(path = %full_path.display(), "already collected, skipping");
            return Ok(());
        }

        let content = match fs::read_to_string(&full_path) {
            Ok(content) => content,
            Err(source) => {
                let err = AnalysisError::Unreadable {
                    path: full_path,
                    source,
                };
                if included_from.is_none() {
                    return Err(err);
                }
                warn!("{}, skipping", err);
                self.skipped.push(err);
                return Ok(());
            }
        };

        let display_path = display_path(self.root, &full_path);
        debug!(path = %display_path, "collected");

        let includes: Vec<Vec<IncludeMatch>> = content
            .lines()
            .map(|line| match_includes(strip_comment(line)))
            .collect();

        let file_idx = self.files.len();
        self.files
            .push(SourceFile::new(display_path.clone(), full_path, content));

        for (idx, line_includes) in includes.into_iter().enumerate() {
            let line = idx + 1;
            self.order.push(LineRef {
                file: file_idx,
                line,
            });

            for include in line_includes {
                let target = include_target(self.root, &include.target);
                if self.is_excluded(&target) {
                    debug!(target = %target.display(), "excluded include, not following");
                    continue;
                }
                let site = SourceLocation::new(display_path.clone(), line, include.col);
                self.visit(&target, Some(site))?;
            }
        }

        Ok(())
    }

    fn is_excluded(&self, target: &Path) -> bool {
        self.excludes.iter().any(|p| p.matches_path(target))
    }
}

/// `\input{chapters/intro}` refers to `chapters/intro.tex`.
///
/// `.tex` is appended unless the target already ends in it, so dotted names
/// like `sections/2.1-intro` still resolve. A target that only exists
/// verbatim (`\input{macros.sty}`) is taken as is.
fn include_target(root: &Path, target: &str) -> PathBuf {
    let literal = PathBuf::from(target);
    if literal.extension().is_some_and(|ext| ext == "tex") {
        return literal;
    }

    let with_extension = PathBuf::from(format!("{}.tex", target));
    if !root.join(&with_extension).is_file() && root.join(&literal).is_file() {
        literal
    } else {
        with_extension
    }
}

pub(crate) fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
