//! Typed errors raised by the analysis pipeline.
//!
//! `FileNotFound` and `Render` abort a run. `Unreadable` aborts only for the
//! entry file, and `ParseAmbiguity` never does: the context records both as
//! notes and keeps going.

use std::path::PathBuf;

use thiserror::Error;

use super::data::SourceLocation;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("file not found: {}{}", path.display(), included_from_suffix(included_from))]
    FileNotFound {
        path: PathBuf,
        /// The `\input`/`\include` site that referenced the missing file.
        included_from: Option<SourceLocation>,
    },

    #[error("failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse \\{macro_name} at {location}: {reason}")]
    ParseAmbiguity {
        location: SourceLocation,
        macro_name: String,
        reason: String,
    },

    #[error("failed to write report {}: {source}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn included_from_suffix(included_from: &Option<SourceLocation>) -> String {
    match included_from {
        Some(loc) => format!(" (included from {})", loc),
        None => String::new(),
    }
}

impl AnalysisError {
    /// Whether the error makes the whole run meaningless.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, AnalysisError::ParseAmbiguity { .. })
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
