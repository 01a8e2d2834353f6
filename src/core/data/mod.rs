//! Core data types shared by every pipeline phase.
//!
//! ## Module Structure
//!
//! - `source`: Source positions (SourceLocation, SourceContext)
//! - `acronym`: Glossary entries and the glossary map (AcronymEntry, Glossary)
//! - `occurrence`: Observed acronym usages (Occurrence, OccurrenceKind)
//! - `finding`: Classification results (Finding, Classification, Analysis)

pub mod acronym;
pub mod finding;
pub mod occurrence;
pub mod source;

pub use acronym::{AcronymEntry, Glossary};
pub use finding::{Analysis, Classification, Finding};
pub use occurrence::{Occurrence, OccurrenceKind};
pub use source::{SourceContext, SourceLocation};
