//! Core analysis engine.
//!
//! ## Pipeline
//!
//! 1. `collect`: resolve `\input`/`\include` from the entry file into a document
//! 2. `glossary`: extract formal definitions (`\newacronym`, `\acrodef`, ...)
//! 3. `usage`: find parenthetical mentions, glossary references and typed long forms
//! 4. `analyzer`: classify each acronym (pure, no I/O)
//!
//! `context` wires the stages together with lazy initialization; `matchers`
//! holds every LaTeX pattern the stages use.

pub mod analyzer;
pub mod collect;
pub mod context;
pub mod data;
pub mod error;
pub mod glossary;
pub mod matchers;
pub mod usage;

pub use context::AnalysisContext;
pub use data::*;
pub use error::AnalysisError;
