//! Acrolint - acronym consistency checker for LaTeX documents
//!
//! Acrolint follows a document's `\input`/`\include` tree from its entry file,
//! extracts the acronym glossary (`\newacronym`, `\acrodef`, ...) and classifies
//! every acronym by how the text uses it: introduced informally in parentheses
//! without a definition, defined but typed out in full, or used consistently.
//! Results are written as an HTML or Markdown report and listed in the terminal.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, terminal output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Analysis pipeline (collection, glossary extraction, scanning, classification)
//! - `issues`: Issue type definitions for terminal reporting
//! - `render`: HTML and Markdown document report
//! - `rules`: Conversion of analysis results into issues
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod render;
pub mod rules;
pub mod utils;
