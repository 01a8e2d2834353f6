use std::path::PathBuf;

use crate::core::{
    data::{SourceContext, SourceLocation},
    matchers::{is_begin_document, strip_comment},
};

/// One collected `.tex` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path relative to the document root, `/`-separated.
    pub path: String,
    /// Path as opened on disk.
    pub full_path: PathBuf,
    pub content: String,
    lines: Vec<String>,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, full_path: PathBuf, content: String) -> Self {
        let lines = content.lines().map(str::to_string).collect();
        Self {
            path: path.into(),
            full_path,
            content,
            lines,
        }
    }

    /// 1-based line lookup.
    pub fn line(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Position of a line in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineRef {
    pub file: usize,
    pub line: usize,
}

/// A line in reading order, borrowed from its file.
#[derive(Debug, Clone, Copy)]
pub struct DocumentLine<'a> {
    pub file: &'a SourceFile,
    /// 1-based line number within `file`.
    pub number: usize,
    pub text: &'a str,
}

/// All files of a document.
///
/// `files` is in first-visit order. Reading order interleaves the lines of
/// an included file right after the line that includes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSet {
    files: Vec<SourceFile>,
    order: Vec<LineRef>,
}

impl DocumentSet {
    pub(crate) fn new(files: Vec<SourceFile>, order: Vec<LineRef>) -> Self {
        Self { files, order }
    }

    /// Builds a single-file document, mostly for tests and library callers.
    pub fn from_single(path: &str, content: &str) -> Self {
        let file = SourceFile::new(path, PathBuf::from(path), content.to_string());
        let order = (1..=file.line_count())
            .map(|line| LineRef { file: 0, line })
            .collect();
        Self::new(vec![file], order)
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn paths(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.path.as_str()).collect()
    }

    pub fn file(&self, path: &str) -> Option<&SourceFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Pair `location` with its source line (empty if the file is unknown).
    pub fn context_at(&self, location: &SourceLocation) -> SourceContext {
        let line = self
            .file(&location.file_path)
            .and_then(|f| f.line(location.line))
            .unwrap_or_default();
        SourceContext::new(location.clone(), line)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Every line in reading order.
    pub fn lines(&self) -> impl Iterator<Item = DocumentLine<'_>> {
        self.order.iter().filter_map(|r| {
            let file = self.files.get(r.file)?;
            Some(DocumentLine {
                file,
                number: r.line,
                text: file.line(r.line)?,
            })
        })
    }

    /// Lines from `\begin{document}` on. Falls back to every line when the
    /// document has no `\begin{document}` or when `include_preamble` is set.
    pub fn body_lines(&self, include_preamble: bool) -> Vec<DocumentLine<'_>> {
        let lines: Vec<DocumentLine<'_>> = self.lines().collect();
        if include_preamble {
            return lines;
        }
        match lines
            .iter()
            .position(|l| is_begin_document(strip_comment(l.text)))
        {
            Some(start) => lines[start..].to_vec(),
            None => lines,
        }
    }
}
