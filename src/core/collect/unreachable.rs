use std::{collections::HashSet, path::Path};

use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use super::{DocumentSet, display_path};
use crate::core::error::AnalysisError;

/// `.tex` files under `root` that were not collected, sorted by path.
///
/// Hidden directories are not descended into, and paths matching one of
/// `excludes` are ignored. Included files that could not be read (`skipped`)
/// were reached and are not reported.
pub fn find_unreachable_files(
    root: &Path,
    documents: &DocumentSet,
    skipped: &[AnalysisError],
    excludes: &[Pattern],
) -> Vec<String> {
    let skipped_paths = skipped.iter().filter_map(|err| match err {
        AnalysisError::Unreadable { path, .. } => Some(path.as_path()),
        _ => None,
    });
    let collected: HashSet<_> = documents
        .files()
        .iter()
        .map(|f| f.full_path.as_path())
        .chain(skipped_paths)
        .filter_map(|path| path.canonicalize().ok())
        .collect();

    let mut unreachable: Vec<String> = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "tex"))
        .filter(|entry| {
            entry
                .path()
                .canonicalize()
                .map(|p| !collected.contains(&p))
                .unwrap_or(false)
        })
        .map(|entry| display_path(root, entry.path()))
        .filter(|path| !excludes.iter().any(|p| p.matches(path)))
        .collect();

    unreachable.sort();
    unreachable
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}
