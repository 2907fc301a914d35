//! Expansion of `files` entries through the glob engine.
//! Each entry, literal path or pattern, becomes a list of matched regular
//! files; directory matches are tagged and skipped.

use crate::config::GlobOptions;
use crate::error::Result;
use log::debug;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Expands one `files` entry into the matched regular files.
///
/// The engine runs with the caller's match options, except `mark`, which is
/// always forced on so directory matches carry a trailing separator and can
/// be filtered out. A pattern with no matches yields an empty list.
///
/// # Errors
/// * `Error::PatternError` if the entry is not a valid pattern
/// * `Error::ExpansionError` if the engine fails while traversing
pub fn expand_entry(pattern: &str, options: &GlobOptions) -> Result<Vec<PathBuf>> {
    let mut options = *options;
    options.mark = true;

    let mut files = Vec::new();
    for entry in glob::glob_with(pattern, options.match_options())? {
        let marked = mark_path(&entry?, options.mark);
        if is_marked_dir(&marked) {
            debug!("Skipping directory: {}", marked);
            continue;
        }
        files.push(PathBuf::from(marked));
    }
    Ok(files)
}

/// Tags directory paths with a trailing separator when `mark` is set.
fn mark_path(path: &Path, mark: bool) -> String {
    let mut repr = path.to_string_lossy().into_owned();
    if mark && path.is_dir() && !is_marked_dir(&repr) {
        repr.push(MAIN_SEPARATOR);
    }
    repr
}

fn is_marked_dir(path: &str) -> bool {
    path.ends_with('/') || path.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_marked_dir() {
        assert!(is_marked_dir("some/dir/"));
        assert!(is_marked_dir("some\\dir\\"));
        assert!(!is_marked_dir("some/file.json"));
    }

    #[test]
    fn test_mark_path_regular_file() {
        // A path that does not exist on disk is never a directory.
        let repr = mark_path(Path::new("no/such/file.json"), true);
        assert_eq!(repr, "no/such/file.json");
    }
}
