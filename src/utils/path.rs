use std::path::{Path, PathBuf};

/// Check whether a path has one of the given extensions (case-insensitive)
pub fn has_extension<P: AsRef<Path>>(path: P, extensions: &[String]) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Replace the extension of a path with `.html`
pub fn html_path<P: AsRef<Path>>(path: P) -> PathBuf {
    path.as_ref().with_extension("html")
}

/// Move `path` from under `from` to under `to`.
///
/// Paths outside `from` are returned unchanged.
pub fn rebase<P: AsRef<Path>>(path: P, from: &Path, to: &Path) -> PathBuf {
    match path.as_ref().strip_prefix(from) {
        Ok(relative) => to.join(relative),
        Err(_) => path.as_ref().to_path_buf(),
    }
}
