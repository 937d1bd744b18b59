//! Source discovery and batch conversion of Markdown files.

use std::path::{Path, PathBuf};
use log::{debug, error, info};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::markdown::MarkdownRenderer;
use crate::utils::error::{BoxResult, ConversioError};
use crate::utils::path::{has_extension, html_path, rebase};

/// One source file and where its XHTML goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub src: PathBuf,
    pub dst: PathBuf,
}

/// Outcome of a batch conversion
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub converted: usize,
    pub failed: Vec<(PathBuf, String)>,
}

impl ConversionReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Collect the Markdown files under `src`.
///
/// Returns the source root (the directory itself, or the parent of a single
/// file) and the files found, sorted.
pub fn collect_sources(src: &Path, extensions: &[String]) -> BoxResult<(PathBuf, Vec<PathBuf>)> {
    if src.is_dir() {
        let mut files = Vec::new();
        for entry in WalkDir::new(src).follow_links(true) {
            let entry = entry?;
            if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                files.push(entry.path().to_path_buf());
            }
        }
        files.sort();
        debug!("Found {} Markdown file(s) in {}", files.len(), src.display());
        Ok((src.to_path_buf(), files))
    } else if src.is_file() {
        let root = src.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok((root, vec![src.to_path_buf()]))
    } else {
        Err(ConversioError::File(format!("Input not found: {}", src.display())).into())
    }
}

/// Pair every source with its output path.
///
/// Outputs sit next to their sources unless `dst` is given, in which case
/// the `root` prefix is swapped for `dst`.
pub fn resolve_paths(sources: &[PathBuf], root: &Path, dst: Option<&Path>) -> Vec<ConversionJob> {
    sources
        .iter()
        .map(|src| {
            let html = html_path(src);
            let dst = match dst {
                Some(dst) => rebase(&html, root, dst),
                None => html,
            };
            ConversionJob { src: src.clone(), dst }
        })
        .collect()
}

/// Convert all jobs in parallel, one independent pipeline per document
pub fn convert_all(renderer: &MarkdownRenderer, jobs: &[ConversionJob]) -> ConversionReport {
    info!("Converting {} document(s)...", jobs.len());

    let results: Vec<(PathBuf, Result<(), String>)> = jobs
        .par_iter()
        .map(|job| {
            let result = renderer
                .markdown_to_xhtml(&job.src, &job.dst)
                .map_err(|e| e.to_string());
            (job.src.clone(), result)
        })
        .collect();

    let mut report = ConversionReport::default();
    for (src, result) in results {
        match result {
            Ok(()) => report.converted += 1,
            Err(e) => {
                error!("Failed to convert {}: {}", src.display(), e);
                report.failed.push((src, e));
            }
        }
    }

    info!("Converted {} document(s), {} failed", report.converted, report.failed.len());
    report
}
