pub mod types;
pub mod logging;

use std::path::{Path, PathBuf};
use clap::Parser;
use log::{error, info};

use crate::config::{self, Config};
use crate::convert;
use crate::markdown::MarkdownRenderer;
use crate::template::DEFAULT_TEMPLATE;
use crate::utils::error::BoxResult;

/// Run the command-line interface and return the process exit code
pub fn run() -> i32 {
    let cli = types::Cli::parse();

    logging::init_logging(cli.debug, cli.quiet);
    logging::configure_backtrace(cli.trace);

    if cli.template_default {
        print!("{}", DEFAULT_TEMPLATE);
        return 0;
    }

    match execute(&cli) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            error!("{}", e);
            error!("  use -h for detailed instructions");
            1
        }
    }
}

/// Load configuration and let command line flags override it
pub fn resolve_config(cli: &types::Cli, source_dir: &Path) -> BoxResult<Config> {
    let mut config = config::load_config(source_dir, Some(cli.config.clone()))?;

    if let Some(template) = &cli.template {
        config.template = Some(template.clone());
    }
    if let Some(style) = cli.toc_style {
        config.toc_style = style;
    }
    if let Some(theme) = &cli.theme {
        config.theme = theme.clone();
    }
    if cli.no_numbering {
        config.numbering = false;
    }
    if cli.no_toc {
        config.toc = false;
    }
    if cli.unique_anchors {
        config.unique_anchors = true;
    }
    if cli.highlight {
        config.highlight = true;
    }

    config::validate_config(&config)?;
    Ok(config)
}

/// Convert or list the sources; `Ok(false)` means some documents failed
fn execute(cli: &types::Cli) -> BoxResult<bool> {
    let source = cli.source.clone().ok_or("No input defined")?;
    let source_dir = if source.is_dir() {
        source.clone()
    } else {
        source.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."))
    };

    let config = resolve_config(cli, &source_dir)?;
    let renderer = MarkdownRenderer::new(&config)?;

    let (root, sources) = convert::collect_sources(&source, &config.markdown_ext)?;
    if sources.is_empty() {
        info!("No Markdown files found in {}", source.display());
        return Ok(true);
    }

    if cli.list_headings {
        for src in &sources {
            let content = crate::utils::fs::read_file(src)?;
            println!("{}", src.display());
            print!("{}", renderer.outline(&content));
        }
        return Ok(true);
    }

    let jobs = convert::resolve_paths(&sources, &root, cli.destination.as_deref());
    let report = convert::convert_all(&renderer, &jobs);
    Ok(report.is_success())
}
