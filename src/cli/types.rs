use clap::Parser;
use std::path::PathBuf;

use crate::toc::TocStyle;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "conversio")]
#[command(about = "Renders Markdown files to XHTML with heading anchors and a table of contents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Markdown file or directory containing Markdown files
    #[arg(value_name = "SRC", required_unless_present = "template_default")]
    pub source: Option<PathBuf>,

    /// Target directory for the XHTML output (defaults to next to the sources)
    #[arg(value_name = "DST")]
    pub destination: Option<PathBuf>,

    /// ERB-style template with <%= content %> and <%= style %> slots
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Print the default template and exit
    #[arg(long, default_value_t = false)]
    pub template_default: bool,

    /// Custom configuration file (can be repeated)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Vec<PathBuf>,

    /// Table of contents style: div or list
    #[arg(long, value_name = "STYLE")]
    pub toc_style: Option<TocStyle>,

    /// Do not number headings
    #[arg(long, default_value_t = false)]
    pub no_numbering: bool,

    /// Do not generate a table of contents
    #[arg(long, default_value_t = false)]
    pub no_toc: bool,

    /// Suffix repeated heading anchors with -2, -3, ...
    #[arg(long, default_value_t = false)]
    pub unique_anchors: bool,

    /// Highlight fenced code blocks
    #[arg(long, default_value_t = false)]
    pub highlight: bool,

    /// Syntax highlighting theme
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Print heading outlines instead of writing files
    #[arg(long, default_value_t = false)]
    pub list_headings: bool,

    /// Silence output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Show the full backtrace when an error occurs
    #[arg(long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_options() {
        let cli = Cli::try_parse_from([
            "conversio", "docs", "site", "--toc-style", "list", "--no-numbering", "-c", "a.yml", "-c", "b.toml",
        ]).unwrap();

        assert_eq!(cli.source, Some(PathBuf::from("docs")));
        assert_eq!(cli.destination, Some(PathBuf::from("site")));
        assert_eq!(cli.toc_style, Some(TocStyle::List));
        assert!(cli.no_numbering);
        assert_eq!(cli.config.len(), 2);
    }

    #[test]
    fn test_bad_style_is_rejected() {
        assert!(Cli::try_parse_from(["conversio", "docs", "--toc-style", "tree"]).is_err());
    }

    #[test]
    fn test_source_required() {
        assert!(Cli::try_parse_from(["conversio"]).is_err());
        assert!(Cli::try_parse_from(["conversio", "--template-default"]).is_ok());
    }
}
