use std::path::PathBuf;
use serde::{Serialize, Deserialize};

use crate::config::defaults;
use crate::toc::{TocOptions, TocStyle};

/// Conversion configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Generate a table of contents
    #[serde(default = "defaults::default_toc")]
    pub toc: bool,

    /// TOC rendering style, `div` or `list`
    #[serde(default)]
    pub toc_style: TocStyle,

    /// Show heading numbers in the div style
    #[serde(default = "defaults::default_numbering")]
    pub numbering: bool,

    /// Class of the `<div>` wrapping the TOC
    #[serde(default = "defaults::default_toc_class")]
    pub toc_class: String,

    /// Suffix repeated heading anchors
    #[serde(default)]
    pub unique_anchors: bool,

    /// Extensions collected when converting a directory
    #[serde(default = "defaults::default_markdown_ext")]
    pub markdown_ext: Vec<String>,

    /// ERB-style page template
    #[serde(default)]
    pub template: Option<PathBuf>,

    /// CSS file filled into the style slot
    #[serde(default)]
    pub style: Option<PathBuf>,

    /// Highlight fenced code blocks
    #[serde(default)]
    pub highlight: bool,

    /// Syntax highlighting theme
    #[serde(default = "defaults::default_theme")]
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            toc: defaults::default_toc(),
            toc_style: TocStyle::default(),
            numbering: defaults::default_numbering(),
            toc_class: defaults::default_toc_class(),
            unique_anchors: false,
            markdown_ext: defaults::default_markdown_ext(),
            template: None,
            style: None,
            highlight: false,
            theme: defaults::default_theme(),
        }
    }
}

impl Config {
    /// TOC options derived from this configuration
    pub fn toc_options(&self) -> TocOptions {
        TocOptions {
            style: self.toc_style,
            numbering: self.numbering,
            div_class: self.toc_class.clone(),
            unique_anchors: self.unique_anchors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_defaults() {
        let config: Config = serde_yaml::from_str("toc_style: list\n").unwrap();
        assert_eq!(config.toc_style, TocStyle::List);
        assert!(config.numbering);
        assert_eq!(config.markdown_ext, vec!["markdown".to_string()]);
        assert_eq!(config.theme, "InspiredGitHub");
    }

    #[test]
    fn test_toc_options() {
        let config = Config {
            numbering: false,
            toc_class: "contents".to_string(),
            ..Config::default()
        };
        let options = config.toc_options();
        assert_eq!(options.style, TocStyle::Div);
        assert!(!options.numbering);
        assert_eq!(options.div_class, "contents");
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        assert!(serde_yaml::from_str::<Config>("toc_style: tree\n").is_err());
    }
}
