//! Heading anchors, numbering and table of contents for rendered HTML.
//!
//! The pipeline works on one document at a time:
//! scan → number → inject anchors → render → merge.

mod anchors;
mod generator;
mod heading;
mod merger;
mod numbering;
mod scanner;

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Serialize, Deserialize};

pub use anchors::{anchored_heading_line, inject_anchors};
pub use generator::{render_div, render_list, render_toc};
pub use heading::{anchor, disambiguate_anchors, Heading, MAX_TOC_LEVEL};
pub use merger::merge;
pub use numbering::{number_headings, Counters};
pub use scanner::{parse_heading_line, scan_headings};

/// Placeholder marking where the TOC goes
pub const TOC_MARKER: &str = "%TOC";

/// Rendering style of the table of contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TocStyle {
    /// Flat lines indented with `&nbsp;`, optionally numbered
    #[default]
    Div,
    /// Nested ordered lists
    List,
}

impl fmt::Display for TocStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocStyle::Div => write!(f, "div"),
            TocStyle::List => write!(f, "list"),
        }
    }
}

/// Error returned for an unknown style name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTocStyleError(pub String);

impl fmt::Display for ParseTocStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown TOC style '{}' (expected 'div' or 'list')", self.0)
    }
}

impl Error for ParseTocStyleError {}

impl FromStr for TocStyle {
    type Err = ParseTocStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "div" => Ok(TocStyle::Div),
            "list" => Ok(TocStyle::List),
            _ => Err(ParseTocStyleError(s.to_string())),
        }
    }
}

/// Options for TOC generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocOptions {
    pub style: TocStyle,
    /// Show heading numbers (div style only)
    pub numbering: bool,
    /// Class of the `<div>` wrapping the TOC
    pub div_class: String,
    /// Suffix repeated anchors with `-2`, `-3`, ...
    pub unique_anchors: bool,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            style: TocStyle::Div,
            numbering: true,
            div_class: "toc".to_string(),
            unique_anchors: false,
        }
    }
}

impl TocOptions {
    pub fn with_style(mut self, style: TocStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_numbering(mut self, numbering: bool) -> Self {
        self.numbering = numbering;
        self
    }
}

/// Scanned and numbered headings of one HTML document
#[derive(Debug, Clone)]
pub struct TableOfContents {
    lines: Vec<String>,
    headings: Vec<Heading>,
    options: TocOptions,
}

impl TableOfContents {
    pub fn new(html: &str, options: &TocOptions) -> Self {
        let lines: Vec<String> = html.split('\n').map(str::to_string).collect();

        let mut headings = scan_headings(&lines);
        if options.unique_anchors {
            headings = disambiguate_anchors(headings);
        }
        let headings = number_headings(headings);

        debug!(
            "Table of contents: {} heading(s), style {}, numbering {}",
            headings.iter().filter(|h| h.in_toc()).count(),
            options.style,
            options.numbering
        );

        Self {
            lines,
            headings,
            options: options.clone(),
        }
    }

    /// All scanned headings, including levels above 3
    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    pub fn options(&self) -> &TocOptions {
        &self.options
    }

    /// Body with heading lines rewritten to carry anchors
    pub fn html_with_anchors(&self) -> String {
        inject_anchors(
            &self.lines,
            &self.headings,
            self.options.style,
            self.options.numbering,
        )
        .join("\n")
    }

    /// TOC fragment wrapped in its container `<div>`
    pub fn table_of_content(&self) -> String {
        render_toc(&self.headings, &self.options)
    }

    /// Anchored body merged with the TOC
    pub fn to_html(&self) -> String {
        merge(&self.table_of_content(), &self.html_with_anchors())
    }

    /// Plain text outline, one indented `number content` line per heading
    pub fn outline(&self) -> String {
        let mut output = String::new();

        for heading in self.headings.iter().filter(|h| h.in_toc()) {
            output.push_str(&"  ".repeat(usize::from(heading.level - 1)));
            if let Some(number) = &heading.number {
                output.push_str(number);
                output.push(' ');
            }
            output.push_str(&heading.content);
            output.push('\n');
        }

        output
    }
}

/// Run the whole pipeline over `html`
pub fn process(html: &str, options: &TocOptions) -> String {
    TableOfContents::new(html, options).to_html()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_from_str() {
        assert_eq!("div".parse::<TocStyle>(), Ok(TocStyle::Div));
        assert_eq!(" List ".parse::<TocStyle>(), Ok(TocStyle::List));
        assert!("tree".parse::<TocStyle>().is_err());
        assert_eq!(TocStyle::List.to_string(), "list");
    }

    #[test]
    fn test_intro_details_list() {
        let options = TocOptions::default().with_style(TocStyle::List);
        let toc = TableOfContents::new("<h1>Intro</h1>\n<h2>Details</h2>", &options);

        let numbers: Vec<(u8, &str, Option<&str>)> = toc
            .headings()
            .iter()
            .map(|h| (h.level, h.content.as_str(), h.number.as_deref()))
            .collect();
        assert_eq!(numbers, vec![(1, "Intro", Some("1")), (2, "Details", Some("1.1"))]);

        let fragment = toc.table_of_content();
        let intro = fragment.find("Intro").unwrap();
        let details = fragment.find("Details").unwrap();
        let intro_closed = fragment[intro..].find("</li>").unwrap() + intro;
        assert!(details < intro_closed);
        assert!(fragment[intro..details].contains("<ol>"));
    }

    #[test]
    fn test_lone_h3_numbering() {
        let toc = TableOfContents::new("<h3>Edge</h3>", &TocOptions::default());
        assert_eq!(toc.headings()[0].number.as_deref(), Some("0.0.1"));
    }

    #[test]
    fn test_process_prepends_without_marker() {
        let output = process("<h1>Intro</h1>\n<p>text</p>", &TocOptions::default());
        assert_eq!(
            output,
            "<div class=\"toc\" id=\"toc\">\n<a href=\"#intro\">1&nbsp;Intro</a><br/>\n</div>\n\
             \n\
             <h1><a name=\"intro\"></a><span class=\"numbering\">1</span>&nbsp;Intro</h1>\n<p>text</p>"
        );
    }

    #[test]
    fn test_process_replaces_marker() {
        let html = "<h1>Title</h1>\n<p>%TOC</p>\n<h1>One</h1>\n<h2>Two</h2>";
        let options = TocOptions::default().with_style(TocStyle::List);
        let output = process(html, &options);

        assert!(!output.contains(TOC_MARKER));
        assert!(output.starts_with("<h1>Title</h1>\n<p><div class=\"toc\" id=\"toc\">"));
        assert!(output.contains("<h1><a name=\"one\"></a>One</h1>"));
        assert!(!output.contains("href=\"#title\""));
        assert_eq!(output.matches("<div class=\"toc\"").count(), 1);
    }

    #[test]
    fn test_unique_anchors_option() {
        let html = "<h2>Usage</h2>\n<h2>Usage</h2>";
        let plain = process(html, &TocOptions::default());
        assert_eq!(plain.matches("href=\"#usage\"").count(), 2);

        let options = TocOptions {
            unique_anchors: true,
            ..TocOptions::default()
        };
        let unique = process(html, &options);
        assert!(unique.contains("href=\"#usage-2\""));
        assert!(unique.contains("<a name=\"usage-2\"></a>"));
    }

    #[test]
    fn test_trailing_newline_survives() {
        let output = TableOfContents::new("<h1>A</h1>\n", &TocOptions::default()).html_with_anchors();
        assert!(output.ends_with("</h1>\n"));
    }

    #[test]
    fn test_outline() {
        let toc = TableOfContents::new(
            "<h1>Intro</h1>\n<h2>Setup</h2>\n<h4>Deep</h4>",
            &TocOptions::default(),
        );
        assert_eq!(toc.outline(), "1 Intro\n  1.1 Setup\n");
    }
}
