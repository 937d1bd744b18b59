//! Markdown to XHTML conversion with heading anchors, hierarchical heading
//! numbers and a generated table of contents.
//!
//! The [`toc`] module is the HTML post-processor and can be used on its own:
//!
//! ```
//! use conversio::toc::{process, TocOptions, TocStyle};
//!
//! let html = process("<h1>Intro</h1>\n<h2>Details</h2>", &TocOptions::default().with_style(TocStyle::List));
//! assert!(html.contains("<a href=\"#details\">Details</a>"));
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod markdown;
pub mod template;
pub mod toc;
pub mod utils;
