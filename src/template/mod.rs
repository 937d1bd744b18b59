//! ERB-style page templates with a content slot and a style slot.

use std::path::Path;
use regex::Regex;
use lazy_static::lazy_static;

use crate::utils::error::{BoxResult, ConversioError};
use crate::utils::fs;

lazy_static! {
    static ref SLOT_REGEX: Regex = Regex::new(r"<%=\s*@?(content|style)\s*%>").unwrap();
}

/// Template used when none is configured
pub const DEFAULT_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html
   PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN"
   "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">
<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="en" lang="en">
<head>
  <meta http-equiv="content-type" content="text/html; charset=utf-8" />
  <style type="text/css" media="screen">
    <%= @style %>
  </style>
</head>
<body>
  <%= @content %>
</body>
</html>
"#;

/// Stylesheet used when none is configured
pub const DEFAULT_STYLE: &str = r#"div.toc {
      margin: 1em 0;
      padding: 0.5em 1em;
      border-left: 3px solid #ccc;
    }
    div.toc ol { margin: 0; padding-left: 1.5em; }
    span.numbering { color: #666; }"#;

/// A page template with its stylesheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    style: String,
}

impl Default for Template {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE, DEFAULT_STYLE)
    }
}

impl Template {
    pub fn new(source: &str, style: &str) -> Self {
        Self {
            source: source.to_string(),
            style: style.to_string(),
        }
    }

    /// Load the template and stylesheet, falling back to the defaults
    pub fn load(template: Option<&Path>, style: Option<&Path>) -> BoxResult<Self> {
        let source = match template {
            Some(path) => fs::read_file(path)?,
            None => DEFAULT_TEMPLATE.to_string(),
        };
        let style = match style {
            Some(path) => fs::read_file(path)?,
            None => DEFAULT_STYLE.to_string(),
        };

        let template = Self { source, style };
        template.check_slots()?;
        Ok(template)
    }

    /// Append CSS to the style slot
    pub fn with_extra_style(mut self, css: &str) -> Self {
        self.style.push('\n');
        self.style.push_str(css);
        self
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    /// A template without a content slot would drop every document
    fn check_slots(&self) -> BoxResult<()> {
        let has_content = SLOT_REGEX
            .captures_iter(&self.source)
            .any(|caps| &caps[1] == "content");

        if !has_content {
            return Err(ConversioError::Template(
                "template has no <%= content %> slot".to_string()
            ).into());
        }
        Ok(())
    }

    /// Fill the content and style slots
    pub fn render(&self, content: &str) -> String {
        SLOT_REGEX.replace_all(&self.source, |caps: &regex::Captures| {
            match &caps[1] {
                "content" => content.to_string(),
                _ => self.style.clone(),
            }
        }).to_string()
    }
}
