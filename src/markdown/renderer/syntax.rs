use std::sync::Arc;
use syntect::highlighting::{ThemeSet, Theme};
use syntect::parsing::SyntaxSet;
use syntect::html::{css_for_theme_with_class_style, ClassedHTMLGenerator, ClassStyle};
use syntect::util::LinesWithEndings;
use regex::Regex;
use lazy_static::lazy_static;

use crate::utils::error::{BoxResult, ConversioError};

/// Theme used when the configured one is unknown
const FALLBACK_THEME: &str = "InspiredGitHub";

lazy_static! {
    static ref CODE_BLOCK_REGEX: Regex = Regex::new(
        r#"<pre><code( class="language-([^"]+)")?>([^<]*)</code></pre>"#
    ).unwrap();
}

/// Component for syntax highlighting code blocks in HTML
#[derive(Clone)]
pub struct SyntaxHighlighter {
    syntax_set: Arc<SyntaxSet>,
    theme_set: Arc<ThemeSet>,
    current_theme: String,
}

impl SyntaxHighlighter {
    /// Create a new syntax highlighter with default settings
    pub fn new() -> Self {
        SyntaxHighlighter {
            syntax_set: Arc::new(SyntaxSet::load_defaults_newlines()),
            theme_set: Arc::new(ThemeSet::load_defaults()),
            current_theme: FALLBACK_THEME.to_string(),
        }
    }

    /// Set the syntax highlighting theme
    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        if self.theme_set.themes.contains_key(theme_name) {
            self.current_theme = theme_name.to_string();
            true
        } else {
            false
        }
    }

    /// Get the list of available themes
    pub fn available_themes(&self) -> Vec<String> {
        self.theme_set.themes.keys()
            .map(|k| k.to_string())
            .collect()
    }

    fn theme(&self) -> BoxResult<&Theme> {
        self.theme_set.themes.get(&self.current_theme)
            .or_else(|| self.theme_set.themes.get(FALLBACK_THEME))
            .ok_or_else(|| ConversioError::Markdown(format!(
                "Syntax theme not found: {}", self.current_theme
            )).into())
    }

    /// CSS rules for the classes emitted by `highlight_code`
    pub fn theme_css(&self) -> BoxResult<String> {
        let css = css_for_theme_with_class_style(self.theme()?, ClassStyle::Spaced)?;
        Ok(css)
    }

    /// Process HTML content to add syntax highlighting to code blocks.
    ///
    /// Blocks that fail to highlight are left as they were.
    pub fn highlight_html(&self, html: &str) -> String {
        CODE_BLOCK_REGEX.replace_all(html, |caps: &regex::Captures| {
            let code = html_escape::decode_html_entities(&caps[3]).to_string();
            let lang = caps.get(2).map(|m| m.as_str()).unwrap_or("text");

            match self.highlight_code(&code, lang) {
                Ok(highlighted) => highlighted,
                Err(e) => {
                    log::warn!("Syntax highlighting failed for {} block: {}", lang, e);
                    caps[0].to_string()
                }
            }
        }).to_string()
    }

    /// Highlight a specific code block with specified language
    pub fn highlight_code(&self, code: &str, lang: &str) -> BoxResult<String> {
        let syntax = self.syntax_set.find_syntax_by_token(lang)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut html_generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::Spaced
        );

        for line in LinesWithEndings::from(code) {
            html_generator.parse_html_for_line_which_includes_newline(line)?;
        }

        Ok(format!(
            "<div class=\"highlight\"><pre class=\"highlight {}\"><code>{}</code></pre></div>",
            lang,
            html_generator.finalize()
        ))
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_highlighting() {
        let highlighter = SyntaxHighlighter::new();
        let code = "fn main() {\n    println!(\"Hello, World!\");\n}";
        let html = highlighter.highlight_code(code, "rust").unwrap();

        assert!(html.contains("<div class=\"highlight\">"));
        assert!(html.contains("<pre class=\"highlight rust\">"));
    }

    #[test]
    fn test_html_processing() {
        let highlighter = SyntaxHighlighter::new();
        let html = "<pre><code class=\"language-rust\">fn main() {\n    println!(&quot;Hello&quot;);\n}</code></pre>";
        let processed = highlighter.highlight_html(html);

        assert!(processed.contains("<div class=\"highlight\">"));
        assert!(processed.contains("<pre class=\"highlight rust\">"));
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        let mut highlighter = SyntaxHighlighter::new();
        assert!(!highlighter.set_theme("no-such-theme"));
        assert!(highlighter.set_theme("base16-ocean.dark"));
        assert!(highlighter.available_themes().contains(&"base16-ocean.dark".to_string()));
    }

    #[test]
    fn test_theme_css() {
        let css = SyntaxHighlighter::new().theme_css().unwrap();
        assert!(css.contains('{'));
    }
}
