use std::path::Path;
use log::{debug, info};

use crate::config::Config;
use crate::markdown::engine::{create_comrak_options, render_markdown};
use crate::markdown::renderer::syntax::SyntaxHighlighter;
use crate::template::Template;
use crate::toc::{TableOfContents, TocOptions};
use crate::utils::error::{BoxResult, ConversioError};
use crate::utils::fs;

/// Markdown to XHTML renderer: comrak, optional highlighting, TOC, template
#[derive(Clone)]
pub struct MarkdownRenderer {
    syntax_highlighter: Option<SyntaxHighlighter>,
    toc_options: Option<TocOptions>,
    template: Template,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer from config
    pub fn new(config: &Config) -> BoxResult<Self> {
        let mut template = Template::load(config.template.as_deref(), config.style.as_deref())?;

        let syntax_highlighter = if config.highlight {
            let mut highlighter = SyntaxHighlighter::new();
            if !highlighter.set_theme(&config.theme) {
                return Err(ConversioError::Config(format!(
                    "Unknown syntax theme '{}', available: {}",
                    config.theme,
                    highlighter.available_themes().join(", ")
                )).into());
            }
            template = template.with_extra_style(&highlighter.theme_css()?);
            Some(highlighter)
        } else {
            None
        };

        let toc_options = if config.toc {
            Some(config.toc_options())
        } else {
            None
        };

        Ok(MarkdownRenderer {
            syntax_highlighter,
            toc_options,
            template,
        })
    }

    /// Replace the page template
    pub fn set_template(&mut self, template: Template) {
        self.template = template;
    }

    /// Configure table of contents options, `None` disables the TOC
    pub fn set_toc_options(&mut self, options: Option<TocOptions>) {
        self.toc_options = options;
    }

    /// Render Markdown to HTML with highlighting but without TOC processing
    pub fn render_html(&self, content: &str) -> String {
        let options = create_comrak_options();
        let html = render_markdown(content, &options);

        match &self.syntax_highlighter {
            Some(highlighter) => highlighter.highlight_html(&html),
            None => html,
        }
    }

    /// Render Markdown to a body fragment with anchors and TOC
    pub fn render_body(&self, content: &str) -> String {
        let html = self.render_html(content);

        match &self.toc_options {
            Some(options) => TableOfContents::new(&html, options).to_html(),
            None => html,
        }
    }

    /// Render Markdown into a complete page
    pub fn render_document(&self, content: &str) -> String {
        self.template.render(&self.render_body(content))
    }

    /// Heading outline of a Markdown document
    pub fn outline(&self, content: &str) -> String {
        let options = self.toc_options.clone().unwrap_or_default();
        TableOfContents::new(&self.render_html(content), &options).outline()
    }

    /// Convert the Markdown file `src` into the XHTML file `dst`
    pub fn markdown_to_xhtml(&self, src: &Path, dst: &Path) -> BoxResult<()> {
        debug!("Converting {} -> {}", src.display(), dst.display());

        let content = fs::read_file(src)?;
        let page = self.render_document(&content);
        fs::write_file(dst, &page)?;

        info!("Wrote {}", dst.display());
        Ok(())
    }
}
