mod syntax;
mod markdown_renderer;

pub use syntax::SyntaxHighlighter;
pub use markdown_renderer::MarkdownRenderer;
