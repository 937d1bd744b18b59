pub mod renderer;
pub mod engine;

pub use renderer::{MarkdownRenderer, SyntaxHighlighter};
pub use engine::{create_comrak_options, render_markdown};
