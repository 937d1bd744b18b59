/// Configuration file names to look for in the source directory
pub const CONFIG_FILES: [&str; 3] = ["_conversio.yml", "_conversio.yaml", "_conversio.toml"];

/// Generate a table of contents unless told otherwise
pub fn default_toc() -> bool {
    true
}

/// Heading numbers are shown by default
pub fn default_numbering() -> bool {
    true
}

/// Default class of the TOC container
pub fn default_toc_class() -> String {
    "toc".to_string()
}

/// Default Markdown file extensions
pub fn default_markdown_ext() -> Vec<String> {
    vec!["markdown".to_string()]
}

/// Default syntax highlighting theme
pub fn default_theme() -> String {
    "InspiredGitHub".to_string()
}
