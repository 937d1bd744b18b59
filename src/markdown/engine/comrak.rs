use comrak::Options;

/// Create ComrakOptions with GitHub Flavored Markdown settings.
///
/// Heading ids stay off so every heading renders as a bare
/// `<hN>text</hN>` line for the TOC scanner.
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.tagfilter = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.superscript = true;
    options.extension.header_ids = None;
    options.extension.footnotes = true;
    options.extension.description_lists = true;

    // Render options
    options.render.hardbreaks = false;
    options.render.github_pre_lang = false;
    options.render.unsafe_ = true;

    // Parse options
    options.parse.smart = true;
    options.parse.default_info_string = Some("text".to_string());

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown(content: &str, options: &Options<'_>) -> String {
    comrak::markdown_to_html(content, options)
}
