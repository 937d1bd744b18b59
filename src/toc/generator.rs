use crate::toc::heading::{Heading, MAX_TOC_LEVEL};
use crate::toc::{TocOptions, TocStyle};

/// Indentation unit of the flat style, repeated once per level below h1
const DIV_INDENT: &str = "&nbsp;&nbsp;";

fn link(heading: &Heading, label: &str) -> String {
    format!("<a href=\"#{}\">{}</a>", heading.anchor, label)
}

/// Render headings as nested `<ol>`/`<li>` elements.
///
/// Only `last_level` drives the nesting decision, so a jump from h1 to h3
/// opens a single list. The number of lists actually opened is tracked
/// separately so every `<ol>` gets closed.
pub fn render_list(headings: &[Heading]) -> String {
    let mut output = String::new();
    let mut last_level: u8 = 0;
    let mut depth: usize = 0;

    for heading in headings.iter().filter(|h| h.in_toc()) {
        let level = heading.level.min(MAX_TOC_LEVEL);
        let li = link(heading, &heading.content);

        if level > last_level {
            output.push_str("\n<ol>\n<li>");
            depth += 1;
        } else if level == last_level {
            output.push_str("</li>\n<li>");
        } else {
            let steps = usize::from(last_level - level).min(depth - 1);
            for _ in 0..steps {
                output.push_str("</li>\n</ol>");
            }
            depth -= steps;
            output.push_str("</li>\n<li>");
        }
        output.push_str(&li);

        last_level = level;
    }

    for _ in 0..depth {
        output.push_str("</li>\n</ol>");
    }
    output.push('\n');

    output
}

/// Render headings as flat lines indented with `&nbsp;`
pub fn render_div(headings: &[Heading], numbering: bool) -> String {
    let mut output = String::new();

    for heading in headings.iter().filter(|h| h.in_toc()) {
        output.push_str(&DIV_INDENT.repeat(usize::from(heading.level.saturating_sub(1))));

        let label = match (&heading.number, numbering) {
            (Some(number), true) => format!("{}&nbsp;{}", number, heading.content),
            _ => heading.content.clone(),
        };
        output.push_str(&link(heading, &label));
        output.push_str("<br/>\n");
    }

    output
}

/// Render the TOC in the configured style, wrapped in its container `<div>`
pub fn render_toc(headings: &[Heading], options: &TocOptions) -> String {
    let inner = match options.style {
        TocStyle::Div => render_div(headings, options.numbering),
        TocStyle::List => render_list(headings),
    };

    format!("<div class=\"{}\" id=\"toc\">\n{}</div>\n", options.div_class, inner)
}
