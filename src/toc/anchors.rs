use crate::toc::heading::Heading;
use crate::toc::TocStyle;

/// Rebuild a heading line with an anchor in front of its content
pub fn anchored_heading_line(heading: &Heading, style: TocStyle, numbering: bool) -> String {
    let level = heading.level;
    let label = match (style, numbering, &heading.number) {
        (TocStyle::Div, true, Some(number)) => {
            format!("<span class=\"numbering\">{}</span>&nbsp;{}", number, heading.content)
        }
        _ => heading.content.clone(),
    };

    format!("<h{}><a name=\"{}\"></a>{}</h{}>", level, heading.anchor, label, level)
}

/// Return a copy of `lines` with every level 1-3 heading line rewritten
pub fn inject_anchors<S: AsRef<str>>(
    lines: &[S],
    headings: &[Heading],
    style: TocStyle,
    numbering: bool,
) -> Vec<String> {
    let mut output: Vec<String> = lines.iter().map(|line| line.as_ref().to_string()).collect();

    for heading in headings.iter().filter(|h| h.in_toc()) {
        if let Some(line) = output.get_mut(heading.line_index) {
            *line = anchored_heading_line(heading, style, numbering);
        }
    }

    output
}
