use regex::Regex;
use lazy_static::lazy_static;
use log::debug;

use crate::toc::heading::Heading;
use crate::toc::TOC_MARKER;

lazy_static! {
    // The closing numeral is captured separately and compared after matching
    static ref HEADING_LINE_REGEX: Regex = Regex::new(
        r"^<h([1-9])([^>]*)>(.*?)</h([1-9])>$"
    ).unwrap();
}

/// Extract the headings of a line buffer in document order.
///
/// When the marker occurs somewhere in the buffer, lines up to and including
/// the first marker line are ignored.
pub fn scan_headings<S: AsRef<str>>(lines: &[S]) -> Vec<Heading> {
    let marker_line = lines
        .iter()
        .position(|line| line.as_ref().contains(TOC_MARKER));

    let first_active = match marker_line {
        Some(index) => {
            debug!("TOC marker found on line {}, scanning headings below it", index);
            index + 1
        }
        None => 0,
    };

    let headings: Vec<Heading> = lines
        .iter()
        .enumerate()
        .skip(first_active)
        .filter_map(|(index, line)| parse_heading_line(index, line.as_ref()))
        .collect();

    debug!("Scanned {} heading(s) from {} line(s)", headings.len(), lines.len());
    headings
}

/// Match a line that is entirely one `<hN ...>...</hN>` element
pub fn parse_heading_line(index: usize, line: &str) -> Option<Heading> {
    let cap = HEADING_LINE_REGEX.captures(line)?;

    if cap[1] != cap[4] {
        return None;
    }

    let level: u8 = cap[1].parse().ok()?;
    Some(Heading::new(index, level, &cap[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(html: &str) -> Vec<&str> {
        html.split('\n').collect()
    }

    #[test]
    fn test_scan_headings_in_order() {
        let html = "<h1>Intro</h1>\n<p>text</p>\n<h2 class=\"x\">Details</h2>\n<h4>Deep</h4>";
        let headings = scan_headings(&lines(html));

        assert_eq!(headings.len(), 3);
        assert_eq!(headings[0], Heading::new(0, 1, "Intro"));
        assert_eq!(headings[1].line_index, 2);
        assert_eq!(headings[1].content, "Details");
        assert_eq!(headings[1].anchor, "details");
        assert_eq!(headings[2].level, 4);
    }

    #[test]
    fn test_partial_lines_are_skipped() {
        let html = "text <h1>Inline</h1>\n<h2>Open only\n<h1>Mismatch</h2>\n<h3>Trailing</h3> text";
        assert!(scan_headings(&lines(html)).is_empty());
    }

    #[test]
    fn test_content_may_contain_markup() {
        let headings = scan_headings(&lines("<h2 id=\"a\"><code>x</code> and <em>y</em></h2>"));

        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].content, "<code>x</code> and <em>y</em>");
        assert_eq!(headings[0].anchor, "codexcodeandemyem");
    }

    #[test]
    fn test_nested_closing_tag_extends_content() {
        let heading = parse_heading_line(0, "<h1>a</h2>b</h1>").unwrap();
        assert_eq!(heading.level, 1);
        assert_eq!(heading.content, "a</h2>b");
    }

    #[test]
    fn test_marker_gates_scanning() {
        let html = "<h1>Title</h1>\n<p>%TOC</p>\n<h1>One</h1>\n<h2>Two</h2>";
        let headings = scan_headings(&lines(html));

        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].content, "One");
        assert_eq!(headings[0].line_index, 2);
        assert_eq!(headings[1].content, "Two");
    }

    #[test]
    fn test_marker_on_last_line_yields_nothing() {
        let html = "<h1>Title</h1>\n%TOC";
        assert!(scan_headings(&lines(html)).is_empty());
    }
}
