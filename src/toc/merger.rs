use crate::toc::TOC_MARKER;

/// Place the TOC at the first marker in `body`, or in front of it.
///
/// Later markers are left in the text as they are.
pub fn merge(toc: &str, body: &str) -> String {
    if body.contains(TOC_MARKER) {
        body.replacen(TOC_MARKER, toc, 1)
    } else {
        let mut output = String::with_capacity(toc.len() + body.len() + 1);
        output.push_str(toc);
        output.push('\n');
        output.push_str(body);
        output
    }
}
