use std::collections::HashMap;
use serde::{Serialize, Deserialize};

/// Headings deeper than this are recorded but never numbered, anchored or listed
pub const MAX_TOC_LEVEL: u8 = 3;

/// A single heading occurrence found in the HTML line buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Position of the heading line in the original buffer
    pub line_index: usize,
    /// Tag numeral, `<h2>` is 2
    pub level: u8,
    /// Raw text between the opening and closing tag
    pub content: String,
    /// Fragment identifier derived from `content`
    pub anchor: String,
    /// Hierarchical label such as `2.1.3`, set by the numbering pass
    pub number: Option<String>,
}

impl Heading {
    pub fn new(line_index: usize, level: u8, content: &str) -> Self {
        Self {
            line_index,
            level,
            content: content.to_string(),
            anchor: anchor(content),
            number: None,
        }
    }

    /// Whether this heading takes part in numbering, anchoring and the TOC
    pub fn in_toc(&self) -> bool {
        self.level <= MAX_TOC_LEVEL
    }
}

/// Transform text into an anchor by keeping only alphanumerics, lower-cased.
///
/// ```text
/// anchor("Text with spaces")        // textwithspaces
/// anchor("step 1 step 2 step: 3")   // step1step2step3
/// ```
pub fn anchor(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Append `-2`, `-3`, ... to anchors that were already handed out.
///
/// Only in-TOC headings are considered; the first occurrence keeps its anchor.
pub fn disambiguate_anchors(headings: Vec<Heading>) -> Vec<Heading> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    headings
        .into_iter()
        .map(|mut heading| {
            if !heading.in_toc() {
                return heading;
            }

            let count = seen.entry(heading.anchor.clone()).or_insert(0);
            *count += 1;
            if *count > 1 {
                heading.anchor = format!("{}-{}", heading.anchor, count);
            }
            heading
        })
        .collect()
}
