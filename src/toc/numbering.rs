use crate::toc::heading::Heading;

/// Running chapter/section/subsection state for one document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub chapter: u32,
    pub section: u32,
    pub subsection: u32,
}

impl Counters {
    /// Advance the counters for a heading level and return its label.
    ///
    /// Levels outside 1-3 leave the counters alone and get no label.
    pub fn advance(&mut self, level: u8) -> Option<String> {
        match level {
            1 => {
                self.chapter += 1;
                self.section = 0;
                self.subsection = 0;
                Some(format!("{}", self.chapter))
            }
            2 => {
                self.section += 1;
                self.subsection = 0;
                Some(format!("{}.{}", self.chapter, self.section))
            }
            3 => {
                self.subsection += 1;
                Some(format!("{}.{}.{}", self.chapter, self.section, self.subsection))
            }
            _ => None,
        }
    }
}

/// Number headings in document order.
///
/// A document opening with a deeper heading keeps zero-valued parents,
/// so a lone `<h3>` becomes `0.0.1`.
pub fn number_headings(headings: Vec<Heading>) -> Vec<Heading> {
    let mut counters = Counters::default();

    headings
        .into_iter()
        .map(|heading| Heading {
            number: counters.advance(heading.level),
            ..heading
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(levels: &[u8]) -> Vec<Option<String>> {
        let headings = levels
            .iter()
            .enumerate()
            .map(|(i, level)| Heading::new(i, *level, "x"))
            .collect();

        number_headings(headings).into_iter().map(|h| h.number).collect()
    }

    fn some(labels: &[&str]) -> Vec<Option<String>> {
        labels.iter().map(|l| Some(l.to_string())).collect()
    }

    #[test]
    fn test_hierarchical_numbers() {
        assert_eq!(
            numbers(&[1, 2, 3, 3, 2, 1, 2, 3]),
            some(&["1", "1.1", "1.1.1", "1.1.2", "1.2", "2", "2.1", "2.1.1"])
        );
    }

    #[test]
    fn test_chapter_resets_lower_levels() {
        assert_eq!(numbers(&[1, 2, 2, 1, 2]), some(&["1", "1.1", "1.2", "2", "2.1"]));
        assert_eq!(numbers(&[1, 2, 3, 2, 3]), some(&["1", "1.1", "1.1.1", "1.2", "1.2.1"]));
    }

    #[test]
    fn test_skipped_parents_stay_zero() {
        assert_eq!(numbers(&[3]), some(&["0.0.1"]));
        assert_eq!(numbers(&[2, 3]), some(&["0.1", "0.1.1"]));
        assert_eq!(numbers(&[1, 3]), some(&["1", "1.0.1"]));
    }

    #[test]
    fn test_deep_levels_are_not_numbered() {
        assert_eq!(
            numbers(&[1, 4, 2, 6]),
            vec![Some("1".to_string()), None, Some("1.1".to_string()), None]
        );
    }

    #[test]
    fn test_counters_advance() {
        let mut counters = Counters::default();
        counters.advance(1);
        counters.advance(2);
        counters.advance(9);
        assert_eq!(counters, Counters { chapter: 1, section: 1, subsection: 0 });
    }
}
