//! Spelled-out number words and their digit replacements.
//!
//! Calibration lines may spell digits out ("two1nine") and may run two
//! number words together so that they share letters ("eightwo" reads as
//! both "eight" and "two"). [`NumberWordTable`] holds the replacements and
//! [`NumberWordTable::normalize`] rewrites a line so that every number it
//! spells out shows up as a digit.

use once_cell::sync::Lazy;
use std::borrow::Cow;

/// Overlap compounds, then single words.
const STANDARD_ENTRIES: &[(&str, &str)] = &[
    // Compounds sharing a letter between two words
    ("oneight", "18"),
    ("twone", "21"),
    ("threeight", "38"),
    ("fiveight", "58"),
    ("sevenine", "79"),
    ("eightwo", "82"),
    ("eighthree", "83"),
    ("nineight", "98"),
    // Single words
    ("one", "1"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
];

static STANDARD: Lazy<NumberWordTable> =
    Lazy::new(|| NumberWordTable::from_entries(STANDARD_ENTRIES.iter().copied()));

/// An ordered list of `(pattern, replacement)` pairs.
///
/// Patterns are matched case-sensitively. Entry order is kept for display
/// and iteration, but does not influence [`normalize`](Self::normalize):
/// at any position the longest matching pattern wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberWordTable {
    entries: Vec<(&'static str, &'static str)>,
}

impl NumberWordTable {
    /// The standard English table ("one".."nine" plus the overlap compounds).
    pub fn standard() -> &'static NumberWordTable {
        &STANDARD
    }

    /// Build a table from explicit entries. Empty patterns are dropped.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        Self {
            entries: entries
                .into_iter()
                .filter(|(pattern, _)| !pattern.is_empty())
                .collect(),
        }
    }

    pub fn entries(&self) -> &[(&'static str, &'static str)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest entry whose pattern is a prefix of `text`.
    fn longest_match(&self, text: &str) -> Option<(&'static str, &'static str)> {
        self.entries
            .iter()
            .filter(|(pattern, _)| text.starts_with(pattern))
            .max_by_key(|(pattern, _)| pattern.len())
            .copied()
    }

    /// Replace spelled-out numbers in `line` with their digits.
    ///
    /// Single left-to-right pass over the input text. Every character
    /// position is tried as the start of a pattern, so words sharing
    /// letters each contribute their digits ("twoneight" becomes "2118").
    /// A match lying entirely inside text that was already replaced is
    /// ignored. Characters covered by a replaced pattern are dropped; all
    /// other characters are copied through.
    ///
    /// Returns the input unchanged (borrowed) when nothing matched.
    pub fn normalize<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let mut out: Option<String> = None;
        // Byte offset up to which the input has been replaced.
        let mut covered_until = 0;

        for (idx, ch) in line.char_indices() {
            if let Some((pattern, replacement)) = self.longest_match(&line[idx..]) {
                let end = idx + pattern.len();
                if end > covered_until {
                    let buf = out.get_or_insert_with(|| {
                        let mut buf = String::with_capacity(line.len());
                        buf.push_str(&line[..idx]);
                        buf
                    });
                    buf.push_str(replacement);
                    covered_until = end;
                    continue;
                }
            }

            if idx >= covered_until {
                if let Some(buf) = out.as_mut() {
                    buf.push(ch);
                }
            }
        }

        match out {
            Some(buf) => Cow::Owned(buf),
            None => Cow::Borrowed(line),
        }
    }
}

impl Default for NumberWordTable {
    fn default() -> Self {
        Self::standard().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(line: &str) -> String {
        NumberWordTable::standard().normalize(line).into_owned()
    }

    #[test]
    fn single_words_become_digits() {
        assert_eq!(normalize("two1nine"), "219");
        assert_eq!(normalize("abcone2threexyz"), "abc123xyz");
        assert_eq!(normalize("7pqrstsixteen"), "7pqrst6teen");
    }

    #[test]
    fn overlap_compounds_keep_both_digits() {
        assert_eq!(normalize("twone"), "21");
        assert_eq!(normalize("oneight"), "18");
        assert_eq!(normalize("eightwothree"), "823");
        assert_eq!(normalize("xtwone3four"), "x2134");
        assert_eq!(normalize("zoneight234"), "z18234");
    }

    #[test]
    fn chained_overlaps_resolve_every_word() {
        // "twone" and "oneight" share the "one"
        assert_eq!(normalize("twoneight"), "2118");
        // compound followed by a word sharing its last letter
        assert_eq!(normalize("eightwone"), "8221");
    }

    #[test]
    fn untouched_lines_are_borrowed() {
        let table = NumberWordTable::standard();
        assert!(matches!(table.normalize("1abc2"), Cow::Borrowed("1abc2")));
        assert!(matches!(table.normalize(""), Cow::Borrowed("")));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(normalize("One2"), "One2");
    }

    #[test]
    fn non_ascii_text_is_copied_through() {
        assert_eq!(normalize("étwoé"), "é2é");
    }

    #[test]
    fn entry_order_does_not_change_the_result() {
        let reversed =
            NumberWordTable::from_entries(STANDARD_ENTRIES.iter().rev().copied());
        let singles_only = NumberWordTable::from_entries(
            STANDARD_ENTRIES.iter().copied().filter(|(_, r)| r.len() == 1),
        );

        for line in &["twone", "oneight", "eightwothree", "xtwone3four", "zoneight234"] {
            let standard = normalize(line);
            assert_eq!(reversed.normalize(line), standard, "reversed table on {:?}", line);
            // Compounds are implied by positional matching; dropping them
            // still yields the same first and last digit.
            let digits = |s: &str| s.chars().filter(char::is_ascii_digit).collect::<String>();
            assert_eq!(
                digits(&singles_only.normalize(line)).chars().next(),
                digits(&standard).chars().next()
            );
            assert_eq!(
                digits(&singles_only.normalize(line)).chars().last(),
                digits(&standard).chars().last()
            );
        }
    }

    #[test]
    fn standard_table_is_shared() {
        let a = NumberWordTable::standard() as *const _;
        let b = NumberWordTable::standard() as *const _;
        assert_eq!(a, b);
        assert_eq!(NumberWordTable::standard().len(), 17);
    }

    #[test]
    fn empty_patterns_are_dropped() {
        let table = NumberWordTable::from_entries(vec![("", "0"), ("one", "1")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.normalize("xoney"), "x1y");
    }
}
