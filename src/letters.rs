//! Letter histogram

use crate::flatten::FileMap;
use std::collections::HashMap;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Occurrence count per lowercased letter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: HashMap<char, u64>,
}

impl LetterCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the letters of every file's text.
    pub fn from_files(files: &FileMap) -> Self {
        let mut counts = Self::new();
        for text in files.values() {
            counts.add_text(text);
        }
        counts
    }

    /// Add one text to the histogram.
    ///
    /// Newlines and spaces are dropped, the rest is lowercased one character
    /// at a time and only letters are counted.
    pub fn add_text(&mut self, text: &str) {
        let stripped = text.replace(['\n', ' '], "");
        for c in stripped.chars().flat_map(char::to_lowercase).filter(|c| is_letter(*c)) {
            *self.counts.entry(c).or_insert(0) += 1;
        }
    }

    pub fn get(&self, letter: char) -> u64 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries ordered by count, most frequent first.
    ///
    /// Equal counts fall back to character order so output is reproducible.
    pub fn sorted(&self) -> Vec<(char, u64)> {
        let mut entries: Vec<(char, u64)> = self.counts.iter().map(|(c, n)| (*c, *n)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }
}

/// True for the Unicode letter categories Lu, Ll, Lt, Lm and Lo.
///
/// Combining marks and letter-like numerals are not letters.
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}
