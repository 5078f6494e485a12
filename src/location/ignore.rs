//! Words dropped from the candidate list before resolution.
//!
//! One word per line, compared case-insensitively.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    words: HashSet<String>,
}

impl IgnoreList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(Self::new(data.lines()))
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.words.contains(&candidate.trim().to_lowercase())
    }

    /// Keeps every candidate not on the list, in order, duplicates included.
    pub fn filter<S: AsRef<str>>(&self, candidates: &[S]) -> Vec<String> {
        candidates
            .iter()
            .map(|c| c.as_ref())
            .filter(|c| !self.contains(c))
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
