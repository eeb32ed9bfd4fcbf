use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::config::Validate;

use super::settings::HIGH_SCORE_LIMIT;

const DATE_LABEL_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u32,
    pub date: String,
}

impl HighScoreEntry {
    pub fn new(score: u32, date: impl Into<String>) -> Self {
        Self {
            score,
            date: date.into(),
        }
    }
}

impl Validate for HighScoreEntry {
    fn validate(&self) -> Result<(), String> {
        if self.date.trim().is_empty() {
            return Err(format!("Entry with score {} has no date", self.score));
        }
        Ok(())
    }
}

/// Today's date in the label format stored with each entry.
pub fn local_date_label() -> String {
    Local::now().format(DATE_LABEL_FORMAT).to_string()
}

/// Top scores, best first, at most `HIGH_SCORE_LIMIT` entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighScoreTable {
    entries: Vec<HighScoreEntry>,
}

impl HighScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<HighScoreEntry>) -> Self {
        let mut table = Self { entries };
        table.normalize();
        table
    }

    /// Adds `entry` and returns its 1-based rank, or `None` if it fell off
    /// the end. Equal scores keep their existing order, so a newcomer ranks
    /// below an older entry with the same score.
    pub fn record(&mut self, entry: HighScoreEntry) -> Option<usize> {
        self.entries.push(entry);
        let new_index = self.entries.len() - 1;

        let mut indexed: Vec<(usize, HighScoreEntry)> = self.entries.drain(..).enumerate().collect();
        indexed.sort_by(|(_, a), (_, b)| b.score.cmp(&a.score));
        indexed.truncate(HIGH_SCORE_LIMIT);

        let rank = indexed
            .iter()
            .position(|(index, _)| *index == new_index)
            .map(|position| position + 1);
        self.entries = indexed.into_iter().map(|(_, entry)| entry).collect();
        rank
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(HIGH_SCORE_LIMIT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(score: u32) -> HighScoreEntry {
        HighScoreEntry::new(score, "19.10.2026")
    }

    fn is_sorted_descending(table: &HighScoreTable) -> bool {
        table.entries().windows(2).all(|pair| pair[0].score >= pair[1].score)
    }

    #[test]
    fn test_record_into_empty_table() {
        let mut table = HighScoreTable::new();
        let rank = table.record(entry(50));
        assert_eq!(rank, Some(1));
        assert_eq!(table.entries(), &[entry(50)]);
    }

    #[test]
    fn test_record_keeps_descending_order() {
        let mut table = HighScoreTable::new();
        for score in [30, 90, 10, 60] {
            table.record(entry(score));
        }
        let scores: Vec<u32> = table.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![90, 60, 30, 10]);
    }

    #[test]
    fn test_low_score_does_not_enter_full_table() {
        let mut table = HighScoreTable::from_entries(vec![entry(100); 10]);
        let before = table.clone();

        let rank = table.record(entry(5));

        assert_eq!(rank, None);
        assert_eq!(table, before);
    }

    #[test]
    fn test_tie_ranks_after_existing_entry() {
        let mut table = HighScoreTable::from_entries(vec![
            HighScoreEntry::new(40, "01.01.2026"),
            HighScoreEntry::new(20, "02.01.2026"),
        ]);

        let rank = table.record(HighScoreEntry::new(40, "19.10.2026"));

        assert_eq!(rank, Some(2));
        assert_eq!(table.entries()[0].date, "01.01.2026");
        assert_eq!(table.entries()[1].date, "19.10.2026");
    }

    #[test]
    fn test_tie_with_full_table_of_equal_scores_is_dropped() {
        let mut table = HighScoreTable::from_entries(vec![entry(100); 10]);
        assert_eq!(table.record(entry(100)), None);
        assert_eq!(table.len(), 10);
    }

    #[test]
    fn test_high_score_pushes_out_lowest() {
        let initial: Vec<HighScoreEntry> = (1..=10).map(|i| entry(i * 10)).collect();
        let mut table = HighScoreTable::from_entries(initial);

        let rank = table.record(entry(55));

        assert_eq!(rank, Some(6));
        assert_eq!(table.len(), 10);
        assert_eq!(table.entries().last().unwrap().score, 20);
        assert!(is_sorted_descending(&table));
    }

    #[test]
    fn test_from_entries_normalizes_unsorted_oversized_input() {
        let raw: Vec<HighScoreEntry> = (0..15).map(|i| entry(i * 7 % 50)).collect();
        let table = HighScoreTable::from_entries(raw);
        assert_eq!(table.len(), 10);
        assert!(is_sorted_descending(&table));
    }

    #[test]
    fn test_table_never_exceeds_limit() {
        let mut table = HighScoreTable::new();
        for score in 0..40 {
            table.record(entry(score * 13 % 97));
            assert!(table.len() <= HIGH_SCORE_LIMIT);
            assert!(is_sorted_descending(&table));
        }
    }

    #[test]
    fn test_local_date_label_format() {
        let label = local_date_label();
        let parts: Vec<&str> = label.split('.').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 2);
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[2].len(), 4);
    }

    #[test]
    fn test_entry_without_date_is_invalid() {
        assert!(HighScoreEntry::new(10, " ").validate().is_err());
        assert!(entry(10).validate().is_ok());
    }
}
