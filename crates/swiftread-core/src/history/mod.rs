//! Practice history: per-session records, the append-only store seam,
//! and derived progress statistics.

use serde::{Deserialize, Serialize};

/// One completed reading-plus-quiz session. `date` is a preformatted
/// display string supplied by the host; the core never reads a clock.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub date: String,
    pub wpm: u32,
    #[serde(rename = "comprehensionScore")]
    pub comprehension_score: u8,
    #[serde(rename = "durationSeconds")]
    pub duration_seconds: f64,
    #[serde(rename = "textId")]
    pub text_id: String,
}

/// Append-only history backend.
pub trait HistoryStore {
    type Error;

    fn load(&mut self) -> Result<Vec<SessionRecord>, Self::Error>;
    fn append(&mut self, record: &SessionRecord) -> Result<(), Self::Error>;
    fn clear(&mut self) -> Result<(), Self::Error>;
}

/// Aggregate view over a record slice for the stats screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HistorySummary {
    pub avg_wpm: u32,
    pub avg_score: u8,
    pub total_minutes: u32,
    pub best_wpm: u32,
}

impl HistorySummary {
    pub fn from_records(records: &[SessionRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let count = records.len() as f64;
        let wpm_sum: u32 = records.iter().map(|r| r.wpm).sum();
        let score_sum: u32 = records.iter().map(|r| u32::from(r.comprehension_score)).sum();
        let total_seconds: f64 = records.iter().map(|r| r.duration_seconds).sum();

        Self {
            avg_wpm: (f64::from(wpm_sum) / count).round() as u32,
            avg_score: (f64::from(score_sum) / count).round() as u8,
            total_minutes: (total_seconds / 60.0).round() as u32,
            best_wpm: records.iter().map(|r| r.wpm).max().unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests;
