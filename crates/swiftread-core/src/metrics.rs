//! Post-session throughput metrics.

/// Result of one completed playback, derived once at the finish
/// transition and immutable afterwards.
///
/// `actual_wpm` reflects true throughput over the wall-clock span from
/// first play to finish, pauses included, and is distinct from the
/// target WPM parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionOutcome {
    pub actual_wpm: u32,
    pub duration_seconds: f64,
}

impl SessionOutcome {
    pub fn from_elapsed(token_count: usize, duration_seconds: f64) -> Self {
        let minutes = duration_seconds / 60.0;
        let actual_wpm = if minutes <= 0.0 {
            0
        } else {
            (token_count as f64 / minutes).round() as u32
        };

        Self {
            actual_wpm,
            duration_seconds,
        }
    }
}
