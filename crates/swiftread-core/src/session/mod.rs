//! RSVP playback engine: chunk scheduling, the play/pause/finish state
//! machine, and elapsed-time accounting.
//!
//! The session never looks at a wall clock. Hosts poll [`ReadingSession::tick`]
//! with a monotonic millisecond timestamp; the scheduler is an explicit
//! single-shot deadline (`next_tick_ms`) that re-arms itself after each
//! advance. There is at most one pending deadline at any time, and every
//! transition out of `Playing` clears it before applying the new state,
//! so a stale poll can never advance against old position data.

use log::debug;

use crate::{content::tokenize, metrics::SessionOutcome};

/// Floor applied to the WPM target when computing the inter-chunk
/// delay, preventing division degeneracy and absurdly long waits.
const WPM_FLOOR: u32 = 10;
const LIVE_CLOCK_STEP_MS: u64 = 1_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackPhase {
    Idle,
    Playing,
    Paused,
    Finished,
}

/// Outcome of a single `tick` poll.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionTick {
    /// Nothing visible changed.
    Unchanged,
    /// The visible chunk or live clock moved; a redraw is warranted.
    Changed,
    /// This poll drove the session into `Finished`.
    Finished,
}

/// One reading session over an immutable token sequence.
///
/// All mutation goes through the named transitions below; derived
/// values (current chunk, progress) are recomputed on demand from
/// `(tokens, position, chunk_size)` and never cached.
pub struct ReadingSession {
    tokens: Vec<String>,
    position: usize,
    wpm: u32,
    chunk_size: usize,
    phase: PlaybackPhase,
    /// Deadline of the one outstanding scheduled advance.
    next_tick_ms: Option<u64>,
    /// Deadline of the 1-second live display clock. Display only; has
    /// no effect on position or totals.
    next_second_ms: Option<u64>,
    /// Wall-clock start, recorded once at the first play from position
    /// zero and kept across pauses.
    started_at_ms: Option<u64>,
    live_seconds: u32,
    outcome: Option<SessionOutcome>,
}

impl ReadingSession {
    pub fn new(text: &str, wpm: u32, chunk_size: usize) -> Self {
        Self {
            tokens: tokenize(text),
            position: 0,
            wpm,
            chunk_size,
            phase: PlaybackPhase::Idle,
            next_tick_ms: None,
            next_second_ms: None,
            started_at_ms: None,
            live_seconds: 0,
            outcome: None,
        }
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn live_seconds(&self) -> u32 {
        self.live_seconds
    }

    /// Metrics frozen at the finish transition, `None` until then.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        self.outcome
    }

    /// Takes effect when the next deadline is armed; the in-flight one
    /// is left alone.
    pub fn set_wpm(&mut self, wpm: u32) {
        self.wpm = wpm;
    }

    pub fn set_chunk_size(&mut self, chunk_size: usize) {
        self.chunk_size = chunk_size;
    }

    /// Delay between scheduled advances: the time `chunk_size` words
    /// take at the WPM target, with both parameters floored rather than
    /// rejected.
    pub fn chunk_delay_ms(&self) -> u64 {
        60_000 * self.effective_chunk() as u64 / u64::from(self.wpm.max(WPM_FLOOR))
    }

    /// Space-joined text of the chunk at the current position, clamped
    /// to the end of the token sequence.
    pub fn current_chunk(&self) -> String {
        let end = self.words_shown();
        self.tokens[self.position.min(end)..end].join(" ")
    }

    /// Index one past the last visible token.
    pub fn words_shown(&self) -> usize {
        (self.position + self.effective_chunk()).min(self.tokens.len())
    }

    pub fn progress_percent(&self) -> f32 {
        if self.tokens.is_empty() {
            0.0
        } else {
            self.position as f32 / self.tokens.len() as f32 * 100.0
        }
    }

    /// `Idle`/`Paused` -> `Playing`. Arms the advance deadline and the
    /// live clock; records the start timestamp on the first play from
    /// position zero. Resuming from a pause keeps the original start so
    /// the final wall-clock span includes paused time. An empty token
    /// sequence finishes instantly.
    pub fn play(&mut self, now_ms: u64) {
        match self.phase {
            PlaybackPhase::Idle | PlaybackPhase::Paused => {}
            PlaybackPhase::Playing | PlaybackPhase::Finished => return,
        }

        if self.started_at_ms.is_none() && self.position == 0 {
            self.started_at_ms = Some(now_ms);
            self.live_seconds = 0;
        }

        if self.tokens.is_empty() {
            self.finish(now_ms);
            return;
        }

        self.phase = PlaybackPhase::Playing;
        self.next_tick_ms = Some(now_ms + self.chunk_delay_ms());
        self.next_second_ms = Some(now_ms + LIVE_CLOCK_STEP_MS);
    }

    /// `Playing` -> `Paused`. Cancels both deadlines; position and the
    /// start timestamp are untouched.
    pub fn pause(&mut self) {
        if self.phase != PlaybackPhase::Playing {
            return;
        }

        self.phase = PlaybackPhase::Paused;
        self.next_tick_ms = None;
        self.next_second_ms = None;
    }

    /// Any state -> `Idle`. Clears position, clock, and deadlines.
    /// Idempotent.
    pub fn reset(&mut self) {
        self.position = 0;
        self.phase = PlaybackPhase::Idle;
        self.next_tick_ms = None;
        self.next_second_ms = None;
        self.started_at_ms = None;
        self.live_seconds = 0;
        self.outcome = None;
    }

    /// Manual skip-forward. Cancels the pending scheduled advance
    /// first, then performs the same position update a scheduled tick
    /// would; the playback phase is unchanged unless the end is
    /// reached.
    pub fn advance(&mut self, now_ms: u64) -> SessionTick {
        if self.phase == PlaybackPhase::Finished {
            return SessionTick::Unchanged;
        }

        self.next_tick_ms = None;
        self.advance_position(now_ms)
    }

    /// Poll the scheduler. Fires the scheduled advance and the live
    /// clock when their deadlines have passed; a no-op outside
    /// `Playing`.
    pub fn tick(&mut self, now_ms: u64) -> SessionTick {
        if self.phase != PlaybackPhase::Playing {
            return SessionTick::Unchanged;
        }

        let mut changed = false;

        if let Some(due) = self.next_second_ms
            && now_ms >= due
        {
            self.live_seconds += 1;
            self.next_second_ms = Some(due + LIVE_CLOCK_STEP_MS);
            changed = true;
        }

        if let Some(due) = self.next_tick_ms
            && now_ms >= due
        {
            self.next_tick_ms = None;
            return match self.advance_position(now_ms) {
                SessionTick::Finished => SessionTick::Finished,
                _ => SessionTick::Changed,
            };
        }

        if changed {
            SessionTick::Changed
        } else {
            SessionTick::Unchanged
        }
    }

    /// Advance by one chunk, clamped to the sequence length. Reaching
    /// the end triggers the finish transition; otherwise a new deadline
    /// is armed only while playing. Callers must have cleared the
    /// pending deadline already.
    fn advance_position(&mut self, now_ms: u64) -> SessionTick {
        let next = (self.position + self.effective_chunk()).min(self.tokens.len());
        self.position = next;

        if next == self.tokens.len() {
            self.finish(now_ms);
            return SessionTick::Finished;
        }

        if self.phase == PlaybackPhase::Playing {
            self.next_tick_ms = Some(now_ms + self.chunk_delay_ms());
        }

        SessionTick::Changed
    }

    /// -> `Finished`. Cancels both deadlines and freezes the total from
    /// the wall-clock span since the first play; the live tick counter
    /// is the fallback when playback never started from zero.
    fn finish(&mut self, now_ms: u64) {
        self.phase = PlaybackPhase::Finished;
        self.next_tick_ms = None;
        self.next_second_ms = None;

        let total_seconds = match self.started_at_ms {
            Some(started) => now_ms.saturating_sub(started) as f64 / 1_000.0,
            None => f64::from(self.live_seconds),
        };
        let outcome = SessionOutcome::from_elapsed(self.tokens.len(), total_seconds);
        debug!(
            "session finished: {} words in {:.1}s ({} wpm)",
            self.tokens.len(),
            outcome.duration_seconds,
            outcome.actual_wpm
        );
        self.outcome = Some(outcome);
    }

    fn effective_chunk(&self) -> usize {
        self.chunk_size.max(1)
    }
}

#[cfg(test)]
mod tests;
