//! App-level view models handed to renderers.
//!
//! Renderers read these borrowed snapshots and draw; they never hold
//! state of their own and never feed back into the engine.

use crate::{
    history::{HistorySummary, SessionRecord},
    metrics::SessionOutcome,
    session::PlaybackPhase,
    settings::ReadingDrill,
};

/// One library card.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialItemView<'a> {
    pub title: &'a str,
    pub category: &'static str,
    pub difficulty: &'static str,
    pub word_count: usize,
    pub preview: String,
}

#[derive(Debug)]
pub enum Screen<'a> {
    Library {
        app_title: &'a str,
        items: &'a [MaterialItemView<'a>],
        cursor: usize,
        /// Active category filter label, `None` when showing all.
        filter: Option<&'static str>,
    },
    Reading {
        title: Option<&'a str>,
        chunk: &'a str,
        phase: PlaybackPhase,
        progress_percent: f32,
        live_seconds: u32,
        words_shown: usize,
        word_total: usize,
        wpm: u32,
        chunk_size: usize,
        font_size: u16,
        bionic: bool,
        drill: ReadingDrill,
    },
    /// Completion card shown once playback reaches the end.
    Finished {
        title: Option<&'a str>,
        outcome: SessionOutcome,
        word_total: usize,
    },
    /// Questions are being generated for the finished text.
    QuizLoading,
    Quiz {
        index: usize,
        total: usize,
        question: &'a str,
        options: &'a [String],
        cursor: usize,
    },
    Stats {
        summary: HistorySummary,
        records: &'a [SessionRecord],
    },
}
