//! Trainer flow state machine: library, reading, quiz, stats.
//!
//! The app owns one session's worth of state and mutates it only
//! through named transitions driven by [`InputEvent`]s and `tick`
//! polls. Collaborator work (quiz generation, history persistence,
//! material deletion) is surfaced as one-shot requests the host takes,
//! fulfils out of band, and answers back; collaborator failure reaches
//! the app only as an empty result.

use log::{debug, warn};

use crate::{
    content::{Category, Material, count_words},
    history::{HistorySummary, SessionRecord},
    input::{InputEvent, InputProvider},
    metrics::SessionOutcome,
    quiz::{QuizQuestion, QuizRun},
    render::{MaterialItemView, Screen},
    session::{PlaybackPhase, ReadingSession, SessionTick},
    settings::{MAX_WPM, MIN_WPM, TrainerSettings, WPM_STEP},
    text_policy::{PREVIEW_MAX_CHARS, preview_excerpt, step_chunk_size},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// One-shot request to generate comprehension questions for a finished
/// text.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizRequest {
    pub text_id: String,
    pub content: String,
}

/// Completed reading-plus-quiz session, handed to the host exactly
/// once for history recording.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletedSession {
    pub wpm: u32,
    pub comprehension_score: u8,
    pub duration_seconds: f64,
    pub text_id: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum UiState {
    Library { cursor: usize },
    Reading { material: usize },
    Quiz { material: usize },
    Stats,
}

pub struct TrainerApp<IN: InputProvider> {
    input: IN,
    app_title: &'static str,
    settings: TrainerSettings,
    materials: Vec<Material>,
    records: Vec<SessionRecord>,
    filter: Option<Category>,
    ui: UiState,
    session: Option<ReadingSession>,
    quiz: Option<QuizRun>,
    quiz_cursor: usize,
    /// Outcome stashed when the quiz starts, merged with the score into
    /// the completed-session record.
    finished_outcome: Option<SessionOutcome>,
    pending_quiz: Option<QuizRequest>,
    pending_result: Option<CompletedSession>,
    pending_update: Option<Material>,
    pending_delete: Option<String>,
    pending_history_clear: bool,
    pending_redraw: bool,
    exit_requested: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
