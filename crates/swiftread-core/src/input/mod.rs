//! Input abstraction layer.

pub mod mock;

/// Logical actions consumed by the trainer app.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Prev,
    Next,
    Select,
    Back,
    PlayPause,
    Advance,
    Reset,
    SpeedUp,
    SpeedDown,
    ChunkUp,
    ChunkDown,
    ToggleBionic,
    CycleDrill,
    CycleFilter,
    ShowStats,
    Edit,
    Delete,
    ClearHistory,
    Quit,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
