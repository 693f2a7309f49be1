//! Platform-independent core of the SwiftRead speed-reading trainer.
//!
//! The crate owns the RSVP playback engine ([`session`]), the trainer
//! flow state machine ([`app`]), and the trait seams for everything a
//! host plugs in: materials, settings, quiz generation, history, and
//! input. Nothing here touches a wall clock or does I/O; hosts drive
//! the engine by calling `tick` with a monotonic millisecond timestamp
//! and fulfil collaborator requests out of band.

pub mod app;
pub mod content;
pub mod history;
pub mod input;
pub mod metrics;
pub mod quiz;
pub mod render;
pub mod session;
pub mod settings;
pub mod text_policy;
