//! Terminal platform layer for the trainer.
//!
//! Implements the core's input, persistence, and collaborator seams
//! over a desktop stack: crossterm keyboard events, ratatui screen
//! painters, JSON files for settings and history, and blocking HTTP
//! for the material catalog and question generation.

pub mod input;
pub mod net;
pub mod render;
pub mod storage;
