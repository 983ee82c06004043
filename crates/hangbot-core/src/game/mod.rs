//! Game state machine: pure engine, gallows gallery, and the service
//! that drives both against the persistence and word-source traits.

pub mod engine;
pub mod gallery;
pub mod service;

pub use engine::{GuessOutcome, GuessStep, SessionFate, apply_guess, mask, stage};
pub use gallery::{GALLOWS, stage_art};
pub use service::{GameService, GuessReply, StartReply, StopReply};
