//! Controller layer: UI events, event queueing, and transition status.

pub mod events;
pub mod orchestration;
