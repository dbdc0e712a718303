//! Clip playback parameters (speed, looping).

/// Clip-key and per-sprite rule tables.
pub mod rules;
