//! Frame-name conventions emitted by the texture packer.

/// Suffix patterns and the priority-ordered classifier.
pub mod pattern;
