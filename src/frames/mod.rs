//! Frame listing input: line parsing and the cursor the compiler walks.

/// `name x y width height` records.
pub mod record;
/// Peekable, rewindable cursor over parsed records.
pub mod stream;
