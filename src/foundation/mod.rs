//! Error taxonomy and the advisory diagnostics model.

/// Diagnostics returned alongside a compiled atlas.
pub mod diagnostics;
/// Fatal errors.
pub mod error;
