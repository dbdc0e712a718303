//! Turning a contiguous run of frames into one sprite entry.

/// Clip range construction, wraparound correction and sizing.
pub mod clips;
/// Distinct-offset tracking per axis.
pub mod slices;
