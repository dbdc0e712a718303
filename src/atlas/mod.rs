//! Output atlas model and the end-to-end compiler driver.

/// Stream driver: classification, grouping, duplicate handling.
pub mod assembler;
/// Serializable atlas types.
pub mod model;
