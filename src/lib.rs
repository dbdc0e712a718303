//! spritec compiles a packed sprite-sheet frame listing into an animation atlas.
//!
//! The input is the line-oriented output of a texture packer, one frame per line:
//!
//! ```text
//! hero_anim_idle_f0 0 0 16 28
//! hero_anim_idle_f1 16 0 16 28
//! coin_f0 0 28 8 8
//! rock 32 28 16 16
//! ```
//!
//! The output is a JSON object keyed by sprite base name, describing each sprite's
//! rectangle, its grid slicing and its named animation clips.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: text -> `Vec<FrameRecord>` (the only fatal input errors)
//! 2. **Classify**: each run's first frame name picks a convention
//!    (full animation, simple animation, variant, default)
//! 3. **Group**: the run is consumed from a [`FrameStream`], building clip ranges and
//!    slice counts ([`ClipGrouper`])
//! 4. **Assemble**: entries are collected into an [`Atlas`] and serialized
//!
//! Everything the compiler can work around is returned as a [`Diagnostic`] next to the
//! atlas rather than failing the run.
//!
//! Frames of one sprite must be adjacent in the listing; the compiler relies on
//! adjacency, not on a global grouping pass.
#![forbid(unsafe_code)]

mod atlas;
mod foundation;
mod frames;
mod grouping;
mod naming;
mod playback;

pub use atlas::assembler::{
    AtlasCompiler, CompileOptions, CompileOutput, DuplicatePolicy, compile_str,
};
pub use atlas::model::{Atlas, ClipRange, SpriteEntry};
pub use foundation::diagnostics::{Axis, Diagnostic, DiagnosticKind, Diagnostics, Level};
pub use foundation::error::{SpriteError, SpriteResult};
pub use frames::record::{FrameRecord, parse_frames};
pub use frames::stream::FrameStream;
pub use grouping::clips::{ClipGrouper, GroupedRun};
pub use grouping::slices::{Decrease, SliceTracker};
pub use naming::pattern::{BASE_CLIP_KEY, NameMatch, NamePatterns, SpriteKind};
pub use playback::rules::{Playback, PlaybackRules};
