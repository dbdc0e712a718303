use std::fmt;

use crate::naming::pattern::SpriteKind;

/// Severity of a [`Diagnostic`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Progress information (which branch a sprite took).
    Info,
    /// Best-effort correction was applied.
    Warn,
    /// Suspicious input; output was produced anyway.
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        })
    }
}

/// Pixel axis of a frame offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal offset (`x`).
    X,
    /// Vertical offset (`y`).
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}

/// What a [`Diagnostic`] is about.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A run was classified and consumed.
    Classified {
        /// Branch taken by the classifier.
        sprite_kind: SpriteKind,
        /// Records consumed by the run.
        frames: usize,
    },
    /// A frame offset smaller than one already seen for the same run.
    DecreasingCoordinate {
        /// Axis the offset was observed on.
        axis: Axis,
        /// Offending offset.
        value: i64,
        /// Smallest offset recorded before it.
        min: i64,
    },
    /// A clip ran past the grid's column count and was reinterpreted.
    Wraparound {
        /// Clip key.
        key: String,
        /// Corrected start index.
        from: usize,
        /// Corrected end index.
        to: usize,
    },
    /// A record sharing the run's base name but not its naming convention.
    /// The run ends before it and the record starts a sprite of its own.
    RunBreak {
        /// Name of the record that ended the run.
        name: String,
    },
    /// A clip key with no playback rule.
    UnhandledClip {
        /// Clip key.
        key: String,
    },
    /// The sprite name was already present in the atlas.
    DuplicateName,
    /// The sprite's frames are split across non-adjacent runs.
    NonContiguous {
        /// Line of the earlier run.
        first_line: usize,
    },
}

impl DiagnosticKind {
    /// Severity implied by the diagnostic kind.
    pub fn level(&self) -> Level {
        match self {
            DiagnosticKind::Classified { .. } => Level::Info,
            DiagnosticKind::Wraparound { .. } => Level::Warn,
            DiagnosticKind::DecreasingCoordinate { .. }
            | DiagnosticKind::RunBreak { .. }
            | DiagnosticKind::UnhandledClip { .. }
            | DiagnosticKind::DuplicateName
            | DiagnosticKind::NonContiguous { .. } => Level::Error,
        }
    }
}

/// An advisory message produced while compiling an atlas.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Diagnostic {
    /// Severity.
    pub level: Level,
    /// 1-based input line the diagnostic refers to.
    pub line: usize,
    /// Base sprite name involved.
    pub sprite: String,
    /// Details.
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Build a diagnostic whose level follows from `kind`.
    pub fn new(line: usize, sprite: impl Into<String>, kind: DiagnosticKind) -> Self {
        Self {
            level: kind.level(),
            line,
            sprite: sprite.into(),
            kind,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sprite = &self.sprite;
        match &self.kind {
            DiagnosticKind::Classified {
                sprite_kind,
                frames,
            } => write!(f, "{sprite_kind}: {sprite}: {frames}"),
            DiagnosticKind::DecreasingCoordinate { axis, value, min } => write!(
                f,
                "unexpected decreasing {axis} in {sprite}: {value} < {min}"
            ),
            DiagnosticKind::Wraparound { key, from, to } => write!(
                f,
                "clip wraps past grid row: {sprite}[{key}] reinterpreted as {from}..{to}"
            ),
            DiagnosticKind::RunBreak { name } => {
                write!(f, "frame breaks naming of {sprite}: {name}")
            }
            DiagnosticKind::UnhandledClip { key } => {
                write!(f, "unhandled animation: {sprite}[{key}]")
            }
            DiagnosticKind::DuplicateName => write!(f, "duplicate sprite: {sprite}"),
            DiagnosticKind::NonContiguous { first_line } => write!(
                f,
                "non-contiguous frames: {sprite} (earlier run at line {first_line})"
            ),
        }
    }
}

/// Ordered collection of diagnostics for one compiler run.
///
/// Every pushed diagnostic is also emitted as a `tracing` event.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Record `diag` and forward it to `tracing` at its level.
    pub fn push(&mut self, diag: Diagnostic) {
        match diag.level {
            Level::Info => tracing::info!(line = diag.line, "{diag}"),
            Level::Warn => tracing::warn!(line = diag.line, "{diag}"),
            Level::Error => tracing::error!(line = diag.line, "{diag}"),
        }
        self.items.push(diag);
    }

    /// Shorthand for `push(Diagnostic::new(..))`.
    pub fn report(&mut self, line: usize, sprite: &str, kind: DiagnosticKind) {
        self.push(Diagnostic::new(line, sprite, kind));
    }

    /// Diagnostics recorded so far, in emission order.
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    /// Number of diagnostics at `level`.
    pub fn count(&self, level: Level) -> usize {
        self.items.iter().filter(|d| d.level == level).count()
    }

    /// Consume the collector.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/diagnostics.rs"]
mod tests;
