/// Convenience result type used across spritec.
pub type SpriteResult<T> = Result<T, SpriteError>;

/// Top-level error taxonomy used by compiler APIs.
///
/// Only input that cannot be interpreted at all ends up here. Everything the
/// compiler can work around is reported as a [`crate::Diagnostic`] instead.
#[derive(thiserror::Error, Debug)]
pub enum SpriteError {
    /// A frame listing line that could not be parsed.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based source line.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// A sprite whose assembled size does not fit the coordinate range.
    #[error("size error at line {line} ('{name}'): {message}")]
    Size {
        /// 1-based line of the run's first record.
        line: usize,
        /// Base name of the sprite.
        name: String,
        /// Which dimension overflowed.
        message: String,
    },

    /// A sprite name produced twice while duplicates are rejected.
    #[error("duplicate sprite '{name}' at line {line}")]
    Duplicate {
        /// Final base name of the sprite.
        name: String,
        /// 1-based line of the run that collided.
        line: usize,
    },

    /// Invalid playback rule configuration.
    #[error("rules error: {0}")]
    Rules(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpriteError {
    /// Build a [`SpriteError::Parse`] value.
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: msg.into(),
        }
    }

    /// Build a [`SpriteError::Size`] value.
    pub fn size(line: usize, name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Size {
            line,
            name: name.into(),
            message: msg.into(),
        }
    }

    /// Build a [`SpriteError::Rules`] value.
    pub fn rules(msg: impl Into<String>) -> Self {
        Self::Rules(msg.into())
    }

    /// Build a [`SpriteError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
