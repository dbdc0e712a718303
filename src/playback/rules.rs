use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use crate::foundation::error::{SpriteError, SpriteResult};

/// Playback parameters attached to a clip.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Playback {
    /// Frames per second.
    #[serde(
        default,
        serialize_with = "serialize_speed",
        skip_serializing_if = "Option::is_none"
    )]
    pub speed: Option<f64>,
    /// Restart after the last frame.
    #[serde(default, rename = "loop", skip_serializing_if = "Option::is_none")]
    pub looping: Option<bool>,
}

impl Playback {
    pub const fn new(speed: f64, looping: bool) -> Self {
        Self {
            speed: Some(speed),
            looping: Some(looping),
        }
    }
}

/// Whole speeds are written as JSON integers (`3`, not `3.0`).
pub(crate) fn serialize_speed<S: serde::Serializer>(
    speed: &Option<f64>,
    s: S,
) -> Result<S::Ok, S::Error> {
    // Integers up to 2^53 round-trip exactly through f64.
    const EXACT: f64 = 9_007_199_254_740_992.0;
    match *speed {
        Some(v) if v.fract() == 0.0 && v.abs() <= EXACT => s.serialize_some(&(v as i64)),
        Some(v) => s.serialize_some(&v),
        None => s.serialize_none(),
    }
}

/// Two rule sets mapping clips to playback parameters.
///
/// Lookup precedence for `(sprite, key)`:
/// 1. `sprites[sprite][key]`
/// 2. `clips[key]`
/// 3. unhandled
///
/// JSON form:
///
/// ```json
/// { "clips": { "idle": { "speed": 3, "loop": true } },
///   "sprites": { "coin": { "base": { "loop": true } } } }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaybackRules {
    /// Clip key -> playback.
    #[serde(default)]
    pub clips: BTreeMap<String, Playback>,
    /// Sprite base name -> clip key -> playback.
    #[serde(default)]
    pub sprites: BTreeMap<String, BTreeMap<String, Playback>>,
}

impl Default for PlaybackRules {
    fn default() -> Self {
        let clips = [
            ("idle", Playback::new(3.0, true)),
            ("run", Playback::new(10.0, true)),
            ("open", Playback::new(20.0, false)),
            ("close", Playback::new(20.0, false)),
            ("hit", Playback::new(20.0, false)),
        ]
        .into_iter()
        .map(|(k, p)| (k.to_string(), p))
        .collect();

        let mut sprites = BTreeMap::new();
        sprites.insert(
            "coin".to_string(),
            BTreeMap::from([(
                "base".to_string(),
                Playback {
                    speed: None,
                    looping: Some(true),
                },
            )]),
        );

        Self { clips, sprites }
    }
}

impl PlaybackRules {
    /// Rule set that resolves nothing.
    pub fn empty() -> Self {
        Self {
            clips: BTreeMap::new(),
            sprites: BTreeMap::new(),
        }
    }

    /// Resolve playback for clip `key` of sprite `sprite`.
    pub fn resolve(&self, sprite: &str, key: &str) -> Option<Playback> {
        self.sprites
            .get(sprite)
            .and_then(|by_key| by_key.get(key))
            .or_else(|| self.clips.get(key))
            .copied()
    }

    /// Load a JSON rule file. Tables missing from the file are empty.
    pub fn from_path(path: impl AsRef<Path>) -> SpriteResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SpriteError::rules(format!("open rules JSON '{}': {e}", path.display()))
        })?;
        let rules: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            SpriteError::rules(format!("parse rules JSON '{}': {e}", path.display()))
        })?;
        rules.validate()?;
        Ok(rules)
    }

    /// Parse rules from a JSON string.
    pub fn from_json_str(s: &str) -> SpriteResult<Self> {
        let rules: Self = serde_json::from_str(s)
            .map_err(|e| SpriteError::rules(format!("parse rules JSON: {e}")))?;
        rules.validate()?;
        Ok(rules)
    }

    /// Reject speeds that are not finite and positive.
    pub fn validate(&self) -> SpriteResult<()> {
        let all = self
            .clips
            .iter()
            .map(|(k, p)| (String::new(), k, p))
            .chain(self.sprites.iter().flat_map(|(sprite, by_key)| {
                by_key.iter().map(move |(k, p)| (format!("{sprite}/"), k, p))
            }));

        for (scope, key, p) in all {
            if let Some(speed) = p.speed
                && (!speed.is_finite() || speed <= 0.0)
            {
                return Err(SpriteError::rules(format!(
                    "speed for '{scope}{key}' must be finite and > 0, got {speed}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/rules.rs"]
mod tests;
