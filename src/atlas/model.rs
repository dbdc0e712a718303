use std::collections::BTreeMap;

use crate::{
    foundation::error::{SpriteError, SpriteResult},
    playback::rules::{Playback, serialize_speed},
};

/// A named frame-index interval within one sprite's grid.
///
/// `from`/`to` are zero-based and inclusive.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClipRange {
    pub from: usize,
    pub to: usize,
    #[serde(
        default,
        serialize_with = "serialize_speed",
        skip_serializing_if = "Option::is_none"
    )]
    pub speed: Option<f64>,
    #[serde(default, rename = "loop", skip_serializing_if = "Option::is_none")]
    pub looping: Option<bool>,
}

impl ClipRange {
    /// Single-frame clip at `index`.
    pub fn at(index: usize) -> Self {
        Self {
            from: index,
            to: index,
            speed: None,
            looping: None,
        }
    }

    pub fn apply(&mut self, playback: Playback) {
        self.speed = playback.speed;
        self.looping = playback.looping;
    }

    pub fn playback(&self) -> Playback {
        Playback {
            speed: self.speed,
            looping: self.looping,
        }
    }
}

/// Output descriptor for one sprite.
///
/// For grids, `width`/`height` cover the whole multi-frame block rather than one cell.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpriteEntry {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    #[serde(
        default,
        rename = "sliceX",
        skip_serializing_if = "Option::is_none"
    )]
    pub slice_x: Option<usize>,
    #[serde(
        default,
        rename = "sliceY",
        skip_serializing_if = "Option::is_none"
    )]
    pub slice_y: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anims: Option<BTreeMap<String, ClipRange>>,
}

impl SpriteEntry {
    /// A 1x1 entry covering a single frame rectangle.
    pub fn single(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            slice_x: None,
            slice_y: None,
            anims: None,
        }
    }

    /// Clip `key`, if the entry has one.
    pub fn anim(&self, key: &str) -> Option<&ClipRange> {
        self.anims.as_ref()?.get(key)
    }
}

/// Final compiler output: base sprite name -> entry.
///
/// Keys serialize in sorted order so output is stable across runs.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Atlas {
    sprites: BTreeMap<String, SpriteEntry>,
}

impl Atlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entry`, returning the entry it replaced, if any.
    pub fn insert(&mut self, name: impl Into<String>, entry: SpriteEntry) -> Option<SpriteEntry> {
        self.sprites.insert(name.into(), entry)
    }

    pub fn get(&self, name: &str) -> Option<&SpriteEntry> {
        self.sprites.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sprites.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SpriteEntry)> {
        self.sprites.iter()
    }

    /// Compact JSON (no indentation).
    pub fn to_json(&self) -> SpriteResult<String> {
        serde_json::to_string(self).map_err(|e| SpriteError::serde(e.to_string()))
    }

    pub fn from_json_str(s: &str) -> SpriteResult<Self> {
        serde_json::from_str(s).map_err(|e| SpriteError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/atlas/model.rs"]
mod tests;
