use std::fmt;

use regex::Regex;

use crate::foundation::error::SpriteResult;

/// Clip key used when a naming convention carries no explicit key.
pub const BASE_CLIP_KEY: &str = "base";

/// How a run of frames is interpreted, in classifier priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpriteKind {
    /// `<base>_anim_<key>_f<index>`: one clip per distinct key.
    FullAnimation,
    /// `<base>(_anim)?_f<index>`: a single implicit `base` clip.
    SimpleAnimation,
    /// `<base>_<digit>`: grid sizing only, no clips.
    Variant,
    /// Anything else: one unsliced sprite.
    Default,
}

impl fmt::Display for SpriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SpriteKind::FullAnimation => "animation (full)",
            SpriteKind::SimpleAnimation => "animation (simple)",
            SpriteKind::Variant => "variant",
            SpriteKind::Default => "default",
        })
    }
}

/// Structural pieces extracted from one frame name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameMatch {
    pub kind: SpriteKind,
    /// Name with the naming-convention suffix stripped.
    pub base: String,
    /// Clip key this frame contributes to.
    pub key: String,
    /// Name with only the `_f<index>` marker stripped. A following frame of the same
    /// clip starts with this prefix.
    pub key_prefix: String,
}

/// Compiled frame-name conventions.
///
/// Patterns are suffix-anchored; everything before the match is the base name.
#[derive(Clone, Debug)]
pub struct NamePatterns {
    full: Regex,
    simple: Regex,
    variant: Regex,
}

impl NamePatterns {
    pub fn new() -> SpriteResult<Self> {
        Ok(Self {
            full: compile(r"_anim_(?P<key>\w+)(?P<frame>_f\d+)$")?,
            simple: compile(r"(?:_anim)?(?P<frame>_f\d+)$")?,
            variant: compile(r"_\d$")?,
        })
    }

    /// Apply the conventions in priority order; the first match wins.
    pub fn classify(&self, name: &str) -> NameMatch {
        self.match_kind(SpriteKind::FullAnimation, name)
            .or_else(|| self.match_kind(SpriteKind::SimpleAnimation, name))
            .or_else(|| self.match_kind(SpriteKind::Variant, name))
            .unwrap_or_else(|| NameMatch {
                kind: SpriteKind::Default,
                base: name.to_string(),
                key: BASE_CLIP_KEY.to_string(),
                key_prefix: name.to_string(),
            })
    }

    /// Match `name` against one specific convention.
    ///
    /// `SpriteKind::Default` matches nothing; use [`NamePatterns::classify`] for the fallback.
    pub fn match_kind(&self, kind: SpriteKind, name: &str) -> Option<NameMatch> {
        match kind {
            SpriteKind::FullAnimation => {
                let caps = self.full.captures(name)?;
                let whole = caps.get(0)?;
                let frame = caps.name("frame")?;
                Some(NameMatch {
                    kind,
                    base: name[..whole.start()].to_string(),
                    key: caps.name("key")?.as_str().to_string(),
                    key_prefix: name[..frame.start()].to_string(),
                })
            }
            SpriteKind::SimpleAnimation => {
                let caps = self.simple.captures(name)?;
                let whole = caps.get(0)?;
                let frame = caps.name("frame")?;
                Some(NameMatch {
                    kind,
                    base: name[..whole.start()].to_string(),
                    key: BASE_CLIP_KEY.to_string(),
                    key_prefix: name[..frame.start()].to_string(),
                })
            }
            SpriteKind::Variant => {
                let whole = self.variant.find(name)?;
                Some(NameMatch {
                    kind,
                    base: name[..whole.start()].to_string(),
                    key: BASE_CLIP_KEY.to_string(),
                    key_prefix: name[..whole.start()].to_string(),
                })
            }
            SpriteKind::Default => None,
        }
    }
}

fn compile(pattern: &str) -> SpriteResult<Regex> {
    Ok(Regex::new(pattern).map_err(anyhow::Error::from)?)
}

#[cfg(test)]
#[path = "../../tests/unit/naming/pattern.rs"]
mod tests;
