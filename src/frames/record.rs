use crate::foundation::error::{SpriteError, SpriteResult};

/// One packed frame rectangle from the input listing.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRecord {
    /// Frame name as emitted by the packer (e.g. `hero_anim_run_f3`).
    pub name: String,
    /// Left edge in pixels.
    pub x: i64,
    /// Top edge in pixels.
    pub y: i64,
    /// Width of a single frame in pixels.
    pub width: i64,
    /// Height of a single frame in pixels.
    pub height: i64,
    /// 1-based line in the source listing.
    pub line: usize,
}

impl FrameRecord {
    /// Parse one `name x y width height` line.
    ///
    /// Fields are whitespace-separated; anything after the fifth field is ignored.
    pub fn parse_line(line_no: usize, text: &str) -> SpriteResult<Self> {
        let mut fields = text.split_whitespace();
        let name = fields
            .next()
            .ok_or_else(|| SpriteError::parse(line_no, "empty line"))?;

        let mut next_int = |what: &str| -> SpriteResult<i64> {
            let raw = fields
                .next()
                .ok_or_else(|| SpriteError::parse(line_no, format!("missing field '{what}'")))?;
            raw.parse::<i64>().map_err(|e| {
                SpriteError::parse(
                    line_no,
                    format!("field '{what}' = '{raw}' is not an integer: {e}"),
                )
            })
        };

        let x = next_int("x")?;
        let y = next_int("y")?;
        let width = next_int("width")?;
        let height = next_int("height")?;

        Ok(Self {
            name: name.to_string(),
            x,
            y,
            width,
            height,
            line: line_no,
        })
    }
}

/// Parse a whole frame listing.
///
/// Blank lines are skipped and surrounding whitespace (including `\r`) is trimmed.
/// Order is preserved: grouping relies on frames of one sprite being adjacent.
pub fn parse_frames(text: &str) -> SpriteResult<Vec<FrameRecord>> {
    text.lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(idx, l)| FrameRecord::parse_line(idx + 1, l.trim()))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/frames/record.rs"]
mod tests;
