use std::collections::BTreeMap;

use crate::{
    atlas::model::{ClipRange, SpriteEntry},
    foundation::{
        diagnostics::{Axis, DiagnosticKind, Diagnostics},
        error::{SpriteError, SpriteResult},
    },
    frames::{record::FrameRecord, stream::FrameStream},
    grouping::slices::SliceTracker,
    naming::pattern::{NameMatch, NamePatterns, SpriteKind},
    playback::rules::PlaybackRules,
};

/// One sprite assembled from a contiguous run of frames.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupedRun {
    /// Reduced base name; the atlas key.
    pub base: String,
    pub entry: SpriteEntry,
    /// Records consumed from the stream.
    pub frames: usize,
}

/// Consumes the run of frames that share `head`'s reduced base name.
pub struct ClipGrouper<'a> {
    patterns: &'a NamePatterns,
    rules: &'a PlaybackRules,
}

impl<'a> ClipGrouper<'a> {
    pub fn new(patterns: &'a NamePatterns, rules: &'a PlaybackRules) -> Self {
        Self { patterns, rules }
    }

    /// Group one run.
    ///
    /// `stream` must be positioned on `record` (the run's first frame), and `head` must be
    /// its classification. On return the stream is positioned after the run. A record with
    /// the run's base name but not its naming convention ends the run and is left unread.
    ///
    /// Fails only when the scaled width or height overflows `i64`.
    pub fn group(
        &self,
        stream: &mut FrameStream,
        record: &FrameRecord,
        head: &NameMatch,
        diags: &mut Diagnostics,
    ) -> SpriteResult<GroupedRun> {
        let kind = head.kind;
        let base = head.base.as_str();

        let mut slices = SliceTracker::new();
        let mut clips = BTreeMap::<String, ClipRange>::new();
        let mut count = 0usize;

        while stream.has_same_base_name(base) {
            let Some(next) = stream.read().cloned() else {
                break;
            };

            let matched = if kind == SpriteKind::Variant {
                None
            } else {
                match self.patterns.match_kind(kind, &next.name) {
                    Some(m) => Some(m),
                    None => {
                        // Leave the record for the caller to classify on its own.
                        stream.rewind();
                        diags.report(
                            next.line,
                            base,
                            DiagnosticKind::RunBreak {
                                name: next.name.clone(),
                            },
                        );
                        break;
                    }
                }
            };

            for d in slices.record(next.x, next.y) {
                diags.report(
                    next.line,
                    base,
                    DiagnosticKind::DecreasingCoordinate {
                        axis: d.axis,
                        value: d.value,
                        min: d.min,
                    },
                );
            }

            if let Some(m) = matched {
                let clip = clips
                    .entry(m.key.clone())
                    .or_insert_with(|| ClipRange::at(count));
                clip.to = count;

                if kind == SpriteKind::FullAnimation {
                    let columns = slices.count(Axis::X);
                    if count >= columns {
                        clip.from = columns - 1;
                        clip.to = clip.from - (count % columns);
                        diags.report(
                            next.line,
                            base,
                            DiagnosticKind::Wraparound {
                                key: m.key.clone(),
                                from: clip.from,
                                to: clip.to,
                            },
                        );
                    }
                }

                // Last frame of this key: attach playback.
                if !stream.has_same_base_name(&m.key_prefix) {
                    match self.rules.resolve(base, &m.key) {
                        Some(p) => clip.apply(p),
                        None => diags.report(
                            next.line,
                            base,
                            DiagnosticKind::UnhandledClip { key: m.key },
                        ),
                    }
                }
            }

            count += 1;
        }

        let mut entry = SpriteEntry::single(record.x, record.y, record.width, record.height);
        entry.slice_x = slices.slices(Axis::X);
        entry.slice_y = slices.slices(Axis::Y);

        let overflow = |what: &str, size: i64, n: usize| {
            SpriteError::size(
                record.line,
                base,
                format!("{what} {size} x {n} frames does not fit in 64 bits"),
            )
        };
        let columns = slices.count(Axis::X);
        entry.width = i64::try_from(columns)
            .ok()
            .and_then(|n| entry.width.checked_mul(n))
            .ok_or_else(|| overflow("width", record.width, columns))?;
        // Full animations only stretch horizontally.
        if kind != SpriteKind::FullAnimation {
            let rows = slices.count(Axis::Y);
            entry.height = i64::try_from(rows)
                .ok()
                .and_then(|n| entry.height.checked_mul(n))
                .ok_or_else(|| overflow("height", record.height, rows))?;
        }
        if kind != SpriteKind::Variant && !clips.is_empty() {
            entry.anims = Some(clips);
        }

        diags.report(
            record.line,
            base,
            DiagnosticKind::Classified {
                sprite_kind: kind,
                frames: count,
            },
        );

        Ok(GroupedRun {
            base: base.to_string(),
            entry,
            frames: count,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grouping/clips.rs"]
mod tests;
