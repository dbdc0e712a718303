use std::collections::HashMap;

use crate::{
    atlas::model::{Atlas, SpriteEntry},
    foundation::{
        diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Level},
        error::{SpriteError, SpriteResult},
    },
    frames::{
        record::{FrameRecord, parse_frames},
        stream::FrameStream,
    },
    grouping::clips::ClipGrouper,
    naming::pattern::{NamePatterns, SpriteKind},
    playback::rules::PlaybackRules,
};

/// What to do when a sprite name is produced twice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Report an error diagnostic; the later entry replaces the earlier one.
    #[default]
    Overwrite,
    /// Abort with [`SpriteError::Duplicate`].
    Reject,
}

/// Compiler configuration.
#[derive(Clone, Debug, Default)]
pub struct CompileOptions {
    pub duplicates: DuplicatePolicy,
    /// Pre-pass that reports sprites whose frames are not contiguous in the listing.
    pub check_order: bool,
    pub rules: PlaybackRules,
}

/// Result of one compiler run.
#[derive(Clone, Debug)]
pub struct CompileOutput {
    pub atlas: Atlas,
    /// Advisory messages, in emission order.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompileOutput {
    /// Whether any error-level diagnostic was produced.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level == Level::Error)
    }
}

/// Drives a frame listing through classification and grouping into an [`Atlas`].
#[derive(Clone, Debug)]
pub struct AtlasCompiler {
    patterns: NamePatterns,
    opts: CompileOptions,
}

impl AtlasCompiler {
    pub fn new(opts: CompileOptions) -> SpriteResult<Self> {
        Ok(Self {
            patterns: NamePatterns::new()?,
            opts,
        })
    }

    pub fn options(&self) -> &CompileOptions {
        &self.opts
    }

    /// Parse and compile a whole frame listing.
    pub fn compile_str(&self, text: &str) -> SpriteResult<CompileOutput> {
        self.compile(parse_frames(text)?)
    }

    /// Compile parsed records. Records of one sprite must be adjacent.
    #[tracing::instrument(skip_all, fields(frames = records.len()))]
    pub fn compile(&self, records: Vec<FrameRecord>) -> SpriteResult<CompileOutput> {
        let mut diags = Diagnostics::default();
        if self.opts.check_order {
            self.check_order(&records, &mut diags);
        }

        let grouper = ClipGrouper::new(&self.patterns, &self.opts.rules);
        let mut stream = FrameStream::new(records);
        let mut atlas = Atlas::new();

        while let Some(record) = stream.read().cloned() {
            let head = self.patterns.classify(&record.name);

            let (name, entry) = if head.kind == SpriteKind::Default {
                diags.report(
                    record.line,
                    &record.name,
                    DiagnosticKind::Classified {
                        sprite_kind: SpriteKind::Default,
                        frames: 1,
                    },
                );
                let entry = SpriteEntry::single(record.x, record.y, record.width, record.height);
                (record.name.clone(), entry)
            } else {
                stream.rewind();
                let run = grouper.group(&mut stream, &record, &head, &mut diags)?;
                (run.base, run.entry)
            };

            if atlas.contains(&name) {
                match self.opts.duplicates {
                    DuplicatePolicy::Overwrite => {
                        diags.report(record.line, &name, DiagnosticKind::DuplicateName);
                    }
                    DuplicatePolicy::Reject => {
                        return Err(SpriteError::Duplicate {
                            name,
                            line: record.line,
                        });
                    }
                }
            }
            atlas.insert(name, entry);
        }

        tracing::debug!(
            sprites = atlas.len(),
            errors = diags.count(Level::Error),
            warnings = diags.count(Level::Warn),
            "atlas compiled"
        );

        Ok(CompileOutput {
            atlas,
            diagnostics: diags.into_vec(),
        })
    }

    /// Report every record whose base name already had an earlier, separate run.
    fn check_order(&self, records: &[FrameRecord], diags: &mut Diagnostics) {
        let mut first_seen = HashMap::<String, usize>::new();
        let mut prev: Option<String> = None;

        for r in records {
            let base = self.patterns.classify(&r.name).base;
            let same_run = prev.as_deref() == Some(base.as_str());
            if !same_run && let Some(&first_line) = first_seen.get(&base) {
                diags.report(r.line, &base, DiagnosticKind::NonContiguous { first_line });
            }
            first_seen.entry(base.clone()).or_insert(r.line);
            prev = Some(base);
        }
    }
}

/// Compile `text` with default options.
pub fn compile_str(text: &str) -> SpriteResult<CompileOutput> {
    AtlasCompiler::new(CompileOptions::default())?.compile_str(text)
}

#[cfg(test)]
#[path = "../../tests/unit/atlas/assembler.rs"]
mod tests;
