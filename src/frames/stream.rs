use crate::frames::record::FrameRecord;

/// Peekable, rewindable cursor over an ordered frame listing.
///
/// Frames belonging to one sprite must be contiguous. Interleaved runs are not
/// merged; they surface as duplicate sprites or wrong slice counts.
#[derive(Clone, Debug)]
pub struct FrameStream {
    records: Vec<FrameRecord>,
    pos: usize,
}

impl FrameStream {
    pub fn new(records: Vec<FrameRecord>) -> Self {
        Self { records, pos: 0 }
    }

    /// Current record, without advancing.
    pub fn peek(&self) -> Option<&FrameRecord> {
        self.records.get(self.pos)
    }

    /// Current record; advances by one.
    pub fn read(&mut self) -> Option<&FrameRecord> {
        let rec = self.records.get(self.pos)?;
        self.pos += 1;
        Some(rec)
    }

    /// Step back onto the record returned by the last [`FrameStream::read`].
    pub fn rewind(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    /// True iff a next record exists and its name starts with `base`.
    pub fn has_same_base_name(&self, base: &str) -> bool {
        self.peek().is_some_and(|r| r.name.starts_with(base))
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.records.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frames/stream.rs"]
mod tests;
