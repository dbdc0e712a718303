use std::collections::BTreeSet;

use crate::foundation::diagnostics::Axis;

/// Distinct frame offsets observed for one run, per axis.
///
/// Slice counts are the number of distinct offsets, not their numeric span.
#[derive(Clone, Debug, Default)]
pub struct SliceTracker {
    xs: BTreeSet<i64>,
    ys: BTreeSet<i64>,
}

/// An offset smaller than the minimum already recorded on its axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decrease {
    pub axis: Axis,
    pub value: i64,
    pub min: i64,
}

impl SliceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame's offsets; returns the axes on which it went backwards.
    pub fn record(&mut self, x: i64, y: i64) -> Vec<Decrease> {
        [(Axis::X, x), (Axis::Y, y)]
            .into_iter()
            .filter_map(|(axis, value)| {
                self.observe(axis, value)
                    .map(|min| Decrease { axis, value, min })
            })
            .collect()
    }

    /// Record one offset; returns the previous minimum if `value` is below it.
    pub fn observe(&mut self, axis: Axis, value: i64) -> Option<i64> {
        let set = self.axis_mut(axis);
        let below = set.first().copied().filter(|&min| value < min);
        set.insert(value);
        below
    }

    /// Distinct offsets seen on `axis`.
    pub fn count(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.xs.len(),
            Axis::Y => self.ys.len(),
        }
    }

    /// Slice count worth emitting: `Some(n)` only when the axis is actually divided.
    pub fn slices(&self, axis: Axis) -> Option<usize> {
        let n = self.count(axis);
        (n > 1).then_some(n)
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut BTreeSet<i64> {
        match axis {
            Axis::X => &mut self.xs,
            Axis::Y => &mut self.ys,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grouping/slices.rs"]
mod tests;
