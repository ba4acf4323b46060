//! Collapse sorted row indices into contiguous inclusive ranges.
//!
//! `[1, 2, 3, 7, 8, 10]` becomes `[1 to 3, 7 to 8, 10 to 10]`.
//!
//! The input must already be sorted ascending.  Nothing here sorts or
//! checks the order: on unsorted input every value is still covered by some
//! range, but the ranges are no longer guaranteed to be maximal.

use std::{fmt, ops::RangeInclusive};

/// Inclusive `start..=end` run of row indices, `start <= end`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct IndexRange {
    pub start: usize,
    pub end: usize,
}

impl IndexRange {
    #[inline]
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "range start past its end");
        Self { start, end }
    }

    /// Number of indices covered.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always `false`; a range holds at least its start.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    #[inline]
    #[must_use]
    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl From<(usize, usize)> for IndexRange {
    #[inline]
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

impl From<IndexRange> for RangeInclusive<usize> {
    #[inline]
    fn from(r: IndexRange) -> Self {
        r.start..=r.end
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Single left-to-right pass, O(n).  Empty input gives an empty list.
#[must_use]
pub fn contiguous_ranges(indices: &[usize]) -> Vec<IndexRange> {
    let Some((&first, rest)) = indices.split_first() else {
        return Vec::new();
    };

    let mut ranges = Vec::new();
    let (mut start, mut prev) = (first, first);
    for &i in rest {
        if prev.checked_add(1) == Some(i) {
            prev = i;
        } else {
            ranges.push(IndexRange::new(start, prev));
            start = i;
            prev = i;
        }
    }
    // exactly one range is still open here
    ranges.push(IndexRange::new(start, prev));
    ranges
}

/// Human-readable `"<start> to <end>"` lines.
#[must_use]
pub fn format_ranges(ranges: &[IndexRange]) -> Vec<String> {
    ranges.iter().map(ToString::to_string).collect()
}
