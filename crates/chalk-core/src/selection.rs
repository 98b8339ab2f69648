//! Selection ranges over the plain-text buffer.
//!
//! All offsets are **character offsets** (Unicode scalar values), half-open: `[start, end)`.

use std::ops::Range;

/// A selection over the plain-text buffer.
///
/// Invariant: `start <= end`. Constructors normalize reversed input, so a range built from a
/// backward drag (anchor after active end) still satisfies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SelectionRange {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
}

impl SelectionRange {
    /// Create a selection from two offsets in any order.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Create an empty selection (a caret) at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns `true` if this selection is a caret (`start == end`).
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Length of the selection in characters. A reversed range built through the public
    /// fields has length 0.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the selection covers no characters.
    pub fn is_empty(&self) -> bool {
        self.is_caret()
    }

    /// Clamp both offsets to `0..=char_len`.
    pub fn clamp_to(self, char_len: usize) -> Self {
        Self::new(self.start.min(char_len), self.end.min(char_len))
    }

    /// Returns `true` if `start <= end <= char_len`.
    pub fn fits(&self, char_len: usize) -> bool {
        self.start <= self.end && self.end <= char_len
    }

    /// The selection as a `Range<usize>`.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for SelectionRange {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}
