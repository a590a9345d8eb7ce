use serde::{Deserialize, Serialize};

/// Half-open range of token indices `[start, end)` within a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span covering the single token `index`
    pub fn token(index: usize) -> Self {
        Self { start: index, end: index + 1 }
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// `self` lies entirely inside `other`
    pub fn within(&self, other: &Span) -> bool {
        other.contains(self)
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Token indices covered by the span, in order
    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Tokens strictly between two non-overlapping spans, in textual order.
    /// Returns `None` when the spans overlap.
    pub fn between(&self, other: &Span) -> Option<std::ops::Range<usize>> {
        if self.overlaps(other) || self.is_empty() || other.is_empty() {
            return None;
        }
        let (left, right) = if self.end <= other.start { (self, other) } else { (other, self) };
        Some(left.end..right.start)
    }
}
