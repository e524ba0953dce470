//! Frame container for the committed segment list.

use super::segment::Segment;
use serde::{Deserialize, Serialize};

/// Container for all committed segments in the current sketch.
///
/// Segments are kept in commit order; indices double as the hit-target ids
/// the view layer attaches to rendered lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Committed segments in draw order (first = bottom layer, last = top layer)
    pub segments: Vec<Segment>,
}

impl Frame {
    /// Creates a new empty frame with no segments.
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Removes all segments from the frame.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Attempts to append a segment, enforcing a maximum count when `max` > 0.
    ///
    /// Returns `true` if the segment was added, `false` if the limit would be exceeded.
    pub fn try_add_segment(&mut self, segment: Segment, max: usize) -> bool {
        if max == 0 || self.segments.len() < max {
            self.segments.push(segment);
            true
        } else {
            false
        }
    }

    /// Removes and returns the most recently added segment, if any.
    pub fn undo(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    /// Removes the segment at `index`, preserving the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<Segment> {
        if index < self.segments.len() {
            Some(self.segments.remove(index))
        } else {
            None
        }
    }

    /// Overwrites the segment at `index`. Returns `false` when out of range.
    pub fn replace(&mut self, index: usize, segment: Segment) -> bool {
        match self.segments.get_mut(index) {
            Some(slot) => {
                *slot = segment;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
