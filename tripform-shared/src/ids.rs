use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for one itinerary segment. Unique within the editor that
/// created it; ids of removed segments are never handed out again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SegmentId(u64);

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seg-{}", self.0)
    }
}

/// Monotonic allocator for segment ids, one per editor instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentIdGen {
    next: u64,
}

impl SegmentIdGen {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    pub fn allocate(&mut self) -> SegmentId {
        let id = SegmentId(self.next);
        self.next += 1;
        id
    }
}
