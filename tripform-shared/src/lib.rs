pub mod ids;
pub mod limits;
pub mod pii;

pub use ids::{SegmentId, SegmentIdGen};
pub use limits::{CounterBounds, DateOffsets, FormLimits, PartyLimits, TravelerLimits};
pub use pii::Masked;
