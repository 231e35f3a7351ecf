use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tripform_shared::{SegmentId, SegmentIdGen};

/// One origin-destination-date leg of a multi-city itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TripSegment {
    pub id: SegmentId,
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
}

/// The free-text fields of a segment. Dates go through
/// `SegmentList::set_departure_date` instead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SegmentField {
    Origin,
    Destination,
}

/// Ordered multi-city segment editor. Always holds at least one segment;
/// the last remaining segment cannot be removed. Operations on an unknown
/// id are silent no-ops, a behavior the booking screens rely on when a
/// row is removed while its edit is still in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentList {
    segments: Vec<TripSegment>,
    id_gen: SegmentIdGen,
}

impl SegmentList {
    /// Create an editor with a single empty segment departing `today`.
    pub fn new(today: NaiveDate) -> Self {
        let mut list = Self {
            segments: Vec::new(),
            id_gen: SegmentIdGen::new(),
        };
        list.push_default(today);
        list
    }

    /// Append a new empty segment departing `today`. No upper bound on the
    /// number of segments is enforced.
    pub fn add_segment(&mut self, today: NaiveDate) -> SegmentId {
        self.push_default(today)
    }

    /// Remove the segment with `id`, unless it is the only one left.
    pub fn remove_segment(&mut self, id: SegmentId) {
        if self.segments.len() > 1 {
            self.segments.retain(|s| s.id != id);
        }
    }

    /// Replace one text field of the matching segment. Empty strings are
    /// allowed; no validation is applied.
    pub fn update_segment(&mut self, id: SegmentId, field: SegmentField, value: impl Into<String>) {
        if let Some(segment) = self.segments.iter_mut().find(|s| s.id == id) {
            match field {
                SegmentField::Origin => segment.origin = value.into(),
                SegmentField::Destination => segment.destination = value.into(),
            }
        }
    }

    pub fn set_departure_date(&mut self, id: SegmentId, date: NaiveDate) {
        if let Some(segment) = self.segments.iter_mut().find(|s| s.id == id) {
            segment.departure_date = date;
        }
    }

    /// Exchange origin and destination on one segment.
    pub fn swap_route(&mut self, id: SegmentId) {
        if let Some(segment) = self.segments.iter_mut().find(|s| s.id == id) {
            std::mem::swap(&mut segment.origin, &mut segment.destination);
        }
    }

    pub fn segments(&self) -> &[TripSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        // Invariant: never true, a list always holds at least one segment.
        self.segments.is_empty()
    }

    pub fn get(&self, id: SegmentId) -> Option<&TripSegment> {
        self.segments.iter().find(|s| s.id == id)
    }

    fn push_default(&mut self, today: NaiveDate) -> SegmentId {
        let id = self.id_gen.allocate();
        self.segments.push(TripSegment {
            id,
            origin: String::new(),
            destination: String::new(),
            departure_date: today,
        });
        id
    }
}

impl Default for SegmentList {
    /// An editor seeded with the current local calendar date.
    fn default() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    #[test]
    fn test_new_list_has_one_empty_segment() {
        let list = SegmentList::new(today());
        assert_eq!(list.len(), 1);
        let seg = &list.segments()[0];
        assert_eq!(seg.origin, "");
        assert_eq!(seg.destination, "");
        assert_eq!(seg.departure_date, today());
    }

    #[test]
    fn test_add_segment_twice_gives_three_independent_segments() {
        let mut list = SegmentList::new(today());
        let first_id = list.segments()[0].id;
        list.update_segment(first_id, SegmentField::Origin, "DEL");

        let b = list.add_segment(today());
        let c = list.add_segment(today());

        assert_eq!(list.len(), 3);
        assert_ne!(first_id, b);
        assert_ne!(b, c);
        assert_eq!(list.segments()[0].origin, "DEL");
        assert_eq!(list.segments()[1].origin, "");
    }

    #[test]
    fn test_cannot_remove_last_segment() {
        let mut list = SegmentList::new(today());
        let id = list.segments()[0].id;
        list.remove_segment(id);
        assert_eq!(list.len(), 1);
        assert_eq!(list.segments()[0].id, id);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut list = SegmentList::new(today());
        list.add_segment(today());
        let before = list.segments().to_vec();

        let mut other_gen = SegmentIdGen::new();
        for _ in 0..10 {
            other_gen.allocate();
        }
        list.remove_segment(other_gen.allocate());

        assert_eq!(list.segments(), &before[..]);
    }

    #[test]
    fn test_remove_middle_segment() {
        let mut list = SegmentList::new(today());
        let b = list.add_segment(today());
        list.add_segment(today());

        list.remove_segment(b);
        assert_eq!(list.len(), 2);
        assert!(list.get(b).is_none());
    }

    #[test]
    fn test_double_swap_restores_route() {
        let mut list = SegmentList::new(today());
        let id = list.segments()[0].id;
        list.update_segment(id, SegmentField::Origin, "BOM");
        list.update_segment(id, SegmentField::Destination, "LHR");

        list.swap_route(id);
        assert_eq!(list.get(id).unwrap().origin, "LHR");
        assert_eq!(list.get(id).unwrap().destination, "BOM");

        list.swap_route(id);
        assert_eq!(list.get(id).unwrap().origin, "BOM");
        assert_eq!(list.get(id).unwrap().destination, "LHR");
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut list = SegmentList::new(today());
        let mut foreign = SegmentIdGen::new();
        foreign.allocate();
        let ghost = foreign.allocate();

        list.update_segment(ghost, SegmentField::Origin, "XXX");
        assert_eq!(list.segments()[0].origin, "");
    }

    #[test]
    fn test_removed_ids_are_not_reused() {
        let mut list = SegmentList::new(today());
        let b = list.add_segment(today());
        list.remove_segment(b);
        let c = list.add_segment(today());
        assert_ne!(b, c);
    }
}
