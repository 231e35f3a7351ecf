use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tripform_core::{BoundedCounter, DateRange};
use tripform_shared::FormLimits;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelSearchRequest {
    pub id: Uuid,
    pub location: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    pub guests: u32,
    pub rooms: u32,
}

/// Hotel search form: location, a check-in/check-out pair defaulting to a
/// one-night stay, and guest/room counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelSearchForm {
    pub location: String,
    pub stay: DateRange,
    pub guests: BoundedCounter,
    pub rooms: BoundedCounter,
}

impl HotelSearchForm {
    pub fn new(limits: &FormLimits, today: NaiveDate) -> Self {
        Self {
            location: String::new(),
            stay: DateRange::new(today, limits.offsets.short_stay_return_days),
            guests: BoundedCounter::at_minimum(limits.party.hotel_guests),
            rooms: BoundedCounter::at_minimum(limits.party.hotel_rooms),
        }
    }

    pub fn set_check_in(&mut self, date: NaiveDate) {
        self.stay.set_start(date);
    }

    pub fn set_check_out(&mut self, date: NaiveDate) {
        self.stay.set_end(date);
    }

    pub fn submit_search(&self) -> HotelSearchRequest {
        let request = HotelSearchRequest {
            id: Uuid::new_v4(),
            location: self.location.clone(),
            check_in: self.stay.start(),
            check_out: self.stay.end(),
            nights: self.stay.nights(),
            guests: self.guests.value(),
            rooms: self.rooms.value(),
        };
        tracing::info!(
            request_id = %request.id,
            nights = request.nights,
            guests = request.guests,
            "hotel search submitted, backend not implemented"
        );
        request
    }
}
