use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tripform_core::{BoundedCounter, CabType, DateRange, RentalPackage};
use tripform_shared::FormLimits;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CabTripKind {
    OneWay,
    RoundTrip,
    Rental,
}

/// Search request produced by any of the three cab forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CabSearchRequest {
    pub id: Uuid,
    pub kind: CabTripKind,
    pub pickup_location: String,
    /// Absent for rentals, which return to the pickup point.
    pub drop_location: Option<String>,
    pub pickup_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub passengers: u32,
    pub cab_type: CabType,
    pub rental_package: Option<RentalPackage>,
}

fn log_submission(request: &CabSearchRequest) {
    tracing::info!(
        request_id = %request.id,
        kind = ?request.kind,
        passengers = request.passengers,
        "cab search submitted, backend not implemented"
    );
}

/// One-way cab booking form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CabOneWayForm {
    pub pickup_location: String,
    pub drop_location: String,
    pub pickup_date: NaiveDate,
    pub passengers: BoundedCounter,
    pub cab_type: CabType,
}

impl CabOneWayForm {
    pub fn new(limits: &FormLimits, today: NaiveDate) -> Self {
        Self {
            pickup_location: String::new(),
            drop_location: String::new(),
            pickup_date: today,
            passengers: BoundedCounter::at_minimum(limits.party.cab_passengers),
            cab_type: CabType::default(),
        }
    }

    pub fn submit_search(&self) -> CabSearchRequest {
        let request = CabSearchRequest {
            id: Uuid::new_v4(),
            kind: CabTripKind::OneWay,
            pickup_location: self.pickup_location.clone(),
            drop_location: Some(self.drop_location.clone()),
            pickup_date: self.pickup_date,
            return_date: None,
            passengers: self.passengers.value(),
            cab_type: self.cab_type,
            rental_package: None,
        };
        log_submission(&request);
        request
    }
}

/// Round-trip cab booking form. The return date trails the pickup by one
/// day whenever the pickup overtakes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CabRoundTripForm {
    pub pickup_location: String,
    pub drop_location: String,
    pub dates: DateRange,
    pub passengers: BoundedCounter,
    pub cab_type: CabType,
}

impl CabRoundTripForm {
    pub fn new(limits: &FormLimits, today: NaiveDate) -> Self {
        Self {
            pickup_location: String::new(),
            drop_location: String::new(),
            dates: DateRange::new(today, limits.offsets.short_stay_return_days),
            passengers: BoundedCounter::at_minimum(limits.party.cab_passengers),
            cab_type: CabType::default(),
        }
    }

    pub fn set_pickup_date(&mut self, date: NaiveDate) {
        self.dates.set_start(date);
    }

    pub fn set_return_date(&mut self, date: NaiveDate) {
        self.dates.set_end(date);
    }

    pub fn submit_search(&self) -> CabSearchRequest {
        let request = CabSearchRequest {
            id: Uuid::new_v4(),
            kind: CabTripKind::RoundTrip,
            pickup_location: self.pickup_location.clone(),
            drop_location: Some(self.drop_location.clone()),
            pickup_date: self.dates.start(),
            return_date: Some(self.dates.end()),
            passengers: self.passengers.value(),
            cab_type: self.cab_type,
            rental_package: None,
        };
        log_submission(&request);
        request
    }
}

/// Hourly rental form: pickup point only, a package instead of a drop
/// location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CabRentalForm {
    pub pickup_location: String,
    pub dates: DateRange,
    pub passengers: BoundedCounter,
    pub cab_type: CabType,
    pub package: RentalPackage,
}

impl CabRentalForm {
    pub fn new(limits: &FormLimits, today: NaiveDate) -> Self {
        Self {
            pickup_location: String::new(),
            dates: DateRange::new(today, limits.offsets.short_stay_return_days),
            passengers: BoundedCounter::at_minimum(limits.party.cab_passengers),
            cab_type: CabType::default(),
            package: RentalPackage::default(),
        }
    }

    pub fn set_pickup_date(&mut self, date: NaiveDate) {
        self.dates.set_start(date);
    }

    pub fn set_return_date(&mut self, date: NaiveDate) {
        self.dates.set_end(date);
    }

    pub fn submit_search(&self) -> CabSearchRequest {
        let request = CabSearchRequest {
            id: Uuid::new_v4(),
            kind: CabTripKind::Rental,
            pickup_location: self.pickup_location.clone(),
            drop_location: None,
            pickup_date: self.dates.start(),
            return_date: Some(self.dates.end()),
            passengers: self.passengers.value(),
            cab_type: self.cab_type,
            rental_package: Some(self.package),
        };
        log_submission(&request);
        request
    }
}
