use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tripform_core::{CabinClass, DateRange, SegmentList, TravelerCounts, TravelerKind};
use tripform_shared::FormLimits;
use uuid::Uuid;

/// The search request a flight form produces on submit. Search itself is
/// not implemented; the request is logged and handed back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSearchRequest {
    pub id: Uuid,
    pub legs: Vec<SearchLeg>,
    pub cabin_class: CabinClass,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchLeg {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
}

fn log_submission(request: &FlightSearchRequest) {
    // Stands in for the unimplemented search backend.
    tracing::info!(
        request_id = %request.id,
        legs = request.legs.len(),
        travelers = request.adults + request.children + request.infants,
        "flight search submitted, backend not implemented"
    );
}

fn traveler_fields(travelers: &TravelerCounts) -> (u32, u32, u32) {
    (
        travelers.count(TravelerKind::Adults),
        travelers.count(TravelerKind::Children),
        travelers.count(TravelerKind::Infants),
    )
}

/// One-way flight search form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneWayForm {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub cabin_class: CabinClass,
    pub travelers: TravelerCounts,
}

impl OneWayForm {
    pub fn new(limits: &FormLimits, today: NaiveDate) -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            departure_date: today,
            cabin_class: CabinClass::default(),
            travelers: TravelerCounts::new(&limits.travelers),
        }
    }

    pub fn swap_route(&mut self) {
        std::mem::swap(&mut self.origin, &mut self.destination);
    }

    pub fn submit_search(&self) -> FlightSearchRequest {
        let (adults, children, infants) = traveler_fields(&self.travelers);
        let request = FlightSearchRequest {
            id: Uuid::new_v4(),
            legs: vec![SearchLeg {
                origin: self.origin.clone(),
                destination: self.destination.clone(),
                date: self.departure_date,
            }],
            cabin_class: self.cabin_class,
            adults,
            children,
            infants,
        };
        log_submission(&request);
        request
    }
}

/// Round-trip flight search form. The return date trails the departure by
/// seven days whenever the departure overtakes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundTripForm {
    pub origin: String,
    pub destination: String,
    pub dates: DateRange,
    pub cabin_class: CabinClass,
    pub travelers: TravelerCounts,
}

impl RoundTripForm {
    pub fn new(limits: &FormLimits, today: NaiveDate) -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            dates: DateRange::new(today, limits.offsets.round_trip_return_days),
            cabin_class: CabinClass::default(),
            travelers: TravelerCounts::new(&limits.travelers),
        }
    }

    pub fn swap_route(&mut self) {
        std::mem::swap(&mut self.origin, &mut self.destination);
    }

    pub fn set_departure(&mut self, date: NaiveDate) {
        self.dates.set_start(date);
    }

    pub fn set_return(&mut self, date: NaiveDate) {
        self.dates.set_end(date);
    }

    pub fn submit_search(&self) -> FlightSearchRequest {
        let (adults, children, infants) = traveler_fields(&self.travelers);
        let request = FlightSearchRequest {
            id: Uuid::new_v4(),
            legs: vec![
                SearchLeg {
                    origin: self.origin.clone(),
                    destination: self.destination.clone(),
                    date: self.dates.start(),
                },
                SearchLeg {
                    origin: self.destination.clone(),
                    destination: self.origin.clone(),
                    date: self.dates.end(),
                },
            ],
            cabin_class: self.cabin_class,
            adults,
            children,
            infants,
        };
        log_submission(&request);
        request
    }
}

/// Multi-city flight search form: an open-ended segment editor plus the
/// shared cabin and traveler state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiCityForm {
    pub segments: SegmentList,
    pub cabin_class: CabinClass,
    pub travelers: TravelerCounts,
}

impl MultiCityForm {
    pub fn new(limits: &FormLimits, today: NaiveDate) -> Self {
        Self {
            segments: SegmentList::new(today),
            cabin_class: CabinClass::default(),
            travelers: TravelerCounts::new(&limits.travelers),
        }
    }

    pub fn submit_search(&self) -> FlightSearchRequest {
        let (adults, children, infants) = traveler_fields(&self.travelers);
        let request = FlightSearchRequest {
            id: Uuid::new_v4(),
            legs: self
                .segments
                .segments()
                .iter()
                .map(|s| SearchLeg {
                    origin: s.origin.clone(),
                    destination: s.destination.clone(),
                    date: s.departure_date,
                })
                .collect(),
            cabin_class: self.cabin_class,
            adults,
            children,
            infants,
        };
        log_submission(&request);
        request
    }
}

/// The three tabs of the flight booking screen.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightTab {
    #[default]
    OneWay,
    RoundTrip,
    MultiCity,
}

impl FlightTab {
    pub const ALL: [FlightTab; 3] = [FlightTab::OneWay, FlightTab::RoundTrip, FlightTab::MultiCity];

    pub fn label(&self) -> &'static str {
        match self {
            FlightTab::OneWay => "One Way",
            FlightTab::RoundTrip => "Round Trip",
            FlightTab::MultiCity => "Multicity",
        }
    }
}

/// The flight booking screen: a tab strip over the three forms. Each form
/// keeps its state when the user switches tabs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSearchScreen {
    pub active_tab: FlightTab,
    pub one_way: OneWayForm,
    pub round_trip: RoundTripForm,
    pub multi_city: MultiCityForm,
}

impl FlightSearchScreen {
    pub fn new(limits: &FormLimits, today: NaiveDate) -> Self {
        Self {
            active_tab: FlightTab::default(),
            one_way: OneWayForm::new(limits, today),
            round_trip: RoundTripForm::new(limits, today),
            multi_city: MultiCityForm::new(limits, today),
        }
    }

    pub fn select_tab(&mut self, tab: FlightTab) {
        self.active_tab = tab;
    }

    /// Submit whichever form the active tab shows.
    pub fn submit_active(&self) -> FlightSearchRequest {
        match self.active_tab {
            FlightTab::OneWay => self.one_way.submit_search(),
            FlightTab::RoundTrip => self.round_trip.submit_search(),
            FlightTab::MultiCity => self.multi_city.submit_search(),
        }
    }
}
