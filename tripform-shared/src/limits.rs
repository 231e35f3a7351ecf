use serde::{Deserialize, Serialize};
use std::env;

/// Inclusive [min, max] range for a bounded counter.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct CounterBounds {
    pub min: u32,
    pub max: u32,
}

impl CounterBounds {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

/// Per-traveler-type bounds for flight searches.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct TravelerLimits {
    pub adults: CounterBounds,
    pub children: CounterBounds,
    pub infants: CounterBounds,
}

impl Default for TravelerLimits {
    fn default() -> Self {
        Self {
            adults: CounterBounds::new(1, 9),
            children: CounterBounds::new(0, 8),
            infants: CounterBounds::new(0, 4),
        }
    }
}

/// Bounds for the cab and hotel party counters.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct PartyLimits {
    pub cab_passengers: CounterBounds,
    pub hotel_guests: CounterBounds,
    pub hotel_rooms: CounterBounds,
}

impl Default for PartyLimits {
    fn default() -> Self {
        Self {
            cab_passengers: CounterBounds::new(1, 6),
            hotel_guests: CounterBounds::new(1, 10),
            hotel_rooms: CounterBounds::new(1, 5),
        }
    }
}

/// Default gap applied when a start date is pushed past its end date.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct DateOffsets {
    /// Days between departure and auto-adjusted return on round-trip flights.
    pub round_trip_return_days: i64,
    /// Days between pickup/check-in and auto-adjusted return/check-out.
    pub short_stay_return_days: i64,
}

impl Default for DateOffsets {
    fn default() -> Self {
        Self {
            round_trip_return_days: 7,
            short_stay_return_days: 1,
        }
    }
}

/// All configurable form bounds. The defaults are the values observed in
/// production screens; deployments can override them per environment.
#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(default)]
pub struct FormLimits {
    pub travelers: TravelerLimits,
    pub party: PartyLimits,
    pub offsets: DateOffsets,
}

impl FormLimits {
    /// Reject inverted ranges (min above max) before they reach a counter.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let ranges = [
            ("travelers.adults", self.travelers.adults),
            ("travelers.children", self.travelers.children),
            ("travelers.infants", self.travelers.infants),
            ("party.cab_passengers", self.party.cab_passengers),
            ("party.hotel_guests", self.party.hotel_guests),
            ("party.hotel_rooms", self.party.hotel_rooms),
        ];
        for (name, bounds) in ranges {
            if !bounds.is_valid() {
                return Err(config::ConfigError::Message(format!(
                    "{}: min {} exceeds max {}",
                    name, bounds.min, bounds.max
                )));
            }
        }
        Ok(())
    }

    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Checked-in defaults, if the deployment ships a config directory
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Environment overrides, e.g. TRIPFORM_TRAVELERS__ADULTS__MAX=9
            .add_source(config::Environment::with_prefix("TRIPFORM").separator("__"))
            .build()?;

        let limits: Self = s.try_deserialize()?;
        limits.validate()?;
        Ok(limits)
    }
}
