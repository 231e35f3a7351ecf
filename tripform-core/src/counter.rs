use serde::{Deserialize, Serialize};
use tripform_shared::{CounterBounds, TravelerLimits};

/// An integer clamped to an inclusive [min, max] range on every mutation.
/// Stepping past either end is a silent no-op; the model clamps even when
/// the surrounding UI already disables the control at the boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoundedCounter {
    value: u32,
    bounds: CounterBounds,
}

impl BoundedCounter {
    /// Create a counter at `initial`, clamped into `bounds`. Inverted
    /// bounds (a config error `FormLimits::validate` would reject) pin the
    /// value to `min` instead of panicking.
    pub fn new(initial: u32, bounds: CounterBounds) -> Self {
        Self {
            value: initial.min(bounds.max).max(bounds.min),
            bounds,
        }
    }

    /// Create a counter resting at its minimum.
    pub fn at_minimum(bounds: CounterBounds) -> Self {
        Self::new(bounds.min, bounds)
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn bounds(&self) -> CounterBounds {
        self.bounds
    }

    pub fn increment(&mut self) {
        if self.value < self.bounds.max {
            self.value += 1;
        }
    }

    pub fn decrement(&mut self) {
        if self.value > self.bounds.min {
            self.value -= 1;
        }
    }

    pub fn is_at_minimum(&self) -> bool {
        self.value == self.bounds.min
    }

    pub fn is_at_maximum(&self) -> bool {
        self.value == self.bounds.max
    }
}

/// The three traveler categories on a flight search form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelerKind {
    Adults,
    Children,
    Infants,
}

/// Party composition for a flight search. Each field clamps independently;
/// there is no cross-field rule (9 adults + 8 children + 4 infants is a
/// legal, if unlikely, party).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TravelerCounts {
    adults: BoundedCounter,
    children: BoundedCounter,
    infants: BoundedCounter,
}

impl TravelerCounts {
    pub fn new(limits: &TravelerLimits) -> Self {
        Self {
            adults: BoundedCounter::at_minimum(limits.adults),
            children: BoundedCounter::at_minimum(limits.children),
            infants: BoundedCounter::at_minimum(limits.infants),
        }
    }

    pub fn increment(&mut self, kind: TravelerKind) {
        self.counter_mut(kind).increment();
    }

    pub fn decrement(&mut self, kind: TravelerKind) {
        self.counter_mut(kind).decrement();
    }

    pub fn count(&self, kind: TravelerKind) -> u32 {
        match kind {
            TravelerKind::Adults => self.adults.value(),
            TravelerKind::Children => self.children.value(),
            TravelerKind::Infants => self.infants.value(),
        }
    }

    pub fn total(&self) -> u32 {
        self.adults.value() + self.children.value() + self.infants.value()
    }

    fn counter_mut(&mut self, kind: TravelerKind) -> &mut BoundedCounter {
        match kind {
            TravelerKind::Adults => &mut self.adults,
            TravelerKind::Children => &mut self.children,
            TravelerKind::Infants => &mut self.infants,
        }
    }
}

impl Default for TravelerCounts {
    fn default() -> Self {
        Self::new(&TravelerLimits::default())
    }
}
