//! Per-screen view models for the booking front-end. Each form owns its
//! widgets' state for the lifetime of the screen and is dropped on
//! navigation away; nothing here persists or talks to a backend.

pub mod auth;
pub mod cab;
pub mod flight;
pub mod hotel;
pub mod profile;

pub use auth::{AuthError, ForgotPasswordForm, LoginForm, RegisterForm};
pub use cab::{CabOneWayForm, CabRentalForm, CabRoundTripForm, CabSearchRequest, CabTripKind};
pub use flight::{
    FlightSearchRequest, FlightSearchScreen, FlightTab, MultiCityForm, OneWayForm, RoundTripForm,
    SearchLeg,
};
pub use hotel::{HotelSearchForm, HotelSearchRequest};
pub use profile::ProfileSettings;
