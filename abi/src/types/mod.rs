mod address;
mod availability;
mod client;
mod filter;
mod property;
mod reservation;

pub use address::{Address, DEFAULT_COUNTRY};
pub use availability::{Availability, Unavailable};
pub use client::Client;
pub use filter::{
    PropertyFilter, PropertyFilterBuilder, ReservationFilter, ReservationFilterBuilder,
};
pub use property::Property;
pub use reservation::{Reservation, ReservationRequest};
