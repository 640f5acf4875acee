//! Wire messages for the `reservation` gRPC package, generated from
//! `protos/reservation.proto` (see `build.rs`), plus conversions to and from
//! the domain types.

mod convert;
#[rustfmt::skip]
mod reservation;

pub use reservation::*;
