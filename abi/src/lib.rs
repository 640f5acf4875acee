mod config;
mod error;
pub mod pb;
mod types;
mod utils;

pub use config::*;
pub use error::{Entity, Error, ReservationConflict, ReservationConflictInfo, ReservationWindow};
pub use types::*;
pub use utils::*;

pub type ReservationId = i64;
pub type PropertyId = i64;
pub type ClientId = i64;

/// Default and upper bound for paged listings.
pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;
