use std::fmt;

use crate::{PropertyId, Reservation};

/// Why a stay cannot be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailable {
    InvalidDateRange,
    CapacityExceeded { capacity: i32 },
    DateConflict,
}

/// Answer to "could this stay be booked right now?".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub property_id: PropertyId,
    pub reason: Option<Unavailable>,
    /// Active reservations overlapping the requested stay.
    pub conflicts: Vec<Reservation>,
}

impl Availability {
    pub fn is_available(&self) -> bool {
        self.reason.is_none()
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            None => write!(f, "available for the requested dates"),
            Some(Unavailable::InvalidDateRange) => write!(f, "end date must be after start date"),
            Some(Unavailable::CapacityExceeded { capacity }) => {
                write!(f, "capacity exceeded, maximum is {} occupants", capacity)
            }
            Some(Unavailable::DateConflict) => write!(
                f,
                "not available, {} reservation(s) overlap the requested dates",
                self.conflicts.len()
            ),
        }
    }
}
