//! Pure booking rules. Nothing here touches storage: callers pass in the
//! active reservations they loaded for the property.

use abi::{
    Availability, Error, Property, PropertyId, Reservation, ReservationConflict,
    ReservationConflictInfo, ReservationRequest, Unavailable,
};
use chrono::NaiveDate;

/// Active reservations on `property_id` whose stay overlaps `[start, end)`.
pub fn find_conflicts<'a>(
    property_id: PropertyId,
    start: NaiveDate,
    end: NaiveDate,
    existing: &'a [Reservation],
) -> impl Iterator<Item = &'a Reservation> + 'a {
    existing
        .iter()
        .filter(move |r| r.active && r.property_id == property_id && r.overlaps(start, end))
}

/// `false` for an empty or inverted range, or when any active reservation overlaps.
pub fn is_available(
    property_id: PropertyId,
    start: NaiveDate,
    end: NaiveDate,
    existing: &[Reservation],
) -> bool {
    start < end && find_conflicts(property_id, start, end, existing).next().is_none()
}

pub(crate) fn validate_range(start: NaiveDate, end: NaiveDate) -> Result<(), Error> {
    if start < end {
        Ok(())
    } else {
        Err(Error::InvalidDateRange { start, end })
    }
}

pub(crate) fn validate_occupants(property: &Property, occupants: i32) -> Result<(), Error> {
    if property.accommodates(occupants) {
        Ok(())
    } else {
        Err(Error::CapacityExceeded {
            requested: occupants,
            capacity: property.capacity,
        })
    }
}

/// Fails with `DateConflict` naming the first overlapping reservation.
pub fn ensure_available(req: &ReservationRequest, existing: &[Reservation]) -> Result<(), Error> {
    validate_range(req.start, req.end)?;
    match find_conflicts(req.property_id, req.start, req.end, existing).next() {
        None => Ok(()),
        Some(old) => Err(Error::DateConflict(ReservationConflictInfo::Parsed(
            ReservationConflict {
                new: req.window(),
                old: old.window(),
            },
        ))),
    }
}

/// Full availability answer for `req` on `property`, checked in booking order:
/// date range, then capacity, then overlaps.
pub fn assess(
    property: &Property,
    req: &ReservationRequest,
    existing: &[Reservation],
) -> Availability {
    let conflicts: Vec<Reservation> = if req.start < req.end {
        find_conflicts(property.id, req.start, req.end, existing)
            .cloned()
            .collect()
    } else {
        Vec::new()
    };
    let reason = if req.start >= req.end {
        Some(Unavailable::InvalidDateRange)
    } else if !property.accommodates(req.occupants) {
        Some(Unavailable::CapacityExceeded {
            capacity: property.capacity,
        })
    } else if !conflicts.is_empty() {
        Some(Unavailable::DateConflict)
    } else {
        None
    };
    Availability {
        property_id: property.id,
        reason,
        conflicts,
    }
}
