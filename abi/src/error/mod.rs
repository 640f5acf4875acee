mod conflict;

use std::fmt;

use chrono::NaiveDate;
use sqlx::postgres::PgDatabaseError;

pub use conflict::{ReservationConflict, ReservationConflictInfo, ReservationWindow};

/// The kinds of records a lookup can miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Client,
    Property,
    Reservation,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Client => write!(f, "client"),
            Entity::Property => write!(f, "property"),
            Entity::Reservation => write!(f, "reservation"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} {1} not found")]
    NotFound(Entity, i64),

    #[error("invalid date range: start {start} must be before end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("occupant count {requested} is outside 1..={capacity}")]
    CapacityExceeded { requested: i32, capacity: i32 },

    #[error("conflicting reservation")]
    DateConflict(ReservationConflictInfo),

    #[error("reservation {0} is already cancelled")]
    AlreadyCancelled(i64),

    #[error("email {0} is already registered")]
    EmailTaken(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Failed to read configuration file")]
    ConfigRead,

    #[error("Failed to parse configuration file")]
    ConfigParse,
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NotFound(a, x), Self::NotFound(b, y)) => a == b && x == y,
            (
                Self::InvalidDateRange { start: s1, end: e1 },
                Self::InvalidDateRange { start: s2, end: e2 },
            ) => s1 == s2 && e1 == e2,
            (
                Self::CapacityExceeded { requested: r1, capacity: c1 },
                Self::CapacityExceeded { requested: r2, capacity: c2 },
            ) => r1 == r2 && c1 == c2,
            (Self::DateConflict(v1), Self::DateConflict(v2)) => v1 == v2,
            (Self::AlreadyCancelled(v1), Self::AlreadyCancelled(v2)) => v1 == v2,
            (Self::EmailTaken(v1), Self::EmailTaken(v2)) => v1 == v2,
            (Self::InvalidArgument(v1), Self::InvalidArgument(v2)) => v1 == v2,
            // storage failures carry driver text that is never stable enough to compare
            (Self::StorageUnavailable(_), Self::StorageUnavailable(_)) => true,
            (Self::ConfigRead, Self::ConfigRead) => true,
            (Self::ConfigParse, Self::ConfigParse) => true,
            _ => false,
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(e) => {
                let err: &PgDatabaseError = e.downcast_ref();
                match (err.code(), err.detail()) {
                    // exclusion_violation
                    ("23P01", Some(detail)) => {
                        Error::DateConflict(detail.parse().unwrap_or_else(|_| {
                            ReservationConflictInfo::Unparsed(detail.to_string())
                        }))
                    }
                    // unique_violation, only clients.email is unique besides primary keys
                    ("23505", detail) => Error::EmailTaken(
                        detail
                            .and_then(conflict::parse_duplicate_key)
                            .unwrap_or_default(),
                    ),
                    _ => Error::StorageUnavailable(err.message().to_string()),
                }
            }
            e => Error::StorageUnavailable(e.to_string()),
        }
    }
}

impl From<Error> for tonic::Status {
    fn from(e: Error) -> Self {
        match e {
            Error::NotFound(..) => tonic::Status::not_found(e.to_string()),
            Error::InvalidDateRange { .. }
            | Error::CapacityExceeded { .. }
            | Error::InvalidArgument(_) => tonic::Status::invalid_argument(e.to_string()),
            Error::DateConflict(ref info) => {
                tonic::Status::failed_precondition(format!("{}: {}", e, info))
            }
            Error::AlreadyCancelled(_) => tonic::Status::failed_precondition(e.to_string()),
            Error::EmailTaken(_) => tonic::Status::already_exists(e.to_string()),
            Error::StorageUnavailable(_) => tonic::Status::unavailable(e.to_string()),
            Error::ConfigRead | Error::ConfigParse => tonic::Status::internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_should_map_to_grpc_status() {
        let status: tonic::Status = Error::NotFound(Entity::Client, 7).into();
        assert_eq!(status.code(), tonic::Code::NotFound);
        assert_eq!(status.message(), "client 7 not found");

        let status: tonic::Status = Error::CapacityExceeded {
            requested: 5,
            capacity: 4,
        }
        .into();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);

        let status: tonic::Status = Error::AlreadyCancelled(3).into();
        assert_eq!(status.code(), tonic::Code::FailedPrecondition);

        let status: tonic::Status = Error::StorageUnavailable("down".into()).into();
        assert_eq!(status.code(), tonic::Code::Unavailable);
    }

    #[test]
    fn pool_errors_should_become_storage_unavailable() {
        let err: Error = sqlx::Error::PoolTimedOut.into();
        assert_eq!(err, Error::StorageUnavailable(String::new()));
    }
}
