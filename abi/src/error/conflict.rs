use std::{convert::TryFrom, fmt, str::FromStr};

use chrono::NaiveDate;
use regex::Regex;

use crate::PropertyId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationConflictInfo {
    Parsed(ReservationConflict),
    Unparsed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationConflict {
    pub new: ReservationWindow,
    pub old: ReservationWindow,
}

/// A half-open `[start, end)` stay on one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationWindow {
    pub property_id: PropertyId,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl fmt::Display for ReservationWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "property {} [{}, {})",
            self.property_id, self.start, self.end
        )
    }
}

impl fmt::Display for ReservationConflictInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationConflictInfo::Parsed(c) => {
                write!(f, "{} overlaps existing {}", c.new, c.old)
            }
            ReservationConflictInfo::Unparsed(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for ReservationConflictInfo {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(conflict) = s.parse() {
            Ok(ReservationConflictInfo::Parsed(conflict))
        } else {
            Ok(ReservationConflictInfo::Unparsed(s.to_string()))
        }
    }
}

impl FromStr for ReservationConflict {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParsedInfo::from_str(s)?.try_into()
    }
}

// Postgres reports an exclusion violation as
// `Key (property_id, daterange(...))=(1, [2024-03-04,2024-03-08)) conflicts with
// existing key (property_id, daterange(...))=(1, [2024-03-01,2024-03-05)).`
struct ParsedInfo {
    new: (String, String, String),
    old: (String, String, String),
}

impl FromStr for ParsedInfo {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let re = Regex::new(r"\((\d+), \[(\d{4}-\d{2}-\d{2}),(\d{4}-\d{2}-\d{2})\)\)")
            .map_err(|_| ())?;
        let mut windows = re.captures_iter(s).map(|cap| {
            (
                cap[1].to_string(),
                cap[2].to_string(),
                cap[3].to_string(),
            )
        });
        let new = windows.next().ok_or(())?;
        let old = windows.next().ok_or(())?;
        Ok(Self { new, old })
    }
}

impl TryFrom<ParsedInfo> for ReservationConflict {
    type Error = ();

    fn try_from(value: ParsedInfo) -> Result<Self, Self::Error> {
        Ok(Self {
            new: value.new.try_into()?,
            old: value.old.try_into()?,
        })
    }
}

impl TryFrom<(String, String, String)> for ReservationWindow {
    type Error = ();

    fn try_from((pid, start, end): (String, String, String)) -> Result<Self, Self::Error> {
        Ok(Self {
            property_id: pid.parse().map_err(|_| ())?,
            start: start.parse().map_err(|_| ())?,
            end: end.parse().map_err(|_| ())?,
        })
    }
}

/// Pulls the value out of `Key (email)=(a@b.com) already exists.`
pub(crate) fn parse_duplicate_key(detail: &str) -> Option<String> {
    let re = Regex::new(r"\)=\((.+)\) already exists").ok()?;
    re.captures(detail).map(|cap| cap[1].to_string())
}
