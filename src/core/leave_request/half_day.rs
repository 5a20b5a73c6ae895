// Half-day endpoint value types.
//
// Purpose
// - Express one endpoint of a leave interval as a calendar date plus a day part.
//
// Responsibilities
// - Map an endpoint to the half-unit timeline: every date is two consecutive
//   half-units, morning then afternoon, numbered from the proleptic Gregorian
//   day count so that arithmetic never wraps across month or year boundaries.
//
// Boundaries
// - Value types only. No input or output, no clock access.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Which part of the endpoint's date the leave occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPart {
    Full,
    FirstHalf,
    SecondHalf,
}

/// One endpoint of a leave interval at half-day resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfDayPoint {
    pub date: NaiveDate,
    pub part: DayPart,
}

impl HalfDayPoint {
    pub fn new(date: NaiveDate, part: DayPart) -> Self {
        Self { date, part }
    }

    pub fn full(date: NaiveDate) -> Self {
        Self::new(date, DayPart::Full)
    }

    pub fn first_half(date: NaiveDate) -> Self {
        Self::new(date, DayPart::FirstHalf)
    }

    pub fn second_half(date: NaiveDate) -> Self {
        Self::new(date, DayPart::SecondHalf)
    }

    fn morning_unit(&self) -> i64 {
        i64::from(self.date.num_days_from_ce()) * 2
    }

    /// First half-unit covered when this point caps the start of an interval.
    /// A second-half start skips the morning; full and first-half starts do not.
    pub(crate) fn start_unit(&self) -> i64 {
        match self.part {
            DayPart::Full | DayPart::FirstHalf => self.morning_unit(),
            DayPart::SecondHalf => self.morning_unit() + 1,
        }
    }

    /// Last half-unit covered when this point caps the end of an interval.
    /// A first-half end stops before the afternoon; full and second-half ends do not.
    pub(crate) fn end_unit(&self) -> i64 {
        match self.part {
            DayPart::Full | DayPart::SecondHalf => self.morning_unit() + 1,
            DayPart::FirstHalf => self.morning_unit(),
        }
    }
}
