// Copyright 2025 Mara Ellison (maraellison@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/dates.rs
//!
//! Date validation and normalization to `DD-MON-YYYY`
//!
//! Two input shapes are accepted:
//! 1. The canonical `DD-MON-YYYY` form itself (month case-insensitive),
//!    parsed with nom combinators and re-validated
//! 2. Generic calendar dates (`2025-08-28`, `08/28/2025`, `28 Aug 2025`, ...),
//!    parsed with chrono against a fixed format list
//!
//! Canonical-form day validation uses a simplified month-length table:
//! April, June, September, and November cap at 30 and February caps at 29
//! with NO leap-year check, so `29-FEB-2025` re-validates successfully in a
//! non-leap year. This matches the long-standing behaviour of the day-count
//! table and is deliberately left as is; the generic chrono path enforces
//! the real calendar. Years are accepted in [1900, 2100] on both paths.
//!
//! Failure produces `None` rather than an error: callers treat an invalid
//! date as blank, and the export gate in `validator.rs` decides when a
//! value must be valid before proceeding.

use chrono::{Datelike, NaiveDate};
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map_res},
    IResult, Parser,
};
use std::fmt;
use std::str::FromStr;

/// Accepted year range for visit dates.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2100;

/// Generic calendar formats tried, in order, for non-canonical input.
const GENERIC_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d %b %Y", "%B %d, %Y"];

/// The fixed twelve-month abbreviation set
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// Every month, January first.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// The canonical uppercase three-letter abbreviation.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Month::Jan => "JAN",
            Month::Feb => "FEB",
            Month::Mar => "MAR",
            Month::Apr => "APR",
            Month::May => "MAY",
            Month::Jun => "JUN",
            Month::Jul => "JUL",
            Month::Aug => "AUG",
            Month::Sep => "SEP",
            Month::Oct => "OCT",
            Month::Nov => "NOV",
            Month::Dec => "DEC",
        }
    }

    /// Converts a 1-based calendar month number.
    fn from_number(number: u32) -> Option<Month> {
        Month::ALL.get(number.checked_sub(1)? as usize).copied()
    }

    /// Highest day accepted for this month by the canonical-form validator.
    ///
    /// Simplified table: 30-day months are exact, February caps at 29
    /// without a leap-year check, everything else caps at 31.
    fn max_day(&self) -> u32 {
        match self {
            Month::Apr | Month::Jun | Month::Sep | Month::Nov => 30,
            Month::Feb => 29,
            _ => 31,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for Month {
    type Err = ();

    /// Parses a three-letter abbreviation, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        Month::ALL
            .iter()
            .copied()
            .find(|month| month.abbreviation() == upper)
            .ok_or(())
    }
}

/// A validated date in canonical `DD-MON-YYYY` form
///
/// Displays with the day zero-padded to two digits and the year to four,
/// so formatting then re-normalizing always round-trips to the same string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CanonicalDate {
    pub day: u32,
    pub month: Month,
    pub year: i32,
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{}-{:04}", self.day, self.month, self.year)
    }
}

/// Normalizes a free-text date string.
///
/// Returns `None` for anything that is not a date this application accepts;
/// never panics. Idempotent over its own output.
pub fn normalize(input: &str) -> Option<CanonicalDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Canonical-shape input is re-validated here and does NOT fall through
    // to the generic formats; 31-FEB must fail rather than be reinterpreted.
    if let Ok((_, (day, month, year))) = canonical_parts(trimmed) {
        return validated(day, month, year);
    }

    parse_generic(trimmed)
}

/// Convenience wrapper returning the canonical string form.
pub fn normalize_str(input: &str) -> Option<String> {
    normalize(input).map(|date| date.to_string())
}

/// Whether the input normalizes successfully.
pub fn is_valid(input: &str) -> bool {
    normalize(input).is_some()
}

/// Applies the day table and year range to parsed components.
fn validated(day: u32, month: Month, year: i32) -> Option<CanonicalDate> {
    if day >= 1 && day <= month.max_day() && YEAR_RANGE.contains(&year) {
        Some(CanonicalDate { day, month, year })
    } else {
        None
    }
}

/// nom parser for the `D?D-MON-YYYY` shape.
fn canonical_parts(input: &str) -> IResult<&str, (u32, Month, i32)> {
    let (rest, (day, _, month, _, year)) =
        all_consuming((day_number, char('-'), month_abbreviation, char('-'), year_number))
            .parse(input)?;
    Ok((rest, (day, month, year)))
}

/// One or two digit day.
fn day_number(input: &str) -> IResult<&str, u32> {
    map_res(
        take_while_m_n(1, 2, |c: char| c.is_ascii_digit()),
        |s: &str| s.parse::<u32>(),
    )
    .parse(input)
}

/// Exactly three letters, matched against the fixed abbreviation set.
fn month_abbreviation(input: &str) -> IResult<&str, Month> {
    map_res(
        take_while_m_n(3, 3, |c: char| c.is_ascii_alphabetic()),
        Month::from_str,
    )
    .parse(input)
}

/// Exactly four digit year.
fn year_number(input: &str) -> IResult<&str, i32> {
    map_res(
        take_while_m_n(4, 4, |c: char| c.is_ascii_digit()),
        |s: &str| s.parse::<i32>(),
    )
    .parse(input)
}

/// chrono fallback for generic calendar input.
///
/// The first format that parses decides the result; real-calendar validity
/// applies here, so `2025-02-29` fails in a non-leap year even though the
/// canonical table would accept `29-FEB-2025`.
fn parse_generic(input: &str) -> Option<CanonicalDate> {
    for format in GENERIC_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            let month = Month::from_number(date.month())?;
            return validated(date.day(), month, date.year());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_display() {
        assert_eq!(format!("{}", Month::Jan), "JAN");
        assert_eq!(format!("{}", Month::Dec), "DEC");
    }

    #[test]
    fn test_month_from_str_case_insensitive() {
        assert_eq!("aug".parse::<Month>(), Ok(Month::Aug));
        assert_eq!("AUG".parse::<Month>(), Ok(Month::Aug));
        assert_eq!("Aug".parse::<Month>(), Ok(Month::Aug));
        assert!("August".parse::<Month>().is_err());
    }

    #[test]
    fn test_canonical_date_display_zero_pads() {
        let date = CanonicalDate {
            day: 8,
            month: Month::Aug,
            year: 2025,
        };
        assert_eq!(date.to_string(), "08-AUG-2025");
    }
}
