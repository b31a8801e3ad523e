/*
Copyright 2022 Jakub Lewandowski

This file is part of Cartograph.

Cartograph is a free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation; either version 3 of the License, or
(at your option) any later version.

Cartograph is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with Cartograph. If not, see https://www.gnu.org/licenses/.
*/

//! Calendar arithmetic turning UTC timestamps into
//! the continuous day counts used by the orbit formulas.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::constants::DAY_NUMBER_EPOCH;
use crate::Float;

/// Hours elapsed since midnight UTC, with fractions.
pub fn hours_of_day(date: &DateTime<Utc>) -> Float {
    Float::from(date.hour())
        + Float::from(date.minute()) / 60.0
        + (Float::from(date.second()) + Float::from(date.nanosecond()) / 1e9) / 3600.0
}

/// Day number `d` counted from 1999-12-31 00:00 UTC (`d = 0`).
///
/// Whole days come from integer calendar arithmetic valid
/// for the Gregorian years 1900-2100, the time of day is added as a fraction.
pub fn day_number(date: &DateTime<Utc>) -> Float {
    let y = i64::from(date.year());
    let m = i64::from(date.month());
    let d = i64::from(date.day());

    let days = 367 * y - (7 * (y + (m + 9) / 12)) / 4 + (275 * m) / 9 + d - DAY_NUMBER_EPOCH;

    days as Float + hours_of_day(date) / 24.0
}

/// Days since the most recent December 31st,
/// so that midnight opening January 1st is `1.0`.
pub fn fractional_day_of_year(date: &DateTime<Utc>) -> Float {
    Float::from(date.ordinal()) + hours_of_day(date) / 24.0
}

#[cfg(test)]
pub(crate) fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    use chrono::{NaiveDate, TimeZone};

    let naive = NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, s))
        .unwrap();

    Utc.from_utc_datetime(&naive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn day_number_origin() {
        assert_eq!(day_number(&utc(1999, 12, 31, 0, 0, 0)), 0.0);
        assert_eq!(day_number(&utc(2000, 1, 1, 0, 0, 0)), 1.0);
        assert_eq!(day_number(&utc(1999, 12, 31, 12, 0, 0)), 0.5);
    }

    #[test]
    fn day_number_tutorial() {
        assert_eq!(day_number(&utc(1990, 4, 19, 0, 0, 0)), -3543.0);
    }

    #[test]
    fn day_number_is_continuous() {
        let leap = day_number(&utc(2024, 3, 1, 0, 0, 0)) - day_number(&utc(2024, 2, 28, 0, 0, 0));
        assert_eq!(leap, 2.0);

        let common = day_number(&utc(2023, 3, 1, 0, 0, 0)) - day_number(&utc(2023, 2, 28, 0, 0, 0));
        assert_eq!(common, 1.0);

        let year = day_number(&utc(2001, 1, 1, 0, 0, 0)) - day_number(&utc(2000, 1, 1, 0, 0, 0));
        assert_eq!(year, 366.0);
    }

    #[test]
    fn time_of_day() {
        let date = utc(2022, 6, 1, 18, 30, 36);
        assert!(approx_eq!(f64, hours_of_day(&date), 18.51, epsilon = 1e-12));
        assert!(approx_eq!(
            f64,
            fractional_day_of_year(&date),
            152.0 + 18.51 / 24.0,
            epsilon = 1e-12
        ));
        assert_eq!(fractional_day_of_year(&utc(2022, 1, 1, 0, 0, 0)), 1.0);
    }
}
