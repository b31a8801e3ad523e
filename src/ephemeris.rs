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

//! Module computing the apparent position of the Sun
//! and the day/night terminator it casts on the Earth.
//!
//! Orbital elements follow the low-precision formulas of
//! <http://www.stjarnhimlen.se/comp/tutorial.html>, accurate
//! to about one arcminute. That is plenty for a map overlay and
//! not meant for anything needing an ephemeris.
//!
//! All functions are pure. The core works on the continuous
//! day number (see [`calendar::day_number`]) and the timestamp
//! variants only convert the date before calling it.

pub mod calendar;
pub mod orbit;
pub mod terminator;

pub use calendar::{day_number, fractional_day_of_year, hours_of_day};
pub use orbit::{
    approximate_declination, argument_of_perihelion, declination, eccentric_anomaly,
    eccentricity, mean_anomaly, obliquity_of_ecliptic, sun_position, OrbitalElements,
    SunPosition,
};
pub use terminator::{
    solar_hour_angle, subsolar_point, subsolar_point_with, terminator, terminator_curve,
    terminator_from, DeclinationModel,
};

use crate::Float;

/// Wraps angle (in degrees) into `[-180, 180]` by whole turns.
///
/// Values already in range are returned unchanged, so both
/// `-180` and `180` are fixed points. Non-finite values pass through.
pub fn normalize180(angle: Float) -> Float {
    if !angle.is_finite() || (-180.0..=180.0).contains(&angle) {
        return angle;
    }

    if angle > 180.0 {
        angle - 360.0 * ((angle - 180.0) / 360.0).ceil()
    } else {
        angle + 360.0 * ((-180.0 - angle) / 360.0).ceil()
    }
}

/// Wraps angle (in degrees) into `[0, 360)`.
pub fn normalize360(angle: Float) -> Float {
    angle - 360.0 * (angle / 360.0).floor()
}
