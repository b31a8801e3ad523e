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

//! Sub-solar point and the day/night terminator.
//!
//! The terminator is the great circle 90 degrees away from the
//! sub-solar point. It is traced by the sweep angle `phi`, the distance
//! along the circle from one of its equator crossings.
//! See <https://www.aa.quae.nl/en/antwoorden/zonpositie.html>.

use chrono::{DateTime, Utc};
use log::debug;
use ndarray::Array1;
use rayon::prelude::*;
use serde::Deserialize;

use super::calendar::hours_of_day;
use super::normalize180;
use super::orbit::{declination, SunPosition};
use crate::constants::MIN_TERMINATOR_STEP;
use crate::errors::EphemerisError;
use crate::geo::GeoCoordinate;
use crate::Float;

/// Which approximation of the Sun declination to use.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclinationModel {
    /// Closed form from the day of the year.
    Approximate,
    /// Full orbital elements pipeline.
    Orbital,
}

impl Default for DeclinationModel {
    fn default() -> Self {
        DeclinationModel::Approximate
    }
}

impl DeclinationModel {
    pub fn declination(self, date: &DateTime<Utc>) -> Float {
        match self {
            DeclinationModel::Approximate => declination(date),
            DeclinationModel::Orbital => SunPosition::at(date).declination,
        }
    }
}

/// Point where the Sun is at zenith, using the cheap declination.
pub fn subsolar_point(date: &DateTime<Utc>) -> GeoCoordinate {
    subsolar_point_with(date, DeclinationModel::Approximate)
}

/// Point where the Sun is at zenith.
///
/// Latitude is the declination, longitude is `180 - 15 t`
/// for `t` hours past midnight UTC, wrapped into `[-180, 180]`.
pub fn subsolar_point_with(date: &DateTime<Utc>, model: DeclinationModel) -> GeoCoordinate {
    let lat = model.declination(date);
    let lon = normalize180(180.0 - 15.0 * hours_of_day(date));

    GeoCoordinate::new(lat, lon)
}

/// Terminator point at sweep angle `phi` (degrees) for given sub-solar point.
pub fn terminator_from(subsolar: GeoCoordinate, phi: Float) -> GeoCoordinate {
    let (sin_phi, cos_phi) = phi.to_radians().sin_cos();
    let (sin_l, cos_l) = subsolar.longitude.to_radians().sin_cos();
    let (sin_b, cos_b) = subsolar.latitude.to_radians().sin_cos();

    let big_b = (cos_b * sin_phi).asin();

    let x = -cos_l * sin_b * sin_phi - sin_l * cos_phi;
    let y = -sin_l * sin_b * sin_phi + cos_l * cos_phi;
    let big_l = y.atan2(x);

    GeoCoordinate::new(big_b.to_degrees(), big_l.to_degrees())
}

/// Terminator point at sweep angle `phi` (degrees) at `date`.
pub fn terminator(date: &DateTime<Utc>, phi: Float) -> GeoCoordinate {
    terminator_from(subsolar_point(date), phi)
}

/// Closed terminator polyline sampled every `step` degrees of sweep.
///
/// The first and last points are both at `phi = 0`/`360`.
/// Points are computed in parallel on the current rayon pool and
/// returned in sweep order. Steps finer than [`MIN_TERMINATOR_STEP`]
/// (including non-positive ones) give an empty curve.
pub fn terminator_curve(
    date: &DateTime<Utc>,
    step: Float,
    model: DeclinationModel,
) -> Vec<GeoCoordinate> {
    if !(step >= MIN_TERMINATOR_STEP) || !step.is_finite() {
        debug!("Refusing to sample terminator with step {}", step);
        return vec![];
    }

    let subsolar = subsolar_point_with(date, model);
    let samples = match ((360.0 / step).ceil() as usize).checked_add(1) {
        Some(samples) => samples,
        None => return vec![],
    };

    debug!(
        "Sampling terminator at {} points around sub-solar point {}",
        samples, subsolar
    );

    Array1::linspace(0.0, 360.0, samples)
        .to_vec()
        .into_par_iter()
        .map(|phi| terminator_from(subsolar, phi))
        .collect()
}

/// Hour angle of the Sun at given longitude.
///
/// Not implemented, and never approximated.
pub fn solar_hour_angle(_date: &DateTime<Utc>, _longitude: Float) -> Result<Float, EphemerisError> {
    Err(EphemerisError::Unsupported("solar hour angle"))
}
