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

//! Orbital elements of the Sun (as seen from the Earth)
//! and its equatorial coordinates.
//!
//! Angles are in degrees, `d` is the day number
//! from [`super::calendar::day_number`].

use chrono::{DateTime, Utc};
use nalgebra::{Rotation3, Vector3};

use super::calendar::{day_number, fractional_day_of_year};
use super::normalize360;
use crate::Float;

pub fn mean_anomaly(d: Float) -> Float {
    normalize360(356.0470 + 0.985_600_258_5 * d)
}

pub fn eccentricity(d: Float) -> Float {
    0.016_709 - 1.151e-9 * d
}

pub fn argument_of_perihelion(d: Float) -> Float {
    282.9404 + 4.70935e-5 * d
}

pub fn obliquity_of_ecliptic(d: Float) -> Float {
    23.4393 - 3.563e-7 * d
}

/// Eccentric anomaly from mean anomaly `m` and eccentricity `e`.
///
/// A single first-order step of Kepler's equation, good to about an
/// arcminute for the Earth's orbit. Not iterated.
pub fn eccentric_anomaly(m: Float, e: Float) -> Float {
    let m_rad = m.to_radians();

    m + e * (180.0 / std::f64::consts::PI) * m_rad.sin() * (1.0 + e * m_rad.cos())
}

/// Elements of the Sun's apparent orbit at one instant.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
pub struct OrbitalElements {
    pub mean_anomaly: Float,
    pub eccentricity: Float,
    pub argument_of_perihelion: Float,
    pub obliquity_of_ecliptic: Float,
}

impl OrbitalElements {
    pub fn at_day(d: Float) -> Self {
        OrbitalElements {
            mean_anomaly: mean_anomaly(d),
            eccentricity: eccentricity(d),
            argument_of_perihelion: argument_of_perihelion(d),
            obliquity_of_ecliptic: obliquity_of_ecliptic(d),
        }
    }

    pub fn at(date: &DateTime<Utc>) -> Self {
        OrbitalElements::at_day(day_number(date))
    }

    pub fn eccentric_anomaly(&self) -> Float {
        eccentric_anomaly(self.mean_anomaly, self.eccentricity)
    }

    pub fn sun_position(&self) -> SunPosition {
        sun_position(
            self.mean_anomaly,
            self.eccentricity,
            self.argument_of_perihelion,
            self.obliquity_of_ecliptic,
        )
    }
}

/// Equatorial coordinates of the Sun, in degrees.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
pub struct SunPosition {
    /// In `(-180, 180]`, as returned by `atan2`.
    pub right_ascension: Float,
    pub declination: Float,
}

impl SunPosition {
    pub fn at_day(d: Float) -> Self {
        OrbitalElements::at_day(d).sun_position()
    }

    pub fn at(date: &DateTime<Utc>) -> Self {
        SunPosition::at_day(day_number(date))
    }

    /// Right ascension in hours, wrapped into `[0, 24)`.
    pub fn right_ascension_hours(&self) -> Float {
        normalize360(self.right_ascension) / 15.0
    }
}

/// Sun position from its orbital elements.
///
/// The position in the orbit plane (true anomaly and distance from the
/// eccentric anomaly) is turned by the argument of perihelion into ecliptic
/// longitude, and the ecliptic vector is then rotated by the obliquity
/// about the vernal equinox axis into the equatorial frame.
pub fn sun_position(m: Float, e: Float, w: Float, obliquity: Float) -> SunPosition {
    let big_e = eccentric_anomaly(m, e).to_radians();

    let xv = big_e.cos() - e;
    let yv = (1.0 - e * e).sqrt() * big_e.sin();

    let v = yv.atan2(xv);
    let r = xv.hypot(yv);
    let lon = v + w.to_radians();

    let ecliptic = Vector3::new(r * lon.cos(), r * lon.sin(), 0.0);
    let tilt = Rotation3::from_axis_angle(&Vector3::x_axis(), obliquity.to_radians());
    let equatorial = tilt * ecliptic;

    SunPosition {
        right_ascension: equatorial.y.atan2(equatorial.x).to_degrees(),
        declination: equatorial.z.atan2(equatorial.x.hypot(equatorial.y)).to_degrees(),
    }
}

/// Cheap declination from the fractional day of the year,
/// `22.8 sin(l) + 0.6 sin^3(l)` with ecliptic longitude `l`
/// from a simplified mean anomaly. Good to a few tenths of a degree.
pub fn approximate_declination(day_of_year: Float) -> Float {
    let m = -3.6 + 0.9856 * day_of_year;
    let nu = m + 1.9 * m.to_radians().sin();
    let lambda = nu + 102.9 + 180.0;

    let sin_lambda = lambda.to_radians().sin();

    22.8 * sin_lambda + 0.6 * sin_lambda.powi(3)
}

/// Declination of the Sun at `date` from [`approximate_declination`].
pub fn declination(date: &DateTime<Utc>) -> Float {
    approximate_declination(fractional_day_of_year(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::calendar::utc;
    use float_cmp::approx_eq;

    #[test]
    fn tutorial() {
        // http://www.stjarnhimlen.se/comp/tutorial.html#5
        let date = utc(1990, 4, 19, 0, 0, 0);
        let d = day_number(&date);
        assert_eq!(d, -3543.0);

        let m = mean_anomaly(d);
        assert!(approx_eq!(f64, m, 104.0653, epsilon = 1e-4));

        let w = argument_of_perihelion(d);
        assert!(approx_eq!(f64, w, 282.7735, epsilon = 1e-4));

        let e = eccentricity(d);
        assert!(approx_eq!(f64, e, 0.016713, epsilon = 1e-6));

        let oblecl = obliquity_of_ecliptic(d);
        assert!(approx_eq!(f64, oblecl, 23.4406, epsilon = 1e-4));

        let big_e = eccentric_anomaly(m, e);
        assert!(approx_eq!(f64, big_e, 104.9904, epsilon = 1e-4));

        let pos = sun_position(m, e, w, oblecl);
        assert!(approx_eq!(f64, pos.right_ascension, 26.6580, epsilon = 1e-3));
        assert!(approx_eq!(f64, pos.declination, 11.0084, epsilon = 1e-4));
    }

    #[test]
    fn date_wrappers_match_day_number_core() {
        let date = utc(1990, 4, 19, 0, 0, 0);
        let elements = OrbitalElements::at(&date);

        assert_eq!(elements, OrbitalElements::at_day(-3543.0));
        assert!(approx_eq!(f64, elements.eccentric_anomaly(), 104.9904, epsilon = 1e-4));
        assert_eq!(SunPosition::at(&date), elements.sun_position());
        assert_eq!(SunPosition::at_day(-3543.0), elements.sun_position());
    }

    #[test]
    fn right_ascension_in_hours() {
        let pos = SunPosition::at(&utc(1990, 4, 19, 0, 0, 0));
        // 1h 46m 37.9s
        assert!(approx_eq!(f64, pos.right_ascension_hours(), 1.777_2, epsilon = 1e-3));

        let negative = SunPosition {
            right_ascension: -90.0,
            declination: 0.0,
        };
        assert!(approx_eq!(f64, negative.right_ascension_hours(), 18.0, ulps = 2));
    }

    #[test]
    fn circular_orbit_has_no_correction() {
        assert_eq!(eccentric_anomaly(123.0, 0.0), 123.0);
        assert!(approx_eq!(f64, eccentric_anomaly(0.0, 0.0167), 0.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, eccentric_anomaly(180.0, 0.0167), 180.0, epsilon = 1e-9));
    }

    #[test]
    fn equinox_and_solstice_declination() {
        let june = SunPosition::at(&utc(2024, 6, 20, 21, 0, 0));
        assert!(approx_eq!(f64, june.declination, 23.44, epsilon = 0.02));

        let december = SunPosition::at(&utc(2024, 12, 21, 9, 0, 0));
        assert!(approx_eq!(f64, december.declination, -23.44, epsilon = 0.02));

        let march = SunPosition::at(&utc(2024, 3, 20, 3, 0, 0));
        assert!(march.declination.abs() < 0.05);
    }

    #[test]
    fn approximations_agree() {
        // near the solstices both agree to a few hundredths
        for date in [utc(2024, 6, 20, 12, 0, 0), utc(2026, 12, 21, 12, 0, 0)] {
            let cheap = declination(&date);
            let full = SunPosition::at(&date).declination;
            assert!((cheap - full).abs() < 0.05, "{} vs {}", cheap, full);
        }

        // and within a few tenths anywhere in the year
        for day in 0..365 {
            let date = utc(2026, 1, 1, 12, 0, 0) + chrono::Duration::days(day);
            let cheap = declination(&date);
            let full = SunPosition::at(&date).declination;
            assert!((cheap - full).abs() < 0.2, "{} vs {} on {}", cheap, full, date);
        }
    }

    #[test]
    fn nan_day_propagates() {
        let pos = SunPosition::at_day(Float::NAN);
        assert!(pos.right_ascension.is_nan());
        assert!(pos.declination.is_nan());
        assert!(approximate_declination(Float::NAN).is_nan());
    }
}
