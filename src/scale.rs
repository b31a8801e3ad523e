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

//! Module rounding raw distances to values
//! a map scale bar can be labelled with.

use log::trace;

use crate::constants::{FEET_PER_MILE, METERS_PER_FOOT, METERS_PER_KILOMETER};
use crate::Float;

/// Splits distance (rounded to whole units, at least `1`)
/// into leading digit and power of ten.
fn leading_digit(distance: Float) -> (Float, Float) {
    let nearest = distance.round().max(1.0);

    let mut magnitude = nearest.log10().floor();
    if (10.0 as Float).powf(magnitude + 1.0) <= nearest {
        magnitude += 1.0;
    }

    let factor = (10.0 as Float).powf(magnitude);

    ((nearest / factor).round(), factor)
}

/// Rounds distance to the 1-2-5 preferred number sequence.
///
/// Leading digits `3` and `4` fall to `2`, digits from `6` up fall to `5`.
/// Values of the sequence map to themselves, so the function
/// is idempotent as well as non-decreasing.
pub fn round_nice(distance: Float) -> Float {
    if distance.is_nan() || distance == Float::INFINITY {
        return distance;
    }

    let (digit, factor) = leading_digit(distance);

    let nice = if digit <= 2.0 {
        digit
    } else if digit < 5.0 {
        2.0
    } else {
        5.0
    };

    nice * factor
}

/// Rounds distance to its single leading digit, without
/// restricting the digit to the 1-2-5 sequence.
pub fn round_nice_decadic(distance: Float) -> Float {
    if distance.is_nan() || distance == Float::INFINITY {
        return distance;
    }

    let (digit, factor) = leading_digit(distance);

    digit * factor
}

pub fn meters_to_feet(meters: Float) -> Float {
    meters / METERS_PER_FOOT
}

pub fn feet_to_meters(feet: Float) -> Float {
    feet * METERS_PER_FOOT
}

/// Label in meters up to one kilometer, whole kilometers above.
pub fn format_meters(meters: Float) -> String {
    if meters > METERS_PER_KILOMETER {
        format!("{:.0} km", meters / METERS_PER_KILOMETER)
    } else {
        format!("{:.0} m", meters)
    }
}

/// Label in feet up to one mile, whole miles above.
pub fn format_feet(feet: Float) -> String {
    if feet > FEET_PER_MILE {
        format!("{:.0} mi", feet / FEET_PER_MILE)
    } else {
        format!("{:.0} ft", feet)
    }
}

/// Metric and imperial scale bars drawn from a common origin.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
pub struct ScaleBar {
    /// Rounded metric length in meters.
    pub meters: Float,
    /// Screen length of the metric bar in whole pixels.
    pub meters_pixels: Float,
    /// Rounded imperial length in feet.
    pub feet: Float,
    /// Screen length of the imperial bar in whole pixels.
    pub feet_pixels: Float,
}

impl ScaleBar {
    /// Scale bars about `target_pixels` long for a map drawn
    /// at `meters_per_pixel` ground resolution.
    ///
    /// Returns `None` when the resolution is not positive and finite,
    /// or when rounding would stretch the metric bar beyond
    /// 2.5 times the target (which happens when zoomed below a meter).
    pub fn new(meters_per_pixel: Float, target_pixels: Float) -> Option<Self> {
        if !(meters_per_pixel > 0.0 && meters_per_pixel.is_finite()) || !(target_pixels > 0.0) {
            return None;
        }

        let distance = meters_per_pixel * target_pixels;

        let meters = round_nice(distance);
        let meters_pixels = (meters / meters_per_pixel).round();

        if meters_pixels > 2.5 * target_pixels {
            trace!("Scale bar of {} px too long for {} m", meters_pixels, meters);
            return None;
        }

        let feet = round_nice(meters_to_feet(distance));
        let feet_pixels = (feet_to_meters(feet) / meters_per_pixel).round();

        Some(ScaleBar {
            meters,
            meters_pixels,
            feet,
            feet_pixels,
        })
    }

    /// Length of the common baseline.
    pub fn pixels(&self) -> Float {
        self.meters_pixels.max(self.feet_pixels)
    }

    pub fn meters_label(&self) -> String {
        format_meters(self.meters)
    }

    pub fn feet_label(&self) -> String {
        format_feet(self.feet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn one_two_five() {
        assert_eq!(round_nice(0.2), 1.0);
        assert_eq!(round_nice(1.0), 1.0);
        assert_eq!(round_nice(2.4), 2.0);
        assert_eq!(round_nice(3.0), 2.0);
        assert_eq!(round_nice(44.0), 20.0);
        assert_eq!(round_nice(45.0), 50.0);
        assert_eq!(round_nice(73.0), 50.0);
        assert_eq!(round_nice(96.0), 50.0);
        assert_eq!(round_nice(100.0), 100.0);
        assert_eq!(round_nice(1234.0), 1000.0);
        assert_eq!(round_nice(1_850.0), 2000.0);
        assert_eq!(round_nice(7_654_321.0), 5_000_000.0);
    }

    #[test]
    fn decadic() {
        assert_eq!(round_nice_decadic(0.4), 1.0);
        assert_eq!(round_nice_decadic(34.0), 30.0);
        assert_eq!(round_nice_decadic(73.0), 70.0);
        assert_eq!(round_nice_decadic(96.0), 100.0);
        assert_eq!(round_nice_decadic(1234.0), 1000.0);
        assert_eq!(round_nice_decadic(8_765.0), 9000.0);
    }

    #[test]
    fn monotonic_and_idempotent() {
        let mut previous = (0.0, 0.0);
        let mut distance = 0.0;

        while distance < 2_000_000.0 {
            let nice = round_nice(distance);
            let dec = round_nice_decadic(distance);

            assert!(nice >= previous.0, "round_nice({}) decreased", distance);
            assert!(dec >= previous.1, "round_nice_decadic({}) decreased", distance);
            assert_eq!(round_nice(nice), nice);
            assert_eq!(round_nice_decadic(dec), dec);

            previous = (nice, dec);
            distance = distance * 1.013 + 0.37;
        }
    }

    #[test]
    fn non_finite() {
        assert!(round_nice(Float::NAN).is_nan());
        assert!(round_nice_decadic(Float::NAN).is_nan());
        assert_eq!(round_nice(Float::INFINITY), Float::INFINITY);
        assert_eq!(round_nice(Float::NEG_INFINITY), 1.0);
    }

    #[test]
    fn labels() {
        assert_eq!(format_meters(500.0), "500 m");
        assert_eq!(format_meters(1000.0), "1000 m");
        assert_eq!(format_meters(2000.0), "2 km");
        assert_eq!(format_feet(200.0), "200 ft");
        assert_eq!(format_feet(5280.0), "5280 ft");
        assert_eq!(format_feet(10_560.0), "2 mi");
    }

    #[test]
    fn unit_conversion() {
        assert!(approx_eq!(f64, meters_to_feet(0.3048), 1.0, ulps = 2));
        assert!(approx_eq!(f64, feet_to_meters(5280.0), 1609.344, epsilon = 1e-9));
    }

    #[test]
    fn scale_bar() {
        // ~ zoom 12 at the equator with 256 px tiles
        let bar = ScaleBar::new(38.218_514, 100.0).unwrap();

        assert_eq!(bar.meters, 2000.0);
        assert_eq!(bar.meters_pixels, 52.0);
        assert_eq!(bar.feet, 10_000.0);
        assert_eq!(bar.feet_pixels, 80.0);
        assert_eq!(bar.pixels(), 80.0);
        assert_eq!(bar.meters_label(), "2 km");
        assert_eq!(bar.feet_label(), "2 mi");
    }

    #[test]
    fn scale_bar_too_long() {
        assert!(ScaleBar::new(0.001, 100.0).is_none());
        assert!(ScaleBar::new(0.0, 100.0).is_none());
        assert!(ScaleBar::new(Float::NAN, 100.0).is_none());
        assert!(ScaleBar::new(1.0, 100.0).is_some());
    }
}
