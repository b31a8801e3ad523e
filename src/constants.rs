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

//! Module containing constants used by the crate.

use crate::Float;
use std::f64::consts::PI;

///WGS84 ellipsoid semi-major axis
pub const WGS84_A: Float = 6_378_137.0;

///WGS84 ellipsoid circumference along equator,
///the reference circle of Web Mercator tiles.
pub const WE_C_EARTH: Float = 2.0 * PI * WGS84_A;

///Latitude (in degrees) at which the Web Mercator
///tile pyramid becomes square: `atan(sinh(pi))`.
#[allow(clippy::excessive_precision)]
pub const MAX_MERCATOR_PROJECTION_LATITUDE: Float = 85.051_128_779_806_59;

///Deepest zoom level for which tile indices fit in `u32`.
pub const MAX_ZOOM: i32 = 30;

///Length of the international foot in meters.
pub const METERS_PER_FOOT: Float = 0.3048;

///Number of feet in a statute mile.
pub const FEET_PER_MILE: Float = 5280.0;

///Number of meters in a kilometer.
pub const METERS_PER_KILOMETER: Float = 1000.0;

///Day number (days since 1999-12-31 00:00 UTC) epoch offset
///of the integer calendar formula.
pub const DAY_NUMBER_EPOCH: i64 = 730_530;

///Glyph separating degrees in DMS text (U+00B0).
pub const DEGREE_SIGN: char = '\u{00b0}';

///Glyph separating minutes in DMS text (U+2032).
pub const MINUTE_SIGN: char = '\u{2032}';

///Glyph separating seconds in DMS text (U+2033).
pub const SECOND_SIGN: char = '\u{2033}';

///Finest terminator sweep step (in degrees), caps a curve at 360 001 points.
pub const MIN_TERMINATOR_STEP: Float = 1e-3;

///Most seconds decimals an `f64` degree value can still resolve.
pub const MAX_SECONDS_PLACES: usize = 15;
