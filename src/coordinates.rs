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

//! Module converting decimal degrees to and from
//! degrees-minutes-seconds (DMS) text like `38°53′23″N`.
//!
//! The degree (U+00B0), minute (U+2032) and second (U+2033) glyphs
//! are fixed, so text produced here can be parsed back.

use std::fmt;

use crate::constants::{DEGREE_SIGN, MAX_SECONDS_PLACES, MINUTE_SIGN, SECOND_SIGN};
use crate::geo::GeoCoordinate;
use crate::{errors::CoordinateError, Float};

/// Cardinal direction closing a DMS text.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Cardinal {
    North,
    South,
    East,
    West,
}

impl Cardinal {
    /// Direction of a signed value, zero counts as positive.
    pub fn from_sign(value: Float, is_latitude: bool) -> Self {
        match (is_latitude, value < 0.0) {
            (true, false) => Cardinal::North,
            (true, true) => Cardinal::South,
            (false, false) => Cardinal::East,
            (false, true) => Cardinal::West,
        }
    }

    pub fn sign(self) -> Float {
        match self {
            Cardinal::North | Cardinal::East => 1.0,
            Cardinal::South | Cardinal::West => -1.0,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Cardinal::North => 'N',
            Cardinal::South => 'S',
            Cardinal::East => 'E',
            Cardinal::West => 'W',
        }
    }
}

impl TryFrom<char> for Cardinal {
    type Error = CoordinateError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        match letter {
            'N' => Ok(Cardinal::North),
            'S' => Ok(Cardinal::South),
            'E' => Ok(Cardinal::East),
            'W' => Ok(Cardinal::West),
            other => Err(CoordinateError::InvalidCardinal(other)),
        }
    }
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Formats decimal degrees as DMS text.
///
/// Degrees and minutes are truncated, seconds are rounded to
/// `seconds_places` decimals, at most [`MAX_SECONDS_PLACES`].
/// Each field has at least two integer digits.
/// Seconds that round up to 60 carry into minutes (and minutes into degrees)
/// so the text always parses back.
pub fn decimal_to_dms(value: Float, is_latitude: bool, seconds_places: usize) -> String {
    let seconds_places = seconds_places.min(MAX_SECONDS_PLACES);
    let cardinal = Cardinal::from_sign(value, is_latitude);
    let abs = value.abs();

    let mut degrees = abs.trunc();
    let fraction = abs - degrees;
    let mut minutes = (60.0 * fraction).trunc();
    let mut seconds = round_to(3600.0 * fraction - 60.0 * minutes, seconds_places);

    if seconds >= 60.0 {
        seconds -= 60.0;
        minutes += 1.0;
    }

    if minutes >= 60.0 {
        minutes -= 60.0;
        degrees += 1.0;
    }

    let seconds_width = if seconds_places > 0 {
        seconds_places + 3
    } else {
        2
    };

    format!(
        "{:02}{}{:02}{}{:0width$.places$}{}{}",
        degrees,
        DEGREE_SIGN,
        minutes,
        MINUTE_SIGN,
        seconds,
        SECOND_SIGN,
        cardinal,
        width = seconds_width,
        places = seconds_places,
    )
}

/// Formats a coordinate as `latitude, longitude` DMS pair.
pub fn format_coordinate(coordinate: GeoCoordinate, seconds_places: usize) -> String {
    format!(
        "{}, {}",
        decimal_to_dms(coordinate.latitude, true, seconds_places),
        decimal_to_dms(coordinate.longitude, false, seconds_places)
    )
}

/// Converts DMS fields to decimal degrees, signed by the cardinal letter.
pub fn dms_to_decimal(
    degrees: u32,
    minutes: u32,
    seconds: Float,
    cardinal: char,
) -> Result<Float, CoordinateError> {
    let cardinal = Cardinal::try_from(cardinal)?;

    Ok(cardinal.sign() * (Float::from(degrees) + Float::from(minutes) / 60.0 + seconds / 3600.0))
}

/// Parses DMS text back to decimal degrees.
pub fn parse_dms(text: &str) -> Result<Float, CoordinateError> {
    let segments: Vec<&str> = text
        .split(|c: char| c == DEGREE_SIGN || c == MINUTE_SIGN || c == SECOND_SIGN)
        .map(str::trim)
        .collect();

    if segments.len() != 4 {
        return Err(CoordinateError::SegmentCount(segments.len()));
    }

    let degrees = segments[0].parse::<u32>().map_err(CoordinateError::Degrees)?;
    let minutes = segments[1].parse::<u32>().map_err(CoordinateError::Minutes)?;
    let seconds = segments[2].parse::<Float>().map_err(CoordinateError::Seconds)?;

    let mut cardinal = segments[3].chars();
    let letter = match (cardinal.next(), cardinal.next()) {
        (Some(letter), None) => letter,
        _ => return Err(CoordinateError::CardinalLength(segments[3].to_string())),
    };

    dms_to_decimal(degrees, minutes, seconds, letter)
}

fn round_to(value: Float, places: usize) -> Float {
    let factor = (10.0 as Float).powi(places as i32);
    (value * factor).round() / factor
}
