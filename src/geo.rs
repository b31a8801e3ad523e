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

//! Value types shared by the projection, formatting
//! and ephemeris modules.

use std::fmt;

use crate::constants::MAX_ZOOM;
use crate::{errors::ProjectionError, Float};

/// Point on the Earth surface, in degrees, with optional altitude.
///
/// Latitude is expected in `[-90, 90]` and longitude in `[-180, 180]`,
/// but neither is enforced so that NaN samples can flow through
/// rendering loops.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
pub struct GeoCoordinate {
    pub latitude: Float,
    pub longitude: Float,
    pub altitude: Option<Float>,
}

impl GeoCoordinate {
    pub fn new(latitude: Float, longitude: Float) -> Self {
        GeoCoordinate {
            latitude,
            longitude,
            altitude: None,
        }
    }

    pub fn with_altitude(latitude: Float, longitude: Float, altitude: Float) -> Self {
        GeoCoordinate {
            latitude,
            longitude,
            altitude: Some(altitude),
        }
    }

    pub fn has_altitude(&self) -> bool {
        self.altitude.is_some()
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.altitude {
            Some(alt) => write!(f, "{}, {}, {}", self.latitude, self.longitude, alt),
            None => write!(f, "{}, {}", self.latitude, self.longitude),
        }
    }
}

/// Level of the power-of-two tile pyramid.
///
/// Constructed only through [`Zoom::new`], so a negative
/// or too deep level never reaches the projection functions.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Zoom(u32);

impl Zoom {
    pub fn new(level: i32) -> Result<Self, ProjectionError> {
        if level < 0 {
            return Err(ProjectionError::NegativeZoom(level));
        }

        if level > MAX_ZOOM {
            return Err(ProjectionError::ZoomTooDeep(level));
        }

        Ok(Zoom(level as u32))
    }

    pub fn level(self) -> u32 {
        self.0
    }

    /// Number of tiles along each axis, `2^zoom`.
    pub fn tile_count(self) -> Float {
        Float::from(1u32 << self.0)
    }
}

impl TryFrom<i32> for Zoom {
    type Error = ProjectionError;

    fn try_from(level: i32) -> Result<Self, Self::Error> {
        Zoom::new(level)
    }
}

impl fmt::Display for Zoom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integral tile of the Web Mercator pyramid.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct TileIndex {
    pub zoom: Zoom,
    pub x: u32,
    pub y: u32,
}

impl TileIndex {
    pub fn new(x: u32, y: u32, zoom: Zoom) -> Self {
        TileIndex { zoom, x, y }
    }

    /// North-west and south-east corners of the tile.
    pub fn bounds(&self) -> (GeoCoordinate, GeoCoordinate) {
        let north_west =
            crate::projection::tile_to_lat_lon(Float::from(self.x), Float::from(self.y), self.zoom);
        let south_east = crate::projection::tile_to_lat_lon(
            Float::from(self.x) + 1.0,
            Float::from(self.y) + 1.0,
            self.zoom,
        );

        (north_west, south_east)
    }
}

/// Formats as the `{zoom}-{x}-{y}` key tile providers cache under.
impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}-{}", self.zoom, self.x, self.y)
    }
}
