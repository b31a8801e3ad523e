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

//! Module with methods to do computations
//! of the spherical Web Mercator projection used by tile maps.
//! Closely follows the formulas in:
//! <https://wiki.openstreetmap.org/wiki/Slippy_map_tilenames>
//!
//! None of the functions clamp their input. Latitudes beyond
//! [`MAX_MERCATOR_PROJECTION_LATITUDE`] make the log-tangent term diverge
//! and callers must clamp them before projecting. Longitude is not wrapped.

use std::f64::consts::PI;

use log::{debug, trace};

use crate::constants::{MAX_MERCATOR_PROJECTION_LATITUDE, WE_C_EARTH};
use crate::geo::{GeoCoordinate, TileIndex, Zoom};
use crate::{errors::ProjectionError, Float};

/// Function to project geographic coordinates (in degrees)
/// to fractional tile coordinates at given zoom.
pub fn lat_lon_to_tile(lat: Float, lon: Float, zoom: Zoom) -> (Float, Float) {
    let n = zoom.tile_count();
    let phi = lat.to_radians();

    let x = (lon + 180.0) / 360.0 * n;
    let y = (1.0 - ((phi.tan() + 1.0 / phi.cos()).ln() / PI)) / 2.0 * n;

    (x, y)
}

/// Function to inversly project fractional tile coordinates
/// at given zoom to geographic coordinates.
pub fn tile_to_lat_lon(x: Float, y: Float, zoom: Zoom) -> GeoCoordinate {
    let n = zoom.tile_count();

    let lon = x / n * 360.0 - 180.0;
    let lat = (PI * (1.0 - 2.0 * y / n)).sinh().atan();

    GeoCoordinate::new(lat.to_degrees(), lon)
}

/// Latitude to the continuous Mercator axis value,
/// scaled so that the equator maps to `0` and the axis
/// has the same units as longitude.
pub fn pseudo_mercator_latitude_to_y(lat: Float) -> Float {
    ((lat + 90.0) / 360.0 * PI).tan().ln() / PI * 180.0
}

/// Inverse of [`pseudo_mercator_latitude_to_y`].
pub fn y_to_latitude(y: Float) -> Float {
    ((y / 180.0 * PI).exp().atan() / PI * 360.0) - 90.0
}

/// Mercator adjustment factor, the secant of the latitude.
///
/// Horizontal distances at `lat` appear stretched by this factor.
pub fn mercator_adjustment(lat: Float) -> Float {
    1.0 / lat.abs().to_radians().cos()
}

/// Clamps latitude into the range the projection can represent.
pub fn clamp_latitude(lat: Float) -> Float {
    lat.clamp(
        -MAX_MERCATOR_PROJECTION_LATITUDE,
        MAX_MERCATOR_PROJECTION_LATITUDE,
    )
}

/// Ground width (in meters) of one tile measured along
/// the parallel at `lat`, on the spherical reference.
pub fn tile_ground_width(lat: Float, zoom: Zoom) -> Float {
    WE_C_EARTH * lat.to_radians().cos() / zoom.tile_count()
}

/// Ground distance (in meters) covered by one screen pixel
/// when tiles are drawn `tile_size` pixels wide.
pub fn meters_per_pixel(lat: Float, zoom: Zoom, tile_size: Float) -> Float {
    tile_ground_width(lat, zoom) / tile_size
}

/// Chooses the zoom at which a view spanning `lon_min..lon_max`
/// and `width` pixels is covered by tiles drawn `tile_size` pixels wide.
///
/// The result is clamped to `min_zoom..=max_zoom`.
pub fn zoom_for_view(
    lon_min: Float,
    lon_max: Float,
    width: Float,
    tile_size: Float,
    min_zoom: Zoom,
    max_zoom: Zoom,
) -> Result<Zoom, ProjectionError> {
    let span = ((lon_max + 180.0) / 360.0) - ((lon_min + 180.0) / 360.0);

    if !(span > 0.0) || !(width > 0.0) || !(tile_size > 0.0) {
        return Err(ProjectionError::EmptyView);
    }

    let tiles = width / tile_size;
    let level = (tiles / span).log2().round();

    let zoom = if level <= Float::from(min_zoom.level()) {
        min_zoom
    } else if level >= Float::from(max_zoom.level()) {
        max_zoom
    } else {
        Zoom::new(level as i32)?
    };

    debug!("Chosen zoom {} for {} tiles over {} of the globe", zoom, tiles, span);

    Ok(zoom)
}

/// Rectangle of integral tiles covering a view.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TileRange {
    pub zoom: Zoom,
    pub x: (u32, u32),
    pub y: (u32, u32),
}

impl TileRange {
    pub fn len(&self) -> usize {
        ((self.x.1 - self.x.0) as usize) * ((self.y.1 - self.y.0) as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tiles in column-major order, the order a renderer
    /// requests images in.
    pub fn iter(&self) -> impl Iterator<Item = TileIndex> + '_ {
        (self.x.0..self.x.1)
            .flat_map(move |x| (self.y.0..self.y.1).map(move |y| TileIndex::new(x, y, self.zoom)))
    }
}

/// Finds the tiles covering the view between two corners.
///
/// Fractional corners are clamped into the pyramid, NaN corners
/// (from unclamped polar latitudes) are replaced with the pyramid edge.
pub fn visible_tiles(north_west: GeoCoordinate, south_east: GeoCoordinate, zoom: Zoom) -> TileRange {
    let max_xy = zoom.tile_count();

    let (x0, y0) = lat_lon_to_tile(north_west.latitude, north_west.longitude, zoom);
    let (x1, y1) = lat_lon_to_tile(south_east.latitude, south_east.longitude, zoom);

    let x = clamp_span(x0, x1, max_xy);
    let y = clamp_span(y0, y1, max_xy);

    trace!("Visible tile span at zoom {}: x {:?}, y {:?}", zoom, x, y);

    TileRange { zoom, x, y }
}

fn clamp_span(a: Float, b: Float, max_xy: Float) -> (u32, u32) {
    let mut lo = a.min(b);
    let mut hi = a.max(b);

    if lo < 0.0 || lo.is_nan() {
        lo = 0.0;
    }

    if hi > max_xy || hi.is_nan() {
        hi = max_xy;
    }

    (lo.floor() as u32, hi.ceil().max(lo.floor()) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn zoom(level: i32) -> Zoom {
        Zoom::new(level).unwrap()
    }

    #[test]
    fn project() {
        let (lat_0, lon_0) = (54.41412855026378, 18.58973722443749);

        for level in [0, 1, 5, 12, 19] {
            let (x, y) = lat_lon_to_tile(lat_0, lon_0, zoom(level));
            let back = tile_to_lat_lon(x, y, zoom(level));

            assert!(approx_eq!(f64, back.latitude, lat_0, epsilon = 1e-9));
            assert!(approx_eq!(f64, back.longitude, lon_0, epsilon = 1e-9));
        }
    }

    #[test]
    fn round_trip_within_a_tile() {
        for level in [0, 3, 10, 18] {
            let width = 360.0 / zoom(level).tile_count();

            for lat in [-84.9, -45.0, -0.5, 0.0, 12.25, 60.0, 84.9] {
                for lon in [-179.5, -90.0, 0.0, 33.3, 179.5] {
                    let (x, y) = lat_lon_to_tile(lat, lon, zoom(level));
                    let tile = TileIndex::new(x.floor() as u32, y.floor() as u32, zoom(level));
                    let corner = tile_to_lat_lon(Float::from(tile.x), Float::from(tile.y), tile.zoom);

                    assert!((corner.longitude - lon).abs() <= width);
                    assert!(corner.latitude >= lat);
                }
            }
        }
    }

    #[test]
    fn known_tiles() {
        let (x, y) = lat_lon_to_tile(0.0, 0.0, zoom(1));
        assert!(approx_eq!(f64, x, 1.0, ulps = 2));
        assert!(approx_eq!(f64, y, 1.0, ulps = 2));

        let (x, y) = lat_lon_to_tile(MAX_MERCATOR_PROJECTION_LATITUDE, -180.0, zoom(4));
        assert!(approx_eq!(f64, x, 0.0, ulps = 2));
        assert!(approx_eq!(f64, y, 0.0, epsilon = 1e-9));
    }

    #[test]
    fn pole_diverges() {
        let (_, y) = lat_lon_to_tile(90.0, 0.0, zoom(2));
        assert!(y < -10.0 || !y.is_finite());

        let (_, y) = lat_lon_to_tile(clamp_latitude(90.0), 0.0, zoom(2));
        assert!(approx_eq!(f64, y, 0.0, epsilon = 1e-9));
    }

    #[test]
    fn nan_propagates() {
        let (x, y) = lat_lon_to_tile(Float::NAN, 10.0, zoom(3));
        assert!(x.is_finite());
        assert!(y.is_nan());
        assert!(pseudo_mercator_latitude_to_y(Float::NAN).is_nan());
    }

    #[test]
    fn axis_transform() {
        assert!(approx_eq!(f64, pseudo_mercator_latitude_to_y(0.0), 0.0, epsilon = 1e-12));

        for lat in [-85.0, -30.0, 0.0, 1.0, 45.0, 85.0] {
            let y = pseudo_mercator_latitude_to_y(lat);
            assert!(approx_eq!(f64, y_to_latitude(y), lat, epsilon = 1e-9));
        }

        let edge = pseudo_mercator_latitude_to_y(MAX_MERCATOR_PROJECTION_LATITUDE);
        assert!(approx_eq!(f64, edge, 180.0, epsilon = 1e-6));
    }

    #[test]
    fn adjustment() {
        assert!(approx_eq!(f64, mercator_adjustment(0.0), 1.0, ulps = 2));
        assert!(approx_eq!(f64, mercator_adjustment(60.0), 2.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, mercator_adjustment(-60.0), 2.0, epsilon = 1e-12));
    }

    #[test]
    fn ground_resolution() {
        let equator = tile_ground_width(0.0, zoom(0));
        assert!(approx_eq!(f64, equator, 40_075_016.685_578, epsilon = 1e-3));

        let mpp = meters_per_pixel(0.0, zoom(0), 256.0);
        assert!(approx_eq!(f64, mpp, 156_543.033_928, epsilon = 1e-3));

        let half = tile_ground_width(60.0, zoom(1));
        assert!(approx_eq!(f64, half, equator / 4.0, epsilon = 1e-6));
    }

    #[test]
    fn view_zoom() {
        // whole world on four 256 px tiles
        let z = zoom_for_view(-180.0, 180.0, 1024.0, 256.0, zoom(0), zoom(19)).unwrap();
        assert_eq!(z, zoom(2));

        let z = zoom_for_view(-0.24, 0.04, 800.0, 256.0, zoom(0), zoom(19)).unwrap();
        assert_eq!(z, zoom(12));

        let z = zoom_for_view(-0.24, 0.04, 800.0, 256.0, zoom(0), zoom(10)).unwrap();
        assert_eq!(z, zoom(10));

        let z = zoom_for_view(-180.0, 180.0, 100.0, 256.0, zoom(1), zoom(19)).unwrap();
        assert_eq!(z, zoom(1));

        assert_eq!(
            zoom_for_view(10.0, 10.0, 800.0, 256.0, zoom(0), zoom(19)),
            Err(ProjectionError::EmptyView)
        );
    }

    #[test]
    fn tiles_in_view() {
        let range = visible_tiles(
            GeoCoordinate::new(51.62, -0.24),
            GeoCoordinate::new(51.42, 0.04),
            zoom(10),
        );

        assert_eq!(range.x, (511, 513));
        assert_eq!(range.y, (339, 341));
        assert_eq!(range.len(), 4);

        let tiles: Vec<String> = range.iter().map(|t| t.to_string()).collect();
        assert_eq!(tiles, vec!["10-511-339", "10-511-340", "10-512-339", "10-512-340"]);
    }

    #[test]
    fn tiles_clamped_to_pyramid() {
        let range = visible_tiles(
            GeoCoordinate::new(90.0, -200.0),
            GeoCoordinate::new(-90.0, 200.0),
            zoom(2),
        );

        assert_eq!(range.x, (0, 4));
        assert_eq!(range.y, (0, 4));
        assert_eq!(range.iter().count(), 16);
    }
}
