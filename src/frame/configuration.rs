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

//! Map frame settings read from `config.yaml`.
//!
//! A frame is described by four sections: the `view` rectangle with
//! its pixel width, the `datetime` of the day/night overlay, optional
//! `terminator` sampling and optional `resources`. Every section is
//! range-checked right after deserialization, so a [`Config`] in hand
//! is always safe to pass to [`Frame::evaluate`](crate::frame::Frame::evaluate).

use crate::constants::{MAX_MERCATOR_PROJECTION_LATITUDE, MAX_ZOOM, MIN_TERMINATOR_STEP};
use crate::ephemeris::DeclinationModel;
use crate::errors::ConfigError;
use chrono::{NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::Float;

/// Fields describing the map view being rendered.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Deserialize)]
pub struct View {
    /// Longitude (in degrees) of the west view edge.
    ///
    /// Must meet the condition: `-180 <= lon_min < lon_max <= 180`
    pub lon_min: Float,

    /// Longitude (in degrees) of the east view edge.
    pub lon_max: Float,

    /// Latitude (in degrees) of the south view edge.
    ///
    /// Must meet the condition: `-85.0511 <= lat_min < lat_max <= 85.0511`,
    /// the Web Mercator limit.
    pub lat_min: Float,

    /// Latitude (in degrees) of the north view edge.
    pub lat_max: Float,

    /// View width in screen pixels.
    ///
    /// Cannot be smaller than `1`.
    pub width: Float,

    /// _(Optional)_ Width of one tile image in pixels.
    ///
    /// Defaults to `256`. Cannot be smaller than `1`.
    #[serde(default = "View::default_tile_size")]
    pub tile_size: Float,

    /// _(Optional)_ Lowest and highest zoom level the tile
    /// provider serves.
    ///
    /// Defaults to `(0, 19)`. Must meet `0 <= min <= max <= 30`.
    #[serde(default = "View::default_zoom_limits")]
    pub zoom_limits: (i32, i32),

    /// _(Optional)_ Desired scale bar length in pixels.
    ///
    /// Defaults to `100`. Cannot be smaller than `1`.
    #[serde(default = "View::default_scale_bar")]
    pub scale_bar: Float,
}

impl View {
    /// Checks if view bounds and sizes follow conventions
    /// and limits.
    pub fn check_bounds(&self) -> Result<(), ConfigError> {
        if !(-180.0..=180.0).contains(&self.lon_min) || !(-180.0..=180.0).contains(&self.lon_max)
        {
            return Err(ConfigError::OutOfBounds(
                "View longitude is too low or too high",
            ));
        }

        let lat_range = -MAX_MERCATOR_PROJECTION_LATITUDE..=MAX_MERCATOR_PROJECTION_LATITUDE;

        if !lat_range.contains(&self.lat_min) || !lat_range.contains(&self.lat_max) {
            return Err(ConfigError::OutOfBounds(
                "View latitude is beyond the Web Mercator limit",
            ));
        }

        if self.lon_min >= self.lon_max || self.lat_min >= self.lat_max {
            return Err(ConfigError::OutOfBounds(
                "View minimum must be lower than its maximum",
            ));
        }

        if !(self.width >= 1.0) || !(self.tile_size >= 1.0) || !(self.scale_bar >= 1.0) {
            return Err(ConfigError::OutOfBounds(
                "View width, tile size and scale bar cannot be smaller than 1 px",
            ));
        }

        let (min_zoom, max_zoom) = self.zoom_limits;

        if min_zoom < 0 || max_zoom > MAX_ZOOM || min_zoom > max_zoom {
            return Err(ConfigError::OutOfBounds(
                "Zoom limits must be ordered and within 0 and 30",
            ));
        }

        Ok(())
    }

    fn default_tile_size() -> Float {
        256.0
    }

    fn default_zoom_limits() -> (i32, i32) {
        (0, 19)
    }

    fn default_scale_bar() -> Float {
        100.0
    }
}

/// Fields with information about time of the rendered frame.
#[derive(Clone, PartialEq, PartialOrd, Debug, Deserialize)]
pub struct DateTime {
    /// Instant (in UTC) for which the Sun and terminator
    /// are computed.
    pub time: NaiveDateTime,
}

impl DateTime {
    pub fn utc(&self) -> chrono::DateTime<Utc> {
        Utc.from_utc_datetime(&self.time)
    }
}

/// _(Optional)_ Fields controlling the day/night overlay.
#[derive(Copy, Clone, PartialEq, Debug, Deserialize)]
pub struct Terminator {
    /// _(Optional)_ Sweep step (in degrees) between terminator points.
    ///
    /// Defaults to `0.5`. Must meet the condition: `0.001 <= step <= 90`.
    #[serde(default = "Terminator::default_step")]
    pub step: Float,

    /// _(Optional)_ Declination approximation, `approximate` or `orbital`.
    ///
    /// Defaults to `approximate`.
    #[serde(default)]
    pub declination: DeclinationModel,
}

impl Terminator {
    fn default_step() -> Float {
        0.5
    }

    /// Checks if the sweep step is usable.
    pub fn check_bounds(&self) -> Result<(), ConfigError> {
        if !(self.step >= MIN_TERMINATOR_STEP && self.step <= 90.0) {
            return Err(ConfigError::OutOfBounds(
                "Terminator step must be between 0.001 and 90 degrees",
            ));
        }

        Ok(())
    }
}

impl Default for Terminator {
    fn default() -> Self {
        Terminator {
            step: Terminator::default_step(),
            declination: DeclinationModel::default(),
        }
    }
}

/// _(Optional)_ Limits the frame evaluation runs within.
#[derive(Clone, PartialEq, PartialOrd, Debug, Deserialize)]
pub struct Resources {
    /// _(Optional)_ Size of the pool sampling the terminator.
    ///
    /// At least `1`, which is also the default.
    #[serde(default = "Resources::default_threads")]
    pub threads: u16,

    /// _(Optional)_ Heap cap of the `cartograph` binary in MB.
    ///
    /// At least `16`. Unlimited when left out.
    #[serde(default = "Resources::default_memory")]
    pub memory: usize,
}

impl Resources {
    fn default_threads() -> u16 {
        1
    }

    fn default_memory() -> usize {
        usize::MAX / (1024 * 1024)
    }

    /// Rejects an empty pool and heap caps too small to hold a curve.
    pub fn check_bounds(&self) -> Result<(), ConfigError> {
        match (self.threads, self.memory) {
            (0, _) => Err(ConfigError::OutOfBounds("Terminator pool needs a thread")),
            (_, m) if m < 16 => Err(ConfigError::OutOfBounds("Heap cap is below 16 MB")),
            _ => Ok(()),
        }
    }
}

impl Default for Resources {
    fn default() -> Self {
        Resources {
            threads: Resources::default_threads(),
            memory: Resources::default_memory(),
        }
    }
}

/// Main config structure representing the fields in
/// configuration file.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct Config {
    pub view: View,

    pub datetime: DateTime,

    #[serde(default)]
    pub terminator: Terminator,

    #[serde(default)]
    pub resources: Resources,
}

impl Config {
    /// Config structure constructor, responsible for
    /// deserializing configuration and checking it.
    pub fn new_from_file(file_path: &Path) -> Result<Config, ConfigError> {
        let data = fs::read(file_path)?;
        Config::new_from_slice(data.as_slice())
    }

    /// Same as [`Config::new_from_file`] for configuration
    /// already in memory.
    pub fn new_from_slice(data: &[u8]) -> Result<Config, ConfigError> {
        let config: Config = serde_yaml::from_slice(data)?;

        config.view.check_bounds()?;
        config.terminator.check_bounds()?;
        config.resources.check_bounds()?;

        Ok(config)
    }
}
