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

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("Zoom level cannot be negative, got {0}")]
    NegativeZoom(i32),

    #[error("Zoom level {0} exceeds the deepest supported tile pyramid level")]
    ZoomTooDeep(i32),

    #[error("Requested view has no extent")]
    EmptyView,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("Cardinal direction must be one of N, S, E, W, got {0:?}")]
    InvalidCardinal(char),

    #[error("DMS text must split into 4 segments, got {0}")]
    SegmentCount(usize),

    #[error("Cannot parse DMS degrees: {0}")]
    Degrees(#[source] ParseIntError),

    #[error("Cannot parse DMS minutes: {0}")]
    Minutes(#[source] ParseIntError),

    #[error("Cannot parse DMS seconds: {0}")]
    Seconds(#[source] ParseFloatError),

    #[error("DMS cardinal segment must be a single character, got {0:?}")]
    CardinalLength(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EphemerisError {
    #[error("Ephemeris operation is not supported: {0}")]
    Unsupported(&'static str),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Frame settings could not be read: {0}")]
    CantOpenFile(#[from] std::io::Error),

    #[error("Frame settings are not valid YAML for a map view: {0}")]
    CantDeserialize(#[from] serde_yaml::Error),

    #[error("Frame setting out of range: {0}")]
    OutOfBounds(&'static str),
}

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Error while reading config.yaml: {0}")]
    Config(#[from] ConfigError),

    #[error("Error while resolving map tiles: {0}")]
    Projection(#[from] ProjectionError),

    #[error("Error while creating ThreadPool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Error while writing terminator points: {0}")]
    Csv(#[from] csv::Error),

    #[error("Error while writing output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot set heap memory limit of {0} MB")]
    MemoryLimit(usize),
}
