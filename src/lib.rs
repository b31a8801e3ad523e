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

//! Cartograph is the mathematical core of an interactive tile map.
//!
//! It provides everything a map renderer computes but does not draw:
//!
//! - [`projection`]: Web Mercator conversions between coordinates and tiles,
//! - [`coordinates`]: degrees-minutes-seconds formatting and parsing,
//! - [`scale`]: "nice" scale bar lengths and their labels,
//! - [`ephemeris`]: position of the Sun and the day/night terminator.
//!
//! All of them are pure functions without shared state, and can be
//! called from any number of threads. The [`frame`] module composes them
//! into one evaluation of a map view, driven by `config.yaml`.

pub mod constants;
pub mod coordinates;
pub mod ephemeris;
pub mod errors;
pub mod frame;
pub mod geo;
pub mod projection;
pub mod scale;


pub type Float = f64;

pub use geo::{GeoCoordinate, TileIndex, Zoom};
