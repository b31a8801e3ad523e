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

//! Module evaluating one frame of a map view: everything
//! a renderer needs to request tiles, label the scale bar
//! and draw the day/night overlay.

pub mod configuration;

use std::io;

use log::{debug, info};
use rayon::ThreadPoolBuilder;

use crate::coordinates::format_coordinate;
use crate::ephemeris::{subsolar_point_with, terminator_curve, SunPosition};
use crate::geo::{GeoCoordinate, Zoom};
use crate::projection::{meters_per_pixel, visible_tiles, zoom_for_view, TileRange};
use crate::scale::ScaleBar;
use crate::{errors::FrameError, Float};

pub use configuration::Config;

/// Computed content of a single map frame.
#[derive(Clone, Debug)]
pub struct Frame {
    pub zoom: Zoom,
    pub tiles: TileRange,
    pub meters_per_pixel: Float,
    pub scale_bar: Option<ScaleBar>,
    pub sun: SunPosition,
    pub subsolar: GeoCoordinate,
    pub terminator: Vec<GeoCoordinate>,
}

impl Frame {
    /// Evaluates the view described by `config`.
    ///
    /// Terminator points are computed on a dedicated thread pool
    /// sized from `resources.threads`.
    pub fn evaluate(config: &Config) -> Result<Self, FrameError> {
        let view = &config.view;

        debug!("Setting up ThreadPool");
        let threadpool = ThreadPoolBuilder::new()
            .num_threads(config.resources.threads as usize)
            .stack_size(2 * 1024 * 1024)
            .build()?;

        debug!("Choosing zoom level and tiles");
        let zoom = zoom_for_view(
            view.lon_min,
            view.lon_max,
            view.width,
            view.tile_size,
            Zoom::new(view.zoom_limits.0)?,
            Zoom::new(view.zoom_limits.1)?,
        )?;

        let tiles = visible_tiles(
            GeoCoordinate::new(view.lat_max, view.lon_min),
            GeoCoordinate::new(view.lat_min, view.lon_max),
            zoom,
        );

        // tiles are stretched to fill the view, so their drawn width
        // differs from the nominal tile size
        let tiles_across = (view.lon_max - view.lon_min) / 360.0 * zoom.tile_count();
        let drawn_tile_size = view.width / tiles_across;
        let center_lat = (view.lat_min + view.lat_max) / 2.0;
        let resolution = meters_per_pixel(center_lat, zoom, drawn_tile_size);

        let scale_bar = ScaleBar::new(resolution, view.scale_bar);

        debug!("Computing Sun position and terminator");
        let date = config.datetime.utc();
        let model = config.terminator.declination;
        let step = config.terminator.step;

        let sun = SunPosition::at(&date);
        let subsolar = subsolar_point_with(&date, model);
        let terminator = threadpool.install(|| terminator_curve(&date, step, model));

        Ok(Frame {
            zoom,
            tiles,
            meters_per_pixel: resolution,
            scale_bar,
            sun,
            subsolar,
            terminator,
        })
    }

    /// Reports the frame content through the logger.
    pub fn log_summary(&self) {
        info!(
            "Zoom {} with {} tiles, {:.3} m per pixel",
            self.zoom,
            self.tiles.len(),
            self.meters_per_pixel
        );

        for tile in self.tiles.iter() {
            debug!("Tile {}", tile);
        }

        match &self.scale_bar {
            Some(bar) => info!(
                "Scale bar {} ({} px) / {} ({} px)",
                bar.meters_label(),
                bar.meters_pixels,
                bar.feet_label(),
                bar.feet_pixels
            ),
            None => info!("Scale bar hidden at this zoom"),
        }

        info!(
            "Sun at RA {:.4} h, Dec {:.4} deg; overhead at {}",
            self.sun.right_ascension_hours(),
            self.sun.declination,
            format_coordinate(self.subsolar, 0)
        );
    }

    /// Writes terminator polyline as CSV with `Lat` and `Lon` columns.
    pub fn write_terminator<W: io::Write>(&self, writer: W) -> Result<(), FrameError> {
        let mut out = csv::Writer::from_writer(writer);

        out.write_record(&["Lat", "Lon"])?;

        for point in &self.terminator {
            out.serialize((point.latitude, point.longitude))?;
        }

        out.flush()?;

        Ok(())
    }
}
