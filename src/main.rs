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

//! Command evaluating one map frame from `config.yaml`
//! in the working directory.
//!
//! The frame summary goes to the log, the terminator
//! polyline is written to stdout as CSV.

use cap::Cap;
use cartograph::errors::FrameError;
use cartograph::frame::{Config, Frame};
use env_logger::Env;
use log::{debug, error, info};
use std::{alloc, io, path::Path};

/// Global allocator used by the program.
///
/// Use of static global allocator allows for capping the memory to the limit set by user
/// in configuration file.
#[global_allocator]
static ALLOCATOR: Cap<alloc::System> = Cap::new(alloc::System, usize::MAX);

/// The main program function.
/// Prepares the runtime environment and calls [`run`].
///
/// To provide meaningful and high-quality error messages the `env_logger`
/// needs to be initiated before any log messages are possible to occur.
fn main() {
    #[cfg(not(feature = "debug"))]
    let logger_env = Env::new().filter_or("CARTOGRAPH_LOG_LEVEL", "info");

    #[cfg(feature = "debug")]
    let logger_env = Env::new().filter_or("CARTOGRAPH_LOG_LEVEL", "debug");

    env_logger::Builder::from_env(logger_env)
        .format_timestamp_millis()
        .init();

    match run() {
        Ok(_) => info!("Frame evaluation finished."),
        Err(err) => error!("Frame evaluation failed with error: {}", err),
    }
}

fn run() -> Result<(), FrameError> {
    debug!("Reading configuration from config.yaml");
    let config = Config::new_from_file(Path::new("config.yaml"))?;

    debug!("Setting memory limit");
    let memory = config.resources.memory;
    ALLOCATOR
        .set_limit(memory.saturating_mul(1024 * 1024))
        .map_err(|_| FrameError::MemoryLimit(memory))?;

    let frame = Frame::evaluate(&config)?;

    frame.log_summary();
    frame.write_terminator(io::stdout().lock())?;

    Ok(())
}
