// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use clap::Parser;
use pmtgen::CapLayout;
use std::{net::Ipv4Addr, path::PathBuf};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Radius of the cylindrical detector in millimeters (e.g. 16900)
    #[arg(short, long, env)]
    pub radius: f64,

    /// Height of the cylindrical detector in millimeters (e.g. 18100)
    #[arg(short = 'H', long, env)]
    pub height: f64,

    /// Desired PMT coverage as a fraction (e.g. 0.30 for 30% coverage)
    #[arg(short, long, env)]
    pub coverage: f64,

    /// PMT radius in millimeters (default: R7081 10-inch PMTs)
    #[arg(long, env, default_value = "254.0")]
    pub pmt_radius: f64,

    /// End-cap PMT layout mode
    #[arg(long, env, value_enum, default_value = "ring")]
    pub endcap_layout: CapLayout,

    /// Root directory for the generated geometry files
    #[arg(long, env, default_value = "Plots")]
    pub output: PathBuf,

    /// Application log level
    #[arg(long, env, default_value = "info")]
    pub rust_log: LevelFilter,

    /// connect to remote rerun viewer at this address
    #[arg(long)]
    pub connect: Option<Ipv4Addr>,

    /// record rerun data to file instead of live viewer
    #[arg(long)]
    pub record: Option<String>,

    /// launch local rerun viewer
    #[arg(long)]
    pub viewer: bool,

    /// use this port for the rerun viewer (remote or web server)
    #[arg(long)]
    pub port: Option<u16>,
}
