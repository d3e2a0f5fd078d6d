// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

mod args;

use args::Args;
use clap::Parser;
use pmtgen::{
    lateral, lattice, ratdb, rings, Cap, CapLayout, DetectorGeometry, Points, RunSummary, Severity,
};
use rerun::{external::re_sdk_comms::DEFAULT_SERVER_PORT, RecordingStream};
use std::net::SocketAddr;
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.rust_log)
        .init();

    let geom = DetectorGeometry::new(args.radius, args.height, args.pmt_radius, args.coverage)?;

    info!(
        "detector dimensions: R = {} m, H = {} m, C = {:.3} m",
        geom.radius / 1e3,
        geom.height / 1e3,
        geom.circumference() / 1e3
    );
    info!(
        "detector surface = {:.2} m^2, volume = {:.2} m^3",
        geom.total_area() / 1e6,
        geom.volume() / 1e9
    );
    info!(
        "face surfaces: top/bottom = {:.2} m^2, lateral = {:.2} m^2",
        geom.cap_area() / 1e6,
        geom.lateral_area() / 1e6
    );
    info!("PMT radius = {} mm", geom.pmt_radius);
    info!("desired PMT coverage: {:.1}%", geom.coverage * 100.0);

    let n = geom.required_pmts();
    let counts = geom.surface_split(n);
    info!("required number of PMTs: {}", n);
    info!(
        "surface split: top = {}, bottom = {}, lateral = {} ({} to place)",
        counts.top,
        counts.bottom,
        counts.lateral,
        counts.total()
    );

    let mut diagnostics = Vec::new();
    let circumference = geom.circumference();

    let dims = lateral::find_grid(
        circumference,
        geom.height,
        geom.pmt_radius,
        counts.lateral,
        &mut diagnostics,
    );
    let (row_spacing, col_spacing) =
        lateral::spacing(dims.n_rows, dims.n_cols, circumference, geom.height);
    info!(
        "lateral grid: {} rows x {} columns, row spacing = {} mm, column spacing = {} mm",
        dims.n_rows, dims.n_cols, row_spacing, col_spacing
    );

    let unrolled = lateral::unrolled_grid(dims, circumference, geom.height);
    let wall = lateral::place(geom.radius, geom.height, dims);

    let (top, bottom) = match args.endcap_layout {
        CapLayout::Ring => {
            // Ring count follows the lateral column pitch so cap and wall
            // densities stay comparable.
            let n_circles = ((geom.radius / col_spacing) as usize).max(1);
            info!("end caps: PMTs distributed over {} rings", n_circles);
            (
                rings::place(
                    geom.radius,
                    geom.height,
                    geom.pmt_radius,
                    counts.top,
                    n_circles,
                    Cap::Top,
                    &mut diagnostics,
                ),
                rings::place(
                    geom.radius,
                    geom.height,
                    geom.pmt_radius,
                    counts.bottom,
                    n_circles,
                    Cap::Bottom,
                    &mut diagnostics,
                ),
            )
        }
        CapLayout::Grid => (
            lattice::place(
                geom.radius,
                geom.height,
                geom.pmt_radius,
                col_spacing,
                Cap::Top,
                &mut diagnostics,
            ),
            lattice::place(
                geom.radius,
                geom.height,
                geom.pmt_radius,
                col_spacing,
                Cap::Bottom,
                &mut diagnostics,
            ),
        ),
    };

    for diagnostic in &diagnostics {
        match diagnostic.severity() {
            Severity::Warning => warn!("{diagnostic}"),
            Severity::Info => info!("{diagnostic}"),
        }
    }

    info!(
        "placed PMTs: top = {}, lateral = {}, bottom = {}, total = {}",
        top.len(),
        wall.len(),
        bottom.len(),
        top.len() + wall.len() + bottom.len()
    );

    let mut all = Points::with_capacity(top.len() + wall.len() + bottom.len());
    all.extend(&top);
    all.extend(&wall);
    all.extend(&bottom);
    let pmt_type = vec![1.0; all.len()];

    let name = format!(
        "PMTINFO_Theia_Cyl_R{:.0}_H{:.0}",
        geom.radius, geom.height
    );
    let dir = ratdb::output_dir(&args.output, geom.radius, geom.height)?;
    ratdb::write_axis_lists(&dir, &all, &pmt_type)?;
    let ratdb_path = ratdb::write_pmtinfo(&dir, &name, &all, &pmt_type)?;
    info!("PMT geometry written to {}", ratdb_path.display());

    let summary = RunSummary {
        name,
        radius_mm: geom.radius,
        height_mm: geom.height,
        pmt_radius_mm: geom.pmt_radius,
        coverage: geom.coverage,
        endcap_layout: args.endcap_layout.to_string(),
        required_pmts: n,
        top_pmts: top.len(),
        lateral_pmts: wall.len(),
        bottom_pmts: bottom.len(),
        placed_pmts: all.len(),
    };
    let summary_path = ratdb::write_summary(&dir, &summary)?;
    info!("run summary written to {}", summary_path.display());

    if let Some(rr) = recording_stream(&args)? {
        log_layout(&rr, &unrolled, &top, &wall, &bottom, geom.pmt_radius)?;
    }

    Ok(())
}

/// Build the optional rerun stream from the viewer flags.
fn recording_stream(args: &Args) -> Result<Option<RecordingStream>, Box<dyn std::error::Error>> {
    let rr = if let Some(addr) = args.connect {
        let port = args.port.unwrap_or(DEFAULT_SERVER_PORT);
        let remote = SocketAddr::new(addr.into(), port);
        Some(
            rerun::RecordingStreamBuilder::new("pmtgen")
                .connect_tcp_opts(remote, rerun::default_flush_timeout())?,
        )
    } else if let Some(record) = &args.record {
        Some(rerun::RecordingStreamBuilder::new("pmtgen").save(record)?)
    } else if args.viewer {
        Some(rerun::RecordingStreamBuilder::new("pmtgen").spawn()?)
    } else {
        None
    };
    Ok(rr)
}

/// Log the unrolled 2D grid and the wrapped 3D detector to rerun.
fn log_layout(
    rr: &RecordingStream,
    unrolled: &[[f64; 2]],
    top: &Points,
    wall: &Points,
    bottom: &Points,
    pmt_radius: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let radius = pmt_radius as f32;

    let flat: Vec<_> = unrolled
        .iter()
        .map(|p| (p[0] as f32, p[1] as f32))
        .collect();
    rr.log("unrolled", &rerun::Points2D::new(flat).with_radii([radius]))?;

    let surfaces = [
        ("detector/top", top, rerun::Color::from_rgb(231, 76, 60)),
        ("detector/lateral", wall, rerun::Color::from_rgb(52, 152, 219)),
        ("detector/bottom", bottom, rerun::Color::from_rgb(46, 204, 113)),
    ];
    for (path, points, color) in surfaces {
        let positions: Vec<_> = points
            .x
            .iter()
            .zip(points.y.iter())
            .zip(points.z.iter())
            .map(|((&x, &y), &z)| (x as f32, y as f32, z as f32))
            .collect();
        rr.log(
            path,
            &rerun::Points3D::new(positions)
                .with_radii([radius])
                .with_colors([color]),
        )?;
    }

    Ok(())
}
