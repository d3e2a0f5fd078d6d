// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Benchmark of the full placement path for a Theia-scale detector.
//!
//! Run with: cargo bench --bench placement_bench

use pmtgen::{lateral, rings, Cap, DetectorGeometry};
use std::time::Instant;

const ITERATIONS: usize = 1000;

fn generate(geom: &DetectorGeometry) -> usize {
    let mut diagnostics = Vec::new();
    let counts = geom.surface_split(geom.required_pmts());

    let circumference = geom.circumference();
    let dims = lateral::find_grid(
        circumference,
        geom.height,
        geom.pmt_radius,
        counts.lateral,
        &mut diagnostics,
    );
    let (_, col_spacing) = lateral::spacing(dims.n_rows, dims.n_cols, circumference, geom.height);
    let wall = lateral::place(geom.radius, geom.height, dims);

    let n_circles = ((geom.radius / col_spacing) as usize).max(1);
    let top = rings::place(
        geom.radius,
        geom.height,
        geom.pmt_radius,
        counts.top,
        n_circles,
        Cap::Top,
        &mut diagnostics,
    );
    let bottom = rings::place(
        geom.radius,
        geom.height,
        geom.pmt_radius,
        counts.bottom,
        n_circles,
        Cap::Bottom,
        &mut diagnostics,
    );

    top.len() + wall.len() + bottom.len()
}

fn main() {
    let geom = DetectorGeometry::new(16900.0, 18100.0, 254.0, 0.30).unwrap();

    // Warmup
    let n_pmts = generate(&geom);
    println!("placing {} PMTs per iteration", n_pmts);

    let start = Instant::now();
    let mut total = 0usize;
    for _ in 0..ITERATIONS {
        total += generate(&geom);
    }
    let elapsed = start.elapsed();

    println!(
        "{} iterations in {:.3} s ({:.1} us/layout, {} PMTs placed)",
        ITERATIONS,
        elapsed.as_secs_f64(),
        elapsed.as_micros() as f64 / ITERATIONS as f64,
        total
    );
}
