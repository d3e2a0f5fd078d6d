// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Integration tests for the full placement pipeline.
//!
//! These tests run the generation chain the way the binary does: coverage
//! solving, lateral grid sizing, wall placement and both end-cap modes, and
//! check the cross-surface invariants on the concatenated output.

use pmtgen::{lateral, lattice, rings, Cap, Diagnostic, DetectorGeometry, Points};

/// Run the full ring-mode pipeline for one geometry.
fn generate_ring_mode(geom: &DetectorGeometry) -> (Points, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let n = geom.required_pmts();
    let counts = geom.surface_split(n);

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

    let mut all = Points::with_capacity(top.len() + wall.len() + bottom.len());
    all.extend(&top);
    all.extend(&wall);
    all.extend(&bottom);
    (all, diagnostics)
}

#[test]
fn test_theia_ring_mode_end_to_end() {
    let geom = DetectorGeometry::new(16900.0, 18100.0, 254.0, 0.30).unwrap();
    let (all, _) = generate_ring_mode(&geom);

    assert!(!all.is_empty());
    // Every output list pair has matching length.
    assert_eq!(all.x.len(), all.y.len());
    assert_eq!(all.x.len(), all.z.len());
    assert_eq!(all.x.len(), all.dir_x.len());
    assert_eq!(all.x.len(), all.dir_y.len());
    assert_eq!(all.x.len(), all.dir_z.len());

    // Every PMT sits on or inside the vessel envelope and points inward.
    for i in 0..all.len() {
        let r = (all.x[i] * all.x[i] + all.y[i] * all.y[i]).sqrt();
        assert!(r <= geom.radius + 0.1, "PMT {i} outside the vessel: r={r}");
        assert!(all.z[i].abs() <= geom.height / 2.0 + 0.1);

        let inward = all.x[i] * all.dir_x[i] + all.y[i] * all.dir_y[i] + all.z[i] * all.dir_z[i];
        assert!(inward <= 0.0, "PMT {i} direction not inward");
    }
}

#[test]
fn test_regeneration_is_bit_identical() {
    let geom = DetectorGeometry::new(16900.0, 18100.0, 254.0, 0.30).unwrap();
    let (a, diag_a) = generate_ring_mode(&geom);
    let (b, diag_b) = generate_ring_mode(&geom);
    assert_eq!(a, b);
    assert_eq!(diag_a, diag_b);
}

#[test]
fn test_small_detector_grid_mode() {
    let geom = DetectorGeometry::new(3200.0, 5400.0, 254.0, 0.30).unwrap();
    let mut diagnostics = Vec::new();
    let n = geom.required_pmts();
    assert_eq!(n % 10, 0);

    let counts = geom.surface_split(n);
    let circumference = geom.circumference();
    let dims = lateral::find_grid(
        circumference,
        geom.height,
        geom.pmt_radius,
        counts.lateral,
        &mut diagnostics,
    );
    let (_, col_spacing) = lateral::spacing(dims.n_rows, dims.n_cols, circumference, geom.height);

    let top = lattice::place(
        geom.radius,
        geom.height,
        geom.pmt_radius,
        col_spacing,
        Cap::Top,
        &mut diagnostics,
    );
    let bottom = lattice::place(
        geom.radius,
        geom.height,
        geom.pmt_radius,
        col_spacing,
        Cap::Bottom,
        &mut diagnostics,
    );

    // Same lattice mask on both caps, opposite levels and normals.
    assert_eq!(top.len(), bottom.len());
    assert!(!top.is_empty());
    assert_eq!(top.x, bottom.x);
    assert_eq!(top.y, bottom.y);

    let usable = geom.radius - lattice::CAP_CLEARANCE_MM;
    for i in 0..top.len() {
        assert!(top.x[i] * top.x[i] + top.y[i] * top.y[i] <= usable * usable + 1.0);
        assert_eq!(top.z[i], 2700.0);
        assert_eq!(bottom.z[i], -2700.0);
        assert_eq!(top.dir_z[i], -1.0);
        assert_eq!(bottom.dir_z[i], 1.0);
    }
}

#[test]
fn test_ring_mode_counts_track_targets() {
    // Placed cap counts stay below the proportional targets (overlap
    // correction only ever removes PMTs) but not absurdly so.
    let geom = DetectorGeometry::new(16900.0, 18100.0, 254.0, 0.30).unwrap();
    let mut diagnostics = Vec::new();
    let counts = geom.surface_split(geom.required_pmts());

    let top = rings::place(
        geom.radius,
        geom.height,
        geom.pmt_radius,
        counts.top,
        20,
        Cap::Top,
        &mut diagnostics,
    );
    assert!(top.len() <= counts.top + 20);
    assert!(top.len() >= 20, "at least one PMT per ring");
}

#[test]
fn test_coverage_extremes_stay_valid() {
    for coverage in [0.01, 0.5, 1.0] {
        let geom = DetectorGeometry::new(3200.0, 5400.0, 254.0, coverage).unwrap();
        let (all, _) = generate_ring_mode(&geom);
        assert!(!all.is_empty());
        assert_eq!(all.x.len(), all.dir_z.len());
    }
}
