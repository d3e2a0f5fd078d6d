// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Square-lattice end-cap PMT placement.
//!
//! Alternative to the concentric-ring layout: a square lattice at the lateral
//! column pitch covers the cap's bounding box, and only lattice points inside
//! a safety-shrunk radius are kept. Matching the wall pitch keeps the cap
//! rows mechanically consistent with the lateral support structure.

use crate::layout::{Cap, Diagnostic, Points};

/// Clearance subtracted from the cap radius, reserved for the stainless
/// steel supporting framework and to avoid the wall PMTs.
pub const CAP_CLEARANCE_MM: f64 = 500.0;

/// Minimum pitch-to-diameter ratio before the overlap warning fires.
const PITCH_MARGIN: f64 = 1.05;

/// Place PMTs on the given cap as a square lattice at `pitch`.
///
/// Lattice points (i, j) map to (-R + i·pitch, -R + j·pitch) and are kept iff
/// they fall within R - [`CAP_CLEARANCE_MM`] of the axis. A clearance at or
/// beyond the cap radius yields an empty placement. Emits a non-fatal
/// [`Diagnostic::CapLatticeTight`] warning when the pitch is within 5% of the
/// PMT diameter; placement proceeds unchanged.
pub fn place(
    radius: f64,
    height: f64,
    pmt_radius: f64,
    pitch: f64,
    cap: Cap,
    diagnostics: &mut Vec<Diagnostic>,
) -> Points {
    let pmt_diameter = 2.0 * pmt_radius;
    if pitch < PITCH_MARGIN * pmt_diameter {
        diagnostics.push(Diagnostic::CapLatticeTight {
            cap,
            pmt_diameter,
            pitch,
        });
    }

    let usable_radius = radius - CAP_CLEARANCE_MM;
    if usable_radius <= 0.0 {
        return Points::default();
    }

    let level = cap.level(height);
    let direction = [0.0, 0.0, cap.inward_z()];
    let per_axis = (2.0 * radius / pitch) as usize + 1;

    let mut points = Points::default();
    for i in 0..per_axis {
        for j in 0..per_axis {
            let x = -radius + i as f64 * pitch;
            let y = -radius + j as f64 * pitch;
            if x * x + y * y <= usable_radius * usable_radius {
                points.push([x, y, level], direction);
            }
        }
    }
    points
}
