// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Concentric-ring end-cap PMT placement.
//!
//! The cap disk is partitioned into equal-width annuli. Each ring receives a
//! PMT count proportional to its circumference, corrected downward while the
//! summed PMT diameters (with a 10% installation margin) would exceed the
//! ring's circumference. PMTs are spaced evenly around each ring with a
//! per-ring angular offset so adjacent rings do not line up radially.
//!
//! Cap normals are purely axial by deliberate simplification: a PMT near the
//! rim still points straight into the vessel rather than tilting toward a
//! radial-axial blend.

use crate::layout::{round_to, Cap, Diagnostic, Points};
use std::f64::consts::{PI, TAU};

/// Base angular offset, divided by each ring's radius.
const BASE_OFFSET: f64 = PI / 8.0;
/// Installation margin on the summed PMT diameters per ring.
const INSTALL_MARGIN: f64 = 1.1;
/// Circumferences below this are treated as length 1 for the proportional
/// allocation, preventing division artifacts on the degenerate inner disk.
const MIN_RING_LENGTH: f64 = 0.1;

/// One concentric ring on a cap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    /// Ring radius (mm)
    pub radius: f64,
    /// Ring circumference (mm)
    pub circumference: f64,
    /// Base angular offset (mm of arc)
    pub offset: f64,
    /// Normalized angular offset, offset / radius (radians)
    pub offset_polar: f64,
}

/// Partition a disk of the given radius into `n_circles` rings.
///
/// Annulus width is dR = R / n_circles; ring i sits at radius dR/2 + i·dR.
/// The innermost ring is a small disk at dR/2 with zero offset; outer rings
/// carry the π/8 base offset normalized by their own radius, so the offset
/// angle shrinks as rings grow.
pub fn ring_layout(radius: f64, n_circles: usize) -> Vec<Ring> {
    let d_r = round_to(radius / n_circles as f64, 1);

    let mut rings = Vec::with_capacity(n_circles);
    rings.push(Ring {
        radius: d_r / 2.0,
        circumference: TAU * d_r / 2.0,
        offset: 0.0,
        offset_polar: 0.0,
    });

    let mut ring_radius = d_r / 2.0;
    for _ in 0..n_circles.saturating_sub(1) {
        ring_radius += d_r;
        rings.push(Ring {
            radius: round_to(ring_radius, 1),
            circumference: round_to(TAU * ring_radius, 1),
            offset: round_to(BASE_OFFSET, 1),
            offset_polar: round_to(BASE_OFFSET / ring_radius, 2),
        });
    }
    rings
}

/// Allocate a PMT count per ring, proportional to circumference.
///
/// Counts are floored to a minimum of 1, then reduced while
/// `1.1 · n · 2r > circumference` so the post-correction invariant
/// `1.1 · n · 2r ≤ circumference ∨ n == 1` holds for every ring.
pub fn ring_counts(
    rings: &[Ring],
    pmt_radius: f64,
    n_target: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<usize> {
    let total_length: f64 = rings
        .iter()
        .map(|ring| {
            if ring.circumference < MIN_RING_LENGTH {
                1.0
            } else {
                ring.circumference
            }
        })
        .sum();

    let mut counts = Vec::with_capacity(rings.len());
    for (i, ring) in rings.iter().enumerate() {
        let allocated = ((ring.circumference / total_length * n_target as f64) as usize).max(1);

        let mut n_pmt = allocated;
        while n_pmt > 1 && INSTALL_MARGIN * n_pmt as f64 * 2.0 * pmt_radius > ring.circumference {
            n_pmt -= 1;
        }
        if n_pmt < allocated {
            diagnostics.push(Diagnostic::RingCountReduced {
                ring: i + 1,
                allocated,
                placed: n_pmt,
            });
        }
        counts.push(n_pmt);
    }
    counts
}

/// Place `n_target` PMTs on the given cap using `n_circles` concentric rings.
///
/// `n_circles` is floored to 1 so a degenerate pitch-derived ring count still
/// yields the single-disk layout. Emits one [`Diagnostic::RingPlaced`] info
/// event per ring.
pub fn place(
    radius: f64,
    height: f64,
    pmt_radius: f64,
    n_target: usize,
    n_circles: usize,
    cap: Cap,
    diagnostics: &mut Vec<Diagnostic>,
) -> Points {
    let rings = ring_layout(radius, n_circles.max(1));
    let counts = ring_counts(&rings, pmt_radius, n_target, diagnostics);

    let level = cap.level(height);
    let direction = [0.0, 0.0, cap.inward_z()];

    let mut points = Points::with_capacity(counts.iter().sum());
    for (i, (ring, &n_pmt)) in rings.iter().zip(counts.iter()).enumerate() {
        let step = round_to(TAU / n_pmt as f64, 4);
        for k in 0..n_pmt {
            let theta = ring.offset_polar + k as f64 * step;
            points.push(
                [ring.radius * theta.cos(), ring.radius * theta.sin(), level],
                direction,
            );
        }
        diagnostics.push(Diagnostic::RingPlaced {
            ring: i + 1,
            radius: ring.radius,
            offset_deg: round_to(ring.offset_polar.to_degrees(), 2),
            count: n_pmt,
        });
    }
    points
}
