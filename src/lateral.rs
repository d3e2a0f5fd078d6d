// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Lateral (cylindrical wall) PMT placement.
//!
//! The wall is unrolled into a rectangle of width = circumference and height
//! = vessel height. [`find_grid`] sizes an (n_rows, n_cols) grid over that
//! rectangle so the cell count approximates the target while preserving the
//! rectangle's aspect ratio. The same grid is emitted twice: as a flat
//! rectangle for 2D inspection, and wrapped back onto the cylinder with
//! inward radial normals.

use crate::layout::{round_to, Diagnostic, Points, POSITION_DECIMALS};
use std::f64::consts::TAU;

/// Lateral grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDims {
    pub n_rows: usize,
    pub n_cols: usize,
}

impl GridDims {
    pub fn count(&self) -> usize {
        self.n_rows * self.n_cols
    }
}

/// Row and column pitch for a grid over the unrolled rectangle.
///
/// Both pitches are rounded to one decimal place. Callers guarantee
/// `n_rows > 0` and `n_cols > 0`.
pub fn spacing(n_rows: usize, n_cols: usize, circumference: f64, height: f64) -> (f64, f64) {
    let row_spacing = round_to(height / n_rows as f64, 1);
    let col_spacing = round_to(circumference / n_cols as f64, 1);
    (row_spacing, col_spacing)
}

/// Find grid dimensions approximating `n_lateral` cells at the rectangle's
/// aspect ratio.
///
/// n_cols = round(sqrt(n_lateral · C/H)), n_rows = round(n_lateral / n_cols),
/// each floored to 1 so downstream pitch computations never divide by zero.
/// Emits a [`Diagnostic::LateralSpacingTight`] warning when either pitch is
/// smaller than the PMT diameter; the warning is advisory, no correction is
/// applied.
pub fn find_grid(
    circumference: f64,
    height: f64,
    pmt_radius: f64,
    n_lateral: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> GridDims {
    let ratio = circumference / height;
    let n_cols = (n_lateral as f64 * ratio).sqrt().round().max(1.0) as usize;
    let n_rows = (n_lateral as f64 / n_cols as f64).round().max(1.0) as usize;

    let (row_spacing, col_spacing) = spacing(n_rows, n_cols, circumference, height);
    let pmt_diameter = 2.0 * pmt_radius;
    if row_spacing < pmt_diameter || col_spacing < pmt_diameter {
        diagnostics.push(Diagnostic::LateralSpacingTight {
            pmt_diameter,
            row_spacing,
            col_spacing,
        });
    }

    GridDims { n_rows, n_cols }
}

/// Flat grid over the unrolled rectangle, for 2D inspection.
///
/// Cells are centered with half-pitch margins on both axes: the column axis
/// spans [-C/2, C/2], the row axis [-H/2, H/2].
pub fn unrolled_grid(dims: GridDims, circumference: f64, height: f64) -> Vec<[f64; 2]> {
    let (row_spacing, col_spacing) = spacing(dims.n_rows, dims.n_cols, circumference, height);
    let origin_x = col_spacing / 2.0 - circumference / 2.0;
    let origin_y = row_spacing / 2.0 - height / 2.0;

    let mut positions = Vec::with_capacity(dims.count());
    for i_row in 0..dims.n_rows {
        for i_col in 0..dims.n_cols {
            positions.push([
                round_to(origin_x + i_col as f64 * col_spacing, POSITION_DECIMALS),
                round_to(origin_y + i_row as f64 * row_spacing, POSITION_DECIMALS),
            ]);
        }
    }
    positions
}

/// Wrap the grid onto the cylinder.
///
/// Each column maps to an angle θ = (col + 0.5)·(2π/n_cols); rows stack from
/// -H/2 upward at the row pitch. Directions are the inward radial normal
/// (-cos θ, -sin θ, 0); the z component is always zero on the wall.
pub fn place(radius: f64, height: f64, dims: GridDims) -> Points {
    let circumference = TAU * radius;
    let (row_spacing, _) = spacing(dims.n_rows, dims.n_cols, circumference, height);
    let d_theta = TAU / dims.n_cols as f64;

    let mut points = Points::with_capacity(dims.count());
    for i_row in 0..dims.n_rows {
        for i_col in 0..dims.n_cols {
            let theta = d_theta / 2.0 + i_col as f64 * d_theta;
            let z = -height / 2.0 + row_spacing / 2.0 + i_row as f64 * row_spacing;
            points.push(
                [radius * theta.cos(), radius * theta.sin(), z],
                [-theta.cos(), -theta.sin(), 0.0],
            );
        }
    }
    points
}
