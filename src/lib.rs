// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! PMT Placement Generator Library
//!
//! This library computes PMT placement coordinates and inward-facing
//! orientation vectors over the interior surfaces of a cylindrical detector
//! vessel, given the vessel radius, height, PMT radius and a target
//! fractional surface coverage.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌───────────────────────────────┐
//! │ DetectorGeometry │ ──► │ required_pmts / surface_split │
//! │  (R, H, r, c)    │     │  (total count, per-surface)   │
//! └──────────────────┘     └──────────────┬────────────────┘
//!                                         │
//!                  ┌──────────────────────┼──────────────────────┐
//!                  ▼                      ▼                      ▼
//!         ┌────────────────┐     ┌────────────────┐     ┌────────────────┐
//!         │ lateral        │     │ rings          │     │ lattice        │
//!         │ (wall grid)    │     │ (cap, ring)    │     │ (cap, grid)    │
//!         └────────┬───────┘     └────────┬───────┘     └────────┬───────┘
//!                  └──────────────────────┼──────────────────────┘
//!                                         ▼
//!                               ┌──────────────────┐
//!                               │ Points (SoA) +   │
//!                               │ Diagnostics      │
//!                               └──────────────────┘
//! ```
//!
//! Every placer is a pure function of its arguments: warnings and per-ring
//! reports are returned as structured [`Diagnostic`] events instead of being
//! printed, so callers decide how to surface them. Identical inputs always
//! produce bit-identical output lists.
//!
//! # Modules
//!
//! - [`detector`]: geometry validation, areas, coverage solving
//! - [`lateral`]: wall grid sizing, unrolled and wrapped placement
//! - [`rings`]: concentric-ring end-cap placement
//! - [`lattice`]: square-lattice end-cap placement
//! - [`ratdb`]: RATDB record and list-file output
//! - [`layout`]: shared types (points, caps, diagnostics, errors)
//!
//! # Example
//!
//! ```ignore
//! use pmtgen::{lateral, rings, Cap, DetectorGeometry};
//!
//! let geom = DetectorGeometry::new(16900.0, 18100.0, 254.0, 0.30)?;
//! let n = geom.required_pmts();
//! let counts = geom.surface_split(n);
//!
//! let mut diagnostics = Vec::new();
//! let dims = lateral::find_grid(
//!     geom.circumference(), geom.height, geom.pmt_radius,
//!     counts.lateral, &mut diagnostics,
//! );
//! let wall = lateral::place(geom.radius, geom.height, dims);
//! let top = rings::place(
//!     geom.radius, geom.height, geom.pmt_radius,
//!     counts.top, 20, Cap::Top, &mut diagnostics,
//! );
//! ```

pub mod detector;
pub mod lateral;
pub mod lattice;
pub mod layout;
pub mod ratdb;
pub mod rings;

// Re-exports for convenience
pub use detector::{DetectorGeometry, SurfaceCounts};
pub use layout::{Cap, CapLayout, Diagnostic, Error, Points, Severity};
pub use ratdb::RunSummary;
