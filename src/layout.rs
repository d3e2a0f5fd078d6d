// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Common placement types shared across the surface placers.
//!
//! This module provides the surface-agnostic types used by the lateral and
//! end-cap placers: the structure-of-arrays [`Points`] output, the [`Cap`]
//! sign convention, structured [`Diagnostic`] events, and the crate error
//! type.

use clap::ValueEnum;
use std::fmt;

/// Decimal places kept for position coordinates (millimeters).
pub const POSITION_DECIMALS: i32 = 2;
/// Decimal places kept for direction components.
pub const DIRECTION_DECIMALS: i32 = 4;

/// Round to a fixed number of decimal places.
///
/// Negative zero is normalized to positive zero so the serialized output is
/// stable regardless of which side of the axis a coordinate rounded from.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// PMT placement output (surface-agnostic).
///
/// This structure uses a structure-of-arrays (SoA) layout matching the
/// serialized record shape: six parallel sequences for positions and
/// inward-pointing directions. Coordinates are stored pre-rounded
/// ([`POSITION_DECIMALS`] / [`DIRECTION_DECIMALS`]) so that identical inputs
/// always yield bit-identical output lists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Points {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub dir_x: Vec<f64>,
    pub dir_y: Vec<f64>,
    pub dir_z: Vec<f64>,
}

impl Points {
    /// Create an empty Points structure with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            z: Vec::with_capacity(capacity),
            dir_x: Vec::with_capacity(capacity),
            dir_y: Vec::with_capacity(capacity),
            dir_z: Vec::with_capacity(capacity),
        }
    }

    /// Append one PMT, applying the canonical rounding policy.
    pub fn push(&mut self, position: [f64; 3], direction: [f64; 3]) {
        self.x.push(round_to(position[0], POSITION_DECIMALS));
        self.y.push(round_to(position[1], POSITION_DECIMALS));
        self.z.push(round_to(position[2], POSITION_DECIMALS));
        self.dir_x.push(round_to(direction[0], DIRECTION_DECIMALS));
        self.dir_y.push(round_to(direction[1], DIRECTION_DECIMALS));
        self.dir_z.push(round_to(direction[2], DIRECTION_DECIMALS));
    }

    /// Append all PMTs from another Points structure.
    pub fn extend(&mut self, other: &Points) {
        self.x.extend_from_slice(&other.x);
        self.y.extend_from_slice(&other.y);
        self.z.extend_from_slice(&other.z);
        self.dir_x.extend_from_slice(&other.dir_x);
        self.dir_y.extend_from_slice(&other.dir_y);
        self.dir_z.extend_from_slice(&other.dir_z);
    }

    /// Get the current number of PMTs
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// End-cap identity fixing the level / direction sign convention.
///
/// The top cap sits at z = +H/2 with inward normal (0, 0, -1); the bottom cap
/// at z = -H/2 with inward normal (0, 0, +1). Both cap placers use this type
/// so no call site passes a raw signed level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cap {
    Top,
    Bottom,
}

impl Cap {
    /// Axial position of the cap plane for a vessel of the given height.
    pub fn level(self, height: f64) -> f64 {
        match self {
            Cap::Top => height / 2.0,
            Cap::Bottom => -height / 2.0,
        }
    }

    /// Z component of the inward-pointing normal.
    pub fn inward_z(self) -> f64 {
        match self {
            Cap::Top => -1.0,
            Cap::Bottom => 1.0,
        }
    }
}

impl fmt::Display for Cap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cap::Top => write!(f, "top"),
            Cap::Bottom => write!(f, "bottom"),
        }
    }
}

/// End-cap layout mode for CLI dispatch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CapLayout {
    /// Concentric-ring placement
    #[default]
    Ring,
    /// Square-lattice placement at the lateral column pitch
    Grid,
}

impl fmt::Display for CapLayout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CapLayout::Ring => write!(f, "ring"),
            CapLayout::Grid => write!(f, "grid"),
        }
    }
}

/// Diagnostic severity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// Structured diagnostic event emitted by the placers.
///
/// The core never writes to the console; placers push events into a caller
/// owned list and the caller chooses how to surface them. Warnings are
/// advisory only and never gate execution.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// Lateral grid pitch is smaller than the PMT diameter.
    LateralSpacingTight {
        pmt_diameter: f64,
        row_spacing: f64,
        col_spacing: f64,
    },
    /// Cap lattice pitch is within 5% of the PMT diameter.
    CapLatticeTight {
        cap: Cap,
        pmt_diameter: f64,
        pitch: f64,
    },
    /// A ring's proportional allocation exceeded its circumference and was
    /// reduced by the overlap-correction loop.
    RingCountReduced {
        ring: usize,
        allocated: usize,
        placed: usize,
    },
    /// Per-ring placement report.
    RingPlaced {
        ring: usize,
        radius: f64,
        offset_deg: f64,
        count: usize,
    },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::RingPlaced { .. } => Severity::Info,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::LateralSpacingTight {
                pmt_diameter,
                row_spacing,
                col_spacing,
            } => write!(
                f,
                "PMT size exceeds lateral spacing: diameter = {} mm, \
                 row spacing = {} mm, column spacing = {} mm",
                pmt_diameter, row_spacing, col_spacing
            ),
            Diagnostic::CapLatticeTight {
                cap,
                pmt_diameter,
                pitch,
            } => write!(
                f,
                "PMTs may overlap on the {} surface: diameter = {} mm, \
                 lattice pitch = {} mm",
                cap, pmt_diameter, pitch
            ),
            Diagnostic::RingCountReduced {
                ring,
                allocated,
                placed,
            } => write!(
                f,
                "ring {}: PMT count reduced from {} to {} to avoid overlap",
                ring, allocated, placed
            ),
            Diagnostic::RingPlaced {
                ring,
                radius,
                offset_deg,
                count,
            } => write!(
                f,
                "ring {}: r = {} mm, angular offset = {} deg, PMTs = {}",
                ring, radius, offset_deg, count
            ),
        }
    }
}

/// Common error type for placement and output operations
#[derive(Debug)]
pub enum Error {
    /// I/O error (file operations)
    Io(std::io::Error),
    /// Invalid detector configuration
    Config(String),
    /// JSON serialization error
    Json(serde_json::Error),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Config(msg) => write!(f, "configuration error: {}", msg),
            Error::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
