// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! Detector geometry and coverage solving.
//!
//! [`DetectorGeometry`] holds the immutable inputs for one generation run and
//! derives the surface areas the coverage solver works from. The solver maps
//! a target coverage fraction to a total PMT count (rounded up to the nearest
//! multiple of 10) and splits it across the three surfaces proportionally to
//! their area.

use crate::layout::Error;
use std::f64::consts::PI;

/// Cylindrical vessel geometry and coverage target.
///
/// All lengths are millimeters. Construction validates the inputs; every
/// derived quantity is a pure function of the fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectorGeometry {
    /// Vessel radius R
    pub radius: f64,
    /// Vessel height H
    pub height: f64,
    /// PMT radius r
    pub pmt_radius: f64,
    /// Target coverage fraction, in (0, 1]
    pub coverage: f64,
}

/// Per-surface PMT counts from the proportional split.
///
/// Rounding each share independently may leave `top + bottom + lateral`
/// slightly different from the requested total; the slack is accepted rather
/// than redistributed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceCounts {
    pub top: usize,
    pub bottom: usize,
    pub lateral: usize,
}

impl SurfaceCounts {
    pub fn total(&self) -> usize {
        self.top + self.bottom + self.lateral
    }
}

impl DetectorGeometry {
    /// Validate and build a detector geometry.
    ///
    /// Rejects non-positive radius, height and PMT radius, and coverage
    /// outside (0, 1]. Rejection happens before any placement computation.
    pub fn new(radius: f64, height: f64, pmt_radius: f64, coverage: f64) -> Result<Self, Error> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(Error::Config(format!("radius must be positive: {radius}")));
        }
        if height.is_nan() || height <= 0.0 {
            return Err(Error::Config(format!("height must be positive: {height}")));
        }
        if pmt_radius.is_nan() || pmt_radius <= 0.0 {
            return Err(Error::Config(format!(
                "PMT radius must be positive: {pmt_radius}"
            )));
        }
        if coverage.is_nan() || coverage <= 0.0 || coverage > 1.0 {
            return Err(Error::Config(format!(
                "coverage must be in (0, 1]: {coverage}"
            )));
        }
        Ok(Self {
            radius,
            height,
            pmt_radius,
            coverage,
        })
    }

    /// Circumference of the lateral surface, 2πR.
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Area of one end cap, πR².
    pub fn cap_area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Area of the cylindrical wall, 2πRH.
    pub fn lateral_area(&self) -> f64 {
        2.0 * PI * self.radius * self.height
    }

    /// Total inner surface area, 2πR(H + R).
    pub fn total_area(&self) -> f64 {
        2.0 * PI * self.radius * (self.height + self.radius)
    }

    /// Vessel volume, πR²H.
    pub fn volume(&self) -> f64 {
        PI * self.radius * self.radius * self.height
    }

    /// Footprint area of a single PMT, πr².
    pub fn pmt_area(&self) -> f64 {
        PI * self.pmt_radius * self.pmt_radius
    }

    /// Total PMT count for the target coverage, rounded up to the nearest
    /// multiple of 10 to give round, human-friendly totals.
    pub fn required_pmts(&self) -> usize {
        let raw = self.coverage * self.total_area() / self.pmt_area();
        (raw / 10.0).ceil() as usize * 10
    }

    /// Split a total count across the three surfaces by area fraction.
    ///
    /// Each share is rounded to the nearest integer independently, so the
    /// sum may differ from `n` by a count or two.
    pub fn surface_split(&self, n: usize) -> SurfaceCounts {
        let cap_fraction = self.cap_area() / self.total_area();
        let lateral_fraction = self.lateral_area() / self.total_area();
        SurfaceCounts {
            top: (n as f64 * cap_fraction).round() as usize,
            bottom: (n as f64 * cap_fraction).round() as usize,
            lateral: (n as f64 * lateral_fraction).round() as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theia() -> DetectorGeometry {
        DetectorGeometry::new(16900.0, 18100.0, 254.0, 0.30).unwrap()
    }

    #[test]
    fn test_rejects_invalid_configuration() {
        assert!(DetectorGeometry::new(0.0, 18100.0, 254.0, 0.3).is_err());
        assert!(DetectorGeometry::new(-1.0, 18100.0, 254.0, 0.3).is_err());
        assert!(DetectorGeometry::new(16900.0, 0.0, 254.0, 0.3).is_err());
        assert!(DetectorGeometry::new(16900.0, 18100.0, 0.0, 0.3).is_err());
        assert!(DetectorGeometry::new(16900.0, 18100.0, 254.0, 0.0).is_err());
        assert!(DetectorGeometry::new(16900.0, 18100.0, 254.0, 1.01).is_err());
        assert!(DetectorGeometry::new(16900.0, 18100.0, 254.0, f64::NAN).is_err());
        assert!(DetectorGeometry::new(16900.0, 18100.0, 254.0, 1.0).is_ok());
    }

    #[test]
    fn test_required_count_is_positive_multiple_of_ten() {
        for (r, h, c) in [
            (16900.0, 18100.0, 0.30),
            (3200.0, 5400.0, 0.30),
            (3540.0, 5480.0, 0.35),
            (1000.0, 1000.0, 0.05),
        ] {
            let geom = DetectorGeometry::new(r, h, 254.0, c).unwrap();
            let n = geom.required_pmts();
            assert!(n > 0, "R={r} H={h} c={c} gave zero PMTs");
            assert_eq!(n % 10, 0, "R={r} H={h} c={c} gave n={n}");
        }
    }

    #[test]
    fn test_theia_scenario_counts() {
        let geom = theia();
        let n = geom.required_pmts();
        assert_eq!(n, 5510);

        let counts = geom.surface_split(n);
        assert_eq!(counts.top, counts.bottom);
        assert_eq!(counts.top, 1330);
        assert_eq!(counts.lateral, 2849);
        // Lateral area dominates for this aspect ratio.
        assert!(counts.lateral > counts.top + counts.bottom);
        // Independent rounding leaves slack against the requested total.
        assert!(counts.total().abs_diff(n) <= 2);
    }

    #[test]
    fn test_areas_are_consistent() {
        let geom = theia();
        let sum = geom.lateral_area() + 2.0 * geom.cap_area();
        assert!((sum - geom.total_area()).abs() < 1e-3 * geom.total_area());
        assert!((geom.circumference() - 2.0 * PI * 16900.0).abs() < 1e-9);
    }
}
