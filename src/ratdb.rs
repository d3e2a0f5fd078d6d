// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

//! RATDB and list-file output for PMT placements.
//!
//! The downstream geometry pipeline consumes two shapes: one bracketed
//! comma-separated literal per axis (`positions_x.txt` .. `pmt_type.txt`) and
//! a single `PMTINFO_<name>.ratdb` record with the seven array fields plus
//! name and validity-window placeholders. Both keep the trailing comma before
//! the closing bracket; downstream parsers expect this exact shape, so the
//! formatting here must not be "cleaned up".

use crate::layout::{Error, Points};
use serde::Serialize;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Machine-readable summary of one generation run, written alongside the
/// RATDB output.
#[derive(Clone, Debug, Serialize)]
pub struct RunSummary {
    pub name: String,
    pub radius_mm: f64,
    pub height_mm: f64,
    pub pmt_radius_mm: f64,
    pub coverage: f64,
    pub endcap_layout: String,
    pub required_pmts: usize,
    pub top_pmts: usize,
    pub lateral_pmts: usize,
    pub bottom_pmts: usize,
    pub placed_pmts: usize,
}

/// Format a coordinate the way the RATDB consumers expect: whole numbers
/// keep a single trailing decimal ("2700.0"), everything else prints the
/// shortest round-trip form ("823.15").
pub fn format_value(value: f64) -> String {
    if value == value.trunc() {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Create (if needed) and return the per-geometry output directory
/// `<root>/Plots_R<R>_H<H>`.
pub fn output_dir(root: &Path, radius: f64, height: f64) -> Result<PathBuf, Error> {
    let dir = root.join(format!("Plots_R{:.0}_H{:.0}", radius, height));
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn write_list<W: Write>(out: &mut W, values: &[f64]) -> Result<(), Error> {
    out.write_all(b"[")?;
    for value in values {
        write!(out, "{},", format_value(*value))?;
    }
    out.write_all(b"]")?;
    Ok(())
}

/// Write one bracketed list file per axis, plus the type-tag list.
pub fn write_axis_lists(dir: &Path, points: &Points, pmt_type: &[f64]) -> Result<(), Error> {
    let lists: [(&str, &[f64]); 7] = [
        ("positions_x", &points.x),
        ("positions_y", &points.y),
        ("positions_z", &points.z),
        ("directions_x", &points.dir_x),
        ("directions_y", &points.dir_y),
        ("directions_z", &points.dir_z),
        ("pmt_type", pmt_type),
    ];
    for (name, values) in lists {
        let mut file = BufWriter::new(File::create(dir.join(format!("{name}.txt")))?);
        write_list(&mut file, values)?;
        file.flush()?;
    }
    Ok(())
}

/// Write the `PMTINFO_<name>.ratdb` record.
///
/// Field order is fixed: x, y, z, dir_x, dir_y, dir_z, pmt_type. All array
/// fields carry a trailing comma before the closing bracket; pmt_type is the
/// last field and takes no comma after its bracket.
pub fn write_pmtinfo(
    dir: &Path,
    name: &str,
    points: &Points,
    pmt_type: &[f64],
) -> Result<PathBuf, Error> {
    let path = dir.join(format!("{name}.ratdb"));
    let mut file = BufWriter::new(File::create(&path)?);

    file.write_all(b"{\n")?;
    writeln!(file, "// total number of inner PMTs: {}", points.len())?;
    writeln!(file, "\"name\": \"{}\",", name)?;
    writeln!(file, "\"valid_begin\": [0, 0],")?;
    writeln!(file, "\"valid_end\": [0, 0],")?;

    let arrays: [(&str, &[f64]); 7] = [
        ("x", &points.x),
        ("y", &points.y),
        ("z", &points.z),
        ("dir_x", &points.dir_x),
        ("dir_y", &points.dir_y),
        ("dir_z", &points.dir_z),
        ("pmt_type", pmt_type),
    ];
    for (field, values) in arrays {
        write!(file, "\"{}\": ", field)?;
        write_list(&mut file, values)?;
        if field == "pmt_type" {
            file.write_all(b"\n}")?;
        } else {
            writeln!(file, ",")?;
        }
    }
    file.flush()?;
    Ok(path)
}

/// Write the run summary as pretty-printed JSON.
pub fn write_summary(dir: &Path, summary: &RunSummary) -> Result<PathBuf, Error> {
    let path = dir.join(format!("{}.json", summary.name));
    let file = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(file, summary)?;
    Ok(path)
}
