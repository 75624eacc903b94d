//! Plain-text coordinate files: one `x z` row per profile point, no header.
//!
//! This is the layout airfoil analysis tools (XFOIL and friends) read.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use nalgebra::Point2;

use super::IoError;
use crate::float_types::Real;

/// Digits after the decimal point in written coordinates.
pub const PRECISION: usize = 8;

pub fn write_coords_to<W: Write>(mut writer: W, points: &[Point2<Real>]) -> std::io::Result<()> {
    for p in points {
        writeln!(writer, "{:.prec$} {:.prec$}", p.x, p.y, prec = PRECISION)?;
    }
    writer.flush()
}

/// Write an ordered profile to `path`.
pub fn write_coords(path: &Path, points: &[Point2<Real>]) -> Result<(), IoError> {
    let file = File::create(path).map_err(|e| IoError::at(path, e))?;
    write_coords_to(BufWriter::new(file), points).map_err(|e| IoError::at(path, e))
}

/// Read a coordinate file back. Unlike record files, a malformed row is an error.
pub fn read_coords(path: &Path) -> Result<Vec<Point2<Real>>, IoError> {
    let file = File::open(path).map_err(|e| IoError::at(path, e))?;
    let mut points = Vec::new();
    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| IoError::at(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        let cells: Vec<Real> = line
            .split_whitespace()
            .map(str::parse::<Real>)
            .collect::<Result<_, _>>()
            .map_err(|e| {
                IoError::MalformedInput(format!("{}:{}: {e}", path.display(), lineno + 1))
            })?;
        match cells.as_slice() {
            [x, z] => points.push(Point2::new(*x, *z)),
            _ => {
                return Err(IoError::MalformedInput(format!(
                    "{}:{}: expected 2 columns, found {}",
                    path.display(),
                    lineno + 1,
                    cells.len()
                )));
            },
        }
    }
    Ok(points)
}
