//! Two-column `chord,depth` record files.
//!
//! One file per section, no header, no row index. These are the hand-off
//! between normalization and ordering and are deleted once the final
//! coordinate file exists.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use nalgebra::Point2;

use super::IoError;
use crate::float_types::Real;

/// Write `points` as comma-separated rows.
pub fn write_records_to<W: Write>(mut writer: W, points: &[Point2<Real>]) -> std::io::Result<()> {
    for p in points {
        writeln!(writer, "{},{}", p.x, p.y)?;
    }
    writer.flush()
}

/// Write `points` to the record file at `path`, replacing any previous content.
pub fn write_records(path: &Path, points: &[Point2<Real>]) -> Result<(), IoError> {
    let file = File::create(path).map_err(|e| IoError::at(path, e))?;
    write_records_to(BufWriter::new(file), points).map_err(|e| IoError::at(path, e))
}

/// Read rows of `chord,depth`. Rows with a missing or non-numeric cell are dropped.
pub fn read_records_from<R: BufRead>(reader: R) -> std::io::Result<Vec<Point2<Real>>> {
    let mut points = Vec::new();
    for line in reader.lines() {
        if let Some(p) = parse_row(&line?) {
            points.push(p);
        }
    }
    Ok(points)
}

/// Read the record file at `path`.
pub fn read_records(path: &Path) -> Result<Vec<Point2<Real>>, IoError> {
    let file = File::open(path).map_err(|e| IoError::at(path, e))?;
    read_records_from(BufReader::new(file)).map_err(|e| IoError::at(path, e))
}

fn parse_row(line: &str) -> Option<Point2<Real>> {
    let mut cells = line.split(',').map(str::trim);
    let x = cells.next()?.parse::<Real>().ok()?;
    let z = cells.next()?.parse::<Real>().ok()?;
    (x.is_finite() && z.is_finite()).then(|| Point2::new(x, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_without_header_or_index() {
        let mut buf = Vec::new();
        write_records_to(&mut buf, &[Point2::new(1.5, -2.0), Point2::new(0.0, 0.25)])
            .expect("write");
        assert_eq!(String::from_utf8(buf).expect("utf8"), "1.5,-2\n0,0.25\n");
    }

    #[test]
    fn bad_cells_are_dropped() {
        let text = "0.5,1.0\nx,2.0\n3.0,\n\n4.0\n,\n1e-3 , 2e-3\nNaN,1.0\n";
        let points = read_records_from(text.as_bytes()).expect("read");
        assert_eq!(points, vec![Point2::new(0.5, 1.0), Point2::new(1e-3, 2e-3)]);
    }

    #[test]
    fn file_round_trip_keeps_order() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("section_0.csv");
        let points = vec![
            Point2::new(0.1, 0.2),
            Point2::new(-3.25, 7.0),
            Point2::new(1.0 / 3.0, 2.0 / 3.0),
        ];
        write_records(&path, &points).expect("write");
        assert_eq!(read_records(&path).expect("read"), points);
    }

    #[test]
    fn missing_file_reports_path() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("nope.csv");
        let err = read_records(&path).expect_err("must fail");
        assert!(format!("{err}").contains("nope.csv"));
    }
}
