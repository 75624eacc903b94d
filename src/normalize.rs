//! Centering, orientation, sub-sampling and unit scaling of raw sections.

use crate::float_types::Real;
use nalgebra::{Point2, Vector2};
use std::str::FromStr;

/// Which profile axis is negated to bring a section into the standard frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flip {
    None,
    /// Leading edge towards negative chord
    #[default]
    Chord,
    Depth,
}

impl Flip {
    #[inline]
    const fn factors(self) -> (Real, Real) {
        match self {
            Flip::None => (1.0, 1.0),
            Flip::Chord => (-1.0, 1.0),
            Flip::Depth => (1.0, -1.0),
        }
    }
}

impl FromStr for Flip {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Flip::None),
            "chord" => Ok(Flip::Chord),
            "depth" => Ok(Flip::Depth),
            other => Err(format!("unknown flip '{other}', expected none, chord or depth")),
        }
    }
}

/// `k` indices spread uniformly over `0..len`, first and last included.
///
/// Index `i` is `i·(len-1)/(k-1)` rounded to the nearest integer (halves
/// round up), not truncated: `sample_indices(4, 3)` is `[0, 2, 3]`, where
/// truncation would give `[0, 1, 3]`. When `k > len` indices repeat.
pub fn sample_indices(len: usize, k: usize) -> Vec<usize> {
    if len == 0 || k == 0 {
        return Vec::new();
    }
    if k == 1 {
        return vec![0];
    }
    let last = len - 1;
    let steps = k - 1;
    (0..k).map(|i| (i * last + steps / 2) / steps).collect()
}

/// Bring a section's `(chord, depth)` points into the profile frame.
///
/// Centers them on their centroid, negates the axis chosen by `flip`, keeps
/// `samples` points by index (not arc length) and multiplies by `scale`.
/// Returns `None` for an empty section, which callers skip.
pub fn normalize_section(
    points: &[Point2<Real>],
    samples: usize,
    scale: Real,
    flip: Flip,
) -> Option<Vec<Point2<Real>>> {
    if points.is_empty() {
        return None;
    }

    let centroid = points
        .iter()
        .fold(Vector2::zeros(), |acc, p| acc + p.coords)
        / points.len() as Real;
    let (fx, fz) = flip.factors();

    Some(
        sample_indices(points.len(), samples)
            .into_iter()
            .map(|i| {
                let c = points[i].coords - centroid;
                Point2::new(fx * c.x * scale, fz * c.y * scale)
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn indices_include_both_ends() {
        assert_eq!(sample_indices(10, 4), vec![0, 3, 6, 9]);
        assert_eq!(sample_indices(5, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(sample_indices(7, 1), vec![0]);
        assert_eq!(sample_indices(0, 3), Vec::<usize>::new());
    }

    #[test]
    fn indices_round_to_nearest() {
        // 1.5 rounds up to 2 rather than truncating to 1
        assert_eq!(sample_indices(4, 3), vec![0, 2, 3]);
        // 10/3 = 3.33 rounds down, 20/3 = 6.67 rounds up
        assert_eq!(sample_indices(11, 4), vec![0, 3, 7, 10]);
    }

    #[test]
    fn oversampling_repeats_indices() {
        let idx = sample_indices(2, 5);
        assert_eq!(idx.len(), 5);
        assert_eq!(idx.first(), Some(&0));
        assert_eq!(idx.last(), Some(&1));
    }

    #[test]
    fn flip_parses_case_insensitively() {
        assert_eq!("Chord".parse::<Flip>(), Ok(Flip::Chord));
        assert_eq!(" depth ".parse::<Flip>(), Ok(Flip::Depth));
        assert!("span".parse::<Flip>().is_err());
    }

    #[test]
    fn empty_section_is_skipped() {
        assert!(normalize_section(&[], 10, 0.1, Flip::Chord).is_none());
    }

    #[test]
    fn centers_flips_and_scales() {
        let points = [
            Point2::new(10.0, 2.0),
            Point2::new(20.0, 4.0),
            Point2::new(30.0, 6.0),
        ];
        let out = normalize_section(&points, 3, 0.1, Flip::Chord).expect("non-empty");
        assert_eq!(out.len(), 3);
        // centroid is (20, 4)
        assert_relative_eq!(out[0], Point2::new(1.0, -0.2), epsilon = 1e-12);
        assert_relative_eq!(out[1], Point2::new(0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(out[2], Point2::new(-1.0, 0.2), epsilon = 1e-12);
    }

    #[test]
    fn output_has_exactly_k_points() {
        let points: Vec<_> = (0..37).map(|i| Point2::new(i as Real, 0.0)).collect();
        for k in [1, 2, 10, 37, 100] {
            let out = normalize_section(&points, k, 1.0, Flip::None).expect("non-empty");
            assert_eq!(out.len(), k);
        }
    }
}
