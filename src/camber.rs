//! Mean-camber reference curve fitted to an unordered profile point set.
//!
//! The chord range is cut into equal bins; each populated bin contributes
//! the midpoint between its lowest and highest depth. Those midpoints are
//! joined piecewise-linearly and extended linearly past both ends.

use crate::float_types::Real;
use nalgebra::Point2;

/// Default number of chord bins.
pub const DEFAULT_BINS: usize = 100;

/// Chord position → reference depth.
#[derive(Debug, Clone, PartialEq)]
pub enum CamberCurve {
    /// `z = z0 + slope · (x - x0)`
    Line { x0: Real, z0: Real, slope: Real },
    /// Piecewise-linear through `knots`, sorted by strictly increasing chord.
    /// [`CamberCurve::fit`] always produces at least two.
    Piecewise { knots: Vec<Point2<Real>> },
}

impl CamberCurve {
    /// The straight line through the points of smallest and largest chord.
    ///
    /// Slope is zero when both share the same chord. Returns `None` for an
    /// empty point set.
    pub fn chord_line(points: &[Point2<Real>]) -> Option<Self> {
        let first = points.first()?;
        let (lo, hi) = points.iter().fold((first, first), |(lo, hi), p| {
            (if p.x < lo.x { p } else { lo }, if p.x > hi.x { p } else { hi })
        });
        let dx = hi.x - lo.x;
        let slope = if dx != 0.0 { (hi.y - lo.y) / dx } else { 0.0 };
        Some(CamberCurve::Line {
            x0: lo.x,
            z0: lo.y,
            slope,
        })
    }

    /// Fit the camber curve of `points` with `bins` chord bins.
    ///
    /// Falls back to [`CamberCurve::chord_line`] when fewer than two bins hold
    /// points. Returns `None` only for an empty point set.
    pub fn fit(points: &[Point2<Real>], bins: usize) -> Option<Self> {
        let knots = binned_midpoints(points, bins);
        if knots.len() < 2 {
            tracing::debug!(
                points = points.len(),
                valid_bins = knots.len(),
                "camber fit degenerate, using chord line"
            );
            return Self::chord_line(points);
        }
        Some(CamberCurve::Piecewise { knots })
    }

    /// Reference depth at chord position `x`.
    pub fn eval(&self, x: Real) -> Real {
        match self {
            CamberCurve::Line { x0, z0, slope } => z0 + slope * (x - x0),
            CamberCurve::Piecewise { knots } if knots.len() < 2 => {
                knots.first().map_or(0.0, |k| k.y)
            },
            CamberCurve::Piecewise { knots } => {
                // segment [i-1, i] containing x, clamped to the end segments
                let i = knots
                    .partition_point(|k| k.x < x)
                    .clamp(1, knots.len() - 1);
                let (a, b) = (knots[i - 1], knots[i]);
                let t = (x - a.x) / (b.x - a.x);
                a.y + t * (b.y - a.y)
            },
        }
    }
}

/// `(bin center, mid-depth)` for every populated bin, by increasing center.
///
/// A point belongs to every bin whose center is within half a bin width, so
/// points on a shared edge count in both neighbours.
pub fn binned_midpoints(points: &[Point2<Real>], bins: usize) -> Vec<Point2<Real>> {
    let Some(first) = points.first() else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }

    let (min_x, max_x) = points
        .iter()
        .fold((first.x, first.x), |(lo, hi), p| (lo.min(p.x), hi.max(p.x)));
    let width = (max_x - min_x) / bins as Real;
    if width <= 0.0 {
        return Vec::new();
    }
    let half = 0.5 * width;

    let mut z_range: Vec<Option<(Real, Real)>> = vec![None; bins];
    for p in points {
        // candidate bins around the point, checked exactly below
        let pos = (p.x - min_x) / width - 0.5;
        let lo = (pos.floor().max(0.0) as usize).min(bins - 1);
        let hi = (pos.ceil().max(0.0) as usize).min(bins - 1);
        for b in lo..=hi {
            let center = min_x + (b as Real + 0.5) * width;
            if (p.x - center).abs() <= half {
                let entry = z_range[b].get_or_insert((p.y, p.y));
                entry.0 = entry.0.min(p.y);
                entry.1 = entry.1.max(p.y);
            }
        }
    }

    z_range
        .iter()
        .enumerate()
        .filter_map(|(b, range)| {
            range.map(|(lo, hi)| Point2::new(min_x + (b as Real + 0.5) * width, 0.5 * (lo + hi)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn chord_line_reproduces_extremes() {
        let points = [
            Point2::new(0.3, 0.7),
            Point2::new(-1.7, 0.2),
            Point2::new(0.0, 5.0),
            Point2::new(2.9, -0.4),
        ];
        let line = CamberCurve::chord_line(&points).expect("non-empty");
        assert_relative_eq!(line.eval(-1.7), 0.2, epsilon = 1e-12);
        assert_relative_eq!(line.eval(2.9), -0.4, epsilon = 1e-12);
    }

    #[test]
    fn chord_line_is_flat_for_shared_chord() {
        let points = [Point2::new(1.0, 2.0), Point2::new(1.0, -2.0)];
        let line = CamberCurve::chord_line(&points).expect("non-empty");
        assert_eq!(line, CamberCurve::Line { x0: 1.0, z0: 2.0, slope: 0.0 });
        assert_eq!(line.eval(100.0), 2.0);
    }

    #[test]
    fn too_few_bins_fall_back_to_line() {
        // all points share one chord position: no bin width at all
        let points = [Point2::new(1.0, 0.0), Point2::new(1.0, 1.0)];
        assert!(matches!(
            CamberCurve::fit(&points, 100),
            Some(CamberCurve::Line { .. })
        ));
        // one bin can never give two knots
        let points = [Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
        assert!(matches!(CamberCurve::fit(&points, 1), Some(CamberCurve::Line { .. })));
        assert!(CamberCurve::fit(&[], 10).is_none());
    }

    #[test]
    fn symmetric_lens_has_flat_camber() {
        let points: Vec<_> = (0..200)
            .map(|i| {
                let t = i as Real * (std::f64::consts::TAU as Real) / 200.0;
                Point2::new(t.cos(), 0.2 * t.sin())
            })
            .collect();
        let curve = CamberCurve::fit(&points, 20).expect("non-empty");
        assert!(matches!(curve, CamberCurve::Piecewise { .. }));
        for x in [-0.9, -0.5, 0.0, 0.5, 0.9] {
            assert!(curve.eval(x).abs() < 1e-2, "camber at {x} = {}", curve.eval(x));
        }
    }

    #[test]
    fn interpolates_and_extrapolates_linearly() {
        let curve = CamberCurve::Piecewise {
            knots: vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0), Point2::new(2.0, 0.0)],
        };
        assert_relative_eq!(curve.eval(0.5), 0.5);
        assert_relative_eq!(curve.eval(1.0), 1.0);
        assert_relative_eq!(curve.eval(1.5), 0.5);
        assert_relative_eq!(curve.eval(-1.0), -1.0);
        assert_relative_eq!(curve.eval(3.0), -1.0);
    }

    #[test]
    fn continuous_across_bins() {
        let points: Vec<_> = (0..=50)
            .flat_map(|i| {
                let x = i as Real / 50.0;
                let camber = 0.1 * x * (1.0 - x);
                [Point2::new(x, camber + 0.05), Point2::new(x, camber - 0.05)]
            })
            .collect();
        let curve = CamberCurve::fit(&points, 10).expect("non-empty");
        let CamberCurve::Piecewise { knots } = &curve else {
            panic!("expected a piecewise curve");
        };
        for k in knots {
            let eps = 1e-9;
            assert_relative_eq!(curve.eval(k.x - eps), curve.eval(k.x + eps), epsilon = 1e-6);
            assert_relative_eq!(curve.eval(k.x), k.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn bin_midpoint_uses_min_and_max_depth() {
        let points = [
            Point2::new(0.0, 1.0),
            Point2::new(0.1, 3.0),
            Point2::new(0.2, 2.0),
            Point2::new(1.0, -1.0),
            Point2::new(0.95, 0.5),
        ];
        let knots = binned_midpoints(&points, 2);
        assert_eq!(knots.len(), 2);
        assert_relative_eq!(knots[0], Point2::new(0.25, 2.0), epsilon = 1e-12);
        assert_relative_eq!(knots[1], Point2::new(0.75, -0.25), epsilon = 1e-12);
    }
}
