//! Splitting a profile point set into its two surfaces and stitching them
//! into one closed loop.

use crate::camber::CamberCurve;
use crate::float_types::{Real, approx_coincident};
use geo::algorithm::winding_order::{Winding, WindingOrder};
use geo::{Coord, LineString};
use nalgebra::Point2;
use std::cmp::Ordering;

/// Which side of the camber curve a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Upper,
    Lower,
}

/// Label every point against `camber`: upper iff `z >= camber(x)`.
pub fn classify(points: &[Point2<Real>], camber: &CamberCurve) -> Vec<Surface> {
    points
        .iter()
        .map(|p| {
            if p.y >= camber.eval(p.x) {
                Surface::Upper
            } else {
                Surface::Lower
            }
        })
        .collect()
}

/// A closed profile: trailing edge, upper surface, leading edge, lower surface,
/// back to the trailing edge. First and last points coincide.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedProfile {
    points: Vec<Point2<Real>>,
    /// Points classified upper and lower, before seam handling.
    surfaces: (usize, usize),
}

impl OrderedProfile {
    /// Order `points` into a closed loop using `camber` to separate the surfaces.
    ///
    /// Upper points run from high to low chord, lower points from low to high.
    /// Where the upper run ends on the point the lower run starts with, that
    /// point is kept once. A copy of the first point closes the loop unless the
    /// last point already matches it. A set lying entirely on one side still
    /// yields a closed, single-branch loop.
    pub fn from_points(points: &[Point2<Real>], camber: &CamberCurve) -> Self {
        let mut upper = Vec::new();
        let mut lower = Vec::new();
        for (p, side) in points.iter().zip(classify(points, camber)) {
            match side {
                Surface::Upper => upper.push(*p),
                Surface::Lower => lower.push(*p),
            }
        }

        let surfaces = (upper.len(), lower.len());
        upper.sort_by(|a, b| by_chord(b, a));
        lower.sort_by(by_chord);

        if let (Some(last_upper), Some(first_lower)) = (upper.last(), lower.first()) {
            if approx_coincident(last_upper.coords.as_slice(), first_lower.coords.as_slice()) {
                lower.remove(0);
            }
        }

        let mut loop_points = upper;
        loop_points.append(&mut lower);

        if let (Some(first), Some(last)) = (loop_points.first(), loop_points.last()) {
            if !approx_coincident(first.coords.as_slice(), last.coords.as_slice()) {
                loop_points.push(*first);
            }
        }

        OrderedProfile {
            points: loop_points,
            surfaces,
        }
    }

    /// Fit the camber curve with `bins` bins and order `points` against it.
    /// `None` for an empty point set.
    pub fn build(points: &[Point2<Real>], bins: usize) -> Option<Self> {
        let camber = CamberCurve::fit(points, bins)?;
        Some(Self::from_points(points, &camber))
    }

    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points on the upper and the lower surface.
    pub const fn surface_counts(&self) -> (usize, usize) {
        self.surfaces
    }

    /// All points fell on one side of the camber curve.
    pub const fn is_single_branch(&self) -> bool {
        (self.surfaces.0 == 0) != (self.surfaces.1 == 0)
    }

    /// First and last points coincide within tolerance.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => approx_coincident(a.coords.as_slice(), b.coords.as_slice()),
            _ => false,
        }
    }

    pub fn to_line_string(&self) -> LineString<Real> {
        LineString::new(
            self.points
                .iter()
                .map(|p| Coord { x: p.x, y: p.y })
                .collect(),
        )
    }

    /// Winding of the loop, `None` when it encloses no area.
    pub fn winding_order(&self) -> Option<WindingOrder> {
        self.to_line_string().winding_order()
    }

    pub fn into_points(self) -> Vec<Point2<Real>> {
        self.points
    }
}

#[inline]
fn by_chord(a: &Point2<Real>, b: &Point2<Real>) -> Ordering {
    a.x.total_cmp(&b.x)
}
