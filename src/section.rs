use crate::float_types::Real;
use crate::plane::Plane;
use crate::traits::{Segment, Sliceable};
use nalgebra::{Point2, Point3};

/// Raw points where one plane cut the solid.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Position of the plane in its family, used to name output files.
    pub index: usize,
    pub plane: Plane,
    pub points: Vec<Point3<Real>>,
}

impl Section {
    /// Collect both endpoints of every segment, in segment order.
    pub fn from_segments(index: usize, plane: Plane, segments: &[Segment]) -> Self {
        Section {
            index,
            plane,
            points: segments.iter().flatten().copied().collect(),
        }
    }

    /// Slice `solid` with `plane`.
    pub fn cut<T: Sliceable + ?Sized>(solid: &T, index: usize, plane: Plane) -> Self {
        Self::from_segments(index, plane, &solid.slice(&plane))
    }

    /// Drop `plane`'s axis from each of `points`, leaving `(chord, depth)`.
    pub fn project(points: &[Point3<Real>], plane: &Plane) -> Vec<Point2<Real>> {
        points.iter().map(|p| plane.axis.drop_from(p)).collect()
    }
}
