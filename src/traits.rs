use crate::aabb::Aabb;
use crate::float_types::Real;
use crate::plane::Plane;
use nalgebra::Point3;

/// A line segment where a plane cuts a surface.
pub type Segment = [Point3<Real>; 2];

/// A solid the pipeline can cut into sections.
///
/// Implementors are the geometry engine: they know their own bounds and how
/// to intersect themselves with a plane. Everything downstream only sees
/// segments.
pub trait Sliceable {
    /// Axis-aligned bounds of the solid.
    fn bounding_box(&self) -> Aabb;

    /// Intersection of the solid's surface with `plane` as line segments.
    /// Empty when the plane misses the solid.
    fn slice(&self, plane: &Plane) -> Vec<Segment>;
}
