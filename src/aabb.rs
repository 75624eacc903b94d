use crate::float_types::Real;
use crate::plane::Axis;
use nalgebra::Point3;

/// Axis-aligned bounding box of a model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl Aabb {
    #[inline]
    pub const fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3<Real>>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(Self::new(first, first), |acc, p| Self {
            mins: acc.mins.inf(p),
            maxs: acc.maxs.sup(p),
        }))
    }

    /// `(min, max)` along `axis`.
    #[inline]
    pub fn interval(&self, axis: Axis) -> (Real, Real) {
        (self.mins[axis.index()], self.maxs[axis.index()])
    }
}
