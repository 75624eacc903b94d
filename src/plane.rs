//! Axis-aligned slicing planes and the evenly spaced families they come in.

use crate::errors::ConfigError;
use crate::float_types::Real;
use nalgebra::{Point2, Point3, Vector3};
use std::fmt;
use std::str::FromStr;

// Plane classification constants, combined bitwise per polygon
pub const COPLANAR: i8 = 0;
pub const FRONT: i8 = 1;
pub const BACK: i8 = 2;
pub const SPANNING: i8 = 3;

/// One of the three principal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    X,
    #[default]
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector along this axis.
    pub fn unit(self) -> Vector3<Real> {
        match self {
            Axis::X => Vector3::x(),
            Axis::Y => Vector3::y(),
            Axis::Z => Vector3::z(),
        }
    }

    /// The two axes left once this one is dropped, as `(chord, depth)`.
    ///
    /// Slicing across Y (spanwise) keeps X as chord and Z as depth; the
    /// other two choices keep the remaining axes in cyclic order.
    pub const fn retained(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }

    /// Project a 3-D point onto the retained `(chord, depth)` plane.
    #[inline]
    pub fn drop_from(self, p: &Point3<Real>) -> Point2<Real> {
        let (chord, depth) = self.retained();
        Point2::new(p[chord.index()], p[depth.index()])
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            other => Err(format!("unknown axis '{other}', expected x, y or z")),
        }
    }
}

/// An axis-aligned slicing plane: unit normal along `axis`, passing through `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub axis: Axis,
    pub origin: Point3<Real>,
}

impl Plane {
    /// Plane normal to `axis` at coordinate `position` along it.
    pub fn at(axis: Axis, position: Real) -> Self {
        let mut origin = Point3::origin();
        origin[axis.index()] = position;
        Plane { axis, origin }
    }

    #[inline]
    pub fn normal(&self) -> Vector3<Real> {
        self.axis.unit()
    }

    /// Position of the plane along its axis (`n · origin`).
    #[inline]
    pub fn offset(&self) -> Real {
        self.origin[self.axis.index()]
    }

    /// Signed distance of `point` from the plane.
    #[inline]
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        point[self.axis.index()] - self.offset()
    }

    /// Classify `point` as [`FRONT`], [`BACK`] or [`COPLANAR`] within `epsilon`.
    #[inline]
    pub fn orient_point(&self, point: &Point3<Real>, epsilon: Real) -> i8 {
        let d = self.signed_distance(point);
        if d > epsilon {
            FRONT
        } else if d < -epsilon {
            BACK
        } else {
            COPLANAR
        }
    }
}

/// Evenly spaced plane positions over `[min, max]`, trimmed by `trim` of the
/// span at both ends.
///
/// - `count == 1` yields the midpoint of the interval.
/// - `count > 1` yields positions whose first and last elements are exactly
///   `min + trim·span` and `max - trim·span`.
///
/// # Errors
/// [`ConfigError`] if `count == 0`, `trim ∉ [0, 0.5)`, or `max <= min`.
pub fn plane_positions(
    min: Real,
    max: Real,
    trim: Real,
    count: usize,
) -> Result<Vec<Real>, ConfigError> {
    if count == 0 {
        return Err(ConfigError::ZeroSections);
    }
    if !(0.0..0.5).contains(&trim) {
        return Err(ConfigError::TrimRatio(trim));
    }
    if !(min.is_finite() && max.is_finite()) || max <= min {
        return Err(ConfigError::DegenerateInterval { min, max });
    }

    if count == 1 {
        return Ok(vec![0.5 * (min + max)]);
    }

    let span = max - min;
    let start = min + trim * span;
    let end = max - trim * span;
    let step = (end - start) / (count - 1) as Real;

    let mut positions: Vec<Real> = (0..count - 1).map(|i| start + step * i as Real).collect();
    // exact end, whatever the accumulated rounding
    positions.push(end);
    Ok(positions)
}

/// Planes normal to `axis` at each of `positions`.
pub fn planes_along(axis: Axis, positions: &[Real]) -> Vec<Plane> {
    positions.iter().map(|&p| Plane::at(axis, p)).collect()
}
