//! Test support library
//! Provides fixtures & helper functions shared by the integration tests.
#![allow(dead_code)]

use airfoil_slicer::{
    Sliceable, TriMesh,
    aabb::Aabb,
    float_types::Real,
    plane::{Axis, Plane},
    traits::Segment,
};
use nalgebra::Point2;
use std::fmt::Write;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// `n` points on the unit circle, offset by half a step so none lies on the chord axis.
pub fn unit_circle(n: usize) -> Vec<Point2<Real>> {
    let step = 2.0 * std::f64::consts::PI as Real / n as Real;
    (0..n)
        .map(|i| {
            let t = (i as Real + 0.5) * step;
            Point2::new(t.cos(), t.sin())
        })
        .collect()
}

pub fn unit_square() -> Vec<Point2<Real>> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(0.0, 1.0),
    ]
}

/// A symmetric NACA 0012 wing, span 500 along Y, chord 100 along X with the
/// leading edge at `x = 100`.
pub fn naca0012_wing() -> TriMesh {
    TriMesh::naca4_wing((0.0, 0.0, 12.0), 100.0, 500.0, 40, Axis::Y)
}

/// Wraps a solid and reports no intersection for planes inside `gap`.
pub struct Gapped<T> {
    pub inner: T,
    pub gap: (Real, Real),
}

impl<T: Sliceable> Sliceable for Gapped<T> {
    fn bounding_box(&self) -> Aabb {
        self.inner.bounding_box()
    }

    fn slice(&self, plane: &Plane) -> Vec<Segment> {
        let s = plane.offset();
        if s > self.gap.0 && s < self.gap.1 {
            Vec::new()
        } else {
            self.inner.slice(plane)
        }
    }
}

/// Serialize `mesh` as ASCII STL.
pub fn to_ascii_stl(mesh: &TriMesh, name: &str) -> String {
    let mut out = format!("solid {name}\n");
    for tri in mesh.triangles() {
        let n = (tri[1] - tri[0]).cross(&(tri[2] - tri[0]));
        let n = n.try_normalize(0.0).unwrap_or(n);
        writeln!(out, "  facet normal {} {} {}", n.x, n.y, n.z).unwrap();
        out.push_str("    outer loop\n");
        for v in tri {
            writeln!(out, "      vertex {} {} {}", v.x, v.y, v.z).unwrap();
        }
        out.push_str("    endloop\n  endfacet\n");
    }
    writeln!(out, "endsolid {name}").unwrap();
    out
}
