//! Triangle-soup solids and their plane intersections.

use crate::aabb::Aabb;
use crate::float_types::{Real, tolerance};
use crate::plane::{BACK, COPLANAR, FRONT, Plane, SPANNING};
use crate::traits::{Segment, Sliceable};
use nalgebra::Point3;
use std::sync::OnceLock;

/// A surface model stored as independent triangles, the way STL stores it.
#[derive(Debug, Clone, Default)]
pub struct TriMesh {
    triangles: Vec<[Point3<Real>; 3]>,
    /// Lazily calculated AABB that spans `triangles`.
    bounding_box: OnceLock<Aabb>,
}

impl TriMesh {
    pub fn new(triangles: Vec<[Point3<Real>; 3]>) -> Self {
        TriMesh {
            triangles,
            bounding_box: OnceLock::new(),
        }
    }

    pub fn triangles(&self) -> &[[Point3<Real>; 3]] {
        &self.triangles
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Cut one triangle with `plane`.
    ///
    /// Returns the crossing segment of a spanning triangle, an edge lying in the
    /// plane, or all three edges of a triangle coplanar with it.
    fn slice_triangle(tri: &[Point3<Real>; 3], plane: &Plane, out: &mut Vec<Segment>) {
        let eps = tolerance();
        let types = tri.map(|p| plane.orient_point(&p, eps));
        let triangle_type = types.iter().fold(0, |acc, &t| acc | t);

        match triangle_type {
            COPLANAR => {
                out.extend((0..3).map(|i| [tri[i], tri[(i + 1) % 3]]));
            },

            FRONT | BACK => {
                // at most touching: only an edge fully in the plane contributes
                let on_plane: Vec<_> = (0..3).filter(|&i| types[i] == COPLANAR).collect();
                if let [a, b] = on_plane[..] {
                    out.push([tri[a], tri[b]]);
                }
            },

            SPANNING => {
                let mut crossing = Vec::with_capacity(2);
                for i in 0..3 {
                    let j = (i + 1) % 3;
                    let (vi, vj) = (tri[i], tri[j]);
                    if types[i] == COPLANAR {
                        crossing.push(vi);
                    }
                    if (types[i] | types[j]) == SPANNING {
                        let di = plane.signed_distance(&vi);
                        let dj = plane.signed_distance(&vj);
                        let t = di / (di - dj);
                        crossing.push(vi + (vj - vi) * t);
                    }
                }
                if let [a, b] = crossing[..] {
                    out.push([a, b]);
                }
            },

            _ => {},
        }
    }
}

impl Sliceable for TriMesh {
    fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            Aabb::from_points(self.triangles.iter().flatten())
                .unwrap_or_else(|| Aabb::new(Point3::origin(), Point3::origin()))
        })
    }

    fn slice(&self, plane: &Plane) -> Vec<Segment> {
        let mut segments = Vec::new();
        for tri in &self.triangles {
            Self::slice_triangle(tri, plane, &mut segments);
        }
        segments
    }
}
