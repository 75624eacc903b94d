//! Parametric airfoils and straight wings built from them.

use crate::float_types::Real;
use crate::mesh::TriMesh;
use crate::plane::Axis;
use nalgebra::{Point2, Point3, Vector2};

/// NACA 4-digit airfoil outline (e.g. NACA 2412 is `(2.0, 4.0, 12.0)`).
///
/// * `max_camber` – maximum camber in percent of chord
/// * `camber_position` – its chord position in tenths of chord
/// * `thickness` – maximum thickness in percent of chord
/// * `chord` – chord length
/// * `samples` – points per surface
///
/// Starts at the leading edge, runs along the upper surface to the trailing
/// edge and back along the lower surface. The first point is not repeated.
pub fn naca4(
    max_camber: Real,
    camber_position: Real,
    thickness: Real,
    chord: Real,
    samples: usize,
) -> Vec<Point2<Real>> {
    if samples == 0 {
        return Vec::new();
    }
    let m = max_camber / 100.0;
    let p = camber_position / 10.0;
    let t = thickness / 100.0;

    // thickness half-profile
    let half_thickness = |x: Real| -> Real {
        5.0 * t
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x * x + 0.2843 * x * x * x
                - 0.1015 * x * x * x * x)
    };

    // mean-camber line & slope
    let camber = |x: Real| -> (Real, Real) {
        if x < p {
            (m / (p * p) * (2.0 * p * x - x * x), 2.0 * m / (p * p) * (p - x))
        } else {
            let q = (1.0 - p).powi(2);
            (m / q * ((1.0 - 2.0 * p) + 2.0 * p * x - x * x), 2.0 * m / q * (p - x))
        }
    };

    let surface = |i: usize, side: Real| -> Point2<Real> {
        let xc = i as Real / samples as Real;
        let (yc, dy) = camber(xc);
        let theta = dy.atan();
        let yt = half_thickness(xc);
        Point2::new(
            chord * (xc - side * yt * theta.sin()),
            chord * (yc + side * yt * theta.cos()),
        )
    };

    let mut outline = Vec::with_capacity(2 * samples);
    // leading edge → trailing edge (upper)
    outline.extend((0..=samples).map(|i| surface(i, 1.0)));
    // trailing edge → leading edge (lower)
    outline.extend((1..samples).rev().map(|i| surface(i, -1.0)));
    outline
}

/// Place a `(chord, depth)` point at position `s` along `axis`.
fn lift(axis: Axis, p: &Point2<Real>, s: Real) -> Point3<Real> {
    let (chord, depth) = axis.retained();
    let mut out = Point3::origin();
    out[axis.index()] = s;
    out[chord.index()] = p.x;
    out[depth.index()] = p.y;
    out
}

impl TriMesh {
    /// Sweep the closed outline `profile` from `0` to `span` along `axis`.
    ///
    /// The outline lies in the plane of the two remaining axes, in the same
    /// `(chord, depth)` order [`Axis::drop_from`] uses. End caps are fanned
    /// from the outline centroid, which assumes the outline is star-shaped
    /// around it (true for airfoils). Fewer than three points give an empty mesh.
    pub fn extrude_profile(profile: &[Point2<Real>], axis: Axis, span: Real) -> TriMesh {
        let n = profile.len();
        if n < 3 {
            return TriMesh::default();
        }

        let centroid = Point2::from(
            profile.iter().fold(Vector2::zeros(), |acc, p| acc + p.coords) / n as Real,
        );
        let mut triangles = Vec::with_capacity(4 * n);
        for i in 0..n {
            let (a, b) = (&profile[i], &profile[(i + 1) % n]);
            let (a0, b0) = (lift(axis, a, 0.0), lift(axis, b, 0.0));
            let (a1, b1) = (lift(axis, a, span), lift(axis, b, span));

            triangles.push([a0, b0, b1]);
            triangles.push([a0, b1, a1]);
            triangles.push([lift(axis, &centroid, 0.0), b0, a0]);
            triangles.push([lift(axis, &centroid, span), a1, b1]);
        }
        TriMesh::new(triangles)
    }

    /// A straight, untwisted NACA 4-digit wing of the given `span` along `axis`.
    ///
    /// The wing is built nose forward: leading edge at chord `chord`, trailing
    /// edge at chord `0`. That is the model frame the default
    /// [`Flip::Chord`](crate::normalize::Flip::Chord) turns into the profile
    /// frame, where the trailing edge has the largest chord.
    pub fn naca4_wing(
        digits: (Real, Real, Real),
        chord: Real,
        span: Real,
        samples: usize,
        axis: Axis,
    ) -> TriMesh {
        let (m, p, t) = digits;
        let nose_forward: Vec<_> = naca4(m, p, t, chord, samples)
            .into_iter()
            .map(|q| Point2::new(chord - q.x, q.y))
            .collect();
        Self::extrude_profile(&nose_forward, axis, span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Sliceable;
    use approx::assert_relative_eq;

    #[test]
    fn symmetric_airfoil_is_mirror_symmetric() {
        let outline = naca4(0.0, 0.0, 12.0, 1.0, 20);
        assert_eq!(outline.len(), 40);
        assert_relative_eq!(outline[0], Point2::new(0.0, 0.0), epsilon = 1e-12);
        for i in 1..20 {
            let upper = outline[i];
            let lower = outline[40 - i];
            assert_relative_eq!(upper.x, lower.x, epsilon = 1e-12);
            assert_relative_eq!(upper.y, -lower.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn thickness_peaks_near_thirty_percent() {
        let outline = naca4(0.0, 0.0, 12.0, 2.0, 100);
        let max_y = outline.iter().map(|p| p.y).fold(Real::MIN, Real::max);
        // half of 12 % of a 2.0 chord
        assert_relative_eq!(max_y, 0.12, epsilon = 1e-3);
    }

    #[test]
    fn wing_bounds_follow_axis() {
        let wing = TriMesh::naca4_wing((2.0, 4.0, 12.0), 1.0, 5.0, 30, Axis::Y);
        let bb = wing.bounding_box();
        assert_relative_eq!(bb.mins.y, 0.0);
        assert_relative_eq!(bb.maxs.y, 5.0);
        assert!(bb.mins.x.abs() < 1e-2);
        assert!((bb.maxs.x - 1.0).abs() < 1e-2);
        // nose forward: the sharp leading-edge point sits at the largest chord
        let leading = wing
            .triangles()
            .iter()
            .flatten()
            .max_by(|a, b| a.x.total_cmp(&b.x))
            .expect("non-empty");
        assert!(leading.z.abs() < 1e-2);
        assert_eq!(wing.triangles().len(), 4 * 60);
    }

    #[test]
    fn degenerate_outline_gives_empty_mesh() {
        assert!(naca4(2.0, 4.0, 12.0, 1.0, 0).is_empty());
        let mesh = TriMesh::extrude_profile(&[Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)], Axis::Z, 1.0);
        assert!(mesh.is_empty());
    }
}
