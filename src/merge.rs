//! Radius-based merging of near-coincident points.
//!
//! Slicing a triangle soup produces every crossing point once per adjacent
//! triangle, plus numerical noise around shared vertices. Merging collapses
//! each neighbourhood into its centroid before any fitting happens.

use crate::errors::ConfigError;
use crate::float_types::Real;
use hashbrown::HashMap;
use nalgebra::{Point, SVector};

/// A group of points collapsed into one representative.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCluster<const D: usize> {
    /// Representative position (centroid of the members)
    pub position: Point<Real, D>,
    /// Number of points in the cluster
    pub count: usize,
    /// Largest member distance from `position`
    pub radius: Real,
}

impl<const D: usize> PointCluster<D> {
    /// Build a cluster from its members, `None` if there are none.
    pub fn from_points(points: &[Point<Real, D>]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let sum = points
            .iter()
            .fold(SVector::<Real, D>::zeros(), |acc, p| acc + p.coords);
        let position = Point::from(sum / points.len() as Real);

        let radius = points
            .iter()
            .map(|p| (p - position).norm())
            .fold(0.0, |a: Real, b| a.max(b));

        Some(PointCluster {
            position,
            count: points.len(),
            radius,
        })
    }
}

/// Uniform hash grid with cells as wide as the query radius, so every
/// neighbour of a point lies in the 3^D cells around it.
struct SpatialGrid<'a, const D: usize> {
    points: &'a [Point<Real, D>],
    cell: Real,
    cells: HashMap<[i64; D], Vec<usize>>,
}

impl<'a, const D: usize> SpatialGrid<'a, D> {
    fn new(points: &'a [Point<Real, D>], cell: Real) -> Self {
        let mut cells: HashMap<[i64; D], Vec<usize>> = HashMap::new();
        for (i, p) in points.iter().enumerate() {
            cells.entry(Self::key(p, cell)).or_default().push(i);
        }
        SpatialGrid { points, cell, cells }
    }

    #[inline]
    fn key(p: &Point<Real, D>, cell: Real) -> [i64; D] {
        std::array::from_fn(|i| (p[i] / cell).floor() as i64)
    }

    /// Indices of all points within `radius` of `query`, ascending.
    fn within(&self, query: &Point<Real, D>, radius: Real) -> Vec<usize> {
        let center = Self::key(query, self.cell);
        let radius_sq = radius * radius;
        let mut found = Vec::new();

        for n in 0..3usize.pow(D as u32) {
            let mut rest = n;
            let neighbour: [i64; D] = std::array::from_fn(|i| {
                let offset = (rest % 3) as i64 - 1;
                rest /= 3;
                center[i].saturating_add(offset)
            });
            if let Some(bucket) = self.cells.get(&neighbour) {
                found.extend(
                    bucket
                        .iter()
                        .copied()
                        .filter(|&j| (self.points[j] - query).norm_squared() <= radius_sq),
                );
            }
        }

        found.sort_unstable();
        found
    }
}

/// Group `points` into clusters of radius `threshold`.
///
/// The lowest-index point not yet absorbed anchors each cluster. A cluster's
/// centroid averages every point within `threshold` of its anchor
/// (inclusive), including points an earlier cluster already absorbed, so
/// neighbouring clusters can share members. Absorbed points never anchor a
/// cluster of their own. Clusters are returned in the order they were formed.
///
/// # Errors
/// [`ConfigError::MergeThreshold`] unless `threshold` is finite and positive.
pub fn cluster_points<const D: usize>(
    points: &[Point<Real, D>],
    threshold: Real,
) -> Result<Vec<PointCluster<D>>, ConfigError> {
    if !(threshold.is_finite() && threshold > 0.0) {
        return Err(ConfigError::MergeThreshold(threshold));
    }

    let grid = SpatialGrid::new(points, threshold);
    let mut visited = vec![false; points.len()];
    let mut clusters = Vec::new();
    let mut members = Vec::new();

    for anchor in 0..points.len() {
        if visited[anchor] {
            continue;
        }

        members.clear();
        for j in grid.within(&points[anchor], threshold) {
            visited[j] = true;
            members.push(points[j]);
        }

        // the anchor is always within range of itself
        if let Some(cluster) = PointCluster::from_points(&members) {
            clusters.push(cluster);
        }
    }

    Ok(clusters)
}

/// Replace near-coincident points by their cluster centroids.
///
/// If everything collapses into a single cluster the input is returned
/// unmerged, so a whole section is never reduced to one point.
///
/// # Errors
/// [`ConfigError::MergeThreshold`] unless `threshold` is finite and positive.
pub fn merge_duplicates<const D: usize>(
    points: &[Point<Real, D>],
    threshold: Real,
) -> Result<Vec<Point<Real, D>>, ConfigError> {
    let clusters = cluster_points(points, threshold)?;
    if clusters.len() == 1 {
        return Ok(points.to_vec());
    }
    Ok(clusters.into_iter().map(|c| c.position).collect())
}
