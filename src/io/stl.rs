use crate::float_types::Real;
use crate::io::IoError;
use crate::mesh::TriMesh;
use std::io::Cursor;
use nalgebra::Point3;
use std::path::Path;

impl TriMesh {
    /// Create a triangle mesh from ASCII or binary STL data using `stl_io`.
    ///
    /// Facet normals are ignored; slicing only needs positions.
    pub fn from_stl(stl_data: &[u8]) -> Result<TriMesh, IoError> {
        // Create an in-memory cursor from the STL data
        let mut cursor = Cursor::new(stl_data);

        let stl_reader = stl_io::create_stl_reader(&mut cursor).map_err(IoError::Stl)?;

        let mut triangles = Vec::new();
        for tri_result in stl_reader {
            let tri = tri_result.map_err(IoError::Stl)?;
            #[allow(clippy::unnecessary_cast)]
            triangles.push(tri.vertices.map(|v| {
                Point3::new(v[0] as Real, v[1] as Real, v[2] as Real)
            }));
        }

        Ok(TriMesh::new(triangles))
    }

    /// Read an STL model from disk.
    pub fn from_stl_file(path: &Path) -> Result<TriMesh, IoError> {
        let bytes = std::fs::read(path).map_err(|e| IoError::at(path, e))?;
        Self::from_stl(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Sliceable;

    const TETRA: &str = "solid tetra
  facet normal 0 0 -1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
  facet normal 0 -1 0
    outer loop
      vertex 0 0 0
      vertex 0 0 1
      vertex 1 0 0
    endloop
  endfacet
  facet normal -1 0 0
    outer loop
      vertex 0 0 0
      vertex 0 1 0
      vertex 0 0 1
    endloop
  endfacet
  facet normal 1 1 1
    outer loop
      vertex 1 0 0
      vertex 0 0 1
      vertex 0 1 0
    endloop
  endfacet
endsolid tetra
";

    #[test]
    fn ascii_stl_loads_all_facets() {
        let mesh = TriMesh::from_stl(TETRA.as_bytes()).expect("valid STL");
        assert_eq!(mesh.triangles().len(), 4);
        let bb = mesh.bounding_box();
        assert_eq!(bb.mins, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(bb.maxs, Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(TriMesh::from_stl(b"definitely not an stl").is_err());
    }
}
