//! Cross-section extraction for wing-like solids.
//!
//! A model is cut by a family of parallel, evenly spaced planes. Each cut is
//! cleaned of duplicate points, brought into a centered `(chord, depth)` frame,
//! sub-sampled, split into upper and lower surfaces around a fitted camber
//! curve and written out as one closed, ordered profile per section.
//!
//! ```no_run
//! use airfoil_slicer::{SliceConfig, TriMesh, extract_profiles};
//! use airfoil_slicer::plane::Axis;
//!
//! let wing = TriMesh::naca4_wing((2.0, 4.0, 12.0), 100.0, 500.0, 60, Axis::Y);
//! let config = SliceConfig::default().with_sections(5).with_output_dir("profiles");
//! let report = extract_profiles(&wing, &config)?;
//! println!("{} profiles written", report.written().len());
//! # Ok::<(), airfoil_slicer::errors::PipelineError>(())
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` model loading and the `airfoil-slicer` binary
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to process sections concurrently

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod camber;
pub mod config;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod merge;
pub mod mesh;
pub mod normalize;
pub mod pipeline;
pub mod plane;
pub mod profile;
pub mod section;
pub mod shapes;
pub mod traits;

#[cfg(any(
    all(feature = "f64", feature = "f32"),
    not(any(feature = "f64", feature = "f32"))
))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use config::SliceConfig;
pub use mesh::TriMesh;
pub use pipeline::{PipelineReport, extract_profiles};
pub use profile::OrderedProfile;
pub use traits::Sliceable;
