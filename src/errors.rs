//! Configuration and pipeline errors

use crate::float_types::Real;
use crate::io::IoError;

/// Invalid slicing parameters, detected before any plane is cut.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// (DegenerateInterval) The model has no extent along the slicing axis
    #[error("(DegenerateInterval) bounding interval [{min}, {max}] has no extent")]
    DegenerateInterval { min: Real, max: Real },
    /// (ZeroSections) At least one section plane is required
    #[error("(ZeroSections) section count must be at least 1")]
    ZeroSections,
    /// (ZeroSamples) Each profile needs at least one sample
    #[error("(ZeroSamples) sample count must be at least 1")]
    ZeroSamples,
    /// (ZeroBins) The camber fit needs at least one bin
    #[error("(ZeroBins) camber bin count must be at least 1")]
    ZeroBins,
    /// (TrimRatio) Trim ratio must lie in [0, 0.5)
    #[error("(TrimRatio) trim ratio {0} is outside [0, 0.5)")]
    TrimRatio(Real),
    /// (MergeThreshold) Merge radius must be finite and strictly positive
    #[error("(MergeThreshold) merge threshold {0} must be finite and > 0")]
    MergeThreshold(Real),
    /// (ScaleFactor) Output scale must be finite and non-zero
    #[error("(ScaleFactor) scale factor {0} must be finite and non-zero")]
    ScaleFactor(Real),
    /// (EmptyPrefix) Output files need a name prefix
    #[error("(EmptyPrefix) output prefix must not be empty")]
    EmptyPrefix,
}

/// Anything that can stop a slicing run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] IoError),
    /// An I/O failure tied to one section
    #[error("section {index}: {source}")]
    Section {
        index: usize,
        #[source]
        source: IoError,
    },
}

impl PipelineError {
    /// Attach a section index to an I/O failure.
    pub const fn section(index: usize, source: IoError) -> Self {
        PipelineError::Section { index, source }
    }
}
