//! Bayer error codes.

use thiserror::Error;

use crate::BayerPattern;

/// Result type of every mosaicing and demosaicing operation.
pub type BayerResult<T> = Result<T, BayerError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Error codes for the Bayer mosaicing and demosaicing operations.
///
/// Every variant is an invalid-argument condition detected before any work is done;
/// there is nothing to retry.
pub enum BayerError {
    /// The CFA pattern name is not one of the four Bayer arrangements.
    #[error("\"{0}\" CFA pattern is invalid, it must be one of [RGGB, BGGR, GRBG, GBRG]")]
    InvalidPattern(String),
    /// The demosaicing method name is unknown.
    #[error("\"{0}\" demosaicing method is invalid, it must be one of [bilinear, malvar2004, menon2007, menon2007-norefine, ddfapd]")]
    InvalidMethod(String),
    /// The CFA is tagged with a different pattern than the one requested.
    #[error("CFA is tagged {image} but {requested} was requested")]
    PatternMismatch {
        /// Pattern the image carries.
        image: BayerPattern,
        /// Pattern the caller asked for.
        requested: BayerPattern,
    },
    /// The image does not have the right number of channels.
    #[error("Wrong depth: expected {expected} channel(s), got {got}")]
    WrongDepth {
        /// Expected channel count.
        expected: usize,
        /// Actual channel count.
        got: usize,
    },
    /// The image (or plane) does not have the right resolution.
    #[error("Wrong resolution: expected {expected_width}x{expected_height}, got {width}x{height}")]
    WrongResolution {
        /// Expected width.
        expected_width: usize,
        /// Expected height.
        expected_height: usize,
        /// Actual width.
        width: usize,
        /// Actual height.
        height: usize,
    },
    /// The buffer length does not match the image dimensions.
    #[error("Data length {got} does not match image size {expected}")]
    DataLength {
        /// Number of pixels implied by the dimensions.
        expected: usize,
        /// Buffer length.
        got: usize,
    },
    /// The image carries no Bayer pattern to demosaic with.
    #[error("Image is not a Bayer mosaic")]
    NotBayer,
    /// Raw byte input could not be reinterpreted as samples.
    #[error("Byte cast failed: {0}")]
    Cast(String),
}

impl BayerError {
    /// Whether the error stems from an invalid argument. Always `true`: the pipeline is
    /// deterministic and has no transient failure modes.
    pub fn is_invalid_argument(&self) -> bool {
        true
    }
}
