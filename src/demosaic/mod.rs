mod bayer;
mod bilinear;
mod border;
mod convolve;
mod errcode;
mod malvar;
mod menon;
mod mosaic;
mod plane;

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

pub use bayer::{bayer_masks, BayerMasks, Channel};
pub use bilinear::demosaic_bilinear;
pub use errcode::{BayerError, BayerResult};
pub use malvar::demosaic_malvar2004;
pub use menon::{demosaic_ddfapd, demosaic_menon2007, refine_menon2007};
pub use mosaic::mosaic;
pub use plane::{Mask, Plane};

use crate::{BayerPattern, ColorSpace, ImageData, Sample};

/// The demosaicing algorithm to use to fill in the missing data.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum DemosaicMethod {
    /// Bilinear interpolation.
    #[default]
    Bilinear,
    /// Gradient-corrected linear interpolation (Malvar, He & Cutler, 2004).
    Malvar2004,
    /// Directional filtering with a-posteriori decision (Menon, Andriani &
    /// Calvagno, 2007).
    Menon2007 {
        /// Apply the refinement step.
        refine: bool,
    },
}

impl fmt::Display for DemosaicMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemosaicMethod::Bilinear => f.write_str("bilinear"),
            DemosaicMethod::Malvar2004 => f.write_str("malvar2004"),
            DemosaicMethod::Menon2007 { refine: true } => f.write_str("menon2007"),
            DemosaicMethod::Menon2007 { refine: false } => f.write_str("menon2007-norefine"),
        }
    }
}

impl FromStr for DemosaicMethod {
    type Err = BayerError;

    /// Parse a method name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bilinear" => Ok(DemosaicMethod::Bilinear),
            "malvar2004" | "malvar" => Ok(DemosaicMethod::Malvar2004),
            "menon2007" | "menon" | "ddfapd" => Ok(DemosaicMethod::Menon2007 { refine: true }),
            "menon2007-norefine" => Ok(DemosaicMethod::Menon2007 { refine: false }),
            _ => Err(BayerError::InvalidMethod(s.to_owned())),
        }
    }
}

/// Demosaic a single channel CFA laid out with `pattern` using `method`.
///
/// # Errors
/// - [`BayerError::WrongDepth`] if `cfa` has more than one channel.
/// - [`BayerError::PatternMismatch`] if `cfa` is tagged with another pattern.
pub fn demosaic<T: Sample>(
    cfa: &ImageData<'_, T>,
    pattern: BayerPattern,
    method: DemosaicMethod,
) -> BayerResult<ImageData<'static, T>> {
    debug!(
        "demosaic {}x{} {pattern} CFA with {method}",
        cfa.width(),
        cfa.height()
    );
    match method {
        DemosaicMethod::Bilinear => demosaic_bilinear(cfa, pattern),
        DemosaicMethod::Malvar2004 => demosaic_malvar2004(cfa, pattern),
        DemosaicMethod::Menon2007 { refine } => demosaic_menon2007(cfa, pattern, refine),
    }
}

/// Trait to demosaic images that carry their own Bayer pattern.
pub trait Debayer<T: Sample> {
    /// Demosaic the image with `method`, using the pattern the image is tagged with.
    ///
    /// # Errors
    /// - [`BayerError::NotBayer`] if the image is not tagged with a [`ColorSpace::Bayer`]
    ///   pattern.
    /// - Any error of [`demosaic`].
    fn debayer(&self, method: DemosaicMethod) -> BayerResult<ImageData<'static, T>>;
}

impl<T: Sample> Debayer<T> for ImageData<'_, T> {
    fn debayer(&self, method: DemosaicMethod) -> BayerResult<ImageData<'static, T>> {
        let pattern = BayerPattern::try_from(self.color_space())?;
        demosaic(self, pattern, method)
    }
}

/// Validate a CFA and take its samples as a plane.
pub(crate) fn cfa_plane<T: Sample>(
    cfa: &ImageData<'_, T>,
    pattern: BayerPattern,
) -> BayerResult<Plane<T>> {
    if let ColorSpace::Bayer(image) = cfa.color_space() {
        if image != pattern {
            return Err(BayerError::PatternMismatch {
                image,
                requested: pattern,
            });
        }
    }
    cfa.to_plane()
}
