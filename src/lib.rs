#![deny(missing_docs)]
//! Bayer colour filter array (CFA) mosaicing and demosaicing for floating-point images.
//!
//! A CFA image carries one sample per pixel, red, green or blue, laid out as a
//! repeating 2x2 tile ([`BayerPattern`]). This crate rebuilds the missing two
//! channels at every pixel with one of three algorithms:
//!
//! - [`Bilinear`](DemosaicMethod::Bilinear): separable low-pass interpolation.
//! - [`Malvar2004`](DemosaicMethod::Malvar2004): gradient-corrected 5x5 kernels
//!   (Malvar, He & Cutler, 2004).
//! - [`Menon2007`](DemosaicMethod::Menon2007): directional filtering with an
//!   a-posteriori decision and optional refinement (Menon, Andriani & Calvagno, 2007),
//!   also known as DDFAPD.
//!
//! The inverse operation, [`mosaic`], collapses an RGB image back onto a CFA grid
//! using the same channel masks ([`bayer_masks`]).
//!
//! Output values are never clipped, so high dynamic range data can be demosaiced
//! directly.
//!
//! # Usage
//! ```
//! use cfademosaic::{demosaic, BayerPattern, DemosaicMethod, ImageData, ColorSpace};
//!
//! let cfa = vec![
//!     0.30980393, 0.36078432, 0.30588236, 0.3764706,
//!     0.35686275, 0.39607844, 0.36078432, 0.40000001,
//! ];
//! let cfa = ImageData::from_owned(cfa, 4, 2, ColorSpace::Gray).unwrap();
//! let rgb = demosaic(&cfa, BayerPattern::Rggb, DemosaicMethod::Malvar2004).unwrap();
//! assert_eq!(rgb.channels(), 3);
//! assert_eq!(rgb.color_space(), ColorSpace::Rgb);
//! ```
//!
//! # Features
//! - `rayon` (default): convolutions are evaluated row-parallel.
//! - `image`: conversions to and from float buffers of the [`image`](https://docs.rs/image) crate.
//! - `full`: all of the above.

mod coreimpls;
mod datastor;
mod demosaic;
#[cfg(feature = "image")]
mod image_interop;
mod imagedata;
mod traits;

use serde::{Deserialize, Serialize};

pub(crate) use datastor::DataStor;
pub use demosaic::{
    bayer_masks, demosaic, demosaic_bilinear, demosaic_ddfapd, demosaic_malvar2004,
    demosaic_menon2007, mosaic, refine_menon2007, BayerError, BayerMasks, BayerResult, Channel,
    Debayer, DemosaicMethod, Mask, Plane,
};
#[cfg(feature = "image")]
pub use image_interop::Gray32FImage;
pub use imagedata::ImageData;
pub use traits::Sample;

/// The 2x2 Bayer colour filter arrangement.
///
/// The letters describe the colours of the top-left, top-right, bottom-left and
/// bottom-right pixels of the tile, in that order.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BayerPattern {
    /// Red, green / green, blue.
    Rggb,
    /// Blue, green / green, red.
    Bggr,
    /// Green, red / blue, green.
    Grbg,
    /// Green, blue / red, green.
    Gbrg,
}

/// Enum to describe the colour layout of an [`ImageData`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorSpace {
    /// Single channel, no pattern attached. Usable as a CFA when the pattern is
    /// supplied separately.
    Gray,
    /// Single channel Bayer mosaic.
    Bayer(BayerPattern),
    /// Three interleaved channels, R, G, B.
    Rgb,
}
