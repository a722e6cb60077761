//! Demosaicing using bilinear interpolation.
//!
//! ```text
//!   green_kernel = (1 / 4) *
//!       [ 0 1 0
//!       ; 1 4 1
//!       ; 0 1 0 ];
//!
//!   red/blue_kernel = (1 / 4) *
//!       [ 1 2 1
//!       ; 2 4 2
//!       ; 1 2 1 ];
//! ```
//!
//! Each kernel is applied to the CFA with the other channels zeroed out, the
//! image is extended by half-sample reflection.

use crate::demosaic::border::Border;
use crate::demosaic::convolve::{convolve, Kernel};
use crate::demosaic::{bayer_masks, cfa_plane};
use crate::{BayerPattern, BayerResult, ImageData, Sample};

const H_G: [[f64; 3]; 3] = [[0., 1., 0.], [1., 4., 1.], [0., 1., 0.]];
const H_RB: [[f64; 3]; 3] = [[1., 2., 1.], [2., 4., 2.], [1., 2., 1.]];

/// Bilinear demosaicing of a single channel CFA laid out with `pattern`.
///
/// Known-sample positions are reproduced exactly away from the image border.
/// Values are not clipped.
///
/// # Errors
/// - [`crate::BayerError::WrongDepth`] if `cfa` has more than one channel.
/// - [`crate::BayerError::PatternMismatch`] if `cfa` is tagged with another pattern.
pub fn demosaic_bilinear<T: Sample>(
    cfa: &ImageData<'_, T>,
    pattern: BayerPattern,
) -> BayerResult<ImageData<'static, T>> {
    let raw = cfa_plane(cfa, pattern)?;
    let masks = bayer_masks(raw.width(), raw.height(), pattern);

    let h_g = Kernel::new(&H_G, 0.25);
    let h_rb = Kernel::new(&H_RB, 0.25);

    let r = convolve(&raw.masked(&masks.red), &h_rb, Border::Reflect);
    let g = convolve(&raw.masked(&masks.green), &h_g, Border::Reflect);
    let b = convolve(&raw.masked(&masks.blue), &h_rb, Border::Reflect);

    ImageData::from_planes(&r, &g, &b)
}
