//! Demosaicing using the gradient-corrected linear interpolation of
//! Malvar, He and Cutler (2004).
//!
//! ```text
//!   GR_GB = (1 / 8) *
//!       [  0  0 -1  0  0
//!       ;  0  0  2  0  0
//!       ; -1  2  4  2 -1
//!       ;  0  0  2  0  0
//!       ;  0  0 -1  0  0 ];
//!
//!   Rg_RB_Bg_BR = (1 / 8) *
//!       [  0   0  0.5  0   0
//!       ;  0  -1  0   -1   0
//!       ; -1   4  5    4  -1
//!       ;  0  -1  0   -1   0
//!       ;  0   0  0.5  0   0 ];
//!
//!   Rg_BR_Bg_RB = transpose(Rg_RB_Bg_BR);
//!
//!   Rb_BB_Br_RR = (1 / 8) *
//!       [  0    0  -1.5  0    0
//!       ;  0    2   0    2    0
//!       ; -1.5  0   6    0   -1.5
//!       ;  0    2   0    2    0
//!       ;  0    0  -1.5  0    0 ];
//! ```
//!
//! Each kernel is applied to the whole CFA with half-sample reflection at the
//! border, and the result is written only where its colour/site combination
//! applies.

use crate::demosaic::border::Border;
use crate::demosaic::convolve::{convolve, Kernel};
use crate::demosaic::{bayer_masks, cfa_plane, Plane};
use crate::{BayerPattern, BayerResult, ImageData, Sample};

const GR_GB: [[f64; 5]; 5] = [
    [0., 0., -1., 0., 0.],
    [0., 0., 2., 0., 0.],
    [-1., 2., 4., 2., -1.],
    [0., 0., 2., 0., 0.],
    [0., 0., -1., 0., 0.],
];

const RG_RB_BG_BR: [[f64; 5]; 5] = [
    [0., 0., 0.5, 0., 0.],
    [0., -1., 0., -1., 0.],
    [-1., 4., 5., 4., -1.],
    [0., -1., 0., -1., 0.],
    [0., 0., 0.5, 0., 0.],
];

const RB_BB_BR_RR: [[f64; 5]; 5] = [
    [0., 0., -1.5, 0., 0.],
    [0., 2., 0., 2., 0.],
    [-1.5, 0., 6., 0., -1.5],
    [0., 2., 0., 2., 0.],
    [0., 0., -1.5, 0., 0.],
];

/// Malvar (2004) demosaicing of a single channel CFA laid out with `pattern`.
///
/// Known samples are carried through unchanged. Values are not clipped.
///
/// # Errors
/// - [`crate::BayerError::WrongDepth`] if `cfa` has more than one channel.
/// - [`crate::BayerError::PatternMismatch`] if `cfa` is tagged with another pattern.
pub fn demosaic_malvar2004<T: Sample>(
    cfa: &ImageData<'_, T>,
    pattern: BayerPattern,
) -> BayerResult<ImageData<'static, T>> {
    let raw = cfa_plane(cfa, pattern)?;
    let masks = bayer_masks(raw.width(), raw.height(), pattern);

    let mut r = raw.masked(&masks.red);
    let mut b = raw.masked(&masks.blue);
    let g = Plane::select(
        &(&masks.red | &masks.blue),
        &convolve(&raw, &Kernel::new(&GR_GB, 0.125), Border::Reflect),
        &raw.masked(&masks.green),
    );

    let rg_rb = Kernel::new(&RG_RB_BG_BR, 0.125);
    let rbg_rbbr = convolve(&raw, &rg_rb, Border::Reflect);
    let rbg_brrb = convolve(&raw, &rg_rb.transpose(), Border::Reflect);
    let rbgr_bbrr = convolve(&raw, &Kernel::new(&RB_BB_BR_RR, 0.125), Border::Reflect);

    let red_rows = masks.red.rows_any();
    let red_cols = masks.red.cols_any();
    let blue_rows = masks.blue.rows_any();
    let blue_cols = masks.blue.cols_any();

    // later writes win where the predicates overlap
    r.assign_where(&(&red_rows & &blue_cols), &rbg_rbbr);
    r.assign_where(&(&blue_rows & &red_cols), &rbg_brrb);

    b.assign_where(&(&blue_rows & &red_cols), &rbg_rbbr);
    b.assign_where(&(&red_rows & &blue_cols), &rbg_brrb);

    r.assign_where(&(&blue_rows & &blue_cols), &rbgr_bbrr);
    b.assign_where(&(&red_rows & &red_cols), &rbgr_bbrr);

    ImageData::from_planes(&r, &g, &b)
}
