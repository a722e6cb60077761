//! Demosaicing with directional filtering and a-posteriori decision
//! (DDFAPD) of Menon, Andriani and Calvagno (2007).
//!
//! Green is first estimated twice, once by horizontal and once by vertical
//! filtering. The colour differences of each estimate are compared over a
//! small neighbourhood and the direction with the smaller variation wins,
//! pixel by pixel. Red and blue are then rebuilt from colour differences to
//! the chosen green, optionally followed by a refinement pass.
//!
//! All one-dimensional filters are applied with whole-sample mirror
//! extension at the border.

use log::trace;

use crate::demosaic::border::Border;
use crate::demosaic::convolve::{convolve, convolve_h, convolve_v, Kernel};
use crate::demosaic::{bayer_masks, cfa_plane, BayerMasks, Mask, Plane};
use crate::{BayerPattern, BayerResult, Channel, ImageData, Sample};

const H_0: [f64; 5] = [0.0, 0.5, 0.0, 0.5, 0.0];
const H_1: [f64; 5] = [-0.25, 0.0, 0.5, 0.0, -0.25];
const K_B: [f64; 3] = [0.5, 0.0, 0.5];
const FIR: [f64; 3] = [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0];

/// Neighbourhood weighting of the colour difference gradients.
const K_DIR: [[f64; 5]; 5] = [
    [0., 0., 1., 0., 1.],
    [0., 0., 0., 1., 0.],
    [0., 0., 3., 0., 3.],
    [0., 0., 0., 1., 0.],
    [0., 0., 1., 0., 1.],
];

/// Menon (2007) demosaicing of a single channel CFA laid out with `pattern`.
///
/// When `refine` is set, [`refine_menon2007`] is applied once to the result.
/// Known samples are carried through unchanged, unless refinement adjusts
/// them. Values are not clipped.
///
/// # Errors
/// - [`crate::BayerError::WrongDepth`] if `cfa` has more than one channel.
/// - [`crate::BayerError::PatternMismatch`] if `cfa` is tagged with another pattern.
pub fn demosaic_menon2007<T: Sample>(
    cfa: &ImageData<'_, T>,
    pattern: BayerPattern,
    refine: bool,
) -> BayerResult<ImageData<'static, T>> {
    let raw = cfa_plane(cfa, pattern)?;
    let masks = bayer_masks(raw.width(), raw.height(), pattern);

    let (r, g, b, decision) = interpolate(&raw, &masks);
    let (r, g, b) = if refine {
        refine_planes(r, g, b, &masks, &decision)
    } else {
        (r, g, b)
    };
    ImageData::from_planes(&r, &g, &b)
}

/// Alias of [`demosaic_menon2007`], after the name of the method in the
/// paper: Demosaicing with Directional Filtering and A-posteriori Decision.
pub fn demosaic_ddfapd<T: Sample>(
    cfa: &ImageData<'_, T>,
    pattern: BayerPattern,
    refine: bool,
) -> BayerResult<ImageData<'static, T>> {
    demosaic_menon2007(cfa, pattern, refine)
}

/// Refinement step of Menon (2007), applied to an already demosaiced RGB
/// image.
///
/// `masks` give the CFA sample positions and `decision` the direction map
/// (`true` for horizontal) used when the image was demosaiced.
///
/// # Errors
/// - [`crate::BayerError::WrongDepth`] if `rgb` does not have three channels.
/// - [`crate::BayerError::WrongResolution`] if the masks or the decision map do not
///   match the image size.
pub fn refine_menon2007<T: Sample>(
    rgb: &ImageData<'_, T>,
    masks: &BayerMasks,
    decision: &Mask,
) -> BayerResult<ImageData<'static, T>> {
    let r = rgb.channel(Channel::Red)?;
    let g = rgb.channel(Channel::Green)?;
    let b = rgb.channel(Channel::Blue)?;
    for mask in [&masks.red, &masks.green, &masks.blue, decision] {
        r.check_shape(mask)?;
    }
    let (r, g, b) = refine_planes(r, g, b, masks, decision);
    ImageData::from_planes(&r, &g, &b)
}

type Planes<T> = (Plane<T>, Plane<T>, Plane<T>);

/// `base + conv(a) - conv(b)` with a 1-D filter in the given direction.
fn diff_correction<T: Sample>(
    base: &Plane<T>,
    a: &Plane<T>,
    b: &Plane<T>,
    horizontal: bool,
) -> Plane<T> {
    if horizontal {
        base + &convolve_h(a, &K_B) - &convolve_h(b, &K_B)
    } else {
        base + &convolve_v(a, &K_B) - &convolve_v(b, &K_B)
    }
}

/// Smoothing of `src` with the 3-tap box filter, horizontal where `decision`
/// holds and vertical elsewhere.
fn directional_smooth<T: Sample>(src: &Plane<T>, decision: &Mask) -> Plane<T> {
    Plane::select(decision, &convolve_h(src, &FIR), &convolve_v(src, &FIR))
}

/// Stages up to the full RGB estimate. Also returns the decision map,
/// `true` where the horizontal hypothesis was kept.
fn interpolate<T: Sample>(
    raw: &Plane<T>,
    masks: &BayerMasks,
) -> (Plane<T>, Plane<T>, Plane<T>, Mask) {
    let (w, h) = (raw.width(), raw.height());
    let mut r = raw.masked(&masks.red);
    let g = raw.masked(&masks.green);
    let mut b = raw.masked(&masks.blue);

    trace!("menon2007: green hypotheses for {w}x{h}");
    let not_green = !&masks.green;
    let g_h = Plane::select(
        &not_green,
        &(convolve_h(raw, &H_0) + &convolve_h(raw, &H_1)),
        &g,
    );
    let g_v = Plane::select(
        &not_green,
        &(convolve_v(raw, &H_0) + &convolve_v(raw, &H_1)),
        &g,
    );

    trace!("menon2007: directional energy");
    let zeros = Plane::zeros(w, h);
    let mut c_h = Plane::select(&masks.red, &(&r - &g_h), &zeros);
    c_h.assign_where(&masks.blue, &(&b - &g_h));
    let mut c_v = Plane::select(&masks.red, &(&r - &g_v), &zeros);
    c_v.assign_where(&masks.blue, &(&b - &g_v));

    let d_h = (&c_h - &c_h.shifted(2, 0, Border::Mirror)).abs();
    let d_v = (&c_v - &c_v.shifted(0, 2, Border::Mirror)).abs();

    let k = Kernel::new(&K_DIR, 1.0);
    let d_h = convolve(&d_h, &k, Border::Constant);
    let d_v = convolve(&d_v, &k.transpose(), Border::Constant);

    trace!("menon2007: decision map");
    let decision = d_v.zip_with(&d_h, |v, h| v >= h);
    let g = Plane::select(&decision, &g_h, &g_v);

    trace!("menon2007: red and blue at green sites");
    let red_rows = masks.red.rows_any();
    let blue_rows = masks.blue.rows_any();
    let green_red_rows = &masks.green & &red_rows;
    let green_blue_rows = &masks.green & &blue_rows;

    r.assign_where(&green_red_rows, &diff_correction(&g, &r, &g, true));
    r.assign_where(&green_blue_rows, &diff_correction(&g, &r, &g, false));
    b.assign_where(&green_blue_rows, &diff_correction(&g, &b, &g, true));
    b.assign_where(&green_red_rows, &diff_correction(&g, &b, &g, false));

    trace!("menon2007: red at blue sites, blue at red sites");
    let r_at_b = Plane::select(
        &decision,
        &diff_correction(&b, &r, &b, true),
        &diff_correction(&b, &r, &b, false),
    );
    r.assign_where(&(&blue_rows & &masks.blue), &r_at_b);
    let b_at_r = Plane::select(
        &decision,
        &diff_correction(&r, &b, &r, true),
        &diff_correction(&r, &b, &r, false),
    );
    b.assign_where(&(&red_rows & &masks.red), &b_at_r);

    (r, g, b, decision)
}

fn refine_planes<T: Sample>(
    r: Plane<T>,
    g: Plane<T>,
    b: Plane<T>,
    masks: &BayerMasks,
    decision: &Mask,
) -> Planes<T> {
    let (mut r, mut g, mut b) = (r, g, b);
    let zeros = Plane::zeros(r.width(), r.height());

    trace!("menon2007: refining green");
    let r_g = &r - &g;
    let b_g = &b - &g;
    let mut r_g_m = Plane::select(&masks.red, &directional_smooth(&r_g, decision), &zeros);
    let mut b_g_m = Plane::select(&masks.blue, &directional_smooth(&b_g, decision), &zeros);
    g.assign_where(&masks.red, &(&r - &r_g_m));
    g.assign_where(&masks.blue, &(&b - &b_g_m));

    trace!("menon2007: refining red and blue at green sites");
    let red_rows = masks.red.rows_any();
    let red_cols = masks.red.cols_any();
    let blue_rows = masks.blue.rows_any();
    let blue_cols = masks.blue.cols_any();

    let r_g = &r - &g;
    let b_g = &b - &g;

    let sites = &masks.green & &blue_rows;
    r_g_m.assign_where(&sites, &convolve_v(&r_g, &K_B));
    r.assign_where(&sites, &(&g + &r_g_m));
    let sites = &masks.green & &blue_cols;
    r_g_m.assign_where(&sites, &convolve_h(&r_g, &K_B));
    r.assign_where(&sites, &(&g + &r_g_m));

    let sites = &masks.green & &red_rows;
    b_g_m.assign_where(&sites, &convolve_v(&b_g, &K_B));
    b.assign_where(&sites, &(&g + &b_g_m));
    let sites = &masks.green & &red_cols;
    b_g_m.assign_where(&sites, &convolve_h(&b_g, &K_B));
    b.assign_where(&sites, &(&g + &b_g_m));

    trace!("menon2007: refining red at blue sites, blue at red sites");
    let r_b = &r - &b;
    let r_b_m = Plane::select(&masks.blue, &directional_smooth(&r_b, decision), &zeros);
    r.assign_where(&masks.blue, &(&b + &r_b_m));
    let r_b_m = Plane::select(&masks.red, &directional_smooth(&r_b, decision), &zeros);
    b.assign_where(&masks.red, &(&r - &r_b_m));

    (r, g, b)
}
