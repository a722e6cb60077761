//! Two-dimensional convolution of a [`Plane`] with a small kernel.
//!
//! This is a true convolution, the kernel is flipped:
//!
//! ```text
//!   out[y, x] = sum_{m, n} k[m, n] * in[y + cy - m, x + cx - n]
//! ```
//!
//! where `(cy, cx)` is the kernel centre. Samples outside the plane are taken
//! from the [`Border`] extension. Zero taps are skipped.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::demosaic::border::Border;
use crate::demosaic::Plane;
use crate::Sample;

/// A dense convolution kernel with odd dimensions.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Kernel {
    width: usize,
    height: usize,
    coeffs: Vec<f64>,
}

impl Kernel {
    /// Kernel from row-major rows, each coefficient multiplied by `scale`.
    pub fn new<const W: usize>(rows: &[[f64; W]], scale: f64) -> Self {
        debug_assert!(W % 2 == 1 && rows.len() % 2 == 1);
        Kernel {
            width: W,
            height: rows.len(),
            coeffs: rows.iter().flatten().map(|&c| c * scale).collect(),
        }
    }

    /// 1 x n kernel.
    pub fn horizontal(taps: &[f64]) -> Self {
        Kernel {
            width: taps.len(),
            height: 1,
            coeffs: taps.to_vec(),
        }
    }

    /// n x 1 kernel.
    pub fn vertical(taps: &[f64]) -> Self {
        Kernel {
            width: 1,
            height: taps.len(),
            coeffs: taps.to_vec(),
        }
    }

    pub fn transpose(&self) -> Self {
        let mut coeffs = Vec::with_capacity(self.coeffs.len());
        for n in 0..self.width {
            for m in 0..self.height {
                coeffs.push(self.coeffs[m * self.width + n]);
            }
        }
        Kernel {
            width: self.height,
            height: self.width,
            coeffs,
        }
    }

    /// Non-zero taps as `(dy, dx, weight)`, offsets relative to the output pixel.
    fn taps<T: Sample>(&self) -> Vec<(usize, usize, T)> {
        let (cy, cx) = (self.height / 2, self.width / 2);
        let mut taps = Vec::new();
        for m in 0..self.height {
            for n in 0..self.width {
                let c = self.coeffs[m * self.width + n];
                if c != 0.0 {
                    // offsets into the padded plane, which starts at (-cy, -cx)
                    taps.push((2 * cy - m, 2 * cx - n, T::from_f64(c)));
                }
            }
        }
        taps
    }
}

/// Convolve `src` with `kernel`, extending the plane past its edges with `border`.
pub(crate) fn convolve<T: Sample>(src: &Plane<T>, kernel: &Kernel, border: Border) -> Plane<T> {
    let (w, h) = (src.width(), src.height());
    let (py, px) = (kernel.height / 2, kernel.width / 2);
    let stride = w + 2 * px;
    let padded = pad(src, px, py, border);
    let taps = kernel.taps::<T>();

    let conv_row = |y: usize, row: &mut [T]| {
        for (x, out) in row.iter_mut().enumerate() {
            let mut acc = T::zero();
            for &(dy, dx, k) in taps.iter() {
                acc += k * padded[(y + dy) * stride + x + dx];
            }
            *out = acc;
        }
    };

    let mut data = vec![T::zero(); w * h];
    if w > 0 {
        #[cfg(feature = "rayon")]
        data.par_chunks_mut(w)
            .enumerate()
            .for_each(|(y, row)| conv_row(y, row));
        #[cfg(not(feature = "rayon"))]
        data.chunks_mut(w)
            .enumerate()
            .for_each(|(y, row)| conv_row(y, row));
    }
    Plane::from_raw(data, w, h)
}

/// Horizontal 1-D convolution with whole-sample mirror extension.
pub(crate) fn convolve_h<T: Sample>(src: &Plane<T>, taps: &[f64]) -> Plane<T> {
    convolve(src, &Kernel::horizontal(taps), Border::Mirror)
}

/// Vertical 1-D convolution with whole-sample mirror extension.
pub(crate) fn convolve_v<T: Sample>(src: &Plane<T>, taps: &[f64]) -> Plane<T> {
    convolve(src, &Kernel::vertical(taps), Border::Mirror)
}

fn pad<T: Sample>(src: &Plane<T>, px: usize, py: usize, border: Border) -> Vec<T> {
    let (w, h) = (src.width(), src.height());
    let stride = w + 2 * px;
    let mut padded = vec![T::zero(); stride * (h + 2 * py)];
    if w == 0 {
        return padded;
    }
    for (r, dst) in padded.chunks_mut(stride).enumerate() {
        if let Some(y) = border.index(r as isize - py as isize, h) {
            border.read_row(&src.as_slice()[y * w..(y + 1) * w], px, dst);
        }
    }
    padded
}
