//! Single-channel row-major 2-D arrays and the element-wise operations the
//! demosaicers are written in.

use std::ops::{Add, BitAnd, BitOr, Not, Sub};

use itertools::izip;

use crate::demosaic::border::Border;
use crate::{BayerError, BayerResult, Sample};

/// A single channel, row-major 2-D array.
///
/// The element-wise operators (`+`, `-`, `&`, `|`) require both operands to
/// have the same shape and panic otherwise; use [`Plane::same_shape`] to check
/// first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

/// A boolean plane: channel occupancy masks and the Menon decision map.
pub type Mask = Plane<bool>;

impl<T: Copy> Plane<T> {
    /// Create a `width` x `height` plane with every element set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Plane {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Wrap row-major `data` as a `width` x `height` plane.
    ///
    /// # Errors
    /// - [`BayerError::DataLength`] if `data.len() != width * height`.
    pub fn from_vec(data: Vec<T>, width: usize, height: usize) -> BayerResult<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or(BayerError::DataLength {
                expected: usize::MAX,
                got: data.len(),
            })?;
        if data.len() != expected {
            return Err(BayerError::DataLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Plane {
            width,
            height,
            data,
        })
    }

    pub(crate) fn from_raw(data: Vec<T>, width: usize, height: usize) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Plane {
            width,
            height,
            data,
        }
    }

    /// Width of the plane.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the plane.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the underlying data as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the underlying data as a vector.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get an iterator over the data, row by row.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Element at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    }

    /// Set the element at column `x`, row `y`. Out of range positions are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        if x < self.width && y < self.height {
            self.data[y * self.width + x] = value;
        }
    }

    /// The transposed plane.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for x in 0..self.width {
            for y in 0..self.height {
                data.push(self.data[y * self.width + x]);
            }
        }
        Plane {
            width: self.height,
            height: self.width,
            data,
        }
    }

    /// The plane rotated by 90 degrees counter-clockwise.
    pub fn rot90(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for x in (0..self.width).rev() {
            for y in 0..self.height {
                data.push(self.data[y * self.width + x]);
            }
        }
        Plane {
            width: self.height,
            height: self.width,
            data,
        }
    }

    /// Whether `other` has the same dimensions.
    pub fn same_shape<U>(&self, other: &Plane<U>) -> bool {
        self.width == other.width && self.height == other.height
    }

    pub(crate) fn check_shape<U>(&self, other: &Plane<U>) -> BayerResult<()> {
        if self.same_shape(other) {
            Ok(())
        } else {
            Err(BayerError::WrongResolution {
                expected_width: self.width,
                expected_height: self.height,
                width: other.width,
                height: other.height,
            })
        }
    }

    pub(crate) fn map<U, F: Fn(T) -> U>(&self, f: F) -> Plane<U> {
        Plane {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    pub(crate) fn zip_with<U: Copy, V, F: Fn(T, U) -> V>(&self, other: &Plane<U>, f: F) -> Plane<V> {
        assert!(self.same_shape(other), "plane shape mismatch");
        Plane {
            width: self.width,
            height: self.height,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    /// `where(cond, if_true, if_false)`.
    pub(crate) fn select(cond: &Mask, if_true: &Self, if_false: &Self) -> Self {
        assert!(cond.same_shape(if_true) && cond.same_shape(if_false), "plane shape mismatch");
        Plane {
            width: cond.width,
            height: cond.height,
            data: izip!(cond.iter(), if_true.iter(), if_false.iter())
                .map(|(&c, &t, &f)| if c { t } else { f })
                .collect(),
        }
    }

    /// Overwrite the elements selected by `cond` with the ones of `src`.
    pub(crate) fn assign_where(&mut self, cond: &Mask, src: &Self) {
        assert!(self.same_shape(cond) && self.same_shape(src), "plane shape mismatch");
        for (d, &c, &s) in izip!(self.data.iter_mut(), cond.iter(), src.iter()) {
            if c {
                *d = s;
            }
        }
    }

    /// Plane sampled at `(x + dx, y + dy)`, extended past the edges by `border`.
    pub(crate) fn shifted(&self, dx: isize, dy: isize, border: Border) -> Self
    where
        T: Default,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for y in 0..self.height {
            let yy = border.index(y as isize + dy, self.height);
            for x in 0..self.width {
                let xx = border.index(x as isize + dx, self.width);
                data.push(match (yy, xx) {
                    (Some(yy), Some(xx)) => self.data[yy * self.width + xx],
                    _ => T::default(),
                });
            }
        }
        Plane {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

impl<T: Sample> Plane<T> {
    /// Zero-filled plane.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::filled(width, height, T::zero())
    }

    /// Keep the elements selected by `mask`, zero elsewhere.
    pub(crate) fn masked(&self, mask: &Mask) -> Self {
        self.zip_with(mask, |v, m| if m { v } else { T::zero() })
    }

    pub(crate) fn abs(&self) -> Self {
        self.map(|v| v.abs())
    }
}

impl Mask {
    /// `true` across every row that holds at least one `true`.
    pub fn rows_any(&self) -> Mask {
        let mut data = Vec::with_capacity(self.data.len());
        for row in self.data.chunks(self.width.max(1)).take(self.height) {
            let any = row.iter().any(|&b| b);
            data.extend(std::iter::repeat(any).take(self.width));
        }
        Plane {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// `true` down every column that holds at least one `true`.
    pub fn cols_any(&self) -> Mask {
        let cols: Vec<bool> = (0..self.width)
            .map(|x| (0..self.height).any(|y| self.data[y * self.width + x]))
            .collect();
        let mut data = Vec::with_capacity(self.data.len());
        for _ in 0..self.height {
            data.extend_from_slice(&cols);
        }
        Plane {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

impl<T: Sample> Add<&Plane<T>> for &Plane<T> {
    type Output = Plane<T>;

    /// # Panics
    /// If the planes differ in shape.
    fn add(self, rhs: &Plane<T>) -> Plane<T> {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Sample> Add<&Plane<T>> for Plane<T> {
    type Output = Plane<T>;

    /// # Panics
    /// If the planes differ in shape.
    fn add(mut self, rhs: &Plane<T>) -> Plane<T> {
        assert!(self.same_shape(rhs), "plane shape mismatch");
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a += b;
        }
        self
    }
}

impl<T: Sample> Sub<&Plane<T>> for &Plane<T> {
    type Output = Plane<T>;

    /// # Panics
    /// If the planes differ in shape.
    fn sub(self, rhs: &Plane<T>) -> Plane<T> {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Sample> Sub<&Plane<T>> for Plane<T> {
    type Output = Plane<T>;

    /// # Panics
    /// If the planes differ in shape.
    fn sub(mut self, rhs: &Plane<T>) -> Plane<T> {
        assert!(self.same_shape(rhs), "plane shape mismatch");
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a -= b;
        }
        self
    }
}

impl BitAnd for &Mask {
    type Output = Mask;

    /// # Panics
    /// If the planes differ in shape.
    fn bitand(self, rhs: Self) -> Mask {
        self.zip_with(rhs, |a, b| a && b)
    }
}

impl BitOr for &Mask {
    type Output = Mask;

    /// # Panics
    /// If the planes differ in shape.
    fn bitor(self, rhs: Self) -> Mask {
        self.zip_with(rhs, |a, b| a || b)
    }
}

impl Not for &Mask {
    type Output = Mask;

    fn not(self) -> Mask {
        self.map(|a| !a)
    }
}
