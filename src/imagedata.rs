use bytemuck::PodCastError;
use itertools::izip;

use crate::{BayerError, BayerPattern, BayerResult, Channel, ColorSpace, DataStor, Plane, Sample};

/// A structure that holds image data backed by a slice or a vector.
///
/// This represents a _matrix_ of _pixels_ of `f32` or `f64` samples, stored in
/// _row-major_ order with the channels of a pixel interleaved. A CFA is a
/// single channel image ([`ColorSpace::Gray`] or [`ColorSpace::Bayer`]); a
/// demosaiced image has three channels in R, G, B order ([`ColorSpace::Rgb`]).
///
/// # Usage
/// ```
/// use cfademosaic::{ImageData, ColorSpace};
///
/// let data = vec![1.0f32, 2., 3., 4., 5., 6.];
/// let img = ImageData::from_owned(data, 3, 2, ColorSpace::Gray).unwrap();
/// assert_eq!(img.get(2, 1, 0), Some(6.));
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct ImageData<'a, T: Sample> {
    pub(crate) data: DataStor<'a, T>,
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) channels: usize,
    pub(crate) cspace: ColorSpace,
}

impl<'a, T: Sample> ImageData<'a, T> {
    pub(crate) fn new(
        data: DataStor<'a, T>,
        width: usize,
        height: usize,
        cspace: ColorSpace,
    ) -> BayerResult<Self> {
        if width == 0 || height == 0 {
            return Err(BayerError::WrongResolution {
                expected_width: width.max(1),
                expected_height: height.max(1),
                width,
                height,
            });
        }
        let exp_channels = cspace.channels();
        let len = data.len();
        let tot = width.checked_mul(height).ok_or(BayerError::DataLength {
            expected: usize::MAX,
            got: len,
        })?;
        if len % tot != 0 {
            return Err(BayerError::DataLength {
                expected: tot.saturating_mul(exp_channels),
                got: len,
            });
        }
        let channels = len / tot;
        if channels != exp_channels {
            return Err(BayerError::WrongDepth {
                expected: exp_channels,
                got: channels,
            });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
            cspace,
        })
    }

    /// Create a new [`ImageData`] from a mutable slice of data.
    ///
    /// # Arguments
    /// - `data`: The data slice.
    /// - `width`: The width of the image.
    /// - `height`: The height of the image.
    /// - `cspace`: The color space of the image ([`ColorSpace`]).
    ///
    /// # Errors
    /// - [`BayerError::WrongResolution`] if the width or height is zero.
    /// - [`BayerError::DataLength`] if the data length is not a multiple of the image size.
    /// - [`BayerError::WrongDepth`] if the channel count does not fit the color space.
    pub fn from_mut_ref(
        data: &'a mut [T],
        width: usize,
        height: usize,
        cspace: ColorSpace,
    ) -> BayerResult<Self> {
        Self::new(DataStor::from_mut_ref(data), width, height, cspace)
    }

    /// Create a new [`ImageData`] struct from owned data.
    ///
    /// # Errors
    /// Same as [`ImageData::from_mut_ref`].
    pub fn from_owned(
        data: Vec<T>,
        width: usize,
        height: usize,
        cspace: ColorSpace,
    ) -> BayerResult<Self> {
        Self::new(DataStor::from_owned(data), width, height, cspace)
    }

    /// Create a new [`ImageData`] from a mutable slice of `u8` data.
    ///
    /// `data` is cast to the sample type `T` using [`bytemuck::try_cast_slice_mut`], so
    /// it must be aligned to `T` and hold native endian samples.
    ///
    /// # Errors
    /// - [`BayerError::Cast`] if the bytes can not be reinterpreted.
    /// - Same as [`ImageData::from_mut_ref`].
    pub fn from_u8_mut(
        data: &'a mut [u8],
        width: usize,
        height: usize,
        cspace: ColorSpace,
    ) -> BayerResult<Self> {
        let data = bytemuck::try_cast_slice_mut(data).map_err(|e: PodCastError| {
            BayerError::Cast(e.to_string())
        })?;
        Self::from_mut_ref(data, width, height, cspace)
    }

    /// Get the underlying data as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Get the underlying data as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    /// Get the underlying data as a vector.
    ///
    /// If the data is owned, this will return the owned data. If the data is a reference,
    /// this will return a copy of the data.
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    /// Get a u8 slice of the data.
    pub fn as_u8_slice(&self) -> &[u8] {
        self.data.as_u8_slice()
    }

    /// Get the width of the image.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of the image.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the number of channels in the image.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Get the color space of the image.
    pub fn color_space(&self) -> ColorSpace {
        self.cspace
    }

    /// Sample at column `x`, row `y`, channel `c`.
    pub fn get(&self, x: usize, y: usize, c: usize) -> Option<T> {
        if x < self.width && y < self.height && c < self.channels {
            Some(self.as_slice()[(y * self.width + x) * self.channels + c])
        } else {
            None
        }
    }

    /// Extract one channel of an RGB image as a [`Plane`].
    ///
    /// # Errors
    /// - [`BayerError::WrongDepth`] if the image does not have three channels.
    pub fn channel(&self, channel: Channel) -> BayerResult<Plane<T>> {
        if self.channels != 3 {
            return Err(BayerError::WrongDepth {
                expected: 3,
                got: self.channels,
            });
        }
        let data = self
            .as_slice()
            .iter()
            .skip(channel as usize)
            .step_by(3)
            .copied()
            .collect();
        Plane::from_vec(data, self.width, self.height)
    }

    /// Single channel image as a [`Plane`].
    pub(crate) fn to_plane(&self) -> BayerResult<Plane<T>> {
        if self.channels != 1 {
            return Err(BayerError::WrongDepth {
                expected: 1,
                got: self.channels,
            });
        }
        Plane::from_vec(self.as_slice().to_vec(), self.width, self.height)
    }

    /// Sample the image onto a Bayer grid. See [`crate::mosaic`].
    pub fn mosaic(&self, pattern: BayerPattern) -> BayerResult<ImageData<'static, T>> {
        crate::mosaic(self, pattern)
    }
}

impl<T: Sample> ImageData<'static, T> {
    /// Stack three equally sized planes into an RGB image.
    ///
    /// # Errors
    /// - [`BayerError::WrongResolution`] if the planes differ in size.
    pub fn from_planes(red: &Plane<T>, green: &Plane<T>, blue: &Plane<T>) -> BayerResult<Self> {
        red.check_shape(green)?;
        red.check_shape(blue)?;
        let mut data = Vec::with_capacity(red.as_slice().len() * 3);
        for (&r, &g, &b) in izip!(red.iter(), green.iter(), blue.iter()) {
            data.extend_from_slice(&[r, g, b]);
        }
        Self::from_owned(data, red.width(), red.height(), ColorSpace::Rgb)
    }

    /// Wrap a single plane as an image in the given single channel colour space.
    pub(crate) fn from_plane(plane: Plane<T>, cspace: ColorSpace) -> BayerResult<Self> {
        let (w, h) = (plane.width(), plane.height());
        Self::from_owned(plane.into_vec(), w, h, cspace)
    }
}
