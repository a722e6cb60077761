//! Image interop
use image::{DynamicImage, ImageBuffer, Luma, Rgb32FImage};

use crate::{BayerError, BayerResult, ColorSpace, ImageData};

/// Single channel `f32` buffer of the `image` crate.
pub type Gray32FImage = ImageBuffer<Luma<f32>, Vec<f32>>;

fn dims<T: crate::Sample>(img: &ImageData<'_, T>) -> BayerResult<(u32, u32)> {
    match (u32::try_from(img.width()), u32::try_from(img.height())) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(BayerError::WrongResolution {
            expected_width: u32::MAX as usize,
            expected_height: u32::MAX as usize,
            width: img.width(),
            height: img.height(),
        }),
    }
}

impl TryFrom<Rgb32FImage> for ImageData<'static, f32> {
    type Error = BayerError;

    fn try_from(data: Rgb32FImage) -> Result<Self, Self::Error> {
        let (w, h) = (data.width() as usize, data.height() as usize);
        ImageData::from_owned(data.into_raw(), w, h, ColorSpace::Rgb)
    }
}

impl TryFrom<Gray32FImage> for ImageData<'static, f32> {
    type Error = BayerError;

    fn try_from(data: Gray32FImage) -> Result<Self, Self::Error> {
        let (w, h) = (data.width() as usize, data.height() as usize);
        ImageData::from_owned(data.into_raw(), w, h, ColorSpace::Gray)
    }
}

impl TryFrom<DynamicImage> for ImageData<'static, f32> {
    type Error = BayerError;

    /// Luminance images become [`ColorSpace::Gray`], colour images
    /// [`ColorSpace::Rgb`]. Integer samples are scaled to `[0, 1]`.
    fn try_from(data: DynamicImage) -> Result<Self, Self::Error> {
        match data {
            DynamicImage::ImageRgb32F(data) => data.try_into(),
            DynamicImage::ImageLuma8(_) | DynamicImage::ImageLuma16(_) => {
                data.to_luma32f().try_into()
            }
            DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgb16(_) => {
                data.to_rgb32f().try_into()
            }
            _ => Err(BayerError::WrongDepth {
                expected: 3,
                got: data.color().channel_count() as usize,
            }),
        }
    }
}

impl TryFrom<ImageData<'_, f32>> for Rgb32FImage {
    type Error = BayerError;

    fn try_from(value: ImageData<'_, f32>) -> Result<Self, Self::Error> {
        if value.color_space() != ColorSpace::Rgb {
            return Err(BayerError::WrongDepth {
                expected: 3,
                got: value.channels(),
            });
        }
        let (w, h) = dims(&value)?;
        let expected = value.width() * value.height() * 3;
        let got = value.as_slice().len();
        ImageBuffer::from_vec(w, h, value.into_vec())
            .ok_or(BayerError::DataLength { expected, got })
    }
}

impl TryFrom<ImageData<'_, f32>> for Gray32FImage {
    type Error = BayerError;

    fn try_from(value: ImageData<'_, f32>) -> Result<Self, Self::Error> {
        if value.channels() != 1 {
            return Err(BayerError::WrongDepth {
                expected: 1,
                got: value.channels(),
            });
        }
        let (w, h) = dims(&value)?;
        let expected = value.width() * value.height();
        let got = value.as_slice().len();
        ImageBuffer::from_vec(w, h, value.into_vec())
            .ok_or(BayerError::DataLength { expected, got })
    }
}

impl TryFrom<ImageData<'_, f32>> for DynamicImage {
    type Error = BayerError;

    fn try_from(value: ImageData<'_, f32>) -> Result<Self, Self::Error> {
        Ok(DynamicImage::ImageRgb32F(value.try_into()?))
    }
}
