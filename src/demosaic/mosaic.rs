//! RGB to CFA sampling.

use crate::demosaic::{bayer_masks, Channel};
use crate::{BayerError, BayerPattern, BayerResult, ColorSpace, ImageData, Plane, Sample};

/// Sample an RGB image onto a Bayer grid: each pixel keeps the one channel
/// the pattern places there.
///
/// ```text
///   CFA = R * R_mask + G * G_mask + B * B_mask
/// ```
///
/// The output is tagged [`ColorSpace::Bayer`] with `pattern`.
///
/// # Errors
/// - [`BayerError::WrongDepth`] if `rgb` does not have three channels.
pub fn mosaic<T: Sample>(
    rgb: &ImageData<'_, T>,
    pattern: BayerPattern,
) -> BayerResult<ImageData<'static, T>> {
    if rgb.channels() != 3 {
        return Err(BayerError::WrongDepth {
            expected: 3,
            got: rgb.channels(),
        });
    }
    let (w, h) = (rgb.width(), rgb.height());
    let masks = bayer_masks(w, h, pattern);
    let mut cfa = Plane::zeros(w, h);
    for channel in [Channel::Red, Channel::Green, Channel::Blue] {
        cfa = cfa + &rgb.channel(channel)?.masked(masks.get(channel));
    }
    ImageData::from_plane(cfa, ColorSpace::Bayer(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mosaic_picks_channel_per_site() {
        // pixel (x, y) = (100 y + 10 x + 0, .. + 1, .. + 2)
        let mut data = Vec::new();
        for y in 0..3 {
            for x in 0..4 {
                for c in 0..3 {
                    data.push((100 * y + 10 * x + c) as f32);
                }
            }
        }
        let rgb = ImageData::from_owned(data, 4, 3, ColorSpace::Rgb).unwrap();
        for pattern in BayerPattern::ALL {
            let cfa = mosaic(&rgb, pattern).unwrap();
            assert_eq!(cfa.color_space(), ColorSpace::Bayer(pattern));
            for y in 0..3 {
                for x in 0..4 {
                    let c = pattern.channel_at(y, x) as usize;
                    assert_eq!(cfa.get(x, y, 0), rgb.get(x, y, c));
                }
            }
        }
    }

    #[test]
    fn test_mosaic_rejects_gray() {
        let gray = ImageData::from_owned(vec![0.0f64; 4], 2, 2, ColorSpace::Gray).unwrap();
        assert_eq!(
            mosaic(&gray, BayerPattern::Rggb),
            Err(BayerError::WrongDepth {
                expected: 3,
                got: 1
            })
        );
    }
}
