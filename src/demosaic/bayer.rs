//! Bayer pattern geometry and channel masks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::demosaic::{Mask, Plane};
use crate::BayerPattern;

/// Colour channel of a CFA site.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Red channel.
    Red = 0,
    /// Green channel.
    Green = 1,
    /// Blue channel.
    Blue = 2,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => f.write_str("R"),
            Self::Green => f.write_str("G"),
            Self::Blue => f.write_str("B"),
        }
    }
}

use Channel::*;

impl BayerPattern {
    /// Channels of the tile in (0,0), (0,1), (1,0), (1,1) order.
    pub fn tile(self) -> [Channel; 4] {
        match self {
            BayerPattern::Rggb => [Red, Green, Green, Blue],
            BayerPattern::Bggr => [Blue, Green, Green, Red],
            BayerPattern::Grbg => [Green, Red, Blue, Green],
            BayerPattern::Gbrg => [Green, Blue, Red, Green],
        }
    }

    /// Colour channel at the given row and column (wraps modulo 2).
    #[inline]
    pub fn channel_at(self, row: usize, col: usize) -> Channel {
        self.tile()[(row % 2) * 2 + (col % 2)]
    }

    /// The pattern seen by a transposed grid.
    pub fn transpose(self) -> Self {
        match self {
            BayerPattern::Rggb => BayerPattern::Rggb,
            BayerPattern::Bggr => BayerPattern::Bggr,
            BayerPattern::Grbg => BayerPattern::Gbrg,
            BayerPattern::Gbrg => BayerPattern::Grbg,
        }
    }
}

/// Red, green and blue occupancy masks of a Bayer CFA. Together they partition
/// the grid: every position is `true` in exactly one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BayerMasks {
    /// Red sample positions.
    pub red: Mask,
    /// Green sample positions.
    pub green: Mask,
    /// Blue sample positions.
    pub blue: Mask,
}

impl BayerMasks {
    /// Mask of the given channel.
    pub fn get(&self, channel: Channel) -> &Mask {
        match channel {
            Red => &self.red,
            Green => &self.green,
            Blue => &self.blue,
        }
    }

    /// Width of the masks.
    pub fn width(&self) -> usize {
        self.red.width()
    }

    /// Height of the masks.
    pub fn height(&self) -> usize {
        self.red.height()
    }
}

/// Build the red, green and blue masks of a `width` x `height` CFA laid out with
/// `pattern`.
///
/// For a channel at tile offset `(y0, x0)` the mask is `true` at every
/// `(y0 + 2i, x0 + 2j)`.
///
/// # Usage
/// ```
/// use cfademosaic::{bayer_masks, BayerPattern};
///
/// let masks = bayer_masks(3, 3, BayerPattern::Rggb);
/// assert_eq!(
///     masks.blue.as_slice(),
///     &[false, false, false, false, true, false, false, false, false]
/// );
/// ```
pub fn bayer_masks(width: usize, height: usize, pattern: BayerPattern) -> BayerMasks {
    let mut red = Plane::filled(width, height, false);
    let mut green = Plane::filled(width, height, false);
    let mut blue = Plane::filled(width, height, false);
    for (&channel, (y0, x0)) in pattern.tile().iter().zip([(0, 0), (0, 1), (1, 0), (1, 1)]) {
        let mask = match channel {
            Red => &mut red,
            Green => &mut green,
            Blue => &mut blue,
        };
        for y in (y0..height).step_by(2) {
            for x in (x0..width).step_by(2) {
                mask.set(x, y, true);
            }
        }
    }
    BayerMasks { red, green, blue }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bayer_rggb_pattern() {
        let cfa = BayerPattern::Rggb;
        assert_eq!(cfa.channel_at(0, 0), Red);
        assert_eq!(cfa.channel_at(0, 1), Green);
        assert_eq!(cfa.channel_at(1, 0), Green);
        assert_eq!(cfa.channel_at(1, 1), Blue);
        // tiling
        assert_eq!(cfa.channel_at(2, 2), Red);
        assert_eq!(cfa.channel_at(3, 3), Blue);
    }

    #[test]
    fn test_transpose_agrees_with_tiling() {
        for p in BayerPattern::ALL {
            for y in 0..4 {
                for x in 0..4 {
                    assert_eq!(p.transpose().channel_at(y, x), p.channel_at(x, y));
                }
            }
        }
    }

    #[test]
    fn test_masks_rggb_3x3() {
        let m = bayer_masks(3, 3, BayerPattern::Rggb);
        #[rustfmt::skip]
        let r = [true, false, true,
                 false, false, false,
                 true, false, true];
        #[rustfmt::skip]
        let g = [false, true, false,
                 true, false, true,
                 false, true, false];
        assert_eq!(m.red.as_slice(), &r);
        assert_eq!(m.green.as_slice(), &g);
        assert_eq!(m.blue.get(1, 1), Some(true));
        assert_eq!(m.blue.iter().filter(|&&b| b).count(), 1);
    }

    #[test]
    fn test_masks_bggr_3x3() {
        let m = bayer_masks(3, 3, BayerPattern::Bggr);
        let rggb = bayer_masks(3, 3, BayerPattern::Rggb);
        assert_eq!(m.blue, rggb.red);
        assert_eq!(m.red, rggb.blue);
        assert_eq!(m.green, rggb.green);
    }

    #[test]
    fn test_masks_partition() {
        for p in BayerPattern::ALL {
            for (w, h) in [(1, 1), (1, 5), (2, 2), (3, 7), (8, 8), (9, 4)] {
                let m = bayer_masks(w, h, p);
                assert_eq!((m.width(), m.height()), (w, h));
                for y in 0..h {
                    for x in 0..w {
                        let count = [Red, Green, Blue]
                            .iter()
                            .filter(|&&c| m.get(c).get(x, y) == Some(true))
                            .count();
                        assert_eq!(count, 1, "{p} {w}x{h} at ({x},{y})");
                        let expected = p.channel_at(y, x);
                        assert_eq!(m.get(expected).get(x, y), Some(true));
                    }
                }
            }
        }
    }
}
