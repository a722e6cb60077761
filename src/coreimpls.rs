use std::fmt;
use std::str::FromStr;

use crate::{BayerError, BayerPattern, ColorSpace};

impl BayerPattern {
    /// All four arrangements.
    pub const ALL: [BayerPattern; 4] = [
        BayerPattern::Rggb,
        BayerPattern::Bggr,
        BayerPattern::Grbg,
        BayerPattern::Gbrg,
    ];

    /// Canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            BayerPattern::Rggb => "RGGB",
            BayerPattern::Bggr => "BGGR",
            BayerPattern::Grbg => "GRBG",
            BayerPattern::Gbrg => "GBRG",
        }
    }
}

impl fmt::Display for BayerPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BayerPattern {
    type Err = BayerError;

    /// Parse a pattern name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RGGB" => Ok(BayerPattern::Rggb),
            "BGGR" => Ok(BayerPattern::Bggr),
            "GRBG" => Ok(BayerPattern::Grbg),
            "GBRG" => Ok(BayerPattern::Gbrg),
            _ => Err(BayerError::InvalidPattern(s.to_owned())),
        }
    }
}

impl TryFrom<&str> for BayerPattern {
    type Error = BayerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<ColorSpace> for BayerPattern {
    type Error = BayerError;

    fn try_from(value: ColorSpace) -> Result<Self, Self::Error> {
        match value {
            ColorSpace::Bayer(pat) => Ok(pat),
            ColorSpace::Gray | ColorSpace::Rgb => Err(BayerError::NotBayer),
        }
    }
}

impl From<BayerPattern> for ColorSpace {
    fn from(value: BayerPattern) -> Self {
        ColorSpace::Bayer(value)
    }
}

impl ColorSpace {
    /// Number of interleaved channels an image in this colour space carries.
    pub fn channels(&self) -> usize {
        match self {
            ColorSpace::Gray | ColorSpace::Bayer(_) => 1,
            ColorSpace::Rgb => 3,
        }
    }
}
