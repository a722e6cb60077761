use bytemuck::Pod;
use num_traits::Float;
use std::fmt::Debug;
use std::ops::{AddAssign, SubAssign};

/// The element type of CFA samples and reconstructed channels. This is `f32` or `f64`.
///
/// Values are never clamped: the algorithms are linear (or piecewise linear) in the
/// input, so high dynamic range data passes through unchanged.
pub trait Sample:
    Float + AddAssign + SubAssign + Debug + Default + Pod + Send + Sync + 'static
{
    /// Convert a kernel coefficient to this type.
    fn from_f64(v: f64) -> Self;
}

macro_rules! declare_sample {
    ($base:ty) => {
        impl Sample for $base {
            #[inline(always)]
            fn from_f64(v: f64) -> Self {
                v as $base
            }
        }
    };
}

declare_sample!(f32);
declare_sample!(f64);

#[cfg(test)]
mod tests {
    use super::Sample;

    #[test]
    fn test_coefficient_cast() {
        assert_eq!(<f32 as Sample>::from_f64(0.125), 0.125f32);
        assert_eq!(<f64 as Sample>::from_f64(-1.5), -1.5f64);
        assert_eq!(<f32 as Sample>::from_f64(1.0 / 3.0), 1.0f32 / 3.0);
    }
}
