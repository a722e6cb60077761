use cfademosaic::{ColorSpace, ImageData};

#[macro_export]
macro_rules! assert_delta {
    ($x:expr, $y:expr, $d:expr) => {{
        let (x, y) = ($x, $y);
        assert!((x - y).abs() <= $d, "{} != {} (delta {})", x, y, $d);
    }};
}

/// Compare an image against a flat list of expected samples.
#[macro_export]
macro_rules! assert_samples {
    ($img:expr, $expected:expr, $d:expr) => {{
        let got = $img.as_slice();
        let expected = $expected;
        assert_eq!(got.len(), expected.len());
        for (&g, &e) in got.iter().zip(expected.iter()) {
            $crate::assert_delta!(g as f64, e as f64, $d);
        }
    }};
}

#[allow(dead_code)]
pub const DEFAULT_DELTA: f64 = 1e-6;

/// Single channel untagged image.
#[allow(dead_code)]
pub fn gray<T: cfademosaic::Sample>(data: &[T], width: usize, height: usize) -> ImageData<'static, T> {
    ImageData::from_owned(data.to_vec(), width, height, ColorSpace::Gray).unwrap()
}
