//! Structural properties that hold for every pattern and image size.
mod common;

use cfademosaic::{
    bayer_masks, demosaic, mosaic, BayerError, BayerPattern, Channel, ColorSpace, DemosaicMethod,
    ImageData, Plane,
};
use common::gray;
use paste::paste;
use rand::{rngs::StdRng, Rng, SeedableRng};

const METHODS: [DemosaicMethod; 4] = [
    DemosaicMethod::Bilinear,
    DemosaicMethod::Malvar2004,
    DemosaicMethod::Menon2007 { refine: true },
    DemosaicMethod::Menon2007 { refine: false },
];

fn random_cfa(width: usize, height: usize, seed: u64) -> ImageData<'static, f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<f64> = (0..width * height).map(|_| rng.gen::<f64>()).collect();
    gray(&data, width, height)
}

fn random_rgb(width: usize, height: usize, seed: u64) -> ImageData<'static, f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<f64> = (0..width * height * 3).map(|_| rng.gen::<f64>()).collect();
    ImageData::from_owned(data, width, height, ColorSpace::Rgb).unwrap()
}

fn planes(img: &ImageData<'_, f64>) -> [Plane<f64>; 3] {
    [Channel::Red, Channel::Green, Channel::Blue].map(|c| img.channel(c).unwrap())
}

/// Pattern of a grid after `transform` moved tile position (y, x) to the
/// returned position.
fn relabel(pattern: BayerPattern, source: impl Fn(usize, usize) -> (usize, usize)) -> BayerPattern {
    BayerPattern::ALL
        .into_iter()
        .find(|p| {
            (0..2).all(|y| {
                (0..2).all(|x| {
                    let (sy, sx) = source(y, x);
                    p.channel_at(y, x) == pattern.channel_at(sy, sx)
                })
            })
        })
        .unwrap()
}

fn assert_planes_close(a: &Plane<f64>, b: &Plane<f64>, delta: f64) {
    assert_eq!((a.width(), a.height()), (b.width(), b.height()));
    for (&x, &y) in a.iter().zip(b.iter()) {
        assert_delta!(x, y, delta);
    }
}

fn check_masks_partition(pattern: BayerPattern) {
    for (w, h) in [(1, 1), (2, 3), (5, 4), (16, 9)] {
        let masks = bayer_masks(w, h, pattern);
        let total = masks.red.iter().filter(|&&b| b).count()
            + masks.green.iter().filter(|&&b| b).count()
            + masks.blue.iter().filter(|&&b| b).count();
        assert_eq!(total, w * h);
        for y in 0..h {
            for x in 0..w {
                let hits = [&masks.red, &masks.green, &masks.blue]
                    .iter()
                    .filter(|m| m.get(x, y) == Some(true))
                    .count();
                assert_eq!(hits, 1);
            }
        }
    }
}

fn check_mosaic_mask_duality(pattern: BayerPattern) {
    let (w, h) = (7, 6);
    let masks = bayer_masks(w, h, pattern);
    for (c, mask) in [(0, &masks.red), (1, &masks.green), (2, &masks.blue)] {
        // probe image lit in a single channel
        let mut data = vec![0.0f64; w * h * 3];
        data.iter_mut().skip(c).step_by(3).for_each(|v| *v = 1.0);
        let probe = ImageData::from_owned(data, w, h, ColorSpace::Rgb).unwrap();
        let cfa = mosaic(&probe, pattern).unwrap();
        let expected: Vec<f64> = mask.iter().map(|&b| if b { 1.0 } else { 0.0 }).collect();
        assert_eq!(cfa.as_slice(), &expected[..]);
    }
}

fn check_roundtrip(pattern: BayerPattern) {
    let (w, h) = (9, 8);
    let cfa = mosaic(&random_rgb(w, h, 11), pattern).unwrap();
    for method in METHODS {
        let again = mosaic(&demosaic(&cfa, pattern, method).unwrap(), pattern).unwrap();
        if method == DemosaicMethod::Bilinear {
            // the reflected border folds a sample onto its own neighbours
            for y in 1..h - 1 {
                for x in 1..w - 1 {
                    assert_eq!(again.get(x, y, 0), cfa.get(x, y, 0));
                }
            }
        } else {
            assert_eq!(again.as_slice(), cfa.as_slice(), "{method}");
        }
    }
}

fn check_rotation(pattern: BayerPattern) {
    let (w, h) = (8, 6);
    let cfa = random_cfa(w, h, 23);
    let rotated = Plane::from_vec(cfa.as_slice().to_vec(), w, h).unwrap().rot90();
    let rotated = gray(rotated.as_slice(), h, w);
    // rot90 takes (y, x) from (x, w - 1 - y)
    let rot_pattern = relabel(pattern, |y, x| (x, w - 1 - y));
    for method in [DemosaicMethod::Bilinear, DemosaicMethod::Malvar2004] {
        let a = planes(&demosaic(&cfa, pattern, method).unwrap());
        let b = planes(&demosaic(&rotated, rot_pattern, method).unwrap());
        for (a, b) in a.iter().zip(b.iter()) {
            assert_planes_close(&a.rot90(), b, 1e-12);
        }
    }
}

fn check_transpose(pattern: BayerPattern) {
    let (w, h) = (9, 6);
    let cfa = random_cfa(w, h, 31);
    let transposed = Plane::from_vec(cfa.as_slice().to_vec(), w, h)
        .unwrap()
        .transpose();
    let transposed = gray(transposed.as_slice(), h, w);
    assert_eq!(relabel(pattern, |y, x| (x, y)), pattern.transpose());
    for method in METHODS {
        let a = planes(&demosaic(&cfa, pattern, method).unwrap());
        let b = planes(&demosaic(&transposed, pattern.transpose(), method).unwrap());
        for (a, b) in a.iter().zip(b.iter()) {
            assert_planes_close(&a.transpose(), b, 1e-12);
        }
    }
}

fn check_scaling(pattern: BayerPattern) {
    // power of two scaling is exact, and nothing is clipped
    let cfa = random_cfa(7, 7, 47);
    let scaled: Vec<f64> = cfa.as_slice().iter().map(|v| v * 1024.0).collect();
    let scaled = gray(&scaled, 7, 7);
    for method in METHODS {
        let a = demosaic(&cfa, pattern, method).unwrap();
        let b = demosaic(&scaled, pattern, method).unwrap();
        for (&x, &y) in a.as_slice().iter().zip(b.as_slice()) {
            assert_eq!(x * 1024.0, y, "{method}");
        }
    }
}

macro_rules! pattern_tests {
    ($($name:ident => $pattern:expr),* $(,)?) => {
        paste! {
            $(
                #[test]
                fn [<masks_partition_ $name>]() {
                    check_masks_partition($pattern);
                }

                #[test]
                fn [<mosaic_mask_duality_ $name>]() {
                    check_mosaic_mask_duality($pattern);
                }

                #[test]
                fn [<roundtrip_ $name>]() {
                    check_roundtrip($pattern);
                }

                #[test]
                fn [<rotation_ $name>]() {
                    check_rotation($pattern);
                }

                #[test]
                fn [<transpose_ $name>]() {
                    check_transpose($pattern);
                }

                #[test]
                fn [<scaling_ $name>]() {
                    check_scaling($pattern);
                }
            )*
        }
    };
}

pattern_tests!(
    rggb => BayerPattern::Rggb,
    bggr => BayerPattern::Bggr,
    grbg => BayerPattern::Grbg,
    gbrg => BayerPattern::Gbrg,
);

#[test]
fn menon_is_deterministic() {
    let cfa = random_cfa(12, 10, 5);
    for refine in [true, false] {
        let method = DemosaicMethod::Menon2007 { refine };
        let a = demosaic(&cfa, BayerPattern::Gbrg, method).unwrap();
        let b = demosaic(&cfa, BayerPattern::Gbrg, method).unwrap();
        assert_eq!(a.as_slice(), b.as_slice());
    }
}

#[test]
fn output_shape() {
    for (w, h) in [(1, 1), (2, 2), (5, 3), (4, 9)] {
        let cfa = random_cfa(w, h, 3);
        for method in METHODS {
            for pattern in BayerPattern::ALL {
                let rgb = demosaic(&cfa, pattern, method).unwrap();
                assert_eq!((rgb.width(), rgb.height(), rgb.channels()), (w, h, 3));
                assert_eq!(rgb.as_slice().len(), w * h * 3);
            }
        }
    }
}

#[test]
fn unknown_pattern_rejected() {
    let err = "XYZZ".parse::<BayerPattern>().unwrap_err();
    assert_eq!(err, BayerError::InvalidPattern("XYZZ".to_owned()));
    assert!(err.to_string().contains("RGGB, BGGR, GRBG, GBRG"));
}
