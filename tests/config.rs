use std::str::FromStr;

use cfademosaic::{BayerError, BayerPattern, ColorSpace, DemosaicMethod};

#[test]
fn test_demosaic_method_from_string() {
    assert_eq!(
        DemosaicMethod::from_str("bilinear").unwrap(),
        DemosaicMethod::Bilinear
    );

    assert_eq!(
        DemosaicMethod::from_str("BILINEAR").unwrap(),
        DemosaicMethod::Bilinear
    );

    assert_eq!(
        DemosaicMethod::from_str("Malvar2004").unwrap(),
        DemosaicMethod::Malvar2004
    );

    assert_eq!(
        DemosaicMethod::from_str("menon").unwrap(),
        DemosaicMethod::Menon2007 { refine: true }
    );

    assert_eq!(
        DemosaicMethod::from_str("Menon2007-NoRefine").unwrap(),
        DemosaicMethod::Menon2007 { refine: false }
    );

    assert!(matches!(
        DemosaicMethod::from_str("amaze"),
        Err(BayerError::InvalidMethod(_))
    ));
}

#[test]
fn test_serde_roundtrip() {
    let methods = [
        DemosaicMethod::Bilinear,
        DemosaicMethod::Malvar2004,
        DemosaicMethod::Menon2007 { refine: true },
        DemosaicMethod::Menon2007 { refine: false },
    ];
    let json = serde_json::to_string(&methods).unwrap();
    let back: Vec<DemosaicMethod> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, methods);

    let json = serde_json::to_string(&BayerPattern::ALL).unwrap();
    let back: Vec<BayerPattern> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, BayerPattern::ALL);

    let cspace = ColorSpace::Bayer(BayerPattern::Grbg);
    let json = serde_json::to_string(&cspace).unwrap();
    assert_eq!(serde_json::from_str::<ColorSpace>(&json).unwrap(), cspace);
}

#[test]
fn test_serde_layout() {
    assert_eq!(
        serde_json::to_string(&DemosaicMethod::Menon2007 { refine: false }).unwrap(),
        r#"{"Menon2007":{"refine":false}}"#
    );
    assert_eq!(
        serde_json::from_str::<DemosaicMethod>(r#""Malvar2004""#).unwrap(),
        DemosaicMethod::Malvar2004
    );
}
