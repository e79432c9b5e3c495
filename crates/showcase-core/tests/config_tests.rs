use glam::Vec3;
use showcase_core::config::query_pairs;
use showcase_core::*;

#[test]
fn defaults_match_the_shipped_scene() {
    let cfg = SceneConfig::default();
    assert_eq!(cfg.cam_radius, 2.46);
    assert_eq!(cfg.cam_height, -0.49);
    assert_eq!(cfg.cam_spin_deg, 173.0);
    assert_eq!(cfg.cam_speed, 0.6);
    assert_eq!(cfg.spot_intensity, 7.89);
    assert_eq!(cfg.head_yaw_offset, -0.5);
    assert_eq!(cfg.head_pitch_offset, 0.53);
    assert!(cfg.head_invert_x);
    assert!(!cfg.head_invert_y);
    assert_eq!(cfg.dust_count, 450);
    assert_eq!(cfg.dust_area, Vec3::new(16.0, 8.0, 16.0));
    assert_eq!(cfg.dust_speed, 0.006);
}

#[test]
fn overrides_parse_by_name() {
    let mut cfg = SceneConfig::default();
    cfg.apply_override("camRadius", "2.6").unwrap();
    cfg.apply_override("headInvertX", "off").unwrap();
    cfg.apply_override("dustArea", "10, 4, 10").unwrap();
    cfg.apply_override("dustCount", "200").unwrap();
    cfg.apply_override("dustSeed", "99").unwrap();
    assert_eq!(cfg.cam_radius, 2.6);
    assert!(!cfg.head_invert_x);
    assert_eq!(cfg.dust_area, Vec3::new(10.0, 4.0, 10.0));
    assert_eq!(cfg.dust_count, 200);
    assert_eq!(cfg.dust_seed, 99);
}

#[test]
fn bad_overrides_leave_config_unchanged() {
    let mut cfg = SceneConfig::default();
    assert_eq!(
        cfg.apply_override("camZoom", "1"),
        Err(SceneError::UnknownOption("camZoom".to_string()))
    );
    assert!(matches!(
        cfg.apply_override("camRadius", "wide"),
        Err(SceneError::InvalidValue { .. })
    ));
    assert!(cfg.apply_override("camSpeed", "-1").is_err());
    assert!(cfg.apply_override("camHeight", "NaN").is_err());
    assert!(cfg.apply_override("dustArea", "1,2").is_err());
    assert!(cfg.apply_override("dustArea", "1,0,2").is_err());
    assert!(cfg.apply_override("headInvertY", "maybe").is_err());
    assert!(cfg.apply_override("dustCount", "-3").is_err());
    assert_eq!(cfg, SceneConfig::default());
}

#[test]
fn dust_count_is_bounded() {
    let mut cfg = SceneConfig::default();
    assert!(matches!(
        cfg.apply_override("dustCount", "4000000000"),
        Err(SceneError::InvalidValue { .. })
    ));
    assert_eq!(cfg.dust_count, 450);
    cfg.apply_override("dustCount", &MAX_DUST_COUNT.to_string()).unwrap();
    assert_eq!(cfg.dust_count, MAX_DUST_COUNT);
    cfg.apply_pairs(query_pairs("?dustCount=100001"));
    assert_eq!(cfg.dust_count, MAX_DUST_COUNT);
}

#[test]
fn query_strings_split_into_pairs() {
    let pairs: Vec<_> = query_pairs("?camRadius=2.6&&dustCount=200&flag").collect();
    assert_eq!(pairs, vec![("camRadius", "2.6"), ("dustCount", "200")]);

    let mut cfg = SceneConfig::default();
    cfg.apply_pairs(query_pairs("camSpeed=0.8&nope=1&spotAngle=x"));
    assert_eq!(cfg.cam_speed, 0.8);
    assert_eq!(cfg.spot_angle, 0.63);
}
