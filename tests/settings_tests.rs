// Host-side tests for the settings model and its JSON form.

mod common;

use common::core::settings::*;
use common::core::surface::Region;

#[test]
fn defaults_are_already_in_range() {
    let d = AppSettings::default();
    assert_eq!(d.sanitized(), d);
    assert_eq!(d.layout, Layout::Dual);
    assert_eq!(d.target_fps, 60);
}

#[test]
fn partial_preset_fills_in_defaults() {
    let s = AppSettings::from_json(r#"{"left":{"circleCount":3,"sphereMode":true}}"#)
        .expect("valid preset");
    assert_eq!(s.left.circle_count, 3);
    assert!(s.left.sphere_mode);
    assert_eq!(s.left.speed, CurveGroupSettings::default().speed);
    assert_eq!(s.right, CurveGroupSettings::right_default());
    assert_eq!(s.target_fps, 60);
}

#[test]
fn json_uses_camel_case_keys() {
    let json = AppSettings::default().to_json().expect("serialises");
    for key in [
        "\"wobbleAmount\"",
        "\"wobbleFrequency\"",
        "\"radiusScale\"",
        "\"individualFrequency\"",
        "\"opacityFade\"",
        "\"mouseOffset\"",
        "\"targetFps\"",
        "\"layout\":\"dual\"",
    ] {
        assert!(json.contains(key), "missing {key} in {json}");
    }
    let back = AppSettings::from_json(&json).expect("parses");
    assert_eq!(back, AppSettings::default());
}

#[test]
fn out_of_range_values_are_clamped() {
    let s = AppSettings::from_json(
        r#"{"targetFps":500,"left":{"circleCount":0,"opacityFade":2.5,"radiusScale":3.0},
            "right":{"circleCount":99,"wobbleFrequency":0.0,"speed":-4.0}}"#,
    )
    .expect("valid preset");
    assert_eq!(s.target_fps, 120);
    assert_eq!(s.left.circle_count, 1);
    assert_eq!(s.left.opacity_fade, 1.0);
    assert_eq!(s.left.radius_scale, 0.95);
    assert_eq!(s.right.circle_count, 20);
    assert_eq!(s.right.wobble_frequency, 1.0);
    assert_eq!(s.right.speed, 0.0);

    let slow = AppSettings::from_json(r#"{"targetFps":0}"#).expect("valid preset");
    assert_eq!(slow.target_fps, 1);
}

#[test]
fn non_finite_values_fall_back_to_defaults() {
    let g = CurveGroupSettings {
        speed: f64::NAN,
        wobble_amount: f64::INFINITY,
        ..CurveGroupSettings::default()
    }
    .sanitized();
    assert_eq!(g.speed, CurveGroupSettings::default().speed);
    assert_eq!(g.wobble_amount, CurveGroupSettings::default().wobble_amount);
}

#[test]
fn malformed_json_is_rejected() {
    let err = AppSettings::from_json("{not json").unwrap_err();
    assert!(matches!(err, SettingsError::Parse(_)));
    assert!(err.to_string().starts_with("malformed settings"));
}

#[test]
fn frequency_rounds_to_whole_cycles() {
    let g = |f: f64| CurveGroupSettings {
        wobble_frequency: f,
        ..CurveGroupSettings::default()
    };
    assert_eq!(g(2.6).base_frequency(), 3);
    assert_eq!(g(2.4).base_frequency(), 2);
    assert_eq!(g(30.0).base_frequency(), 30);
    assert_eq!(g(0.2).base_frequency(), 1);
}

#[test]
fn group_side_parses() {
    assert_eq!("left".parse::<GroupSide>().ok(), Some(GroupSide::Left));
    assert_eq!("right".parse::<GroupSide>().ok(), Some(GroupSide::Right));
    assert!(matches!(
        "middle".parse::<GroupSide>(),
        Err(SettingsError::UnknownSide(_))
    ));
}

#[test]
fn with_group_replaces_one_side_only() {
    let base = AppSettings::default();
    let edited = CurveGroupSettings {
        circle_count: 40,
        ..CurveGroupSettings::default()
    };
    let next = base.with_group(GroupSide::Right, edited);
    assert_eq!(next.left, base.left);
    assert_eq!(next.right.circle_count, 20);
    assert_eq!(next.group(GroupSide::Right), &next.right);
}

#[test]
fn dual_layout_splits_surface_in_halves() {
    let groups = AppSettings::default().render_groups(1000.0, 500.0);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].side, GroupSide::Left);
    assert_eq!(groups[0].region, Region::new(0.0, 0.0, 500.0, 500.0));
    assert_eq!(groups[1].side, GroupSide::Right);
    assert_eq!(groups[1].region, Region::new(500.0, 0.0, 500.0, 500.0));
    assert_eq!(groups[1].settings, CurveGroupSettings::right_default());
}

#[test]
fn single_layout_uses_left_settings_full_surface() {
    let s = AppSettings {
        layout: Layout::Single,
        ..AppSettings::default()
    };
    let groups = s.render_groups(1000.0, 500.0);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].settings, s.left);
    assert_eq!(groups[0].region, Region::new(0.0, 0.0, 1000.0, 500.0));
}
