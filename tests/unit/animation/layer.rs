use super::*;

fn scalar_layer(points: &[(f64, f64)], interp: Interp) -> Layer {
    Layer {
        target: "dot".to_owned(),
        property: Property::Opacity,
        points: points.iter().map(|&(t, v)| ControlPoint::new(t, v)).collect(),
        delay: 0.0,
        looping: false,
        interp,
        ease: Ease::Linear,
    }
}

#[test]
fn linear_interpolates_between_points() {
    let l = scalar_layer(&[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)], Interp::Linear);
    assert_eq!(l.value_at(0.25), Value::Scalar(0.5));
    assert_eq!(l.value_at(0.5), Value::Scalar(1.0));
    assert_eq!(l.value_at(0.75), Value::Scalar(0.5));
}

#[test]
fn step_snaps_to_left_point_and_switches_at_exact_time() {
    let l = scalar_layer(&[(0.0, 0.0), (0.5, 1.0), (1.0, 2.0)], Interp::Step);
    assert_eq!(l.value_at(0.49), Value::Scalar(0.0));
    assert_eq!(l.value_at(0.5), Value::Scalar(1.0));
    assert_eq!(l.value_at(0.99), Value::Scalar(1.0));
    assert_eq!(l.value_at(1.0), Value::Scalar(2.0));
}

#[test]
fn holds_outside_first_and_last_points() {
    let l = scalar_layer(&[(0.2, 3.0), (0.8, 7.0)], Interp::Linear);
    assert_eq!(l.value_at(0.0), Value::Scalar(3.0));
    assert_eq!(l.value_at(0.1), Value::Scalar(3.0));
    assert_eq!(l.value_at(0.9), Value::Scalar(7.0));
    assert_eq!(l.value_at(1.0), Value::Scalar(7.0));
}

#[test]
fn coincident_points_jump() {
    let l = scalar_layer(&[(0.0, 0.0), (0.5, 0.0), (0.5, 1.0), (1.0, 1.0)], Interp::Linear);
    assert_eq!(l.value_at(0.4), Value::Scalar(0.0));
    assert_eq!(l.value_at(0.5), Value::Scalar(1.0));
}

#[test]
fn ease_shapes_each_segment() {
    let mut l = scalar_layer(&[(0.0, 0.0), (1.0, 10.0)], Interp::Linear);
    l.ease = Ease::EaseIn;
    let mid = l.value_at(0.5).as_scalar().unwrap();
    assert!(mid < 5.0, "ease-in should lag behind linear, got {mid}");
    assert_eq!(l.value_at(1.0), Value::Scalar(10.0));
}

#[test]
fn points_and_colors_interpolate_componentwise() {
    let l = Layer {
        target: "cursor".to_owned(),
        property: Property::Translate,
        points: vec![
            ControlPoint::new(0.0, Vec2::new(0.0, 0.0)),
            ControlPoint::new(1.0, Vec2::new(10.0, -20.0)),
        ],
        delay: 0.0,
        looping: false,
        interp: Interp::Linear,
        ease: Ease::Linear,
    };
    assert_eq!(l.value_at(0.5), Value::Point(Vec2::new(5.0, -10.0)));

    let c = Rgba8::lerp(&Rgba8::BLACK, &Rgba8::WHITE, 0.5);
    assert_eq!(c, Rgba8::rgb(128, 128, 128));
}

#[test]
fn validation_rejects_malformed_layers() {
    let empty = scalar_layer(&[], Interp::Linear);
    assert!(empty.validate().is_err());

    let unsorted = scalar_layer(&[(0.6, 0.0), (0.2, 1.0)], Interp::Linear);
    let err = unsorted.validate().unwrap_err().to_string();
    assert!(err.contains("sorted"), "{err}");

    let out_of_range = scalar_layer(&[(0.0, 0.0), (1.5, 1.0)], Interp::Linear);
    assert!(out_of_range.validate().is_err());

    let non_finite = scalar_layer(&[(0.0, f64::NAN)], Interp::Linear);
    assert!(non_finite.validate().is_err());

    let mut negative_delay = scalar_layer(&[(0.0, 0.0)], Interp::Linear);
    negative_delay.delay = -1.0;
    assert!(negative_delay.validate().is_err());

    let mut mixed = scalar_layer(&[(0.0, 0.0)], Interp::Linear);
    mixed.points.push(ControlPoint::new(1.0, true));
    let err = mixed.validate().unwrap_err().to_string();
    assert!(err.contains("mixes"), "{err}");
}

#[test]
fn flags_require_step_interpolation() {
    let mut l = Layer {
        target: "menu".to_owned(),
        property: Property::Visible,
        points: vec![ControlPoint::new(0.0, false), ControlPoint::new(0.5, true)],
        delay: 0.0,
        looping: false,
        interp: Interp::Linear,
        ease: Ease::Linear,
    };
    assert!(l.validate().is_err());
    l.interp = Interp::Step;
    l.validate().unwrap();
    assert_eq!(l.value_at(0.7), Value::Flag(true));
}

#[test]
fn gating_properties_hide_targets() {
    assert!(!Property::Opacity.shows(&Value::Scalar(0.0)));
    assert!(Property::Opacity.shows(&Value::Scalar(0.01)));
    assert!(!Property::Scale.shows(&Value::Scalar(0.0)));
    assert!(!Property::Reveal.shows(&Value::Scalar(0.0)));
    assert!(!Property::Visible.shows(&Value::Flag(false)));
    assert!(Property::X.shows(&Value::Scalar(0.0)));
    assert!(Property::Background.shows(&Value::Color(Rgba8::TRANSPARENT)));
}

#[test]
fn layer_json_uses_untagged_values_and_defaults() {
    let json = r##"{
        "target": "cursor",
        "property": "translate",
        "points": [
            { "t": 0, "value": { "x": 0, "y": 0 } },
            { "t": 1, "value": { "x": 40, "y": 12.5 } }
        ],
        "loop": true,
        "ease": "ease_out"
    }"##;
    let l: Layer = serde_json::from_str(json).unwrap();
    l.validate().unwrap();
    assert!(l.looping);
    assert_eq!(l.delay, 0.0);
    assert_eq!(l.interp, Interp::Linear);
    assert_eq!(l.ease, Ease::EaseOut);
    assert_eq!(l.value_kind(), Some(ValueKind::Point));
    assert_eq!(l.last_value(), Value::Point(Vec2::new(40.0, 12.5)));

    let colors: Vec<ControlPoint> =
        serde_json::from_str(r##"[{ "t": 0, "value": "#ffffff" }, { "t": 1, "value": false }]"##)
            .unwrap();
    assert_eq!(colors[0].value, Value::Color(Rgba8::WHITE));
    assert_eq!(colors[1].value, Value::Flag(false));
}

#[test]
fn label_names_target_and_property() {
    let l = scalar_layer(&[(0.0, 1.0)], Interp::Linear);
    assert_eq!(l.label(), "dot.Opacity");
}

#[test]
fn value_lerp_dispatches_per_kind() {
    let p = Value::lerp(
        &Value::Point(Vec2::new(0.0, 10.0)),
        &Value::Point(Vec2::new(4.0, 20.0)),
        0.25,
    );
    assert_eq!(p, Value::Point(Vec2::new(1.0, 12.5)));
    assert_eq!(
        Value::lerp(&Value::Scalar(2.0), &Value::Scalar(4.0), 0.5),
        Value::Scalar(3.0)
    );
    assert_eq!(
        Value::lerp(&Value::Flag(false), &Value::Flag(true), 0.9),
        Value::Flag(false)
    );
}
