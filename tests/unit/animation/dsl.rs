use super::*;
use crate::animation::timeline::LayerPhase;

#[test]
fn builders_produce_a_validated_timeline() {
    let tl = TimelineBuilder::new(2.0)
        .repeat_delay(1.0)
        .layer(
            LayerBuilder::new("cursor", Property::X)
                .point(0.0, 0.0)
                .point(1.0, 100.0)
                .ease(Ease::EaseOut)
                .looping()
                .build()
                .unwrap(),
        )
        .layer(
            LayerBuilder::new("menu", Property::Visible)
                .point(0.0, false)
                .point(0.5, true)
                .step()
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    assert_eq!(tl.layers().len(), 2);
    assert_eq!(tl.period(), 3.0);
    let f = tl.sample(1.5);
    assert_eq!(f.value("menu", Property::Visible), Some(Value::Flag(true)));
    assert!(f.is_visible("menu"));
}

#[test]
fn layer_builder_validates() {
    let err = LayerBuilder::new("menu", Property::Visible)
        .point(0.0, false)
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("step"), "{err}");

    assert!(
        LayerBuilder::new("dot", Property::Opacity)
            .point(0.0, 0.0)
            .delay(-0.1)
            .build()
            .is_err()
    );
}

#[test]
fn times_values_zips_and_checks_lengths() {
    let layer = LayerBuilder::new("dot", Property::Scale)
        .times_values(&[0.0, 0.4, 1.0], [1.0, 0.9, 1.0])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(layer.points.len(), 3);
    assert_eq!(layer.points[1], ControlPoint::new(0.4, 0.9));

    assert!(
        LayerBuilder::new("dot", Property::Scale)
            .times_values(&[0.0, 1.0], [1.0])
            .is_err()
    );
}

#[test]
fn stagger_offsets_delays_and_targets() {
    let base = LayerBuilder::new("char", Property::Opacity)
        .point(0.0, 0.0)
        .point(0.05, 1.0)
        .build()
        .unwrap();
    let chars = stagger(&base, 3, 0.45, 0.03);
    assert_eq!(chars.len(), 3);
    assert_eq!(chars[0].target, "char#0");
    assert_eq!(chars[2].target, "char#2");
    assert_eq!(chars[0].delay, 0.45);
    assert!((chars[2].delay - 0.51).abs() < 1e-12);

    let tl = TimelineBuilder::new(1.0).layers(chars).build().unwrap();
    let f = tl.sample(0.47);
    assert_eq!(f.layers[0].phase, LayerPhase::Running);
    assert_eq!(f.layers[2].phase, LayerPhase::Pending);
}
