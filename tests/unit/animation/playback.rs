use super::*;
use crate::animation::{
    dsl::{LayerBuilder, TimelineBuilder},
    layer::{Property, Value},
};

fn fade(cycle: f64) -> Timeline {
    TimelineBuilder::new(cycle)
        .layer(
            LayerBuilder::new("dot", Property::Opacity)
                .point(0.0, 0.0)
                .point(1.0, 1.0)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap()
}

fn opacity(frame: &FrameSample) -> f64 {
    frame
        .value("dot", Property::Opacity)
        .and_then(|v| v.as_scalar())
        .unwrap()
}

#[test]
fn manual_source_rejects_backwards_and_non_finite_time() {
    let mut src = ManualTickSource::starting_at(5.0);
    assert!(src.advance_to(4.0).is_err());
    assert!(src.advance_to(f64::NAN).is_err());
    assert_eq!(src.now(), 5.0);
    assert_eq!(src.advance_to(5.0).unwrap(), 0);
}

#[test]
fn manual_source_counts_deliveries_per_subscription() {
    let mut src = ManualTickSource::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = src.subscribe(Box::new(move |now| sink.borrow_mut().push(now)));

    src.advance_by(0.5).unwrap();
    src.advance_by(0.5).unwrap();
    assert_eq!(src.deliveries(id), 2);
    assert_eq!(*seen.borrow(), vec![0.5, 1.0]);

    assert!(src.unsubscribe(id));
    assert!(!src.unsubscribe(id));
    src.advance_by(1.0).unwrap();
    assert_eq!(src.deliveries(id), 2);
    assert_eq!(src.active(), 0);
}

#[test]
fn playback_samples_relative_to_play_time() {
    let mut src = ManualTickSource::starting_at(10.0);
    let mut playback = Playback::new();
    assert!(playback.latest().is_none());

    playback.play(fade(2.0), &mut src);
    assert_eq!(opacity(&playback.latest().unwrap()), 0.0);

    src.advance_to(11.0).unwrap();
    assert_eq!(opacity(&playback.latest().unwrap()), 0.5);
    assert_eq!(playback.elapsed(src.now()), Some(1.0));
    assert_eq!(opacity(&playback.sample_now(11.5).unwrap()), 0.75);
}

#[test]
fn replay_cancels_old_subscription_before_new_ticks() {
    let mut src = ManualTickSource::new();
    let mut playback = Playback::new();

    let first = playback.play(fade(4.0), &mut src);
    src.advance_to(3.0).unwrap();
    assert_eq!(src.deliveries(first), 1);

    let second = playback.play(fade(4.0), &mut src);
    assert_ne!(first, second);
    assert!(!src.is_subscribed(first));
    assert_eq!(src.active(), 1);

    src.advance_to(4.0).unwrap();
    src.advance_to(5.0).unwrap();
    assert_eq!(src.deliveries(first), 1);
    assert_eq!(src.deliveries(second), 2);
    // Restarted at zero: two seconds into the new run, not five.
    assert_eq!(
        playback.latest().unwrap().value("dot", Property::Opacity),
        Some(Value::Scalar(0.5))
    );
}

#[test]
fn stop_is_idempotent() {
    let mut src = ManualTickSource::new();
    let mut playback = Playback::new();
    let id = playback.play(fade(1.0), &mut src);
    assert!(playback.is_playing());
    assert_eq!(playback.subscription(), Some(id));

    assert!(playback.stop(&mut src));
    assert!(!playback.stop(&mut src));
    assert!(!playback.is_playing());
    src.advance_by(1.0).unwrap();
    assert_eq!(src.deliveries(id), 0);
}
