use super::*;
use crate::{
    animation::{layer::Property, playback::ManualTickSource},
    content::model::Platform,
    flow::controller::Phase,
    foundation::error::TourlineError,
};

#[derive(Default)]
struct RecordingClipboard {
    copied: Vec<String>,
    fail: bool,
}

impl Clipboard for RecordingClipboard {
    fn copy(&mut self, text: &str) -> TourlineResult<()> {
        if self.fail {
            return Err(TourlineError::collaborator("clipboard locked"));
        }
        self.copied.push(text.to_owned());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingOpener {
    opened: Vec<String>,
    fail: bool,
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, destination: &str) -> TourlineResult<()> {
        if self.fail {
            return Err(TourlineError::collaborator("no browser"));
        }
        self.opened.push(destination.to_owned());
        Ok(())
    }
}

fn session() -> OnboardingSession<ManualTickSource> {
    OnboardingSession::new(ManualTickSource::new())
}

fn mac_terminal_step(s: &mut OnboardingSession<ManualTickSource>) {
    s.dispatch(FlowEvent::SelectPlatform(Platform::Mac)).unwrap();
    for _ in 0..4 {
        s.dispatch(FlowEvent::Advance).unwrap();
    }
    assert_eq!(s.current_step().unwrap().id, 4);
}

#[test]
fn opts_defaults_and_partial_json() {
    assert_eq!(SessionOpts::default().copied_indicator_secs, 2.0);
    let opts: SessionOpts = serde_json::from_str(r#"{ "autoplay": false }"#).unwrap();
    assert!(!opts.autoplay);
    assert_eq!(opts.copied_indicator_secs, 2.0);
}

#[test]
fn selecting_a_platform_starts_the_first_visual() {
    let mut s = session();
    assert!(!s.is_animating());
    s.dispatch(FlowEvent::SelectPlatform(Platform::Windows)).unwrap();
    assert!(s.is_animating());

    s.ticks_mut().advance_to(0.45).unwrap();
    let frame = s.frame().unwrap();
    assert_eq!(frame.elapsed, 0.45);
    assert!(frame.get("button", Property::Width).is_some());
}

#[test]
fn step_change_restarts_from_zero_and_silences_old_listener() {
    let mut s = session();
    s.dispatch(FlowEvent::SelectPlatform(Platform::Windows)).unwrap();
    let first = s.playback().subscription().unwrap();

    s.ticks_mut().advance_to(1.0).unwrap();
    s.ticks_mut().advance_to(2.0).unwrap();
    assert_eq!(s.ticks().deliveries(first), 2);

    s.dispatch(FlowEvent::Advance).unwrap();
    let second = s.playback().subscription().unwrap();
    assert_ne!(first, second);

    s.ticks_mut().advance_to(2.5).unwrap();
    s.ticks_mut().advance_to(3.0).unwrap();
    assert_eq!(s.ticks().deliveries(first), 2);
    assert_eq!(s.ticks().deliveries(second), 2);
    assert_eq!(s.frame().unwrap().elapsed, 1.0);
    assert_eq!(s.frame_now().unwrap().elapsed, 1.0);
}

#[test]
fn ignored_events_keep_the_running_visual() {
    let mut s = session();
    s.dispatch(FlowEvent::SelectPlatform(Platform::Mac)).unwrap();
    let sub = s.playback().subscription();
    assert_eq!(s.dispatch(FlowEvent::Confirm).unwrap(), Outcome::Ignored);
    assert_eq!(s.playback().subscription(), sub);
}

#[test]
fn static_and_missing_visuals_leave_the_surface_empty() {
    let mut s = session();
    s.dispatch(FlowEvent::SelectPlatform(Platform::Windows)).unwrap();
    for _ in 0..3 {
        s.dispatch(FlowEvent::Advance).unwrap();
    }
    assert_eq!(s.state().phase, Phase::ShowingBenefits);
    assert!(!s.is_animating());
    assert_eq!(s.benefits().len(), 3);

    s.dispatch(FlowEvent::Confirm).unwrap();
    // First configuration step (account) is a still image.
    assert!(!s.is_animating());
    assert_eq!(s.ticks().active(), 0);
}

#[test]
fn autoplay_off_never_subscribes() {
    let opts = SessionOpts {
        autoplay: false,
        ..SessionOpts::default()
    };
    let mut s =
        OnboardingSession::with_parts(ManualTickSource::new(), BuiltinContent, BuiltinVisuals, opts);
    s.dispatch(FlowEvent::SelectPlatform(Platform::Mac)).unwrap();
    assert!(!s.is_animating());
    assert_eq!(s.ticks().active(), 0);
}

#[test]
fn copy_lights_indicator_for_a_window() {
    let mut s = session();
    let mut clip = RecordingClipboard::default();
    mac_terminal_step(&mut s);

    s.ticks_mut().advance_to(10.0).unwrap();
    assert_eq!(s.copy_command(&mut clip), CopyOutcome::Copied);
    assert_eq!(
        clip.copied,
        vec!["xattr -cr \"/Applications/Communokot Launcher.app\"".to_owned()]
    );
    assert!(s.is_copied());

    s.ticks_mut().advance_to(11.5).unwrap();
    assert!(s.is_copied());
    // Copying again restarts the window.
    s.copy_command(&mut clip);
    s.ticks_mut().advance_to(13.0).unwrap();
    assert!(s.is_copied());
    s.ticks_mut().advance_to(13.6).unwrap();
    assert!(!s.is_copied());
}

#[test]
fn step_change_clears_indicator() {
    let mut s = session();
    let mut clip = RecordingClipboard::default();
    mac_terminal_step(&mut s);
    s.copy_command(&mut clip);
    assert!(s.is_copied());
    s.dispatch(FlowEvent::Retreat).unwrap();
    assert!(!s.is_copied());
}

#[test]
fn copy_without_command_or_with_failing_clipboard() {
    let mut s = session();
    let mut clip = RecordingClipboard::default();
    assert_eq!(s.copy_command(&mut clip), CopyOutcome::NothingToCopy);

    s.dispatch(FlowEvent::SelectPlatform(Platform::Windows)).unwrap();
    assert_eq!(s.copy_command(&mut clip), CopyOutcome::NothingToCopy);

    let mut s = session();
    mac_terminal_step(&mut s);
    clip.fail = true;
    assert_eq!(s.copy_command(&mut clip), CopyOutcome::Failed);
    assert!(!s.is_copied());
    assert!(clip.copied.is_empty());
}

#[test]
fn open_action_forwards_download_link() {
    let mut s = session();
    let mut opener = RecordingOpener::default();
    assert_eq!(s.open_action(&mut opener), LinkOutcome::NoAction);

    s.dispatch(FlowEvent::SelectPlatform(Platform::Windows)).unwrap();
    assert_eq!(s.open_action(&mut opener), LinkOutcome::Opened);
    assert_eq!(
        opener.opened,
        vec!["https://github.com/theocode29/Communokot-Launcher/releases/latest".to_owned()]
    );

    opener.fail = true;
    assert_eq!(s.open_action(&mut opener), LinkOutcome::Failed);
    assert_eq!(s.state().phase, Phase::Touring);

    s.dispatch(FlowEvent::Advance).unwrap();
    assert_eq!(s.open_action(&mut opener), LinkOutcome::NoAction);
}

#[test]
fn going_home_drops_the_surface() {
    let mut s = session();
    mac_terminal_step(&mut s);
    assert!(s.is_animating());
    s.dispatch(FlowEvent::Home).unwrap();
    assert!(!s.is_animating());
    assert_eq!(s.ticks().active(), 0);
    assert_eq!(s.state().platform, None);
}
