//! Demonstration timelines for each step visual.
//!
//! Coordinates are pixel offsets relative to each element's resting position; times are
//! fractions of the scene's cycle.

use crate::{
    animation::{
        dsl::{LayerBuilder, TimelineBuilder, stagger},
        ease::Ease,
        layer::{Layer, Property, Value},
        timeline::Timeline,
    },
    content::model::Platform,
    foundation::core::{Rgba8, Vec2},
    foundation::error::TourlineResult,
};

const INK: Rgba8 = Rgba8::from_u24(0x171717);
const ACCENT: Rgba8 = Rgba8::from_u24(0x007aff);

/// Letters of the Spotlight query, typed one after another.
pub(crate) const SPOTLIGHT_QUERY: &str = "Terminal";

fn keys<V: Into<Value>>(
    target: &str,
    property: Property,
    times: &[f64],
    values: impl IntoIterator<Item = V>,
) -> TourlineResult<LayerBuilder> {
    LayerBuilder::new(target, property).times_values(times, values)
}

fn looped<V: Into<Value>>(
    target: &str,
    property: Property,
    times: &[f64],
    values: impl IntoIterator<Item = V>,
) -> TourlineResult<Layer> {
    keys(target, property, times, values)?.looping().build()
}

fn xy(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

/// Fade and scale in over `start..start+0.02`, hold, fade and scale out over `end-0.02..end`.
fn show(target: &str, start: f64, end: f64) -> TourlineResult<[Layer; 2]> {
    let times = [start, start + 0.02, end - 0.02, end];
    Ok([
        looped(target, Property::Opacity, &times, [0.0, 1.0, 1.0, 0.0])?,
        looped(target, Property::Scale, &times, [0.95, 1.0, 1.0, 0.95])?,
    ])
}

/// Download button morphing into the app icon. Plays once.
pub(crate) fn download() -> TourlineResult<Timeline> {
    const T: [f64; 9] = [0.0, 0.1, 0.3, 0.4, 0.5, 0.6, 0.7, 0.9, 1.0];
    const CURSOR_T: [f64; 5] = [0.0, 0.2, 0.3, 0.5, 0.6];

    let morph = |property, values: [f64; 9]| -> TourlineResult<Layer> {
        keys("button", property, &T, values)?
            .ease(Ease::EaseInOut)
            .build()
    };
    let cursor = |property, values: [Value; 5]| -> TourlineResult<Layer> {
        keys("cursor", property, &CURSOR_T, values)?
            .ease(Ease::EaseInOut)
            .build()
    };
    let dark = Value::Color(INK);
    let light = Value::Color(Rgba8::WHITE);

    TimelineBuilder::new(4.5)
        .layer(morph(
            Property::Width,
            [140.0, 140.0, 130.0, 64.0, 64.0, 64.0, 64.0, 64.0, 140.0],
        )?)
        .layer(morph(
            Property::Height,
            [44.0, 44.0, 40.0, 64.0, 64.0, 64.0, 64.0, 64.0, 44.0],
        )?)
        .layer(morph(
            Property::Radius,
            [99.0, 99.0, 99.0, 18.0, 18.0, 18.0, 18.0, 18.0, 99.0],
        )?)
        .layer(
            keys(
                "button",
                Property::Background,
                &T,
                [dark, dark, dark, light, light, light, light, light, dark],
            )?
            .ease(Ease::EaseInOut)
            .build()?,
        )
        .layer(morph(
            Property::Scale,
            [0.0, 1.0, 0.9, 1.25, 0.95, 1.05, 1.0, 1.0, 0.0],
        )?)
        .layer(morph(
            Property::Opacity,
            [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0],
        )?)
        .layer(morph(
            Property::Rotate,
            [0.0, 0.0, 0.0, -5.0, 3.0, -1.0, 0.0, 0.0, 0.0],
        )?)
        .layer(
            keys(
                "label",
                Property::Opacity,
                &[0.0, 0.3, 0.32, 1.0],
                [1.0, 1.0, 0.0, 0.0],
            )?
            .build()?,
        )
        .layer(
            keys(
                "logo",
                Property::Opacity,
                &[0.0, 0.3, 0.35, 0.9, 1.0],
                [0.0, 0.0, 1.0, 1.0, 0.0],
            )?
            .build()?,
        )
        .layer(
            keys(
                "badge",
                Property::Scale,
                &[0.0, 0.45, 0.5, 0.6, 0.7, 0.9, 1.0],
                [0.0, 0.0, 0.0, 1.2, 1.0, 1.0, 0.0],
            )?
            .build()?,
        )
        .layer(cursor(
            Property::Translate,
            [
                xy(60.0, 80.0),
                xy(0.0, 15.0),
                xy(0.0, 15.0),
                xy(80.0, 80.0),
                xy(80.0, 80.0),
            ]
            .map(Value::Point),
        )?)
        .layer(cursor(
            Property::Scale,
            [1.0, 1.0, 0.85, 1.0, 1.0].map(Value::Scalar),
        )?)
        .layer(cursor(
            Property::Opacity,
            [0.0, 1.0, 1.0, 1.0, 0.0].map(Value::Scalar),
        )?)
        .build()
}

/// App icon dragged onto the Applications folder.
pub(crate) fn drag_drop() -> TourlineResult<Timeline> {
    const T: [f64; 4] = [0.0, 0.5, 0.6, 1.0];
    const HAND_T: [f64; 4] = [0.0, 0.5, 0.9, 1.0];

    TimelineBuilder::new(1.8)
        .repeat_delay(1.0)
        .layer(looped("app", Property::X, &T, [0.0, 80.0, 80.0, 0.0])?)
        .layer(looped("app", Property::Scale, &T, [1.0, 1.1, 0.0, 0.0])?)
        .layer(looped("app", Property::Rotate, &T, [0.0, 5.0, 0.0, 0.0])?)
        .layer(looped(
            "folder",
            Property::Scale,
            &[0.0, 0.4, 0.5, 1.0],
            [1.0, 1.0, 1.15, 1.0],
        )?)
        .layer(looped(
            "hand",
            Property::Translate,
            &HAND_T,
            [xy(35.0, 60.0), xy(115.0, 60.0), xy(115.0, 60.0), xy(35.0, 60.0)],
        )?)
        .layer(looped("hand", Property::Scale, &HAND_T, [1.0, 0.9, 1.0, 1.0])?)
        .build()
}

/// Context menu with "Open" highlighted.
pub(crate) fn right_click() -> TourlineResult<Timeline> {
    const MENU_T: [f64; 4] = [0.0, 0.15, 0.8, 1.0];
    const CURSOR_T: [f64; 4] = [0.0, 0.15, 0.5, 1.0];
    let clear = Value::Color(Rgba8::TRANSPARENT);
    let blue = Value::Color(ACCENT);

    TimelineBuilder::new(3.0)
        .repeat_delay(0.5)
        .layer(looped("menu", Property::Opacity, &MENU_T, [0.0, 1.0, 1.0, 0.0])?)
        .layer(looped("menu", Property::Scale, &MENU_T, [0.5, 1.0, 1.0, 0.5])?)
        .layer(looped(
            "open_item",
            Property::Background,
            &[0.3, 0.35, 0.7, 0.8],
            [clear, blue, blue, clear],
        )?)
        .layer(looped(
            "cursor",
            Property::Translate,
            &CURSOR_T,
            [xy(-40.0, 40.0), xy(40.0, 20.0), xy(50.0, 45.0), xy(-40.0, 40.0)],
        )?)
        .layer(looped("cursor", Property::Scale, &CURSOR_T, [1.0, 0.9, 0.9, 1.0])?)
        .layer(looped(
            "ripple",
            Property::Opacity,
            &[0.05, 0.133, 0.217],
            [0.0, 0.5, 0.0],
        )?)
        .layer(looped("ripple", Property::Scale, &[0.05, 0.217], [0.5, 1.5])?)
        .build()
}

/// Spotlight opened with the keyboard, "Terminal" typed, result shown.
pub(crate) fn spotlight() -> TourlineResult<Timeline> {
    const HINT_T: [f64; 5] = [0.0, 0.1, 0.25, 0.3, 1.0];
    const BAR_T: [f64; 5] = [0.35, 0.4, 0.9, 0.95, 1.0];
    const RESULT_T: [f64; 4] = [0.75, 0.8, 0.9, 0.95];

    let mut tl = TimelineBuilder::new(5.0)
        .layer(looped("shortcut", Property::Opacity, &HINT_T, [0.0, 1.0, 1.0, 0.0, 0.0])?)
        .layer(looped("shortcut", Property::Scale, &HINT_T, [1.0, 1.0, 0.95, 0.95, 1.0])?)
        .layer(looped("shortcut", Property::Y, &HINT_T, [0.0, 0.0, 1.0, 1.0, 0.0])?)
        .layer(looped("search_bar", Property::Scale, &BAR_T, [0.9, 1.0, 1.0, 0.95, 0.9])?)
        .layer(looped("search_bar", Property::Opacity, &BAR_T, [0.0, 1.0, 1.0, 0.0, 0.0])?)
        .layer(looped("search_bar", Property::Y, &BAR_T, [10.0, 0.0, 0.0, 0.0, 10.0])?);

    // Letters appear 0.03 of a cycle apart and share the fade-out.
    for i in 0..SPOTLIGHT_QUERY.chars().count() {
        let start = 0.45 + i as f64 * 0.03;
        tl = tl.layer(looped(
            &format!("query#{i}"),
            Property::Opacity,
            &[start, start + 0.01, 0.9, 1.0],
            [0.0, 1.0, 1.0, 0.0],
        )?);
    }

    tl.layer(looped("result", Property::Reveal, &RESULT_T, [0.0, 1.0, 1.0, 0.0])?)
        .layer(looped("result", Property::Opacity, &RESULT_T, [0.0, 1.0, 1.0, 0.0])?)
        .build()
}

/// Terminal window popping in, output appearing after two seconds. Plays once.
pub(crate) fn terminal() -> TourlineResult<Timeline> {
    const CYCLE: f64 = 2.3;
    let pop = [0.0, 0.3 / CYCLE];
    let enter = |property, values: [f64; 2]| -> TourlineResult<Layer> {
        keys("window", property, &pop, values)?
            .ease(Ease::EaseOut)
            .build()
    };

    TimelineBuilder::new(CYCLE)
        .layer(enter(Property::Scale, [0.9, 1.0])?)
        .layer(enter(Property::Opacity, [0.0, 1.0])?)
        .layer(enter(Property::Y, [10.0, 0.0])?)
        .layer(keys("output", Property::Reveal, &[2.0 / CYCLE, 1.0], [0.0, 1.0])?.build()?)
        .build()
}

/// SmartScreen warning bypassed through "more info" then "run anyway".
pub(crate) fn smart_screen() -> TourlineResult<Timeline> {
    const WINDOW_T: [f64; 5] = [0.0, 0.1, 0.9, 0.95, 1.0];
    const DETAIL_T: [f64; 5] = [0.0, 0.36, 0.4, 0.9, 0.95];
    const CURSOR_T: [f64; 8] = [0.0, 0.25, 0.32, 0.36, 0.65, 0.72, 0.77, 1.0];
    let reveal = [0.0, 0.0, 1.0, 1.0, 0.0];
    let link = xy(-20.0, 30.0);
    let button = xy(65.0, 82.0);
    let rest = xy(120.0, 150.0);

    TimelineBuilder::new(9.0)
        .repeat_delay(1.0)
        .layer(looped("dialog", Property::Opacity, &WINDOW_T, [0.0, 1.0, 1.0, 1.0, 0.0])?)
        .layer(looped("dialog", Property::Scale, &WINDOW_T, [0.96, 1.0, 1.0, 1.0, 0.96])?)
        .layer(looped(
            "more_info",
            Property::Scale,
            &[0.0, 0.32, 0.34, 0.36, 1.0],
            [1.0, 1.0, 0.9, 1.1, 1.0],
        )?)
        .layer(looped("details", Property::Reveal, &DETAIL_T, reveal)?)
        .layer(looped("details", Property::Opacity, &DETAIL_T, reveal)?)
        .layer(looped("actions", Property::Reveal, &DETAIL_T, reveal)?)
        .layer(looped("actions", Property::Opacity, &DETAIL_T, reveal)?)
        .layer(looped(
            "run_anyway",
            Property::Scale,
            &[0.0, 0.72, 0.73, 0.75, 0.77, 1.0],
            [1.0, 1.0, 1.0, 0.9, 1.1, 1.0],
        )?)
        .layer(
            keys(
                "cursor",
                Property::Translate,
                &CURSOR_T,
                [rest, link, link, link, button, button, button, rest],
            )?
            .ease(Ease::EaseInOut)
            .looping()
            .build()?,
        )
        .layer(
            keys(
                "cursor",
                Property::Scale,
                &CURSOR_T,
                [1.0, 1.0, 0.75, 1.15, 1.0, 0.75, 1.15, 1.0],
            )?
            .ease(Ease::EaseInOut)
            .looping()
            .build()?,
        )
        .build()
}

/// Installer icon double-clicked, with two click rings.
pub(crate) fn double_click() -> TourlineResult<Timeline> {
    const THIRD: f64 = 1.0 / 3.0;
    let ring = looped("ring", Property::Opacity, &[0.0, 0.133, 0.267], [0.0, 1.0, 0.0])?;

    TimelineBuilder::new(1.5)
        .repeat_delay(1.0)
        .layer(looped(
            "icon",
            Property::Scale,
            &[0.0, 0.4, 0.5, 0.6, 1.0],
            [1.0, 0.9, 1.0, 0.9, 1.0],
        )?)
        .layer(looped("selection", Property::Opacity, &[0.0, 0.5, 1.0], [0.0, 0.3, 0.0])?)
        .layer(
            keys(
                "cursor",
                Property::Translate,
                &[0.0, THIRD, 2.0 * THIRD, 1.0],
                [xy(30.0, 30.0), xy(0.0, -10.0), xy(0.0, -10.0), xy(30.0, 30.0)],
            )?
            .ease(Ease::EaseInOut)
            .looping()
            .build()?,
        )
        .layers(stagger(&ring, 2, 0.6, 0.15))
        .build()
}

/// Launcher settings panned down to the performance profiles.
pub(crate) fn mods() -> TourlineResult<Timeline> {
    TimelineBuilder::new(8.0)
        .repeat_delay(2.0)
        .layer(looped(
            "window",
            Property::Y,
            &[0.0, 0.4, 0.6, 1.0],
            [0.0, 0.0, -50.0, -50.0],
        )?)
        .build()
}

/// Locating the game directory through the launcher's folder picker.
pub(crate) fn files_tutorial(platform: Platform) -> TourlineResult<Timeline> {
    let (dialog, open_click): (&str, &[f64]) = match platform {
        Platform::Mac => ("goto_sheet", &[0.75, 0.77, 0.79, 0.81][..]),
        Platform::Windows => ("run_box", &[0.75, 0.77, 0.81, 1.0][..]),
    };

    TimelineBuilder::new(20.0)
        .layers(show("launcher", 0.15, 0.80)?)
        .layers(show("file_picker", 0.20, 0.65)?)
        .layers(show("shortcut", 0.22, 0.35)?)
        .layers(show(dialog, 0.35, 0.62)?)
        .layer(looped(
            "browse",
            Property::Scale,
            &[0.05, 0.1, 0.12, 0.15],
            [1.0, 1.0, 0.95, 1.0],
        )?)
        .layer(looped("typed_path", Property::Reveal, &[0.40, 0.55], [0.0, 1.0])?)
        .layer(looped("open_button", Property::Scale, open_click, [1.0, 1.0, 0.95, 1.0])?)
        .layer(looped("game_dir_field", Property::Opacity, &[0.85, 0.875], [0.0, 1.0])?)
        .layer(looped("success", Property::Scale, &[0.92, 0.93, 0.94], [0.0, 1.2, 1.0])?)
        .build()
}
