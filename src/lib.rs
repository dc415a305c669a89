//! Tourline drives a guided, multi-phase onboarding flow and the small looping demonstrations
//! that illustrate each of its steps.
//!
//! The crate has two engines and a thin session layer on top:
//!
//! - **Flow**: a [`StepSequencer`] walks one ordered [`StepList`]; the [`FlowController`] moves
//!   between platform selection, the installation tour, the benefits screen, configuration and
//!   completion in response to [`FlowEvent`]s.
//! - **Timeline**: a [`Timeline`] is a set of keyframed [`Layer`]s sharing one cycle. Sampling is
//!   a pure function of elapsed time; [`Playback`] binds a timeline to a [`TickSource`].
//! - **Session**: [`OnboardingSession`] owns the flow, restarts the single visual surface on every
//!   step change, and runs the copy-to-clipboard indicator.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same timeline and elapsed time always produce the same frame.
//! - **Validated at the boundary**: timelines read from JSON go through the same checks as
//!   timelines built in code.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod content;
pub(crate) mod flow;
pub(crate) mod session;
pub(crate) mod visuals;

pub use crate::foundation::core::{Rgba8, Vec2};
pub use crate::foundation::error::{TourlineError, TourlineResult};

pub use crate::animation::dsl::{LayerBuilder, TimelineBuilder, stagger};
pub use crate::animation::ease::Ease;
pub use crate::animation::layer::{
    ControlPoint, Interp, Layer, Lerp, Property, Value, ValueKind,
};
pub use crate::animation::playback::{
    ManualTickSource, Playback, SubscriptionId, TickListener, TickSource,
};
pub use crate::animation::timeline::{
    FrameSample, LayerPhase, LayerSample, Timeline, TimelineDef,
};
pub use crate::content::builtin::{
    BuiltinContent, MAC_GAME_DIR, MAC_QUARANTINE_COMMAND, REPO_URL, WINDOWS_GAME_DIR,
};
pub use crate::content::model::{ActionRef, Benefit, Platform, Step, StepList, VisualRef};
pub use crate::content::provider::StepContentProvider;
pub use crate::flow::controller::{FlowController, FlowEvent, FlowState, Outcome, Phase};
pub use crate::flow::sequencer::{Direction, Nav, SequencerState, StepSequencer};
pub use crate::session::onboarding::{
    Clipboard, CopyOutcome, LinkOpener, LinkOutcome, OnboardingSession, SessionOpts,
};
pub use crate::visuals::catalog::{BuiltinVisuals, VisualCatalog};
