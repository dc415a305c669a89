use crate::{
    animation::{
        playback::{Playback, TickSource},
        timeline::FrameSample,
    },
    content::{
        builtin::BuiltinContent,
        model::{Benefit, Step},
        provider::StepContentProvider,
    },
    flow::controller::{FlowController, FlowEvent, FlowState, Outcome},
    foundation::error::TourlineResult,
    visuals::catalog::{BuiltinVisuals, VisualCatalog},
};

/// Options for [`OnboardingSession`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionOpts {
    /// How long the "copied" indicator stays lit after a successful copy.
    pub copied_indicator_secs: f64,
    /// Start the active step's demonstration automatically on every step change.
    pub autoplay: bool,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            copied_indicator_secs: 2.0,
            autoplay: true,
        }
    }
}

/// System clipboard.
///
/// Implementations report refusals as [`TourlineError::Collaborator`](crate::TourlineError):
///
/// ```
/// use tourline::{Clipboard, TourlineError, TourlineResult};
///
/// struct Locked;
///
/// impl Clipboard for Locked {
///     fn copy(&mut self, _text: &str) -> TourlineResult<()> {
///         Err(TourlineError::collaborator("clipboard is locked"))
///     }
/// }
///
/// let err = Locked.copy("ls").unwrap_err();
/// assert!(err.to_string().starts_with("collaborator error:"));
/// ```
pub trait Clipboard {
    /// Place `text` on the clipboard.
    fn copy(&mut self, text: &str) -> TourlineResult<()>;
}

/// Opens external links (browser, file manager).
pub trait LinkOpener {
    /// Open `destination`.
    fn open(&mut self, destination: &str) -> TourlineResult<()>;
}

/// Result of [`OnboardingSession::copy_command`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Command copied; the indicator is lit.
    Copied,
    /// The active step has no command.
    NothingToCopy,
    /// The clipboard refused; nothing changed.
    Failed,
}

/// Result of [`OnboardingSession::open_action`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Destination handed to the opener.
    Opened,
    /// The active step has no action.
    NoAction,
    /// The opener refused; nothing changed.
    Failed,
}

/// Flow controller plus the single visual surface and the copy indicator.
///
/// Every flow change restarts the surface from elapsed zero with the new step's
/// demonstration; the previous subscription is cancelled before the new one exists.
pub struct OnboardingSession<T, P = BuiltinContent, V = BuiltinVisuals> {
    opts: SessionOpts,
    flow: FlowController<P>,
    visuals: V,
    ticks: T,
    playback: Playback,
    copied_at: Option<f64>,
}

impl<T: TickSource> OnboardingSession<T> {
    /// Session over the built-in content and visuals.
    pub fn new(ticks: T) -> Self {
        Self::with_parts(ticks, BuiltinContent, BuiltinVisuals, SessionOpts::default())
    }
}

impl<T, P, V> OnboardingSession<T, P, V>
where
    T: TickSource,
    P: StepContentProvider,
    V: VisualCatalog,
{
    /// Session over custom content and visuals.
    pub fn with_parts(ticks: T, provider: P, visuals: V, opts: SessionOpts) -> Self {
        Self {
            opts,
            flow: FlowController::with_provider(provider),
            visuals,
            ticks,
            playback: Playback::new(),
            copied_at: None,
        }
    }

    /// Feed one event to the flow and resynchronize the surface if anything changed.
    pub fn dispatch(&mut self, event: FlowEvent) -> TourlineResult<Outcome> {
        let outcome = self.flow.handle(event)?;
        if outcome.is_change() {
            self.copied_at = None;
            self.sync_visual();
        }
        Ok(outcome)
    }

    fn sync_visual(&mut self) {
        self.playback.stop(&mut self.ticks);
        if !self.opts.autoplay {
            return;
        }
        let Some(visual) = self.flow.current_step().and_then(|s| s.visual) else {
            return;
        };
        match self.visuals.timeline(&visual) {
            Ok(Some(timeline)) => {
                self.playback.play(timeline, &mut self.ticks);
            }
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, ?visual, "visual unavailable; surface left empty"),
        }
    }

    /// Copy the active step's command and light the indicator.
    pub fn copy_command(&mut self, clipboard: &mut dyn Clipboard) -> CopyOutcome {
        let Some(command) = self.flow.current_step().and_then(|s| s.command.as_deref()) else {
            return CopyOutcome::NothingToCopy;
        };
        match clipboard.copy(command) {
            Ok(()) => {
                self.copied_at = Some(self.ticks.now());
                CopyOutcome::Copied
            }
            Err(err) => {
                tracing::warn!(%err, "clipboard copy failed");
                CopyOutcome::Failed
            }
        }
    }

    /// Open the active step's external link.
    pub fn open_action(&mut self, opener: &mut dyn LinkOpener) -> LinkOutcome {
        let Some(action) = self.flow.current_step().and_then(|s| s.action.as_ref()) else {
            return LinkOutcome::NoAction;
        };
        match opener.open(&action.destination) {
            Ok(()) => LinkOutcome::Opened,
            Err(err) => {
                tracing::warn!(%err, destination = %action.destination, "link open failed");
                LinkOutcome::Failed
            }
        }
    }

    /// Benefit cards from the content provider.
    pub fn benefits(&self) -> Vec<Benefit> {
        self.flow.provider().benefits()
    }
}

impl<T: TickSource, P, V> OnboardingSession<T, P, V> {
    /// Whether the "copied" indicator is lit at the tick source's current time.
    pub fn is_copied(&self) -> bool {
        self.copied_at
            .is_some_and(|at| self.ticks.now() - at < self.opts.copied_indicator_secs)
    }

    /// Frame computed on the most recent tick, `None` when the surface is empty.
    pub fn frame(&self) -> Option<FrameSample> {
        self.playback.latest()
    }

    /// Evaluate the surface at the tick source's current time.
    pub fn frame_now(&self) -> Option<FrameSample> {
        self.playback.sample_now(self.ticks.now())
    }

    /// Whether a demonstration is bound to the surface.
    pub fn is_animating(&self) -> bool {
        self.playback.is_playing()
    }

    /// Surface playback.
    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    /// Flow state.
    pub fn state(&self) -> FlowState {
        self.flow.state()
    }

    /// Active step.
    pub fn current_step(&self) -> Option<&Step> {
        self.flow.current_step()
    }

    /// Underlying flow controller.
    pub fn flow(&self) -> &FlowController<P> {
        &self.flow
    }

    /// Tick source.
    pub fn ticks(&self) -> &T {
        &self.ticks
    }

    /// Tick source, for driving the clock.
    pub fn ticks_mut(&mut self) -> &mut T {
        &mut self.ticks
    }

    /// Options in effect.
    pub fn opts(&self) -> &SessionOpts {
        &self.opts
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/onboarding.rs"]
mod tests;
