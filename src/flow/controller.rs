use std::{fmt, num::NonZeroUsize, str::FromStr};

use crate::{
    content::{
        builtin::BuiltinContent,
        model::{Platform, Step, StepList},
        provider::StepContentProvider,
    },
    flow::sequencer::{Direction, Nav, SequencerState, StepSequencer},
    foundation::error::{TourlineError, TourlineResult},
};

/// Top-level stage of the onboarding flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Choosing a platform.
    Selecting,
    /// Walking the installation tour.
    Touring,
    /// Benefit cards.
    ShowingBenefits,
    /// Walking the launcher configuration guide.
    Configuring,
    /// Done.
    Completed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Selecting => "selecting",
            Self::Touring => "touring",
            Self::ShowingBenefits => "showing_benefits",
            Self::Configuring => "configuring",
            Self::Completed => "completed",
        })
    }
}

/// Observable flow state. `platform` is `None` exactly while selecting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FlowState {
    /// Current phase.
    pub phase: Phase,
    /// Chosen platform.
    pub platform: Option<Platform>,
}

/// User intent fed to [`FlowController::handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowEvent {
    /// Pick a platform on the selection screen.
    SelectPlatform(Platform),
    /// Next step.
    Advance,
    /// Previous step.
    Retreat,
    /// Leave the benefits screen for the configuration guide.
    Confirm,
    /// Start over after completion.
    Reset,
    /// Jump back to platform selection from anywhere.
    Home,
}

impl FromStr for FlowEvent {
    type Err = TourlineError;

    /// Accepts `select:<platform>`, `advance`, `retreat`, `confirm`, `reset`, `home`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(platform) = s.strip_prefix("select:") {
            return Ok(Self::SelectPlatform(platform.parse()?));
        }
        match s {
            "advance" | "next" => Ok(Self::Advance),
            "retreat" | "back" => Ok(Self::Retreat),
            "confirm" => Ok(Self::Confirm),
            "reset" => Ok(Self::Reset),
            "home" => Ok(Self::Home),
            other => Err(TourlineError::validation(format!(
                "unknown flow event '{other}'"
            ))),
        }
    }
}

/// What a handled event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// The event does not apply to the current state; nothing changed.
    Ignored,
    /// Moved within the current step list.
    StepChanged {
        /// Phase whose list moved.
        phase: Phase,
        /// Index before.
        from: usize,
        /// Index after.
        to: usize,
        /// Move direction.
        direction: Direction,
    },
    /// Entered another phase.
    PhaseChanged {
        /// State before.
        from: FlowState,
        /// State after.
        to: FlowState,
    },
}

impl Outcome {
    /// Whether the active step (and therefore its visual) may have changed.
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

#[derive(Clone, Debug)]
struct Walk {
    platform: Platform,
    steps: StepList,
}

#[derive(Clone, Debug)]
enum Stage {
    Selecting,
    Touring(Walk),
    ShowingBenefits { platform: Platform },
    Configuring(Walk),
    Completed { platform: Platform },
}

impl Stage {
    fn phase(&self) -> Phase {
        match self {
            Self::Selecting => Phase::Selecting,
            Self::Touring(_) => Phase::Touring,
            Self::ShowingBenefits { .. } => Phase::ShowingBenefits,
            Self::Configuring(_) => Phase::Configuring,
            Self::Completed { .. } => Phase::Completed,
        }
    }

    fn platform(&self) -> Option<Platform> {
        match self {
            Self::Selecting => None,
            Self::Touring(w) | Self::Configuring(w) => Some(w.platform),
            Self::ShowingBenefits { platform } | Self::Completed { platform } => Some(*platform),
        }
    }

    fn walk(&self) -> Option<&Walk> {
        match self {
            Self::Touring(w) | Self::Configuring(w) => Some(w),
            _ => None,
        }
    }
}

/// Five-phase onboarding state machine.
///
/// Every event either replaces the whole state or leaves it untouched; provider failures are
/// surfaced before anything changes.
#[derive(Clone, Debug)]
pub struct FlowController<P = BuiltinContent> {
    provider: P,
    stage: Stage,
    // Shared by both step lists; reset whenever a list is entered.
    seq: StepSequencer,
}

impl Default for FlowController<BuiltinContent> {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowController<BuiltinContent> {
    /// Controller over the built-in content, on the selection screen.
    pub fn new() -> Self {
        Self::with_provider(BuiltinContent)
    }
}

impl<P: StepContentProvider> FlowController<P> {
    /// Controller over custom content, on the selection screen.
    pub fn with_provider(provider: P) -> Self {
        Self {
            provider,
            stage: Stage::Selecting,
            seq: StepSequencer::new(NonZeroUsize::MIN),
        }
    }

    /// Apply one event.
    #[tracing::instrument(skip(self), fields(phase = %self.stage.phase()))]
    pub fn handle(&mut self, event: FlowEvent) -> TourlineResult<Outcome> {
        let outcome = match event {
            FlowEvent::SelectPlatform(platform) => match self.stage {
                Stage::Selecting => {
                    let steps = self.provider.tour_steps(platform)?;
                    self.begin(platform, steps, Stage::Touring)?
                }
                _ => Outcome::Ignored,
            },
            FlowEvent::Advance => self.on_advance(),
            FlowEvent::Retreat => self.on_retreat(),
            FlowEvent::Confirm => match self.stage {
                Stage::ShowingBenefits { platform } => {
                    let steps = self.provider.configuration_steps(platform)?;
                    self.begin(platform, steps, Stage::Configuring)?
                }
                _ => Outcome::Ignored,
            },
            FlowEvent::Reset => match self.stage {
                Stage::Completed { .. } => self.enter(Stage::Selecting),
                _ => Outcome::Ignored,
            },
            FlowEvent::Home => match self.stage {
                Stage::Selecting => Outcome::Ignored,
                _ => self.enter(Stage::Selecting),
            },
        };

        match &outcome {
            Outcome::Ignored => tracing::debug!("event ignored"),
            Outcome::StepChanged { from, to, .. } => tracing::debug!(from, to, "step changed"),
            Outcome::PhaseChanged { from, to } => {
                tracing::debug!(from = %from.phase, to = %to.phase, platform = ?to.platform, "phase changed");
            }
        }
        Ok(outcome)
    }

    fn on_advance(&mut self) -> Outcome {
        let (phase, platform) = match &self.stage {
            Stage::Touring(w) => (Phase::Touring, w.platform),
            Stage::Configuring(w) => (Phase::Configuring, w.platform),
            _ => return Outcome::Ignored,
        };
        let nav = self.seq.advance();
        match nav {
            Nav::Moved {
                from,
                to,
                direction,
            } => Outcome::StepChanged {
                phase,
                from,
                to,
                direction,
            },
            Nav::ExhaustedForward if phase == Phase::Touring => {
                self.enter(Stage::ShowingBenefits { platform })
            }
            Nav::ExhaustedForward => self.enter(Stage::Completed { platform }),
            Nav::ExhaustedBackward => Outcome::Ignored,
        }
    }

    fn on_retreat(&mut self) -> Outcome {
        let phase = match &self.stage {
            Stage::Touring(_) => Phase::Touring,
            Stage::Configuring(_) => Phase::Configuring,
            _ => return Outcome::Ignored,
        };
        let nav = self.seq.retreat();
        match nav {
            Nav::Moved {
                from,
                to,
                direction,
            } => Outcome::StepChanged {
                phase,
                from,
                to,
                direction,
            },
            // Backing out of the tour returns to selection; the configuration guide has no
            // way back from its first step.
            Nav::ExhaustedBackward if phase == Phase::Touring => self.enter(Stage::Selecting),
            Nav::ExhaustedBackward | Nav::ExhaustedForward => Outcome::Ignored,
        }
    }

    /// Rewind the sequencer onto `steps` and enter the stage walking them.
    fn begin(
        &mut self,
        platform: Platform,
        steps: StepList,
        stage: fn(Walk) -> Stage,
    ) -> TourlineResult<Outcome> {
        let len = NonZeroUsize::new(steps.len())
            .ok_or_else(|| TourlineError::validation("step list must not be empty"))?;
        self.seq.reset(len);
        Ok(self.enter(stage(Walk { platform, steps })))
    }

    fn enter(&mut self, next: Stage) -> Outcome {
        let from = self.state();
        self.stage = next;
        Outcome::PhaseChanged {
            from,
            to: self.state(),
        }
    }

    /// Pick a platform.
    pub fn select_platform(&mut self, platform: Platform) -> TourlineResult<Outcome> {
        self.handle(FlowEvent::SelectPlatform(platform))
    }

    /// Next step.
    pub fn advance(&mut self) -> TourlineResult<Outcome> {
        self.handle(FlowEvent::Advance)
    }

    /// Previous step.
    pub fn retreat(&mut self) -> TourlineResult<Outcome> {
        self.handle(FlowEvent::Retreat)
    }

    /// Leave the benefits screen.
    pub fn confirm(&mut self) -> TourlineResult<Outcome> {
        self.handle(FlowEvent::Confirm)
    }

    /// Start over after completion.
    pub fn reset(&mut self) -> TourlineResult<Outcome> {
        self.handle(FlowEvent::Reset)
    }

    /// Back to platform selection.
    pub fn home(&mut self) -> TourlineResult<Outcome> {
        self.handle(FlowEvent::Home)
    }

    /// Content provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P> FlowController<P> {
    /// Current phase and platform.
    pub fn state(&self) -> FlowState {
        FlowState {
            phase: self.stage.phase(),
            platform: self.stage.platform(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.stage.phase()
    }

    /// Chosen platform, `None` while selecting.
    pub fn platform(&self) -> Option<Platform> {
        self.stage.platform()
    }

    /// `"Windows"` or `"macOS"`, `None` while selecting.
    pub fn platform_label(&self) -> Option<&'static str> {
        self.platform().map(Platform::label)
    }

    /// Active step while touring or configuring.
    pub fn current_step(&self) -> Option<&Step> {
        self.stage
            .walk()
            .and_then(|w| w.steps.get(self.seq.index()))
    }

    /// Active step list while touring or configuring.
    pub fn steps(&self) -> Option<&StepList> {
        self.stage.walk().map(|w| &w.steps)
    }

    /// Sequencer snapshot while touring or configuring.
    pub fn sequencer_state(&self) -> Option<SequencerState> {
        self.stage.walk().map(|_| self.seq.state())
    }

    /// 1-based step number and total, for "Étape 2 sur 5" style headers.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.sequencer_state().map(|s| (s.index + 1, s.len))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/flow/controller.rs"]
mod tests;
