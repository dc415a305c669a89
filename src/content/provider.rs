use crate::{
    content::model::{Benefit, Platform, StepList},
    foundation::error::TourlineResult,
};

/// Source of the step lists and benefit cards for each platform.
///
/// Implementations are pure: the same platform always yields the same content.
pub trait StepContentProvider {
    /// Installation tour shown right after platform selection.
    fn tour_steps(&self, platform: Platform) -> TourlineResult<StepList>;

    /// Launcher configuration guide shown after the benefits screen.
    fn configuration_steps(&self, platform: Platform) -> TourlineResult<StepList>;

    /// Benefit cards shown between tour and configuration.
    fn benefits(&self) -> Vec<Benefit>;
}
