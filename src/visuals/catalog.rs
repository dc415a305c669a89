use crate::{
    animation::timeline::Timeline,
    content::model::VisualRef,
    foundation::error::TourlineResult,
    visuals::scenes,
};

/// Resolves a step's visual descriptor to a fresh timeline.
pub trait VisualCatalog {
    /// Timeline for `visual`, or `None` for static visuals.
    fn timeline(&self, visual: &VisualRef) -> TourlineResult<Option<Timeline>>;
}

/// Demonstrations for the built-in launcher content.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinVisuals;

impl VisualCatalog for BuiltinVisuals {
    fn timeline(&self, visual: &VisualRef) -> TourlineResult<Option<Timeline>> {
        let tl = match visual {
            VisualRef::Download => scenes::download()?,
            VisualRef::DoubleClick => scenes::double_click()?,
            VisualRef::SmartScreen => scenes::smart_screen()?,
            VisualRef::DragDrop => scenes::drag_drop()?,
            VisualRef::RightClick => scenes::right_click()?,
            VisualRef::Spotlight => scenes::spotlight()?,
            VisualRef::Terminal => scenes::terminal()?,
            VisualRef::Mods => scenes::mods()?,
            VisualRef::FilesTutorial(platform) => scenes::files_tutorial(*platform)?,
            VisualRef::Account | VisualRef::Ram | VisualRef::FilesIntro => return Ok(None),
        };
        Ok(Some(tl))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visuals/catalog.rs"]
mod tests;
