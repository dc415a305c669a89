use std::{fmt, ops::Deref, str::FromStr, sync::Arc};

use crate::foundation::error::{TourlineError, TourlineResult};

/// Operating system the user installs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Microsoft Windows.
    Windows,
    /// Apple macOS.
    Mac,
}

impl Platform {
    /// Human-facing name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Mac => "macOS",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Platform {
    type Err = TourlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(Self::Windows),
            "mac" | "macos" | "osx" => Ok(Self::Mac),
            other => Err(TourlineError::validation(format!(
                "unknown platform '{other}' (expected 'windows' or 'mac')"
            ))),
        }
    }
}

/// Link attached to a step ("download" buttons).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActionRef {
    /// Button text.
    pub label: String,
    /// URL handed to the link opener.
    pub destination: String,
}

/// Demonstration shown next to a step; resolved to a timeline by a visual catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualRef {
    /// Progress bar filling up, then a completion badge.
    Download,
    /// Cursor double-clicking a file icon.
    DoubleClick,
    /// Security dialog with the "more info" / "run anyway" detour.
    SmartScreen,
    /// Dragging the app into the Applications folder.
    DragDrop,
    /// Context menu "Open".
    RightClick,
    /// Spotlight search typing "Terminal".
    Spotlight,
    /// Terminal window with the command.
    Terminal,
    /// Launcher account screen.
    Account,
    /// Launcher memory settings.
    Ram,
    /// Launcher performance profile picker.
    Mods,
    /// Launcher Java and game directory settings.
    FilesIntro,
    /// Locating the game directory on the given platform.
    FilesTutorial(Platform),
}

/// One immutable unit of the onboarding flow.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Step {
    /// Identifier, unique within its list.
    pub id: u32,
    /// Heading.
    pub title: String,
    /// Explanatory text.
    pub body: String,
    /// Optional external link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionRef>,
    /// Optional copyable command or path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Optional demonstration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual: Option<VisualRef>,
}

impl Step {
    /// Step with text only.
    pub fn new(id: u32, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            action: None,
            command: None,
            visual: None,
        }
    }

    /// Attach an external link.
    pub fn with_action(mut self, label: impl Into<String>, destination: impl Into<String>) -> Self {
        self.action = Some(ActionRef {
            label: label.into(),
            destination: destination.into(),
        });
        self
    }

    /// Attach a copyable command.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Attach a demonstration.
    pub fn with_visual(mut self, visual: VisualRef) -> Self {
        self.visual = Some(visual);
        self
    }
}

/// Ordered, non-empty, shared list of steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepList(Arc<[Step]>);

impl StepList {
    /// Wrap `steps`, rejecting an empty list.
    pub fn new(steps: Vec<Step>) -> TourlineResult<Self> {
        if steps.is_empty() {
            return Err(TourlineError::validation("step list must not be empty"));
        }
        Ok(Self(steps.into()))
    }

    /// Number of steps; never zero.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Deref for StepList {
    type Target = [Step];

    fn deref(&self) -> &[Step] {
        &self.0
    }
}

impl serde::Serialize for StepList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.0[..], serializer)
    }
}

impl<'de> serde::Deserialize<'de> for StepList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let steps = Vec::<Step>::deserialize(deserializer)?;
        Self::new(steps).map_err(serde::de::Error::custom)
    }
}

/// Selling point shown between the tour and the configuration guide.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Benefit {
    /// Heading.
    pub title: String,
    /// Explanatory text.
    pub body: String,
}

impl Benefit {
    /// Build a benefit card.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/model.rs"]
mod tests;
