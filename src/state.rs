// Toggle state types shared by the DOM layer and host tests.
//
// Visibility is owned here as a two-valued enum; the `hidden`/`visible`
// class pair on an element is only ever a projection of it. Nothing in this
// module references `web_sys`.

use crate::constants::{
    CLICK_EVENTS, CLICK_GROUP_CLASS, HIDDEN_CLASS, HOVER_EVENTS, HOVER_GROUP_CLASS, VISIBLE_CLASS,
};
use std::fmt;
use std::str::FromStr;

/// Per-element visibility. Every registered element starts `Hidden`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Visible,
            Visibility::Visible => Visibility::Hidden,
        }
    }

    #[inline]
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }

    /// Class that must be present for this state.
    pub fn marker(self, markers: &Markers) -> &str {
        match self {
            Visibility::Hidden => &markers.hidden,
            Visibility::Visible => &markers.visible,
        }
    }

    /// Class that must be absent for this state.
    pub fn cleared_marker(self, markers: &Markers) -> &str {
        self.flipped().marker(markers)
    }
}

/// Which interaction drives a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleGroup {
    Click,
    Hover,
}

impl ToggleGroup {
    pub const ALL: [ToggleGroup; 2] = [ToggleGroup::Click, ToggleGroup::Hover];

    /// DOM events that flip an element of this group. Hover binds one handler
    /// to both enter and leave.
    #[inline]
    pub fn trigger_events(self) -> &'static [&'static str] {
        match self {
            ToggleGroup::Click => CLICK_EVENTS,
            ToggleGroup::Hover => HOVER_EVENTS,
        }
    }

    /// Opt-in class that selects elements of this group.
    pub fn selector_class(self, markers: &Markers) -> &str {
        match self {
            ToggleGroup::Click => &markers.click_group,
            ToggleGroup::Hover => &markers.hover_group,
        }
    }
}

impl fmt::Display for ToggleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleGroup::Click => f.write_str("click"),
            ToggleGroup::Hover => f.write_str("hover"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown toggle group {0:?} (expected click, hover, showhide or showhide_step)")]
pub struct ParseGroupError(pub String);

impl FromStr for ToggleGroup {
    type Err = ParseGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "click" | CLICK_GROUP_CLASS => Ok(ToggleGroup::Click),
            "hover" | HOVER_GROUP_CLASS => Ok(ToggleGroup::Hover),
            other => Err(ParseGroupError(other.to_string())),
        }
    }
}

/// Class names used for group selection and state projection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Markers {
    pub click_group: String,
    pub hover_group: String,
    pub hidden: String,
    pub visible: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            click_group: CLICK_GROUP_CLASS.to_string(),
            hover_group: HOVER_GROUP_CLASS.to_string(),
            hidden: HIDDEN_CLASS.to_string(),
            visible: VISIBLE_CLASS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkerError {
    #[error("marker class {0} must be a single non-empty class name")]
    Invalid(&'static str),
    #[error("hidden and visible markers must differ")]
    SameStateMarkers,
    #[error("click and hover groups must use different classes")]
    SameGroupMarkers,
}

impl Markers {
    /// Reject names that cannot be used as one class token, and pairs that
    /// would make the projection or group selection ambiguous.
    pub fn validate(&self) -> Result<(), MarkerError> {
        let fields = [
            ("click_group", &self.click_group),
            ("hover_group", &self.hover_group),
            ("hidden", &self.hidden),
            ("visible", &self.visible),
        ];
        for (field, name) in fields {
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(MarkerError::Invalid(field));
            }
        }
        if self.hidden == self.visible {
            return Err(MarkerError::SameStateMarkers);
        }
        if self.click_group == self.hover_group {
            return Err(MarkerError::SameGroupMarkers);
        }
        Ok(())
    }

    /// CSS selector for every element opting into `group`.
    pub fn selector(&self, group: ToggleGroup) -> String {
        format!(".{}", group.selector_class(self))
    }
}
