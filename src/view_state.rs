//! Derived view state.
//!
//! Everything here is a pure function of the current [`ResponseValue`]. The
//! viewer recomputes it on every change and never persists it.

use crate::value::{normalize, ResponseValue};
use serde::Serialize;
use std::fmt::Display;

/// Class of the action bar when content is shown.
pub const ACTIONS_PANEL_CLASS: &str = "actions-panel";
/// Class of the action bar when there is nothing to act on.
pub const ACTIONS_PANEL_HIDDEN_CLASS: &str = "actions-panel hidden";

/// The two observable states of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DisplayState {
    /// Placeholder shown, action bar hidden.
    #[default]
    Empty,
    /// Escaped content shown, action bar visible.
    Populated,
}

impl Display for DisplayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayState::Empty => write!(f, "Empty"),
            DisplayState::Populated => write!(f, "Populated"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub has_content: bool,
    pub actions_panel_class: &'static str,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_has_content(false)
    }
}

impl ViewState {
    pub fn from_value(value: &ResponseValue) -> Self {
        Self::from_has_content(has_content(value))
    }

    pub fn from_has_content(has_content: bool) -> Self {
        Self {
            has_content,
            actions_panel_class: actions_panel_class(has_content),
        }
    }

    pub fn display_state(&self) -> DisplayState {
        if self.has_content {
            DisplayState::Populated
        } else {
            DisplayState::Empty
        }
    }
}

/// True when the value normalizes to a non-empty string.
pub fn has_content(value: &ResponseValue) -> bool {
    normalize(value).is_some_and(|s| !s.is_empty())
}

pub fn actions_panel_class(has_content: bool) -> &'static str {
    if has_content {
        ACTIONS_PANEL_CLASS
    } else {
        ACTIONS_PANEL_HIDDEN_CLASS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn has_content_follows_normalized_text() {
        assert!(!has_content(&ResponseValue::Absent));
        assert!(!has_content(&ResponseValue::from("")));
        assert!(!has_content(&ResponseValue::Buffer(vec![])));
        assert!(!has_content(&ResponseValue::from(json!({ "a": 1 }))));
        assert!(has_content(&ResponseValue::from("test")));
        assert!(has_content(&ResponseValue::Buffer(vec![104, 105])));
    }

    #[test]
    fn panel_class_only_toggles_hidden_suffix() {
        assert_eq!(actions_panel_class(true), "actions-panel");
        assert_eq!(actions_panel_class(false), "actions-panel hidden");
        assert_eq!(
            actions_panel_class(false).strip_suffix(" hidden"),
            Some(actions_panel_class(true))
        );
    }

    #[test]
    fn view_state_from_value() {
        let empty = ViewState::from_value(&ResponseValue::from(""));
        assert_eq!(empty, ViewState::default());
        assert_eq!(empty.display_state(), DisplayState::Empty);

        let populated = ViewState::from_value(&ResponseValue::from("hello"));
        assert!(populated.has_content);
        assert_eq!(populated.actions_panel_class, "actions-panel");
        assert_eq!(populated.display_state(), DisplayState::Populated);
    }

    #[test]
    fn view_state_serializes_for_hosts() {
        let out = serde_json::to_value(ViewState::from_has_content(true)).unwrap();
        assert_eq!(out, json!({ "has_content": true, "actions_panel_class": "actions-panel" }));
    }

    #[test]
    fn display_state_display() {
        assert_eq!(DisplayState::Empty.to_string(), "Empty");
        assert_eq!(DisplayState::Populated.to_string(), "Populated");
    }
}
