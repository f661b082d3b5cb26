//! Render list and display items.
//!
//! The viewer does not paint anything itself. Whenever its state changes it
//! rebuilds a [`RenderList`]: a short, ordered description of the three
//! regions of the widget (action bar, code block and "nothing to display"
//! placeholder). A [`RenderBackend`](crate::render::backend::RenderBackend)
//! later consumes the list.
//!
//! # Example
//!
//! ```rust
//! use response_raw_viewer::config::WrapMode;
//! use response_raw_viewer::render::{ContentAction, DisplayItem, RenderList};
//!
//! let mut list = RenderList::new();
//! list.add_command(DisplayItem::ActionsPanel {
//!     class: "actions-panel".to_string(),
//!     actions: vec![ContentAction::button("Copy", Some("Copy content to clipboard"))],
//! });
//! list.add_command(DisplayItem::RawContent {
//!     markup: "&lt;html&gt;".to_string(),
//!     wrap: WrapMode::NoWrap,
//!     hidden: false,
//! });
//! assert_eq!(list.items.len(), 2);
//! ```

use crate::config::WrapMode;
use crate::escape::escape_for_markup_injection;

/// Name of the insertion slot for host supplied actions.
pub const CONTENT_ACTION_SLOT: &str = "content-action";

/// An element placed by the host into the `content-action` slot.
///
/// The markup is trusted: it comes from the host application, not from the
/// response, and is inserted as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentAction {
    markup: String,
}

impl ContentAction {
    /// Wraps host supplied markup without touching it.
    pub fn raw<S: Into<String>>(markup: S) -> Self {
        Self { markup: markup.into() }
    }

    /// Builds a plain button. Label and title are escaped.
    pub fn button(label: &str, title: Option<&str>) -> Self {
        let title = title
            .map(|t| format!(r#" title="{}""#, escape_for_markup_injection(t)))
            .unwrap_or_default();

        Self {
            markup: format!(
                r#"<button slot="{}"{}>{}</button>"#,
                CONTENT_ACTION_SLOT,
                title,
                escape_for_markup_injection(label)
            ),
        }
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }
}

/// A single region of the viewer.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayItem {
    /// Container for the content actions.
    ActionsPanel {
        /// `actions-panel`, optionally followed by `hidden`.
        class: String,
        /// Slotted actions, in insertion order.
        actions: Vec<ContentAction>,
    },

    /// The code block holding the response.
    RawContent {
        /// Escaped response text, or empty when there is nothing to show.
        markup: String,
        /// Line-wrap layout.
        wrap: WrapMode,
        /// True when there is no content.
        hidden: bool,
    },

    /// The "nothing to display" message.
    Placeholder {
        /// Escaped placeholder text.
        text: String,
        /// True when content is shown.
        hidden: bool,
    },
}

/// A list of display items to be rendered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderList {
    /// Sequence of items, in paint order.
    pub items: Vec<DisplayItem>,
}

impl RenderList {
    /// Creates a new, empty render list.
    pub fn new() -> Self {
        RenderList { items: Vec::new() }
    }

    /// Adds a new display item to the list.
    pub fn add_command(&mut self, command: DisplayItem) {
        self.items.push(command);
    }

    /// Clears all display items from the list.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the markup of the code block, if the list has one.
    pub fn raw_content(&self) -> Option<&str> {
        self.items.iter().find_map(|item| match item {
            DisplayItem::RawContent { markup, .. } => Some(markup.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_escapes_label_and_title() {
        let action = ContentAction::button("<b>Copy</b>", Some(r#"say "hi""#));
        assert_eq!(
            action.markup(),
            r#"<button slot="content-action" title="say &quot;hi&quot;">&lt;b&gt;Copy&lt;/b&gt;</button>"#
        );
    }

    #[test]
    fn button_without_title() {
        let action = ContentAction::button("Copy", None);
        assert_eq!(action.markup(), r#"<button slot="content-action">Copy</button>"#);
    }

    #[test]
    fn raw_action_is_untouched() {
        let markup = r#"<paper-icon-button slot="content-action" icon="arc:content-copy"></paper-icon-button>"#;
        assert_eq!(ContentAction::raw(markup).markup(), markup);
    }

    #[test]
    fn raw_content_lookup_and_clear() {
        let mut list = RenderList::new();
        assert_eq!(list.raw_content(), None);

        list.add_command(DisplayItem::Placeholder { text: "x".into(), hidden: true });
        list.add_command(DisplayItem::RawContent {
            markup: "abc".into(),
            wrap: WrapMode::Wrap,
            hidden: false,
        });
        assert_eq!(list.raw_content(), Some("abc"));

        list.clear();
        assert!(list.items.is_empty());
    }
}
