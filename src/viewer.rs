//! The raw response viewer widget.
//!
//! [`ResponseRawViewer`] holds one response value per display session and
//! everything derived from it: the normalized text, the escaped markup for
//! the code block and the [`ViewState`] that drives the action bar and the
//! placeholder. Setting a value recomputes all of that synchronously and
//! returns the new view state. Painting is deferred: the viewer only marks
//! its render list dirty and rebuilds it when asked, either directly or
//! through [`ResponseRawViewer::render`].
//!
//! # Example
//!
//! ```
//! use response_raw_viewer::render::backends::markup::MarkupBackend;
//! use response_raw_viewer::viewer::ResponseRawViewer;
//!
//! let mut viewer = ResponseRawViewer::default();
//! let state = viewer.set_response_text("<script>alert(1)</script>");
//! assert!(state.has_content);
//!
//! let mut backend = MarkupBackend::new();
//! viewer.render(&mut backend).unwrap();
//! assert!(backend.output().contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
//! ```

use crate::config::{ViewerConfig, WrapMode};
use crate::errors::ViewerError;
use crate::escape::escape_for_markup_injection;
use crate::event::ViewerCommand;
use crate::render::backend::RenderBackend;
use crate::render::{ContentAction, DisplayItem, RenderList};
use crate::value::{normalize, try_normalize, ResponseValue};
use crate::view_state::{DisplayState, ViewState};
use bitflags::bitflags;
use std::fmt::Display;
use uuid::Uuid;

/// A unique identifier for a viewer instance, represented as a UUID.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewerId(Uuid);

impl ViewerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ViewerId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ViewerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

bitflags! {
    /// Parts of the render list that are out of date.
    struct DirtyFlags: u8 {
        const CONTENT = 0b001;
        const LAYOUT  = 0b010;
        const ACTIONS = 0b100;
    }
}

const ACTIONS_PANEL_ITEM: usize = 0;
const RAW_CONTENT_ITEM: usize = 1;
const PLACEHOLDER_ITEM: usize = 2;
const ITEM_COUNT: usize = 3;

pub struct ResponseRawViewer {
    id: ViewerId,
    config: ViewerConfig,

    /// Value as supplied by the host
    response: ResponseValue,
    /// Normalized text (`None` when nothing is set)
    content: Option<String>,
    /// Escaped text injected into the code block, empty when there is no content
    content_markup: String,
    view_state: ViewState,
    wrap: WrapMode,
    /// Elements in the `content-action` slot
    actions: Vec<ContentAction>,

    render_list: RenderList,
    dirty: DirtyFlags,
    /// Bumped on every rebuild of the render list
    scene_epoch: u64,
}

impl Default for ResponseRawViewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl ResponseRawViewer {
    pub fn new(config: ViewerConfig) -> Self {
        let wrap = WrapMode::from(config.wrap_text);
        let id = ViewerId::new();
        log::debug!("Viewer[{}]: created (wrap: {:?}, mode: {:?})", id, wrap, config.normalize_mode);

        Self {
            id,
            config,
            response: ResponseValue::Absent,
            content: None,
            content_markup: String::new(),
            view_state: ViewState::default(),
            wrap,
            actions: Vec::new(),
            render_list: RenderList::new(),
            dirty: DirtyFlags::all(),
            scene_epoch: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> ViewerId {
        self.id
    }

    #[inline]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Replaces the displayed response and returns the new view state.
    ///
    /// Unsupported shapes never fail here; they are shown as empty content.
    pub fn set_response_text<V: Into<ResponseValue>>(&mut self, value: V) -> ViewState {
        let value = value.into();
        if !value.is_supported() {
            log::warn!("Viewer[{}]: unsupported {} response value, displaying nothing", self.id, value.kind());
        }
        let content = normalize(&value);
        self.apply_response(value, content)
    }

    /// Replaces the displayed response using the configured normalize mode.
    ///
    /// In strict mode an unsupported value is rejected and the viewer keeps
    /// its previous response.
    pub fn try_set_response_text<V: Into<ResponseValue>>(&mut self, value: V) -> Result<ViewState, ViewerError> {
        let value = value.into();
        let content = try_normalize(&value, self.config.normalize_mode).inspect_err(|e| {
            log::warn!("Viewer[{}]: rejected response value: {}", self.id, e);
        })?;
        Ok(self.apply_response(value, content))
    }

    pub fn clear_response(&mut self) -> ViewState {
        self.set_response_text(ResponseValue::Absent)
    }

    fn apply_response(&mut self, value: ResponseValue, content: Option<String>) -> ViewState {
        let previous = self.view_state.display_state();

        self.view_state = ViewState::from_value(&value);
        self.content_markup = match content.as_deref() {
            Some(text) if self.view_state.has_content => escape_for_markup_injection(text),
            _ => String::new(),
        };
        self.response = value;
        self.content = content;
        self.dirty.insert(DirtyFlags::CONTENT);

        let current = self.view_state.display_state();
        if previous != current {
            log::debug!("Viewer[{}]: {} -> {}", self.id, previous, current);
        }
        log::trace!(
            "Viewer[{}]: {} response, {} chars displayed",
            self.id,
            self.response.kind(),
            self.content.as_deref().map_or(0, |s| s.chars().count())
        );

        self.view_state
    }

    /// The value as supplied by the host.
    #[inline]
    pub fn response_text(&self) -> &ResponseValue {
        &self.response
    }

    /// Normalized text, or `None` when nothing is set.
    #[inline]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Escaped markup injected into the code block.
    #[inline]
    pub fn content_markup(&self) -> &str {
        &self.content_markup
    }

    #[inline]
    pub fn has_response(&self) -> bool {
        self.view_state.has_content
    }

    #[inline]
    pub fn view_state(&self) -> ViewState {
        self.view_state
    }

    #[inline]
    pub fn display_state(&self) -> DisplayState {
        self.view_state.display_state()
    }

    #[inline]
    pub fn actions_panel_class(&self) -> &'static str {
        self.view_state.actions_panel_class
    }

    #[inline]
    pub fn wrap_text(&self) -> bool {
        self.wrap.is_wrapped()
    }

    #[inline]
    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap
    }

    pub fn set_wrap_text(&mut self, wrap: bool) {
        let wrap = WrapMode::from(wrap);
        if self.wrap != wrap {
            log::debug!("Viewer[{}]: wrap mode {:?} -> {:?}", self.id, self.wrap, wrap);
            self.wrap = wrap;
            self.dirty.insert(DirtyFlags::LAYOUT);
        }
    }

    pub fn add_content_action(&mut self, action: ContentAction) {
        self.actions.push(action);
        self.dirty.insert(DirtyFlags::ACTIONS);
    }

    pub fn clear_content_actions(&mut self) {
        if !self.actions.is_empty() {
            self.actions.clear();
            self.dirty.insert(DirtyFlags::ACTIONS);
        }
    }

    #[inline]
    pub fn content_actions(&self) -> &[ContentAction] {
        &self.actions
    }

    /// Applies a host command. Responses go through the configured normalize
    /// mode, so a strict viewer rejects unsupported values here as well.
    pub fn execute(&mut self, command: ViewerCommand) -> Result<(), ViewerError> {
        log::trace!("Viewer[{}]: execute {}", self.id, command);

        match command {
            ViewerCommand::SetResponse { value } => {
                self.try_set_response_text(value)?;
            }
            ViewerCommand::ClearResponse => {
                self.clear_response();
            }
            ViewerCommand::SetWrapText { wrap } => self.set_wrap_text(wrap),
            ViewerCommand::ToggleWrapText => self.set_wrap_text(!self.wrap_text()),
            ViewerCommand::AddContentAction { action } => self.add_content_action(action),
            ViewerCommand::ClearContentActions => self.clear_content_actions(),
        }
        Ok(())
    }

    #[inline]
    pub fn scene_epoch(&self) -> u64 {
        self.scene_epoch
    }

    /// Returns the render list
    #[inline]
    pub fn render_list(&self) -> &RenderList {
        &self.render_list
    }

    /// Rebuild the items of the render list that changed since the last
    /// rebuild. Items keep a fixed order: action bar, code block, placeholder.
    pub fn rebuild_render_list_if_needed(&mut self) {
        if self.dirty.is_empty() {
            return;
        }

        if self.render_list.items.len() != ITEM_COUNT {
            self.dirty = DirtyFlags::all();
            self.render_list.clear();
            for item in [self.actions_panel_item(), self.raw_content_item(), self.placeholder_item()] {
                self.render_list.add_command(item);
            }
        } else {
            if self.dirty.intersects(DirtyFlags::CONTENT | DirtyFlags::ACTIONS) {
                let item = self.actions_panel_item();
                self.render_list.items[ACTIONS_PANEL_ITEM] = item;
            }
            if self.dirty.intersects(DirtyFlags::CONTENT | DirtyFlags::LAYOUT) {
                let item = self.raw_content_item();
                self.render_list.items[RAW_CONTENT_ITEM] = item;
            }
            if self.dirty.contains(DirtyFlags::CONTENT) {
                let item = self.placeholder_item();
                self.render_list.items[PLACEHOLDER_ITEM] = item;
            }
        }

        log::debug!("Viewer[{}]: rebuilt render list ({:?})", self.id, self.dirty);

        self.dirty = DirtyFlags::empty();
        self.scene_epoch = self.scene_epoch.wrapping_add(1);
    }

    fn actions_panel_item(&self) -> DisplayItem {
        DisplayItem::ActionsPanel {
            class: self.view_state.actions_panel_class.to_string(),
            actions: self.actions.clone(),
        }
    }

    fn raw_content_item(&self) -> DisplayItem {
        DisplayItem::RawContent {
            markup: self.content_markup.clone(),
            wrap: self.wrap,
            hidden: !self.view_state.has_content,
        }
    }

    fn placeholder_item(&self) -> DisplayItem {
        DisplayItem::Placeholder {
            text: escape_for_markup_injection(&self.config.placeholder),
            hidden: self.view_state.has_content,
        }
    }

    /// Rebuilds the render list if needed and hands it to `backend`.
    pub fn render(&mut self, backend: &mut dyn RenderBackend) -> anyhow::Result<()> {
        self.rebuild_render_list_if_needed();
        log::trace!("Viewer[{}]: rendering epoch {} with {}", self.id, self.scene_epoch, backend.name());
        backend.render(&self.render_list)
    }
}
