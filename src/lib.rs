//! A viewer for raw HTTP response bodies.
//!
//! The crate takes a stored response value (plain text, or a buffer-like
//! record of UTF-16 code units), normalizes it into displayable text, escapes
//! it for a markup surface and derives the state of the surrounding chrome:
//! whether there is anything to show and whether the action bar is visible.
//!
//! - [`value`]: [`ResponseValue`] and the normalizer
//! - [`escape`]: escaping before markup injection
//! - [`view_state`]: derived view state
//! - [`viewer`]: the [`ResponseRawViewer`] widget
//! - [`render`]: render list and backends
//! - [`ffi`]: C ABI for embedding hosts

pub mod config;
pub mod errors;
pub mod escape;
pub mod event;
pub mod ffi;
pub mod render;
pub mod value;
pub mod view_state;
pub mod viewer;

pub use config::{NormalizeMode, ViewerConfig, WrapMode};
pub use errors::ViewerError;
pub use value::{normalize, try_normalize, ResponseValue, UnsupportedShape};
pub use view_state::{actions_panel_class, has_content, DisplayState, ViewState};
pub use viewer::{ResponseRawViewer, ViewerId};
