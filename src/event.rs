//! Commands a host can send to a viewer.
//!
//! Hosts that drive the viewer from a message loop (or across the FFI
//! boundary) can express every property change as a [`ViewerCommand`] and
//! hand it to [`ResponseRawViewer::execute`](crate::viewer::ResponseRawViewer::execute).

use crate::render::ContentAction;
use crate::value::ResponseValue;
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq)]
pub enum ViewerCommand {
    // ****************************************
    // ** Content
    /// Replace the displayed response
    SetResponse { value: ResponseValue },
    /// Drop the displayed response
    ClearResponse,

    // ****************************************
    // ** Presentation
    /// Switch line wrapping on or off
    SetWrapText { wrap: bool },
    /// Flip line wrapping
    ToggleWrapText,

    // ****************************************
    // ** Content-action slot
    /// Append an element to the action bar
    AddContentAction { action: ContentAction },
    /// Remove all elements from the action bar
    ClearContentActions,
}

impl Display for ViewerCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewerCommand::SetResponse { value } => write!(f, "SetResponse({})", value.kind()),
            ViewerCommand::ClearResponse => write!(f, "ClearResponse"),
            ViewerCommand::SetWrapText { wrap } => write!(f, "SetWrapText({wrap})"),
            ViewerCommand::ToggleWrapText => write!(f, "ToggleWrapText"),
            ViewerCommand::AddContentAction { .. } => write!(f, "AddContentAction"),
            ViewerCommand::ClearContentActions => write!(f, "ClearContentActions"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_display() {
        let cmd = ViewerCommand::SetResponse { value: ResponseValue::from("x") };
        assert_eq!(cmd.to_string(), "SetResponse(text)");
        assert_eq!(ViewerCommand::SetWrapText { wrap: true }.to_string(), "SetWrapText(true)");
        assert_eq!(ViewerCommand::ClearResponse.to_string(), "ClearResponse");
    }

    #[test]
    fn command_equality_and_debug() {
        let a = ViewerCommand::AddContentAction { action: ContentAction::button("Copy", None) };
        let b = a.clone();
        assert_eq!(a, b);
        assert!(format!("{:?}", a).contains("AddContentAction"));
    }
}
