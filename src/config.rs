//! Viewer configuration.
//!
//! `ViewerConfig` holds the initial presentation of a
//! [`ResponseRawViewer`](crate::viewer::ResponseRawViewer) and the policy used
//! for response shapes the normalizer does not recognise.
//!
//! # Examples
//!
//! ```rust
//! use response_raw_viewer::config::{NormalizeMode, ViewerConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = ViewerConfig::builder()
//!     .wrap_text(true)
//!     .placeholder("No response yet.")
//!     .normalize_mode(NormalizeMode::Strict)
//!     .build()?;
//! assert!(cfg.wrap_text);
//! # Ok(()) }
//! ```
//!
//! # Fields (summary)
//! - `wrap_text`: initial wrap mode (default: `false`).
//! - `placeholder`: text shown when there is nothing to display (default: `"Nothing to display."`).
//! - `normalize_mode`: lenient (default) or strict handling of unsupported values.

pub const DEFAULT_PLACEHOLDER: &str = "Nothing to display.";

/// How unsupported response shapes are treated by
/// [`try_set_response_text`](crate::viewer::ResponseRawViewer::try_set_response_text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizeMode {
    /// Unsupported values are displayed as empty content.
    #[default]
    Lenient,
    /// Unsupported values are rejected with an error.
    Strict,
}

/// Line-wrap layout of the code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Long lines scroll horizontally.
    #[default]
    NoWrap,
    /// Long lines break at the edge of the block.
    Wrap,
}

impl WrapMode {
    /// CSS `white-space` declaration for this layout.
    pub fn white_space(&self) -> &'static str {
        match self {
            WrapMode::NoWrap => "white-space: pre;",
            WrapMode::Wrap => "white-space: pre-wrap; word-wrap: break-word;",
        }
    }

    pub fn is_wrapped(&self) -> bool {
        matches!(self, WrapMode::Wrap)
    }
}

impl From<bool> for WrapMode {
    fn from(wrap: bool) -> Self {
        if wrap {
            WrapMode::Wrap
        } else {
            WrapMode::NoWrap
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub wrap_text: bool,
    pub placeholder: String,
    pub normalize_mode: NormalizeMode,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            wrap_text: false,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            normalize_mode: NormalizeMode::Lenient,
        }
    }
}

impl ViewerConfig {
    pub fn builder() -> ViewerConfigBuilder {
        ViewerConfigBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewerConfigBuilder {
    inner: ViewerConfig,
}

impl ViewerConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut ViewerConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn wrap_text(self, on: bool) -> Self { self.map(|c| c.wrap_text = on) }
    pub fn placeholder<S: Into<String>>(self, text: S) -> Self { self.map(|c| c.placeholder = text.into()) }
    pub fn normalize_mode(self, mode: NormalizeMode) -> Self { self.map(|c| c.normalize_mode = mode) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<ViewerConfig, ViewerConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewerConfigError {
    #[error("placeholder text must not be blank")]
    EmptyPlaceholder,
}

fn validate(c: &ViewerConfig) -> Result<(), ViewerConfigError> {
    if c.placeholder.trim().is_empty() {
        return Err(ViewerConfigError::EmptyPlaceholder);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ViewerConfig::default();
        assert!(!cfg.wrap_text);
        assert_eq!(cfg.placeholder, "Nothing to display.");
        assert_eq!(cfg.normalize_mode, NormalizeMode::Lenient);
    }

    #[test]
    fn builder_sets_fields() {
        let cfg = ViewerConfig::builder()
            .wrap_text(true)
            .placeholder("Empty")
            .normalize_mode(NormalizeMode::Strict)
            .build()
            .unwrap();
        assert!(cfg.wrap_text);
        assert_eq!(cfg.placeholder, "Empty");
        assert_eq!(cfg.normalize_mode, NormalizeMode::Strict);
    }

    #[test]
    fn blank_placeholder_is_rejected() {
        let err = ViewerConfig::builder().placeholder("  ").build().unwrap_err();
        assert_eq!(err, ViewerConfigError::EmptyPlaceholder);
        assert_eq!(err.to_string(), "placeholder text must not be blank");
    }

    #[test]
    fn wrap_mode_layouts() {
        assert_eq!(WrapMode::from(false), WrapMode::NoWrap);
        assert_eq!(WrapMode::from(true), WrapMode::Wrap);
        assert_eq!(WrapMode::NoWrap.white_space(), "white-space: pre;");
        assert!(WrapMode::Wrap.white_space().contains("pre-wrap"));
        assert!(WrapMode::Wrap.is_wrapped());
    }
}
