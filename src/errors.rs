use crate::config::ViewerConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("Unsupported response value: {kind}")]
    UnsupportedValue { kind: &'static str },

    #[error("Invalid response JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid viewer configuration: {0}")]
    Config(#[from] ViewerConfigError),
}
