use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrontendError {
    #[error("No window available")]
    NoWindow,
    #[error("Failed to load image {src}: {reason}")]
    ImageLoad { src: String, reason: String },
    #[error("Failed to manage '{event}' listener: {reason}")]
    Listener { event: String, reason: String },
}

impl FrontendError {
    pub fn image_load(src: &str, err: &JsValue) -> Self {
        FrontendError::ImageLoad {
            src: src.to_string(),
            reason: describe(err),
        }
    }

    pub fn listener(event: &str, err: &JsValue) -> Self {
        FrontendError::Listener {
            event: event.to_string(),
            reason: describe(err),
        }
    }
}

/// Best-effort text for a thrown JS value (DOMException, string, anything else).
fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
