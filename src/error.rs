use thiserror::Error;

/// Errors raised while mounting or configuring the gallery.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("required element `{selector}` not found")]
    MissingElement { selector: String },

    #[error("element `{selector}` is not a {expected}")]
    WrongElementType {
        selector: String,
        expected: &'static str,
    },

    #[error("malformed gallery config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid gallery config: {0}")]
    InvalidConfig(String),

    /// A DOM call threw; carries the stringified JS value.
    #[error("dom call failed: {0}")]
    Js(String),
}

impl GalleryError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }
}

pub type Result<T, E = GalleryError> = std::result::Result<T, E>;

#[cfg(target_arch = "wasm32")]
mod js {
    use super::GalleryError;
    use wasm_bindgen::JsValue;

    impl From<JsValue> for GalleryError {
        fn from(value: JsValue) -> Self {
            match value.as_string() {
                Some(msg) => Self::Js(msg),
                None => Self::Js(format!("{value:?}")),
            }
        }
    }

    impl From<GalleryError> for JsValue {
        fn from(err: GalleryError) -> Self {
            JsValue::from_str(&err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_selector() {
        let err = GalleryError::missing("#imageModal");
        assert_eq!(err.to_string(), "required element `#imageModal` not found");
    }

    #[test]
    fn config_error_wraps_json_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: GalleryError = json_err.into();
        assert!(err.to_string().starts_with("malformed gallery config:"));
    }
}
