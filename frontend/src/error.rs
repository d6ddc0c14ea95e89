use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no {0} element")]
    MissingElement(&'static str),
    #[error("browser rejected {operation}: {message}")]
    Js {
        operation: &'static str,
        message: String,
    },
}

impl DomError {
    pub(crate) fn js(operation: &'static str, value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        DomError::Js { operation, message }
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("bundled page content is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
