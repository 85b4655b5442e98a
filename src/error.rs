use thiserror::Error;

/// Errors raised while building or mounting the page.
///
/// Runtime input problems (out-of-range targets, re-entrant navigation, a
/// missing effect library) are not errors: they degrade to "nothing happens".
#[derive(Debug, Error)]
pub enum Error {
    #[error("section list must contain at least one section")]
    EmptySections,

    #[error("no global `{0}` available")]
    MissingGlobal(&'static str),

    #[error("element `#{0}` not found")]
    MissingElement(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("DOM call failed: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Error::Dom(message)
    }
}

impl From<Error> for wasm_bindgen::JsValue {
    fn from(err: Error) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
