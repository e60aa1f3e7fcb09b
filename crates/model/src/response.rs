use serde::{Deserialize, Serialize};

/// A successful response from the model provider.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelResponse {
    /// The text generated by the model.
    pub generated_text: String,
}

impl ModelResponse {
    /// Creates a response with the given text.
    #[inline]
    pub fn new<S: Into<String>>(generated_text: S) -> Self {
        Self {
            generated_text: generated_text.into(),
        }
    }
}
