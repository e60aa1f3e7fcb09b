use serde::{Deserialize, Serialize};

/// A request to be sent to the model provider.
///
/// The history is split by role into two independent lists. Pairing
/// between them is positional, nothing ties an input to its response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationalRequest {
    /// Previous user inputs, oldest first.
    pub past_user_inputs: Vec<String>,
    /// Previous assistant responses, oldest first.
    pub generated_responses: Vec<String>,
    /// The new user input.
    pub text: String,
}

impl ConversationalRequest {
    /// Creates a request without any history.
    #[inline]
    pub fn with_text<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}
