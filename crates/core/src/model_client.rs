use std::pin::Pin;
use std::sync::Arc;

use career_mentor_model::{
    ConversationalRequest, ModelProvider, ModelProviderError,
};
use tracing::Instrument;

use crate::transcript::ChatTurn;

/// Marks assistant turns that report a failure instead of an answer.
pub const WARNING_PREFIX: &str = "⚠️ ";

/// The settled result of one request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum InferenceOutcome {
    /// The text generated by the model.
    Answer(String),
    /// A description of what went wrong.
    Error(String),
}

impl InferenceOutcome {
    /// Converts the outcome into the assistant turn that shows it.
    pub fn into_turn(self) -> ChatTurn {
        match self {
            InferenceOutcome::Answer(text) => ChatTurn::assistant(text),
            InferenceOutcome::Error(message) => {
                ChatTurn::assistant(format!("{WARNING_PREFIX}{message}"))
            }
        }
    }
}

type BoxedOutcomeFuture = Pin<Box<dyn Future<Output = InferenceOutcome> + Send>>;
type HandlerFn =
    Arc<dyn Fn(ConversationalRequest) -> BoxedOutcomeFuture + Send + Sync>;

/// A wrapper around a model provider that provides a type-erased
/// interface for the other modules.
///
/// Provider errors never escape from here, they are folded into
/// [`InferenceOutcome::Error`].
#[derive(Clone)]
pub struct ModelClient {
    handler_fn: HandlerFn,
}

impl ModelClient {
    #[inline]
    pub fn new<P: ModelProvider + 'static>(provider: P) -> Self {
        // We have to erase the type `P`, since `ModelClient` doesn't have a
        // generic parameter and we don't want it either.
        let handler_fn: HandlerFn = Arc::new(move |req| {
            let fut = provider.send_request(&req);
            Box::pin(
                async move {
                    trace!("got a request: {req:?}");
                    match fut.await {
                        Ok(resp) => {
                            trace!("finished a request");
                            InferenceOutcome::Answer(resp.generated_text)
                        }
                        Err(err) => {
                            error!("got an error ({}): {err}", err.kind());
                            InferenceOutcome::Error(err.to_string())
                        }
                    }
                }
                .instrument(trace_span!("model client req")),
            )
        });
        Self { handler_fn }
    }

    /// Sends a request and waits for it to settle.
    #[inline]
    pub async fn send_request(
        &self,
        req: ConversationalRequest,
    ) -> InferenceOutcome {
        (self.handler_fn)(req).await
    }
}

#[cfg(test)]
mod tests {
    use career_mentor_model::ErrorKind;
    use career_mentor_test_model::{PresetResponse, TestModelProvider};

    use super::*;

    #[tokio::test]
    async fn test_send_request() {
        let mut model_provider = TestModelProvider::default();
        for _ in 0..3 {
            model_provider.add_response(PresetResponse::answer("How are you?"));
        }

        let model_client = ModelClient::new(model_provider.clone());

        for _ in 0..3 {
            let outcome = model_client
                .send_request(ConversationalRequest::with_text("Hi"))
                .await;
            assert_eq!(
                outcome,
                InferenceOutcome::Answer("How are you?".to_owned())
            );
        }
        assert_eq!(model_provider.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_error_handling() {
        let mut model_provider = TestModelProvider::default();
        model_provider.add_response(PresetResponse::failure(
            ErrorKind::HttpStatus,
            "HTTP Error: Status Code: 503.",
        ));
        let model_client = ModelClient::new(model_provider);

        let outcome = model_client
            .send_request(ConversationalRequest::with_text("Hi"))
            .await;
        assert_eq!(
            outcome,
            InferenceOutcome::Error("HTTP Error: Status Code: 503.".to_owned())
        );
    }

    #[test]
    fn test_into_turn() {
        let turn = InferenceOutcome::Error("API Error: model loading".to_owned())
            .into_turn();
        assert_eq!(turn.content(), "⚠️ API Error: model loading");

        let turn = InferenceOutcome::Answer("Hello".to_owned()).into_turn();
        assert_eq!(turn.content(), "Hello");
    }
}
