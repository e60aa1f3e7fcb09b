use std::error::Error;

use crate::error::ErrorKind;
use crate::request::ConversationalRequest;
use crate::response::ModelResponse;

/// The error type for a model provider.
///
/// The `Display` output of the error is shown to the user as is, so it
/// should be a complete sentence describing what went wrong.
pub trait ModelProviderError: Error + Send + Sync + 'static {
    /// Returns the kind of this error.
    fn kind(&self) -> ErrorKind;
}

/// A type that represents a model provider, which is the entry for
/// sending conversational requests to a model.
///
/// Once the provider is created, it should behave like a stateless object.
/// It can still have internal state, but callers should not rely on it,
/// and the provider should be prepared for being dropped anytime.
pub trait ModelProvider: Send + Sync {
    /// The error type that may be returned by the provider.
    type Error: ModelProviderError;

    /// Sends a request to the model.
    ///
    /// Implementations must not retry: a failure is reported immediately
    /// through the returned error.
    fn send_request(
        &self,
        req: &ConversationalRequest,
    ) -> impl Future<Output = Result<ModelResponse, Self::Error>> + Send + 'static;
}
