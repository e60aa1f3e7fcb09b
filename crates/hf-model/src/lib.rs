//! A model provider for the Hugging Face conversational inference API.

#[macro_use]
extern crate tracing;

mod config;
mod proto;

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

use career_mentor_model::{
    ConversationalRequest, ErrorKind, ModelProvider, ModelProviderError,
    ModelResponse,
};
use reqwest::{Client, header};

pub use config::{HuggingFaceConfig, HuggingFaceConfigBuilder};
use proto::ResponseShape;

const UNRECOGNIZED_RESPONSE_MESSAGE: &str = "Sorry, I couldn't generate a response. Please check your API Key and terminal logs.";

/// Error type for [`HuggingFaceProvider`].
#[derive(Debug)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Error {
    fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    fn http_status(status: u16) -> Self {
        Self::new(
            format!(
                "HTTP Error: The API call failed. Status Code: {status}. \
                 Please check your Hugging Face API key and verify the \
                 model is accessible."
            ),
            ErrorKind::HttpStatus,
        )
    }

    fn connection(err: reqwest::Error) -> Self {
        Self::new(format!("Connection Error: {err}"), ErrorKind::Connection)
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Hugging Face conversational model provider.
#[derive(Clone, Debug)]
pub struct HuggingFaceProvider {
    client: Client,
    config: Arc<HuggingFaceConfig>,
}

impl HuggingFaceProvider {
    /// Creates a new `HuggingFaceProvider` with the given configuration.
    #[inline]
    pub fn new(config: HuggingFaceConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }
}

impl ModelProvider for HuggingFaceProvider {
    type Error = Error;

    fn send_request(
        &self,
        req: &ConversationalRequest,
    ) -> impl Future<Output = Result<ModelResponse, Self::Error>> + Send + 'static
    {
        let payload = proto::create_request(req);
        let resp_fut = self
            .client
            .post(self.config.endpoint())
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.config.api_key),
            )
            .header(header::CONTENT_TYPE, "application/json")
            .json(&payload)
            .send();

        async move {
            let resp = resp_fut.await.map_err(Error::connection)?;

            let status = resp.status();
            if !status.is_success() {
                return Err(Error::http_status(status.as_u16()));
            }

            let body = resp.text().await.map_err(Error::connection)?;
            trace!("got response body: {body}");

            match ResponseShape::decode(&body) {
                ResponseShape::Generated(text) => Ok(ModelResponse::new(text)),
                ResponseShape::ApiError(message) => Err(Error::new(
                    format!("API Error: {message}"),
                    ErrorKind::Api,
                )),
                ResponseShape::Unrecognized => {
                    error!("unrecognized response body: {body}");
                    Err(Error::new(
                        UNRECOGNIZED_RESPONSE_MESSAGE,
                        ErrorKind::UnrecognizedResponse,
                    ))
                }
            }
        }
    }
}
