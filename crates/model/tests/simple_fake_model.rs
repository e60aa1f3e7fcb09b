use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::future::ready;

use career_mentor_model::{
    ConversationalRequest, ErrorKind, ModelProvider, ModelProviderError,
    ModelResponse,
};

#[derive(Debug)]
struct FakeModelProviderError(ErrorKind);

impl Display for FakeModelProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for FakeModelProviderError {}

impl ModelProviderError for FakeModelProviderError {
    fn kind(&self) -> ErrorKind {
        self.0
    }
}

struct FakeModelProvider;

impl ModelProvider for FakeModelProvider {
    type Error = FakeModelProviderError;

    fn send_request(
        &self,
        req: &ConversationalRequest,
    ) -> impl Future<Output = Result<ModelResponse, Self::Error>> + Send + 'static
    {
        let result = if req.text.is_empty() {
            Err(FakeModelProviderError(ErrorKind::Api))
        } else {
            Ok(ModelResponse::new(format!(
                "You said {} after {} turns",
                req.text,
                req.past_user_inputs.len() + req.generated_responses.len()
            )))
        };
        ready(result)
    }
}

mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completion() {
        let provider = FakeModelProvider;
        let req = ConversationalRequest {
            past_user_inputs: vec!["Hi".to_owned()],
            generated_responses: vec!["Hello!".to_owned()],
            text: "Good morning".to_owned(),
        };
        let resp = provider.send_request(&req).await.unwrap();
        assert_eq!(resp.generated_text, "You said Good morning after 2 turns");
    }

    #[tokio::test]
    async fn test_error() {
        let provider = FakeModelProvider;
        let req = ConversationalRequest::with_text("");
        let err = provider.send_request(&req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.to_string(), "API error");
    }

    #[test]
    fn test_request_field_names() {
        let req = ConversationalRequest::with_text("Hi");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "past_user_inputs": [],
                "generated_responses": [],
                "text": "Hi",
            })
        );
    }
}
