use std::fmt::Debug;

const DEFAULT_MODEL: &str = "facebook/blenderbot-400M-distill";
const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Builder for [`HuggingFaceConfig`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HuggingFaceConfigBuilder {
    api_key: String,
    model: Option<String>,
    base_url: Option<String>,
}

impl HuggingFaceConfigBuilder {
    /// Creates a builder with the given API key.
    #[inline]
    pub fn with_api_key<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: api_key.into(),
            model: None,
            base_url: None,
        }
    }

    /// Sets the model to use.
    #[inline]
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets a custom base URL.
    #[inline]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> HuggingFaceConfig {
        HuggingFaceConfig {
            api_key: self.api_key,
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl Debug for HuggingFaceConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceConfigBuilder")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Configuration for the Hugging Face conversational provider.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HuggingFaceConfig {
    pub(crate) api_key: String,
    pub(crate) model: String,
    pub(crate) base_url: String,
}

impl HuggingFaceConfig {
    /// Returns the model name.
    #[inline]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the URL that conversational requests are posted to.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/pipeline/conversational/{}",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl Debug for HuggingFaceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HuggingFaceConfigBuilder::with_api_key("secret").build();
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(
            config.endpoint(),
            "https://api-inference.huggingface.co/pipeline/conversational/facebook/blenderbot-400M-distill"
        );
    }

    #[test]
    fn test_overrides() {
        let config = HuggingFaceConfigBuilder::with_api_key("secret")
            .with_model("org/tiny-chat")
            .with_base_url("http://127.0.0.1:8080/")
            .build();
        assert_eq!(
            config.endpoint(),
            "http://127.0.0.1:8080/pipeline/conversational/org/tiny-chat"
        );
    }

    #[test]
    fn test_debug_hides_api_key() {
        let builder = HuggingFaceConfigBuilder::with_api_key("hf_secret");
        assert!(!format!("{builder:?}").contains("hf_secret"));
        assert!(!format!("{:?}", builder.build()).contains("hf_secret"));
    }
}
