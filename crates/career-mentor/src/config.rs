//! Configuration read from the environment at start-up.

use std::env;

use career_mentor_hf_model::{HuggingFaceConfig, HuggingFaceConfigBuilder};

/// The variable holding the API bearer token. Required.
pub const API_KEY_VAR: &str = "HF_API_KEY";
/// The variable overriding the model name.
pub const MODEL_VAR: &str = "HF_MODEL";
/// The variable overriding the inference API base URL.
pub const BASE_URL_VAR: &str = "HF_BASE_URL";

/// Reads the provider configuration from the process environment.
///
/// Returns `None` if the API key is missing or empty.
pub fn config_from_env() -> Option<HuggingFaceConfig> {
    config_from_lookup(|name| env::var(name).ok())
}

/// Reads the provider configuration with a custom variable lookup.
pub fn config_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<HuggingFaceConfig> {
    let lookup = |name: &str| {
        lookup(name).filter(|value| !value.trim().is_empty())
    };

    let api_key = lookup(API_KEY_VAR)?;
    let mut builder = HuggingFaceConfigBuilder::with_api_key(api_key);
    if let Some(model) = lookup(MODEL_VAR) {
        builder = builder.with_model(model);
    }
    if let Some(base_url) = lookup(BASE_URL_VAR) {
        builder = builder.with_base_url(base_url);
    }
    Some(builder.build())
}
