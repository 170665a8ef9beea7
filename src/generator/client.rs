use crate::config::GeneratorConfig;
use crate::error::ForgeError;
use reqwest::Client;
use serde_json::{Value, json};

/// A text-generation service that answers one prompt
#[allow(async_fn_in_trait)]
pub trait CompletionClient {
    /// Send a system prompt and a user prompt, returning the reply text
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ForgeError>;
}

/// Client for a Messages-style completion endpoint
pub struct MessagesClient {
    http: Client,
    api_key: String,
    config: GeneratorConfig,
}

impl MessagesClient {
    pub fn new(api_key: String, config: GeneratorConfig) -> Self {
        Self {
            http: Client::new(),
            api_key,
            config,
        }
    }

    /// Create a client reading the API key from the configured environment variable
    pub fn from_env(config: &GeneratorConfig) -> Result<Self, ForgeError> {
        match std::env::var(&config.api_key_env) {
            Ok(key) if !key.is_empty() => Ok(Self::new(key, config.clone())),
            _ => Err(ForgeError::MissingApiKey(config.api_key_env.clone())),
        }
    }

    fn request_body(&self, system: &str, prompt: &str) -> Value {
        json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "system": system,
            "messages": [{ "role": "user", "content": prompt }],
        })
    }
}

impl CompletionClient for MessagesClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ForgeError> {
        ::log::info!("Requesting completion from {} ({})", self.config.api_url, self.config.model);

        let resp = self
            .http
            .post(&self.config.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.config.api_version)
            .header("content-type", "application/json")
            .json(&self.request_body(system, prompt))
            .send()
            .await?;

        let status = resp.status();
        let body: Value = resp.json().await?;

        if let Some(err) = body.get("error") {
            return Err(ForgeError::Api(err.to_string()));
        }
        if !status.is_success() {
            return Err(ForgeError::Api(format!("HTTP {}", status)));
        }

        extract_text(&body)
    }
}

/// Text of the first content block of a Messages response
pub fn extract_text(response: &Value) -> Result<String, ForgeError> {
    response["content"][0]["text"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or(ForgeError::EmptyCompletion)
}
