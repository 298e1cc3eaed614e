use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::Value;

/// Response envelope shared by the generation endpoints.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub prompt: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl GenerationResponse {
    /// Resolves the envelope into the generated prompt. On failure the
    /// endpoint's `message` is preferred, then `error`, then a fixed string.
    pub fn into_prompt(self) -> Result<GeneratedPrompt> {
        if self.ok {
            if let Some(prompt) = self.prompt {
                return Ok(GeneratedPrompt { prompt });
            }
        }
        let reason = self
            .message
            .or(self.error)
            .unwrap_or_else(|| "Failed to generate prompt".to_string());
        Err(anyhow!(reason))
    }
}

/// The prompt JSON returned by a generation endpoint. Held by the caller as
/// the single current result; nothing here caches it.
#[derive(Clone, Debug)]
pub struct GeneratedPrompt {
    prompt: Value,
}

impl GeneratedPrompt {
    pub fn reference_image(&self) -> Option<&str> {
        self.prompt.get("reference_image").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.prompt
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.prompt).unwrap_or_else(|_| self.prompt.to_string())
    }
}
