use crate::prompting::{GeneratedPrompt, GenerationResponse, ImagePromptRequest};
use anyhow::{anyhow, Context, Result};
use dotenv::dotenv;

/// Environment variable naming the generation endpoint. A `.env` file works.
pub const API_URL_VAR: &str = "LISTING_API_URL";

pub struct GenerationClient {
    pub api_url: String,
    client: reqwest::Client,
}

impl GenerationClient {
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Result<Self> {
        dotenv().ok(); // Load .env file
        if let Ok(api_url) = dotenv::var(API_URL_VAR) {
            Ok(Self::new(&api_url))
        } else {
            Err(anyhow!("{API_URL_VAR} is not set"))
        }
    }

    /// Single POST, no retry. A non-2xx body still goes through the envelope
    /// so the endpoint's own message/error text reaches the caller.
    pub async fn generate_image_prompt(
        &self,
        request: &ImagePromptRequest,
    ) -> Result<GeneratedPrompt> {
        let response = self
            .client
            .post(&self.api_url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("POST {} failed", self.api_url))?;
        let envelope: GenerationResponse = response
            .json()
            .await
            .context("generation endpoint returned a non-JSON body")?;
        envelope.into_prompt()
    }

    pub async fn fetch_image(&self, image_url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(image_url)
            .send()
            .await
            .with_context(|| format!("GET {image_url} failed"))?;
        if !response.status().is_success() {
            return Err(anyhow!("failed to fetch image ({})", response.status()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}
