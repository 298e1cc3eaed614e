use anyhow::{anyhow, Result};
use serde::Serialize;
use url::Url;

/// Request body for the image-prompt endpoint. Optional fields and option
/// flags are serialized only when set, which is what the endpoint expects.
#[derive(Clone, Debug, Serialize)]
pub struct ImagePromptRequest {
    pub product_url: String,
    pub ethnicity1: String,
    pub ethnicity2: String,
    pub model_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_category: Option<String>,
    #[serde(skip_serializing_if = "is_unset")]
    pub add_sneakers: bool,
    #[serde(skip_serializing_if = "is_unset")]
    pub add_socks: bool,
    #[serde(skip_serializing_if = "is_unset")]
    pub add_shoes: bool,
    #[serde(skip_serializing_if = "is_unset")]
    pub add_work_boots: bool,
    #[serde(skip_serializing_if = "is_unset")]
    pub show_movement: bool,
}

fn is_unset(flag: &bool) -> bool {
    !flag
}

impl ImagePromptRequest {
    pub fn new(product_url: &str) -> Result<Self> {
        Ok(Self {
            product_url: validate_product_url(product_url)?,
            ethnicity1: "any".to_string(),
            ethnicity2: "any".to_string(),
            model_count: 1,
            age_category: None,
            add_sneakers: false,
            add_socks: false,
            add_shoes: false,
            add_work_boots: false,
            show_movement: false,
        })
    }

    pub fn ethnicities(mut self, ethnicity1: &str, ethnicity2: &str) -> Self {
        self.ethnicity1 = ethnicity1.to_string();
        self.ethnicity2 = ethnicity2.to_string();
        self
    }

    pub fn model_count(mut self, model_count: u32) -> Self {
        self.model_count = model_count;
        self
    }

    pub fn age_category(mut self, age_category: &str) -> Self {
        self.age_category = Some(age_category.to_string());
        self
    }

    pub fn add_sneakers(mut self) -> Self {
        self.add_sneakers = true;
        self
    }

    pub fn add_socks(mut self) -> Self {
        self.add_socks = true;
        self
    }

    pub fn add_shoes(mut self) -> Self {
        self.add_shoes = true;
        self
    }

    pub fn add_work_boots(mut self) -> Self {
        self.add_work_boots = true;
        self
    }

    pub fn show_movement(mut self) -> Self {
        self.show_movement = true;
        self
    }
}

/// A usable product URL parses and points at a `/products/` page.
fn validate_product_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("Please enter a product URL"));
    }
    let url = Url::parse(trimmed).map_err(|e| anyhow!("invalid product URL {trimmed:?}: {e}"))?;
    if !url.path().contains("/products/") {
        return Err(anyhow!(
            "not a product URL (must contain /products/): {trimmed}"
        ));
    }
    Ok(url.into())
}
