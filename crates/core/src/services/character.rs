use reqwest::Client;

use crate::error::HarnessError;
use crate::request::RequestSpec;
use crate::response::ApiResponse;

/// Client for the read-only character API.
#[derive(Debug, Clone)]
pub struct CharacterApi {
    client: Client,
    base_url: String,
}

impl CharacterApi {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn get(&self, id: u32) -> Result<ApiResponse, HarnessError> {
        RequestSpec::get(&self.base_url, &format!("/character/{id}"))
            .send(&self.client)
            .await
    }
}
