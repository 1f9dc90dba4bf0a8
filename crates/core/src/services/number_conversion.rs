use reqwest::Client;

use crate::error::HarnessError;
use crate::request::RequestSpec;
use crate::response::ApiResponse;
use crate::soap::NumberToWords;

/// Client for the SOAP number conversion service.
#[derive(Debug, Clone)]
pub struct NumberConversionApi {
    client: Client,
    url: String,
}

impl NumberConversionApi {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub async fn number_to_words(&self, number: u64) -> Result<ApiResponse, HarnessError> {
        let envelope = NumberToWords::new(number).to_envelope()?;
        RequestSpec::post(&self.url, "")
            .xml(envelope)
            .send(&self.client)
            .await
    }
}
