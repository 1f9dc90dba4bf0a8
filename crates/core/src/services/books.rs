use reqwest::Client;
use serde::Serialize;

use crate::error::HarnessError;
use crate::models::{Credentials, Token};
use crate::request::RequestSpec;
use crate::response::ApiResponse;

/// Client for the books/orders API.
#[derive(Debug, Clone)]
pub struct BooksApi {
    client: Client,
    base_url: String,
}

impl BooksApi {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn list_books(&self) -> Result<ApiResponse, HarnessError> {
        RequestSpec::get(&self.base_url, "/books")
            .send(&self.client)
            .await
    }

    pub async fn get_book(&self, id: u32) -> Result<ApiResponse, HarnessError> {
        RequestSpec::get(&self.base_url, &format!("/books/{id}"))
            .send(&self.client)
            .await
    }

    /// `POST /api-clients`. Any status is returned to the caller.
    pub async fn register_client(
        &self,
        credentials: &Credentials,
    ) -> Result<ApiResponse, HarnessError> {
        RequestSpec::post(&self.base_url, "/api-clients")
            .json(credentials)?
            .send(&self.client)
            .await
    }

    pub async fn list_orders(&self, token: &Token) -> Result<ApiResponse, HarnessError> {
        RequestSpec::get(&self.base_url, "/orders")
            .bearer(token)
            .send(&self.client)
            .await
    }

    /// `POST /orders`. The payload is generic so malformed bodies can be sent.
    pub async fn submit_order<T: Serialize + ?Sized>(
        &self,
        token: &Token,
        payload: &T,
    ) -> Result<ApiResponse, HarnessError> {
        RequestSpec::post(&self.base_url, "/orders")
            .bearer(token)
            .json(payload)?
            .send(&self.client)
            .await
    }
}
