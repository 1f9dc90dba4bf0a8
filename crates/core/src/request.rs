//! Request descriptors.
//!
//! A [`RequestSpec`] is plain data: method, target URL, headers, body and
//! optional basic credentials. Nothing touches the network until
//! [`RequestSpec::send`] is called.

use std::collections::BTreeMap;
use std::time::Instant;

use reqwest::{Client, Method};
use serde::Serialize;
use tracing::debug;

use crate::error::HarnessError;
use crate::models::Token;
use crate::response::ApiResponse;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_XML: &str = "text/xml; charset=utf-8";

#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
    pub basic_auth: Option<(String, String)>,
}

impl RequestSpec {
    /// Targets `path` under `base_url`. The path is appended as-is so that
    /// base URLs with a path component (e.g. `.../api`) keep it.
    pub fn new(method: Method, base_url: &str, path: &str) -> Self {
        let url = format!("{}{}", base_url.trim_end_matches('/'), path);
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "*/*".to_string());
        Self {
            method,
            url,
            headers,
            body: None,
            basic_auth: None,
        }
    }

    pub fn get(base_url: &str, path: &str) -> Self {
        Self::new(Method::GET, base_url, path)
    }

    pub fn post(base_url: &str, path: &str) -> Self {
        Self::new(Method::POST, base_url, path)
    }

    pub fn put(base_url: &str, path: &str) -> Self {
        Self::new(Method::PUT, base_url, path)
    }

    pub fn delete(base_url: &str, path: &str) -> Self {
        Self::new(Method::DELETE, base_url, path)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn bearer(self, token: &Token) -> Self {
        self.header("Authorization", format!("Bearer {}", token.as_str()))
    }

    /// Attaches the token when one is given.
    pub fn maybe_bearer(self, token: Option<&Token>) -> Self {
        match token {
            Some(token) => self.bearer(token),
            None => self,
        }
    }

    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some((username.into(), password.into()));
        self
    }

    /// Serializes `payload` as the JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, payload: &T) -> Result<Self, HarnessError> {
        self.body = Some(serde_json::to_string(payload)?);
        Ok(self.header("Content-Type", CONTENT_TYPE_JSON))
    }

    pub fn xml(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self.header("Content-Type", CONTENT_TYPE_XML)
    }

    /// Case-insensitive header lookup.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Sends the request and captures status, headers, body and elapsed time.
    pub async fn send(&self, client: &Client) -> Result<ApiResponse, HarnessError> {
        let mut builder = client.request(self.method.clone(), &self.url);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some((username, password)) = &self.basic_auth {
            builder = builder.basic_auth(username, Some(password));
        }
        if let Some(body) = &self.body {
            builder = builder.body(body.clone());
        }

        debug!(method = %self.method, url = %self.url, "Sending request");
        let start_time = Instant::now();
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;
        let elapsed = start_time.elapsed();
        debug!(
            method = %self.method,
            url = %self.url,
            status,
            elapsed_ms = elapsed.as_millis() as u64,
            "Received response"
        );

        Ok(ApiResponse {
            status,
            headers,
            body,
            elapsed,
        })
    }
}
