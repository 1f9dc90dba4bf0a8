use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Client registration payload for the books API.
///
/// Both fields are optional so that incomplete registrations can be sent
/// with the same type; absent fields are left out of the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
}

impl Credentials {
    pub fn new(client_name: impl Into<String>, client_email: impl Into<String>) -> Self {
        Self {
            client_name: Some(client_name.into()),
            client_email: Some(client_email.into()),
        }
    }

    pub fn name_only(client_name: impl Into<String>) -> Self {
        Self {
            client_name: Some(client_name.into()),
            client_email: None,
        }
    }
}

/// Bearer token issued by the books API.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep tokens out of logs
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
}

/// Error body returned by the books API, e.g. `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub book_id: u32,
    pub customer_name: String,
}

impl Order {
    pub fn new(book_id: u32, customer_name: impl Into<String>) -> Self {
        Self {
            book_id,
            customer_name: customer_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: String,
    pub created: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub available: bool,
}

/// Body sent to create or replace an object in the CRUD store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewObject {
    pub name: String,
    pub data: Map<String, Value>,
}

impl NewObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Map::new(),
        }
    }

    /// Adds a field to the open `data` mapping.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}

/// Object as stored by the CRUD service. `data` may be null for some
/// seeded records.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenericObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub species: String,
    pub gender: String,
}
