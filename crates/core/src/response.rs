use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::HarnessError;
use crate::schema::BodySchema;

/// A response captured by [`crate::request::RequestSpec::send`].
///
/// The `expect_*` helpers return `&Self` on success so checks can be chained
/// with `?`.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
    pub elapsed: Duration,
}

impl ApiResponse {
    pub fn expect_status(&self, expected: u16) -> Result<&Self, HarnessError> {
        if self.status == expected {
            Ok(self)
        } else {
            Err(HarnessError::UnexpectedStatus {
                expected,
                actual: self.status,
                body: self.body.clone(),
            })
        }
    }

    pub fn json_value(&self) -> Result<Value, HarnessError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HarnessError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Extracts the value at a dotted path, e.g. `data.capacity` or `0.id`.
    pub fn path(&self, path: &str) -> Result<Value, HarnessError> {
        let root = self.json_value()?;
        lookup(&root, path)
            .cloned()
            .ok_or_else(|| HarnessError::assertion(format!("No value at path '{path}'")))
    }

    /// Extracts a string at a dotted path.
    pub fn path_str(&self, path: &str) -> Result<String, HarnessError> {
        match self.path(path)? {
            Value::String(s) => Ok(s),
            other => Err(HarnessError::assertion(format!(
                "Expected a string at '{path}', found {other}"
            ))),
        }
    }

    pub fn expect_field(
        &self,
        path: &str,
        expected: impl Into<Value>,
    ) -> Result<&Self, HarnessError> {
        let expected = expected.into();
        let actual = self.path(path)?;
        if actual == expected {
            Ok(self)
        } else {
            Err(HarnessError::assertion(format!(
                "Expected '{path}' to be {expected}, found {actual}"
            )))
        }
    }

    /// Requires a non-empty string, array or object at `path`. An empty
    /// path checks the whole body.
    pub fn expect_non_empty(&self, path: &str) -> Result<&Self, HarnessError> {
        let value = self.path(path)?;
        let empty = match &value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            Value::Object(o) => o.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        };
        if empty {
            Err(HarnessError::assertion(format!(
                "Expected a non-empty value at '{path}', found {value}"
            )))
        } else {
            Ok(self)
        }
    }

    pub fn expect_body_contains_ignore_case(&self, needle: &str) -> Result<&Self, HarnessError> {
        if self.body.to_lowercase().contains(&needle.to_lowercase()) {
            Ok(self)
        } else {
            Err(HarnessError::assertion(format!(
                "Expected body to contain '{needle}': {}",
                self.body
            )))
        }
    }

    pub fn expect_within(&self, limit: Duration) -> Result<&Self, HarnessError> {
        if self.elapsed <= limit {
            Ok(self)
        } else {
            Err(HarnessError::SlowResponse {
                elapsed_ms: self.elapsed.as_millis(),
                limit_ms: limit.as_millis(),
            })
        }
    }

    pub fn expect_schema(&self, schema: &BodySchema) -> Result<&Self, HarnessError> {
        schema.validate(&self.json_value()?)?;
        Ok(self)
    }
}

/// Walks `path` segment by segment. Numeric segments index into arrays.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(root);
    }
    path.split('.').try_fold(root, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}
