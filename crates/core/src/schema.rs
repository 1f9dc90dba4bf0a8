//! JSON schema checks for response bodies.

use jsonschema::Validator;
use serde_json::Value;

use crate::assets::get_books_schema;
use crate::error::HarnessError;

/// A compiled JSON schema with a name used in failure messages.
pub struct BodySchema {
    name: String,
    validator: Validator,
}

impl BodySchema {
    pub fn compile(name: impl Into<String>, schema: &Value) -> Result<Self, HarnessError> {
        let name = name.into();
        let validator = jsonschema::validator_for(schema)
            .map_err(|e| HarnessError::Schema(format!("invalid schema '{name}': {e}")))?;
        Ok(Self { name, validator })
    }

    pub fn from_json_str(name: impl Into<String>, text: &str) -> Result<Self, HarnessError> {
        let schema: Value = serde_json::from_str(text)?;
        Self::compile(name, &schema)
    }

    /// Schema of the books API `GET /books` listing.
    pub fn books() -> Result<Self, HarnessError> {
        Self::from_json_str("books", get_books_schema())
    }

    /// Validates `instance`, reporting every violation in one message.
    pub fn validate(&self, instance: &Value) -> Result<(), HarnessError> {
        let errors: Vec<String> = self
            .validator
            .iter_errors(instance)
            .map(|e| e.to_string())
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(HarnessError::Schema(format!(
                "body does not match '{}': {}",
                self.name,
                errors.join("; ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_books_schema_accepts_listing() {
        let schema = BodySchema::books().unwrap();
        let listing = json!([
            { "id": 1, "name": "The Russian", "type": "fiction", "available": true },
            { "id": 2, "name": "Just as I Am", "type": "non-fiction", "available": false }
        ]);
        assert!(schema.validate(&listing).is_ok());
        assert!(schema.validate(&json!([])).is_ok());
    }

    #[test]
    fn test_books_schema_rejects_wrong_shapes() {
        let schema = BodySchema::books().unwrap();

        let not_a_list = json!({ "id": 1 });
        assert!(schema.validate(&not_a_list).is_err());

        let missing_field = json!([{ "id": 1, "name": "The Russian", "type": "fiction" }]);
        let err = schema.validate(&missing_field).unwrap_err();
        assert!(err.to_string().contains("available"));

        let bad_type = json!([{ "id": "1", "name": "X", "type": "poetry", "available": true }]);
        assert!(matches!(
            schema.validate(&bad_type),
            Err(HarnessError::Schema(msg)) if msg.contains("body does not match 'books'")
        ));
    }

    #[test]
    fn test_compile_rejects_invalid_schema() {
        let result = BodySchema::compile("broken", &json!({ "type": 12 }));
        assert!(matches!(result, Err(HarnessError::Schema(msg)) if msg.contains("broken")));
    }
}
