use reqwest::Client;
use tracing::info;

use crate::error::HarnessError;
use crate::models::NewObject;
use crate::request::RequestSpec;
use crate::response::ApiResponse;

/// Client for the generic `/objects` CRUD store.
#[derive(Debug, Clone)]
pub struct ObjectsApi {
    client: Client,
    base_url: String,
}

impl ObjectsApi {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn list(&self) -> Result<ApiResponse, HarnessError> {
        RequestSpec::get(&self.base_url, "/objects")
            .send(&self.client)
            .await
    }

    pub async fn get(&self, id: &str) -> Result<ApiResponse, HarnessError> {
        RequestSpec::get(&self.base_url, &format!("/objects/{id}"))
            .send(&self.client)
            .await
    }

    pub async fn create(&self, object: &NewObject) -> Result<ApiResponse, HarnessError> {
        RequestSpec::post(&self.base_url, "/objects")
            .json(object)?
            .send(&self.client)
            .await
    }

    pub async fn update(&self, id: &str, object: &NewObject) -> Result<ApiResponse, HarnessError> {
        RequestSpec::put(&self.base_url, &format!("/objects/{id}"))
            .json(object)?
            .send(&self.client)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<ApiResponse, HarnessError> {
        RequestSpec::delete(&self.base_url, &format!("/objects/{id}"))
            .send(&self.client)
            .await
    }

    /// Creates `object`, requires 200 and returns the server-assigned id.
    pub async fn create_id(&self, object: &NewObject) -> Result<String, HarnessError> {
        let response = self.create(object).await?;
        response.expect_status(200)?.expect_non_empty("id")?;
        let id = response.path_str("id")?;
        info!(id = %id, "Created object");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn laptop() -> NewObject {
        NewObject::new("Apple MacBook Pro 16")
            .with("year", 2019)
            .with("price", 1849.99)
    }

    #[tokio::test]
    async fn test_create_id_returns_server_id() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/objects"))
            .and(body_json(json!({
                "name": "Apple MacBook Pro 16",
                "data": { "year": 2019, "price": 1849.99 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "ff808181932badb6",
                "name": "Apple MacBook Pro 16",
                "data": { "year": 2019, "price": 1849.99 }
            })))
            .mount(&server)
            .await;
        let api = ObjectsApi::new(Client::new(), server.uri());

        // Act
        let id = api.create_id(&laptop()).await.unwrap();

        // Assert
        assert_eq!(id, "ff808181932badb6");
    }

    #[tokio::test]
    async fn test_create_id_fails_on_bad_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/objects"))
            .respond_with(ResponseTemplate::new(405).set_body_string("Method Not Allowed"))
            .mount(&server)
            .await;
        let api = ObjectsApi::new(Client::new(), server.uri());

        let err = api.create_id(&laptop()).await.unwrap_err();

        assert!(matches!(
            err,
            HarnessError::UnexpectedStatus {
                expected: 200,
                actual: 405,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_update_and_delete_target_the_id() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/objects/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "abc" })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/objects/abc"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "message": "Object with id = abc has been deleted." })),
            )
            .expect(1)
            .mount(&server)
            .await;
        let api = ObjectsApi::new(Client::new(), server.uri());

        let updated = api.update("abc", &laptop()).await.unwrap();
        let deleted = api.delete("abc").await.unwrap();

        assert_eq!(updated.status, 200);
        deleted
            .expect_field("message", "Object with id = abc has been deleted.")
            .unwrap();
    }
}
