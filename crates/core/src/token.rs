use tokio::sync::OnceCell;
use tracing::{debug, info, instrument};

use crate::error::HarnessError;
use crate::faker::DataGenerator;
use crate::models::{Credentials, Token, TokenResponse};
use crate::services::BooksApi;

/// Registers an API client with the books service and hands out its token.
///
/// The first successful registration is cached for the lifetime of the
/// provider. Every registration creates a client record on the server, so a
/// provider should live as long as the run that needs it. A failed
/// registration is not cached and is never retried here.
#[derive(Debug)]
pub struct TokenProvider {
    books: BooksApi,
    client_name: String,
    generator: DataGenerator,
    token: OnceCell<Token>,
}

impl TokenProvider {
    pub fn new(books: BooksApi, client_name: impl Into<String>, generator: DataGenerator) -> Self {
        Self {
            books,
            client_name: client_name.into(),
            generator,
            token: OnceCell::new(),
        }
    }

    /// Returns the cached token, registering a client on first use.
    pub async fn get_token(&self) -> Result<Token, HarnessError> {
        self.token
            .get_or_try_init(|| self.generate_token())
            .await
            .cloned()
    }

    /// Registers a fresh client and returns its token, bypassing the cache.
    #[instrument(skip(self))]
    pub async fn generate_token(&self) -> Result<Token, HarnessError> {
        let credentials = Credentials::new(&self.client_name, self.generator.email_address());
        debug!(email = ?credentials.client_email, "Registering API client");

        let response = self.books.register_client(&credentials).await?;
        if response.status != 201 {
            return Err(HarnessError::AuthenticationSetup {
                status: response.status,
                body: response.body,
            });
        }

        let parsed: TokenResponse =
            response
                .json()
                .map_err(|_| HarnessError::AuthenticationSetup {
                    status: response.status,
                    body: format!("no accessToken in response: {}", response.body),
                })?;

        info!("Registered API client");
        Ok(Token::new(parsed.access_token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Client;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(server: &MockServer) -> TokenProvider {
        TokenProvider::new(
            BooksApi::new(Client::new(), server.uri()),
            "Postman",
            DataGenerator::new(),
        )
    }

    #[tokio::test]
    async fn test_get_token_registers_once() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api-clients"))
            .and(body_partial_json(json!({ "clientName": "Postman" })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({ "accessToken": "tok-1" })),
            )
            .expect(1)
            .mount(&server)
            .await;
        let provider = provider(&server);

        // Act
        let first = provider.get_token().await.unwrap();
        let second = provider.get_token().await.unwrap();

        // Assert
        assert_eq!(first.as_str(), "tok-1");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_get_token_fails_setup_on_non_201() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api-clients"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(json!({ "error": "API client already registered." })),
            )
            .expect(2)
            .mount(&server)
            .await;
        let provider = provider(&server);

        let err = provider.get_token().await.unwrap_err();
        assert!(matches!(
            err,
            HarnessError::AuthenticationSetup { status: 409, ref body } if body.contains("already registered")
        ));

        // Failures are not cached
        assert!(provider.get_token().await.is_err());
    }

    #[tokio::test]
    async fn test_get_token_requires_access_token_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api-clients"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "token": "x" })))
            .mount(&server)
            .await;

        let err = provider(&server).get_token().await.unwrap_err();

        assert!(err.to_string().contains("no accessToken"));
    }

    #[tokio::test]
    async fn test_generate_token_bypasses_cache() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api-clients"))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({ "accessToken": "fresh" })),
            )
            .expect(3)
            .mount(&server)
            .await;
        let provider = provider(&server);

        provider.get_token().await.unwrap();
        provider.generate_token().await.unwrap();
        provider.generate_token().await.unwrap();
    }
}
