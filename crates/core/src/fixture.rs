use reqwest::Client;

use crate::config::Config;
use crate::error::HarnessError;
use crate::faker::DataGenerator;
use crate::models::Token;
use crate::services::{BooksApi, CharacterApi, EchoApi, NumberConversionApi, ObjectsApi};
use crate::token::TokenProvider;

/// Shared preconditions of a run, handed to every scenario.
///
/// Holds the HTTP client, configuration, data generator and the token
/// provider. The token is only registered when a scenario asks for it.
#[derive(Debug)]
pub struct Fixture {
    config: Config,
    client: Client,
    generator: DataGenerator,
    tokens: TokenProvider,
}

impl Fixture {
    pub fn new(config: Config) -> Result<Self, HarnessError> {
        let client = Client::builder()
            .user_agent(concat!("restcheck/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: Config, client: Client) -> Self {
        let generator = DataGenerator::new();
        let tokens = TokenProvider::new(
            BooksApi::new(client.clone(), config.services.books.clone()),
            config.client_name.clone(),
            generator.clone(),
        );
        Self {
            config,
            client,
            generator,
            tokens,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn generator(&self) -> &DataGenerator {
        &self.generator
    }

    /// Bearer token for the books API, registered on first use.
    pub async fn token(&self) -> Result<Token, HarnessError> {
        self.tokens.get_token().await
    }

    pub fn objects(&self) -> ObjectsApi {
        ObjectsApi::new(self.client.clone(), self.config.services.objects.clone())
    }

    pub fn books(&self) -> BooksApi {
        BooksApi::new(self.client.clone(), self.config.services.books.clone())
    }

    pub fn character(&self) -> CharacterApi {
        CharacterApi::new(self.client.clone(), self.config.services.character.clone())
    }

    pub fn echo(&self) -> EchoApi {
        EchoApi::new(self.client.clone(), self.config.services.basic_auth.clone())
    }

    pub fn number_conversion(&self) -> NumberConversionApi {
        NumberConversionApi::new(
            self.client.clone(),
            self.config.services.number_conversion.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mock_fixture;
    use serde_json::json;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_token_is_shared_across_calls() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api-clients"))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({ "accessToken": "shared" })),
            )
            .expect(1)
            .mount(&server)
            .await;
        let fixture = mock_fixture(&server.uri());

        let a = fixture.token().await.unwrap();
        let b = fixture.token().await.unwrap();

        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_client_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/books"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
        let fixture = mock_fixture(&server.uri());

        let response = fixture.books().list_books().await.unwrap();

        assert_eq!(response.status, 200);
    }

    #[test]
    fn test_clients_follow_config() {
        let fixture = mock_fixture("http://127.0.0.1:9");
        assert_eq!(fixture.config().services.character, "http://127.0.0.1:9/api");
        assert_eq!(fixture.config().client_name, "Postman");
    }
}
