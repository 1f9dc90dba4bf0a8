use async_trait::async_trait;

use crate::error::HarnessError;
use crate::fixture::Fixture;
use crate::models::{ApiErrorBody, Credentials};
use crate::scenario::{Group, Scenario};

async fn expect_registration_error(
    fixture: &Fixture,
    credentials: &Credentials,
    expected: &str,
) -> Result<(), HarnessError> {
    let response = fixture.books().register_client(credentials).await?;
    // The service answers these with 200 or a 4xx; a server error never counts
    if !(200..500).contains(&response.status) {
        return Err(HarnessError::assertion(format!(
            "Expected error '{expected}' with status 200 or 4xx, got status {}: {}",
            response.status, response.body
        )));
    }
    let body: ApiErrorBody = response.json()?;
    if body.error != expected {
        return Err(HarnessError::assertion(format!(
            "Expected error '{expected}', found '{}' (status {})",
            body.error, response.status
        )));
    }
    Ok(())
}

pub struct BasicAuth;

#[async_trait]
impl Scenario for BasicAuth {
    fn name(&self) -> &'static str {
        "basic_auth"
    }

    fn group(&self) -> Group {
        Group::Auth
    }

    fn description(&self) -> &'static str {
        "Echo service accepts the configured basic credentials"
    }

    async fn run(&self, fixture: &Fixture) -> Result<(), HarnessError> {
        let response = fixture.echo().basic_auth(&fixture.config().basic_auth).await?;
        response.expect_status(200)?;
        Ok(())
    }
}

pub struct RegisterMissingName;

#[async_trait]
impl Scenario for RegisterMissingName {
    fn name(&self) -> &'static str {
        "register_missing_name"
    }

    fn group(&self) -> Group {
        Group::Auth
    }

    fn description(&self) -> &'static str {
        "Registering with an empty body is rejected for the missing name"
    }

    async fn run(&self, fixture: &Fixture) -> Result<(), HarnessError> {
        expect_registration_error(
            fixture,
            &Credentials::default(),
            "Invalid or missing client name.",
        )
        .await
    }
}

pub struct RegisterMissingEmail;

#[async_trait]
impl Scenario for RegisterMissingEmail {
    fn name(&self) -> &'static str {
        "register_missing_email"
    }

    fn group(&self) -> Group {
        Group::Auth
    }

    fn description(&self) -> &'static str {
        "Registering without an email is rejected for the missing email"
    }

    async fn run(&self, fixture: &Fixture) -> Result<(), HarnessError> {
        let credentials = Credentials::name_only(&fixture.config().client_name);
        expect_registration_error(fixture, &credentials, "Invalid or missing client email.").await
    }
}

pub struct RegisterValid;

#[async_trait]
impl Scenario for RegisterValid {
    fn name(&self) -> &'static str {
        "register_valid"
    }

    fn group(&self) -> Group {
        Group::Auth
    }

    fn description(&self) -> &'static str {
        "Registering with name and fresh email returns 201 and a token"
    }

    async fn run(&self, fixture: &Fixture) -> Result<(), HarnessError> {
        let credentials = Credentials::new(
            &fixture.config().client_name,
            fixture.generator().email_address(),
        );
        let response = fixture.books().register_client(&credentials).await?;
        response.expect_status(201)?.expect_non_empty("accessToken")?;
        Ok(())
    }
}
