use async_trait::async_trait;

use crate::error::HarnessError;
use crate::fixture::Fixture;
use crate::models::Character;
use crate::scenario::{Group, Scenario};

pub struct GetCharacter;

#[async_trait]
impl Scenario for GetCharacter {
    fn name(&self) -> &'static str {
        "character_get"
    }

    fn group(&self) -> Group {
        Group::Character
    }

    fn description(&self) -> &'static str {
        "GET /character/1 returns Rick Sanchez"
    }

    async fn run(&self, fixture: &Fixture) -> Result<(), HarnessError> {
        let response = fixture.character().get(1).await?;
        let character: Character = response.expect_status(200)?.json()?;
        let expected = Character {
            id: 1,
            name: "Rick Sanchez".to_string(),
            status: "Alive".to_string(),
            species: "Human".to_string(),
            gender: "Male".to_string(),
        };
        if character != expected {
            return Err(HarnessError::assertion(format!(
                "Expected {expected:?}, found {character:?}"
            )));
        }
        Ok(())
    }
}
