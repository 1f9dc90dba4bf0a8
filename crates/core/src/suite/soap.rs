use async_trait::async_trait;
use tracing::info;

use crate::error::HarnessError;
use crate::fixture::Fixture;
use crate::scenario::{Group, Scenario};
use crate::soap::number_to_words_result;

pub struct NumberToWordsScenario;

#[async_trait]
impl Scenario for NumberToWordsScenario {
    fn name(&self) -> &'static str {
        "soap_number_to_words"
    }

    fn group(&self) -> Group {
        Group::Soap
    }

    fn description(&self) -> &'static str {
        "NumberToWords(500) answers \"five hundred\""
    }

    async fn run(&self, fixture: &Fixture) -> Result<(), HarnessError> {
        let response = fixture.number_conversion().number_to_words(500).await?;
        response.expect_status(200)?;

        let result = number_to_words_result(&response.body)?.to_lowercase();
        info!(result = %result, "Extracted NumberToWordsResult");
        if !result.contains("five hundred") {
            return Err(HarnessError::assertion(format!(
                "Expected \"five hundred\", found \"{result}\""
            )));
        }
        Ok(())
    }
}
