//! Scenarios and the sequential runner.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::HarnessError;
use crate::fixture::Fixture;

/// The service a scenario exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Objects,
    Character,
    Auth,
    Books,
    Soap,
}

impl Group {
    pub const ALL: [Group; 5] = [
        Group::Objects,
        Group::Character,
        Group::Auth,
        Group::Books,
        Group::Soap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Objects => "objects",
            Group::Character => "character",
            Group::Auth => "auth",
            Group::Books => "books",
            Group::Soap => "soap",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Group {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Group::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown scenario group: {s}"))
    }
}

/// A single linear check: arrange, act, assert.
#[async_trait]
pub trait Scenario: Send + Sync {
    /// Unique, snake_case name of the scenario.
    fn name(&self) -> &'static str;

    fn group(&self) -> Group;

    /// One line describing what is checked.
    fn description(&self) -> &'static str;

    async fn run(&self, fixture: &Fixture) -> Result<(), HarnessError>;
}

/// Which scenarios to run. Empty selection matches everything.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub group: Option<Group>,
    pub filter: Option<String>,
}

impl Selection {
    pub fn matches(&self, scenario: &dyn Scenario) -> bool {
        let group_ok = self.group.is_none_or(|g| g == scenario.group());
        let filter_ok = self
            .filter
            .as_deref()
            .is_none_or(|f| scenario.name().contains(f));
        group_ok && filter_ok
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Passed,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub name: &'static str,
    pub group: Group,
    pub outcome: Outcome,
    pub elapsed: Duration,
}

impl ScenarioResult {
    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }
}

pub type Timestamp = DateTime<Local>;

#[derive(Debug, Clone)]
pub struct RunReport {
    pub started_at: Timestamp,
    pub results: Vec<ScenarioResult>,
}

impl RunReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn result(&self, name: &str) -> Option<&ScenarioResult> {
        self.results.iter().find(|r| r.name == name)
    }
}

/// Runs scenarios one after another. A failure is recorded and the run
/// moves on to the next scenario.
pub async fn run_scenarios(scenarios: &[Box<dyn Scenario>], fixture: &Fixture) -> RunReport {
    let started_at = Local::now();
    let mut results = Vec::with_capacity(scenarios.len());

    for scenario in scenarios {
        let start_time = Instant::now();
        let outcome = match scenario.run(fixture).await {
            Ok(()) => {
                info!(scenario = scenario.name(), group = %scenario.group(), "Scenario passed");
                Outcome::Passed
            }
            Err(e) => {
                warn!(scenario = scenario.name(), group = %scenario.group(), error = %e, "Scenario failed");
                Outcome::Failed(e.to_string())
            }
        };
        results.push(ScenarioResult {
            name: scenario.name(),
            group: scenario.group(),
            outcome,
            elapsed: start_time.elapsed(),
        });
    }

    RunReport {
        started_at,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mock_fixture;

    struct Always(&'static str, Group, bool);

    #[async_trait]
    impl Scenario for Always {
        fn name(&self) -> &'static str {
            self.0
        }

        fn group(&self) -> Group {
            self.1
        }

        fn description(&self) -> &'static str {
            "test double"
        }

        async fn run(&self, _fixture: &Fixture) -> Result<(), HarnessError> {
            if self.2 {
                Ok(())
            } else {
                Err(HarnessError::assertion("boom"))
            }
        }
    }

    #[test]
    fn test_group_parse_and_display() {
        assert_eq!("Books".parse::<Group>().unwrap(), Group::Books);
        assert_eq!(Group::Soap.to_string(), "soap");
        assert!("nope".parse::<Group>().is_err());
    }

    #[test]
    fn test_selection_matches() {
        let scenario = Always("orders_submit", Group::Books, true);
        assert!(Selection::default().matches(&scenario));
        assert!(
            Selection {
                group: Some(Group::Books),
                filter: Some("orders".to_string())
            }
            .matches(&scenario)
        );
        assert!(
            !Selection {
                group: Some(Group::Auth),
                filter: None
            }
            .matches(&scenario)
        );
        assert!(
            !Selection {
                group: None,
                filter: Some("objects".to_string())
            }
            .matches(&scenario)
        );
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_the_run() {
        let fixture = mock_fixture("http://127.0.0.1:9");
        let scenarios: Vec<Box<dyn Scenario>> = vec![
            Box::new(Always("first", Group::Objects, true)),
            Box::new(Always("second", Group::Objects, false)),
            Box::new(Always("third", Group::Soap, true)),
        ];

        let report = run_scenarios(&scenarios, &fixture).await;

        assert_eq!(report.results.len(), 3);
        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_success());
        assert_eq!(
            report.result("second").unwrap().outcome,
            Outcome::Failed("Assertion failed: boom".to_string())
        );
        assert!(report.result("third").unwrap().passed());
    }
}
