mod assets;

pub mod config;
pub mod error;
pub mod faker;
pub mod fixture;
pub mod models;
pub mod request;
pub mod response;
pub mod scenario;
pub mod schema;
pub mod services;
pub mod soap;
pub mod suite;
pub mod token;

#[cfg(test)]
mod test_utils;

pub use crate::assets::get_log_file;
pub use crate::error::HarnessError;
pub use crate::fixture::Fixture;
pub use crate::scenario::{Group, RunReport, Scenario, Selection, run_scenarios};
