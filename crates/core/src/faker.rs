//! Synthetic values for request payloads.

use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;

/// Generates realistic-looking random values.
///
/// Values are pseudo-unique per call, which is enough to avoid colliding with
/// records left behind by earlier runs. Nothing is guaranteed across runs.
#[derive(Debug, Clone, Default)]
pub struct DataGenerator;

impl DataGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Returns a syntactically valid email address on a reserved domain,
    /// with a numeric tag in the local part.
    pub fn email_address(&self) -> String {
        let email: String = SafeEmail().fake();
        let tag: u32 = (1000u32..1_000_000).fake();
        match email.split_once('@') {
            Some((local, domain)) => format!("{local}{tag}@{domain}"),
            None => email,
        }
    }

    /// Returns a "First Last" name.
    pub fn customer_name(&self) -> String {
        Name().fake()
    }
}
