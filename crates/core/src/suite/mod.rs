//! The built-in scenarios, grouped by service.

mod auth;
mod books;
mod character;
mod objects;
mod soap;

use crate::scenario::{Scenario, Selection};

/// Every scenario, in execution order.
pub fn all() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(objects::ListObjects),
        Box::new(objects::GetObjectById),
        Box::new(objects::CreateObject),
        Box::new(objects::UpdateObject),
        Box::new(objects::DeleteObject),
        Box::new(objects::ObjectFieldsByPath),
        Box::new(character::GetCharacter),
        Box::new(auth::BasicAuth),
        Box::new(auth::RegisterMissingName),
        Box::new(auth::RegisterMissingEmail),
        Box::new(auth::RegisterValid),
        Box::new(books::BooksSchema),
        Box::new(books::GetBookById),
        Box::new(books::ListOrders),
        Box::new(books::OrderWithInvalidToken),
        Box::new(books::OrderWithEmptyBody),
        Box::new(books::SubmitOrder),
        Box::new(soap::NumberToWordsScenario),
    ]
}

/// Scenarios matching `selection`, in execution order.
pub fn select(selection: &Selection) -> Vec<Box<dyn Scenario>> {
    all()
        .into_iter()
        .filter(|s| selection.matches(s.as_ref()))
        .collect()
}
