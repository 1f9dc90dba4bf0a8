//! Typed clients for the services under test.
//!
//! Each client only assembles and sends requests; status and body checks are
//! left to the caller so that negative cases can be asserted as well.

pub mod books;
pub mod character;
pub mod echo;
pub mod number_conversion;
pub mod objects;

pub use books::BooksApi;
pub use character::CharacterApi;
pub use echo::EchoApi;
pub use number_conversion::NumberConversionApi;
pub use objects::ObjectsApi;
