//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values a contact record
//! is built from: names, phone numbers and birthdays. Each value object is
//! validated at construction time, so an invalid phone or date can never be
//! stored on a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
