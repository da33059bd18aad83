//! Contact Book - an in-memory address book with birthday reminders.
//!
//! Records hold a name, any number of ten-digit phone numbers and an
//! optional birthday. The directory files records by name and answers
//! "whose birthday is coming up this week".
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The `Record` aggregate
//! - **directory**: Name-keyed record store
//! - **birthdays**: Upcoming birthday computation
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **commands**: Text command parsing and dispatch

pub mod birthdays;
pub mod commands;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;

pub use birthdays::{UpcomingBirthdays, DEFAULT_WINDOW_DAYS};
pub use commands::{parse_input, Assistant, Command, Reply};
pub use config::Config;
pub use directory::Directory;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, DirectoryError, RecordError};
pub use models::Record;
