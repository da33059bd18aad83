//! Data models for the contact book.
//!
//! A `Record` is the per-contact aggregate stored in the directory.

pub mod record;

pub use record::{Record, BIRTHDAY_NOT_AVAILABLE};
