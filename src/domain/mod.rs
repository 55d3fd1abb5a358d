//! Domain value objects and types.
//!
//! This module contains the email value object and the validation errors
//! shared by every input-checking path. Validation happens at construction
//! time so invalid data never reaches the storage layer.

pub mod email;
pub mod errors;

pub use email::EmailAddress;
pub use errors::ValidationError;
