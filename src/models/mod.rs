//! Data models for the contact service.
//!
//! This module contains the row types persisted in SQLite and the draft
//! types accepted from API clients.

pub mod contact;
pub mod user;

pub use contact::{Contact, ContactDraft};
pub use user::{User, UserCredentials};
