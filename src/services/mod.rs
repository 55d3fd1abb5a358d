//! Application service layer.
//!
//! Services contain the business logic and orchestrate repositories. They
//! provide a clean boundary between the HTTP handlers and the data access
//! layer, which is what the mock-backed tests exercise.

mod auth_service;
mod contact_service;

pub use auth_service::{AuthService, AuthServiceImpl, AuthSession, MIN_PASSWORD_LEN};
pub use contact_service::{ContactPage, ContactService, ContactServiceImpl};
