//! Rolo - a REST backend for multi-user contact management.
//!
//! This library provides an HTTP API where each user registers, logs in, and
//! manages a private address book: contact CRUD, favorites, comma-delimited
//! tags, and a filtered, paginated listing backed by SQLite.
//!
//! # Architecture
//!
//! - **models**: Row types and client-supplied drafts
//! - **domain**: Value objects and validation errors
//! - **error**: Error taxonomy and the HTTP response mapping
//! - **config**: Configuration management from environment variables
//! - **db**: SQLite pool setup and schema bootstrap
//! - **query**: Page parameters and the filtered listing query builder
//! - **tags**: Read-time tag extraction
//! - **auth**: Bearer tokens and password hashing
//! - **repositories**: Storage traits and their SQLite implementations
//! - **services**: Business logic between handlers and repositories
//! - **server**: Router, handlers, and middleware
//! - **metrics**: Request counters

pub mod auth;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod query;
pub mod repositories;
pub mod server;
pub mod services;
pub mod tags;

pub use config::Config;
pub use error::{ApiError, ApiResult, ConfigError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{Contact, ContactDraft, User};
pub use query::{ContactFilter, ContactQuery, Page, Pagination};
pub use server::{router, run_server, AppState};
