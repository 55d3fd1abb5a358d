mod sqlite_contact_repository;
mod sqlite_user_repository;
mod traits;

pub use sqlite_contact_repository::SqliteContactRepository;
pub use sqlite_user_repository::SqliteUserRepository;
pub use traits::{ContactRepository, StoreResult, UserRepository};
