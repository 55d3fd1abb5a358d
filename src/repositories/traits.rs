use crate::models::{Contact, ContactDraft, User, UserCredentials};
use crate::query::{ContactFilter, Page};
use async_trait::async_trait;

/// Storage result type. Repositories report raw storage failures; the
/// service layer decides what the client gets to see.
pub type StoreResult<T> = Result<T, sqlx::Error>;

/// Repository for user accounts.
///
/// Emails are expected pre-normalized (trimmed, lowercased) so lookups and
/// the unique index agree on casing.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account and return the stored row.
    async fn create(&self, email: &str, password_hash: &str) -> StoreResult<User>;

    /// Look up login credentials by email.
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<UserCredentials>>;

    /// Look up an account by id.
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>>;
}

/// Repository for contacts.
///
/// Every operation is scoped by the owning user; a contact belonging to
/// someone else is indistinguishable from one that does not exist.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert a new contact and return the stored row.
    async fn create(&self, owner_id: i64, draft: &ContactDraft) -> StoreResult<Contact>;

    /// Fetch a single contact by id.
    async fn find(&self, id: i64, owner_id: i64) -> StoreResult<Option<Contact>>;

    /// Fetch one page of matching contacts plus the total match count.
    async fn list(
        &self,
        owner_id: i64,
        filter: &ContactFilter,
        page: &Page,
    ) -> StoreResult<(Vec<Contact>, i64)>;

    /// Overwrite every mutable field, returning the updated row.
    async fn update(
        &self,
        id: i64,
        owner_id: i64,
        draft: &ContactDraft,
    ) -> StoreResult<Option<Contact>>;

    /// Delete a contact. Returns whether a row was removed.
    async fn delete(&self, id: i64, owner_id: i64) -> StoreResult<bool>;

    /// Atomically flip the favorite flag, returning the new value.
    async fn toggle_favorite(&self, id: i64, owner_id: i64) -> StoreResult<Option<bool>>;

    /// Raw non-empty tags fields across the owner's contacts.
    async fn tag_strings(&self, owner_id: i64) -> StoreResult<Vec<String>>;
}
