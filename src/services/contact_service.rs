//! Contact service layer.
//!
//! Business logic for contact CRUD, listing, favorites, and tag extraction.
//! Drafts are normalized and validated here before touching storage, and
//! raw storage failures are translated into client-safe errors.

use crate::error::{ApiError, ApiResult};
use crate::models::{Contact, ContactDraft};
use crate::query::{ContactFilter, Page, Pagination};
use crate::repositories::ContactRepository;
use crate::tags;
use async_trait::async_trait;
use std::sync::Arc;

/// One page of contacts plus its pagination summary.
#[derive(Debug, Clone)]
pub struct ContactPage {
    pub contacts: Vec<Contact>,
    pub pagination: Pagination,
}

/// Contact operations, always scoped to the authenticated owner.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// One page of the owner's contacts under the given filter.
    async fn list(
        &self,
        owner_id: i64,
        filter: ContactFilter,
        page: Page,
    ) -> ApiResult<ContactPage>;

    /// A single contact by id.
    async fn get(&self, id: i64, owner_id: i64) -> ApiResult<Contact>;

    /// Validate and store a new contact.
    async fn create(&self, owner_id: i64, draft: ContactDraft) -> ApiResult<Contact>;

    /// Validate and overwrite an existing contact.
    async fn update(&self, id: i64, owner_id: i64, draft: ContactDraft) -> ApiResult<Contact>;

    /// Remove a contact.
    async fn delete(&self, id: i64, owner_id: i64) -> ApiResult<()>;

    /// Flip the favorite flag, returning the new value.
    async fn toggle_favorite(&self, id: i64, owner_id: i64) -> ApiResult<bool>;

    /// Sorted, deduplicated tags across the owner's contacts.
    async fn distinct_tags(&self, owner_id: i64) -> ApiResult<Vec<String>>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    contacts: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(contacts: Arc<dyn ContactRepository>) -> Self {
        Self { contacts }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list(
        &self,
        owner_id: i64,
        filter: ContactFilter,
        page: Page,
    ) -> ApiResult<ContactPage> {
        let (contacts, total) = self
            .contacts
            .list(owner_id, &filter, &page)
            .await
            .map_err(|e| ApiError::internal("Server error while fetching contacts", e))?;
        Ok(ContactPage {
            contacts,
            pagination: Pagination::for_total(&page, total),
        })
    }

    async fn get(&self, id: i64, owner_id: i64) -> ApiResult<Contact> {
        self.contacts
            .find(id, owner_id)
            .await
            .map_err(|e| ApiError::internal("Server error while fetching contact", e))?
            .ok_or(ApiError::NotFound("Contact"))
    }

    async fn create(&self, owner_id: i64, draft: ContactDraft) -> ApiResult<Contact> {
        let draft = draft.normalized();
        draft.validate()?;

        let contact = self
            .contacts
            .create(owner_id, &draft)
            .await
            .map_err(|e| ApiError::internal("Server error while creating contact", e))?;
        tracing::debug!(contact_id = contact.id, owner_id, "created contact");
        Ok(contact)
    }

    async fn update(&self, id: i64, owner_id: i64, draft: ContactDraft) -> ApiResult<Contact> {
        let draft = draft.normalized();
        draft.validate()?;

        self.contacts
            .update(id, owner_id, &draft)
            .await
            .map_err(|e| ApiError::internal("Server error while updating contact", e))?
            .ok_or(ApiError::NotFound("Contact"))
    }

    async fn delete(&self, id: i64, owner_id: i64) -> ApiResult<()> {
        let removed = self
            .contacts
            .delete(id, owner_id)
            .await
            .map_err(|e| ApiError::internal("Server error while deleting contact", e))?;
        if !removed {
            return Err(ApiError::NotFound("Contact"));
        }
        Ok(())
    }

    async fn toggle_favorite(&self, id: i64, owner_id: i64) -> ApiResult<bool> {
        self.contacts
            .toggle_favorite(id, owner_id)
            .await
            .map_err(|e| ApiError::internal("Server error while updating favorite status", e))?
            .ok_or(ApiError::NotFound("Contact"))
    }

    async fn distinct_tags(&self, owner_id: i64) -> ApiResult<Vec<String>> {
        let raw = self
            .contacts
            .tag_strings(owner_id)
            .await
            .map_err(|e| ApiError::internal("Server error while fetching tags", e))?;
        Ok(tags::distinct_tags(raw))
    }
}
