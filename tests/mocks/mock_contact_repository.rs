use async_trait::async_trait;
use chrono::Utc;
use rolo_server::models::{Contact, ContactDraft};
use rolo_server::query::{ContactFilter, Page};
use rolo_server::repositories::{ContactRepository, StoreResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that mirrors
/// the SQL semantics (owner scoping, case-insensitive filters, newest-first
/// ordering) and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<HashMap<i64, Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    next_id: Arc<AtomicI64>,
    failing: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(HashMap::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            failing: Arc::new(Mutex::new(false)),
        }
    }

    /// Seed a contact directly, bypassing validation.
    pub fn add_contact(&self, contact: Contact) {
        self.next_id.fetch_max(contact.id + 1, Ordering::SeqCst);
        self.contacts.lock().unwrap().insert(contact.id, contact);
    }

    /// When set, every repository call fails with a storage error.
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts to zero.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check_failing(&self) -> StoreResult<()> {
        if *self.failing.lock().unwrap() {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }

    // LIKE against TEXT columns is case-insensitive for ASCII; the mock
    // matches that so filter tests behave like the real store.
    fn matches(filter: &ContactFilter, contact: &Contact) -> bool {
        if let Some(search) = &filter.search {
            let needle = search.to_lowercase();
            let found = [
                Some(contact.name.as_str()),
                Some(contact.email.as_str()),
                Some(contact.phone.as_str()),
                contact.company.as_deref(),
            ]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle));
            if !found {
                return false;
            }
        }

        if filter.favorite && !contact.is_favorite {
            return false;
        }

        if let Some(tag) = &filter.tag {
            match &contact.tags {
                Some(tags) if tags.to_lowercase().contains(&tag.to_lowercase()) => {}
                _ => return false,
            }
        }

        true
    }

    fn apply_draft(contact: &mut Contact, draft: &ContactDraft) {
        contact.name = draft.name.clone();
        contact.phone = draft.phone.clone();
        contact.email = draft.email.clone();
        contact.company = draft.company.clone();
        contact.tags = draft.tags.clone();
        contact.notes = draft.notes.clone();
        contact.is_favorite = draft.favorite();
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn create(&self, owner_id: i64, draft: &ContactDraft) -> StoreResult<Contact> {
        self.track_call("create");
        self.check_failing()?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut contact = Contact {
            id,
            user_id: owner_id,
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            company: None,
            tags: None,
            notes: None,
            is_favorite: false,
            created_at: Utc::now(),
        };
        Self::apply_draft(&mut contact, draft);

        self.contacts.lock().unwrap().insert(id, contact.clone());
        Ok(contact)
    }

    async fn find(&self, id: i64, owner_id: i64) -> StoreResult<Option<Contact>> {
        self.track_call("find");
        self.check_failing()?;
        let contacts = self.contacts.lock().unwrap();
        Ok(contacts
            .get(&id)
            .filter(|c| c.user_id == owner_id)
            .cloned())
    }

    async fn list(
        &self,
        owner_id: i64,
        filter: &ContactFilter,
        page: &Page,
    ) -> StoreResult<(Vec<Contact>, i64)> {
        self.track_call("list");
        self.check_failing()?;

        let contacts = self.contacts.lock().unwrap();
        let mut rows: Vec<Contact> = contacts
            .values()
            .filter(|c| c.user_id == owner_id && Self::matches(filter, c))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let total = rows.len() as i64;
        let rows = rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok((rows, total))
    }

    async fn update(
        &self,
        id: i64,
        owner_id: i64,
        draft: &ContactDraft,
    ) -> StoreResult<Option<Contact>> {
        self.track_call("update");
        self.check_failing()?;

        let mut contacts = self.contacts.lock().unwrap();
        match contacts.get_mut(&id).filter(|c| c.user_id == owner_id) {
            Some(contact) => {
                Self::apply_draft(contact, draft);
                Ok(Some(contact.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64, owner_id: i64) -> StoreResult<bool> {
        self.track_call("delete");
        self.check_failing()?;

        let mut contacts = self.contacts.lock().unwrap();
        let owned = contacts.get(&id).is_some_and(|c| c.user_id == owner_id);
        if owned {
            contacts.remove(&id);
        }
        Ok(owned)
    }

    async fn toggle_favorite(&self, id: i64, owner_id: i64) -> StoreResult<Option<bool>> {
        self.track_call("toggle_favorite");
        self.check_failing()?;

        let mut contacts = self.contacts.lock().unwrap();
        match contacts.get_mut(&id).filter(|c| c.user_id == owner_id) {
            Some(contact) => {
                contact.is_favorite = !contact.is_favorite;
                Ok(Some(contact.is_favorite))
            }
            None => Ok(None),
        }
    }

    async fn tag_strings(&self, owner_id: i64) -> StoreResult<Vec<String>> {
        self.track_call("tag_strings");
        self.check_failing()?;

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts
            .values()
            .filter(|c| c.user_id == owner_id)
            .filter_map(|c| c.tags.clone())
            .filter(|t| !t.is_empty())
            .collect())
    }
}
