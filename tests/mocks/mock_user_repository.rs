use async_trait::async_trait;
use chrono::Utc;
use rolo_server::models::{User, UserCredentials};
use rolo_server::repositories::{StoreResult, UserRepository};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
struct StoredUser {
    user: User,
    password_hash: String,
}

/// Mock user repository for testing.
///
/// Provides an in-memory implementation of UserRepository that can be
/// seeded with accounts, switched into a failing mode, and queried for
/// per-method call counts.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<Mutex<HashMap<i64, StoredUser>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    next_id: Arc<AtomicI64>,
    failing: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockUserRepository {
    /// Create a new empty MockUserRepository.
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(HashMap::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            failing: Arc::new(Mutex::new(false)),
        }
    }

    /// Seed an account directly, bypassing the service layer.
    pub fn add_user(&self, email: &str, password_hash: &str) -> User {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id,
            email: email.to_string(),
            created_at: Utc::now(),
        };
        self.users.lock().unwrap().insert(
            id,
            StoredUser {
                user: user.clone(),
                password_hash: password_hash.to_string(),
            },
        );
        user
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
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, email: &str, password_hash: &str) -> StoreResult<User> {
        self.track_call("create");
        self.check_failing()?;
        Ok(self.add_user(email, password_hash))
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<UserCredentials>> {
        self.track_call("find_by_email");
        self.check_failing()?;
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|s| s.user.email == email).map(|s| {
            UserCredentials {
                id: s.user.id,
                email: s.user.email.clone(),
                password_hash: s.password_hash.clone(),
            }
        }))
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        self.track_call("find_by_id");
        self.check_failing()?;
        let users = self.users.lock().unwrap();
        Ok(users.get(&id).map(|s| s.user.clone()))
    }
}
