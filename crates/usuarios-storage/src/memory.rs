//! In-memory user store.
//!
//! Records live in a `Vec<User>` in insertion order next to the
//! identifier counter, both behind a single `RwLock`. Lookups are linear
//! scans; with the record counts this service sees that is cheaper than
//! maintaining an index, and it keeps listing order trivially correct.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::{StorageError, StorageResult};
use crate::traits::{NewUser, User, UserPatch, UserStore};

/// In-memory implementation of UserStore.
///
/// # Performance Characteristics
///
/// - **Create**: O(1) (append)
/// - **Get / replace / patch / delete**: O(N) linear scan
/// - **List**: O(N) clone of the sequence
///
/// # Concurrency
///
/// The counter and the sequence must change together: a create reads the
/// counter, appends, and increments as one step, and a delete/patch pair
/// on the same identifier must serialize. A single `RwLock` over both
/// gives exactly that; a sharded map cannot couple the counter to the
/// sequence atomically.
#[derive(Debug)]
pub struct MemoryUserStore {
    inner: RwLock<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    users: Vec<User>,
    next_id: u64,
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl MemoryUserStore {
    /// Creates a new empty store with the identifier counter at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new store wrapped in Arc.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_users(&self) -> StorageResult<Vec<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.clone())
    }

    async fn get_user(&self, id: u64) -> StorageResult<User> {
        let inner = self.inner.read().await;
        inner
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(StorageError::UserNotFound { id })
    }

    #[instrument(skip(self, new), fields(nombre = %new.nombre))]
    async fn create_user(&self, new: NewUser) -> StorageResult<User> {
        let mut inner = self.inner.write().await;

        let user = User {
            id: inner.next_id,
            nombre: new.nombre,
            edad: new.edad,
            email: new.email,
            activo: new.activo,
        };
        inner.users.push(user.clone());
        inner.next_id += 1;

        Ok(user)
    }

    #[instrument(skip(self, new))]
    async fn replace_user(&self, id: u64, new: NewUser) -> StorageResult<User> {
        let mut inner = self.inner.write().await;

        let user = inner
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(StorageError::UserNotFound { id })?;

        // Identifier preserved; every other field overwritten.
        user.nombre = new.nombre;
        user.edad = new.edad;
        user.email = new.email;
        user.activo = new.activo;

        Ok(user.clone())
    }

    #[instrument(skip(self, patch))]
    async fn patch_user(&self, id: u64, patch: UserPatch) -> StorageResult<User> {
        let mut inner = self.inner.write().await;

        let user = inner
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(StorageError::UserNotFound { id })?;

        if let Some(nombre) = patch.nombre {
            user.nombre = nombre;
        }
        if let Some(edad) = patch.edad {
            user.edad = edad;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(activo) = patch.activo {
            user.activo = activo;
        }

        Ok(user.clone())
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, id: u64) -> StorageResult<User> {
        let mut inner = self.inner.write().await;

        let pos = inner
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(StorageError::UserNotFound { id })?;

        // Counter is deliberately untouched: identifiers are never reused
        // after a single deletion, only after a full reset.
        Ok(inner.users.remove(pos))
    }

    #[instrument(skip(self))]
    async fn delete_all_users(&self) -> StorageResult<usize> {
        let mut inner = self.inner.write().await;

        let removed = inner.users.len();
        inner.users.clear();
        inner.next_id = 1;

        Ok(removed)
    }
}
