//! UserStore trait definition.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StorageResult;

/// A stored user record.
///
/// The identifier is assigned by the store on creation and never changes
/// afterwards. Field names match the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub nombre: String,
    pub edad: u32,
    pub email: String,
    pub activo: bool,
}

/// Input for creating or fully replacing a record.
///
/// All fields are mandatory except `activo`, which defaults to `true`
/// when absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub nombre: String,
    pub edad: u32,
    pub email: String,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

fn default_activo() -> bool {
    true
}

/// Partial update for a record.
///
/// Each field is `Option<_>` so that "absent" and "present with value"
/// are distinguishable: only `Some` fields overwrite the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub edad: Option<u32>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub activo: Option<bool>,
}

/// Abstract storage interface for user records.
///
/// Implementations must be thread-safe (Send + Sync) and support
/// async operations. Iteration order is insertion order.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Lists all records in insertion order.
    async fn list_users(&self) -> StorageResult<Vec<User>>;

    /// Gets a record by identifier.
    async fn get_user(&self, id: u64) -> StorageResult<User>;

    /// Creates a record, assigning it the next sequential identifier.
    async fn create_user(&self, new: NewUser) -> StorageResult<User>;

    /// Overwrites every field of an existing record. The identifier is
    /// preserved; nothing is kept from the prior value.
    async fn replace_user(&self, id: u64, new: NewUser) -> StorageResult<User>;

    /// Overwrites only the supplied fields of an existing record.
    async fn patch_user(&self, id: u64, patch: UserPatch) -> StorageResult<User>;

    /// Removes a record and returns it.
    async fn delete_user(&self, id: u64) -> StorageResult<User>;

    /// Removes every record and resets the identifier counter to 1.
    /// Returns the number of records removed.
    async fn delete_all_users(&self) -> StorageResult<usize>;
}
