//! usuarios-storage: Storage abstraction layer
//!
//! This crate provides the storage abstraction for the usuarios service:
//! - `UserStore` trait for record operations
//! - In-memory implementation backing the running service
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │             usuarios-storage                 │
//! ├─────────────────────────────────────────────┤
//! │  traits.rs   - UserStore trait definition   │
//! │  memory.rs   - In-memory implementation     │
//! │  error.rs    - Storage error types          │
//! └─────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use error::{StorageError, StorageResult};
pub use memory::MemoryUserStore;
pub use traits::{NewUser, User, UserPatch, UserStore};
