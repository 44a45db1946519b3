//! Storage crate: the key-value store behind the intake endpoints.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`kv`] – KvStore trait (set / get_by_prefix / delete)
//! - [`sqlite_kv`] – SqliteKvStore (SQLite via sqlx)
//! - [`memory_kv`] – MemoryKvStore (in-process, for tests and dev)

mod error;
mod kv;
mod memory_kv;
mod sqlite_kv;


pub use error::StorageError;
pub use kv::KvStore;
pub use memory_kv::MemoryKvStore;
pub use sqlite_kv::SqliteKvStore;
