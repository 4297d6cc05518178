//! Storage infrastructure: persisted configuration documents.
//!
//! - `fs_store` reads and writes documents on the local file system, replacing
//!   files atomically so a crash never leaves a half-written document.
//! - `memory` keeps documents in a map; used by tests and embedders that
//!   manage persistence themselves.

pub mod fs_store;
pub mod memory;

pub use fs_store::FsDocumentStore;
pub use memory::MemoryDocumentStore;
