//! Storage layer for learning-tracker
//!
//! The whole state lives in one JSON blob under a fixed key. Loading is
//! forgiving (anything wrong falls back to the default state); importing a
//! backup is strict and reports why a file was rejected.

mod blob;
mod error;
mod gateway;
mod merge;
#[cfg(test)]
mod tests;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use error::{ImportError, StorageError};
pub use gateway::{export_state, export_to_file, import_state, Storage};
pub use merge::shallow_merge;
