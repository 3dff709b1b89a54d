//! Storage layer for Portico
//!
//! This crate provides the key-value persistence used by the application
//! shell: a sled-backed store plus the async item interface that screens
//! use to read and clear the stored session.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod store;

pub use kv::{KvConfig, KvError, KvStore};
pub use store::{KeyValueStore, MemoryStore};
