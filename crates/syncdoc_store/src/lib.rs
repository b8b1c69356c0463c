//! # syncdoc store
//!
//! Document store contract for syncdoc, plus the in-memory reference
//! implementation.
//!
//! This crate provides:
//! - [`EntityId`], the document key type
//! - [`Document`], the capability contract a stored type must satisfy
//! - [`DocumentStore`], the store trait
//! - [`MemoryStore`], a thread-safe in-memory store enforcing the
//!   unique tick index

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod document;
mod error;
mod id;
mod memory;
mod store;

pub use document::Document;
pub use error::{StoreError, StoreResult};
pub use id::EntityId;
pub use memory::MemoryStore;
pub use store::{DocumentFilter, DocumentStore, DocumentUpdate};
