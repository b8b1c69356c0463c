//! # syncdoc core
//!
//! The synced repository: tick-based incremental synchronization,
//! soft-delete semantics and optimistic tick assignment over any
//! [`DocumentStore`].
//!
//! This crate provides:
//! - [`SyncedEntity`], the capability contract managed entities satisfy
//! - [`SyncedRepository`], CRUD plus the incremental change feed
//! - [`SyncResult`], the outcome of a sync read
//! - [`RepositoryConfig`], tuning for the optimistic retry bound

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod entity;
mod error;
mod repository;
mod sync;

pub use config::RepositoryConfig;
pub use entity::SyncedEntity;
pub use error::{RepositoryError, RepositoryResult};
pub use repository::SyncedRepository;
pub use sync::SyncResult;

pub use syncdoc_store::{Document, DocumentStore, EntityId, MemoryStore, StoreError};
