//! # syncdoc service
//!
//! DTO-facing orchestration over the synced repository.
//!
//! This crate provides:
//! - [`EntityMapper`], the bidirectional DTO/entity conversion contract
//! - [`EntityService`], thin composition of repository and mapper
//! - [`ApiSync`], the sync envelope handed to DTO callers
//! - the sample entity kind ([`SampleEntity`], [`ApiSample`],
//!   [`SampleMapper`]) the scaffold demonstrates with

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod mapper;
mod sample;
mod service;

pub use mapper::EntityMapper;
pub use sample::{ApiSample, SampleEntity, SampleMapper};
pub use service::{ApiSync, EntityService};
