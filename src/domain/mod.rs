//! Domain layer containing webhook classification logic.
//!
//! # Module Organization
//!
//! - `foundation` - Total lookups over untyped JSON
//! - `resources` - Typed views over nested member, membership, transaction and subscription objects
//! - `events` - Event catalogue, structural validation and the event view

pub mod events;
pub mod foundation;
pub mod resources;
