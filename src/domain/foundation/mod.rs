//! Foundation module - Shared lookup primitives.
//!
//! Helpers for reading loosely-typed webhook JSON that every other domain
//! module builds on.

mod fields;

pub use fields::{
    f64_field, field, flag_value, has_field, i64_field, list_field, object_field,
    object_or_empty, str_field,
};
