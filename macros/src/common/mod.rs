//! Common utilities shared by the user-facing macros.

pub mod parse_utils;

pub use parse_utils::{type_key, TypeList};
