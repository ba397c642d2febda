//! # rtc-core
//!
//! Core types shared by the RuntimeComponent crates:
//! - Typed mirror of the `v1beta1` API (`RuntimeComponent` and the structs it embeds)
//! - Fully-qualified type-name parsing and canonical (REST-friendly) naming
//! - Cross-cutting error types

pub mod errors;
pub mod type_name;
pub mod v1beta1;

pub use errors::CoreError;
pub use type_name::TypeName;
