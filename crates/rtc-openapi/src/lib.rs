//! # rtc-openapi
//!
//! OpenAPI definitions for the `v1beta1` RuntimeComponent CRD.
//!
//! This crate provides:
//! - The schema model (`OpenApiDefinition`, `Schema`) in OpenAPI spelling
//! - `get_openapi_definitions`: the static table of every definition in the API package
//! - `SchemaRegistry`: lookup, dependency closure, document export and instance validation
//! - Structural consistency checks over any definition map
//!
//! ## Architecture
//!
//! Definitions reference each other by fully-qualified type name. How a name turns
//! into a `$ref` is decided by the caller through a reference callback, so the same
//! table can be published as an OpenAPI v2 or v3 document.

pub mod check;
pub mod definitions;
pub mod document;
pub mod error;
pub mod graph;
pub mod reference;
pub mod registry;
pub mod schema;
pub mod validation;

pub use check::{Violation, check_definitions, find_violations};
pub use definitions::{Definitions, get_openapi_definitions};
pub use document::{DocumentFlavor, DocumentInfo, build_document};
pub use error::RegistryError;
pub use graph::{DependencyClosure, dependency_closure};
pub use reference::{Reference, components_ref, definitions_ref};
pub use registry::SchemaRegistry;
pub use schema::{
    Format, ListType, ObjectSchema, OpenApiDefinition, PrimitiveType, Property, Schema,
};
pub use validation::{ValidationOptions, validate_instance, validation_schema};
