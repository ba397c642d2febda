//! Central registry of the RuntimeComponent OpenAPI definitions.
//!
//! The `SchemaRegistry` builds the definition table once at construction time
//! and answers lookups by fully-qualified or short kind name.

use serde_json::Value;

use rtc_core::v1beta1;

use crate::check::check_definitions;
use crate::definitions::{Definitions, get_openapi_definitions};
use crate::document::{DocumentFlavor, DocumentInfo, build_document};
use crate::error::RegistryError;
use crate::graph::{DependencyClosure, dependency_closure};
use crate::reference::{Reference, definitions_ref};
use crate::schema::OpenApiDefinition;
use crate::validation::{ValidationOptions, validate_instance};

/// Store of every definition in the `v1beta1` package.
pub struct SchemaRegistry {
    definitions: Definitions,
}

impl SchemaRegistry {
    /// Build a registry whose references use the OpenAPI v2 layout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_reference(definitions_ref)
    }

    /// Build a registry resolving references through `reference`.
    pub fn with_reference<F>(reference: F) -> Self
    where
        F: Fn(&str) -> Reference,
    {
        Self {
            definitions: get_openapi_definitions(reference),
        }
    }

    /// The fully-qualified key for `name`, which may be qualified or a bare kind.
    #[must_use]
    pub fn resolve_name(&self, name: &str) -> Option<&str> {
        if let Some((key, _)) = self.definitions.get_key_value(name) {
            return Some(key.as_str());
        }
        self.definitions
            .get_key_value(&v1beta1::qualify(name))
            .map(|(key, _)| key.as_str())
    }

    /// Get a definition by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OpenApiDefinition> {
        self.resolve_name(name)
            .and_then(|key| self.definitions.get(key))
    }

    fn require(&self, name: &str) -> Result<&str, RegistryError> {
        self.resolve_name(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// List all registered definition names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&str> {
        self.definitions.keys().map(String::as_str).collect()
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub const fn definitions(&self) -> &Definitions {
        &self.definitions
    }

    /// Transitive dependencies of a definition.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if the name is unknown.
    pub fn dependency_closure(&self, name: &str) -> Result<DependencyClosure, RegistryError> {
        dependency_closure(&self.definitions, self.require(name)?)
    }

    /// Check the registry against every structural invariant.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Inconsistent` listing the violations.
    pub fn check(&self) -> Result<(), RegistryError> {
        check_definitions(&self.definitions)
    }

    /// Publish the registry as an OpenAPI document.
    ///
    /// The table is rebuilt with the flavor's reference callback so every
    /// `$ref` resolves inside the returned document.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`build_document`].
    pub fn document(
        &self,
        flavor: DocumentFlavor,
        info: &DocumentInfo,
    ) -> Result<Value, RegistryError> {
        let definitions = get_openapi_definitions(flavor.reference_callback());
        build_document(&definitions, flavor, info)
    }

    /// Validate a JSON value against a named definition.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if the name is unknown, or
    /// `RegistryError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), RegistryError> {
        self.validate_with(name, instance, ValidationOptions::default())
    }

    /// [`validate`](Self::validate) with explicit options.
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate).
    pub fn validate_with(
        &self,
        name: &str,
        instance: &Value,
        options: ValidationOptions,
    ) -> Result<(), RegistryError> {
        validate_instance(self.require(name)?, instance, options)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
