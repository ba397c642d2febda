//! Structural consistency checks over a definition map.
//!
//! A map is consistent when, for every definition:
//! - its dependency list is sorted, duplicate-free, and equal to the set of
//!   type names referenced by its properties;
//! - every dependency in the API package resolves to a key of the map;
//! - every required property is declared.

use std::collections::BTreeSet;

use rtc_core::TypeName;
use thiserror::Error;

use crate::definitions::Definitions;
use crate::error::RegistryError;

/// A single broken invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("{definition}: property references '{target}' which is not a declared dependency")]
    UndeclaredReference { definition: String, target: String },

    #[error("{definition}: dependency '{dependency}' is not referenced by any property")]
    UnusedDependency {
        definition: String,
        dependency: String,
    },

    #[error("{definition}: dependency list is not sorted and unique")]
    UnsortedDependencies { definition: String },

    #[error("{definition}: dependency '{dependency}' is not defined in the registry")]
    UnresolvedDependency {
        definition: String,
        dependency: String,
    },

    #[error("{definition}: dependency '{dependency}' is not a qualified type name")]
    MalformedDependency {
        definition: String,
        dependency: String,
    },

    #[error("{definition}: required property '{property}' is not declared")]
    UnknownRequired {
        definition: String,
        property: String,
    },
}

/// Every violation in `definitions`, grouped by definition name.
#[must_use]
pub fn find_violations(definitions: &Definitions) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (name, definition) in definitions {
        let referenced = definition.schema.references();
        let declared: BTreeSet<&str> = definition.dependencies.iter().map(String::as_str).collect();

        if !definition.dependencies.windows(2).all(|pair| pair[0] < pair[1]) {
            violations.push(Violation::UnsortedDependencies {
                definition: name.clone(),
            });
        }

        for target in referenced.difference(&declared) {
            violations.push(Violation::UndeclaredReference {
                definition: name.clone(),
                target: (*target).to_string(),
            });
        }

        for dependency in declared.difference(&referenced) {
            violations.push(Violation::UnusedDependency {
                definition: name.clone(),
                dependency: (*dependency).to_string(),
            });
        }

        for dependency in &declared {
            match TypeName::parse(dependency) {
                Ok(type_name) => {
                    if type_name.is_internal() && !definitions.contains_key(*dependency) {
                        violations.push(Violation::UnresolvedDependency {
                            definition: name.clone(),
                            dependency: (*dependency).to_string(),
                        });
                    }
                }
                Err(_) => violations.push(Violation::MalformedDependency {
                    definition: name.clone(),
                    dependency: (*dependency).to_string(),
                }),
            }
        }

        for property in &definition.schema.required {
            if !definition.schema.properties.contains_key(property) {
                violations.push(Violation::UnknownRequired {
                    definition: name.clone(),
                    property: property.clone(),
                });
            }
        }
    }

    violations
}

/// Check `definitions` against every structural invariant.
///
/// # Errors
///
/// Returns `RegistryError::Inconsistent` listing every violation found.
pub fn check_definitions(definitions: &Definitions) -> Result<(), RegistryError> {
    let violations = find_violations(definitions);
    if violations.is_empty() {
        tracing::debug!(definitions = definitions.len(), "definitions are consistent");
        Ok(())
    } else {
        tracing::warn!(count = violations.len(), "definitions are inconsistent");
        Err(RegistryError::Inconsistent { violations })
    }
}
