//! Reference callbacks.
//!
//! A reference callback turns a fully-qualified type name into the `$ref`
//! target used inside a published document. Any `Fn(&str) -> Reference`
//! works; the two stock callbacks cover OpenAPI v2 and v3 layouts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `$ref` target produced by a reference callback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reference(String);

impl Reference {
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self(target.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `#/definitions/<canonical>` (OpenAPI v2).
#[must_use]
pub fn definitions_ref(type_name: &str) -> Reference {
    prefixed("#/definitions/", type_name)
}

/// `#/components/schemas/<canonical>` (OpenAPI v3).
#[must_use]
pub fn components_ref(type_name: &str) -> Reference {
    prefixed("#/components/schemas/", type_name)
}

/// Names that do not parse keep their original spelling, with `/` escaped
/// as a JSON pointer token.
fn prefixed(prefix: &str, type_name: &str) -> Reference {
    let key = rtc_core::type_name::canonical_name(type_name)
        .unwrap_or_else(|_| type_name.replace('~', "~0").replace('/', "~1"));
    Reference(format!("{prefix}{key}"))
}
