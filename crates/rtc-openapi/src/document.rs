//! OpenAPI document assembly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::definitions::Definitions;
use crate::error::RegistryError;
use crate::reference::{Reference, components_ref, definitions_ref};

/// Layout of a published document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFlavor {
    /// Swagger 2.0, schemas under `definitions`.
    #[default]
    V2,
    /// OpenAPI 3.0, schemas under `components.schemas`.
    V3,
}

impl DocumentFlavor {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V2 => "v2",
            Self::V3 => "v3",
        }
    }

    /// The reference callback whose `$ref` targets resolve inside this layout.
    #[must_use]
    pub fn reference_callback(self) -> fn(&str) -> Reference {
        match self {
            Self::V2 => definitions_ref,
            Self::V3 => components_ref,
        }
    }
}

impl fmt::Display for DocumentFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentFlavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v2" | "swagger" => Ok(Self::V2),
            "v3" | "openapi" => Ok(Self::V3),
            other => Err(format!("unknown document flavor '{other}' (expected v2 or v3)")),
        }
    }
}

/// `info` block of a published document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub title: String,
    pub version: String,
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self {
            title: "RuntimeComponent".to_string(),
            version: "v1beta1".to_string(),
        }
    }
}

/// Assemble a document with every definition keyed by its canonical name.
///
/// `definitions` should have been built with `flavor.reference_callback()`
/// so that every internal `$ref` resolves inside the document.
///
/// # Errors
///
/// Returns `RegistryError::Core` if a definition name cannot be canonicalised.
pub fn build_document(
    definitions: &Definitions,
    flavor: DocumentFlavor,
    info: &DocumentInfo,
) -> Result<Value, RegistryError> {
    let mut schemas = Map::new();
    for (name, definition) in definitions {
        let key = rtc_core::type_name::canonical_name(name)?;
        let schema = serde_json::to_value(&definition.schema)
            .map_err(|e| RegistryError::Generation(format!("{name}: {e}")))?;
        schemas.insert(key, schema);
    }

    let info = json!({"title": info.title, "version": info.version});
    let document = match flavor {
        DocumentFlavor::V2 => json!({
            "swagger": "2.0",
            "info": info,
            "paths": {},
            "definitions": schemas,
        }),
        DocumentFlavor::V3 => json!({
            "openapi": "3.0.0",
            "info": info,
            "paths": {},
            "components": {"schemas": schemas},
        }),
    };

    tracing::debug!(%flavor, definitions = definitions.len(), "assembled openapi document");
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::get_openapi_definitions;

    #[test]
    fn flavor_parses_aliases() {
        assert_eq!("v2".parse::<DocumentFlavor>().unwrap(), DocumentFlavor::V2);
        assert_eq!("OpenAPI".parse::<DocumentFlavor>().unwrap(), DocumentFlavor::V3);
        assert!("v4".parse::<DocumentFlavor>().is_err());
    }

    #[test]
    fn v2_document_uses_definitions_section() {
        let flavor = DocumentFlavor::V2;
        let definitions = get_openapi_definitions(flavor.reference_callback());
        let document = build_document(&definitions, flavor, &DocumentInfo::default()).unwrap();

        assert_eq!(document["swagger"], "2.0");
        assert_eq!(document["info"]["version"], "v1beta1");
        let component = &document["definitions"]["pkg.apis.openj9.v1beta1.RuntimeComponent"];
        assert_eq!(
            component["properties"]["spec"]["$ref"],
            "#/definitions/pkg.apis.openj9.v1beta1.RuntimeComponentSpec"
        );
    }

    #[test]
    fn v3_document_uses_components_section() {
        let flavor = DocumentFlavor::V3;
        let definitions = get_openapi_definitions(flavor.reference_callback());
        let document = build_document(&definitions, flavor, &DocumentInfo::default()).unwrap();

        assert_eq!(document["openapi"], "3.0.0");
        let schemas = document["components"]["schemas"].as_object().unwrap();
        assert_eq!(schemas.len(), definitions.len());
        let spec = &schemas["pkg.apis.openj9.v1beta1.RuntimeComponentSpec"];
        assert_eq!(spec["required"][0], "applicationImage");
        assert_eq!(
            spec["properties"]["affinity"]["$ref"],
            "#/components/schemas/pkg.apis.openj9.v1beta1.RuntimeComponentAffinity"
        );
    }
}
