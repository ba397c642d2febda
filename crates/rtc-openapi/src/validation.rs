//! Validation of JSON instances against a published definition.
//!
//! The named definition and every definition it reaches are compiled into a
//! single draft-07 JSON Schema document. Types outside the registry become
//! permissive `{}` schemas.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::definitions::{Definitions, get_openapi_definitions};
use crate::error::RegistryError;
use crate::graph::dependency_closure;
use crate::reference::definitions_ref;

const DRAFT_07: &str = "http://json-schema.org/draft-07/schema#";

/// Knobs for instance validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Reject properties that a definition does not declare.
    pub reject_unknown_fields: bool,
}

/// JSON Schema document validating instances of `root`.
///
/// # Errors
///
/// Returns `RegistryError::NotFound` if `root` is not defined, or
/// `RegistryError::Core` if a reachable name cannot be canonicalised.
pub fn validation_schema(root: &str, options: ValidationOptions) -> Result<Value, RegistryError> {
    let definitions: Definitions = get_openapi_definitions(definitions_ref);
    let closure = dependency_closure(&definitions, root)?;

    let mut section = Map::new();
    for name in &closure.internal {
        let mut schema = serde_json::to_value(&definitions[name].schema)
            .map_err(|e| RegistryError::Generation(format!("{name}: {e}")))?;
        bound_integer_formats(&mut schema);
        if options.reject_unknown_fields {
            if let Some(object) = schema.as_object_mut() {
                object.insert("additionalProperties".to_string(), Value::Bool(false));
            }
        }
        section.insert(rtc_core::type_name::canonical_name(name)?, schema);
    }
    for name in &closure.external {
        section.insert(rtc_core::type_name::canonical_name(name)?, json!({}));
    }

    Ok(json!({
        "$schema": DRAFT_07,
        "definitions": section,
        "$ref": definitions_ref(root).as_str(),
    }))
}

/// Draft-07 ignores OpenAPI integer formats, so they become explicit
/// `minimum`/`maximum` bounds.
fn bound_integer_formats(schema: &mut Value) {
    match schema {
        Value::Object(object) => {
            let bounds = match object.get("format").and_then(Value::as_str) {
                Some("int32") => Some((i64::from(i32::MIN), i64::from(i32::MAX))),
                Some("int64") => Some((i64::MIN, i64::MAX)),
                _ => None,
            };
            if let Some((minimum, maximum)) = bounds {
                object.insert("minimum".to_string(), Value::from(minimum));
                object.insert("maximum".to_string(), Value::from(maximum));
            }
            object.values_mut().for_each(bound_integer_formats);
        }
        Value::Array(items) => items.iter_mut().for_each(bound_integer_formats),
        _ => {}
    }
}

/// Validate `instance` against the compiled schema of `root`.
///
/// # Errors
///
/// Returns `RegistryError::ValidationFailed` with every error message, or any
/// error from [`validation_schema`].
pub fn validate_instance(
    root: &str,
    instance: &Value,
    options: ValidationOptions,
) -> Result<(), RegistryError> {
    let schema = validation_schema(root, options)?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| RegistryError::Generation(format!("{e}")))?;

    let errors: Vec<String> = validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(root, count = errors.len(), "instance failed validation");
        Err(RegistryError::ValidationFailed { errors })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn q(kind: &str) -> String {
        rtc_core::v1beta1::qualify(kind)
    }

    #[test]
    fn schema_points_at_root_definition() {
        let schema = validation_schema(&q("ServiceBindingConsumes"), ValidationOptions::default())
            .unwrap();
        assert_eq!(
            schema["$ref"],
            "#/definitions/pkg.apis.openj9.v1beta1.ServiceBindingConsumes"
        );
        assert_eq!(schema["definitions"].as_object().unwrap().len(), 1);
    }

    #[test]
    fn external_types_are_permissive() {
        let schema =
            validation_schema(&q("StatusCondition"), ValidationOptions::default()).unwrap();
        assert_eq!(
            schema["definitions"]["io.k8s.apimachinery.pkg.apis.meta.v1.Time"],
            json!({})
        );
    }

    #[test]
    fn strict_mode_closes_objects() {
        let options = ValidationOptions {
            reject_unknown_fields: true,
        };
        let root = q("ServiceBindingConsumes");

        let ok = json!({"name": "db", "category": "openapi"});
        assert!(validate_instance(&root, &ok, options).is_ok());

        let extra = json!({"name": "db", "category": "openapi", "color": "blue"});
        assert!(validate_instance(&root, &extra, ValidationOptions::default()).is_ok());
        assert!(matches!(
            validate_instance(&root, &extra, options),
            Err(RegistryError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn int32_properties_are_bounded() {
        let schema =
            validation_schema(&q("RuntimeComponentAutoScaling"), ValidationOptions::default())
                .unwrap();
        let min_replicas = &schema["definitions"]["pkg.apis.openj9.v1beta1.RuntimeComponentAutoScaling"]
            ["properties"]["minReplicas"];
        assert_eq!(min_replicas["maximum"], json!(i32::MAX));
        assert_eq!(min_replicas["minimum"], json!(i32::MIN));
    }

    #[test]
    fn out_of_range_replicas_are_rejected() {
        let root = q("RuntimeComponent");
        let in_range = json!({"spec": {"applicationImage": "a", "replicas": 2_147_483_647_i64}});
        assert!(validate_instance(&root, &in_range, ValidationOptions::default()).is_ok());

        let overflow = json!({"spec": {"applicationImage": "a", "replicas": 5_000_000_000_i64}});
        let Err(RegistryError::ValidationFailed { errors }) =
            validate_instance(&root, &overflow, ValidationOptions::default())
        else {
            panic!("expected ValidationFailed");
        };
        assert!(errors.iter().any(|e| e.contains("5000000000")), "{errors:?}");
    }

    #[test]
    fn missing_required_is_reported() {
        let result = validate_instance(
            &q("ServiceBindingConsumes"),
            &json!({"name": "db"}),
            ValidationOptions::default(),
        );
        let Err(RegistryError::ValidationFailed { errors }) = result else {
            panic!("expected ValidationFailed");
        };
        assert!(errors.iter().any(|e| e.contains("category")));
    }
}
