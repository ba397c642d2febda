//! Transitive dependency resolution.

use std::collections::{BTreeSet, HashSet, VecDeque};

use serde::Serialize;

use crate::definitions::Definitions;
use crate::error::RegistryError;

/// Everything a definition needs to be published on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyClosure {
    /// Definitions present in the map, root first, in breadth-first order.
    pub internal: Vec<String>,
    /// Names with no entry in the map, treated as opaque. Sorted.
    pub external: Vec<String>,
}

/// Walk dependency lists breadth-first starting at `root`.
///
/// # Errors
///
/// Returns `RegistryError::NotFound` if `root` is not a key of `definitions`.
pub fn dependency_closure(
    definitions: &Definitions,
    root: &str,
) -> Result<DependencyClosure, RegistryError> {
    if !definitions.contains_key(root) {
        return Err(RegistryError::NotFound(root.to_string()));
    }

    let mut internal = Vec::new();
    let mut external = BTreeSet::new();
    let mut seen: HashSet<&str> = HashSet::from([root]);
    let mut queue = VecDeque::from([root]);

    while let Some(name) = queue.pop_front() {
        let Some(definition) = definitions.get(name) else {
            external.insert(name.to_string());
            continue;
        };
        internal.push(name.to_string());

        for dependency in &definition.dependencies {
            if seen.insert(dependency.as_str()) {
                queue.push_back(dependency.as_str());
            }
        }
    }

    Ok(DependencyClosure {
        internal,
        external: external.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::definitions::get_openapi_definitions;
    use crate::reference::definitions_ref;

    fn q(kind: &str) -> String {
        rtc_core::v1beta1::qualify(kind)
    }

    #[test]
    fn leaf_definition_closure_is_itself() {
        let definitions = get_openapi_definitions(definitions_ref);
        let closure = dependency_closure(&definitions, &q("ServiceBindingConsumes")).unwrap();
        assert_eq!(closure.internal, vec![q("ServiceBindingConsumes")]);
        assert!(closure.external.is_empty());
    }

    #[test]
    fn status_closure_reaches_condition_and_time() {
        let definitions = get_openapi_definitions(definitions_ref);
        let closure = dependency_closure(&definitions, &q("RuntimeComponentStatus")).unwrap();
        assert_eq!(
            closure,
            DependencyClosure {
                internal: vec![q("RuntimeComponentStatus"), q("StatusCondition")],
                external: vec!["k8s.io/apimachinery/pkg/apis/meta/v1.Time".to_string()],
            }
        );
    }

    #[test]
    fn root_closure_covers_whole_package() {
        let definitions = get_openapi_definitions(definitions_ref);
        let closure = dependency_closure(&definitions, &q("RuntimeComponent")).unwrap();

        assert_eq!(closure.internal.first(), Some(&q("RuntimeComponent")));
        let reached: BTreeSet<&String> = closure.internal.iter().collect();
        let all: BTreeSet<&String> = definitions.keys().collect();
        assert_eq!(reached, all);
        assert!(closure.external.contains(&"k8s.io/api/core/v1.Container".to_string()));
        assert!(closure.external.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn unknown_root_is_not_found() {
        let definitions = get_openapi_definitions(definitions_ref);
        assert!(matches!(
            dependency_closure(&definitions, "nope"),
            Err(RegistryError::NotFound(_))
        ));
    }
}
