//! Fully-qualified Go-style type names (`<package path>.<Kind>`).
//!
//! Definitions are keyed by names such as `./pkg/apis/openj9/v1beta1.RuntimeComponent`
//! or `k8s.io/api/core/v1.Volume`. Documents key them by their canonical form
//! (`pkg.apis.openj9.v1beta1.RuntimeComponent`, `io.k8s.api.core.v1.Volume`),
//! which contains no `/` and can be used inside a JSON pointer.

use std::fmt;

use crate::errors::CoreError;
use crate::v1beta1;

/// A parsed fully-qualified type name borrowing from its source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeName<'a> {
    package: &'a str,
    kind: &'a str,
}

impl<'a> TypeName<'a> {
    /// Split a qualified name at the first `.` of its last path segment.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTypeName` if the package or kind is empty.
    pub fn parse(qualified: &'a str) -> Result<Self, CoreError> {
        let invalid = |reason| CoreError::InvalidTypeName {
            name: qualified.to_string(),
            reason,
        };

        let segment_start = qualified.rfind('/').map_or(0, |index| index + 1);
        let dot = qualified[segment_start..]
            .find('.')
            .map(|offset| segment_start + offset)
            .ok_or_else(|| invalid("missing '.' between package and kind"))?;

        let package = &qualified[..dot];
        let kind = &qualified[dot + 1..];

        if package.is_empty() {
            return Err(invalid("empty package"));
        }
        if kind.is_empty() || kind.contains('.') {
            return Err(invalid("kind must be a single non-empty identifier"));
        }

        Ok(Self { package, kind })
    }

    #[must_use]
    pub const fn package(&self) -> &'a str {
        self.package
    }

    #[must_use]
    pub const fn kind(&self) -> &'a str {
        self.kind
    }

    /// Whether this type belongs to the `v1beta1` RuntimeComponent API package.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.package == v1beta1::PACKAGE
    }

    /// REST-friendly canonical name.
    ///
    /// A leading `./` is dropped, a domain-like first segment is reversed
    /// (`k8s.io` becomes `io.k8s`) and the remaining segments are joined with `.`.
    #[must_use]
    pub fn canonical(&self) -> String {
        let path = self.package.strip_prefix("./").unwrap_or(self.package);
        let mut parts: Vec<String> = Vec::new();

        for (index, segment) in path.split('/').filter(|s| !s.is_empty()).enumerate() {
            if index == 0 && segment.contains('.') {
                parts.extend(segment.rsplit('.').map(str::to_string));
            } else {
                parts.push(segment.to_string());
            }
        }

        parts.push(self.kind.to_string());
        parts.join(".")
    }
}

impl fmt::Display for TypeName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.package, self.kind)
    }
}

/// Canonical name for a qualified type name string.
///
/// # Errors
///
/// Returns `CoreError::InvalidTypeName` if `qualified` cannot be parsed.
pub fn canonical_name(qualified: &str) -> Result<String, CoreError> {
    TypeName::parse(qualified).map(|name| name.canonical())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_internal_name() {
        let name = TypeName::parse("./pkg/apis/openj9/v1beta1.RuntimeComponentSpec").unwrap();
        assert_eq!(name.package(), "./pkg/apis/openj9/v1beta1");
        assert_eq!(name.kind(), "RuntimeComponentSpec");
        assert!(name.is_internal());
    }

    #[test]
    fn parses_external_name_with_dotted_domain() {
        let name = TypeName::parse("k8s.io/apimachinery/pkg/apis/meta/v1.ObjectMeta").unwrap();
        assert_eq!(name.package(), "k8s.io/apimachinery/pkg/apis/meta/v1");
        assert_eq!(name.kind(), "ObjectMeta");
        assert!(!name.is_internal());
    }

    #[test]
    fn canonical_reverses_domain() {
        assert_eq!(
            canonical_name("k8s.io/api/core/v1.Volume").unwrap(),
            "io.k8s.api.core.v1.Volume"
        );
        assert_eq!(
            canonical_name(
                "github.com/jetstack/cert-manager/pkg/apis/certmanager/v1alpha2.CertificateSpec"
            )
            .unwrap(),
            "com.github.jetstack.cert-manager.pkg.apis.certmanager.v1alpha2.CertificateSpec"
        );
    }

    #[test]
    fn canonical_drops_relative_prefix() {
        assert_eq!(
            canonical_name("./pkg/apis/openj9/v1beta1.RuntimeComponent").unwrap(),
            "pkg.apis.openj9.v1beta1.RuntimeComponent"
        );
    }

    #[test]
    fn display_roundtrips_source() {
        let source = "k8s.io/api/core/v1.EnvVar";
        assert_eq!(TypeName::parse(source).unwrap().to_string(), source);
    }

    #[test]
    fn rejects_malformed_names() {
        for bad in ["RuntimeComponent", "k8s.io/api/core/v1", "./pkg/v1beta1.", ".Kind", "a/b.C.D"] {
            assert!(
                matches!(TypeName::parse(bad), Err(CoreError::InvalidTypeName { .. })),
                "expected '{bad}' to be rejected"
            );
        }
    }
}
