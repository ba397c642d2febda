//! Typed mirror of the `v1beta1` RuntimeComponent API.
//!
//! Every struct derives `Serialize`, `Deserialize`, and `JsonSchema`; the JSON
//! property names match the published OpenAPI definitions one for one.
//! Kubernetes and third-party types embedded by reference (`Volume`, `Probe`,
//! `ObjectMeta`, ...) are carried as opaque `serde_json::Value`s.

mod bindings;
mod component;
mod condition;
mod route;
mod scheduling;
mod service;
mod storage;

pub use bindings::{
    RuntimeComponentBindings, ServiceBindingAuth, ServiceBindingConsumes, ServiceBindingProvides,
};
pub use component::{RuntimeComponent, RuntimeComponentSpec, RuntimeComponentStatus};
pub use condition::StatusCondition;
pub use route::{Certificate, RuntimeComponentRoute};
pub use scheduling::{RuntimeComponentAffinity, RuntimeComponentAutoScaling};
pub use service::RuntimeComponentService;
pub use storage::{RuntimeComponentMonitoring, RuntimeComponentStorage};

/// Package path under which the API types are published.
pub const PACKAGE: &str = "./pkg/apis/openj9/v1beta1";

/// Resource kind served by the CRD.
pub const KIND: &str = "RuntimeComponent";

/// Every kind defined in this package, in lexical order.
pub const KINDS: [&str; 15] = [
    "Certificate",
    "RuntimeComponent",
    "RuntimeComponentAffinity",
    "RuntimeComponentAutoScaling",
    "RuntimeComponentBindings",
    "RuntimeComponentMonitoring",
    "RuntimeComponentRoute",
    "RuntimeComponentService",
    "RuntimeComponentSpec",
    "RuntimeComponentStatus",
    "RuntimeComponentStorage",
    "ServiceBindingAuth",
    "ServiceBindingConsumes",
    "ServiceBindingProvides",
    "StatusCondition",
];

/// Fully-qualified name of a kind in this package.
#[must_use]
pub fn qualify(kind: &str) -> String {
    format!("{PACKAGE}.{kind}")
}
