use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::bindings::RuntimeComponentBindings;
use super::condition::StatusCondition;
use super::route::RuntimeComponentRoute;
use super::scheduling::{RuntimeComponentAffinity, RuntimeComponentAutoScaling};
use super::service::RuntimeComponentService;
use super::storage::{RuntimeComponentMonitoring, RuntimeComponentStorage};

/// RuntimeComponent is the Schema for the runtimecomponents API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeComponent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// `k8s.io/apimachinery/pkg/apis/meta/v1.ObjectMeta`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub spec: RuntimeComponentSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RuntimeComponentStatus>,
}

/// RuntimeComponentSpec defines the desired state of RuntimeComponent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeComponentSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub application_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscaling: Option<RuntimeComponentAutoScaling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_mounts: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_constraints: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_probe: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_probe: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<RuntimeComponentService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expose: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_from: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<RuntimeComponentStorage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_knative_service: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<RuntimeComponentMonitoring>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_app_definition: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_containers: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidecar_containers: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RuntimeComponentRoute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bindings: Option<RuntimeComponentBindings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affinity: Option<RuntimeComponentAffinity>,
}

/// RuntimeComponentStatus defines the observed state of RuntimeComponent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeComponentStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<StatusCondition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_services: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_bindings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_reference: Option<String>,
}

impl RuntimeComponent {
    /// A minimal resource running `application_image`.
    #[must_use]
    pub fn new(application_image: impl Into<String>) -> Self {
        Self {
            kind: Some(super::KIND.to_string()),
            api_version: None,
            metadata: None,
            spec: RuntimeComponentSpec {
                application_image: application_image.into(),
                ..RuntimeComponentSpec::default()
            },
            status: None,
        }
    }

    /// Condition of the given type, if the status reports one.
    #[must_use]
    pub fn condition(&self, condition_type: &str) -> Option<&StatusCondition> {
        self.status
            .as_ref()?
            .conditions
            .as_ref()?
            .iter()
            .find(|c| c.condition_type.as_deref() == Some(condition_type))
    }
}
