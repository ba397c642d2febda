use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Persistent storage mounted into the component.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeComponentStorage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_path: Option<String>,
    /// `k8s.io/api/core/v1.PersistentVolumeClaim`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_claim_template: Option<Value>,
}

/// Prometheus scraping configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeComponentMonitoring {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    /// `github.com/coreos/prometheus-operator/pkg/apis/monitoring/v1.Endpoint`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<Vec<Value>>,
}
