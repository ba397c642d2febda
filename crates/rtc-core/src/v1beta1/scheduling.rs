use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// RuntimeComponentAffinity deployment affinity settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeComponentAffinity {
    /// `k8s.io/api/core/v1.NodeAffinity`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_affinity: Option<Value>,
    /// `k8s.io/api/core/v1.PodAffinity`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_affinity: Option<Value>,
    /// `k8s.io/api/core/v1.PodAntiAffinity`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_anti_affinity: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_affinity_labels: Option<BTreeMap<String, String>>,
}

/// Horizontal pod autoscaling bounds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeComponentAutoScaling {
    #[serde(
        rename = "targetCPUUtilizationPercentage",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_cpu_utilization_percentage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_replicas: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_replicas: Option<i32>,
}
