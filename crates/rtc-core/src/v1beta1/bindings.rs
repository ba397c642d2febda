use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// ServiceBindingConsumes represents a service to be consumed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBindingConsumes {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_path: Option<String>,
}

/// ServiceBindingProvides represents information about a provided service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBindingProvides {
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<ServiceBindingAuth>,
}

/// Credentials a provided service exposes to its consumers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBindingAuth {
    /// `k8s.io/api/core/v1.SecretKeySelector`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    /// `k8s.io/api/core/v1.SecretKeySelector`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Value>,
}

/// Binding of the component to a service binding resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeComponentBindings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_detect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_ref: Option<String>,
    /// `k8s.io/apimachinery/pkg/runtime.RawExtension`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Value>,
}
