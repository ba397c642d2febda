//! Serde roundtrip and JsonSchema validation tests for the v1beta1 API types.

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use schemars::schema_for;
use serde_json::json;
use rtc_core::v1beta1::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn full_spec() -> RuntimeComponentSpec {
    RuntimeComponentSpec {
        version: Some("1.0.0".into()),
        application_image: "quay.io/example/app:1.0".into(),
        replicas: Some(3),
        autoscaling: Some(RuntimeComponentAutoScaling {
            target_cpu_utilization_percentage: Some(80),
            min_replicas: Some(2),
            max_replicas: Some(5),
        }),
        pull_policy: Some("IfNotPresent".into()),
        volumes: Some(vec![json!({"name": "data", "emptyDir": {}})]),
        volume_mounts: Some(vec![json!({"name": "data", "mountPath": "/data"})]),
        env: Some(vec![json!({"name": "LOG_LEVEL", "value": "debug"})]),
        expose: Some(true),
        architecture: Some(vec!["amd64".into(), "arm64".into()]),
        service: Some(RuntimeComponentService {
            service_type: Some("ClusterIP".into()),
            port: Some(9080),
            consumes: Some(vec![ServiceBindingConsumes {
                name: "db".into(),
                namespace: None,
                category: "openapi".into(),
                mount_path: Some("/bindings".into()),
            }]),
            ..RuntimeComponentService::default()
        }),
        storage: Some(RuntimeComponentStorage {
            size: Some("2Gi".into()),
            mount_path: Some("/logs".into()),
            volume_claim_template: None,
        }),
        ..RuntimeComponentSpec::default()
    }
}

roundtrip_and_validate!(
    runtime_component_roundtrip,
    RuntimeComponent,
    RuntimeComponent {
        kind: Some("RuntimeComponent".into()),
        api_version: Some("app.stacks/v1beta1".into()),
        metadata: Some(json!({"name": "demo", "namespace": "default"})),
        spec: full_spec(),
        status: Some(RuntimeComponentStatus {
            conditions: Some(vec![StatusCondition {
                last_transition_time: Some(Utc.with_ymd_and_hms(2026, 2, 8, 12, 0, 0).unwrap()),
                status: Some("True".into()),
                condition_type: Some("Reconciled".into()),
                ..StatusCondition::default()
            }]),
            consumed_services: Some(BTreeMap::from([(
                "openapi".to_string(),
                vec!["db".to_string()],
            )])),
            resolved_bindings: Some(vec!["demo-binding".into()]),
            image_reference: Some("quay.io/example/app@sha256:abc".into()),
        }),
    }
);

roundtrip_and_validate!(
    affinity_roundtrip,
    RuntimeComponentAffinity,
    RuntimeComponentAffinity {
        node_affinity: Some(json!({"requiredDuringSchedulingIgnoredDuringExecution": {}})),
        architecture: Some(vec!["ppc64le".into()]),
        node_affinity_labels: Some(BTreeMap::from([(
            "kubernetes.io/os".to_string(),
            "linux".to_string(),
        )])),
        ..RuntimeComponentAffinity::default()
    }
);

roundtrip_and_validate!(
    route_roundtrip,
    RuntimeComponentRoute,
    RuntimeComponentRoute {
        termination: Some("reencrypt".into()),
        host: Some("app.example.com".into()),
        path: Some("/".into()),
        certificate: Some(Certificate {
            spec: json!({"secretName": "app-tls", "issuerRef": {"name": "ca"}}),
            annotations: None,
        }),
        ..RuntimeComponentRoute::default()
    }
);

roundtrip_and_validate!(
    provides_roundtrip,
    ServiceBindingProvides,
    ServiceBindingProvides {
        category: "openapi".into(),
        context: Some("/api".into()),
        protocol: Some("http".into()),
        auth: Some(ServiceBindingAuth {
            username: Some(json!({"name": "creds", "key": "user"})),
            password: Some(json!({"name": "creds", "key": "pass"})),
        }),
    }
);

roundtrip_and_validate!(
    monitoring_roundtrip,
    RuntimeComponentMonitoring,
    RuntimeComponentMonitoring {
        labels: Some(BTreeMap::from([("team".to_string(), "runtime".to_string())])),
        endpoints: Some(vec![json!({"port": "metrics", "interval": "30s"})]),
    }
);

roundtrip_and_validate!(
    bindings_roundtrip,
    RuntimeComponentBindings,
    RuntimeComponentBindings {
        auto_detect: Some(true),
        resource_ref: Some("my-binding".into()),
        embedded: None,
    }
);

#[test]
fn wire_names_follow_api_conventions() {
    let value = serde_json::to_value(full_spec()).unwrap();
    assert_eq!(value["applicationImage"], "quay.io/example/app:1.0");
    assert_eq!(value["autoscaling"]["targetCPUUtilizationPercentage"], 80);
    assert_eq!(value["service"]["type"], "ClusterIP");
    assert_eq!(value["volumeMounts"][0]["mountPath"], "/data");
    assert!(value.get("pullSecret").is_none(), "unset fields are omitted");
}

#[test]
fn condition_type_serializes_as_type() {
    let condition = StatusCondition {
        condition_type: Some("Ready".into()),
        ..StatusCondition::default()
    };
    assert_eq!(serde_json::to_value(condition).unwrap(), json!({"type": "Ready"}));
}

#[test]
fn kinds_are_qualified_in_package() {
    assert_eq!(
        qualify("RuntimeComponentSpec"),
        "./pkg/apis/openj9/v1beta1.RuntimeComponentSpec"
    );
    let mut sorted = KINDS;
    sorted.sort_unstable();
    assert_eq!(sorted, KINDS);
}
