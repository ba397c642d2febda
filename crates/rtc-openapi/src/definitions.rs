//! The definition table of the `v1beta1` API package.
//!
//! One function per definition. Property tables and dependency lists are
//! declared literally; [`crate::check`] verifies they agree.

use std::collections::BTreeMap;

use rtc_core::v1beta1;

use crate::reference::Reference;
use crate::schema::{ListType, ObjectSchema, OpenApiDefinition, Property, Schema};

/// Map from fully-qualified type name to definition.
pub type Definitions = BTreeMap<String, OpenApiDefinition>;

type RefFn<'a> = &'a dyn Fn(&str) -> Reference;

const KIND_DESCRIPTION: &str = "Kind is a string value representing the REST resource this object represents. Servers may infer this from the endpoint the client submits requests to. Cannot be updated. In CamelCase. More info: https://git.k8s.io/community/contributors/devel/sig-architecture/api-conventions.md#types-kinds";

const API_VERSION_DESCRIPTION: &str = "APIVersion defines the versioned schema of this representation of an object. Servers should convert recognized schemas to the latest internal value, and may reject unrecognized values. More info: https://git.k8s.io/community/contributors/devel/sig-architecture/api-conventions.md#resources";

const CORE_V1: &str = "k8s.io/api/core/v1";
const META_V1: &str = "k8s.io/apimachinery/pkg/apis/meta/v1";
const RUNTIME: &str = "k8s.io/apimachinery/pkg/runtime";
const CERT_MANAGER_V1ALPHA2: &str = "github.com/jetstack/cert-manager/pkg/apis/certmanager/v1alpha2";
const PROMETHEUS_V1: &str = "github.com/coreos/prometheus-operator/pkg/apis/monitoring/v1";

fn internal(kind: &str) -> String {
    v1beta1::qualify(kind)
}

fn external(package: &str, kind: &str) -> String {
    format!("{package}.{kind}")
}

/// Build every definition of the API package.
///
/// Pure: the same callback always yields a deeply-equal map, and each call
/// allocates a fresh one.
pub fn get_openapi_definitions<F>(reference: F) -> Definitions
where
    F: Fn(&str) -> Reference,
{
    let r: RefFn<'_> = &reference;
    let definitions: Definitions = [
        ("Certificate", certificate(r)),
        ("RuntimeComponent", runtime_component(r)),
        ("RuntimeComponentAffinity", runtime_component_affinity(r)),
        ("RuntimeComponentAutoScaling", runtime_component_auto_scaling()),
        ("RuntimeComponentBindings", runtime_component_bindings(r)),
        ("RuntimeComponentMonitoring", runtime_component_monitoring(r)),
        ("RuntimeComponentRoute", runtime_component_route(r)),
        ("RuntimeComponentService", runtime_component_service(r)),
        ("RuntimeComponentSpec", runtime_component_spec(r)),
        ("RuntimeComponentStatus", runtime_component_status(r)),
        ("RuntimeComponentStorage", runtime_component_storage(r)),
        ("ServiceBindingAuth", service_binding_auth(r)),
        ("ServiceBindingConsumes", service_binding_consumes()),
        ("ServiceBindingProvides", service_binding_provides(r)),
        ("StatusCondition", status_condition(r)),
    ]
    .into_iter()
    .map(|(kind, definition)| (internal(kind), definition))
    .collect();

    tracing::debug!(count = definitions.len(), "built openapi definitions");
    definitions
}

/// Accumulates one definition.
struct DefinitionBuilder {
    schema: ObjectSchema,
    dependencies: Vec<String>,
}

impl DefinitionBuilder {
    fn new(description: &str) -> Self {
        Self {
            schema: ObjectSchema {
                description: description.to_string(),
                ..ObjectSchema::default()
            },
            dependencies: Vec::new(),
        }
    }

    fn property(mut self, name: &str, schema: Schema) -> Self {
        self.schema
            .properties
            .insert(name.to_string(), Property::from(schema));
        self
    }

    fn described(mut self, name: &str, description: &str, schema: Schema) -> Self {
        self.schema.properties.insert(
            name.to_string(),
            Property {
                description: Some(description.to_string()),
                schema,
            },
        );
        self
    }

    fn required(mut self, names: &[&str]) -> Self {
        self.schema.required = names.iter().map(ToString::to_string).collect();
        self
    }

    fn dependencies(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.dependencies = names.into_iter().collect();
        self
    }

    fn build(self) -> OpenApiDefinition {
        OpenApiDefinition {
            schema: self.schema,
            dependencies: self.dependencies,
        }
    }
}

fn string_map() -> Schema {
    Schema::map_of(Schema::string())
}

fn runtime_component(r: RefFn<'_>) -> OpenApiDefinition {
    DefinitionBuilder::new("RuntimeComponent is the Schema for the runtimecomponents API")
        .described("kind", KIND_DESCRIPTION, Schema::string())
        .described("apiVersion", API_VERSION_DESCRIPTION, Schema::string())
        .property("metadata", Schema::reference(r, &external(META_V1, "ObjectMeta")))
        .property("spec", Schema::reference(r, &internal("RuntimeComponentSpec")))
        .property("status", Schema::reference(r, &internal("RuntimeComponentStatus")))
        .dependencies([
            internal("RuntimeComponentSpec"),
            internal("RuntimeComponentStatus"),
            external(META_V1, "ObjectMeta"),
        ])
        .build()
}

fn runtime_component_affinity(r: RefFn<'_>) -> OpenApiDefinition {
    DefinitionBuilder::new("RuntimeComponentAffinity deployment affinity settings")
        .property("nodeAffinity", Schema::reference(r, &external(CORE_V1, "NodeAffinity")))
        .property("podAffinity", Schema::reference(r, &external(CORE_V1, "PodAffinity")))
        .property(
            "podAntiAffinity",
            Schema::reference(r, &external(CORE_V1, "PodAntiAffinity")),
        )
        .property(
            "architecture",
            Schema::array_of(Schema::string()).list_type(ListType::Set),
        )
        .property("nodeAffinityLabels", string_map())
        .dependencies([
            external(CORE_V1, "NodeAffinity"),
            external(CORE_V1, "PodAffinity"),
            external(CORE_V1, "PodAntiAffinity"),
        ])
        .build()
}

fn runtime_component_auto_scaling() -> OpenApiDefinition {
    DefinitionBuilder::new("RuntimeComponentAutoScaling ...")
        .property("targetCPUUtilizationPercentage", Schema::int32())
        .property("minReplicas", Schema::int32())
        .property("maxReplicas", Schema::int32())
        .build()
}

fn runtime_component_route(r: RefFn<'_>) -> OpenApiDefinition {
    DefinitionBuilder::new("RuntimeComponentRoute ...")
        .property("annotations", string_map())
        .property("termination", Schema::string())
        .property("insecureEdgeTerminationPolicy", Schema::string())
        .property("certificate", Schema::reference(r, &internal("Certificate")))
        .property("certificateSecretRef", Schema::string())
        .property("host", Schema::string())
        .property("path", Schema::string())
        .dependencies([internal("Certificate")])
        .build()
}

fn runtime_component_service(r: RefFn<'_>) -> OpenApiDefinition {
    DefinitionBuilder::new("RuntimeComponentService ...")
        .property("type", Schema::string())
        .property("port", Schema::int32())
        .property("targetPort", Schema::int32())
        .property("nodePort", Schema::int32())
        .property("portName", Schema::string())
        .property(
            "ports",
            Schema::array_of(Schema::reference(r, &external(CORE_V1, "ServicePort"))),
        )
        .property("annotations", string_map())
        .property(
            "consumes",
            Schema::array_of(Schema::reference(r, &internal("ServiceBindingConsumes")))
                .list_type(ListType::Atomic),
        )
        .property(
            "provides",
            Schema::reference(r, &internal("ServiceBindingProvides")),
        )
        .property("certificate", Schema::reference(r, &internal("Certificate")))
        .property("certificateSecretRef", Schema::string())
        .dependencies([
            internal("Certificate"),
            internal("ServiceBindingConsumes"),
            internal("ServiceBindingProvides"),
            external(CORE_V1, "ServicePort"),
        ])
        .build()
}

fn runtime_component_spec(r: RefFn<'_>) -> OpenApiDefinition {
    let containers = || {
        Schema::array_of(Schema::reference(r, &external(CORE_V1, "Container"))).list_map(&["name"])
    };

    DefinitionBuilder::new("RuntimeComponentSpec defines the desired state of RuntimeComponent")
        .property("version", Schema::string())
        .property("applicationImage", Schema::string())
        .property("replicas", Schema::int32())
        .property(
            "autoscaling",
            Schema::reference(r, &internal("RuntimeComponentAutoScaling")),
        )
        .property("pullPolicy", Schema::string())
        .property("pullSecret", Schema::string())
        .property(
            "volumes",
            Schema::array_of(Schema::reference(r, &external(CORE_V1, "Volume"))).list_map(&["name"]),
        )
        .property(
            "volumeMounts",
            Schema::array_of(Schema::reference(r, &external(CORE_V1, "VolumeMount")))
                .list_type(ListType::Atomic),
        )
        .property(
            "resourceConstraints",
            Schema::reference(r, &external(CORE_V1, "ResourceRequirements")),
        )
        .property("readinessProbe", Schema::reference(r, &external(CORE_V1, "Probe")))
        .property("livenessProbe", Schema::reference(r, &external(CORE_V1, "Probe")))
        .property(
            "service",
            Schema::reference(r, &internal("RuntimeComponentService")),
        )
        .property("expose", Schema::boolean())
        .property(
            "envFrom",
            Schema::array_of(Schema::reference(r, &external(CORE_V1, "EnvFromSource")))
                .list_type(ListType::Atomic),
        )
        .property(
            "env",
            Schema::array_of(Schema::reference(r, &external(CORE_V1, "EnvVar"))).list_map(&["name"]),
        )
        .property("serviceAccountName", Schema::string())
        .property(
            "architecture",
            Schema::array_of(Schema::string()).list_type(ListType::Set),
        )
        .property(
            "storage",
            Schema::reference(r, &internal("RuntimeComponentStorage")),
        )
        .property("createKnativeService", Schema::boolean())
        .property(
            "monitoring",
            Schema::reference(r, &internal("RuntimeComponentMonitoring")),
        )
        .property("createAppDefinition", Schema::boolean())
        .property("applicationName", Schema::string())
        .property("initContainers", containers())
        .property("sidecarContainers", containers())
        .property("route", Schema::reference(r, &internal("RuntimeComponentRoute")))
        .property(
            "bindings",
            Schema::reference(r, &internal("RuntimeComponentBindings")),
        )
        .property(
            "affinity",
            Schema::reference(r, &internal("RuntimeComponentAffinity")),
        )
        .required(&["applicationImage"])
        .dependencies([
            internal("RuntimeComponentAffinity"),
            internal("RuntimeComponentAutoScaling"),
            internal("RuntimeComponentBindings"),
            internal("RuntimeComponentMonitoring"),
            internal("RuntimeComponentRoute"),
            internal("RuntimeComponentService"),
            internal("RuntimeComponentStorage"),
            external(CORE_V1, "Container"),
            external(CORE_V1, "EnvFromSource"),
            external(CORE_V1, "EnvVar"),
            external(CORE_V1, "Probe"),
            external(CORE_V1, "ResourceRequirements"),
            external(CORE_V1, "Volume"),
            external(CORE_V1, "VolumeMount"),
        ])
        .build()
}

fn runtime_component_status(r: RefFn<'_>) -> OpenApiDefinition {
    DefinitionBuilder::new("RuntimeComponentStatus defines the observed state of RuntimeComponent")
        .property(
            "conditions",
            Schema::array_of(Schema::reference(r, &internal("StatusCondition")))
                .list_type(ListType::Atomic),
        )
        .property(
            "consumedServices",
            Schema::map_of(Schema::array_of(Schema::string())),
        )
        .property(
            "resolvedBindings",
            Schema::array_of(Schema::string()).list_type(ListType::Set),
        )
        .property("imageReference", Schema::string())
        .dependencies([internal("StatusCondition")])
        .build()
}

fn service_binding_consumes() -> OpenApiDefinition {
    DefinitionBuilder::new("ServiceBindingConsumes represents a service to be consumed")
        .property("name", Schema::string())
        .property("namespace", Schema::string())
        .property("category", Schema::string())
        .property("mountPath", Schema::string())
        .required(&["name", "category"])
        .build()
}

fn service_binding_provides(r: RefFn<'_>) -> OpenApiDefinition {
    DefinitionBuilder::new("ServiceBindingProvides represents information about")
        .property("category", Schema::string())
        .property("context", Schema::string())
        .property("protocol", Schema::string())
        .property("auth", Schema::reference(r, &internal("ServiceBindingAuth")))
        .required(&["category"])
        .dependencies([internal("ServiceBindingAuth")])
        .build()
}

fn status_condition(r: RefFn<'_>) -> OpenApiDefinition {
    DefinitionBuilder::new("StatusCondition ...")
        .property(
            "lastTransitionTime",
            Schema::reference(r, &external(META_V1, "Time")),
        )
        .property("lastUpdateTime", Schema::reference(r, &external(META_V1, "Time")))
        .property("reason", Schema::string())
        .property("message", Schema::string())
        .property("status", Schema::string())
        .property("type", Schema::string())
        .dependencies([external(META_V1, "Time")])
        .build()
}

fn certificate(r: RefFn<'_>) -> OpenApiDefinition {
    DefinitionBuilder::new("Certificate requested from cert-manager for a route or service")
        .property(
            "spec",
            Schema::reference(r, &external(CERT_MANAGER_V1ALPHA2, "CertificateSpec")),
        )
        .property("annotations", string_map())
        .required(&["spec"])
        .dependencies([external(CERT_MANAGER_V1ALPHA2, "CertificateSpec")])
        .build()
}

fn runtime_component_bindings(r: RefFn<'_>) -> OpenApiDefinition {
    DefinitionBuilder::new("RuntimeComponentBindings binds the component to a service binding resource")
        .property("autoDetect", Schema::boolean())
        .property("resourceRef", Schema::string())
        .property("embedded", Schema::reference(r, &external(RUNTIME, "RawExtension")))
        .dependencies([external(RUNTIME, "RawExtension")])
        .build()
}

fn runtime_component_monitoring(r: RefFn<'_>) -> OpenApiDefinition {
    DefinitionBuilder::new("RuntimeComponentMonitoring configures Prometheus scraping")
        .property("labels", string_map())
        .property(
            "endpoints",
            Schema::array_of(Schema::reference(r, &external(PROMETHEUS_V1, "Endpoint")))
                .list_type(ListType::Atomic),
        )
        .dependencies([external(PROMETHEUS_V1, "Endpoint")])
        .build()
}

fn runtime_component_storage(r: RefFn<'_>) -> OpenApiDefinition {
    DefinitionBuilder::new("RuntimeComponentStorage persistent storage mounted into the component")
        .property("size", Schema::string())
        .property("mountPath", Schema::string())
        .property(
            "volumeClaimTemplate",
            Schema::reference(r, &external(CORE_V1, "PersistentVolumeClaim")),
        )
        .dependencies([external(CORE_V1, "PersistentVolumeClaim")])
        .build()
}

fn service_binding_auth(r: RefFn<'_>) -> OpenApiDefinition {
    DefinitionBuilder::new("ServiceBindingAuth credentials a provided service exposes")
        .property(
            "username",
            Schema::reference(r, &external(CORE_V1, "SecretKeySelector")),
        )
        .property(
            "password",
            Schema::reference(r, &external(CORE_V1, "SecretKeySelector")),
        )
        .dependencies([external(CORE_V1, "SecretKeySelector")])
        .build()
}
