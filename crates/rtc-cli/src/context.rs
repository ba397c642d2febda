use rtc_config::RtcConfig;
use rtc_openapi::SchemaRegistry;

/// Shared resources initialized once at startup.
pub struct AppContext {
    pub registry: SchemaRegistry,
    pub config: RtcConfig,
}

impl AppContext {
    pub fn init(config: RtcConfig) -> Self {
        let registry = SchemaRegistry::new();
        tracing::debug!(definitions = registry.schema_count(), "registry ready");
        Self { registry, config }
    }
}
