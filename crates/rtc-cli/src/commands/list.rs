use rtc_core::TypeName;
use rtc_openapi::SchemaRegistry;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// One row of `rtc list`.
#[derive(Debug, Serialize)]
pub struct DefinitionSummary {
    pub kind: String,
    pub name: String,
    pub description: String,
    pub properties: usize,
    pub required: usize,
    pub dependencies: usize,
}

pub fn summarize(registry: &SchemaRegistry) -> Vec<DefinitionSummary> {
    registry
        .definitions()
        .iter()
        .map(|(name, definition)| DefinitionSummary {
            kind: TypeName::parse(name)
                .map_or_else(|_| name.clone(), |type_name| type_name.kind().to_string()),
            name: name.clone(),
            description: definition.schema.description.clone(),
            properties: definition.schema.properties.len(),
            required: definition.schema.required.len(),
            dependencies: definition.dependencies.len(),
        })
        .collect()
}

/// Handle `rtc list`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&summarize(&ctx.registry), flags.format)
}
