use anyhow::Context;
use serde_json::{Value, json};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::context::AppContext;
use crate::output::output;

/// The definition as published, with its key and dependency list.
pub fn describe(ctx: &AppContext, type_name: &str) -> anyhow::Result<Value> {
    let name = ctx
        .registry
        .resolve_name(type_name)
        .with_context(|| format!("unknown definition '{type_name}'"))?;
    let definition = ctx
        .registry
        .get(name)
        .with_context(|| format!("unknown definition '{type_name}'"))?;

    Ok(json!({
        "name": name,
        "schema": definition.schema,
        "dependencies": definition.dependencies,
    }))
}

/// Handle `rtc show`.
pub fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&describe(ctx, &args.type_name)?, flags.format)
}

#[cfg(test)]
mod tests {
    use rtc_config::RtcConfig;

    use super::*;

    #[test]
    fn describe_short_name() {
        let ctx = AppContext::init(RtcConfig::default());
        let value = describe(&ctx, "ServiceBindingProvides").unwrap();
        assert_eq!(value["name"], "./pkg/apis/openj9/v1beta1.ServiceBindingProvides");
        assert_eq!(value["schema"]["required"][0], "category");
        assert_eq!(
            value["dependencies"][0],
            "./pkg/apis/openj9/v1beta1.ServiceBindingAuth"
        );
    }

    #[test]
    fn describe_unknown_name_fails() {
        let ctx = AppContext::init(RtcConfig::default());
        let error = describe(&ctx, "Deployment").unwrap_err();
        assert!(error.to_string().contains("Deployment"));
    }
}
