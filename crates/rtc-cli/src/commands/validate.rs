use std::io::Read;
use std::path::Path;

use anyhow::Context;
use rtc_openapi::{RegistryError, ValidationOptions};
use serde::Serialize;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub definition: String,
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Read a JSON manifest from `path`, or stdin when `path` is `-`.
pub fn read_manifest(path: &Path) -> anyhow::Result<Value> {
    let text = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read manifest from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

pub fn report(
    ctx: &AppContext,
    type_name: &str,
    manifest: &Value,
    strict: bool,
) -> anyhow::Result<ValidationReport> {
    let definition = ctx
        .registry
        .resolve_name(type_name)
        .ok_or_else(|| RegistryError::NotFound(type_name.to_string()))?
        .to_string();
    let options = ValidationOptions {
        reject_unknown_fields: strict || ctx.config.validation.reject_unknown_fields,
    };

    let errors = match ctx.registry.validate_with(&definition, manifest, options) {
        Ok(()) => Vec::new(),
        Err(RegistryError::ValidationFailed { errors }) => errors,
        Err(error) => return Err(error.into()),
    };

    Ok(ValidationReport {
        definition,
        valid: errors.is_empty(),
        errors,
    })
}

/// Handle `rtc validate`. Prints the report, then fails if the manifest is invalid.
pub fn handle(args: &ValidateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let manifest = read_manifest(&args.file)?;
    let report = report(ctx, &args.type_name, &manifest, args.strict)?;
    output(&report, flags.format)?;

    if !report.valid {
        anyhow::bail!(
            "{} does not conform to {} ({} error(s))",
            args.file.display(),
            report.definition,
            report.errors.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rtc_config::RtcConfig;
    use serde_json::json;

    use super::*;

    fn ctx() -> AppContext {
        AppContext::init(RtcConfig::default())
    }

    #[test]
    fn valid_manifest_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("component.json");
        std::fs::write(
            &path,
            r#"{"apiVersion": "app.stacks/v1beta1", "kind": "RuntimeComponent",
                "spec": {"applicationImage": "quay.io/example/app:1.0", "replicas": 3}}"#,
        )
        .unwrap();

        let manifest = read_manifest(&path).unwrap();
        let report = report(&ctx(), "RuntimeComponent", &manifest, false).unwrap();
        assert!(report.valid);
        assert_eq!(
            report.definition,
            "./pkg/apis/openj9/v1beta1.RuntimeComponent"
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(read_manifest(&path).is_err());
    }

    #[test]
    fn invalid_manifest_lists_errors() {
        let manifest = json!({"spec": {"replicas": "three"}});
        let report = report(&ctx(), "RuntimeComponent", &manifest, false).unwrap();
        assert!(!report.valid);
        assert!(report.errors.len() >= 2);
    }

    #[test]
    fn strict_flag_or_config_rejects_unknown_fields() {
        let manifest = json!({"name": "db", "category": "openapi", "color": "blue"});
        assert!(report(&ctx(), "ServiceBindingConsumes", &manifest, false).unwrap().valid);
        assert!(!report(&ctx(), "ServiceBindingConsumes", &manifest, true).unwrap().valid);

        let mut config = RtcConfig::default();
        config.validation.reject_unknown_fields = true;
        let strict_ctx = AppContext::init(config);
        assert!(!report(&strict_ctx, "ServiceBindingConsumes", &manifest, false).unwrap().valid);
    }

    #[test]
    fn unknown_definition_is_an_error() {
        let error = report(&ctx(), "Deployment", &json!({}), false).unwrap_err();
        assert!(error.to_string().contains("Deployment"));
    }
}
