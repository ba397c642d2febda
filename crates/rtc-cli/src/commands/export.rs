use std::fs;

use anyhow::Context;
use rtc_openapi::{DocumentFlavor, DocumentInfo};
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ExportArgs, FlavorArg};
use crate::context::AppContext;
use crate::output::output;

/// The flag wins over `export.flavor`.
pub fn resolve_flavor(arg: Option<FlavorArg>, ctx: &AppContext) -> anyhow::Result<DocumentFlavor> {
    match arg {
        Some(FlavorArg::V2) => Ok(DocumentFlavor::V2),
        Some(FlavorArg::V3) => Ok(DocumentFlavor::V3),
        None => ctx
            .config
            .export
            .flavor
            .parse()
            .map_err(|reason: String| anyhow::anyhow!(reason)),
    }
}

pub fn build(args: &ExportArgs, ctx: &AppContext) -> anyhow::Result<Value> {
    let flavor = resolve_flavor(args.flavor, ctx)?;
    let info = DocumentInfo {
        title: ctx.config.export.title.clone(),
        version: ctx.config.export.version.clone(),
    };
    Ok(ctx.registry.document(flavor, &info)?)
}

/// Handle `rtc export`.
pub fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let document = build(args, ctx)?;

    let Some(path) = &args.output else {
        return output(&document, flags.format);
    };

    let mut body = serde_json::to_string_pretty(&document)?;
    body.push('\n');
    fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "document exported");

    if !flags.quiet {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rtc_config::RtcConfig;

    use super::*;
    use crate::cli::OutputFormat;

    fn ctx_with_flavor(flavor: &str) -> AppContext {
        let mut config = RtcConfig::default();
        config.export.flavor = flavor.to_string();
        config.export.title = "Operator".to_string();
        AppContext::init(config)
    }

    fn args(flavor: Option<FlavorArg>) -> ExportArgs {
        ExportArgs {
            flavor,
            output: None,
        }
    }

    #[test]
    fn flag_overrides_config() {
        let ctx = ctx_with_flavor("v2");
        assert_eq!(
            resolve_flavor(Some(FlavorArg::V3), &ctx).unwrap(),
            DocumentFlavor::V3
        );
        assert_eq!(resolve_flavor(None, &ctx).unwrap(), DocumentFlavor::V2);
    }

    #[test]
    fn config_flavor_selects_layout() {
        let document = build(&args(None), &ctx_with_flavor("v3")).unwrap();
        assert_eq!(document["openapi"], "3.0.0");
        assert_eq!(document["info"]["title"], "Operator");
        assert!(document["components"]["schemas"]["pkg.apis.openj9.v1beta1.RuntimeComponent"]
            .is_object());
    }

    #[test]
    fn writes_document_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openapi.json");
        let ctx = ctx_with_flavor("v2");
        let flags = GlobalFlags {
            format: OutputFormat::Json,
            quiet: true,
            verbose: false,
            config: None,
        };
        let export = ExportArgs {
            flavor: None,
            output: Some(path.clone()),
        };

        handle(&export, &ctx, &flags).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["swagger"], "2.0");
        assert_eq!(written["definitions"].as_object().unwrap().len(), 15);
    }
}
