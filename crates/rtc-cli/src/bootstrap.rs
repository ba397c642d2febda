use anyhow::Context;
use rtc_config::RtcConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, honouring `--config` when given.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<RtcConfig> {
    let config = match &flags.config {
        Some(path) => RtcConfig::load_from(path)
            .with_context(|| format!("failed to load config file '{}'", path.display()))?,
        None => RtcConfig::load_with_dotenv().context("failed to load configuration")?,
    };

    tracing::debug!(
        flavor = %config.export.flavor,
        strict = config.validation.reject_unknown_fields,
        "configuration loaded"
    );
    Ok(config)
}
