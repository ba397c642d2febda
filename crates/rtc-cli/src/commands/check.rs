use rtc_openapi::{RegistryError, SchemaRegistry};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub consistent: bool,
    pub definitions: usize,
    pub violations: Vec<String>,
}

pub fn report(registry: &SchemaRegistry) -> anyhow::Result<CheckReport> {
    let violations = match registry.check() {
        Ok(()) => Vec::new(),
        Err(RegistryError::Inconsistent { violations }) => {
            violations.iter().map(ToString::to_string).collect()
        }
        Err(error) => return Err(error.into()),
    };

    Ok(CheckReport {
        consistent: violations.is_empty(),
        definitions: registry.schema_count(),
        violations,
    })
}

/// Handle `rtc check`. Prints the report, then fails if it is not consistent.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = report(&ctx.registry)?;
    output(&report, flags.format)?;

    if !report.consistent {
        anyhow::bail!("{} consistency violation(s)", report.violations.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_report_is_consistent() {
        let report = report(&SchemaRegistry::new()).unwrap();
        assert!(report.consistent);
        assert_eq!(report.definitions, 15);
        assert!(report.violations.is_empty());
    }
}
