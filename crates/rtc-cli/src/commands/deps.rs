use crate::cli::GlobalFlags;
use crate::cli::root_commands::DepsArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rtc deps`.
pub fn handle(args: &DepsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let closure = ctx.registry.dependency_closure(&args.type_name)?;
    output(&closure, flags.format)
}
