use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::List => commands::list::handle(ctx, flags),
        Commands::Show(args) => commands::show::handle(args, ctx, flags),
        Commands::Deps(args) => commands::deps::handle(args, ctx, flags),
        Commands::Check => commands::check::handle(ctx, flags),
        Commands::Export(args) => commands::export::handle(args, ctx, flags),
        Commands::Validate(args) => commands::validate::handle(args, ctx, flags),
    }
}
