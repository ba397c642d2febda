use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List every registered definition.
    List,
    /// Show one definition in OpenAPI form.
    Show(ShowArgs),
    /// Transitive dependencies of a definition.
    Deps(DepsArgs),
    /// Verify the structural invariants of the registry.
    Check,
    /// Export the registry as an OpenAPI document.
    Export(ExportArgs),
    /// Validate a JSON manifest against a definition.
    Validate(ValidateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Definition name: a kind (`RuntimeComponentSpec`) or fully-qualified name.
    pub type_name: String,
}

#[derive(Clone, Debug, Args)]
pub struct DepsArgs {
    /// Definition name: a kind or fully-qualified name.
    pub type_name: String,
}

/// Document layout selectable on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum FlavorArg {
    V2,
    V3,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// OpenAPI layout (defaults to `export.flavor` from config).
    #[arg(long, value_enum)]
    pub flavor: Option<FlavorArg>,

    /// Write the document to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Definition name: a kind or fully-qualified name.
    pub type_name: String,

    /// JSON manifest to validate (`-` reads stdin).
    pub file: PathBuf,

    /// Reject properties the definition does not declare.
    #[arg(long)]
    pub strict: bool,
}
