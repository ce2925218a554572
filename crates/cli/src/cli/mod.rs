pub mod check;
pub mod env;
pub mod show;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "modelfile",
    version,
    about = "Inspection tools for model-definition files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a Modelfile and report whether it is valid.
    Check(CheckArgs),

    /// Print the instructions parsed from a Modelfile.
    Show(ShowArgs),

    /// Display the platform paths used by the tools.
    Env(EnvArgs),
}

//  Subcommand argument structs

#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Path to the Modelfile.
    pub path: std::path::PathBuf,
}

#[derive(Debug, clap::Args)]
pub struct ShowArgs {
    /// Path to the Modelfile.
    pub path: std::path::PathBuf,

    /// Emit JSON instead of an aligned listing.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args)]
pub struct EnvArgs {
    /// Emit JSON instead of KEY=value lines.
    #[arg(long)]
    pub json: bool,
}
