mod cli;
mod paths;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    //  Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app_paths = paths::Paths::resolve();
    app_paths.bootstrap_path_env();

    let args = cli::Cli::parse();

    match args.command {
        cli::Commands::Check(check_args) => cli::check::execute(check_args),
        cli::Commands::Show(show_args) => cli::show::execute(show_args),
        cli::Commands::Env(env_args) => cli::env::execute(env_args, &app_paths),
    }
}
