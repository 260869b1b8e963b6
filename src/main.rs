//! veloc-install CLI - Bootstrap installer for the VeloC library
//!
//! Entry point for the veloc-install command-line application.

use clap::Parser;

use veloc_install::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber; -v/-vv raise the level, -q mutes it
    let level = if cli.quiet {
        tracing::Level::ERROR
    } else {
        match cli.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let code = cli.run().await;
    std::process::exit(code);
}
