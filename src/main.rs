mod cli;
mod config;
mod error;
mod record;
mod report;
mod session;
mod source;

use clap::Parser;
use cli::{Cli, Command};

use crate::config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load(cli.config.as_deref(), cli.source.as_deref())?;

    // Loaded once; every command works on the same read-only sequence.
    let records = source::load(&settings.source).await?;

    match cli.command {
        Command::Table { format, output } => {
            cli::table::render_table(&records, &format, output.as_deref())?
        }
        Command::Show { id, json } => cli::show::show_record(&records, id, json)?,
        Command::Export { dir, stdout } => {
            cli::export::export_records(&records, &settings, dir.as_deref(), stdout)?
        }
        Command::Review => cli::review::review(records, settings)?,
    }

    Ok(())
}
