use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use studip_client::Client;

use cli::Args;
use config::Config;

mod cli;
mod config;
mod export;
mod mirror;

fn main() -> Result<()> {
    let args = Args::parse();

    TermLogger::init(
        if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let output = args.output.as_ref().unwrap_or(&config.output_dir);

    let client = Client::connect(&config.base_url, config.credentials())
        .context("error setting up http client")?;

    let stats = export::export_all(&client, output, &args.courses)?;
    info!(
        "done: {} files ({} bytes) written to {}",
        stats.files, stats.bytes, output
    );

    Ok(())
}
