use anyhow::Result;
use clap::Parser;

use keycalc::args::Cli;
use keycalc::batch::run_keys;
use keycalc::config::Config;
use keycalc::logging::{init_tracing, LogTarget};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(theme) = cli.theme {
        config.ui.theme = theme;
    }

    match cli.keys {
        Some(keys) => {
            init_tracing(&config.logging, LogTarget::Stderr)?;
            let state = run_keys(&keys)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                println!("{}", state.display);
            }
        }
        None => {
            init_tracing(&config.logging, LogTarget::for_interactive(&config.logging))?;
            keycalc::ui::runtime::run(&config)?;
        }
    }

    Ok(())
}
