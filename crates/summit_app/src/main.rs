mod cli;
mod config;
mod pipeline;

use clap::Parser;
use log::LevelFilter;
use summit_logging::{summit_error, LogDestination};

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let destination = cli.log.destination();
    let echo = echo_errors_to_stderr(&destination);
    summit_logging::initialize(destination, level);

    if let Err(err) = run(cli) {
        summit_error!("{:#}", err);
        if echo {
            eprintln!("error: {err:#}");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Extract { html, out } => {
            pipeline::extract_page(&html, &out, &config)?;
        }
        Command::Render { talks, out } => {
            pipeline::render_talks(&talks, &out, &config)?;
        }
        Command::Run { html, talks, out } => {
            pipeline::extract_page(&html, &talks, &config)?;
            pipeline::render_talks(&talks, &out, &config)?;
        }
    }
    Ok(())
}

/// Errors already reach the terminal unless logging goes to a file only.
fn echo_errors_to_stderr(destination: &LogDestination) -> bool {
    matches!(destination, LogDestination::File(_))
}
