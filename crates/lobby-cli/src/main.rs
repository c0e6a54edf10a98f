mod cli;
mod console;
mod instructions;
mod menu;
mod prompter;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::console::ConsoleSink;
use crate::session::Session;

fn main() -> Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr so they stay out of the menu on stdout
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("lobby={}", args.log_level).parse()?)
        .add_directive(format!("lobby_core={}", args.log_level).parse()?);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = args.load_config()?;

    let stdin = std::io::stdin();
    if let Some(session) = Session::start(config, stdin.lock(), ConsoleSink) {
        session.run();
    }

    Ok(())
}
