use clap::Parser;
use cloud_cost_optimizer::{cli::Cli, config, run_command};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> cloud_cost_optimizer::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    // Load configuration
    let config = match &cli.config {
        Some(path) => config::load_config_file(path)?,
        None => config::load_config(std::env::current_dir().ok().as_deref())?,
    };

    run_command(cli.command, &config)
}
