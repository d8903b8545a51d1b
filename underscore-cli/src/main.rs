use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, IsTerminal};
use std::process;
use underscore_core::{Config, RenameOptions};

mod cli;
mod logging;
mod rename;
mod render;
mod status;

use cli::{Cli, OutputFormat};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.debug);

    let exit_code = match run(&cli) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            eprintln!("Error: {e:#}");
            2
        },
    };

    if cli.wait {
        wait_for_enter();
    }

    process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<bool> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    let use_color = !cli.no_color
        && config
            .defaults
            .use_color
            .unwrap_or_else(|| io::stdout().is_terminal());

    let options = build_options(cli, &config);

    if cli.status {
        status::handle_status(&cli.paths, &options, cli.verbose, cli.output, use_color)
    } else {
        rename::handle_rename(&cli.paths, &options, cli.verbose, cli.output, use_color)
    }
}

/// Command-line flags override configured defaults
fn build_options(cli: &Cli, config: &Config) -> RenameOptions {
    let mut options = config.rename_options();
    options.force = cli.force || options.force;
    options.case_insensitive = cli.case.override_value();
    options
}

fn wait_for_enter() {
    eprintln!();
    eprintln!("Press ENTER to exit");
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
