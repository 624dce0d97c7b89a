mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod utils;

use std::io::{self, IsTerminal};

use clap::Parser;

use app::{Session, SessionOptions};
use cli::Cli;
use config::Config;
use utils::set_debug;

fn main() {
    let cli = Cli::parse();

    let config = if cli.no_config {
        Config::default()
    } else if let Some(path) = &cli.config {
        match Config::load_from(path, cli.debug) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    } else {
        Config::load(cli.debug)
    };
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    let stdin = io::stdin();
    let options = SessionOptions {
        use_color: cli.use_color(),
        json: cli.json,
        assume_yes: cli.yes,
        prompt: stdin.is_terminal(),
    };
    let mut session = Session::new(stdin.lock(), io::stdout().lock(), options);

    for item in &cli.items {
        if let Err(e) = session.seed(item) {
            eprintln!("Warning: skipping item \"{item}\": {e}");
        }
    }

    if let Err(e) = session.run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
