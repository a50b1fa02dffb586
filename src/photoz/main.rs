use clap::Parser;
use colored::Colorize;

mod args;
mod cli;

use args::Cli;

fn main() {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    if let Err(e) = cli::run(cli) {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}
