use std::process;

use clap::Parser;

#[macro_use]
extern crate log;

fn main() {
    // ----------------------------- Run CLI Parser
    let cli = parser::Cli::parse();

    // ----------------------------- Init logger.
    let verbosity = if cli.quiet { 0 } else { cli.verbose + 1 };
    if let Err(e) = logger::Logger::init(verbosity) {
        eprintln!("Failed to initialize the logger: {e}");
    }

    // ----------------------------- Run the appropriate modules.
    if let Err(e) = mendel_rs::run(&cli) {
        error!("{e:?}");
        process::exit(1);
    };
}
