//! tiret command-line entry point

use clap::Parser;

use tiret_cli::commands::Cli;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    match cli.run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(2);
        }
    }
}
