use clap::Parser;

use tada::cli::commands::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = tada::tui::run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
