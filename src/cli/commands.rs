use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tada", about = concat!("[x] tada v", env!("CARGO_PKG_VERSION"), " - a tiny terminal todo list"), version)]
pub struct Cli {
    /// Use a specific config file instead of the default location
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Disable the background rain animation
    #[arg(long = "no-rain")]
    pub no_rain: bool,
}
