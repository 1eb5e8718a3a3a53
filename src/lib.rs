pub mod cli;
pub mod io;
pub mod model;
pub mod tui;
pub mod util;
