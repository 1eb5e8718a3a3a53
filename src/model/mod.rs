pub mod config;
pub mod list;
pub mod stats;
pub mod task;

pub use config::*;
pub use list::*;
pub use stats::*;
pub use task::*;
