pub mod app;
pub mod celebrate;
pub mod input;
pub mod render;
pub mod theme;

pub use app::run;
