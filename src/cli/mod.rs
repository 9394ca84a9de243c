mod app;
mod opts;

pub use app::*;
pub use opts::*;
