mod color_choice;
mod log_level;
mod operation;

pub use color_choice::ColorChoice;
pub use log_level::LogLevel;
pub use operation::Operation;
