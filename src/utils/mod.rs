pub mod date;
pub mod formatting;
pub mod path;

pub use formatting::{format_clock, format_duration};
