pub mod config;
pub mod export;
pub mod log;
pub mod logbook;
pub mod suggest;
pub mod timer;
