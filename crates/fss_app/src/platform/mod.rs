//! Host side of `fss-browse`: configuration, logging, the message loop and page output.
mod app;
mod config;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
