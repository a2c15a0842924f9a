pub mod api;
pub mod cli;
pub mod config;
pub mod confirm;
pub mod error;
pub mod logging;
pub mod model;
pub mod notify;
pub mod utils;
pub mod views;
