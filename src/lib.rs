pub mod auth;
pub mod cli;
pub mod config;
pub mod deck;
pub mod error;
pub mod logging;
pub mod model;
pub mod persist;
pub mod progress;
pub mod quiz;
pub mod review;
pub mod session;
pub mod source;
pub mod speech;
pub mod state;
pub mod store;
pub mod timer;
pub mod tui;
pub mod ui;
