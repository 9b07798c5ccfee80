mod app;
mod client;
mod commands;
mod config;
mod credentials;
mod twitter;

pub use app::App;
pub use client::Error;
pub use config::Config;
