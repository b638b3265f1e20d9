pub mod analysis;
pub mod config;
pub mod export;
pub mod web;

pub use web::start_web_server;
