// ERTH - Erlangen town-hall queue exporter
// Core library functionality

pub mod cli;
pub mod models;
pub mod server;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::*;
pub use services::*;
