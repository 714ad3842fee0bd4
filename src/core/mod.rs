pub mod add;
pub mod alerts;
pub mod config;
pub mod del;
pub mod log;
