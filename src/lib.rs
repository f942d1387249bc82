pub mod config;
pub mod models;
pub mod physics;
pub mod sweep;
pub mod viz;
