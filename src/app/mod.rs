//! Application-level configuration

pub mod config;

pub use config::EngineConfig;
