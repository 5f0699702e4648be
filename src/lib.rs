pub mod config;
pub mod error;
pub mod loader;
pub mod pins;
pub mod play;
pub mod scoring;
pub mod stats;
