pub mod config;
pub mod runner;

pub use config::RunnerConfig;
pub use runner::{BatchRunner, RunSummary};
