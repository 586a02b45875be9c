//! Configuration system for dorkscope.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod dorkscope_config;
pub mod history_config;
pub mod logging_config;
pub mod output_config;
pub mod simulation_config;

pub use dorkscope_config::{CliOverrides, DorkscopeConfig};
pub use history_config::HistoryConfig;
pub use logging_config::LoggingConfig;
pub use output_config::OutputConfig;
pub use simulation_config::SimulationConfig;
