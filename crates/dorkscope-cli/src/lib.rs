//! # dorkscope-cli
//!
//! Argument parsing, command dispatch, and report rendering for the
//! `dorkscope` binary.

pub mod app;
pub mod cli;
pub mod report;
pub mod reporters;

pub use app::run;
pub use cli::{Args, Command};
pub use report::Report;
