//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dorkscope_core::config::CliOverrides;

#[derive(Debug, Parser)]
#[command(
    name = "dorkscope",
    version,
    about = "Turn a plain description into a search dork and assess its risk"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Report format.
    #[arg(long, global = true, value_parser = ["console", "json"])]
    pub format: Option<String>,

    /// Disable ANSI colors in console output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file to use instead of ./dorkscope.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the simulated result volume.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Directory holding the history file.
    #[arg(long, global = true)]
    pub history_dir: Option<String>,

    /// Keep history in memory only.
    #[arg(long, global = true)]
    pub no_history: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Synthesize a dork from a description and analyze it.
    Generate {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Analyze an existing dork.
    Analyze { dork: String },
    /// Synthesize, then apply one of the suggested refinements.
    Refine {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Refinement number, starting at 1.
        #[arg(long)]
        pick: usize,
    },
    /// Show, clear, or re-run generation history.
    History {
        #[arg(long, conflicts_with = "reuse")]
        clear: bool,
        /// History entry number to re-run, starting at 1.
        #[arg(long)]
        reuse: Option<usize>,
    },
}

impl Args {
    /// Flags that override file and environment configuration.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            history_dir: self.history_dir.clone(),
            history_capacity: None,
            no_history: self.no_history,
            seed: self.seed,
            format: self.format.clone(),
            no_color: self.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "dorkscope", "generate", "admin", "login", "--format", "json", "--seed", "4",
        ])
        .unwrap();
        assert_eq!(args.format.as_deref(), Some("json"));
        assert_eq!(args.overrides().seed, Some(4));
        match args.command {
            Command::Generate { text } => assert_eq!(text, vec!["admin", "login"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn clear_conflicts_with_reuse() {
        assert!(Args::try_parse_from(["dorkscope", "history", "--clear", "--reuse", "1"]).is_err());
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Args::try_parse_from(["dorkscope", "analyze", "x", "--format", "xml"]).is_err());
    }
}
