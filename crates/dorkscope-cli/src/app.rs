//! Command dispatch.

use anyhow::{anyhow, bail, Context, Result};

use dorkscope_core::tracing::{init_tracing_with_filter, with_bootstrap_tracing};
use dorkscope_core::DorkscopeConfig;
use dorkscope_session::{build_from_config, ConfiguredOrchestrator};

use crate::cli::{Args, Command};
use crate::report::Report;
use crate::reporters::{create_reporter, Reporter};

/// Resolve configuration, run the command, and render its report.
pub fn run(args: Args) -> Result<String> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let overrides = args.overrides();
    let config = with_bootstrap_tracing(|| {
        DorkscopeConfig::load(&cwd, args.config.as_deref(), Some(&overrides))
    })?;
    init_tracing_with_filter(config.logging.effective_filter());

    let reporter = create_reporter(
        config.output.effective_format(),
        config.output.effective_color(),
    )
    .ok_or_else(|| anyhow!("unknown output format {:?}", config.output.effective_format()))?;

    let mut orchestrator = build_from_config(&config)?;
    tracing::debug!(format = reporter.name(), "dispatching command");
    execute(args.command, &mut orchestrator, reporter.as_ref())
}

/// Convert a 1-based position from the command line.
fn position(n: usize, what: &str) -> Result<usize> {
    n.checked_sub(1).ok_or_else(|| anyhow!("{what} numbers start at 1"))
}

fn render(reporter: &dyn Reporter, report: &Report<'_>) -> Result<String> {
    reporter.generate(report).map_err(|e| anyhow!(e))
}

fn execute(
    command: Command,
    orchestrator: &mut ConfiguredOrchestrator,
    reporter: &dyn Reporter,
) -> Result<String> {
    match command {
        Command::Generate { text } => {
            let session = orchestrator.generate(&text.join(" "))?;
            render(reporter, &Report::Session { session })
        }
        Command::Analyze { dork } => {
            if dork.trim().is_empty() {
                bail!("dork must not be empty");
            }
            let analysis = orchestrator.analyze(&dork);
            render(
                reporter,
                &Report::Analysis {
                    dork: &dork,
                    analysis: &analysis,
                },
            )
        }
        Command::Refine { text, pick } => {
            let index = position(pick, "refinement")?;
            orchestrator.generate(&text.join(" "))?;
            let session = orchestrator.apply_refinement(index)?;
            render(reporter, &Report::Session { session })
        }
        Command::History { clear: true, .. } => {
            orchestrator.clear_history()?;
            render(reporter, &Report::HistoryCleared)
        }
        Command::History { reuse: Some(n), .. } => {
            let session = orchestrator.reuse(position(n, "history entry")?)?;
            render(reporter, &Report::Session { session })
        }
        Command::History { .. } => render(
            reporter,
            &Report::History {
                entries: orchestrator.history(),
            },
        ),
    }
}
