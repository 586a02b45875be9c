//! Console reporter: human-readable output with color codes.

use std::fmt::Write;

use dorkscope_core::constants::MAX_SAMPLE_RESULTS;
use dorkscope_core::{HistoryEntry, RiskTier};
use dorkscope_risk::Analysis;
use dorkscope_session::Session;

use super::Reporter;
use crate::report::Report;

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn color_start(&self, tier: RiskTier) -> &'static str {
        if !self.use_color {
            return "";
        }
        match tier {
            RiskTier::Critical => "\x1b[1;31m", // bold red
            RiskTier::High => "\x1b[31m",       // red
            RiskTier::Medium => "\x1b[33m",     // yellow
            RiskTier::Low => "\x1b[36m",        // cyan
            RiskTier::Minimal => "\x1b[32m",    // green
        }
    }

    fn bold(&self) -> &'static str {
        if self.use_color {
            "\x1b[1m"
        } else {
            ""
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }

    fn heading(&self, out: &mut String, title: &str) {
        let _ = writeln!(out, "\n{}{}{}", self.bold(), title, self.color_end());
    }

    fn session(&self, out: &mut String, session: &Session) {
        let synthesis = &session.synthesis;
        let _ = writeln!(out, "{}Dork:{} {}", self.bold(), self.color_end(), session.dork);
        if session.dork != synthesis.dork {
            let _ = writeln!(out, "  refined from: {}", synthesis.dork);
        }
        let _ = writeln!(out, "{}", synthesis.explanation);

        if !synthesis.refinements.is_empty() {
            self.heading(out, "Refinements");
            for (i, r) in synthesis.refinements.iter().enumerate() {
                let _ = writeln!(out, "  {}. {:<22} {}", i + 1, r.label, r.dork);
            }
        }

        self.analysis(out, &session.analysis);
    }

    fn analysis(&self, out: &mut String, analysis: &Analysis) {
        let assessment = &analysis.assessment;
        let tier = assessment.tier();
        let _ = writeln!(
            out,
            "\n{}{} ({:.2}){}",
            self.color_start(tier),
            tier.label(),
            assessment.score(),
            self.color_end()
        );
        for (kind, factor) in assessment.factors.iter() {
            let _ = writeln!(
                out,
                "  {:<16} {}/4  {}",
                kind.title(),
                factor.score,
                factor.description
            );
        }

        let impact = &analysis.impact;
        self.heading(out, "Impact");
        let _ = writeln!(out, "  Estimated results  {}", analysis.results.count);
        let _ = writeln!(out, "  Affected sites     {}", impact.affected_label());
        let _ = writeln!(out, "  Reach              {}", impact.reach);

        if !analysis.results.samples.is_empty() {
            self.heading(out, "Sample results (simulated)");
            for hit in analysis.results.samples.iter().take(MAX_SAMPLE_RESULTS) {
                let _ = writeln!(out, "  {}", hit.title);
                let _ = writeln!(out, "  {}", hit.url);
                let _ = writeln!(out, "  {}\n", hit.snippet);
            }
        }

        if !analysis.recommendations.is_empty() {
            self.heading(out, "Recommendations");
            for rec in &analysis.recommendations {
                let _ = writeln!(out, "  • {}", rec.title);
                let _ = writeln!(out, "    {}", rec.description);
            }
        }
    }

    fn history(&self, out: &mut String, entries: &[HistoryEntry]) {
        if entries.is_empty() {
            out.push_str("No generation history yet\n");
            return;
        }
        for (i, entry) in entries.iter().enumerate() {
            let _ = writeln!(out, "{:>2}. [{}] {}", i + 1, entry.time_label(), entry.input);
            let _ = writeln!(out, "    {}", entry.dork);
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &Report<'_>) -> Result<String, String> {
        let mut out = String::new();
        match report {
            Report::Session { session } => self.session(&mut out, session),
            Report::Analysis { dork, analysis } => {
                let _ = writeln!(out, "{}Dork:{} {}", self.bold(), self.color_end(), dork);
                self.analysis(&mut out, analysis);
            }
            Report::History { entries } => self.history(&mut out, entries),
            Report::HistoryCleared => out.push_str("History cleared\n"),
        }
        Ok(out)
    }
}

