//! The session orchestrator.

use serde::Serialize;

use dorkscope_core::errors::SessionResult;
use dorkscope_core::{
    DorkString, HistoryEntry, HistoryError, HistoryStore, RandomSource, SessionError,
};
use dorkscope_risk::{analyze, Analysis};
use dorkscope_synth::{synthesize, Synthesis};

use crate::history::HistoryLog;

/// The current synthesis and the analysis of the dork being shown.
///
/// `dork` starts as the synthesized dork and changes when a refinement is
/// applied; `synthesis` keeps the original refinements either way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub input: String,
    pub synthesis: Synthesis,
    pub dork: DorkString,
    pub analysis: Analysis,
}

/// Runs synthesis and analysis and owns the session state.
pub struct Orchestrator<S, R> {
    store: S,
    random: R,
    history: HistoryLog,
    current: Option<Session>,
}

impl<S: HistoryStore, R: RandomSource> Orchestrator<S, R> {
    /// Load saved history from `store`.
    ///
    /// A corrupt store is logged and the session starts with empty history;
    /// I/O failures are returned.
    pub fn new(mut store: S, random: R, capacity: usize) -> SessionResult<Self> {
        let entries = match store.load() {
            Ok(entries) => entries,
            Err(e @ HistoryError::Corrupt { .. }) => {
                tracing::warn!(error = %e, "discarding unreadable history");
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(entries = entries.len(), capacity, "loaded history");
        Ok(Self {
            store,
            random,
            history: HistoryLog::from_entries(entries, capacity),
            current: None,
        })
    }

    /// Synthesize a dork for `input`, analyze it, and record it in history.
    ///
    /// Blank input is rejected before anything runs.
    pub fn generate(&mut self, input: &str) -> SessionResult<&Session> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SessionError::EmptyIntent);
        }

        let synthesis = synthesize(input);
        let analysis = analyze(synthesis.dork.as_str(), &mut self.random);
        tracing::info!(
            dork = %synthesis.dork,
            tier = %analysis.assessment.tier(),
            "generated dork"
        );

        self.history.push(HistoryEntry::new(input, synthesis.dork.clone()));
        if let Err(e) = self.store.save(self.history.entries()) {
            tracing::warn!(error = %e, "failed to persist history");
        }

        let session = Session {
            input: input.to_string(),
            dork: synthesis.dork.clone(),
            synthesis,
            analysis,
        };
        Ok(self.current.insert(session))
    }

    /// Analyze an arbitrary dork without touching the session.
    pub fn analyze(&mut self, dork: &str) -> Analysis {
        analyze(dork, &mut self.random)
    }

    /// Switch the current dork to refinement `index` of the current synthesis
    /// and re-analyze it. History is not touched.
    pub fn apply_refinement(&mut self, index: usize) -> SessionResult<&Session> {
        let session = self
            .current
            .as_mut()
            .ok_or(SessionError::NoCurrentSynthesis)?;
        let refinement = session
            .synthesis
            .refinements
            .get(index)
            .ok_or(SessionError::RefinementOutOfRange {
                index,
                available: session.synthesis.refinements.len(),
            })?;

        let dork = refinement.dork.clone();
        tracing::debug!(label = %refinement.label, dork = %dork, "applying refinement");
        session.analysis = analyze(dork.as_str(), &mut self.random);
        session.dork = dork;
        Ok(session)
    }

    /// Re-run `generate` on the input of history entry `index`.
    pub fn reuse(&mut self, index: usize) -> SessionResult<&Session> {
        let input = self
            .history
            .get(index)
            .map(|entry| entry.input.clone())
            .ok_or(SessionError::HistoryIndexOutOfRange {
                index,
                available: self.history.len(),
            })?;
        self.generate(&input)
    }

    /// Forget all history, in memory and in the store.
    pub fn clear_history(&mut self) -> SessionResult<()> {
        self.history.clear();
        self.store.clear()?;
        tracing::debug!("cleared history");
        Ok(())
    }

    /// Drop the current dork and analysis.
    pub fn reset(&mut self) {
        self.current = None;
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
