//! The controller that owns the interface state and dispatches requests.

use crate::config::Messages;
use crate::error::Result;
use crate::models::DrugResult;
use crate::network::AnalysisClient;
use crate::state::{AnalyzerState, DispatchTicket};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Owns one [`AnalyzerState`] and the client used to fill it.
///
/// The state lock is only taken for the synchronous transitions, never
/// across the network call.
pub struct Analyzer<C> {
    client: C,
    state: Mutex<AnalyzerState>,
}

impl<C: AnalysisClient> Analyzer<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: Mutex::new(AnalyzerState::new()),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Copy of the current state, for rendering.
    pub fn snapshot(&self) -> AnalyzerState {
        self.lock_state().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock_state().is_loading()
    }

    /// Replace the held input text. Refused while loading.
    pub fn set_input(&self, text: impl Into<String>) -> bool {
        self.lock_state().set_input(text)
    }

    /// Set the input to `query` and dispatch it, under a single lock.
    ///
    /// While another dispatch is loading, the input is left alone and
    /// [`PharmaError::DispatchInProgress`](crate::PharmaError::DispatchInProgress)
    /// is returned.
    pub async fn analyze(&self, query: &str) -> Result<Vec<DrugResult>> {
        let begun = self.lock_state().submit(query);
        self.run(begun).await
    }

    /// Send the held input to the analysis service.
    ///
    /// On success the results replace the held ones; on failure the error
    /// banner is set and the old results stay. Loading is cleared when this
    /// returns, and also if the future is dropped before completing.
    pub async fn dispatch(&self) -> Result<Vec<DrugResult>> {
        let begun = self.lock_state().begin_dispatch();
        self.run(begun).await
    }

    async fn run(&self, begun: Result<DispatchTicket>) -> Result<Vec<DrugResult>> {
        let ticket = match begun {
            Ok(ticket) => ticket,
            Err(err) => {
                debug!("Dispatch refused: {}", err);
                return Err(err);
            }
        };

        debug!(
            "Dispatch #{} for {:?}",
            ticket.generation,
            ticket.query.drugs()
        );
        let mut guard = DispatchGuard {
            state: &self.state,
            generation: ticket.generation,
            settled: false,
        };

        match self.client.analyze(&ticket.query).await {
            Ok(results) => {
                info!(
                    "Dispatch #{} returned {} result(s)",
                    ticket.generation,
                    results.len()
                );
                guard.settle(|state, generation| state.apply_success(generation, results.clone()));
                Ok(results)
            }
            Err(err) => {
                warn!("Dispatch #{} failed: {}", ticket.generation, err);
                let message = err.user_message();
                guard.settle(|state, generation| state.apply_failure(generation, message));
                Err(err)
            }
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, AnalyzerState> {
        self.state.lock().expect("analyzer state lock poisoned")
    }
}

/// Clears the loading flag for one dispatch, whatever happens to it.
///
/// If the dispatch future is dropped or unwinds before settling, the drop
/// records the generic failure message.
struct DispatchGuard<'a> {
    state: &'a Mutex<AnalyzerState>,
    generation: u64,
    settled: bool,
}

impl DispatchGuard<'_> {
    fn settle(&mut self, apply: impl FnOnce(&mut AnalyzerState, u64) -> bool) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if !apply(&mut state, self.generation) {
            debug!("Discarding stale outcome of dispatch #{}", self.generation);
        }
        self.settled = true;
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        warn!("Dispatch #{} abandoned before completing", self.generation);
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.apply_failure(self.generation, Messages::REQUEST_FAILED);
    }
}
