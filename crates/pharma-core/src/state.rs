//! Interface state and its transitions.
//!
//! [`AnalyzerState`] holds everything the page shows: the input text, the
//! last results, and the request lifecycle. All changes go through the
//! transition methods here, which are plain synchronous functions and can be
//! tested without a network or a renderer.

use crate::error::{PharmaError, Result};
use crate::models::DrugResult;
use crate::query::Query;
use serde::Serialize;

/// Lifecycle of the most recent dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading { generation: u64 },
    Failed { message: String },
}

/// Handle for an in-flight dispatch.
///
/// Outcomes are only applied when the ticket's generation is still the one
/// loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTicket {
    pub generation: u64,
    pub query: Query,
}

/// The whole interface state, owned by one controller.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalyzerState {
    input: String,
    results: Vec<DrugResult>,
    status: RequestStatus,
    generation: u64,
}

impl AnalyzerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn results(&self) -> &[DrugResult] {
        &self.results
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, RequestStatus::Loading { .. })
    }

    /// Message for the error banner, if the last dispatch failed.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            RequestStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Number of dispatches that have reached the network.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the input text. No validation happens here.
    ///
    /// Returns `false` and leaves the text untouched while loading.
    pub fn set_input(&mut self, text: impl Into<String>) -> bool {
        if self.is_loading() {
            return false;
        }
        self.input = text.into();
        true
    }

    /// Start a dispatch from the current input.
    ///
    /// Blank input sets the validation message and returns the error without
    /// entering the loading state. A dispatch already in flight is refused
    /// with [`PharmaError::DispatchInProgress`] and nothing changes.
    pub fn begin_dispatch(&mut self) -> Result<DispatchTicket> {
        if self.is_loading() {
            return Err(PharmaError::DispatchInProgress);
        }

        let query = match Query::parse(&self.input) {
            Ok(query) => query,
            Err(err) => {
                self.status = RequestStatus::Failed {
                    message: err.user_message(),
                };
                return Err(err);
            }
        };

        self.generation += 1;
        self.status = RequestStatus::Loading {
            generation: self.generation,
        };

        Ok(DispatchTicket {
            generation: self.generation,
            query,
        })
    }

    /// Replace the input with `text` and start a dispatch from it.
    ///
    /// Both happen in one transition, so the ticket always carries `text`.
    /// While loading nothing changes and [`PharmaError::DispatchInProgress`]
    /// is returned.
    pub fn submit(&mut self, text: impl Into<String>) -> Result<DispatchTicket> {
        if self.is_loading() {
            return Err(PharmaError::DispatchInProgress);
        }
        self.input = text.into();
        self.begin_dispatch()
    }

    /// Replace the results with a successful response.
    ///
    /// Returns `false` if `generation` is not the dispatch currently loading.
    pub fn apply_success(&mut self, generation: u64, results: Vec<DrugResult>) -> bool {
        if !self.owns(generation) {
            return false;
        }
        self.results = results;
        self.status = RequestStatus::Idle;
        true
    }

    /// Record a failed dispatch. Previous results stay as they were.
    ///
    /// Returns `false` if `generation` is not the dispatch currently loading.
    pub fn apply_failure(&mut self, generation: u64, message: impl Into<String>) -> bool {
        if !self.owns(generation) {
            return false;
        }
        self.status = RequestStatus::Failed {
            message: message.into(),
        };
        true
    }

    fn owns(&self, generation: u64) -> bool {
        self.status == RequestStatus::Loading { generation }
    }
}
