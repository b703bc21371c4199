//! Selection-driven detail loading.
//!
//! The controller tracks which patient the detail pane is showing. Selecting a
//! roster entry installs an optimistic shell synchronously (before any await),
//! then fills it from the cache or the backend. A response that lands after
//! the user has moved on is discarded: the request's id is the token, and it
//! must still match the live selection for the response to be rendered or
//! cached.

use crate::api::AdmissionsApi;
use lingap_cache::DetailCache;
use lingap_core::{PatientDetail, PatientId, PatientSummary};
use std::sync::{Arc, Mutex};

/// What the detail pane currently shows.
#[derive(Debug, Clone)]
pub enum PatientView {
    /// Optimistic placeholder built from summary fields; transactions empty.
    Shell(PatientDetail),
    /// Full record from the cache or the backend.
    Loaded(PatientDetail),
}

impl PatientView {
    pub fn detail(&self) -> &PatientDetail {
        match self {
            PatientView::Shell(detail) | PatientView::Loaded(detail) => detail,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, PatientView::Loaded(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pub selected: Option<PatientId>,
    pub view: Option<PatientView>,
    pub is_loading: bool,
    /// Transient, user-facing message from the last failed fetch.
    pub error: Option<String>,
}

/// Tracks the current selection and owns the fetch path around the cache.
/// Fetch failures never propagate: they are converted into state the view
/// layer renders.
pub struct SelectionController<A> {
    api: Arc<A>,
    cache: Arc<DetailCache>,
    state: Mutex<SelectionState>,
}

impl<A: AdmissionsApi> SelectionController<A> {
    pub fn new(api: Arc<A>, cache: Arc<DetailCache>) -> Self {
        Self {
            api,
            cache,
            state: Mutex::new(SelectionState::default()),
        }
    }

    /// Snapshot of the current selection state.
    pub fn state(&self) -> SelectionState {
        self.state.lock().unwrap().clone()
    }

    /// Select a roster entry. Re-selecting the current patient is a no-op, so
    /// at most one fetch is ever issued per selection change.
    pub async fn select(&self, summary: &PatientSummary) {
        let id = summary.id;
        {
            let mut state = self.state.lock().unwrap();
            if state.selected == Some(id) {
                return;
            }
            *state = SelectionState {
                selected: Some(id),
                view: Some(PatientView::Shell(PatientDetail::shell_from(summary))),
                is_loading: true,
                error: None,
            };
        }

        if let Some(detail) = self.cache.get(id) {
            let mut state = self.state.lock().unwrap();
            if state.selected == Some(id) {
                state.view = Some(PatientView::Loaded(detail));
                state.is_loading = false;
            }
            return;
        }

        let result = self.api.fetch_patient(id).await;
        self.commit(id, result);
    }

    /// Forced-miss path used after a confirmed mutation: drop the cache entry,
    /// then re-fetch if the patient is still on screen. For a deselected
    /// patient the invalidation alone guarantees the next read misses.
    pub async fn refresh(&self, id: PatientId) {
        self.cache.invalidate(id);
        {
            let mut state = self.state.lock().unwrap();
            if state.selected != Some(id) {
                return;
            }
            state.is_loading = true;
            state.error = None;
        }

        let result = self.api.fetch_patient(id).await;
        self.commit(id, result);
    }

    fn commit(&self, id: PatientId, result: lingap_core::Result<PatientDetail>) {
        let mut state = self.state.lock().unwrap();
        if state.selected != Some(id) {
            tracing::debug!(%id, "discarding stale detail response");
            return;
        }

        match result {
            Ok(detail) => {
                self.cache.set(id, detail.clone());
                *state = SelectionState {
                    selected: Some(id),
                    view: Some(PatientView::Loaded(detail)),
                    is_loading: false,
                    error: None,
                };
            }
            Err(err) => {
                tracing::warn!(%id, error = %err, "patient detail fetch failed");
                *state = SelectionState {
                    selected: None,
                    view: None,
                    is_loading: false,
                    error: Some(err.user_message()),
                };
            }
        }
    }
}
