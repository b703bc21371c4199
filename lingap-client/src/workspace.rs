//! The billing transaction workspace: roster + selection + mutations.
//!
//! A confirmed write against a patient runs, in order: cache invalidation, a
//! forced re-fetch of the detail, and a roster reload so list aggregates
//! (totals, counts) match. A failed write touches nothing.

use crate::api::AdmissionsApi;
use crate::selection::SelectionController;
use lingap_cache::DetailCache;
use lingap_core::{NewTransaction, PatientId, PatientRoster, PatientSummary, PatientUpdate, Result};
use std::sync::Arc;
use std::time::Duration;

pub struct AdmissionsWorkspace<A> {
    api: Arc<A>,
    cache: Arc<DetailCache>,
    pub roster: PatientRoster,
    pub selection: SelectionController<A>,
}

impl<A: AdmissionsApi> AdmissionsWorkspace<A> {
    pub fn new(api: Arc<A>, cache_ttl: Duration) -> Self {
        Self::with_cache(api, Arc::new(DetailCache::new(cache_ttl)))
    }

    pub fn with_cache(api: Arc<A>, cache: Arc<DetailCache>) -> Self {
        Self {
            selection: SelectionController::new(api.clone(), cache.clone()),
            api,
            cache,
            roster: PatientRoster::new(),
        }
    }

    pub fn cache(&self) -> &DetailCache {
        &self.cache
    }

    /// Fetch the summary collection and replace the roster wholesale. On
    /// failure the roster keeps its previous contents and the error is
    /// returned for the caller to surface.
    pub async fn load_roster(&mut self) -> Result<()> {
        let records = self.api.list_patients().await?;
        tracing::debug!(count = records.len(), "patient roster reloaded");
        self.roster.replace(records);
        Ok(())
    }

    pub async fn select(&self, summary: &PatientSummary) {
        self.selection.select(summary).await;
    }

    pub async fn add_transaction(&mut self, id: PatientId, tx: NewTransaction) -> Result<()> {
        self.api.add_transaction(id, &tx).await?;
        tracing::info!(%id, amount = tx.amount, "transaction posted");
        self.after_mutation(id).await
    }

    pub async fn discharge(&mut self, id: PatientId) -> Result<()> {
        self.api.discharge(id).await?;
        tracing::info!(%id, "patient discharged");
        self.after_mutation(id).await
    }

    pub async fn update_patient(&mut self, id: PatientId, update: PatientUpdate) -> Result<()> {
        self.api.update_patient(id, &update).await?;
        tracing::info!(%id, "patient record updated");
        self.after_mutation(id).await
    }

    /// Runs only after the backend confirmed the write.
    async fn after_mutation(&mut self, id: PatientId) -> Result<()> {
        self.selection.refresh(id).await;
        self.load_roster().await
    }
}
