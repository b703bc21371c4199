//! REST surface the admissions and billing screens consume.

use crate::config::ClientConfig;
use lingap_core::{
    LingapError, NewTransaction, PatientDetail, PatientId, PatientSummary, PatientUpdate, Result,
};

/// Backend operations behind the roster, detail, and mutation paths.
/// Implementations are used generically so tests can substitute an in-memory
/// double for the HTTP client.
#[allow(async_fn_in_trait)]
pub trait AdmissionsApi: Send + Sync {
    async fn list_patients(&self) -> Result<Vec<PatientSummary>>;
    async fn fetch_patient(&self, id: PatientId) -> Result<PatientDetail>;
    async fn add_transaction(&self, id: PatientId, tx: &NewTransaction) -> Result<()>;
    async fn discharge(&self, id: PatientId) -> Result<()>;
    async fn update_patient(&self, id: PatientId, update: &PatientUpdate) -> Result<()>;
}

/// reqwest-backed implementation. One client, one base URL, one request
/// timeout; every failure is mapped into `LingapError` at this boundary so
/// nothing above it sees reqwest types.
pub struct RestApi {
    http: reqwest::Client,
    base_url: String,
}

impl RestApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| LingapError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

fn transport_error(err: reqwest::Error) -> LingapError {
    if err.is_timeout() {
        LingapError::Timeout
    } else {
        LingapError::Transport(err.to_string())
    }
}

fn expect_success(status: reqwest::StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(LingapError::Backend {
            status: status.as_u16(),
        })
    }
}

impl AdmissionsApi for RestApi {
    async fn list_patients(&self) -> Result<Vec<PatientSummary>> {
        tracing::debug!("fetching patient roster");
        let resp = self
            .http
            .get(self.url("patients"))
            .send()
            .await
            .map_err(transport_error)?;

        expect_success(resp.status())?;
        resp.json().await.map_err(transport_error)
    }

    async fn fetch_patient(&self, id: PatientId) -> Result<PatientDetail> {
        tracing::debug!(%id, "fetching patient detail");
        let resp = self
            .http
            .get(self.url(&format!("patients/{id}")))
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LingapError::NotFound { id });
        }
        expect_success(status)?;
        resp.json().await.map_err(transport_error)
    }

    async fn add_transaction(&self, id: PatientId, tx: &NewTransaction) -> Result<()> {
        let resp = self
            .http
            .post(self.url(&format!("patients/{id}/transactions")))
            .json(tx)
            .send()
            .await
            .map_err(transport_error)?;

        expect_success(resp.status())
    }

    async fn discharge(&self, id: PatientId) -> Result<()> {
        let resp = self
            .http
            .post(self.url(&format!("patients/{id}/discharge")))
            .send()
            .await
            .map_err(transport_error)?;

        expect_success(resp.status())
    }

    async fn update_patient(&self, id: PatientId, update: &PatientUpdate) -> Result<()> {
        let resp = self
            .http
            .put(self.url(&format!("patients/{id}")))
            .json(update)
            .send()
            .await
            .map_err(transport_error)?;

        expect_success(resp.status())
    }
}
