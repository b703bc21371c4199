//! In-memory stand-in for the REST backend, shared by the controller and
//! workspace tests. Fetches can be gated on a oneshot channel to simulate a
//! slow response, and the next fetch or write can be made to fail.

use crate::api::AdmissionsApi;
use lingap_core::{
    LingapError, NewTransaction, PatientDetail, PatientId, PatientInfo, PatientSummary,
    PatientUpdate, Physician, Result, RoomAssignment, Transaction,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::oneshot;

pub(crate) struct MockApi {
    details: Mutex<HashMap<PatientId, PatientDetail>>,
    gates: Mutex<HashMap<PatientId, oneshot::Receiver<()>>>,
    pub fetches: AtomicUsize,
    pub list_loads: AtomicUsize,
    pub fail_next_fetch: AtomicBool,
    pub fail_next_write: AtomicBool,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            details: Mutex::new(HashMap::new()),
            gates: Mutex::new(HashMap::new()),
            fetches: AtomicUsize::new(0),
            list_loads: AtomicUsize::new(0),
            fail_next_fetch: AtomicBool::new(false),
            fail_next_write: AtomicBool::new(false),
        }
    }

    pub fn insert(&self, detail: PatientDetail) {
        self.details.lock().unwrap().insert(detail.id, detail);
    }

    /// Hold the next fetch for `id` open until the returned sender fires.
    pub fn gate(&self, id: PatientId) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(id, rx);
        tx
    }
}

pub(crate) fn sample_patient(
    id: u64,
    name: &str,
    room: &str,
    transactions: &[(&str, f64)],
) -> PatientDetail {
    PatientDetail {
        id: PatientId(id),
        patient_info: PatientInfo {
            name: name.to_string(),
            admitted_at: Some("2025-06-01T08:00:00Z".to_string()),
            ..PatientInfo::default()
        },
        patient_room: Some(RoomAssignment {
            room: room.to_string(),
            ward: Some("Medical".to_string()),
            daily_rate: None,
        }),
        patient_physician: Some(Physician {
            name: "R. Santos".to_string(),
            specialty: None,
        }),
        transactions: transactions
            .iter()
            .enumerate()
            .map(|(i, (description, amount))| Transaction {
                id: i as u64 + 1,
                description: description.to_string(),
                amount: *amount,
                posted_at: None,
            })
            .collect(),
    }
}

/// The roster projection a backend would derive from a full record.
pub(crate) fn summary_of(detail: &PatientDetail) -> PatientSummary {
    PatientSummary {
        id: detail.id,
        name: detail.patient_info.name.clone(),
        room: detail.patient_room.as_ref().map(|r| r.room.clone()),
        physician: detail.patient_physician.as_ref().map(|p| p.name.clone()),
        total: detail.total_charges(),
        transaction_count: detail.transactions.len() as u32,
    }
}

impl AdmissionsApi for MockApi {
    async fn list_patients(&self) -> Result<Vec<PatientSummary>> {
        self.list_loads.fetch_add(1, Ordering::SeqCst);
        let details = self.details.lock().unwrap();
        let mut summaries: Vec<PatientSummary> = details.values().map(summary_of).collect();
        summaries.sort_by_key(|s| s.id.0);
        Ok(summaries)
    }

    async fn fetch_patient(&self, id: PatientId) -> Result<PatientDetail> {
        let gate = self.gates.lock().unwrap().remove(&id);
        if let Some(release) = gate {
            let _ = release.await;
        }

        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_fetch.swap(false, Ordering::SeqCst) {
            return Err(LingapError::Transport("connection refused".to_string()));
        }

        self.details
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(LingapError::NotFound { id })
    }

    async fn add_transaction(&self, id: PatientId, tx: &NewTransaction) -> Result<()> {
        if self.fail_next_write.swap(false, Ordering::SeqCst) {
            return Err(LingapError::Backend { status: 422 });
        }

        let mut details = self.details.lock().unwrap();
        let detail = details.get_mut(&id).ok_or(LingapError::NotFound { id })?;
        let next_id = detail.transactions.len() as u64 + 1;
        detail.transactions.push(Transaction {
            id: next_id,
            description: tx.description.clone(),
            amount: tx.amount,
            posted_at: None,
        });
        Ok(())
    }

    async fn discharge(&self, id: PatientId) -> Result<()> {
        if self.fail_next_write.swap(false, Ordering::SeqCst) {
            return Err(LingapError::Backend { status: 409 });
        }

        let mut details = self.details.lock().unwrap();
        let detail = details.get_mut(&id).ok_or(LingapError::NotFound { id })?;
        detail.patient_info.discharged_at = Some("2025-06-05T10:00:00Z".to_string());
        Ok(())
    }

    async fn update_patient(&self, id: PatientId, update: &PatientUpdate) -> Result<()> {
        if self.fail_next_write.swap(false, Ordering::SeqCst) {
            return Err(LingapError::Backend { status: 422 });
        }

        let mut details = self.details.lock().unwrap();
        let detail = details.get_mut(&id).ok_or(LingapError::NotFound { id })?;
        if let Some(name) = &update.name {
            detail.patient_info.name = name.clone();
        }
        if let Some(room) = &update.room {
            detail.patient_room = Some(RoomAssignment {
                room: room.clone(),
                ward: None,
                daily_rate: None,
            });
        }
        if let Some(physician) = &update.physician {
            detail.patient_physician = Some(Physician {
                name: physician.clone(),
                specialty: None,
            });
        }
        Ok(())
    }
}
