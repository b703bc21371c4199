use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned patient identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(pub u64);

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lightweight roster projection of an admitted patient, sufficient for list
/// display. The whole collection is replaced on reload, never patched in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientSummary {
    pub id: PatientId,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub physician: Option<String>,

    #[serde(default)]
    pub total: f64,

    #[serde(default)]
    pub transaction_count: u32,
}

/// Full patient record as served by `GET /patients/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientDetail {
    pub id: PatientId,
    pub patient_info: PatientInfo,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_room: Option<RoomAssignment>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_physician: Option<Physician>,

    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Demographics block. Dates and timestamps are carried as the backend sends
/// them; formatting is the backend's concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientInfo {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admitted_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discharged_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomAssignment {
    pub room: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ward: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_rate: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Physician {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

/// A posted billing line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub description: String,
    pub amount: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<String>,
}

/// Request body for `POST /patients/{id}/transactions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    pub description: String,
    pub amount: f64,
}

/// Request body for `PUT /patients/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub physician: Option<String>,
}

impl PatientDetail {
    /// Optimistic placeholder built from fields the roster already knows, with
    /// an empty transaction list. Rendered while the real detail is in flight.
    pub fn shell_from(summary: &PatientSummary) -> Self {
        Self {
            id: summary.id,
            patient_info: PatientInfo {
                name: summary.name.clone(),
                ..PatientInfo::default()
            },
            patient_room: summary.room.as_ref().map(|room| RoomAssignment {
                room: room.clone(),
                ward: None,
                daily_rate: None,
            }),
            patient_physician: summary.physician.as_ref().map(|name| Physician {
                name: name.clone(),
                specialty: None,
            }),
            transactions: Vec::new(),
        }
    }

    /// Running total across posted transactions.
    pub fn total_charges(&self) -> f64 {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
