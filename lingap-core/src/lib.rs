pub mod error;
pub mod patient;
pub mod roster;

pub use error::{LingapError, Result};
pub use patient::{
    NewTransaction, PatientDetail, PatientId, PatientInfo, PatientSummary, PatientUpdate,
    Physician, RoomAssignment, Transaction,
};
pub use roster::PatientRoster;
