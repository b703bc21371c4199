pub mod api;
pub mod config;
pub mod selection;
pub mod workspace;

#[cfg(test)]
pub(crate) mod testutil;

pub use api::{AdmissionsApi, RestApi};
pub use config::ClientConfig;
pub use selection::{PatientView, SelectionController, SelectionState};
pub use workspace::AdmissionsWorkspace;
