use crate::patient::PatientId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LingapError {
    #[error("Patient not found: {id}")]
    NotFound { id: PatientId },

    #[error("Backend returned status {status}")]
    Backend { status: u16 },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl LingapError {
    /// Transient message shown in place of the detail pane when a request fails.
    pub fn user_message(&self) -> String {
        match self {
            LingapError::NotFound { id } => {
                format!("Patient {id} was not found on the server")
            }
            LingapError::Backend { status } => {
                format!("The server rejected the request (status {status})")
            }
            LingapError::Transport(_) => "Could not reach the server".to_string(),
            LingapError::Timeout => "The server took too long to respond".to_string(),
            LingapError::InvalidJson(_) => "The server sent an unreadable response".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LingapError>;
