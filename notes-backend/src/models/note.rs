use serde::{Deserialize, Serialize};

/// A saved note: the original text, its translation and the target language label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub english_note: String,
    pub translated_note: String,
    pub language: String,
    /// Assigned by SQLite at insert time, `YYYY-MM-DD HH:MM:SS` in UTC
    pub created_at: String,
}

/// Body of `POST /api/save_note`. All three keys are required.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveNoteRequest {
    pub english_note: String,
    pub translated_note: String,
    pub language: String,
}

/// `{status, message}` envelope returned by the write path and by every failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}
