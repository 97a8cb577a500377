//! Source document records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DocumentId, ProcessingStatus};

/// A source document from which data modules are derived.
///
/// Immutable from the authoring core's perspective; owned and refreshed by
/// the ingestion pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub processing_status: Option<ProcessingStatus>,
    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    pub fn new(id: DocumentId, filename: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            id,
            filename: filename.into(),
            mime_type: mime_type.into(),
            processing_status: None,
            uploaded_at: Utc::now(),
        }
    }
}
