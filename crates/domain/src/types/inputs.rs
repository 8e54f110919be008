//! Write-side inputs accepted by the case service

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::case::{CaseStatus, CaseType};
use super::document::DocumentType;
use super::movement::MovementType;
use super::patch::Patch;

/// Data for a new case. The server assigns id, status and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCase {
    pub case_number: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub case_type: CaseType,
    pub client: String,
    #[serde(default)]
    pub opposing_party: Option<String>,
    #[serde(default)]
    pub claim_value_cents: Option<i64>,
    #[serde(default)]
    pub court: Option<String>,
}

/// Partial update of a case
///
/// `None` on the plain fields means "leave as is". The nullable fields use
/// [`Patch`] so that clearing a value can be expressed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<CaseStatus>,
    pub opposing_party: Patch<String>,
    pub claim_value_cents: Patch<i64>,
    pub court: Patch<String>,
}

impl CaseUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.opposing_party.is_unchanged()
            && self.claim_value_cents.is_unchanged()
            && self.court.is_unchanged()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovement {
    pub case_id: String,
    pub movement_type: MovementType,
    pub description: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// File content to upload, as read by the caller
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub mime_type: String,
    pub content: Vec<u8>,
}

impl FileUpload {
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.content.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUpload {
    pub case_id: String,
    pub document_type: DocumentType,
    pub description: Option<String>,
    pub file: FileUpload,
}

/// List filters. Every field is optional; an empty value means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseFilters {
    pub title: Option<String>,
    pub case_number: Option<String>,
    pub client: Option<String>,
    pub statuses: Vec<CaseStatus>,
    pub case_types: Vec<CaseType>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl CaseFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }
}
