//! Case documents (documentos)

use serde::{Deserialize, Serialize};

use super::timestamp::Timestamp;
use crate::impl_wire_enum_conversions;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentType {
    InitialPetition,
    Answer,
    Evidence,
    PowerOfAttorney,
    Contract,
    Certificate,
    Report,
    Minutes,
    Other,
    Unrecognized(String),
}

impl_wire_enum_conversions!(DocumentType {
    InitialPetition => "peticao_inicial",
    Answer => "contestacao",
    Evidence => "prova",
    PowerOfAttorney => "procuracao",
    Contract => "contrato",
    Certificate => "certidao",
    Report => "laudo",
    Minutes => "ata",
    Other => "outros",
});

/// A file attached to a case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub case_id: String,
    pub file_name: String,
    pub document_type: DocumentType,
    /// Size in bytes.
    pub size: u64,
    pub mime_type: String,
    /// Download locator as returned by the server.
    pub url: String,
    pub uploaded_at: Timestamp,
    pub description: Option<String>,
}
