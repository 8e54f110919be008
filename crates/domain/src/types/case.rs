//! Legal case (processo)

use serde::{Deserialize, Serialize};

use super::document::Document;
use super::movement::Movement;
use super::timestamp::Timestamp;
use crate::impl_wire_enum_conversions;

/// Lifecycle status of a case
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CaseStatus {
    Draft,
    Active,
    Awaiting,
    Suspended,
    Archived,
    Finalized,
    Unrecognized(String),
}

impl_wire_enum_conversions!(CaseStatus {
    Draft => "rascunho",
    Active => "ativo",
    Awaiting => "aguardando",
    Suspended => "suspenso",
    Archived => "arquivado",
    Finalized => "finalizado",
});

/// Area of law the case belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CaseType {
    Civil,
    Criminal,
    Labor,
    Tax,
    Administrative,
    Family,
    Corporate,
    Unrecognized(String),
}

impl_wire_enum_conversions!(CaseType {
    Civil => "civil",
    Criminal => "criminal",
    Labor => "trabalhista",
    Tax => "tributario",
    Administrative => "administrativo",
    Family => "familia",
    Corporate => "empresarial",
});

/// A legal case as held in memory
///
/// `movements` and `documents` are only populated by the detail fetch; list
/// results leave them as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: String,
    pub case_number: String,
    pub title: String,
    pub description: String,
    pub status: CaseStatus,
    pub case_type: CaseType,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub client: String,
    pub opposing_party: Option<String>,
    /// Claim value in cents.
    pub claim_value_cents: Option<i64>,
    pub court: Option<String>,
    pub movements: Option<Vec<Movement>>,
    pub documents: Option<Vec<Document>>,
}

impl Case {
    /// `updated_at >= created_at`. Unparseable timestamps are not judged.
    pub fn timestamps_consistent(&self) -> bool {
        match (self.created_at.as_datetime(), self.updated_at.as_datetime()) {
            (Some(created), Some(updated)) => updated >= created,
            _ => true,
        }
    }
}
