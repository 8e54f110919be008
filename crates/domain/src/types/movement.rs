//! Case movements (movimentações)

use serde::{Deserialize, Serialize};

use super::timestamp::Timestamp;
use crate::impl_wire_enum_conversions;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementType {
    Petition,
    Hearing,
    Decision,
    Appeal,
    Order,
    Ruling,
    Citation,
    Notice,
    Other,
    Unrecognized(String),
}

impl_wire_enum_conversions!(MovementType {
    Petition => "peticao",
    Hearing => "audiencia",
    Decision => "decisao",
    Appeal => "recurso",
    Order => "despacho",
    Ruling => "sentenca",
    Citation => "citacao",
    Notice => "intimacao",
    Other => "outros",
});

/// A timestamped event in a case's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub id: String,
    pub case_id: String,
    pub movement_type: MovementType,
    pub description: String,
    pub date: Timestamp,
    pub user: Option<String>,
    pub notes: Option<String>,
}
