//! Clinical history models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A record of a completed consultation. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub id: i64,
    pub paciente_id: i64,
    pub doctor_id: Option<i64>,
    pub diagnostico: Option<String>,
    pub tratamiento: Option<String>,
    pub medicamento: Option<String>,
    pub notas: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

/// Payload for recording a consultation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewHistoryEntry {
    pub paciente_id: i64,
    pub doctor_id: Option<i64>,
    pub diagnostico: Option<String>,
    pub tratamiento: Option<String>,
    pub medicamento: Option<String>,
    pub notas: Option<String>,
}
