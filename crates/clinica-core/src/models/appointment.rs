//! Appointment models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A scheduled patient visit.
///
/// Timestamps are zone-less local clinic time (`"2025-10-10T09:00:00"` on
/// the wire). Contact fields are denormalized copies for display; the
/// patient record stays authoritative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: i64,
    pub fecha_cita: NaiveDateTime,
    pub paciente_id: i64,
    pub doctor_id: Option<i64>,
    pub consultorio_id: Option<i64>,
    /// Free-text reason for the visit
    pub detalle_cita: Option<String>,
    pub telefono: Option<String>,
    pub correo_electronico: Option<String>,
}

impl Appointment {
    /// Calendar date of the visit, in local clinic time.
    pub fn date(&self) -> NaiveDate {
        self.fecha_cita.date()
    }

    /// Whether the visit falls on the given calendar day.
    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.date() == day
    }

    /// Whether the visit is strictly in the future relative to `now`.
    pub fn is_pending(&self, now: NaiveDateTime) -> bool {
        self.fecha_cita > now
    }
}

/// Payload for booking an appointment (id-less; the server assigns ids).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAppointment {
    pub fecha_cita: NaiveDateTime,
    pub paciente_id: i64,
    pub doctor_id: Option<i64>,
    pub consultorio_id: Option<i64>,
    pub detalle_cita: Option<String>,
    pub telefono: Option<String>,
    pub correo_electronico: Option<String>,
}
