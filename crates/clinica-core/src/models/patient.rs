//! Patient roster models and age derivation.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A registered patient.
///
/// Age is never stored: it is always derived from `fecha_nacimiento` at the
/// moment of display, so it cannot drift stale in the roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: i64,
    /// Given name
    pub nombre: String,
    /// Surname(s), single canonical field
    pub apellidos: String,
    pub genero: Option<String>,
    /// Medical-condition flags from the intake form
    #[serde(default)]
    pub its: bool,
    #[serde(default, rename = "problemas_cardíacos")]
    pub problemas_cardiacos: bool,
    #[serde(default)]
    pub diabetes: bool,
    pub telefono: Option<String>,
    pub correo_electronico: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
}

impl Patient {
    /// Display name: given name followed by surname(s).
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellidos)
    }

    /// Age in whole years on the given date, if a birth date is recorded.
    pub fn age_on(&self, on: NaiveDate) -> Option<u32> {
        self.fecha_nacimiento.map(|birth| age_at(birth, on))
    }
}

/// Payload for creating or replacing a patient (id-less).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPatient {
    pub nombre: String,
    pub apellidos: String,
    pub genero: Option<String>,
    #[serde(default)]
    pub its: bool,
    #[serde(default, rename = "problemas_cardíacos")]
    pub problemas_cardiacos: bool,
    #[serde(default)]
    pub diabetes: bool,
    pub telefono: Option<String>,
    pub correo_electronico: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
}

/// Age in whole years on `on`, decremented by one when the birthday has not
/// yet occurred that year.
pub fn age_at(birth: NaiveDate, on: NaiveDate) -> u32 {
    let mut years = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}
