//! Doctor models.

use serde::{Deserialize, Serialize};

/// A treating doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: i64,
    pub nombre: String,
    pub apellidos: String,
    pub consultorio: Option<String>,
    pub profesion: Option<String>,
    pub telefono_celular: Option<String>,
    pub correo_electronico: Option<String>,
}

impl Doctor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellidos)
    }
}

/// Payload for registering a doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewDoctor {
    pub nombre: String,
    pub apellidos: String,
    pub consultorio: Option<String>,
    pub profesion: Option<String>,
    pub telefono_celular: Option<String>,
    pub correo_electronico: Option<String>,
}
