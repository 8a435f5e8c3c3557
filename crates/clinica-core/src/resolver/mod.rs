//! Patient lookup for display and roster search.

use strsim::jaro_winkler;

use crate::models::Patient;

/// Shown when an appointment references a patient missing from the roster.
/// Absence is a normal outcome, never an error.
pub const UNKNOWN_PATIENT: &str = "Paciente no encontrado";

/// Minimum similarity for a fuzzy roster match.
const MIN_SIMILARITY: f64 = 0.75;

/// Display name for the patient with the given id, or the fixed fallback
/// when no roster entry matches.
pub fn patient_display_name(patients: &[Patient], id: i64) -> String {
    patients
        .iter()
        .find(|p| p.id == id)
        .map(Patient::full_name)
        .unwrap_or_else(|| UNKNOWN_PATIENT.to_string())
}

/// Search the roster by free-text query over the full name.
///
/// Exact substring matches rank first; near-misses are ranked by
/// Jaro-Winkler similarity and cut off below [`MIN_SIMILARITY`]. An empty
/// query returns the whole roster in input order.
pub fn search_patients<'a>(patients: &'a [Patient], query: &str) -> Vec<&'a Patient> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return patients.iter().collect();
    }

    let mut scored: Vec<(f64, &Patient)> = patients
        .iter()
        .filter_map(|p| {
            let name = p.full_name().to_lowercase();
            let score = if name.contains(&query) {
                1.0
            } else {
                jaro_winkler(&name, &query)
            };
            (score >= MIN_SIMILARITY).then_some((score, p))
        })
        .collect();

    // Sort by similarity descending
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    scored.into_iter().map(|(_, p)| p).collect()
}
