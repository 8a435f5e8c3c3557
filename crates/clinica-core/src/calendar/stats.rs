//! Rollup statistics for the calendar screen.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::calendar::in_month;
use crate::models::{Appointment, Patient};

/// The three counters shown under the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarStats {
    /// Distinct patients on the roster. Roster size, not "patients with an
    /// appointment".
    pub total_patients: usize,
    /// Appointments falling within the displayed calendar month.
    pub this_month: usize,
    /// Appointments strictly later than `now`.
    pub pending: usize,
}

/// Compute the calendar counters.
///
/// `displayed_month` is any date inside the month being shown; `now` is
/// injected by the caller rather than read from the clock.
pub fn calendar_stats(
    appointments: &[Appointment],
    patients: &[Patient],
    displayed_month: NaiveDate,
    now: NaiveDateTime,
) -> CalendarStats {
    let total_patients = patients.iter().map(|p| p.id).collect::<HashSet<_>>().len();

    let this_month = appointments
        .iter()
        .filter(|cita| in_month(cita.date(), displayed_month))
        .count();

    let pending = appointments.iter().filter(|cita| cita.is_pending(now)).count();

    CalendarStats {
        total_patients,
        this_month,
        pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cita(id: i64, timestamp: &str) -> Appointment {
        serde_json::from_str(&format!(
            r#"{{"id": {id}, "fecha_cita": "{timestamp}", "paciente_id": {id}}}"#
        ))
        .unwrap()
    }

    fn paciente(id: i64) -> Patient {
        serde_json::from_str(&format!(
            r#"{{"id": {id}, "nombre": "Ana", "apellidos": "López"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_counters() {
        let citas = vec![
            cita(1, "2025-10-10T09:00:00"),
            cita(2, "2025-10-20T14:00:00"),
            cita(3, "2025-11-02T10:00:00"),
        ];
        let pacientes = vec![paciente(1), paciente(2)];

        let now: NaiveDateTime = "2025-10-15T12:00:00".parse().unwrap();
        let stats = calendar_stats(&citas, &pacientes, now.date(), now);

        assert_eq!(stats.total_patients, 2);
        assert_eq!(stats.this_month, 2);
        assert_eq!(stats.pending, 2);
    }

    #[test]
    fn test_roster_count_dedups_ids() {
        let pacientes = vec![paciente(1), paciente(1), paciente(2)];
        let stats = calendar_stats(
            &[],
            &pacientes,
            NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            "2025-10-01T00:00:00".parse().unwrap(),
        );
        assert_eq!(stats.total_patients, 2);
    }

    #[test]
    fn test_pending_excludes_exact_now() {
        let citas = vec![cita(1, "2025-10-15T12:00:00")];
        let now: NaiveDateTime = "2025-10-15T12:00:00".parse().unwrap();
        let stats = calendar_stats(&citas, &[], now.date(), now);
        assert_eq!(stats.pending, 0);
    }
}
