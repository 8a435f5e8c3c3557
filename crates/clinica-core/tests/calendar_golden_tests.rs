//! Golden tests for the calendar aggregation layer.
//!
//! These tests pin the acceptance scenarios for day bucketing, statistics,
//! name resolution, and age derivation against known inputs.

use chrono::{NaiveDate, NaiveDateTime};

use clinica_core::models::{age_at, Appointment, Patient};
use clinica_core::{calendar_stats, day_agenda, patient_display_name, UNKNOWN_PATIENT};

fn cita(id: i64, fecha_cita: &str, paciente_id: i64) -> Appointment {
    serde_json::from_str(&format!(
        r#"{{"id": {id}, "fecha_cita": "{fecha_cita}", "paciente_id": {paciente_id}}}"#
    ))
    .unwrap()
}

fn paciente(id: i64, nombre: &str, apellidos: &str) -> Patient {
    serde_json::from_str(&format!(
        r#"{{"id": {id}, "nombre": "{nombre}", "apellidos": "{apellidos}"}}"#
    ))
    .unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_two_appointment_scenario() {
    let citas = vec![
        cita(1, "2025-10-10T09:00:00", 1),
        cita(2, "2025-10-10T14:00:00", 2),
    ];

    let agenda = day_agenda(&citas, date(2025, 10, 10));
    let ids: Vec<i64> = agenda.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2]);

    assert!(day_agenda(&citas, date(2025, 10, 11)).is_empty());
}

#[test]
fn test_stats_over_scenario() {
    let citas = vec![
        cita(1, "2025-10-10T09:00:00", 1),
        cita(2, "2025-10-10T14:00:00", 2),
    ];
    let roster = vec![
        paciente(1, "María", "García"),
        paciente(2, "Juan", "Pérez"),
        paciente(3, "Ana", "López"),
    ];

    let now: NaiveDateTime = "2025-10-10T10:00:00".parse().unwrap();
    let stats = calendar_stats(&citas, &roster, now.date(), now);

    // Roster size, not patients with appointments.
    assert_eq!(stats.total_patients, 3);
    assert_eq!(stats.this_month, 2);
    // Only the 14:00 visit is still ahead of 10:00.
    assert_eq!(stats.pending, 1);
}

#[test]
fn test_name_resolution_cases() {
    let roster = vec![paciente(1, "Ana", "López")];

    assert_eq!(patient_display_name(&roster, 1), "Ana López");
    assert_eq!(patient_display_name(&roster, 99), "Paciente no encontrado");
    assert_eq!(patient_display_name(&roster, 99), UNKNOWN_PATIENT);
}

struct AgeCase {
    id: &'static str,
    birth: (i32, u32, u32),
    on: (i32, u32, u32),
    expected: u32,
}

#[test]
fn test_age_golden_cases() {
    let cases = vec![
        AgeCase {
            id: "day-before-birthday",
            birth: (2000, 3, 15),
            on: (2024, 3, 14),
            expected: 23,
        },
        AgeCase {
            id: "on-birthday",
            birth: (2000, 3, 15),
            on: (2024, 3, 15),
            expected: 24,
        },
        AgeCase {
            id: "day-after-birthday",
            birth: (2000, 3, 15),
            on: (2024, 3, 16),
            expected: 24,
        },
        AgeCase {
            id: "newborn",
            birth: (2024, 3, 15),
            on: (2024, 3, 15),
            expected: 0,
        },
        AgeCase {
            id: "year-boundary",
            birth: (1999, 12, 31),
            on: (2024, 1, 1),
            expected: 24,
        },
    ];

    for case in cases {
        let birth = date(case.birth.0, case.birth.1, case.birth.2);
        let on = date(case.on.0, case.on.1, case.on.2);
        assert_eq!(age_at(birth, on), case.expected, "Case {}: age mismatch", case.id);
    }
}
