//! Clinica Core Library
//!
//! Pure aggregation layer for the clinic's appointment calendar.
//!
//! # Architecture
//!
//! ```text
//! REST backend ──fetch──▶ collections (citas, pacientes, historiales)
//!                                 │
//!                 ┌───────────────┼────────────────┐
//!                 ▼               ▼                ▼
//!            month grid      day buckets      rollup stats
//!                 │               │                │
//!                 └───────────────┴────────────────┘
//!                                 │
//!                            UI rendering
//! ```
//!
//! # Core Principle
//!
//! **Every operation is a stateless, idempotent computation over supplied
//! collections and dates.** Nothing here performs I/O, reads the clock, or
//! mutates shared state; "now" and the displayed month are always injected
//! by the caller.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Appointment, Patient, HistoryEntry, Doctor)
//!   and lenient collection decoding
//! - [`calendar`]: Month grid builder, day bucketer, and statistics
//! - [`resolver`]: Patient display-name lookup and roster search

pub mod calendar;
pub mod models;
pub mod resolver;

// Re-export commonly used items
pub use calendar::{
    appointments_on, calendar_stats, day_agenda, in_month, month_grid, next_month, prev_month,
    CalendarStats, WEEK_START,
};
pub use models::{
    age_at, decode_records, Appointment, DecodedBatch, Doctor, HistoryEntry, NewAppointment,
    NewDoctor, NewHistoryEntry, NewPatient, Patient,
};
pub use resolver::{patient_display_name, search_patients, UNKNOWN_PATIENT};
