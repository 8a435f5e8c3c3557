//! Day bucketing: the subset of appointments sharing one calendar date.

use chrono::NaiveDate;

use crate::models::Appointment;

/// Appointments whose timestamp falls on the given calendar day.
///
/// Same-day means calendar-date equality in local clinic time, never a
/// numeric instant range. Order is the input order; callers that display
/// the result sort it themselves (or use [`day_agenda`]).
pub fn appointments_on(appointments: &[Appointment], day: NaiveDate) -> Vec<&Appointment> {
    appointments.iter().filter(|cita| cita.is_on(day)).collect()
}

/// The day's appointments in display order: ascending by start time.
pub fn day_agenda(appointments: &[Appointment], day: NaiveDate) -> Vec<&Appointment> {
    let mut agenda = appointments_on(appointments, day);
    agenda.sort_by_key(|cita| cita.fecha_cita);
    agenda
}
