//! Appointment calendar aggregation.
//!
//! Pipeline: fetched collections → month grid / day buckets / rollup stats → UI
//!
//! Every function here is a pure reduction over the collections it is handed.
//! Nothing reads the clock: "now" and the displayed month are always injected
//! by the caller, which keeps each computation reproducible in tests.

mod agenda;
mod grid;
mod stats;

pub use agenda::*;
pub use grid::*;
pub use stats::*;
