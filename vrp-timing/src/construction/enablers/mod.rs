//! This module contains functionality which keeps route schedule and its propagated time states
//! up to date. It is shared by features and post processing steps.

mod departure_time;
pub use self::departure_time::*;

mod latest_start;
pub use self::latest_start::*;

mod schedule_check;
pub use self::schedule_check::*;

mod schedule_update;
pub use self::schedule_update::*;
