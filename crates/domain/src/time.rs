//! Time and timestamp helpers.
//!
//! Two clocks matter to a lamp: the UTC instant a provider observed the
//! weather, and the wall-clock time at the lamp's site, which is what
//! sunrise and sunset strings are expressed in.

use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// UTC timestamp, used for observation times reported by providers.
pub type Timestamp = DateTime<Utc>;

/// Wall-clock date and time at the lamp's site, without a zone.
pub type LocalTime = NaiveDateTime;

/// Return the current wall-clock time of the host.
#[must_use]
pub fn local_now() -> LocalTime {
    Local::now().naive_local()
}
