//! System clock adapter.

use chrono::Datelike;

use vipergen_core::domain::HeaderDate;

/// Capture today's date from the local clock.
///
/// Called once at startup; the resulting value is passed down so rendering
/// stays pure.
pub fn today() -> HeaderDate {
    let now = chrono::Local::now();
    HeaderDate::new(now.year(), now.month(), now.day())
}
