use crate::models::event::EventRecord;

const MIDNIGHT: &str = "00:00:00";

/// Best-effort start date-time for an event.
///
/// Prefers the full `dateTime`; otherwise joins `localDate` and `localTime`
/// (midnight when the time is missing) with a `T`; otherwise `""`.
/// The strings are passed through untouched, never parsed.
pub fn extract_event_datetime(event: &EventRecord) -> String {
    if let Some(date_time) = event.start_date_time() {
        return date_time.to_string();
    }
    match event.start_local_date() {
        Some(local_date) => {
            let local_time = event.start_local_time().unwrap_or(MIDNIGHT);
            format!("{}T{}", local_date, local_time)
        }
        None => String::new(),
    }
}
