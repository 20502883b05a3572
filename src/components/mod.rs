// Export components
pub mod google_calendar;

// Re-export the relay and its upstream seam
pub use google_calendar::{CalendarProvider, CalendarRelay, GoogleCalendarClient};
