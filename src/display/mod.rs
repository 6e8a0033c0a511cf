//! Terminal display formatting
//!
//! Pure formatting helpers that turn aggregated views into printable text.
//! Nothing in this module touches storage.

pub mod calendar;
pub mod chart;
pub mod record;

pub use calendar::format_month_calendar;
pub use chart::{format_selected_point, format_trend_chart};
pub use record::{format_month_header, format_record_list, format_record_row};
