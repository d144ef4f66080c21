use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One predicted stream, loaded wholesale from the schedule file.
/// Never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamRecord {
    pub id: u32,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_hours: f64,
    pub game: String,
    pub predicted_avg_viewers: u32,
    pub predicted_peak_viewers: u32,
    pub predicted_followers_gain: u32,
    pub is_night_stream: bool,
    pub is_weekend: bool,
    pub weekday_ru: String,
    pub season: String,
}

/// A single cell of the calendar grid. Alignment blanks are represented as
/// `None` in `CalendarMonth::days`, not as a `CalendarDay`.
#[derive(Debug, Clone)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub stream: Option<StreamRecord>,
}

/// One rendered month: `days` starts with the leading blanks needed to align
/// day 1 under its weekday column, Monday first.
#[derive(Debug, Clone)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub days: Vec<Option<CalendarDay>>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub count: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub streams: Vec<StreamRecord>,
}

#[derive(Debug, Serialize)]
pub struct DayPayload {
    pub date: String,
    pub is_current_month: bool,
    pub is_today: bool,
    pub stream: Option<StreamRecord>,
}

#[derive(Debug, Serialize)]
pub struct MonthPayload {
    pub year: i32,
    pub month: u32,
    pub days: Vec<Option<DayPayload>>,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub months: Vec<MonthPayload>,
}

#[derive(Debug, Serialize)]
pub struct DayDetailsResponse {
    pub date: String,
    pub has_stream: bool,
    pub stream: Option<StreamRecord>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub streams: usize,
}
