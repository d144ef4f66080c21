use crate::models::{CalendarDay, CalendarMonth, StreamRecord};
use chrono::{Datelike, Duration, Local, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// The schedule source cannot be turned into a calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    EmptySchedule,
    InvalidDate(String),
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::EmptySchedule => write!(f, "schedule contains no streams"),
            CalendarError::InvalidDate(raw) => write!(f, "unparseable stream date {raw:?}"),
        }
    }
}

impl std::error::Error for CalendarError {}

pub fn build_calendar(streams: &[StreamRecord]) -> Result<Vec<CalendarMonth>, CalendarError> {
    build_calendar_at(Local::now().date_naive(), streams)
}

/// Expands a date-sorted stream list into one `CalendarMonth` per calendar
/// month between the first and last record, inclusive. Weeks start Monday;
/// each month is padded with leading blanks so day 1 lands under its weekday.
pub fn build_calendar_at(
    today: NaiveDate,
    streams: &[StreamRecord],
) -> Result<Vec<CalendarMonth>, CalendarError> {
    let first = streams.first().ok_or(CalendarError::EmptySchedule)?;
    let last = streams.last().ok_or(CalendarError::EmptySchedule)?;
    let start = parse_date(&first.date)
        .ok_or_else(|| CalendarError::InvalidDate(first.date.clone()))?;
    let end = parse_date(&last.date)
        .ok_or_else(|| CalendarError::InvalidDate(last.date.clone()))?;

    let by_date = index_by_date(streams);

    let mut months = Vec::new();
    // day0() is the zero-based day of month, so this lands on day 1.
    let mut cursor = start - Duration::days(i64::from(start.day0()));
    loop {
        let (month, next) = build_month(cursor, today, &by_date);
        months.push(month);
        if (cursor.year(), cursor.month()) >= (end.year(), end.month()) {
            break;
        }
        cursor = next;
    }
    Ok(months)
}

/// Lookup index keyed by calendar date. The source is keyed uniquely by date;
/// a duplicate is logged and the later record wins, and records whose date
/// does not parse are skipped.
pub fn index_by_date(streams: &[StreamRecord]) -> BTreeMap<NaiveDate, StreamRecord> {
    let mut by_date = BTreeMap::new();
    for stream in streams {
        let Some(date) = parse_date(&stream.date) else {
            warn!(
                "skipping stream {} with unparseable date {:?}",
                stream.id, stream.date
            );
            continue;
        };
        if by_date.insert(date, stream.clone()).is_some() {
            warn!("duplicate stream entry for {date}, keeping the later one");
        }
    }
    by_date
}

fn build_month(
    first_day: NaiveDate,
    today: NaiveDate,
    by_date: &BTreeMap<NaiveDate, StreamRecord>,
) -> (CalendarMonth, NaiveDate) {
    let leading = first_day.weekday().num_days_from_monday() as usize;
    let mut days: Vec<Option<CalendarDay>> = vec![None; leading];

    let mut day = first_day;
    while day.month() == first_day.month() && day.year() == first_day.year() {
        days.push(Some(CalendarDay {
            date: day,
            is_current_month: true,
            is_today: day == today,
            stream: by_date.get(&day).cloned(),
        }));
        day = day + Duration::days(1);
    }

    let month = CalendarMonth {
        year: first_day.year(),
        month: first_day.month(),
        days,
    };
    // `day` has walked off the end of the month, i.e. onto day 1 of the next.
    (month, day)
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, date: &str) -> StreamRecord {
        StreamRecord {
            id,
            date: date.to_string(),
            start_time: "12:30".to_string(),
            end_time: "18:30".to_string(),
            duration_hours: 6.0,
            game: "Just Chatting".to_string(),
            predicted_avg_viewers: 1500,
            predicted_peak_viewers: 2100,
            predicted_followers_gain: 120,
            is_night_stream: false,
            is_weekend: false,
            weekday_ru: "среда".to_string(),
            season: "Зима".to_string(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn spans_every_month_between_first_and_last() {
        let streams = vec![record(1, "2025-01-15"), record(2, "2025-03-02")];
        let months = build_calendar_at(day(2025, 1, 1), &streams).unwrap();

        assert_eq!(months.len(), 3);
        assert_eq!((months[0].year, months[0].month), (2025, 1));
        assert_eq!((months[1].year, months[1].month), (2025, 2));
        assert_eq!((months[2].year, months[2].month), (2025, 3));
        // February carries no matching record, so all of its days are empty.
        assert!(months[1]
            .days
            .iter()
            .flatten()
            .all(|d| d.stream.is_none()));
    }

    #[test]
    fn crosses_year_boundaries_without_gaps() {
        let streams = vec![record(1, "2025-11-20"), record(2, "2026-02-03")];
        let months = build_calendar_at(day(2025, 11, 1), &streams).unwrap();

        let labels: Vec<(i32, u32)> = months.iter().map(|m| (m.year, m.month)).collect();
        assert_eq!(
            labels,
            vec![(2025, 11), (2025, 12), (2026, 1), (2026, 2)]
        );
    }

    #[test]
    fn attaches_exactly_the_matching_record() {
        let streams = vec![record(7, "2025-01-15")];
        let months = build_calendar_at(day(2025, 6, 1), &streams).unwrap();

        let attached: Vec<&CalendarDay> = months[0]
            .days
            .iter()
            .flatten()
            .filter(|d| d.stream.is_some())
            .collect();
        assert_eq!(attached.len(), 1);
        assert_eq!(attached[0].date, day(2025, 1, 15));
        assert_eq!(attached[0].stream.as_ref().unwrap().id, 7);
    }

    #[test]
    fn leading_blanks_follow_monday_first_weekday() {
        // 2025-06-01 is a Sunday: six blanks. 2025-09-01 is a Monday: none.
        let streams = vec![record(1, "2025-06-10"), record(2, "2025-09-10")];
        let months = build_calendar_at(day(2025, 6, 1), &streams).unwrap();

        for month in &months {
            let blanks = month.days.iter().take_while(|d| d.is_none()).count();
            let first = day(month.year, month.month, 1);
            assert_eq!(
                blanks,
                first.weekday().num_days_from_monday() as usize,
                "wrong alignment for {}-{}",
                month.year,
                month.month
            );
        }
        assert_eq!(months[0].days.iter().take_while(|d| d.is_none()).count(), 6);
        assert_eq!(months[3].days.iter().take_while(|d| d.is_none()).count(), 0);
    }

    #[test]
    fn stripped_blanks_reproduce_the_month() {
        let streams = vec![record(1, "2025-06-10")];
        let months = build_calendar_at(day(2025, 6, 1), &streams).unwrap();

        let real: Vec<&CalendarDay> = months[0].days.iter().flatten().collect();
        assert_eq!(real.len(), 30);
        for (i, d) in real.iter().enumerate() {
            assert_eq!(d.date, day(2025, 6, i as u32 + 1));
            assert!(d.is_current_month);
        }
        // Blanks only lead; there are no holes after day 1.
        let first_real = months[0].days.iter().position(|d| d.is_some()).unwrap();
        assert!(months[0].days[first_real..].iter().all(|d| d.is_some()));
    }

    #[test]
    fn empty_schedule_is_reported() {
        let result = build_calendar_at(day(2025, 1, 1), &[]);
        assert_eq!(result.unwrap_err(), CalendarError::EmptySchedule);
    }

    #[test]
    fn unparseable_boundary_date_is_reported() {
        let streams = vec![record(1, "soon"), record(2, "2025-03-02")];
        let result = build_calendar_at(day(2025, 1, 1), &streams);
        assert_eq!(
            result.unwrap_err(),
            CalendarError::InvalidDate("soon".to_string())
        );
    }

    #[test]
    fn unparseable_middle_date_is_skipped() {
        let streams = vec![
            record(1, "2025-01-10"),
            record(2, "2025-13-45"),
            record(3, "2025-01-20"),
        ];
        let months = build_calendar_at(day(2025, 1, 1), &streams).unwrap();

        let attached: Vec<u32> = months[0]
            .days
            .iter()
            .flatten()
            .filter_map(|d| d.stream.as_ref().map(|s| s.id))
            .collect();
        assert_eq!(attached, vec![1, 3]);
    }

    #[test]
    fn duplicate_dates_keep_the_later_record() {
        let streams = vec![record(1, "2025-01-15"), record(2, "2025-01-15")];
        let months = build_calendar_at(day(2025, 1, 1), &streams).unwrap();

        let attached: Vec<u32> = months[0]
            .days
            .iter()
            .flatten()
            .filter_map(|d| d.stream.as_ref().map(|s| s.id))
            .collect();
        assert_eq!(attached, vec![2]);
    }

    #[test]
    fn is_today_marks_exactly_one_day_inside_the_range() {
        let streams = vec![record(1, "2025-01-15"), record(2, "2025-03-02")];
        let months = build_calendar_at(day(2025, 2, 14), &streams).unwrap();

        let marked: Vec<NaiveDate> = months
            .iter()
            .flat_map(|m| m.days.iter().flatten())
            .filter(|d| d.is_today)
            .map(|d| d.date)
            .collect();
        assert_eq!(marked, vec![day(2025, 2, 14)]);
    }

    #[test]
    fn identical_input_builds_identical_output() {
        let streams = vec![record(1, "2025-01-15"), record(2, "2025-03-02")];
        let a = build_calendar_at(day(2025, 1, 20), &streams).unwrap();
        let b = build_calendar_at(day(2025, 1, 20), &streams).unwrap();
        assert_eq!(format!("{a:?}"), format!("{b:?}"));
    }
}
