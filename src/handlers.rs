use crate::calendar::{self, parse_date};
use crate::errors::AppError;
use crate::models::{
    CalendarMonth, CalendarResponse, DayDetailsResponse, DayPayload, HealthResponse,
    MonthPayload, ScheduleResponse,
};
use crate::state::AppState;
use crate::ui;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use tracing::error;

pub async fn insights_page() -> Html<String> {
    Html(ui::render_insights())
}

pub async fn schedule_page(State(state): State<AppState>) -> Html<String> {
    match calendar::build_calendar(&state.schedule) {
        Ok(months) => Html(ui::render_schedule(&months)),
        Err(err) => {
            error!("failed to build schedule calendar: {err}");
            Html(ui::render_schedule_unavailable())
        }
    }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        streams: state.schedule.len(),
    })
}

pub async fn get_schedule(State(state): State<AppState>) -> Json<ScheduleResponse> {
    let streams = state.schedule.as_ref().clone();
    Json(ScheduleResponse {
        count: streams.len(),
        first_date: streams.first().map(|s| s.date.clone()),
        last_date: streams.last().map(|s| s.date.clone()),
        streams,
    })
}

pub async fn get_calendar(
    State(state): State<AppState>,
) -> Result<Json<CalendarResponse>, AppError> {
    let months = calendar::build_calendar(&state.schedule).map_err(AppError::unavailable)?;
    Ok(Json(CalendarResponse {
        months: months.iter().map(to_month_payload).collect(),
    }))
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<DayDetailsResponse>, AppError> {
    let date = parse_date(&raw)
        .ok_or_else(|| AppError::bad_request("date must be formatted as YYYY-MM-DD"))?;
    let key = date.format("%Y-%m-%d").to_string();

    // A date with no entry is a normal outcome, not an error.
    let stream = state.schedule.iter().find(|s| s.date == key).cloned();
    Ok(Json(DayDetailsResponse {
        date: key,
        has_stream: stream.is_some(),
        stream,
    }))
}

fn to_month_payload(month: &CalendarMonth) -> MonthPayload {
    MonthPayload {
        year: month.year,
        month: month.month,
        days: month
            .days
            .iter()
            .map(|day| {
                day.as_ref().map(|d| DayPayload {
                    date: d.date.format("%Y-%m-%d").to_string(),
                    is_current_month: d.is_current_month,
                    is_today: d.is_today,
                    stream: d.stream.clone(),
                })
            })
            .collect(),
    }
}
