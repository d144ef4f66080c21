use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct Stream {
    id: u32,
    game: String,
    start_time: String,
    is_weekend: bool,
}

#[derive(Debug, Deserialize)]
struct DayPayload {
    date: String,
    stream: Option<Stream>,
}

#[derive(Debug, Deserialize)]
struct MonthPayload {
    year: i32,
    month: u32,
    days: Vec<Option<DayPayload>>,
}

#[derive(Debug, Deserialize)]
struct CalendarResponse {
    months: Vec<MonthPayload>,
}

#[derive(Debug, Deserialize)]
struct DayDetailsResponse {
    date: String,
    has_stream: bool,
    stream: Option<Stream>,
}

#[derive(Debug, Deserialize)]
struct ScheduleResponse {
    count: usize,
    first_date: Option<String>,
    last_date: Option<String>,
    streams: Vec<Stream>,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
    streams: usize,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::{Mutex, Once, OnceLock};

    static REGISTER: Once = Once::new();
    static PIDS: OnceLock<Mutex<Vec<i32>>> = OnceLock::new();

    pub fn register(pid: u32) {
        let pids = PIDS.get_or_init(|| Mutex::new(Vec::new()));
        if let Ok(mut guard) = pids.lock() {
            guard.push(pid as i32);
        }
        REGISTER.call_once(|| unsafe {
            libc::atexit(on_exit);
        });
    }

    extern "C" fn on_exit() {
        let Some(pids) = PIDS.get() else {
            return;
        };
        if let Ok(guard) = pids.lock() {
            for pid in guard.iter() {
                unsafe {
                    libc::kill(*pid, libc::SIGTERM);
                }
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_schedule_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "olesha_insights_http_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

/// Two predicted streams spanning January through March 2025, so the
/// generated calendar must contain an empty February between them.
fn fixture_schedule() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "date": "2025-01-15",
            "start_time": "12:30",
            "end_time": "18:30",
            "duration_hours": 6.0,
            "game": "Just Chatting, Dota 2",
            "predicted_avg_viewers": 1540,
            "predicted_peak_viewers": 2210,
            "predicted_followers_gain": 130,
            "is_night_stream": false,
            "is_weekend": false,
            "weekday_ru": "среда",
            "season": "Зима"
        },
        {
            "id": 2,
            "date": "2025-03-02",
            "start_time": "11:45",
            "end_time": "19:15",
            "duration_hours": 7.5,
            "game": "Elden Ring",
            "predicted_avg_viewers": 1910,
            "predicted_peak_viewers": 2680,
            "predicted_followers_gain": 175,
            "is_night_stream": false,
            "is_weekend": true,
            "weekday_ru": "воскресенье",
            "season": "Весна"
        }
    ])
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/health")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server(schedule: &serde_json::Value) -> TestServer {
    let port = pick_free_port();
    let schedule_path = unique_schedule_path();
    std::fs::write(&schedule_path, schedule.to_string()).expect("write schedule fixture");

    let child = Command::new(env!("CARGO_BIN_EXE_olesha_insights"))
        .env("PORT", port.to_string())
        .env("SCHEDULE_DATA_PATH", schedule_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server(&fixture_schedule()).await);
    *guard = Some(Arc::clone(&server));
    server
}

#[tokio::test]
async fn http_calendar_spans_months_inclusively() {
    let server = shared_server().await;
    let client = Client::new();

    let calendar: CalendarResponse = client
        .get(format!("{}/api/calendar", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let labels: Vec<(i32, u32)> = calendar
        .months
        .iter()
        .map(|m| (m.year, m.month))
        .collect();
    assert_eq!(labels, vec![(2025, 1), (2025, 2), (2025, 3)]);

    // 2025-01-01 is a Wednesday: two leading blanks before day 1.
    let january = &calendar.months[0];
    assert!(january.days[0].is_none());
    assert!(january.days[1].is_none());
    let first_day = january.days[2].as_ref().expect("day 1 present");
    assert_eq!(first_day.date, "2025-01-01");
    assert_eq!(january.days.len(), 2 + 31);

    // February has no record, so every real day is empty.
    let february = &calendar.months[1];
    assert!(february
        .days
        .iter()
        .flatten()
        .all(|day| day.stream.is_none()));

    // Exactly one record is attached across the whole of January.
    let attached: Vec<&DayPayload> = january
        .days
        .iter()
        .flatten()
        .filter(|day| day.stream.is_some())
        .collect();
    assert_eq!(attached.len(), 1);
    assert_eq!(attached[0].date, "2025-01-15");
}

#[tokio::test]
async fn http_day_with_stream_returns_the_record() {
    let server = shared_server().await;
    let client = Client::new();

    let details: DayDetailsResponse = client
        .get(format!("{}/api/day/2025-01-15", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(details.date, "2025-01-15");
    assert!(details.has_stream);
    let stream = details.stream.expect("stream attached");
    assert_eq!(stream.id, 1);
    assert_eq!(stream.game, "Just Chatting, Dota 2");
    assert_eq!(stream.start_time, "12:30");
    assert!(!stream.is_weekend);
}

#[tokio::test]
async fn http_day_without_stream_reports_no_stream_state() {
    let server = shared_server().await;
    let client = Client::new();

    let details: DayDetailsResponse = client
        .get(format!("{}/api/day/2025-02-10", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(details.date, "2025-02-10");
    assert!(!details.has_stream);
    assert!(details.stream.is_none());
}

#[tokio::test]
async fn http_malformed_date_is_rejected() {
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/day/not-a-date", server.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_schedule_reports_count_and_range() {
    let server = shared_server().await;
    let client = Client::new();

    let schedule: ScheduleResponse = client
        .get(format!("{}/api/schedule", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(schedule.count, 2);
    assert_eq!(schedule.first_date.as_deref(), Some("2025-01-15"));
    assert_eq!(schedule.last_date.as_deref(), Some("2025-03-02"));
    assert_eq!(schedule.streams.len(), 2);
}

#[tokio::test]
async fn http_pages_render() {
    let server = shared_server().await;
    let client = Client::new();

    let insights = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(insights.status().is_success());
    let insights_html = insights.text().await.unwrap();
    assert!(insights_html.contains("Анализ стримов Олёши"));
    assert!(insights_html.contains("Четыре архетипа стримов"));

    let schedule = client
        .get(format!("{}/schedule", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(schedule.status().is_success());
    let schedule_html = schedule.text().await.unwrap();
    assert!(schedule_html.contains("Прогноз стримов"));
    assert!(schedule_html.contains("id=\"month-2025-1\""));
    assert!(schedule_html.contains("id=\"month-2025-3\""));
    assert!(schedule_html.contains("Пн"));
}

#[tokio::test]
async fn http_empty_schedule_surfaces_loading_failure() {
    // Separate server: the failure state must not leak into the shared one.
    let server = spawn_server(&serde_json::json!([])).await;
    let client = Client::new();

    let health: HealthResponse = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.streams, 0);

    let calendar = client
        .get(format!("{}/api/calendar", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(calendar.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);

    let page = client
        .get(format!("{}/schedule", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(page.status().is_success());
    let html = page.text().await.unwrap();
    assert!(html.contains("Не удалось загрузить расписание"));
}
