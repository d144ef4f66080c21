use crate::models::StreamRecord;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_schedule_path() -> PathBuf {
    match env::var("SCHEDULE_DATA_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from("data/future_streams_schedule.json"),
    }
}

/// Reads the static schedule file. Any failure is logged and surfaces as an
/// empty list; the calendar builder then reports the loading failure to the
/// pages. Records are sorted ascending by date, which the builder relies on.
pub async fn load_schedule(path: &Path) -> Vec<StreamRecord> {
    let mut streams: Vec<StreamRecord> = match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(streams) => streams,
            Err(err) => {
                error!("failed to parse schedule file: {err}");
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            error!("schedule file {} not found", path.display());
            Vec::new()
        }
        Err(err) => {
            error!("failed to read schedule file: {err}");
            Vec::new()
        }
    };

    // ISO dates sort lexicographically, no parsing needed here.
    streams.sort_by(|a, b| a.date.cmp(&b.date));
    streams
}
