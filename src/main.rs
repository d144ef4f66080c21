use olesha_insights::{load_schedule, resolve_schedule_path, router, AppState};
use std::{env, net::SocketAddr};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let schedule_path = resolve_schedule_path();
    let streams = load_schedule(&schedule_path).await;
    if streams.is_empty() {
        warn!(
            "no schedule data loaded from {}; the calendar will show a loading failure",
            schedule_path.display()
        );
    } else {
        info!(
            "loaded {} predicted streams from {}",
            streams.len(),
            schedule_path.display()
        );
    }

    let app = router(AppState::new(streams));

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
