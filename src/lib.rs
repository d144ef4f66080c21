pub mod app;
pub mod calendar;
pub mod content;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod schedule;
pub mod state;
pub mod ui;

pub use app::router;
pub use schedule::{load_schedule, resolve_schedule_path};
pub use state::AppState;
