mod app;
mod config;
mod error;
mod export;
mod fitness;
mod inspiration;
mod meals;
mod model;
mod pages;
mod prompt;
mod sections;
mod state;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "nutricoach=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // no key, no requests: stop before binding
    let app_state = match AppState::init() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "startup configuration failed");
            return Err(e);
        }
    };

    let config = app_state.config.clone();
    let app = app::build_app(app_state);
    app::serve(app, &config).await
}
