//! Quill API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p quill-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use quill_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration first so the log format can follow APP_ENV
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        backend = ?config.database.backend,
        "Configuration loaded"
    );

    // Run the server
    if let Err(e) = quill_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
