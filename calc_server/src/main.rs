use std::process::ExitCode;
use std::sync::Arc;

use calc_core::{builtin_catalog, Settings};

#[tokio::main]
async fn main() -> ExitCode {
    calc_core::logging::init_with_level("calc_server=info,calc_core=info,tower_http=info");

    let settings = match Settings::load(None) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Starting {}", settings.app_name);
    tracing::info!(
        "Allowable stress {} MPa, deflection limit L/{}",
        settings.criteria.allowable_stress_mpa,
        settings.criteria.deflection_denominator()
    );

    let catalog = builtin_catalog();
    tracing::info!("Loaded {} steel profiles", catalog.len());

    let app = calc_server::create_router(&settings, Arc::new(catalog.clone()));

    let addr = settings.server.bind_address();
    tracing::info!("Listening on {}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /api/v1/profiles");
    tracing::info!("  GET  /api/v1/profiles/:key");
    tracing::info!("  POST /api/v1/calculate");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
