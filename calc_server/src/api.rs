use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use calc_core::materials::ProfileRepository;
use calc_core::{evaluate, CalcError, CalculationInput, CalculationResult, DesignCriteria, Settings, SteelProfile};

pub const SERVICE_NAME: &str = "engineering-strength-calculator";
pub const SERVICE_VERSION: &str = "1.0.0";

/// Application state
pub struct AppState {
    app_name: String,
    criteria: DesignCriteria,
    repository: Arc<dyn ProfileRepository>,
}

impl AppState {
    pub fn new(settings: &Settings, repository: Arc<dyn ProfileRepository>) -> Self {
        Self {
            app_name: settings.app_name.clone(),
            criteria: settings.criteria,
            repository,
        }
    }
}

/// Build the API router
pub fn create_router(settings: &Settings, repository: Arc<dyn ProfileRepository>) -> Router {
    let state = AppState::new(settings, repository);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/api/v1/health", get(health_check))
        .route("/api/v1/profiles", get(list_profiles))
        .route("/api/v1/profiles/:key", get(get_profile))
        .route("/api/v1/calculate", post(calculate_handler))
        .layer(cors_layer(&settings.server.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Root endpoint
async fn root_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "message": state.app_name,
        "version": SERVICE_VERSION,
        "endpoints": [
            "GET /health",
            "GET /api/v1/profiles",
            "GET /api/v1/profiles/{key}",
            "POST /api/v1/calculate"
        ]
    }))
}

/// Health check endpoint
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": SERVICE_VERSION,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[derive(Debug, Deserialize)]
struct ProfileQuery {
    search: Option<String>,
}

async fn list_profiles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProfileQuery>,
) -> Json<serde_json::Value> {
    let profiles = match query.search.as_deref() {
        Some(text) => state.repository.search_profiles(text),
        None => state.repository.all_profiles(),
    };
    Json(json!({ "profiles": profiles }))
}

async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<SteelProfile>, ApiError> {
    let profile = state.repository.get_profile(&key)?;
    Ok(Json(profile.clone()))
}

/// Run the beam check
#[tracing::instrument(name = "calculate", skip(state, payload), fields(request_id = %Uuid::new_v4()))]
async fn calculate_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CalculationInput>, JsonRejection>,
) -> Result<Json<CalculationResult>, ApiError> {
    let Json(input) = payload?;

    tracing::info!(
        "Received calculation: {} m, {}, {} kN at {}, profile {}",
        input.length,
        input.support_type,
        input.force,
        input.force_position,
        input.profile_name
    );

    input.validate()?;
    let profile = state.repository.get_profile(&input.profile_name)?;
    let result = evaluate(&input, profile, &state.criteria)?;

    tracing::info!(
        "Calculation done: strength {}, stiffness {}",
        result.is_strength_sufficient,
        result.is_stiffness_sufficient
    );
    Ok(Json(result))
}

/// API Errors
#[derive(Debug)]
pub enum ApiError {
    Calc(CalcError),
    BadRequest(String),
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        ApiError::Calc(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            ApiError::Calc(err) => {
                let status = match &err {
                    CalcError::ProfileNotFound { .. } => StatusCode::NOT_FOUND,
                    CalcError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                if status.is_server_error() {
                    tracing::error!("Calculation error: {}", err);
                } else {
                    tracing::warn!("Rejected request: {}", err);
                }
                (status, err.to_string(), err.error_code())
            }
            ApiError::BadRequest(message) => {
                tracing::warn!("Malformed request body: {}", message);
                (StatusCode::BAD_REQUEST, message, "INVALID_INPUT")
            }
        };

        let body = Json(json!({
            "error": message,
            "code": code
        }));

        (status, body).into_response()
    }
}
