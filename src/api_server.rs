// Axum API Server Module
//
// Purpose: REST API over the storage risk advisor (crop catalog, point
// assessments, cross-crop comparison, batch reports)

#[cfg(feature = "api")]
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

#[cfg(feature = "api")]
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

#[cfg(feature = "api")]
use crate::advisor::{Assessment, CropComparison, CropSummary, RiskAdvisor, RiskReport};

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub advisor: RiskAdvisor,
}

#[cfg(feature = "api")]
impl AppState {
    /// Built-in table unless `knowledge_base_path` names a JSON table
    pub fn new(knowledge_base_path: Option<&str>) -> anyhow::Result<Self> {
        let advisor = match knowledge_base_path {
            Some(path) => {
                tracing::info!("Loading knowledge base from {}...", path);
                RiskAdvisor::from_json_file(path)?
            }
            None => {
                tracing::info!("Using built-in knowledge base");
                RiskAdvisor::builtin()
            }
        };
        tracing::info!("Knowledge base ready ({} crops)", advisor.crop_count());

        Ok(Self { advisor })
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Catalog (drives crop/method selectors)
        .route("/api/crops", get(list_crops))

        // Point assessment and cross-crop comparison
        .route("/api/assess", get(assess))
        .route("/api/compare", get(compare))

        // Batch reports
        .route("/api/report", post(batch_report))
        .route("/api/report/sample", get(sample_report))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive()) // Allow all origins (adjust for production)
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// GET /api/crops
#[cfg(feature = "api")]
async fn list_crops(State(state): State<AppState>) -> Json<Vec<CropSummary>> {
    Json(state.advisor.catalog())
}

/// Single pair assessment
///
/// GET /api/assess?crop=tomato&method=sack&region=north
///
/// Unknown combinations are a normal 200 response with riskLevel "Unknown".
#[cfg(feature = "api")]
async fn assess(
    State(state): State<AppState>,
    Query(params): Query<AssessQuery>,
) -> Result<Json<Assessment>, AppError> {
    let crop = params
        .crop
        .ok_or_else(|| AppError::BadRequest("missing query parameter 'crop'".to_string()))?;
    let method = params
        .method
        .ok_or_else(|| AppError::BadRequest("missing query parameter 'method'".to_string()))?;

    let assessment = state
        .advisor
        .assess_risk(&crop, &method, params.region.as_deref());
    tracing::debug!("Assessed {}/{}: {}", crop, method, assessment.risk_level);

    Ok(Json(assessment))
}

/// GET /api/compare?method=cold%20room
#[cfg(feature = "api")]
async fn compare(
    State(state): State<AppState>,
    Query(params): Query<CompareQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let method = params
        .method
        .ok_or_else(|| AppError::BadRequest("missing query parameter 'method'".to_string()))?;

    let rows: Vec<CropComparison> = state.advisor.compare_crops(&method);

    Ok(Json(serde_json::json!({
        "method": method,
        "crops": rows,
    })))
}

/// Batch report
///
/// POST /api/report
/// Body: { "pairs": [{ "crop": "tomato", "method": "sack" }, ...], "region": "south" }
#[cfg(feature = "api")]
async fn batch_report(
    State(state): State<AppState>,
    Json(req): Json<BatchReportRequest>,
) -> Json<RiskReport> {
    let pairs: Vec<(String, String)> = req
        .pairs
        .into_iter()
        .map(|p| (p.crop, p.method))
        .collect();

    let start = std::time::Instant::now();
    let report = state.advisor.report(&pairs, req.region.as_deref());
    tracing::info!(
        "Batch report for {} pairs ({} unknown) in {:?}",
        report.tally.total,
        report.tally.unknown,
        start.elapsed()
    );

    Json(report)
}

/// GET /api/report/sample
#[cfg(feature = "api")]
async fn sample_report(State(state): State<AppState>) -> Json<RiskReport> {
    Json(state.advisor.sample_report())
}

// ============================================================================
// Request Types
// ============================================================================

#[cfg(feature = "api")]
#[derive(serde::Deserialize)]
struct AssessQuery {
    crop: Option<String>,
    method: Option<String>,
    region: Option<String>,
}

#[cfg(feature = "api")]
#[derive(serde::Deserialize)]
struct CompareQuery {
    method: Option<String>,
}

#[cfg(feature = "api")]
#[derive(serde::Deserialize)]
struct StoragePair {
    crop: String,
    method: String,
}

#[cfg(feature = "api")]
#[derive(serde::Deserialize)]
struct BatchReportRequest {
    #[serde(default)]
    pairs: Vec<StoragePair>,
    region: Option<String>,
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
enum AppError {
    BadRequest(String),
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
