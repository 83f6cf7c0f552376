//! Beam Modeler HTTP Server

use axum::{
    extract::Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::SocketAddr;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};

use beam_modeler::design::columns::{run_all_columns, BucklingCurve};
use beam_modeler::design::seismic::{performance_point, PerformancePoint, ResponseSpectrum, StiffnessModel};
use beam_modeler::design::DesignError;
use beam_modeler::prelude::*;

/// Listen address, read from `HOST` and `PORT`
#[derive(Debug, Clone)]
struct ServerConfig {
    host: String,
    port: u16,
}

impl ServerConfig {
    fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("PORT") {
            Ok(port) => port.parse()?,
            Err(_) => 8086,
        };
        Ok(Self { host, port })
    }

    fn address(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[derive(Debug, Error)]
enum ApiError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Analysis(#[from] FEAError),
    #[error(transparent)]
    Design(#[from] DesignError),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Model(err) => err.error_code(),
            ApiError::Analysis(_) => "ANALYSIS_ERROR",
            ApiError::Design(_) => "DESIGN_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<T>,
}

fn respond<T: Serialize>(result: Result<T, ApiError>) -> (StatusCode, Json<ApiResponse<T>>) {
    match result {
        Ok(results) => (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                error: None,
                error_code: None,
                results: Some(results),
            }),
        ),
        Err(e) => {
            warn!("Request failed: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse {
                    success: false,
                    error_code: Some(e.code().to_string()),
                    error: Some(e.to_string()),
                    results: None,
                }),
            )
        }
    }
}

#[derive(Debug, Deserialize)]
struct BeamRequest {
    /// Beam file contents
    beam: String,
    #[serde(default)]
    options: BuildOptions,
    #[serde(default)]
    load_combos: Vec<LoadComboData>,
    #[serde(default)]
    analysis: AnalysisOptions,
}

#[derive(Debug, Deserialize)]
struct LoadComboData {
    name: String,
    factors: HashMap<String, f64>,
}

#[derive(Debug, Serialize)]
struct BeamResults {
    beam: String,
    combos: Vec<String>,
    node_displacements: Vec<NodeDisplacementResult>,
    reactions: Vec<ReactionResult>,
}

#[derive(Debug, Serialize)]
struct NodeDisplacementResult {
    node: String,
    combo: String,
    #[serde(flatten)]
    displacement: NodeDisplacement,
}

#[derive(Debug, Serialize)]
struct ReactionResult {
    node: String,
    combo: String,
    #[serde(flatten)]
    reaction: Reactions,
}

#[derive(Debug, Deserialize)]
struct ColumnsRequest {
    /// Comma-separated column schedule with a header row
    schedule: String,
    #[serde(default)]
    curve: BucklingCurve,
}

#[derive(Debug, Deserialize)]
struct SeismicRequest {
    mass: f64,
    spectrum: ResponseSpectrum,
    stiffness: StiffnessModel,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn plan(Json(request): Json<BeamRequest>) -> impl IntoResponse {
    respond(run_plan(request))
}

async fn analyze(Json(request): Json<BeamRequest>) -> impl IntoResponse {
    respond(run_analysis(request))
}

async fn columns(Json(request): Json<ColumnsRequest>) -> impl IntoResponse {
    respond(run_all_columns(&request.schedule, request.curve).map_err(ApiError::from))
}

async fn seismic(Json(request): Json<SeismicRequest>) -> impl IntoResponse {
    respond(run_seismic(request))
}

fn run_plan(request: BeamRequest) -> Result<ModelRegistration, ApiError> {
    let beam: BeamDescription = request.beam.parse()?;
    Ok(BeamModelBuilder::with_options(request.options).plan(&beam)?)
}

fn run_analysis(request: BeamRequest) -> Result<BeamResults, ApiError> {
    let beam: BeamDescription = request.beam.parse()?;
    let mut model: FEModel = BeamModelBuilder::with_options(request.options).build(&beam)?;

    for combo in request.load_combos {
        let combo = combo
            .factors
            .iter()
            .fold(LoadCombination::new(&combo.name), |lc, (case, factor)| lc.with_case(case, *factor));
        model.add_load_combo(combo)?;
    }

    model.analyze(request.analysis)?;

    let combos = model.combo_names();
    let mut nodes: Vec<String> = model.nodes.keys().cloned().collect();
    nodes.sort();

    let mut node_displacements = Vec::new();
    let mut reactions = Vec::new();
    for combo in &combos {
        for node in &nodes {
            node_displacements.push(NodeDisplacementResult {
                node: node.clone(),
                combo: combo.clone(),
                displacement: model.node_displacement(node, combo)?,
            });
            if model.supports.contains_key(node) {
                reactions.push(ReactionResult {
                    node: node.clone(),
                    combo: combo.clone(),
                    reaction: model.node_reactions(node, combo)?,
                });
            }
        }
    }

    info!("Analysed beam '{}' for {} combination(s)", beam.name, combos.len());
    Ok(BeamResults {
        beam: beam.name,
        combos,
        node_displacements,
        reactions,
    })
}

fn run_seismic(request: SeismicRequest) -> Result<PerformancePoint, ApiError> {
    Ok(performance_point(request.mass, &request.spectrum, request.stiffness)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ServerConfig::from_env()?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/v1/beam/plan", post(plan))
        .route("/api/v1/beam/analyze", post(analyze))
        .route("/api/v1/columns", post(columns))
        .route("/api/v1/seismic", post(seismic))
        .layer(cors);

    let addr = config.address()?;
    println!("Beam Modeler Server listening on http://{}", addr);
    println!("  Health check: GET  /health");
    println!("  Beam plan:    POST /api/v1/beam/plan");
    println!("  Beam analyze: POST /api/v1/beam/analyze");
    println!("  Columns:      POST /api/v1/columns");
    println!("  Seismic:      POST /api/v1/seismic");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
