//! REST API for the shipment planning service.
//!
//! Provides HTTP endpoints for planning clients.
//! Uses Axum as the web framework and supports CORS.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::OnceLock;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReceiverStream;
use tower_http::cors::{Any, CorsLayer};
use utoipa::{OpenApi, ToSchema};

use crate::config::{ApiConfig, FreightConfig};
use crate::model::{
    Carton, ContainerManifest, ContainerType, FreightLimits, ManifestLoad, PalletSpec, PlanError,
    ShipmentMode, ShipmentPlan, ShipmentRequest, ShipmentType, ValidationError, WeightStatus,
    standard_catalog,
};
use crate::planner::{PlanEvent, plan_shipment, plan_shipment_with_progress};

#[derive(Clone)]
struct ApiState {
    catalog: Vec<ContainerType>,
    limits: FreightLimits,
}

static OPENAPI_DOC: OnceLock<utoipa::openapi::OpenApi> = OnceLock::new();

// SRI hashes verified against https://unpkg.com/swagger-ui-dist@5.17.14/ on 2025-10-29.
const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta charset="utf-8" />
        <title>loadplan API Docs</title>
        <link
            rel="stylesheet"
            href="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui.css"
            integrity="sha384-wxLW6kwyHktdDGr6Pv1zgm/VGJh99lfUbzSn6HNHBENZlCN7W602k9VkGdxuFvPn"
            crossorigin="anonymous"
        />
    </head>
    <body>
        <div id="swagger-ui"></div>
        <script
            src="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui-bundle.js"
            integrity="sha384-wmyclcVGX/WhUkdkATwhaK1X1JtiNrr2EoYJ+diV3vj4v6OC5yCeSu+yW13SYJep"
            crossorigin="anonymous"
        ></script>
        <script
            src="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui-standalone-preset.js"
            integrity="sha384-2YH8WDRaj7V2OqU/trsmzSagmk/E2SutiCsGkdgoQwC9pNUJV1u/141DHB6jgs8t"
            crossorigin="anonymous"
        ></script>
        <script>
            window.onload = function () {
                const ui = SwaggerUIBundle({
                    url: "/docs/openapi.json",
                    dom_id: "#swagger-ui",
                    presets: [SwaggerUIBundle.presets.apis, SwaggerUIStandalonePreset],
                    layout: "StandaloneLayout",
                });
                window.ui = ui;
            };
        </script>
    </body>
    </html>"##;

fn openapi_doc() -> &'static utoipa::openapi::OpenApi {
    OPENAPI_DOC.get_or_init(ApiDoc::openapi)
}

/// Request structure for the planning endpoints.
///
/// Pallet fields are only consulted for palletized shipments; omitted ones
/// fall back to the EUR/industrial defaults below.
#[derive(Deserialize, Clone, ToSchema)]
#[schema(
    example = json!({
        "shipment_type": "palletized",
        "total_cartons": 200,
        "carton_length": 40.0,
        "carton_width": 30.0,
        "carton_height": 20.0,
        "carton_weight": 5.0
    })
)]
pub struct PlanRequest {
    #[serde(default)]
    pub shipment_type: ShipmentType,
    pub total_cartons: u32,
    pub carton_length: f64,
    pub carton_width: f64,
    pub carton_height: f64,
    pub carton_weight: f64,
    #[serde(default)]
    #[schema(nullable = true)]
    pub pallet_length: Option<f64>,
    #[serde(default)]
    #[schema(nullable = true)]
    pub pallet_width: Option<f64>,
    #[serde(default)]
    #[schema(nullable = true)]
    pub pallet_height: Option<f64>,
    #[serde(default)]
    #[schema(nullable = true)]
    pub pallet_weight: Option<f64>,
    #[serde(default)]
    #[schema(nullable = true)]
    pub max_pallet_height: Option<f64>,
}

impl PlanRequest {
    const DEFAULT_PALLET_LENGTH: f64 = 120.0;
    const DEFAULT_PALLET_WIDTH: f64 = 100.0;
    const DEFAULT_PALLET_HEIGHT: f64 = 15.0;
    const DEFAULT_PALLET_WEIGHT: f64 = 20.0;
    const DEFAULT_MAX_PALLET_HEIGHT: f64 = 152.4;

    fn into_request(self) -> Result<ShipmentRequest, ValidationError> {
        let carton = Carton::new(
            self.carton_length,
            self.carton_width,
            self.carton_height,
            self.carton_weight,
        )?;

        let mode = match self.shipment_type {
            ShipmentType::FloorLoaded => ShipmentMode::FloorLoaded,
            ShipmentType::Palletized => {
                let pallet = PalletSpec::new(
                    self.pallet_length.unwrap_or(Self::DEFAULT_PALLET_LENGTH),
                    self.pallet_width.unwrap_or(Self::DEFAULT_PALLET_WIDTH),
                    self.pallet_height.unwrap_or(Self::DEFAULT_PALLET_HEIGHT),
                    self.pallet_weight.unwrap_or(Self::DEFAULT_PALLET_WEIGHT),
                    self.max_pallet_height
                        .unwrap_or(Self::DEFAULT_MAX_PALLET_HEIGHT),
                )?;
                ShipmentMode::Palletized(pallet)
            }
        };

        ShipmentRequest::new(self.total_cartons, carton, mode)
    }
}

/// Response structure with the complete shipment plan.
#[derive(Serialize, ToSchema)]
pub struct PlanResponse {
    pub recommendation: String,
    pub container_manifests: Vec<ManifestView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(nullable = true)]
    pub total_pallets: Option<u32>,
    pub total_weight_kg: f64,
    pub weight_status: WeightStatus,
}

/// Single container in the response, with a human-readable item list.
#[derive(Serialize, ToSchema)]
pub struct ManifestView {
    pub container_type: String,
    pub items: Vec<String>,
    pub cartons: u32,
    pub total_weight_kg: f64,
}

impl ManifestView {
    fn from_manifest(manifest: &ContainerManifest) -> Self {
        let items = match &manifest.load {
            ManifestLoad::Pallets(pallets) => pallets
                .iter()
                .map(|entry| {
                    format!(
                        "{} x {} pallet ({} layers, {} cm, {} cartons each)",
                        entry.count,
                        entry.shape.kind,
                        entry.shape.layers,
                        entry.shape.height,
                        entry.shape.cartons
                    )
                })
                .collect(),
            ManifestLoad::Cartons(count) => {
                vec![format!("{} x loose carton", count)]
            }
        };
        Self {
            container_type: manifest.container.name.clone(),
            items,
            cartons: manifest.cartons,
            total_weight_kg: manifest.total_weight_kg,
        }
    }
}

impl PlanResponse {
    fn from_plan(plan: ShipmentPlan) -> Self {
        Self {
            container_manifests: plan
                .manifests
                .iter()
                .map(ManifestView::from_manifest)
                .collect(),
            recommendation: plan.recommendation,
            total_pallets: plan.total_pallets,
            total_weight_kg: plan.total_weight_kg,
            weight_status: plan.weight_status,
        }
    }
}

#[derive(Serialize, ToSchema)]
struct ErrorResponse {
    error: String,
    details: String,
}

impl ErrorResponse {
    fn new(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: details.into(),
        }
    }
}

fn error_response(
    status: StatusCode,
    error: impl Into<String>,
    details: impl Into<String>,
) -> Response {
    (status, Json(ErrorResponse::new(error, details))).into_response()
}

fn json_deserialize_error(err: JsonRejection) -> Response {
    error_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        "Invalid JSON data",
        err.to_string(),
    )
}

fn validation_error(details: impl Into<String>) -> Response {
    error_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        "Invalid input data",
        details,
    )
}

fn infeasible_error(details: impl Into<String>) -> Response {
    error_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        "Shipment cannot be planned",
        details,
    )
}

fn plan_error_response(err: PlanError) -> Response {
    match err {
        PlanError::Validation(err) => validation_error(err.to_string()),
        PlanError::Infeasible(details) => infeasible_error(details),
    }
}

fn parse_plan_request(
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<ShipmentRequest, Response> {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(err) => return Err(json_deserialize_error(err)),
    };

    payload
        .into_request()
        .map_err(|err| validation_error(err.to_string()))
}

#[derive(OpenApi)]
#[openapi(
    paths(handle_plan, handle_plan_stream),
    components(
        schemas(
            PlanRequest,
            PlanResponse,
            ManifestView,
            ErrorResponse,
            ShipmentType,
            WeightStatus
        )
    ),
    tags((name = "planning", description = "Endpoints for shipment planning"))
)]
struct ApiDoc;

/// Starts the API server.
///
/// Configures CORS for cross-origin requests from planning clients.
/// Blocks until the server is terminated.
pub async fn start_api_server(config: ApiConfig, freight: FreightConfig) {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    let state = ApiState {
        catalog: standard_catalog(),
        limits: freight.limits(),
    };

    let app = Router::new()
        // API endpoints
        .route("/plan", post(handle_plan))
        .route("/plan_stream", post(handle_plan_stream))
        // API documentation
        .route("/docs/openapi.json", get(serve_openapi_json))
        .route("/docs", get(serve_openapi_ui))
        // Service info
        .route("/", get(serve_service_info))
        .layer(cors)
        .with_state(state);

    let addr = config.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            panic!("❌ Could not bind API server to {}: {}", addr, err);
        }
    };

    let display_host = config.display_host().to_string();
    println!(
        "🚀 Server running on http://{}:{}",
        display_host,
        config.port()
    );
    if config.binds_to_all_interfaces() {
        println!("💡 Local access: http://localhost:{}", config.port());
    }
    println!("📦 API Endpoints:");
    println!("   - POST /plan");
    println!("   - POST /plan_stream");
    println!("📑 Documentation:");
    println!("   - GET /docs");
    println!("   - GET /docs/openapi.json");

    if let Err(err) = axum::serve(listener, app).await {
        eprintln!("❌ API server terminated with an error: {err}");
    }
}

/// Handler for POST /plan endpoint.
///
/// Takes a shipment description and returns the full container plan.
#[utoipa::path(
    post,
    path = "/plan",
    request_body = PlanRequest,
    responses(
        (status = 200, description = "Successfully planned shipment", body = PlanResponse),
        (
            status = UNPROCESSABLE_ENTITY,
            description = "Invalid request or unplannable shipment",
            body = ErrorResponse
        )
    ),
    tag = "planning"
)]
async fn handle_plan(
    State(state): State<ApiState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match parse_plan_request(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    println!(
        "📥 New plan request: {} cartons ({})",
        request.total_cartons,
        mode_label(&request.mode)
    );
    let plan = match plan_shipment(&request, &state.catalog, &state.limits) {
        Ok(plan) => plan,
        Err(err) => return plan_error_response(err),
    };
    println!(
        "📦 Result: {} containers, {} kg ({:?})",
        plan.manifests.len(),
        plan.total_weight_kg,
        plan.weight_status
    );

    (StatusCode::OK, Json(PlanResponse::from_plan(plan))).into_response()
}

/// Handler for POST /plan_stream endpoint (SSE).
///
/// Streams planning events in real-time as Server-Sent Events
/// (text/event-stream), one JSON event per committed container.
#[utoipa::path(
    post,
    path = "/plan_stream",
    request_body = PlanRequest,
    responses(
        (
            status = 200,
            description = "Streams planning events in real-time",
            content_type = "text/event-stream",
            body = String
        ),
        (
            status = UNPROCESSABLE_ENTITY,
            description = "Invalid request",
            body = ErrorResponse
        )
    ),
    tag = "planning"
)]
async fn handle_plan_stream(
    State(state): State<ApiState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match parse_plan_request(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let (tx, rx) = mpsc::channel::<String>(32);
    let catalog = state.catalog.clone();
    let limits = state.limits;

    tokio::task::spawn_blocking(move || {
        let send = |event: &PlanEvent| {
            if let Ok(json) = serde_json::to_string(event) {
                // Receiver may have closed the stream; remaining events are discarded.
                let _ = tx.blocking_send(json);
            }
        };
        if let Err(err) = plan_shipment_with_progress(&request, &catalog, &limits, |event| {
            send(event);
        }) {
            send(&PlanEvent::Failed {
                message: err.to_string(),
            });
        }
    });

    let stream = ReceiverStream::new(rx)
        .map(|msg| Ok::<_, std::convert::Infallible>(Event::default().data(msg)));
    Sse::new(stream)
        .keep_alive(
            KeepAlive::new()
                .interval(std::time::Duration::from_secs(10))
                .text("keep-alive"),
        )
        .into_response()
}

async fn serve_service_info() -> impl IntoResponse {
    Json(json!({
        "service": "loadplan",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ["/plan", "/plan_stream", "/docs", "/docs/openapi.json"],
    }))
}

async fn serve_openapi_json(State(_state): State<ApiState>) -> impl IntoResponse {
    Json(openapi_doc())
}

async fn serve_openapi_ui(State(_state): State<ApiState>) -> impl IntoResponse {
    Html(SWAGGER_UI_HTML)
}

fn mode_label(mode: &ShipmentMode) -> &'static str {
    match mode {
        ShipmentMode::FloorLoaded => "floor loaded",
        ShipmentMode::Palletized(_) => "palletized",
    }
}
