use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use rate_compare::orchestrator::get_rate_comparison;
use rate_compare::types::{CompareConfig, ExchangeQuote, RateRequest, RateResponse};
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Hold configuration
#[derive(Clone)]
struct CompareConfigState {
    config: Arc<CompareConfig>,
}

// Generate the OpenAPI schema
#[derive(OpenApi)]
#[openapi(
    paths(compare_rates),
    components(
        schemas(RateRequest, RateResponse, ExchangeQuote)
    ),
    tags(
        (name = "compare", description = "Best achievable swap output per exchange")
    )
)]
struct ApiDoc;

#[utoipa::path(
get,
path = "/compare",
params(
    ("sellTokenAddress" = String, Query, description = "Address of token being sold"),
    ("buyTokenAddress" = String, Query, description = "Address of token being bought"),
    ("sellAmount" = String, Query, description = "Raw amount of tokens being sold"),
    ("sellTokenDecimals" = u32, Query, description = "Decimals of token being sold"),
    ("buyTokenDecimals" = u32, Query, description = "Decimals of token being bought"),
    ("chainId" = u64, Query, description = "Numeric chain identifier")
),
responses(
    (status = 200, description = "Per-exchange best output amounts", body = RateResponse)
),
tag = "compare"
)]
async fn compare_rates(
    State(state): State<CompareConfigState>,
    Query(params): Query<RateRequest>,
) -> Result<Json<RateResponse>, (StatusCode, String)> {
    get_rate_comparison(state.config.as_ref(), params)
        .await
        .map(Json)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Create API documentation
    let openapi = ApiDoc::openapi();
    let config_path = PathBuf::from("rate_config.toml");

    let config_state = CompareConfigState {
        config: Arc::new(CompareConfig::load_from(config_path)?),
    };
    // Build router with our endpoint and Swagger UI
    let app = Router::new()
        .route("/compare", get(compare_rates))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .with_state(config_state);

    tracing::info!("server running on http://localhost:3000");
    tracing::info!("swagger ui available at http://localhost:3000/swagger-ui/");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    axum::serve(listener, app).await?;

    Ok(())
}
