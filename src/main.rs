mod core;
mod features;
mod shared;

use crate::core::config::{Config, Environment};
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::attractions::{routes as attractions_routes, AttractionService};
use crate::features::countries::{routes as countries_routes, CountryService};
use crate::features::hotels::{
    routes as hotels_routes, HotelCompanyService, HotelFeeService, HotelService,
};
use crate::features::restaurants::{
    routes as restaurants_routes, RestaurantCompanyService, RestaurantService,
};
use crate::features::shops::{routes as shops_routes, ShopCompanyService, ShopService};
use crate::features::tour_guides::{routes as tour_guides_routes, TourGuideService};
use crate::features::users::{routes as users_routes, UserService};
use crate::features::vehicles::{routes as vehicles_routes, VehicleCompanyService, VehicleService};
use axum::extract::DefaultBodyLimit;
use axum::{middleware::from_fn, Router};
use clap::{Parser, Subcommand};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Every business endpoint is served below this prefix
const API_PREFIX: &str = "/ota/api/v1";

#[derive(Debug, Parser)]
#[command(name = "creole", version, about = "Tour operation back office server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the HTTP server
    Serve {
        /// Force the dev environment (debug logging)
        #[arg(long)]
        dev: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let force_dev = match cli.command {
        Some(Command::Serve { dev }) => dev,
        None => false,
    };

    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(serve(worker_threads, force_dev))
}

async fn serve(worker_threads: usize, force_dev: bool) -> anyhow::Result<()> {
    // Configuration also loads .env, so RUST_LOG is visible to the filter below
    let mut config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    if force_dev {
        config.app.environment = Environment::Dev;
    }

    let default_filter = config.app.environment.default_log_filter();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "System info: environment={}, tokio_worker_threads={}, pid={}",
        config.app.environment,
        worker_threads,
        std::process::id()
    );

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    database::migrate(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    let app = Router::new()
        .merge(swagger)
        .merge(app_router(pool, config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check plus every feature router nested under [`API_PREFIX`]
fn app_router(pool: PgPool, max_request_body_size: usize) -> Router {
    let country_service = Arc::new(CountryService::new(pool.clone()));
    let hotel_company_service = Arc::new(HotelCompanyService::new(pool.clone()));
    let hotel_service = Arc::new(HotelService::new(pool.clone()));
    let hotel_fee_service = Arc::new(HotelFeeService::new(pool.clone()));
    let restaurant_company_service = Arc::new(RestaurantCompanyService::new(pool.clone()));
    let restaurant_service = Arc::new(RestaurantService::new(pool.clone()));
    let shop_company_service = Arc::new(ShopCompanyService::new(pool.clone()));
    let shop_service = Arc::new(ShopService::new(pool.clone()));
    let vehicle_company_service = Arc::new(VehicleCompanyService::new(pool.clone()));
    let vehicle_service = Arc::new(VehicleService::new(pool.clone()));
    let tour_guide_service = Arc::new(TourGuideService::new(pool.clone()));
    let attraction_service = Arc::new(AttractionService::new(pool.clone()));
    let user_service = Arc::new(UserService::new(pool));

    let api_routes = Router::new()
        .merge(countries_routes::routes(country_service))
        .merge(hotels_routes::routes(
            hotel_company_service,
            hotel_service,
            hotel_fee_service,
        ))
        .merge(restaurants_routes::routes(
            restaurant_company_service,
            restaurant_service,
        ))
        .merge(shops_routes::routes(shop_company_service, shop_service))
        .merge(vehicles_routes::routes(
            vehicle_company_service,
            vehicle_service,
        ))
        .merge(tour_guides_routes::routes(tour_guide_service))
        .merge(attractions_routes::routes(attraction_service))
        .merge(users_routes::routes(user_service));

    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .nest(API_PREFIX, api_routes)
        .layer(DefaultBodyLimit::max(max_request_body_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{envelope_code, lazy_pool, test_server};
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    fn server() -> axum_test::TestServer {
        test_server(app_router(lazy_pool(), 1024))
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["creole"]).unwrap();
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["creole", "serve", "--dev"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Serve { dev: true })));

        let cli = Cli::try_parse_from(["creole", "serve"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Serve { dev: false })));

        assert!(Cli::try_parse_from(["creole", "migrate"]).is_err());
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = server().get("/health").await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_routes_are_nested_under_prefix() {
        let server = server();

        let response = server.get("/countries/1").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let response = server.get("/ota/api/v1/countries/abc").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }

    #[tokio::test]
    async fn test_malformed_json_is_parameter_error() {
        let response = server()
            .post("/ota/api/v1/countries")
            .content_type("application/json")
            .bytes("{\"name\": ".into())
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }

    #[tokio::test]
    async fn test_body_over_limit_is_rejected() {
        let response = server()
            .post("/ota/api/v1/attractions")
            .json(&json!({ "address": "x".repeat(4096) }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }
}
