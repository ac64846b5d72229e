use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::serve;
use axum::{Json, Router};
use route_planner::common::config::{GraphConfig, QueryConfig, UserQueryConfig};
use route_planner::common::error::{ConfigError, LoadError, QueryError};
use route_planner::common::graph::RouteGraph;
use route_planner::loading::network::load_network_file;
use route_planner::loading::sample::sample_graph;
use route_planner::routing::all_paths::find_all_paths;
use route_planner::routing::common::{compare_algorithms, find_path};
use route_planner::routing::structs::{PathResult, PathSummary};
use serde_json::json;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
struct AppState {
    graph: Arc<RouteGraph>,
}

/// Render an error message with the provided status code
fn error_response(status: StatusCode, msg: String) -> Response {
    let json_response = json!({
        "status": "error",
        "message": msg
    });

    (status, Json(json_response)).into_response()
}

fn config_error(err: ConfigError) -> Response {
    warn!(%err, "Rejected query");
    error_response(StatusCode::BAD_REQUEST, err.to_string())
}

fn query_error(err: QueryError) -> Response {
    let status = match err {
        QueryError::UnknownCity(_) | QueryError::NoPathExists { .. } => {
            StatusCode::NOT_FOUND
        }
        QueryError::Inconsistent(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, err.to_string())
}

/// Convert a raw search result into something which can be sent back to the
/// user
fn summarise(
    graph: &RouteGraph,
    result: Result<PathResult, QueryError>,
) -> Result<PathSummary, QueryError> {
    result.and_then(|path| path.summarise(graph))
}

async fn get_route(
    State(state): State<AppState>,
    Query(query): Query<UserQueryConfig>,
) -> impl IntoResponse {
    let now = Instant::now();

    let query_config: QueryConfig = match query.try_into() {
        Ok(config) => config,
        Err(err) => return config_error(err),
    };

    let result = find_path(
        &state.graph,
        &query_config.start,
        &query_config.end,
        query_config.algorithm,
        query_config.criterion,
    );

    info!(elapsed = ?now.elapsed(), "Route query complete");

    match summarise(&state.graph, result) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(err) => query_error(err),
    }
}

async fn get_comparison(
    State(state): State<AppState>,
    Query(query): Query<UserQueryConfig>,
) -> impl IntoResponse {
    let now = Instant::now();

    let query_config: QueryConfig = match query.try_into() {
        Ok(config) => config,
        Err(err) => return config_error(err),
    };

    let results = compare_algorithms(
        &state.graph,
        &query_config.start,
        &query_config.end,
        query_config.criterion,
    );

    // Unknown cities fail every algorithm in the same way
    if let Some((_, Err(QueryError::UnknownCity(id)))) = results.first() {
        return query_error(QueryError::UnknownCity(id.clone()));
    }

    let entries: Vec<serde_json::Value> = results
        .into_iter()
        .map(|(algorithm, result)| {
            // Only report the criterion for algorithms which used it
            let criterion =
                algorithm.is_weighted().then_some(query_config.criterion);
            match summarise(&state.graph, result) {
                Ok(summary) => json!({
                    "algorithm": algorithm.label(),
                    "criterion": criterion,
                    "status": "success",
                    "path": summary
                }),
                Err(err) => json!({
                    "algorithm": algorithm.label(),
                    "criterion": criterion,
                    "status": "error",
                    "message": err.to_string()
                }),
            }
        })
        .collect();

    info!(elapsed = ?now.elapsed(), "Comparison complete");

    (StatusCode::OK, Json(entries)).into_response()
}

async fn get_all_paths(
    State(state): State<AppState>,
    Query(query): Query<UserQueryConfig>,
) -> impl IntoResponse {
    let now = Instant::now();

    let query_config: QueryConfig = match query.try_into() {
        Ok(config) => config,
        Err(err) => return config_error(err),
    };

    let paths = match find_all_paths(
        &state.graph,
        &query_config.start,
        &query_config.end,
        query_config.max_paths,
    ) {
        Ok(paths) => paths,
        Err(err) => return query_error(err),
    };

    let summaries: Result<Vec<PathSummary>, QueryError> = paths
        .iter()
        .map(|path| path.summarise(&state.graph))
        .collect();

    info!(elapsed = ?now.elapsed(), "Path enumeration complete");

    match summaries {
        Ok(summaries) => (StatusCode::OK, Json(summaries)).into_response(),
        Err(err) => query_error(err),
    }
}

async fn get_cities(State(state): State<AppState>) -> impl IntoResponse {
    let cities: Vec<_> = state.graph.cities().map(|(_, city)| city).collect();
    (StatusCode::OK, Json(cities)).into_response()
}

async fn get_graph(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.graph.summarise())).into_response()
}

async fn health_check() -> impl IntoResponse {
    let msg = "Hello World!";

    let json_response = json!({
        "status": "success",
        "message": msg
    });

    Json(json_response)
}

/// Build the graph from RP_NETWORK_FILE if it is set, otherwise fall back to
/// the built-in sample network
fn load_graph(config: GraphConfig) -> Result<RouteGraph, LoadError> {
    match env::var("RP_NETWORK_FILE") {
        Ok(path) => load_network_file(&PathBuf::from(path), config),
        Err(_) => {
            info!("RP_NETWORK_FILE not set, using the sample network");
            Ok(sample_graph(config)?)
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let graph_config =
        GraphConfig::from_env().expect("Error reading graph settings!");
    let graph = load_graph(graph_config).expect("Error loading network!");

    let state = AppState {
        graph: Arc::new(graph),
    };

    let router = Router::new()
        .route("/healthcheck", get(health_check))
        .route("/cities", get(get_cities))
        .route("/graph", get(get_graph))
        .route("/route", get(get_route))
        .route("/compare", get(get_comparison))
        .route("/paths", get(get_all_paths))
        .with_state(state);

    let bind_addr =
        env::var("RP_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Error binding to address!");
    info!(%bind_addr, "Serving API");
    serve(listener, router).await.expect("Error serving API!");
}
