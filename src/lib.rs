use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Query, State};
use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::routing::get;
use axum::{response::IntoResponse, Json, Router};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use access::{AccessGate, AuthorizerClaims};
use configuration::{DatabaseConfiguration, StaticConfiguration, StoreBackend, StoreConfiguration};
use error::ResumeError;
use store::{MemoryRecordStore, MongoRecordStore, RecordStore};
use structs::api;
use structs::resume::ResumeField;

pub mod access;
pub mod configuration;
pub mod error;
pub mod store;
pub mod structs;
pub mod telemetry;
pub mod validation;

/// Shared by every handler. Holds no per-request state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub settings: Arc<StoreConfiguration>,
    pub gate: Arc<AccessGate>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn RecordStore>,
        settings: StoreConfiguration,
        gate: AccessGate,
    ) -> Self {
        AppState {
            store,
            settings: Arc::new(settings),
            gate: Arc::new(gate),
        }
    }
}

async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        api::cors_headers(),
        [(header::ACCESS_CONTROL_ALLOW_HEADERS, "*")],
    )
}

#[instrument(skip_all)]
async fn create_resume(
    State(state): State<AppState>,
    AuthorizerClaims(claims): AuthorizerClaims,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ResumeError> {
    if let Err(denied) = state.gate.authorize(claims.as_ref()) {
        warn!("create denied, caller is not privileged");
        return Err(denied.into());
    }
    let body = body?;

    // Anything that is not JSON is validated as a non-object and fails on its first field.
    let mut candidate = serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null);
    if let Value::Object(fields) = &mut candidate {
        fields.insert(
            String::from(ResumeField::Id.as_str()),
            Value::String(Uuid::new_v4().to_string()),
        );
    }

    let record = validation::validate_as_resume_entry(&candidate).map_err(|error| {
        warn!("rejected resume: {}", error);
        error
    })?;

    state.store.put(&state.settings.table_name, &record).await?;
    info!(id = %record.id, "created resume");

    Ok((
        StatusCode::OK,
        api::cors_headers(),
        Json(api::created_message(&record.id)),
    ))
}

#[instrument(skip_all)]
async fn read_resume(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, ResumeError> {
    let settings = &state.settings;
    let records = match params.get(&settings.primary_key_name) {
        Some(key_value) => {
            state
                .store
                .query_by_key(&settings.table_name, &settings.primary_key_name, key_value)
                .await?
        }
        None => state.store.scan_all(&settings.table_name).await?,
    };

    if records.is_empty() {
        return Err(ResumeError::NotFound);
    }
    info!(count = records.len(), "read resumes");

    Ok((StatusCode::OK, api::cors_headers(), Json(records)))
}

pub async fn run(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, app(state)).await
}

pub async fn get_database_connection(database_config: DatabaseConfiguration) -> Result<Database, mongodb::error::Error> {
    let client_options = ClientOptions::parse(database_config.connection_string()).await?;
    let client = Client::with_options(client_options)?;
    Ok(client.database(&database_config.database_name))
}

/// Wires the configured record store, table settings and access gate together.
pub async fn build_state(configuration: StaticConfiguration) -> Result<AppState, mongodb::error::Error> {
    let store: Arc<dyn RecordStore> = match configuration.store_backend {
        StoreBackend::Mongodb => {
            let database = get_database_connection(configuration.database).await?;
            Arc::new(MongoRecordStore::new(database))
        }
        StoreBackend::Memory => Arc::new(MemoryRecordStore::new()),
    };
    Ok(AppState::new(
        store,
        configuration.store,
        configuration.access.gate(),
    ))
}

pub fn app(state: AppState) -> Router {
    // Set on every response, including rejections produced before a handler runs.
    let [(content_type, json), (allow_origin, origin), (allow_methods, methods)] =
        api::cors_headers();

    Router::new()
        .route("/health-check", get(health_check))
        .route(
            "/resume",
            get(read_resume).post(create_resume).options(preflight),
        )
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetSensitiveRequestHeadersLayer::new([
                    header::AUTHORIZATION,
                    HeaderName::from_static(access::CLAIMS_HEADER),
                ]))
                .layer(SetResponseHeaderLayer::overriding(
                    content_type,
                    HeaderValue::from_static(json),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    allow_origin,
                    HeaderValue::from_static(origin),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    allow_methods,
                    HeaderValue::from_static(methods),
                ))
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
