use crate::errors::AppError;
use crate::models::{Ack, NovaProposta, Parceiro, Proposta};
use crate::policy::AdmissionPolicy;
use crate::store::PropostaStore;
use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// In-memory proposal/partner store. Owns all data for the life of the
    /// process.
    pub store: PropostaStore,
    /// Admission policy consulted before every append.
    pub policy: Arc<dyn AdmissionPolicy>,
}

impl AppState {
    pub fn new(store: PropostaStore, policy: Arc<dyn AdmissionPolicy>) -> Self {
        Self { store, policy }
    }
}

/// Builds the store service router.
///
/// No versioning, no auth headers, CORS fully open.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/propostas", get(listar_propostas).post(criar_proposta))
        .route("/parceiros", get(listar_parceiros).post(criar_parceiro))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "rust-propostas-api",
            "version": "0.1.0"
        })),
    )
}

/// GET /propostas
///
/// Returns the full ordered sequence of all proposals ever submitted, in
/// insertion order. No filtering, no pagination.
pub async fn listar_propostas(State(state): State<Arc<AppState>>) -> Json<Vec<Proposta>> {
    let propostas = state.store.listar_propostas().await;
    tracing::info!("GET /propostas - {} registros", propostas.len());
    Json(propostas)
}

/// POST /propostas
///
/// Accepts an unvalidated proposal record, stamps it with the current server
/// time, and appends it. Any input is accepted as-is, including missing
/// fields; the only failure path is the admission-policy seam, which the
/// default policy never takes.
pub async fn criar_proposta(
    State(state): State<Arc<AppState>>,
    Json(nova): Json<NovaProposta>,
) -> Result<Json<Ack>, AppError> {
    state.policy.admitir_proposta(&nova)?;

    let proposta = state.store.inserir_proposta(nova).await;
    tracing::info!(
        "POST /propostas - nome: {:?}, parceiro: {:?}, data: {}",
        proposta.nome,
        proposta.parceiro,
        proposta.data
    );

    Ok(Json(Ack::ok()))
}

/// GET /parceiros
///
/// Returns the full ordered sequence of registered partners, insertion order.
pub async fn listar_parceiros(State(state): State<Arc<AppState>>) -> Json<Vec<Parceiro>> {
    let parceiros = state.store.listar_parceiros().await;
    tracing::info!("GET /parceiros - {} registros", parceiros.len());
    Json(parceiros)
}

/// POST /parceiros
///
/// Appends a partner record. Any name is accepted, including empty or
/// duplicate ones.
pub async fn criar_parceiro(
    State(state): State<Arc<AppState>>,
    Json(parceiro): Json<Parceiro>,
) -> Result<Json<Ack>, AppError> {
    state.policy.admitir_parceiro(&parceiro)?;

    let parceiro = state.store.inserir_parceiro(parceiro.nome).await;
    tracing::info!("POST /parceiros - nome: {:?}", parceiro.nome);

    Ok(Json(Ack::ok()))
}
