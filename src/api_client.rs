use crate::config::Config;
use crate::errors::AppError;
use crate::models::{Ack, NovaProposta, Parceiro, Proposta};
use reqwest;
use serde_json::json;
use tracing;

/// HTTP client for the proposal store API.
///
/// Every view goes through this client; it targets a single base URL for all
/// four calls. No request timeout is configured; an abandoned request has no
/// client-side effect beyond whatever the server already applied.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a new `ApiClient` targeting `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Creates a client targeting the configured base URL (`API_URL`).
    /// Views are wired to the store through this constructor.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Fetches the full proposal sequence.
    pub async fn listar_propostas(&self) -> Result<Vec<Proposta>, AppError> {
        let url = format!("{}/propostas", self.base_url);
        tracing::debug!("Fetching propostas: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Api(format!("GET /propostas failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Api(format!(
                "GET /propostas returned {}: {}",
                status, error_text
            )));
        }

        let propostas = response.json().await.map_err(|e| {
            AppError::Api(format!("Failed to parse propostas response: {}", e))
        })?;

        Ok(propostas)
    }

    /// Submits a proposal and returns the acknowledgment.
    pub async fn criar_proposta(&self, nova: &NovaProposta) -> Result<Ack, AppError> {
        let url = format!("{}/propostas", self.base_url);
        tracing::info!("Submitting proposta for {:?}", nova.nome);

        let response = self
            .client
            .post(&url)
            .json(nova)
            .send()
            .await
            .map_err(|e| AppError::Api(format!("POST /propostas failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Api(format!(
                "POST /propostas returned {}: {}",
                status, error_text
            )));
        }

        let ack = response.json().await.map_err(|e| {
            AppError::Api(format!("Failed to parse proposta acknowledgment: {}", e))
        })?;

        Ok(ack)
    }

    /// Fetches the full partner sequence.
    pub async fn listar_parceiros(&self) -> Result<Vec<Parceiro>, AppError> {
        let url = format!("{}/parceiros", self.base_url);
        tracing::debug!("Fetching parceiros: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Api(format!("GET /parceiros failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Api(format!(
                "GET /parceiros returned {}: {}",
                status, error_text
            )));
        }

        let parceiros = response.json().await.map_err(|e| {
            AppError::Api(format!("Failed to parse parceiros response: {}", e))
        })?;

        Ok(parceiros)
    }

    /// Registers a partner and returns the acknowledgment.
    pub async fn cadastrar_parceiro(&self, nome: &str) -> Result<Ack, AppError> {
        let url = format!("{}/parceiros", self.base_url);
        tracing::info!("Registering parceiro {:?}", nome);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "nome": nome }))
            .send()
            .await
            .map_err(|e| AppError::Api(format!("POST /parceiros failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Api(format!(
                "POST /parceiros returned {}: {}",
                status, error_text
            )));
        }

        let ack = response.json().await.map_err(|e| {
            AppError::Api(format!("Failed to parse parceiro acknowledgment: {}", e))
        })?;

        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_targets_the_configured_base_url() {
        let config = Config {
            port: 3015,
            api_base_url: "http://dashboard.example:4000".to_string(),
        };
        let client = ApiClient::from_config(&config);
        assert_eq!(client.base_url, "http://dashboard.example:4000");
    }
}
