use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============ Store Models ============

/// Represents one submitted financing proposal.
///
/// The store accepts proposals exactly as submitted: every text field falls
/// back to an empty string when absent, and `valor` keeps whatever JSON value
/// the caller sent (number, string, or null). Only `data` is authoritative:
/// it is stamped by the store at append time and never taken from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposta {
    /// Client name.
    #[serde(default)]
    pub nome: String,
    /// CPF document number (free text, unvalidated).
    #[serde(default)]
    pub cpf: String,
    /// ADE code.
    #[serde(default)]
    pub ade: String,
    /// Bank name.
    #[serde(default)]
    pub banco: String,
    /// Monetary value as submitted. Non-numeric values are stored as-is and
    /// count as zero during aggregation.
    #[serde(default)]
    pub valor: Value,
    /// Data-entry agent.
    #[serde(default)]
    pub digitador: String,
    /// Partner name, matched against registered partners by string equality
    /// only. May reference a partner that was never registered.
    #[serde(default)]
    pub parceiro: String,
    /// Submission timestamp, assigned server-side.
    pub data: DateTime<Utc>,
}

/// Proposal fields as submitted by the client, before the store stamps the
/// submission timestamp. A caller-supplied `data` field is silently ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NovaProposta {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub ade: String,
    #[serde(default)]
    pub banco: String,
    #[serde(default)]
    pub valor: Value,
    #[serde(default)]
    pub digitador: String,
    #[serde(default)]
    pub parceiro: String,
}

/// Represents a referral partner. Name only, duplicates permitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parceiro {
    #[serde(default)]
    pub nome: String,
}

// ============ API Request/Response Models ============

/// Acknowledgment body returned by both append operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub sucesso: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { sucesso: true }
    }
}
