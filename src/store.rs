use crate::models::{NovaProposta, Parceiro, Proposta};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Authoritative, process-lifetime holder of proposals and partners.
///
/// Both sequences are append-only and live exactly as long as the process;
/// a restart starts from empty. The store is constructed once in `main` and
/// shared by reference through the application state, so ownership of the
/// data is explicit rather than ambient.
///
/// Each append takes the write lock for the duration of a single push, which
/// makes appends atomic per call. There is no ordering guarantee between
/// concurrent submissions beyond lock acquisition order.
#[derive(Clone, Default)]
pub struct PropostaStore {
    propostas: Arc<RwLock<Vec<Proposta>>>,
    parceiros: Arc<RwLock<Vec<Parceiro>>>,
}

impl PropostaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every proposal ever submitted, in insertion order.
    pub async fn listar_propostas(&self) -> Vec<Proposta> {
        self.propostas.read().await.clone()
    }

    /// Stamps the submission timestamp and appends the proposal.
    ///
    /// Accepts the record exactly as submitted; malformed input is stored
    /// malformed. Returns the stored record.
    pub async fn inserir_proposta(&self, nova: NovaProposta) -> Proposta {
        let proposta = Proposta {
            nome: nova.nome,
            cpf: nova.cpf,
            ade: nova.ade,
            banco: nova.banco,
            valor: nova.valor,
            digitador: nova.digitador,
            parceiro: nova.parceiro,
            data: Utc::now(),
        };
        self.propostas.write().await.push(proposta.clone());
        proposta
    }

    /// Returns every registered partner, in insertion order.
    pub async fn listar_parceiros(&self) -> Vec<Parceiro> {
        self.parceiros.read().await.clone()
    }

    /// Appends a partner record. Duplicate names are permitted.
    pub async fn inserir_parceiro(&self, nome: String) -> Parceiro {
        let parceiro = Parceiro { nome };
        self.parceiros.write().await.push(parceiro.clone());
        parceiro
    }
}
