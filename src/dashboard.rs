use crate::api_client::ApiClient;
use crate::errors::AppError;
use crate::moeda::{formatar_brl, valor_numerico};
use crate::models::Proposta;
use serde::Serialize;

/// One bar of the per-partner chart: partner name and summed value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalParceiro {
    pub nome: String,
    pub valor: f64,
}

/// Snapshot-derived dashboard data: grand total plus per-partner totals.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    /// Sum of every proposal value, non-numeric values counted as zero.
    pub valor_total: f64,
    /// Per-partner sums, ordered by first occurrence of each partner.
    pub por_parceiro: Vec<TotalParceiro>,
}

impl DashboardData {
    /// Computes the dashboard aggregates from a fetched snapshot.
    pub fn from_propostas(propostas: &[Proposta]) -> Self {
        let valor_total = propostas.iter().map(|p| valor_numerico(&p.valor)).sum();

        let mut por_parceiro: Vec<TotalParceiro> = Vec::new();
        for proposta in propostas {
            let valor = valor_numerico(&proposta.valor);
            match por_parceiro
                .iter_mut()
                .find(|t| t.nome == proposta.parceiro)
            {
                Some(total) => total.valor += valor,
                None => por_parceiro.push(TotalParceiro {
                    nome: proposta.parceiro.clone(),
                    valor,
                }),
            }
        }

        Self {
            valor_total,
            por_parceiro,
        }
    }

    /// Currency text shown on the total card ("Valor Total Produzido").
    pub fn total_exibicao(&self) -> String {
        formatar_brl(self.valor_total)
    }
}

/// Dashboard view: fetches the proposal snapshot once and aggregates it.
pub struct Dashboard {
    client: ApiClient,
}

impl Dashboard {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetches all proposals and computes the dashboard aggregates.
    pub async fn carregar(&self) -> Result<DashboardData, AppError> {
        let propostas = self.client.listar_propostas().await?;
        tracing::debug!("Dashboard loaded {} propostas", propostas.len());
        Ok(DashboardData::from_propostas(&propostas))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Proposta;
    use chrono::Utc;
    use serde_json::{json, Value};

    fn proposta(parceiro: &str, valor: Value) -> Proposta {
        Proposta {
            nome: String::new(),
            cpf: String::new(),
            ade: String::new(),
            banco: String::new(),
            valor,
            digitador: String::new(),
            parceiro: parceiro.to_string(),
            data: Utc::now(),
        }
    }

    #[test]
    fn total_treats_non_numeric_as_zero() {
        let propostas = vec![
            proposta("A", json!(100.50)),
            proposta("A", json!("abc")),
            proposta("B", json!(50)),
        ];
        let data = DashboardData::from_propostas(&propostas);
        assert_eq!(data.valor_total, 150.50);
        assert_eq!(data.total_exibicao(), "R$ 150.50");
    }

    #[test]
    fn groups_by_parceiro_in_first_occurrence_order() {
        let propostas = vec![
            proposta("A", json!(100)),
            proposta("B", json!(50)),
            proposta("A", json!(25)),
        ];
        let data = DashboardData::from_propostas(&propostas);
        assert_eq!(
            data.por_parceiro,
            vec![
                TotalParceiro {
                    nome: "A".to_string(),
                    valor: 125.0
                },
                TotalParceiro {
                    nome: "B".to_string(),
                    valor: 50.0
                },
            ]
        );
    }

    #[test]
    fn empty_snapshot_yields_zero_total_and_no_groups() {
        let data = DashboardData::from_propostas(&[]);
        assert_eq!(data.valor_total, 0.0);
        assert!(data.por_parceiro.is_empty());
    }
}
