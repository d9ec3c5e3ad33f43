use crate::api_client::ApiClient;
use crate::errors::AppError;
use crate::moeda::parse_valor_brl;
use crate::models::{NovaProposta, Parceiro};
use serde_json::{json, Value};

/// Draft proposal as typed into the entry form. All fields are free text;
/// `valor` is parsed as Brazilian currency only at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormularioProposta {
    pub nome: String,
    pub cpf: String,
    pub ade: String,
    pub banco: String,
    pub valor: String,
    pub digitador: String,
    pub parceiro: String,
}

impl FormularioProposta {
    /// Converts the draft into the submission payload, parsing the typed
    /// value as currency. An unparseable value is submitted as null.
    pub fn para_envio(&self) -> NovaProposta {
        let valor = match parse_valor_brl(&self.valor) {
            Some(v) => json!(v),
            None => Value::Null,
        };
        NovaProposta {
            nome: self.nome.clone(),
            cpf: self.cpf.clone(),
            ade: self.ade.clone(),
            banco: self.banco.clone(),
            valor,
            digitador: self.digitador.clone(),
            parceiro: self.parceiro.clone(),
        }
    }
}

/// Proposal entry view: holds the draft, offers partner-name suggestions,
/// and submits to the store.
pub struct EntradaProposta {
    client: ApiClient,
    pub formulario: FormularioProposta,
    /// Partner names offered as autocomplete suggestions. Free text remains
    /// valid; the suggestion list is not enforced.
    pub sugestoes: Vec<String>,
}

impl EntradaProposta {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            formulario: FormularioProposta::default(),
            sugestoes: Vec::new(),
        }
    }

    /// Fetches the partner list to populate the autocomplete suggestions.
    pub async fn carregar_sugestoes(&mut self) -> Result<(), AppError> {
        let parceiros: Vec<Parceiro> = self.client.listar_parceiros().await?;
        self.sugestoes = parceiros.into_iter().map(|p| p.nome).collect();
        Ok(())
    }

    /// Submits the draft. On acknowledgment the draft is cleared; the caller
    /// signals success to the user.
    pub async fn salvar(&mut self) -> Result<(), AppError> {
        let envio = self.formulario.para_envio();
        self.client.criar_proposta(&envio).await?;
        tracing::info!("Proposta salva com sucesso: {:?}", envio.nome);
        self.formulario = FormularioProposta::default();
        Ok(())
    }
}
