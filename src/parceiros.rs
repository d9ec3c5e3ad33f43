use crate::api_client::ApiClient;
use crate::errors::AppError;
use crate::models::Parceiro;

/// Partner registration view: a text input plus the registered-partner list.
///
/// After a successful registration the authoritative list is re-fetched from
/// the store instead of appending locally, so the view never drifts from
/// server truth under concurrent writers. No duplicate check, no removal.
pub struct CadastroParceiros {
    client: ApiClient,
    pub lista: Vec<Parceiro>,
    pub novo: String,
}

impl CadastroParceiros {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            lista: Vec::new(),
            novo: String::new(),
        }
    }

    /// Fetches the full partner sequence.
    pub async fn carregar(&mut self) -> Result<(), AppError> {
        self.lista = self.client.listar_parceiros().await?;
        Ok(())
    }

    /// Registers the typed name, re-fetches the list, and clears the input.
    pub async fn adicionar(&mut self) -> Result<(), AppError> {
        let nome = self.novo.clone();
        self.client.cadastrar_parceiro(&nome).await?;
        self.lista = self.client.listar_parceiros().await?;
        self.novo.clear();
        tracing::info!("Parceiro cadastrado: {:?}", nome);
        Ok(())
    }
}
