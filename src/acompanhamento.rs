use crate::api_client::ApiClient;
use crate::errors::AppError;
use crate::models::Proposta;
use rust_xlsxwriter::Workbook;
use serde_json::Value;

/// Column headers of the tracking table, also used as the export header row.
pub const COLUNAS: [&str; 6] = ["Data", "Nome", "CPF", "Banco", "Valor", "Parceiro"];

/// One rendered table row, all cells as display text.
#[derive(Debug, Clone, PartialEq)]
pub struct LinhaProposta {
    pub data: String,
    pub nome: String,
    pub cpf: String,
    pub banco: String,
    pub valor: String,
    pub parceiro: String,
}

impl LinhaProposta {
    fn from_proposta(proposta: &Proposta) -> Self {
        Self {
            data: proposta.data.format("%d/%m/%Y %H:%M:%S").to_string(),
            nome: proposta.nome.clone(),
            cpf: proposta.cpf.clone(),
            banco: proposta.banco.clone(),
            valor: valor_exibicao(&proposta.valor),
            parceiro: proposta.parceiro.clone(),
        }
    }
}

/// Renders a stored `valor` for display: numbers as typed JSON, strings
/// verbatim, null as empty.
fn valor_exibicao(valor: &Value) -> String {
    match valor {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Tracking view: renders the proposal sequence as a table and exports it
/// to a spreadsheet. No filtering or sorting controls.
pub struct Acompanhamento {
    client: ApiClient,
    pub propostas: Vec<Proposta>,
}

impl Acompanhamento {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            propostas: Vec::new(),
        }
    }

    /// Fetches the full proposal sequence for display.
    pub async fn carregar(&mut self) -> Result<(), AppError> {
        self.propostas = self.client.listar_propostas().await?;
        tracing::debug!("Acompanhamento loaded {} propostas", self.propostas.len());
        Ok(())
    }

    /// Table rows for the currently loaded sequence, in insertion order.
    pub fn linhas(&self) -> Vec<LinhaProposta> {
        self.propostas.iter().map(LinhaProposta::from_proposta).collect()
    }

    /// Serializes the currently displayed sequence into an in-memory `.xlsx`
    /// workbook offered for download as "propostas.xlsx".
    ///
    /// Sheet "Propostas": one header row with the table columns, then one row
    /// per displayed proposal.
    pub fn exportar_xlsx(&self) -> Result<Vec<u8>, AppError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Propostas")?;

        for (col, titulo) in COLUNAS.iter().enumerate() {
            worksheet.write_string(0, col as u16, *titulo)?;
        }

        for (i, proposta) in self.propostas.iter().enumerate() {
            let row = (i + 1) as u32;
            let linha = LinhaProposta::from_proposta(proposta);
            worksheet.write_string(row, 0, &linha.data)?;
            worksheet.write_string(row, 1, &linha.nome)?;
            worksheet.write_string(row, 2, &linha.cpf)?;
            worksheet.write_string(row, 3, &linha.banco)?;
            match &proposta.valor {
                Value::Number(n) => {
                    worksheet.write_number(row, 4, n.as_f64().unwrap_or(0.0))?;
                }
                _ => {
                    worksheet.write_string(row, 4, &linha.valor)?;
                }
            }
            worksheet.write_string(row, 5, &linha.parceiro)?;
        }

        let buffer = workbook.save_to_buffer()?;
        tracing::info!(
            "Exported {} propostas to xlsx ({} bytes)",
            self.propostas.len(),
            buffer.len()
        );
        Ok(buffer)
    }
}
