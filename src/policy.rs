use crate::errors::AppError;
use crate::models::{NovaProposta, Parceiro};

/// Admission check applied by the POST handlers before the store append.
///
/// The service itself performs no validation or authorization, so the shipped
/// policy accepts everything. The trait is the seam where validation, auth,
/// or quota checks would slot in without touching handlers or store.
pub trait AdmissionPolicy: Send + Sync {
    fn admitir_proposta(&self, nova: &NovaProposta) -> Result<(), AppError>;
    fn admitir_parceiro(&self, parceiro: &Parceiro) -> Result<(), AppError>;
}

/// Default policy: never rejects.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AdmissionPolicy for AllowAll {
    fn admitir_proposta(&self, _nova: &NovaProposta) -> Result<(), AppError> {
        Ok(())
    }

    fn admitir_parceiro(&self, _parceiro: &Parceiro) -> Result<(), AppError> {
        Ok(())
    }
}
