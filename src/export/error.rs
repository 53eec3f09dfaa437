// ==========================================
// Generador de Manifiestos - Errores de exportación
// ==========================================

use thiserror::Error;

/// Errores de la capa de exportación
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("falló la escritura en disco: {0}")]
    Io(#[from] std::io::Error),

    #[error("falló la escritura de CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias de Result para la capa de exportación
pub type ExportResult<T> = Result<T, ExportError>;
