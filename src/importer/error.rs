// ==========================================
// Generador de Manifiestos - Errores de importación
// ==========================================
// Herramienta: macro derive de thiserror
// ==========================================

use thiserror::Error;

/// Errores de la capa de importación
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== Errores de archivo =====
    #[error("archivo no encontrado: {0}")]
    FileNotFound(String),

    #[error("formato de archivo no soportado: {0} (solo .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("falló la lectura de Excel: {0}")]
    ExcelParseError(String),

    #[error("falló la lectura de CSV: {0}")]
    CsvParseError(String),

    #[error("el archivo no contiene filas de datos: {0}")]
    EmptyFile(String),

    // ===== Errores de mapeo =====
    #[error("columna requerida ausente: {column}")]
    MissingColumn { column: String },

    #[error("conversión de tipo fallida (fila {row}, campo {field}): {message}")]
    TypeConversionError {
        row: usize,
        field: String,
        message: String,
    },

    #[error(
        "fecha de creación inválida (fila {row}): se esperaba \"DD/MM/YYYY - HH:MM AM/PM\", se encontró \"{value}\""
    )]
    TimestampFormatError { row: usize, value: String },
}

/// Alias de Result para la capa de importación
pub type ImportResult<T> = Result<T, ImportError>;
