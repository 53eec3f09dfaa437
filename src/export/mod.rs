// ==========================================
// Generador de Manifiestos - Capa de exportación
// ==========================================
// Responsabilidad: entidades de dominio → archivos de salida
// El aplanado a vista dispersa vive acá, no en el motor
// ==========================================

// Declaración de módulos
pub mod error;
pub mod manifest_writer;
pub mod table_writer;

// Reexportación de tipos centrales
pub use error::{ExportError, ExportResult};
pub use manifest_writer::{ManifestWriter, ALERT_FILE_NAME, MANIFEST_SUBDIR};
pub use table_writer::{TableWriter, WORKING_TABLE_HEADERS};
