// ==========================================
// Generador de Manifiestos - Capa de importación
// ==========================================
// Responsabilidad: datos externos → entidades de dominio
// Soporta: Excel, CSV
// ==========================================

// Declaración de módulos
pub mod catalog_importer;
pub mod error;
pub mod file_parser;
pub mod order_importer;

// Reexportación de tipos centrales
pub use catalog_importer::CatalogImporter;
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, FileParser, UniversalFileParser};
pub use order_importer::OrderImporter;
