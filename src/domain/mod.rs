// ==========================================
// Generador de Manifiestos - Capa de dominio
// ==========================================
// Responsabilidad: entidades y tipos del negocio
// Línea roja: sin lógica de acceso a archivos, sin lógica de motor
// ==========================================

pub mod catalog;
pub mod manifest;
pub mod order;

// Reexportación de tipos centrales
pub use catalog::{Catalog, CatalogEntry};
pub use manifest::{ManifestBatch, ManifestChunk, ManifestRecord, PipelineSummary};
pub use order::{LineDims, Order, OrderLine};
