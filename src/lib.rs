// ==========================================
// Generador de Manifiestos de Envío - Librería central
// ==========================================
// Flujo: reporte de pedidos + catálogo maestro
//        → resolución de SKU → agregación de dimensiones
//        → cálculo de pesos → armado de manifiestos
// ==========================================

// ==========================================
// Declaración de módulos
// ==========================================

// Capa de dominio - entidades y tipos
pub mod domain;

// Capa de importación - lectura de archivos externos
pub mod importer;

// Capa de motor - reglas de negocio
pub mod engine;

// Capa de exportación - escritura de archivos de salida
pub mod export;

// Capa de configuración - parámetros del pipeline
pub mod config;

// Sistema de logs
pub mod logging;

// ==========================================
// Reexportación de tipos centrales
// ==========================================

// Entidades de dominio
pub use domain::{
    Catalog, CatalogEntry, LineDims, ManifestBatch, ManifestChunk, ManifestRecord, Order,
    OrderLine, PipelineSummary,
};

// Motor
pub use engine::{
    AggregationReport, DimensionAggregator, ManifestBuilder, PipelineOutcome, ShippingPipeline,
    SkuResolver, WeightCalculator,
};

// Importadores
pub use importer::{CatalogImporter, ImportError, OrderImporter, UniversalFileParser};

// Configuración
pub use config::PipelineConfig;

// ==========================================
// Constantes del sistema
// ==========================================

// Versión del sistema
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Nombre del sistema
pub const APP_NAME: &str = "Generador de Manifiestos de Envío";
