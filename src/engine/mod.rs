// ==========================================
// Generador de Manifiestos - Capa de motor
// ==========================================
// Responsabilidad: reglas de negocio puras sobre datos en memoria
// Línea roja: sin UI, sin lectura/escritura de archivos
// ==========================================

// Declaración de módulos
pub mod dimension_aggregator;
pub mod manifest_builder;
pub mod orchestrator;
pub mod sku_resolver;
pub mod weight_calculator;

// Reexportación de tipos centrales
pub use dimension_aggregator::{package_dims_from_catalog, AggregationReport, DimensionAggregator};
pub use manifest_builder::ManifestBuilder;
pub use orchestrator::{PipelineOutcome, ShippingPipeline};
pub use sku_resolver::SkuResolver;
pub use weight_calculator::WeightCalculator;
