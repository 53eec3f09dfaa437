// ==========================================
// Generador de Manifiestos - Orquestador del pipeline
// ==========================================
// Responsabilidad: encadenar las cuatro etapas sobre datos en memoria
// Sin estado compartido entre etapas más allá de la tabla que avanza;
// sin rutas de archivo dentro del motor
// ==========================================

use crate::config::PipelineConfig;
use crate::domain::catalog::Catalog;
use crate::domain::manifest::{ManifestBatch, PipelineSummary};
use crate::domain::order::{Order, OrderLine};
use crate::engine::dimension_aggregator::DimensionAggregator;
use crate::engine::manifest_builder::ManifestBuilder;
use crate::engine::sku_resolver::SkuResolver;
use crate::engine::weight_calculator::WeightCalculator;
use uuid::Uuid;

// ==========================================
// PipelineOutcome - resultado completo de una corrida
// ==========================================
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Líneas enriquecidas (SKU resuelto + dimensiones por línea)
    pub lines: Vec<OrderLine>,
    /// Agregados por pedido con totales y pesos
    pub orders: Vec<Order>,
    /// Lotes de guías + aviso de cajas
    pub batch: ManifestBatch,
    pub summary: PipelineSummary,
}

// ==========================================
// ShippingPipeline
// ==========================================
pub struct ShippingPipeline {
    config: PipelineConfig,
}

impl ShippingPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Corre el pipeline completo: resolución de SKU → agregación
    /// de dimensiones → cálculo de pesos → armado de manifiestos
    ///
    /// Todas las condiciones por línea/pedido son recuperables y
    /// quedan en el resumen; los errores fatales (archivo, formato
    /// de fecha) ya se cortaron en la importación.
    pub fn run(&self, mut lines: Vec<OrderLine>, catalog: &Catalog) -> PipelineOutcome {
        let run_id = Uuid::new_v4();
        tracing::info!(%run_id, lines = lines.len(), models = catalog.len(), "inicio de corrida");

        // === Etapa 1: resolución de SKU ===
        let resolver = SkuResolver::new(catalog);
        let mut unmatched_skus = resolver.annotate(&mut lines);
        tracing::info!("etapa 1/4: SKUs resueltos");

        // === Etapa 2: agregación de dimensiones ===
        let (mut orders, report) = DimensionAggregator::new(catalog).aggregate(&mut lines);
        for sku in report.unmatched_skus {
            if !unmatched_skus.contains(&sku) {
                unmatched_skus.push(sku);
            }
        }
        tracing::info!(orders = orders.len(), "etapa 2/4: dimensiones agregadas");

        // === Etapa 3: cálculo de pesos ===
        WeightCalculator::new(&self.config).compute(&mut orders);
        tracing::info!("etapa 3/4: pesos calculados");

        // === Etapa 4: armado de manifiestos ===
        let batch = ManifestBuilder::new(&self.config).build(&orders);
        tracing::info!(
            chunks = batch.chunks.len(),
            oversize = batch.oversize_order_ids.len(),
            "etapa 4/4: manifiestos armados"
        );

        let summary = PipelineSummary {
            run_id,
            total_lines: lines.len(),
            total_orders: orders.len(),
            unmatched_skus,
            eligible_orders: batch.total_records(),
            dropped_orders: batch.dropped_orders,
            chunk_count: batch.chunks.len(),
            oversize_orders: batch.oversize_order_ids.len(),
        };

        PipelineOutcome {
            lines,
            orders,
            batch,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CatalogEntry;
    use chrono::NaiveDate;

    fn line(seq: usize, order_id: &str, offer_sku: &str, quantity: u32) -> OrderLine {
        OrderLine {
            seq,
            order_id: order_id.to_string(),
            created_at_raw: "18/01/2026 - 09:30 AM".to_string(),
            created_at: NaiveDate::from_ymd_opt(2026, 1, 18)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            offer_sku: offer_sku.to_string(),
            quantity,
            resolved_sku: None,
            dims: None,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogEntry {
                model: "MODEL-A".to_string(),
                length_cm: 30.0,
                width_cm: 20.0,
                height_cm: 40.0,
            },
            CatalogEntry {
                model: "MODEL-A-X".to_string(),
                length_cm: 1.0,
                width_cm: 1.0,
                height_cm: 1.0,
            },
        ])
    }

    #[test]
    fn test_full_run_end_to_end() {
        let catalog = catalog();
        let lines = vec![
            line(1, "1001", "MODEL-A-NEGRO", 1),
            line(2, "1002", "model-a-x-2024", 1),
            line(3, "1002", "MODEL-A-AZUL", 2),
            line(4, "1003", "SIN-CATALOGO", 1),
        ];

        let outcome = ShippingPipeline::new(PipelineConfig::default()).run(lines, &catalog);

        // prefijo más largo gana
        assert_eq!(
            outcome.lines[1].resolved_sku.as_deref(),
            Some("MODEL-A-X")
        );

        assert_eq!(outcome.summary.total_orders, 3);
        assert_eq!(outcome.summary.unmatched_skus, vec!["SIN-CATALOGO".to_string()]);

        // 1003 no tiene match: se descarta con aviso
        assert_eq!(outcome.summary.dropped_orders, 1);
        assert_eq!(outcome.summary.eligible_orders, 2);
        assert_eq!(outcome.summary.chunk_count, 1);

        // pedido de una línea factura 1
        let records = &outcome.batch.chunks[0].records;
        assert_eq!(records[0].pedido, "1001");
        assert_eq!(records[0].peso_paquete, 1);

        // pedido 1002: 2 líneas, real 1.7 < 3 → 3
        assert_eq!(records[1].pedido, "1002");
        assert_eq!(records[1].peso_paquete, 3);
    }

    #[test]
    fn test_run_is_deterministic() {
        let catalog = catalog();
        let lines = vec![
            line(1, "1001", "MODEL-A-NEGRO", 1),
            line(2, "1002", "MODEL-A-ROJO", 2),
        ];

        let pipeline = ShippingPipeline::new(PipelineConfig::default());
        let first = pipeline.run(lines.clone(), &catalog);
        let second = pipeline.run(lines, &catalog);

        assert_eq!(first.batch.chunks.len(), second.batch.chunks.len());
        for (a, b) in first.batch.chunks.iter().zip(second.batch.chunks.iter()) {
            assert_eq!(a.file_name, b.file_name);
            assert_eq!(a.records, b.records);
        }
        assert_eq!(
            first.batch.oversize_order_ids,
            second.batch.oversize_order_ids
        );
    }
}
