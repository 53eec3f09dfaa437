// ==========================================
// Generador de Manifiestos - Armado de lotes de guías
// ==========================================
// Responsabilidad: pedidos completos → chunks de hasta N guías
// + lista de pedidos que requieren caja especial
// ==========================================

use crate::config::PipelineConfig;
use crate::domain::manifest::{ManifestBatch, ManifestChunk, ManifestRecord};
use crate::domain::order::Order;

// ==========================================
// ManifestBuilder
// ==========================================
pub struct ManifestBuilder {
    chunk_size: usize,
    oversize_height_cm: f64,
}

impl ManifestBuilder {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            chunk_size: config.chunk_size,
            oversize_height_cm: config.oversize_height_cm,
        }
    }

    /// Arma los lotes de guías a partir de los pedidos agregados
    ///
    /// 1. Filtra pedidos sin datos completos (se cuentan y reportan,
    ///    no se descartan en silencio)
    /// 2. Ordena por Número original (clave estable)
    /// 3. Particiona en chunks consecutivos de hasta chunk_size
    /// 4. Junta los pedidos con Alto Total sobre el umbral de caja
    pub fn build(&self, orders: &[Order]) -> ManifestBatch {
        let mut eligible: Vec<&Order> = orders.iter().filter(|o| o.is_manifest_ready()).collect();
        let dropped_orders = orders.len() - eligible.len();
        eligible.sort_by_key(|o| o.first_seq);

        if dropped_orders > 0 {
            tracing::warn!(
                dropped = dropped_orders,
                "pedidos excluidos del manifiesto por datos incompletos"
            );
        }

        let mut chunks = Vec::new();
        let mut oversize_order_ids = Vec::new();

        for chunk_orders in eligible.chunks(self.chunk_size.max(1)) {
            // chunks() nunca entrega cortes vacíos
            let (first, last) = match (chunk_orders.first(), chunk_orders.last()) {
                (Some(first), Some(last)) => (first, last),
                _ => continue,
            };

            // pedidos que exigen caja especial, detectados por chunk
            oversize_order_ids.extend(
                chunk_orders
                    .iter()
                    .filter(|o| o.total_height.unwrap_or(0.0) > self.oversize_height_cm)
                    .map(|o| o.order_id.clone()),
            );

            let records = chunk_orders.iter().map(|o| Self::record_for(o)).collect();

            chunks.push(ManifestChunk {
                file_name: Self::chunk_file_name(first, last),
                records,
            });
        }

        ManifestBatch {
            chunks,
            oversize_order_ids,
            dropped_orders,
        }
    }

    /// Fila de guía para un pedido elegible
    ///
    /// La conversión a entero trunca, no redondea (contrato heredado)
    fn record_for(order: &Order) -> ManifestRecord {
        ManifestRecord {
            pedido: order.order_id.clone(),
            numero_guias: 1,
            valor_declarado: String::new(),
            largo_paquete: order.total_length.unwrap_or(0.0) as i64,
            alto_paquete: order.total_height.unwrap_or(0.0) as i64,
            ancho_paquete: order.total_width.unwrap_or(0.0) as i64,
            peso_paquete: order.package_weight.unwrap_or(0),
        }
    }

    /// Nombre del chunk: números y fechas de la primera y última fila
    fn chunk_file_name(first: &Order, last: &Order) -> String {
        format!(
            "{}_{} - {}_{}.csv",
            first.first_seq,
            first.first_created_at.format("%d-%m-%Y-%H%M%p"),
            last.first_seq,
            last.first_created_at.format("%d-%m-%Y-%H%M%p"),
        )
    }
}
