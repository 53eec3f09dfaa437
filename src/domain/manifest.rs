// ==========================================
// Generador de Manifiestos - Modelo de salida
// ==========================================
// ManifestRecord: fila de guía para el transportista (7 campos)
// ManifestChunk: lote de hasta N filas con nombre propio
// ManifestBatch: resultado completo de la etapa de manifiestos
// PipelineSummary: resumen de corrida para el operador
// ==========================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// ManifestRecord - fila del CSV de guías
// ==========================================
// Los nombres de campo son el contrato con el transportista;
// los enteros se truncan al convertir, no se redondean
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRecord {
    pub pedido: String,
    pub numero_guias: u32,
    pub valor_declarado: String,
    pub largo_paquete: i64,
    pub alto_paquete: i64,
    pub ancho_paquete: i64,
    pub peso_paquete: i64,
}

// ==========================================
// ManifestChunk - lote de guías
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestChunk {
    /// Nombre de archivo: "{num_inicial}_{fecha_inicial} - {num_final}_{fecha_final}.csv"
    pub file_name: String,
    pub records: Vec<ManifestRecord>,
}

// ==========================================
// ManifestBatch - salida de la etapa de manifiestos
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ManifestBatch {
    pub chunks: Vec<ManifestChunk>,
    /// Ids de pedidos con Alto Total por encima del umbral de caja
    pub oversize_order_ids: Vec<String>,
    /// Pedidos descartados por datos incompletos (reportados, no silenciados)
    pub dropped_orders: usize,
}

/// Encabezado del aviso de cajas especiales
pub const OVERSIZE_ALERT_HEADER: &str = "Órdenes que requieren caja (Alto Total > 50):";

impl ManifestBatch {
    /// Contenido del aviso de cajas, solo si hay pedidos afectados
    pub fn alert_text(&self) -> Option<String> {
        if self.oversize_order_ids.is_empty() {
            return None;
        }
        let mut text = format!("{}\n\n", OVERSIZE_ALERT_HEADER);
        text.push_str(&self.oversize_order_ids.join("\n"));
        Some(text)
    }

    pub fn total_records(&self) -> usize {
        self.chunks.iter().map(|c| c.records.len()).sum()
    }
}

// ==========================================
// PipelineSummary - resumen de corrida
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub run_id: Uuid,
    pub total_lines: usize,
    pub total_orders: usize,
    pub unmatched_skus: Vec<String>,
    pub eligible_orders: usize,
    pub dropped_orders: usize,
    pub chunk_count: usize,
    pub oversize_orders: usize,
}
