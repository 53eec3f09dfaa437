// ==========================================
// Generador de Manifiestos - Modelo de pedidos
// ==========================================
// OrderLine: una fila del reporte de pedidos, enriquecida etapa por etapa
// Order: agregado por Id del pedido (una o más líneas)
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Formato de fecha del reporte de pedidos: "18/01/2026 - 09:30 AM"
pub const SOURCE_TIMESTAMP_FORMAT: &str = "%d/%m/%Y - %I:%M %p";

// ==========================================
// LineDims - dimensiones físicas de una línea
// ==========================================
// Nota: el alto ya viene multiplicado por la cantidad de la línea
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineDims {
    pub length_cm: f64,
    pub height_cm: f64,
    pub width_cm: f64,
}

// ==========================================
// OrderLine - línea del reporte de pedidos
// ==========================================
// Uso: la importación la crea, el motor la enriquece in situ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    // ===== Identificación =====
    pub seq: usize,                // Número (secuencia original, base 1)
    pub order_id: String,          // Id del pedido (no único entre líneas)

    // ===== Datos de origen =====
    pub created_at_raw: String,    // Fecha de creación, texto original
    pub created_at: NaiveDateTime, // Fecha de creación, parseada
    pub offer_sku: String,         // SKU de la oferta (texto libre del vendedor)
    pub quantity: u32,             // Cantidad (entero positivo)

    // ===== Campos derivados =====
    pub resolved_sku: Option<String>, // SKU canónico del catálogo, o None
    pub dims: Option<LineDims>,       // dimensiones por línea (alto × cantidad)
}

impl OrderLine {
    /// Fecha reformateada para nombres de archivo de manifiesto
    ///
    /// Formato heredado del sistema original: "%d-%m-%Y-%H%M%p"
    /// (hora de 24h seguida del marcador AM/PM)
    pub fn created_at_label(&self) -> String {
        self.created_at.format("%d-%m-%Y-%H%M%p").to_string()
    }
}

// ==========================================
// Order - agregado por Id del pedido
// ==========================================
// Representación interna explícita: los totales viven acá y recién
// se aplanan a la vista dispersa por línea en la frontera de salida
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,

    // ===== Clave de orden estable =====
    pub first_seq: usize,               // Número de la primera línea del pedido
    pub first_created_at: NaiveDateTime, // Fecha de creación de esa línea

    // ===== Agregación =====
    pub line_count: usize,              // cantidad de líneas (no suma de cantidades)
    pub total_length: Option<f64>,      // max de largos por línea
    pub total_height: Option<f64>,      // suma de altos por línea (ya × cantidad)
    pub total_width: Option<f64>,       // max de anchos por línea

    // ===== Pesos =====
    pub real_weight: Option<f64>,       // peso de facturación por cantidad de líneas
    pub volumetric_weight: Option<f64>, // peso volumétrico, 1 decimal
    pub package_weight: Option<i64>,    // peso facturable final, entero
}

impl Order {
    /// Un pedido es elegible para manifiesto solo con datos completos
    pub fn is_manifest_ready(&self) -> bool {
        self.total_length.is_some()
            && self.total_height.is_some()
            && self.total_width.is_some()
            && self.real_weight.is_some()
            && self.volumetric_weight.is_some()
            && self.package_weight.is_some()
    }
}
