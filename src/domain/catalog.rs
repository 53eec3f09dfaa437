// ==========================================
// Generador de Manifiestos - Catálogo maestro de medidas
// ==========================================
// CatalogEntry: una fila del archivo "Master Medidas"
// Catalog: índice por modelo normalizado (trim + minúsculas)
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// CatalogEntry - modelo con sus medidas
// ==========================================
// Atención: las columnas ANCHO (cm) y ALTO (cm) del catálogo están
// cruzadas respecto del alto/ancho del pedido; el cruce se aplica en
// el motor (ver engine::dimension_aggregator::package_dims_from_catalog)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub model: String,   // SKU canónico (MODELO), único, sin espacios laterales
    pub length_cm: f64,  // LARGO (cm)
    pub width_cm: f64,   // ANCHO (cm)
    pub height_cm: f64,  // ALTO (cm)
}

// ==========================================
// Catalog - colección indexada de modelos
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_model: HashMap<String, usize>, // clave normalizada → índice en entries
}

/// Normalización compartida para la unión pedido↔catálogo
pub fn normalize_sku(sku: &str) -> String {
    sku.trim().to_lowercase()
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut by_model = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            // ante modelos duplicados gana la primera fila, como en el maestro
            by_model.entry(normalize_sku(&entry.model)).or_insert(idx);
        }
        Self { entries, by_model }
    }

    /// Busca un modelo por igualdad normalizada
    pub fn lookup(&self, sku: &str) -> Option<&CatalogEntry> {
        self.by_model
            .get(&normalize_sku(sku))
            .map(|&idx| &self.entries[idx])
    }

    /// Lista de modelos canónicos, en el orden del archivo maestro
    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.model.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
