// ==========================================
// Generador de Manifiestos - Resolución de SKU
// ==========================================
// Responsabilidad: SKU de la oferta (texto libre) → modelo canónico
// Regla: gana el modelo más largo que sea prefijo del SKU de la
// oferta, comparando sin distinguir mayúsculas
// ==========================================

use crate::domain::catalog::Catalog;
use crate::domain::order::OrderLine;
use std::collections::BTreeSet;

// ==========================================
// SkuResolver - motor puro, sin estado mutable
// ==========================================
pub struct SkuResolver {
    /// Pares (modelo original, modelo en minúsculas), de largo descendente.
    /// El orden estable entre empates conserva el orden del catálogo.
    sorted_models: Vec<(String, String)>,
}

impl SkuResolver {
    pub fn new(catalog: &Catalog) -> Self {
        let mut sorted_models: Vec<(String, String)> = catalog
            .models()
            .map(|m| (m.to_string(), m.to_lowercase()))
            .collect();

        // largo descendente: un modelo que es prefijo de otro
        // (MODEL-A vs MODEL-A-X) nunca le gana al más específico
        sorted_models.sort_by_key(|(model, _)| std::cmp::Reverse(model.len()));

        Self { sorted_models }
    }

    /// Resuelve un SKU de oferta contra el catálogo
    ///
    /// Devuelve el primer (= más largo) modelo que sea prefijo del
    /// SKU de la oferta, o None si ninguno matchea.
    pub fn resolve(&self, offer_sku: &str) -> Option<&str> {
        let offer = offer_sku.to_lowercase();
        self.sorted_models
            .iter()
            .find(|(_, lower)| offer.starts_with(lower.as_str()))
            .map(|(model, _)| model.as_str())
    }

    /// Anota resolved_sku en cada línea del reporte
    ///
    /// Devuelve los SKU de oferta sin match, ya deduplicados;
    /// una línea sin match no es fatal, solo se reporta.
    pub fn annotate(&self, lines: &mut [OrderLine]) -> Vec<String> {
        let mut unresolved = BTreeSet::new();

        for line in lines.iter_mut() {
            match self.resolve(&line.offer_sku) {
                Some(model) => line.resolved_sku = Some(model.to_string()),
                None => {
                    unresolved.insert(line.offer_sku.clone());
                }
            }
        }

        let unresolved: Vec<String> = unresolved.into_iter().collect();
        if !unresolved.is_empty() {
            tracing::warn!(
                count = unresolved.len(),
                skus = ?unresolved,
                "SKUs de oferta sin modelo en el catálogo"
            );
        }

        unresolved
    }
}
