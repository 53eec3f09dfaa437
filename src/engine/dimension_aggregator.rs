// ==========================================
// Generador de Manifiestos - Agregación de dimensiones
// ==========================================
// Responsabilidad: líneas con SKU resuelto + catálogo → agregados Order
// Agrupación por Id del pedido en orden de primera aparición
// ==========================================

use crate::domain::catalog::{Catalog, CatalogEntry};
use crate::domain::order::{LineDims, Order, OrderLine};
use std::collections::{BTreeSet, HashMap};

// ==========================================
// AggregationReport - condiciones recuperables
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct AggregationReport {
    /// SKUs resueltos (o líneas sin resolver) que no aparecen en el catálogo
    pub unmatched_skus: Vec<String>,
}

/// Dimensiones de una línea a partir de su entrada de catálogo
///
/// El mapeo viene CRUZADO a propósito: la columna ANCHO (cm) del
/// catálogo alimenta el alto del paquete (multiplicado por la
/// cantidad) y la columna ALTO (cm) alimenta el ancho. Es la regla
/// acordada con logística; si algún día se confirma que es un defecto
/// heredado, se corrige solamente acá.
pub fn package_dims_from_catalog(entry: &CatalogEntry, quantity: u32) -> LineDims {
    LineDims {
        length_cm: entry.length_cm,
        height_cm: entry.width_cm * quantity as f64,
        width_cm: entry.height_cm,
    }
}

// ==========================================
// DimensionAggregator
// ==========================================
pub struct DimensionAggregator<'a> {
    catalog: &'a Catalog,
}

impl<'a> DimensionAggregator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Completa las dimensiones por línea y arma los agregados por pedido
    ///
    /// - total_length = max de largos de las líneas con match
    /// - total_height = suma de altos (ya multiplicados por cantidad)
    /// - total_width  = max de anchos
    ///
    /// Un pedido sin ninguna línea con match queda con los tres
    /// totales vacíos y se excluye más adelante; las líneas sin match
    /// se reportan pero no cortan la corrida.
    pub fn aggregate(&self, lines: &mut [OrderLine]) -> (Vec<Order>, AggregationReport) {
        let mut orders: Vec<Order> = Vec::new();
        let mut index_by_order: HashMap<String, usize> = HashMap::new();
        let mut unmatched: BTreeSet<String> = BTreeSet::new();

        for line in lines.iter_mut() {
            // entrada del catálogo vía SKU resuelto (unión normalizada)
            let entry = line
                .resolved_sku
                .as_deref()
                .and_then(|sku| self.catalog.lookup(sku));

            match entry {
                Some(entry) => {
                    line.dims = Some(package_dims_from_catalog(entry, line.quantity));
                }
                None => {
                    let reported = line
                        .resolved_sku
                        .clone()
                        .unwrap_or_else(|| line.offer_sku.clone());
                    unmatched.insert(reported);
                }
            }

            let order_idx = match index_by_order.get(&line.order_id) {
                Some(&idx) => idx,
                None => {
                    let idx = orders.len();
                    index_by_order.insert(line.order_id.clone(), idx);
                    orders.push(Order {
                        order_id: line.order_id.clone(),
                        first_seq: line.seq,
                        first_created_at: line.created_at,
                        line_count: 0,
                        total_length: None,
                        total_height: None,
                        total_width: None,
                        real_weight: None,
                        volumetric_weight: None,
                        package_weight: None,
                    });
                    idx
                }
            };

            let order = &mut orders[order_idx];
            order.line_count += 1;

            if let Some(dims) = line.dims {
                order.total_length = Some(match order.total_length {
                    Some(current) => current.max(dims.length_cm),
                    None => dims.length_cm,
                });
                order.total_height = Some(order.total_height.unwrap_or(0.0) + dims.height_cm);
                order.total_width = Some(match order.total_width {
                    Some(current) => current.max(dims.width_cm),
                    None => dims.width_cm,
                });
            }
        }

        let report = AggregationReport {
            unmatched_skus: unmatched.into_iter().collect(),
        };

        if !report.unmatched_skus.is_empty() {
            tracing::warn!(
                count = report.unmatched_skus.len(),
                skus = ?report.unmatched_skus,
                "líneas sin entrada en el catálogo maestro"
            );
        }

        (orders, report)
    }
}
