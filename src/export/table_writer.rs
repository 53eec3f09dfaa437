// ==========================================
// Generador de Manifiestos - Tabla de trabajo enriquecida
// ==========================================
// Responsabilidad: aplanar los agregados Order a la vista dispersa
// por línea (totales y pesos solo en la primera línea del pedido)
// El aplanado ocurre únicamente acá, en la frontera de salida
// ==========================================

use crate::domain::order::{Order, OrderLine};
use crate::export::error::ExportResult;
use std::collections::HashMap;
use std::io::Write;

/// Encabezados de la tabla de trabajo, en el orden del flujo operativo
pub const WORKING_TABLE_HEADERS: [&str; 15] = [
    "Fecha de creación",
    "Id del pedido",
    "SKU de la oferta",
    "SKU",
    "Cantidad",
    "Número",
    "Largo del paquete (s)",
    "Alto del paquete (s)",
    "Ancho del paquete (s)",
    "Largo Total",
    "Alto Total",
    "Ancho Total",
    "Peso real",
    "Peso volumétrico",
    "Peso del paquete (s)",
];

// ==========================================
// TableWriter
// ==========================================
pub struct TableWriter;

impl TableWriter {
    /// Escribe la tabla de trabajo como CSV
    pub fn write<W: Write>(
        &self,
        writer: W,
        lines: &[OrderLine],
        orders: &[Order],
    ) -> ExportResult<()> {
        let by_order_id: HashMap<&str, &Order> =
            orders.iter().map(|o| (o.order_id.as_str(), o)).collect();

        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(WORKING_TABLE_HEADERS)?;

        for line in lines {
            let order = by_order_id.get(line.order_id.as_str()).copied();
            // los totales y pesos van solo en la primera línea del pedido
            let carries_totals = order.map(|o| o.first_seq == line.seq).unwrap_or(false);

            let record = [
                line.created_at_raw.clone(),
                line.order_id.clone(),
                line.offer_sku.clone(),
                line.resolved_sku.clone().unwrap_or_default(),
                line.quantity.to_string(),
                line.seq.to_string(),
                line.dims.map(|d| fmt_num(d.length_cm)).unwrap_or_default(),
                line.dims.map(|d| fmt_num(d.height_cm)).unwrap_or_default(),
                line.dims.map(|d| fmt_num(d.width_cm)).unwrap_or_default(),
                sparse(order, carries_totals, |o| o.total_length),
                sparse(order, carries_totals, |o| o.total_height),
                sparse(order, carries_totals, |o| o.total_width),
                sparse(order, carries_totals, |o| o.real_weight),
                sparse(order, carries_totals, |o| o.volumetric_weight),
                sparse(order, carries_totals, |o| o.package_weight.map(|w| w as f64)),
            ];

            csv_writer.write_record(record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

fn fmt_num(value: f64) -> String {
    format!("{}", value)
}

fn sparse<F>(order: Option<&Order>, carries_totals: bool, field: F) -> String
where
    F: Fn(&Order) -> Option<f64>,
{
    if !carries_totals {
        return String::new();
    }
    order
        .and_then(field)
        .map(fmt_num)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::LineDims;
    use chrono::NaiveDate;

    fn line(seq: usize, order_id: &str) -> OrderLine {
        OrderLine {
            seq,
            order_id: order_id.to_string(),
            created_at_raw: "18/01/2026 - 09:30 AM".to_string(),
            created_at: NaiveDate::from_ymd_opt(2026, 1, 18)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            offer_sku: "MODEL-A-NEGRO".to_string(),
            quantity: 1,
            resolved_sku: Some("MODEL-A".to_string()),
            dims: Some(LineDims {
                length_cm: 10.0,
                height_cm: 3.0,
                width_cm: 5.0,
            }),
        }
    }

    fn order(order_id: &str, first_seq: usize) -> Order {
        Order {
            order_id: order_id.to_string(),
            first_seq,
            first_created_at: line(first_seq, order_id).created_at,
            line_count: 2,
            total_length: Some(10.0),
            total_height: Some(6.0),
            total_width: Some(5.0),
            real_weight: Some(1.7),
            volumetric_weight: Some(0.1),
            package_weight: Some(3),
        }
    }

    #[test]
    fn test_totals_only_on_first_line_of_order() {
        let lines = vec![line(1, "1001"), line(2, "1001")];
        let orders = vec![order("1001", 1)];

        let mut buffer = Vec::new();
        TableWriter.write(&mut buffer, &lines, &orders).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let rows: Vec<&str> = text.lines().collect();

        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("Fecha de creación,Id del pedido"));

        // primera línea del pedido: totales y pesos presentes
        assert_eq!(
            rows[1],
            "18/01/2026 - 09:30 AM,1001,MODEL-A-NEGRO,MODEL-A,1,1,10,3,5,10,6,5,1.7,0.1,3"
        );
        // segunda línea: dimensiones propias, totales en blanco
        assert_eq!(
            rows[2],
            "18/01/2026 - 09:30 AM,1001,MODEL-A-NEGRO,MODEL-A,1,2,10,3,5,,,,,,"
        );
    }

    #[test]
    fn test_unresolved_line_has_blank_derived_columns() {
        let mut unresolved = line(1, "2002");
        unresolved.resolved_sku = None;
        unresolved.dims = None;

        let mut incomplete = order("2002", 1);
        incomplete.total_length = None;
        incomplete.total_height = None;
        incomplete.total_width = None;
        incomplete.volumetric_weight = None;
        incomplete.package_weight = None;
        incomplete.real_weight = Some(1.1);

        let mut buffer = Vec::new();
        TableWriter
            .write(&mut buffer, &[unresolved], &[incomplete])
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text
            .lines()
            .nth(1)
            .unwrap()
            .ends_with("MODEL-A-NEGRO,,1,1,,,,,,,1.1,,"));
    }
}
