// ==========================================
// Generador de Manifiestos - Importador del reporte de pedidos
// ==========================================
// Responsabilidad: reporte crudo → Vec<OrderLine>
// Columnas esperadas: Fecha de creación, Id del pedido,
//                     SKU de la oferta, Cantidad
// ==========================================

use crate::domain::order::{OrderLine, SOURCE_TIMESTAMP_FORMAT};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::UniversalFileParser;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::path::Path;

pub const COL_CREATED_AT: &str = "Fecha de creación";
pub const COL_ORDER_ID: &str = "Id del pedido";
pub const COL_OFFER_SKU: &str = "SKU de la oferta";
pub const COL_QUANTITY: &str = "Cantidad";

// ==========================================
// OrderImporter
// ==========================================
pub struct OrderImporter;

impl OrderImporter {
    /// Importa el reporte de pedidos desde Excel o CSV
    ///
    /// La secuencia (Número) se asigna en el orden del archivo, base 1;
    /// queda como clave de orden estable para todo el pipeline.
    /// Una fecha mal formada corta la corrida completa.
    pub fn import<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<OrderLine>> {
        let records = UniversalFileParser.parse_records(file_path.as_ref())?;
        if records.is_empty() {
            return Err(ImportError::EmptyFile(
                file_path.as_ref().display().to_string(),
            ));
        }

        let mut lines = Vec::with_capacity(records.len());
        for (idx, record) in records.into_iter().enumerate() {
            // fila 1 del archivo es el encabezado
            let row_number = idx + 2;
            lines.push(Self::map_line(idx + 1, row_number, &record)?);
        }

        tracing::info!(lines = lines.len(), "reporte de pedidos importado");
        Ok(lines)
    }

    fn map_line(
        seq: usize,
        row_number: usize,
        record: &HashMap<String, String>,
    ) -> ImportResult<OrderLine> {
        let created_at_raw = Self::required_field(record, COL_CREATED_AT)?;
        let order_id = Self::required_field(record, COL_ORDER_ID)?;
        let offer_sku = Self::required_field(record, COL_OFFER_SKU)?;
        let quantity_raw = Self::required_field(record, COL_QUANTITY)?;

        let created_at = NaiveDateTime::parse_from_str(&created_at_raw, SOURCE_TIMESTAMP_FORMAT)
            .map_err(|_| ImportError::TimestampFormatError {
                row: row_number,
                value: created_at_raw.clone(),
            })?;

        let quantity: u32 =
            quantity_raw
                .parse()
                .map_err(|_| ImportError::TypeConversionError {
                    row: row_number,
                    field: COL_QUANTITY.to_string(),
                    message: format!("se esperaba un entero positivo, se encontró \"{}\"", quantity_raw),
                })?;

        Ok(OrderLine {
            seq,
            order_id,
            created_at_raw,
            created_at,
            offer_sku,
            quantity,
            resolved_sku: None,
            dims: None,
        })
    }

    fn required_field(record: &HashMap<String, String>, column: &str) -> ImportResult<String> {
        record
            .get(column)
            .cloned()
            .ok_or_else(|| ImportError::MissingColumn {
                column: column.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_report(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(
            file,
            "Fecha de creación,Id del pedido,SKU de la oferta,Cantidad"
        )
        .unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file
    }

    #[test]
    fn test_import_assigns_sequence_in_file_order() {
        let file = temp_report(&[
            "18/01/2026 - 09:30 AM,1001,MODEL-A-NEGRO,1",
            "18/01/2026 - 10:15 AM,1002,MODEL-B-XL,2",
        ]);

        let lines = OrderImporter.import(file.path()).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].seq, 1);
        assert_eq!(lines[1].seq, 2);
        assert_eq!(lines[0].order_id, "1001");
        assert_eq!(lines[1].quantity, 2);
        assert!(lines[0].resolved_sku.is_none());
    }

    #[test]
    fn test_import_parses_pm_timestamps() {
        let file = temp_report(&["18/01/2026 - 09:45 PM,1001,MODEL-A,1"]);

        let lines = OrderImporter.import(file.path()).unwrap();
        assert_eq!(lines[0].created_at.format("%H:%M").to_string(), "21:45");
        assert_eq!(lines[0].created_at_raw, "18/01/2026 - 09:45 PM");
    }

    #[test]
    fn test_malformed_timestamp_is_fatal() {
        let file = temp_report(&[
            "18/01/2026 - 09:30 AM,1001,MODEL-A,1",
            "2026-01-18 09:30,1002,MODEL-B,1",
        ]);

        let result = OrderImporter.import(file.path());
        assert!(matches!(
            result,
            Err(ImportError::TimestampFormatError { row: 3, .. })
        ));
    }

    #[test]
    fn test_bad_quantity_is_fatal() {
        let file = temp_report(&["18/01/2026 - 09:30 AM,1001,MODEL-A,dos"]);

        let result = OrderImporter.import(file.path());
        assert!(matches!(
            result,
            Err(ImportError::TypeConversionError { row: 2, .. })
        ));
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Fecha de creación,Id del pedido,Cantidad").unwrap();
        writeln!(file, "18/01/2026 - 09:30 AM,1001,1").unwrap();

        let result = OrderImporter.import(file.path());
        assert!(matches!(result, Err(ImportError::MissingColumn { .. })));
    }
}
