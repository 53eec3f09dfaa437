// ==========================================
// Generador de Manifiestos - Importador del catálogo maestro
// ==========================================
// Responsabilidad: archivo "Master Medidas" → Catalog
// Particularidad: la primera fila es un banner/título y se saltea;
// el encabezado real viene en la segunda fila
// ==========================================

use crate::domain::catalog::{Catalog, CatalogEntry};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::UniversalFileParser;
use std::path::Path;

pub const COL_MODEL: &str = "MODELO";
pub const COL_LENGTH: &str = "LARGO (cm)";
pub const COL_WIDTH: &str = "ANCHO (cm)";
pub const COL_HEIGHT: &str = "ALTO (cm)";

// ==========================================
// CatalogImporter
// ==========================================
pub struct CatalogImporter;

impl CatalogImporter {
    /// Importa el catálogo maestro desde Excel o CSV
    ///
    /// Filas sin MODELO se descartan; filas con medidas no numéricas
    /// se descartan con aviso (recuperable, igual que un SKU sin match).
    pub fn import<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Catalog> {
        let rows = UniversalFileParser.parse_matrix(file_path.as_ref())?;

        // fila 0: banner; fila 1: encabezados
        let mut iter = rows.into_iter().skip(1);
        let headers = iter.next().ok_or_else(|| {
            ImportError::EmptyFile(file_path.as_ref().display().to_string())
        })?;

        let model_idx = Self::column_index(&headers, COL_MODEL)?;
        let length_idx = Self::column_index(&headers, COL_LENGTH)?;
        let width_idx = Self::column_index(&headers, COL_WIDTH)?;
        let height_idx = Self::column_index(&headers, COL_HEIGHT)?;

        let mut entries = Vec::new();
        let mut skipped = 0usize;
        for (row_idx, row) in iter.enumerate() {
            // fila 1 y 2 del archivo son banner y encabezado
            let row_number = row_idx + 3;

            let model = row.get(model_idx).map(|s| s.trim()).unwrap_or("");
            if model.is_empty() {
                continue;
            }

            let dims = (
                Self::cell_f64(&row, length_idx),
                Self::cell_f64(&row, width_idx),
                Self::cell_f64(&row, height_idx),
            );

            match dims {
                (Some(length_cm), Some(width_cm), Some(height_cm)) => {
                    entries.push(CatalogEntry {
                        model: model.to_string(),
                        length_cm,
                        width_cm,
                        height_cm,
                    });
                }
                _ => {
                    tracing::warn!(
                        row = row_number,
                        model,
                        "fila del catálogo con medidas no numéricas, descartada"
                    );
                    skipped += 1;
                }
            }
        }

        if entries.is_empty() {
            return Err(ImportError::EmptyFile(
                file_path.as_ref().display().to_string(),
            ));
        }

        tracing::info!(models = entries.len(), skipped, "catálogo maestro importado");
        Ok(Catalog::new(entries))
    }

    fn column_index(headers: &[String], column: &str) -> ImportResult<usize> {
        headers
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| ImportError::MissingColumn {
                column: column.to_string(),
            })
    }

    fn cell_f64(row: &[String], idx: usize) -> Option<f64> {
        row.get(idx).and_then(|s| s.trim().parse::<f64>().ok())
    }
}
