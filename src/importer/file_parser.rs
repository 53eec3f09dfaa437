// ==========================================
// Generador de Manifiestos - Lectores de archivo
// ==========================================
// Soporta: Excel (.xlsx/.xls) / CSV (.csv)
// Dos vistas: filas mapeadas por encabezado, o matriz cruda
// (el catálogo trae una fila banner antes del encabezado)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// Lector de archivos tabulares
pub trait FileParser {
    /// Filas como mapa encabezado → valor (primera fila = encabezados)
    fn parse_to_records(&self, file_path: &Path) -> ImportResult<Vec<HashMap<String, String>>>;

    /// Filas crudas como matriz de celdas ya recortadas
    fn parse_to_matrix(&self, file_path: &Path) -> ImportResult<Vec<Vec<String>>>;
}

fn records_from_matrix(rows: Vec<Vec<String>>) -> Vec<HashMap<String, String>> {
    let mut iter = rows.into_iter();
    let headers = match iter.next() {
        Some(h) => h,
        None => return Vec::new(),
    };

    let mut records = Vec::new();
    for row in iter {
        let mut row_map = HashMap::new();
        for (col_idx, value) in row.into_iter().enumerate() {
            if let Some(header) = headers.get(col_idx) {
                row_map.insert(header.clone(), value);
            }
        }

        // saltear filas totalmente vacías
        if row_map.values().all(|v| v.is_empty()) {
            continue;
        }

        records.push(row_map);
    }

    records
}

// ==========================================
// Lector CSV
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_records(&self, file_path: &Path) -> ImportResult<Vec<HashMap<String, String>>> {
        Ok(records_from_matrix(self.parse_to_matrix(file_path)?))
    }

    fn parse_to_matrix(&self, file_path: &Path) -> ImportResult<Vec<Vec<String>>> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let file = File::open(file_path)
            .map_err(|e| ImportError::CsvParseError(e.to_string()))?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // tolera filas de largo desparejo
            .from_reader(file);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| ImportError::CsvParseError(e.to_string()))?;
            rows.push(record.iter().map(|v| v.trim().to_string()).collect());
        }

        Ok(rows)
    }
}

// ==========================================
// Lector Excel
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_records(&self, file_path: &Path) -> ImportResult<Vec<HashMap<String, String>>> {
        Ok(records_from_matrix(self.parse_to_matrix(file_path)?))
    }

    fn parse_to_matrix(&self, file_path: &Path) -> ImportResult<Vec<Vec<String>>> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let mut workbook: Xlsx<_> = open_workbook(file_path)
            .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;

        // se lee la primera hoja, como hace el flujo operativo
        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("el Excel no tiene hojas".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let rows = range
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.to_string().trim().to_string())
                    .collect()
            })
            .collect();

        Ok(rows)
    }
}

// ==========================================
// Lector universal (elige por extensión)
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    fn parser_for(path: &Path) -> ImportResult<Box<dyn FileParser>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(Box::new(CsvParser)),
            "xlsx" | "xls" => Ok(Box::new(ExcelParser)),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }

    pub fn parse_records<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> ImportResult<Vec<HashMap<String, String>>> {
        Self::parser_for(file_path.as_ref())?.parse_to_records(file_path.as_ref())
    }

    pub fn parse_matrix<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<Vec<String>>> {
        Self::parser_for(file_path.as_ref())?.parse_to_matrix(file_path.as_ref())
    }
}
