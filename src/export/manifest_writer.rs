// ==========================================
// Generador de Manifiestos - Escritura de archivos de salida
// ==========================================
// Responsabilidad: volcar una corrida a un directorio de salida
//   <salida>/csv_guias/<chunk>.csv       guías por lote
//   <salida>/ordenes_con_cajas.txt       aviso de cajas (si aplica)
//   <salida>/archivo_de_trabajo_*.csv    tabla de trabajo enriquecida
// ==========================================

use crate::domain::manifest::{ManifestBatch, ManifestRecord};
use crate::engine::orchestrator::PipelineOutcome;
use crate::export::error::ExportResult;
use crate::export::table_writer::TableWriter;
use chrono::Local;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Subcarpeta de los CSV de guías
pub const MANIFEST_SUBDIR: &str = "csv_guias";

/// Nombre del aviso de cajas especiales
pub const ALERT_FILE_NAME: &str = "ordenes_con_cajas.txt";

// ==========================================
// ManifestWriter
// ==========================================
pub struct ManifestWriter {
    out_dir: PathBuf,
}

impl ManifestWriter {
    pub fn new<P: AsRef<Path>>(out_dir: P) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }

    /// Escribe todos los archivos de una corrida
    ///
    /// El nombre de la tabla de trabajo lleva la hora local de la
    /// corrida; el contenido es idéntico entre corridas con la misma
    /// entrada (la corrida es determinista).
    pub fn write_outcome(&self, outcome: &PipelineOutcome) -> ExportResult<Vec<PathBuf>> {
        let mut written = Vec::new();

        // === CSV de guías por lote ===
        let manifest_dir = self.out_dir.join(MANIFEST_SUBDIR);
        fs::create_dir_all(&manifest_dir)?;

        for chunk in &outcome.batch.chunks {
            let path = manifest_dir.join(&chunk.file_name);
            let file = fs::File::create(&path)?;
            Self::write_manifest_csv(file, &chunk.records)?;
            written.push(path);
        }

        // === Aviso de cajas, solo si hay pedidos afectados ===
        if let Some(path) = self.write_alert(&outcome.batch)? {
            written.push(path);
        }

        // === Tabla de trabajo enriquecida ===
        let table_name = format!(
            "archivo_de_trabajo_{}.csv",
            Local::now().format("%d%m%Y_%H%M")
        );
        let table_path = self.out_dir.join(table_name);
        let file = fs::File::create(&table_path)?;
        TableWriter.write(file, &outcome.lines, &outcome.orders)?;
        written.push(table_path);

        tracing::info!(
            files = written.len(),
            out_dir = %self.out_dir.display(),
            "archivos de salida escritos"
        );
        Ok(written)
    }

    /// Escribe un CSV de guías (encabezado + una fila por pedido)
    pub fn write_manifest_csv<W: Write>(writer: W, records: &[ManifestRecord]) -> ExportResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    fn write_alert(&self, batch: &ManifestBatch) -> ExportResult<Option<PathBuf>> {
        let text = match batch.alert_text() {
            Some(text) => text,
            None => return Ok(None),
        };

        let path = self.out_dir.join(ALERT_FILE_NAME);
        fs::create_dir_all(&self.out_dir)?;
        fs::write(&path, text)?;
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pedido: &str) -> ManifestRecord {
        ManifestRecord {
            pedido: pedido.to_string(),
            numero_guias: 1,
            valor_declarado: String::new(),
            largo_paquete: 30,
            alto_paquete: 41,
            ancho_paquete: 40,
            peso_paquete: 3,
        }
    }

    #[test]
    fn test_manifest_csv_header_and_rows() {
        let mut buffer = Vec::new();
        ManifestWriter::write_manifest_csv(&mut buffer, &[record("1001"), record("1002")])
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let rows: Vec<&str> = text.lines().collect();

        assert_eq!(
            rows[0],
            "pedido,numero_guias,valor_declarado,largo_paquete,alto_paquete,ancho_paquete,peso_paquete"
        );
        assert_eq!(rows[1], "1001,1,,30,41,40,3");
        assert_eq!(rows[2], "1002,1,,30,41,40,3");
    }
}
