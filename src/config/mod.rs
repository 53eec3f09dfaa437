// ==========================================
// Generador de Manifiestos - Configuración del pipeline
// ==========================================
// Responsabilidad: parámetros de negocio con defaults fijos
// Fuente opcional: archivo JSON pasado por línea de comandos
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Error de carga de configuración
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no se pudo leer el archivo de configuración {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("configuración JSON inválida en {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

// ==========================================
// PipelineConfig - parámetros de negocio
// ==========================================
// Los defaults reproducen las reglas vigentes de facturación;
// cualquier campo ausente en el JSON conserva su default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Filas máximas por archivo de guías
    pub chunk_size: usize,

    /// Umbral de Alto Total (cm) que exige caja especial
    pub oversize_height_cm: f64,

    /// Divisor del peso volumétrico (cm³/kg)
    pub volumetric_divisor: f64,

    /// Peso base por pedido (kg)
    pub base_weight_kg: f64,

    /// Peso por línea de pedido (kg)
    pub weight_per_line_kg: f64,

    /// Factor de mezcla real→volumétrico del peso facturable
    pub volumetric_blend: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: 50,
            oversize_height_cm: 50.0,
            volumetric_divisor: 5000.0,
            base_weight_kg: 0.500,
            weight_per_line_kg: 0.600,
            volumetric_blend: 0.75,
        }
    }
}

impl PipelineConfig {
    /// Carga la configuración desde un archivo JSON
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
