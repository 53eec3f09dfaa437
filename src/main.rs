// ==========================================
// Generador de Manifiestos de Envío - Entrada de línea de comandos
// ==========================================
// Uso:
//   shipping-manifests --orders reporte.xlsx --catalog master.xlsx \
//                      --out-dir salida [--config config.json]
// ==========================================

use anyhow::Context;
use clap::Parser;
use shipping_manifests::export::ManifestWriter;
use shipping_manifests::{
    logging, CatalogImporter, OrderImporter, PipelineConfig, ShippingPipeline,
};
use std::path::PathBuf;

/// Generador de manifiestos de envío a partir del reporte de pedidos
#[derive(Parser, Debug)]
#[command(name = "shipping-manifests", version, about)]
struct Cli {
    /// Reporte de pedidos (.xlsx/.xls/.csv)
    #[arg(long)]
    orders: PathBuf,

    /// Catálogo maestro de medidas (.xlsx/.xls/.csv)
    #[arg(long)]
    catalog: PathBuf,

    /// Directorio de salida
    #[arg(long, default_value = "salida")]
    out_dir: PathBuf,

    /// Configuración del pipeline en JSON (opcional)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", shipping_manifests::APP_NAME);
    tracing::info!("versión: {}", shipping_manifests::VERSION);
    tracing::info!("==================================================");

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PipelineConfig::from_json_file(path)
            .with_context(|| format!("configuración inválida: {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    // entradas requeridas: su ausencia corta antes de procesar nada
    let catalog = CatalogImporter
        .import(&cli.catalog)
        .with_context(|| format!("catálogo maestro: {}", cli.catalog.display()))?;
    let lines = OrderImporter
        .import(&cli.orders)
        .with_context(|| format!("reporte de pedidos: {}", cli.orders.display()))?;

    let outcome = ShippingPipeline::new(config).run(lines, &catalog);

    let written = ManifestWriter::new(&cli.out_dir)
        .write_outcome(&outcome)
        .with_context(|| format!("directorio de salida: {}", cli.out_dir.display()))?;

    let summary = &outcome.summary;
    tracing::info!(
        run_id = %summary.run_id,
        pedidos = summary.total_orders,
        elegibles = summary.eligible_orders,
        descartados = summary.dropped_orders,
        lotes = summary.chunk_count,
        cajas = summary.oversize_orders,
        "corrida completa"
    );
    if !summary.unmatched_skus.is_empty() {
        tracing::warn!(
            skus = ?summary.unmatched_skus,
            "SKUs sin match en el catálogo; revisar el maestro de medidas"
        );
    }
    for path in &written {
        tracing::info!("salida: {}", path.display());
    }

    Ok(())
}
