use anyhow::Result;
use catalog_ddl::{
    config::{Config, OutputFormat},
    retrieval::{filter_by_score, JsonFileStore, MetadataStore},
    schema::{build_catalog_ddl, TableMetadata},
    text::clean_up_new_lines,
};
use std::{env, path::PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) configuration ────────────────────────────────────────────
    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| env::var_os("CATALOG_DDL_CONFIG").map(PathBuf::from));
    let config = Config::load(config_path.as_deref())?;
    info!(
        metadata = %config.metadata,
        project_id = ?config.project_id,
        "startup"
    );

    // ─── 3) look up and rank table documents ─────────────────────────
    let store = JsonFileStore::new(config.metadata.clone());
    let documents = store.lookup(config.project_id.as_deref()).await?;
    let found = documents.len();
    let documents = filter_by_score(documents, config.score_threshold, config.max_tables);
    info!(
        "{} of {} documents passed score >= {}",
        documents.len(),
        found,
        config.score_threshold
    );
    if documents.is_empty() {
        warn!("no table metadata matched; nothing to render");
        return Ok(());
    }

    // ─── 4) render ───────────────────────────────────────────────────
    let tables = documents
        .into_iter()
        .map(|d| TableMetadata::from_meta(d.meta))
        .collect::<Result<Vec<_>>>()?;
    let result = build_catalog_ddl(&tables, &config.filters);
    info!(
        tables = tables.len(),
        calculated = result.has_calculated_field,
        json = result.has_json_field,
        geometry = result.has_geometry_field,
        "rendered catalog"
    );

    match config.output {
        OutputFormat::Ddl => println!("{}", clean_up_new_lines(&result.ddl)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}
