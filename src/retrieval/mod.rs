// src/retrieval/mod.rs

pub mod score;
pub mod store;

use anyhow::Result;
use serde_json::{Map, Value};
use tracing::debug;

pub use score::{filter_by_score, DEFAULT_MAX_SIZE, DEFAULT_SCORE_THRESHOLD};
pub use store::{Document, JsonFileStore, MetadataStore};

/// Metadata of the first document stored for `project_id`.
/// A project has a single metadata document; no match yields an empty map.
pub async fn retrieve_metadata<S>(store: &S, project_id: Option<&str>) -> Result<Map<String, Value>>
where
    S: MetadataStore + ?Sized,
{
    let documents = store.lookup(project_id).await?;
    debug!(project_id = ?project_id, documents = documents.len(), "retrieved metadata");
    Ok(documents.into_iter().next().map(|d| d.meta).unwrap_or_default())
}
