// src/retrieval/store.rs

use anyhow::{anyhow, Context, Result};
use futures::future::BoxFuture;
use glob::glob;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// A catalog document: metadata payload plus an optional relevance score.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Document {
    #[serde(default)]
    pub meta: Map<String, Value>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// Source of catalog documents, optionally scoped to a project.
pub trait MetadataStore: Send + Sync {
    fn lookup<'a>(&'a self, project_id: Option<&'a str>) -> BoxFuture<'a, Result<Vec<Document>>>;
}

/// Documents stored as JSON arrays in every file matching a glob pattern.
pub struct JsonFileStore {
    pattern: String,
}

impl JsonFileStore {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Matching files in path order; the directory walk runs off the runtime.
    async fn files(&self) -> Result<Vec<PathBuf>> {
        let pattern = self.pattern.clone();
        tokio::task::spawn_blocking(move || {
            let mut paths = glob(&pattern)
                .with_context(|| format!("invalid metadata pattern `{}`", pattern))?
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| anyhow!("reading {:?}: {}", e.path(), e.error()))?;
            paths.retain(|p| p.is_file());
            paths.sort();
            Ok::<_, anyhow::Error>(paths)
        })
        .await
        .context("metadata file walk panicked")?
    }

    #[instrument(level = "debug", skip(self), fields(pattern = %self.pattern))]
    async fn load(&self, project_id: Option<&str>) -> Result<Vec<Document>> {
        let project_id = project_id.filter(|p| !p.is_empty());
        let mut documents = Vec::new();

        for path in self.files().await? {
            let text = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("reading {:?}", path))?;
            let docs: Vec<Document> =
                serde_json::from_str(&text).with_context(|| format!("parsing {:?}", path))?;
            debug!(file = ?path, documents = docs.len(), "loaded metadata file");

            documents.extend(docs.into_iter().filter(|d| match project_id {
                Some(id) => d.meta.get("project_id").and_then(Value::as_str) == Some(id),
                None => true,
            }));
        }

        debug!(documents = documents.len(), "lookup finished");
        Ok(documents)
    }
}

impl MetadataStore for JsonFileStore {
    fn lookup<'a>(&'a self, project_id: Option<&'a str>) -> BoxFuture<'a, Result<Vec<Document>>> {
        Box::pin(self.load(project_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn write(dir: &std::path::Path, name: &str, docs: Value) {
        fs::write(dir.join(name), serde_json::to_string(&docs).unwrap()).unwrap();
    }

    #[tokio::test]
    async fn reads_all_matching_files_in_order() -> Result<()> {
        let tmp = tempdir()?;
        write(tmp.path(), "b.json", json!([{"meta": {"name": "second"}, "score": 0.5}]));
        write(tmp.path(), "a.json", json!([{"meta": {"name": "first"}}]));
        fs::write(tmp.path().join("notes.txt"), "ignored")?;

        let store = JsonFileStore::new(format!("{}/*.json", tmp.path().display()));
        let docs = store.lookup(None).await?;

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].meta["name"], "first");
        assert_eq!(docs[0].score, None);
        assert_eq!(docs[1].score, Some(0.5));
        Ok(())
    }

    #[tokio::test]
    async fn filters_by_project_id() -> Result<()> {
        let tmp = tempdir()?;
        write(
            tmp.path(),
            "docs.json",
            json!([
                {"meta": {"project_id": "p1", "name": "a"}},
                {"meta": {"project_id": "p2", "name": "b"}},
                {"meta": {"name": "c"}}
            ]),
        );
        let store = JsonFileStore::new(format!("{}/*.json", tmp.path().display()));

        let docs = store.lookup(Some("p2")).await?;
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].meta["name"], "b");

        assert_eq!(store.lookup(Some("")).await?.len(), 3);
        assert!(store.lookup(Some("p9")).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn no_matching_files_is_empty() -> Result<()> {
        let tmp = tempdir()?;
        let store = JsonFileStore::new(format!("{}/*.json", tmp.path().display()));
        assert!(store.lookup(None).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn invalid_pattern_is_an_error() -> Result<()> {
        let store = JsonFileStore::new("metadata/[*.json");
        let err = store.lookup(None).await.unwrap_err();
        assert!(err.to_string().starts_with("invalid metadata pattern"));
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() -> Result<()> {
        let tmp = tempdir()?;
        fs::write(tmp.path().join("bad.json"), "{not json")?;
        let store = JsonFileStore::new(format!("{}/*.json", tmp.path().display()));
        let err = store.lookup(None).await.unwrap_err();
        assert!(err.to_string().starts_with("parsing"));
        Ok(())
    }
}
