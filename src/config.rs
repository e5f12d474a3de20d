// src/config.rs

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

use crate::retrieval::{DEFAULT_MAX_SIZE, DEFAULT_SCORE_THRESHOLD};
use crate::schema::DdlFilters;

/// How the rendered catalog is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Ddl,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ddl" => Some(OutputFormat::Ddl),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Glob pattern of JSON metadata files.
    pub metadata: String,
    pub project_id: Option<String>,
    pub score_threshold: f64,
    pub max_tables: usize,
    pub filters: DdlFilters,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            metadata: "metadata/*.json".into(),
            project_id: None,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            max_tables: DEFAULT_MAX_SIZE,
            filters: DdlFilters::default(),
            output: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Read the optional YAML file at `path`, then apply `CATALOG_DDL_*`
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => {
                let text = fs::read_to_string(p).with_context(|| format!("reading {:?}", p))?;
                serde_yaml::from_str(&text).with_context(|| format!("parsing {:?}", p))?
            }
            None => Config::default(),
        };
        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Override fields from `lookup(<variable name>)`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("CATALOG_DDL_METADATA") {
            self.metadata = v;
        }
        if let Some(v) = lookup("CATALOG_DDL_PROJECT_ID") {
            self.project_id = Some(v);
        }
        if let Some(v) = lookup("CATALOG_DDL_SCORE_THRESHOLD") {
            self.score_threshold = v
                .trim()
                .parse()
                .with_context(|| format!("CATALOG_DDL_SCORE_THRESHOLD: bad value `{}`", v))?;
        }
        if let Some(v) = lookup("CATALOG_DDL_MAX_TABLES") {
            self.max_tables = v
                .trim()
                .parse()
                .with_context(|| format!("CATALOG_DDL_MAX_TABLES: bad value `{}`", v))?;
        }
        if let Some(v) = lookup("CATALOG_DDL_OUTPUT") {
            self.output = OutputFormat::parse(&v)
                .ok_or_else(|| anyhow!("CATALOG_DDL_OUTPUT: expected `ddl` or `json`, got `{}`", v))?;
        }
        Ok(())
    }
}
