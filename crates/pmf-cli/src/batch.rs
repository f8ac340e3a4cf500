//! `pmf batch`: evaluate a list of requests read from YAML or JSON.

use anyhow::{Context, Result};
use pmf_core::{DistributionKind, ParameterSet, RenderObserver};
use pmf_prob::Session;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::output::Report;

/// A raw field as written in the config file.
///
/// Quote values to keep them exact; bare numbers go through `f64` in YAML/JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl RawField {
    fn into_raw(self) -> String {
        match self {
            RawField::Text(s) => s,
            RawField::Integer(i) => i.to_string(),
            RawField::Float(f) => f.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchRequest {
    pub distribution: DistributionKind,
    #[serde(default)]
    pub params: BTreeMap<String, RawField>,
    /// Overrides the file-level `decimals`.
    #[serde(default)]
    pub decimals: Option<RawField>,
}

impl BatchRequest {
    pub fn parameter_set(&self) -> ParameterSet {
        self.params.iter().map(|(k, v)| (k.clone(), v.clone().into_raw())).collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    /// Raw decimals field; empty or non-numeric means 10.
    #[serde(default)]
    pub decimals: Option<RawField>,
    pub requests: Vec<BatchRequest>,
}

pub fn read_batch_config(path: &Path) -> Result<BatchConfig> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("").to_ascii_lowercase();
    let cfg: BatchConfig = if ext == "json" {
        serde_json::from_slice(&bytes)
            .with_context(|| format!("invalid batch JSON: {}", path.display()))?
    } else {
        // Default: YAML (serde_yaml_ng).
        serde_yaml_ng::from_slice(&bytes)
            .with_context(|| format!("invalid batch YAML: {}", path.display()))?
    };
    Ok(cfg)
}

/// Evaluate every request through `session`, in file order.
pub fn run_batch<O: RenderObserver>(session: &mut Session<O>, cfg: BatchConfig) -> Vec<Report> {
    let default_decimals = cfg.decimals.map(RawField::into_raw).unwrap_or_default();
    cfg.requests
        .into_iter()
        .enumerate()
        .map(|(i, req)| {
            let decimals =
                req.decimals.clone().map(RawField::into_raw).unwrap_or(default_decimals.clone());
            session.select(req.distribution);
            let outcome = session.submit(&req.parameter_set(), &decimals);
            tracing::info!(
                index = i,
                distribution = %req.distribution,
                ok = outcome.is_ok(),
                "request evaluated"
            );
            Report::new(session, &outcome)
        })
        .collect()
}
