//! Shared transition-table fixtures, addressed by the names listed in
//! `fixtures/manifest.json`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    tables: HashMap<String, String>,
}

impl Manifest {
    fn table_path(&self, name: &str) -> Result<PathBuf> {
        let rel = self
            .tables
            .get(name)
            .ok_or_else(|| anyhow!("unknown table fixture '{name}'"))?;
        Ok(Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures")
            .join(rel))
    }
}

pub mod tables {
    use std::fs;
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use serde::de::DeserializeOwned;

    use super::MANIFEST;

    /// Fixture names in sorted order.
    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.tables.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        MANIFEST.table_path(name)
    }

    /// Raw JSON text of a stored timeline.
    pub fn json(name: &str) -> Result<String> {
        let path = path(name)?;
        fs::read_to_string(&path)
            .with_context(|| format!("failed to read table fixture at {}", path.display()))
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let text = json(name)?;
        serde_json::from_str(&text).with_context(|| format!("failed to parse table fixture {name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_manifest_entry_resolves() {
        for key in tables::keys() {
            let path = tables::path(&key).unwrap();
            assert!(path.exists(), "missing fixture file for {key}");
            let doc: serde_json::Value = tables::load(&key).unwrap();
            assert!(doc.get("transitions").is_some(), "{key} has no transitions");
        }
    }

    #[test]
    fn unknown_names_are_errors() {
        let err = tables::json("does-not-exist").unwrap_err();
        assert!(err.to_string().contains("does-not-exist"), "{err}");
    }
}
