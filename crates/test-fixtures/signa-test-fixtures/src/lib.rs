use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(rename = "sign-tables")]
    sign_tables: HashMap<String, SignTableEntry>,
    scripts: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignTableEntry {
    Path(String),
    Extension { path: String, base: String },
}

impl SignTableEntry {
    fn as_path(&self) -> &str {
        match self {
            SignTableEntry::Path(path) => path,
            SignTableEntry::Extension { path, .. } => path,
        }
    }

    fn base(&self) -> Option<&str> {
        match self {
            SignTableEntry::Path(_) => None,
            SignTableEntry::Extension { base, .. } => Some(base),
        }
    }
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Custom sign-table documents (valid and deliberately broken).
pub mod sign_tables {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.sign_tables.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let entry = lookup(&MANIFEST.sign_tables, "sign table", name)?;
        read_to_string(entry.as_path())
    }

    /// Name of the fixture this table extends, if any.
    pub fn base(name: &str) -> Result<Option<String>> {
        let entry = lookup(&MANIFEST.sign_tables, "sign table", name)?;
        Ok(entry.base().map(str::to_owned))
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let entry = lookup(&MANIFEST.sign_tables, "sign table", name)?;
        Ok(resolve_path(entry.as_path()))
    }
}

/// Scripted inputs with expected outcomes.
pub mod scripts {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.scripts.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.scripts, "script", name)?;
        read_to_string(rel)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let rel = lookup(&MANIFEST.scripts, "script", name)?;
        super::load_json(rel)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let rel = lookup(&MANIFEST.scripts, "script", name)?;
        Ok(resolve_path(rel))
    }
}
