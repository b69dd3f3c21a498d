//! Asset container access
//!
//! Bundle decoding is done by an external exporter. This module reads what
//! the exporter leaves on disk and presents it as a container path → object
//! map, the same shape the game's Addressables catalog uses.

use crate::{Error, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Name of the optional container index in an export directory
pub const CONTAINER_INDEX: &str = "container.json";

/// Path-keyed view over the objects of an asset bundle
pub trait AssetContainer {
    /// All container paths, in container order
    fn paths(&self) -> Vec<String>;

    /// Text payload (`m_Script`) of an embedded script or text asset
    fn read_script(&self, path: &str) -> Result<String>;

    /// Generic type-tree decoding of an object
    fn read_type_tree(&self, path: &str) -> Result<Value>;

    /// First container path ending with `suffix`
    fn find_suffix(&self, suffix: &str) -> Option<String> {
        self.paths().into_iter().find(|p| p.ends_with(suffix))
    }
}

/// Export directory written by an external bundle exporter
///
/// Layout is either:
/// - a `container.json` object mapping container paths to files relative to
///   the directory, or
/// - one file per object at its container path.
pub struct ExportedBundle {
    root: PathBuf,
    entries: Vec<(String, PathBuf)>,
}

impl ExportedBundle {
    /// Open an export directory
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let root = path.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(Error::NotADirectory(root));
        }

        let index = root.join(CONTAINER_INDEX);
        let entries = if index.is_file() {
            Self::read_index(&index)?
        } else {
            Self::walk(&root)
        };

        tracing::debug!(root = %root.display(), entries = entries.len(), "opened asset export");
        Ok(Self { root, entries })
    }

    fn read_index(index: &Path) -> Result<Vec<(String, PathBuf)>> {
        let text = std::fs::read_to_string(index).map_err(|e| Error::io(index, e))?;
        let context = index.display().to_string();

        // preserve_order keeps the exporter's entry order
        let map: serde_json::Map<String, Value> =
            serde_json::from_str(&text).map_err(|e| Error::json(&context, e))?;

        map.into_iter()
            .map(|(container_path, file)| match file {
                Value::String(rel) => Ok((container_path, PathBuf::from(rel))),
                _ => Err(Error::MissingField {
                    field: "file",
                    expected: "a string",
                    context: format!("{} entry '{}'", context, container_path),
                }),
            })
            .collect()
    }

    fn walk(root: &Path) -> Vec<(String, PathBuf)> {
        let mut entries: Vec<(String, PathBuf)> = walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                let rel = e.path().strip_prefix(root).ok()?.to_path_buf();
                let container_path = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                Some((container_path, rel))
            })
            .collect();

        entries.sort();
        entries
    }

    fn file_for(&self, path: &str) -> Result<PathBuf> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, rel)| self.root.join(rel))
            .ok_or_else(|| Error::UnknownPath(path.to_string()))
    }
}

impl AssetContainer for ExportedBundle {
    fn paths(&self) -> Vec<String> {
        self.entries.iter().map(|(p, _)| p.clone()).collect()
    }

    fn read_script(&self, path: &str) -> Result<String> {
        let file = self.file_for(path)?;
        let text = std::fs::read_to_string(&file).map_err(|e| Error::io(&file, e))?;

        // Exporters that dump the whole TextAsset wrap the payload in m_Script
        if let Ok(Value::Object(mut fields)) = serde_json::from_str::<Value>(&text) {
            if let Some(Value::String(script)) = fields.remove("m_Script") {
                return Ok(script);
            }
        }

        Ok(text)
    }

    fn read_type_tree(&self, path: &str) -> Result<Value> {
        let file = self.file_for(path)?;
        let text = std::fs::read_to_string(&file).map_err(|e| Error::io(&file, e))?;
        serde_json::from_str(&text).map_err(|e| Error::json(path, e))
    }
}
