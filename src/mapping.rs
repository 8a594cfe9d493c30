use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::{Result, ScrambleError};

const INDENT: &[u8] = b"    ";

/// Original name → new name, in the order the entries were processed.
#[derive(Debug, Default)]
pub struct MappingRecorder {
    entries: IndexMap<String, String>,
}

impl MappingRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, original: impl Into<String>, assigned: impl Into<String>) {
        self.entries.insert(original.into(), assigned.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Pretty JSON with a four-space indent.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.entries.serialize(&mut ser)?;
        Ok(buf)
    }

    /// Replace whatever is at `path` with the current mapping.
    ///
    /// The bytes go to a temp file next to `path` first, so readers never see
    /// a partially written map.
    pub fn write(&self, path: &Path) -> Result<()> {
        let bytes = self.serialize()?;
        let write_err = |source| ScrambleError::WriteMap {
            path: path.to_path_buf(),
            source,
        };
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(&bytes).map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}
