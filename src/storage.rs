use crate::model::RosterTable;
use anyhow::Context;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Collaborateur de persistance : un seul document, remplacé en bloc.
pub trait RosterStore {
    /// Dernier planning enregistré, `None` s'il n'y en a pas encore.
    fn read_roster_table(&self) -> anyhow::Result<Option<RosterTable>>;
    /// Remplace le planning de manière atomique (dernier écrivain gagnant).
    fn write_roster_table(&self, table: &RosterTable) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterStore for JsonStorage {
    fn read_roster_table(&self) -> anyhow::Result<Option<RosterTable>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", self.path.display()))
            }
        };
        let table: RosterTable = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(Some(table))
    }

    fn write_roster_table(&self, table: &RosterTable) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(table)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("creating temp file for {}", self.path.display()))?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .with_context(|| format!("atomic rename to {}", self.path.display()))?;

        #[cfg(feature = "logging")]
        tracing::debug!(path = %self.path.display(), assignments = table.len(), "roster table written");

        Ok(())
    }
}
