use crate::model::{Schedule, Theme};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Nom de fichier par défaut, hérité de l'espace de noms historique.
pub const DEFAULT_STORE: &str = "weekendly-storage.json";

/// Seuls le planning et le thème actif traversent les sessions ;
/// catalogue et état de récupération du flux restent éphémères.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub schedule: Schedule,
    #[serde(default)]
    pub active_theme: Theme,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            schedule: Schedule::default(),
            active_theme: Theme::default(),
        }
    }
}

pub trait Storage {
    /// Charge l'instantané depuis un support.
    fn load(&self) -> anyhow::Result<Snapshot>;
    /// Sauvegarde de manière atomique.
    fn save(&self, snapshot: &Snapshot) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self { path: path.as_ref().to_path_buf() })
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Snapshot> {
        let data = fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let snapshot: Snapshot = serde_json::from_slice(&data).with_context(|| "parsing snapshot")?;
        Ok(snapshot)
    }

    fn save(&self, snapshot: &Snapshot) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(snapshot)?;
        let mut tmp = NamedTempFile::new_in(
            self.path.parent().unwrap_or_else(|| Path::new(".")))
            .with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}
