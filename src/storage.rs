use crate::model::{ScheduleInput, ScheduleOutcome};
use crate::scheduler::GenerateOptions;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Fichier de planification d'une semaine : options, entrées, dernier résultat.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekPlan {
    #[serde(default)]
    pub options: GenerateOptions,
    #[serde(default)]
    pub input: ScheduleInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<ScheduleOutcome>,
}

pub trait Storage {
    /// Charge un plan depuis un support.
    fn load(&self) -> anyhow::Result<WeekPlan>;
    /// Sauvegarde de manière atomique.
    fn save(&self, plan: &WeekPlan) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<WeekPlan> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let plan: WeekPlan = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(plan)
    }

    fn save(&self, plan: &WeekPlan) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(plan)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}
