use crate::algorithm::Algorithm;
use crate::checksum::{CHUNK_SIZE, MAX_CHUNK_SIZE};
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional configuration read from `~/.config/ckv/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CkvConfig {
    /// Algorithm used when none is given. Unknown names mean SHA-256.
    pub default_algorithm: Algorithm,
    /// Bytes per read when streaming a file. Zero means the built-in size;
    /// at most 16 MiB.
    pub chunk_size: usize,
}

impl CkvConfig {
    /// Reject values the engine would refuse to allocate.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.chunk_size <= MAX_CHUNK_SIZE,
            "chunk_size {} exceeds the maximum of {} bytes",
            self.chunk_size,
            MAX_CHUNK_SIZE
        );
        Ok(())
    }
}

impl Default for CkvConfig {
    fn default() -> Self {
        Self {
            default_algorithm: Algorithm::Sha256,
            chunk_size: CHUNK_SIZE,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ckv")?;
    Ok(xdg_dirs.get_config_home().join("ckv").join("config.toml"))
}

/// Load configuration from the XDG location. A missing file yields defaults;
/// nothing is written to disk.
pub fn load() -> Result<CkvConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(CkvConfig::default());
    }
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<CkvConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: CkvConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!("loaded config from {}: {:?}", path.display(), cfg);
    Ok(cfg)
}
