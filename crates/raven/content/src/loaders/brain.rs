//! Brain configuration loader.

use std::path::Path;

use raven_core::BrainConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for brain configuration from TOML files.
///
/// Missing fields fall back to [`BrainConfig::default`]. The loaded config is
/// validated before it is returned.
pub struct BrainConfigLoader;

impl BrainConfigLoader {
    /// Load a brain config from a TOML file.
    pub fn load(path: &Path) -> LoadResult<BrainConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid brain config {}: {}", path.display(), e))
    }

    /// Parse and validate a brain config from TOML text.
    pub fn parse(content: &str) -> LoadResult<BrainConfig> {
        let config: BrainConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse brain config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}
