//! Content factory resolving data files inside a data directory.

use std::path::{Path, PathBuf};

use raven_core::{BrainConfig, ScenarioSpec};

use crate::loaders::{BrainConfigLoader, LoadResult, ScenarioLoader};

/// Content factory that loads Raven content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── brain.toml
/// └── scenarios/
///     ├── arena.ron
///     └── duel.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The data directory bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load brain configuration from `brain.toml`.
    pub fn load_brain_config(&self) -> LoadResult<BrainConfig> {
        BrainConfigLoader::load(&self.data_dir.join("brain.toml"))
    }

    /// Load a scenario from `scenarios/{name}.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<ScenarioSpec> {
        let path = self.data_dir.join("scenarios").join(format!("{name}.ron"));
        ScenarioLoader::load(&path)
    }
}
