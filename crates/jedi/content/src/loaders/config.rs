//! Solver configuration loader.

use std::path::Path;

use jedi_core::SolverConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for solver configuration from TOML files.
///
/// Every key is optional; missing keys keep their defaults.
///
/// ```toml
/// graph_search = true
/// max_expansions = 500000
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<SolverConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SolverConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
