//! Solver configuration assembly.
//!
//! Sources are layered, later ones winning: built-in defaults, an optional
//! TOML file, then environment variables.
//!
//! Environment variables:
//! - `JEDI_GRAPH_SEARCH`: `true`/`false`, deduplicate states during search
//! - `JEDI_MAX_EXPANSIONS`: positive integer expansion cap, or `none` to lift it

use std::env;
use std::path::Path;

use anyhow::Result;
use jedi_content::ConfigLoader;
use jedi_core::SolverConfig;
use tracing::debug;

pub const GRAPH_SEARCH_VAR: &str = "JEDI_GRAPH_SEARCH";
pub const MAX_EXPANSIONS_VAR: &str = "JEDI_MAX_EXPANSIONS";

/// Loads `path` if given, then applies environment overrides.
pub fn load_solver_config(path: Option<&Path>) -> Result<SolverConfig> {
    let config = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading solver config");
            ConfigLoader::load(path)?
        }
        None => SolverConfig::default(),
    };

    Ok(apply_overrides(config, |key| env::var(key).ok()))
}

/// Applies overrides read through `lookup`. Unparseable values are ignored.
pub fn apply_overrides<F>(mut config: SolverConfig, lookup: F) -> SolverConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(enable) = read_var::<bool, _>(&lookup, GRAPH_SEARCH_VAR) {
        config.graph_search = enable;
    }

    match lookup(MAX_EXPANSIONS_VAR).as_deref().map(str::trim) {
        Some(value) if value.eq_ignore_ascii_case("none") => config.max_expansions = None,
        Some(value) => {
            if let Ok(limit) = value.parse::<usize>() {
                config.max_expansions = Some(limit.max(1));
            }
        }
        None => {}
    }

    config
}

fn read_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}
