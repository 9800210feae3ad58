//! Scenario definitions and loaders.
//!
//! This crate houses the puzzle content fed to the planner:
//! - Built-in scenarios (compiled in, addressable by name)
//! - Scenario files (data-driven via RON)
//! - Solver configuration (data-driven via TOML)
//!
//! All loaders produce `jedi-core` types directly with serde deserialization.

pub mod builtin;
pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::BuiltinScenario;
pub use scenario::Scenario;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, ScenarioLoader};
