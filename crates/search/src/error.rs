//! Search failure outcomes.

use crate::SearchStats;

/// Reasons a search can end without a solution.
///
/// Both variants are terminal: retrying the same problem with the same
/// options produces the same outcome.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Every reachable state was expanded and none satisfied the goal.
    #[error("search space exhausted after {} expansions without reaching a goal", stats.expanded)]
    NoSolution { stats: SearchStats },

    /// The configured expansion budget ran out before a goal was reached.
    #[error("expansion limit of {limit} reached before finding a goal")]
    ExpansionLimit { limit: usize, stats: SearchStats },
}

impl SearchError {
    /// Returns the statistics gathered before the search stopped.
    pub fn stats(&self) -> &SearchStats {
        match self {
            Self::NoSolution { stats } | Self::ExpansionLimit { stats, .. } => stats,
        }
    }

    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoSolution { .. } => "no_solution",
            Self::ExpansionLimit { .. } => "expansion_limit",
        }
    }
}
