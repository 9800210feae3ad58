use jedi_search::SearchError;

/// Reasons planning can fail.
///
/// Both are terminal outcomes of a finished search, not transient faults.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("no plan eliminates every droid ({expanded} states expanded)")]
    NoSolution { expanded: usize },

    #[error("search gave up after {limit} expansions")]
    ExpansionLimit { limit: usize },
}

impl PlanError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoSolution { .. } => "no_solution",
            Self::ExpansionLimit { .. } => "expansion_limit",
        }
    }
}

impl From<SearchError> for PlanError {
    fn from(error: SearchError) -> Self {
        match error {
            SearchError::NoSolution { stats } => Self::NoSolution {
                expanded: stats.expanded,
            },
            SearchError::ExpansionLimit { limit, .. } => Self::ExpansionLimit { limit },
        }
    }
}
