use jedi_search::SearchOptions;

/// Solver configuration and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Deduplicate world states during search. Disabling this turns the search
    /// into tree search, which is only practical on tiny maps.
    pub graph_search: bool,

    /// Upper bound on node expansions. `None` searches until the state space is
    /// exhausted.
    pub max_expansions: Option<usize>,
}

impl SolverConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GRAPH_SEARCH: bool = true;

    pub fn new() -> Self {
        Self {
            graph_search: Self::DEFAULT_GRAPH_SEARCH,
            max_expansions: None,
        }
    }

    #[must_use]
    pub fn with_graph_search(mut self, graph_search: bool) -> Self {
        self.graph_search = graph_search;
        self
    }

    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: Option<usize>) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Engine options derived from this configuration.
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions::new()
            .with_graph_search(self.graph_search)
            .with_max_expansions(self.max_expansions)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
