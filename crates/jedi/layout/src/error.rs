use jedi_core::Position;

/// Reasons a layout request cannot be turned into a map.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("invalid layout request: {reason}")]
    InvalidRequest { reason: String },

    #[error(
        "no layout fits {walls} walls and {groups} droid groups on a {width}x{height} grid"
    )]
    Unsatisfiable {
        width: u32,
        height: u32,
        walls: usize,
        groups: usize,
    },
}

impl LayoutError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }

    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRequest { .. } => "invalid_request",
            Self::Unsatisfiable { .. } => "unsatisfiable",
        }
    }
}

/// First placement rule an existing layout breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutViolation {
    #[error("cell {position} lies outside the grid")]
    OutOfBounds { position: Position },

    #[error("agent at {position} stands on the grid border")]
    AgentOnBorder { position: Position },

    #[error("cell {position} is occupied more than once")]
    SharedCell { position: Position },

    #[error("droid group at {position} is empty")]
    EmptyGroup { position: Position },

    #[error("agent at {position} is walled in on all four sides")]
    AgentWalledIn { position: Position },

    #[error("adjacent droid groups at {first} and {second} hold {total} droids")]
    CrowdedNeighbours {
        first: Position,
        second: Position,
        total: u32,
    },
}

impl LayoutViolation {
    /// Returns a static string identifier for this violation.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "out_of_bounds",
            Self::AgentOnBorder { .. } => "agent_on_border",
            Self::SharedCell { .. } => "shared_cell",
            Self::EmptyGroup { .. } => "empty_group",
            Self::AgentWalledIn { .. } => "agent_walled_in",
            Self::CrowdedNeighbours { .. } => "crowded_neighbours",
        }
    }
}
