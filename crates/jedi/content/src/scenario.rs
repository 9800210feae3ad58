use jedi_core::InitialCondition;
use jedi_layout::{GridSize, LayoutViolation, validate_layout};

/// A starting position plus, optionally, the grid it was laid out on.
///
/// Without a grid the map is open on every side and only the planner's rules
/// apply; with one, the layout rules can be checked as well.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub condition: InitialCondition,
    pub grid: Option<GridSize>,
}

impl Scenario {
    pub fn new(condition: InitialCondition) -> Self {
        Self {
            condition,
            grid: None,
        }
    }

    #[must_use]
    pub fn with_grid(mut self, grid: GridSize) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Checks the layout rules when a grid is known; open maps always pass.
    pub fn validate(&self) -> Result<(), LayoutViolation> {
        match self.grid {
            Some(grid) => validate_layout(&self.condition, grid),
            None => Ok(()),
        }
    }
}

impl From<InitialCondition> for Scenario {
    fn from(condition: InitialCondition) -> Self {
        Self::new(condition)
    }
}
