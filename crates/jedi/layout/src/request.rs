use jedi_core::Position;

use crate::error::LayoutError;

/// Bounded grid dimensions. Cells run from `(0, 0)` to `(width - 1, height - 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    /// True for in-bounds cells touching an edge of the grid.
    pub fn on_border(&self, position: Position) -> bool {
        self.contains(position)
            && (position.x == 0
                || position.y == 0
                || position.x as u32 == self.width - 1
                || position.y as u32 == self.height - 1)
    }

    /// Every cell, ordered by `x` first, then `y`.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.width as i32)
            .flat_map(move |x| (0..self.height as i32).map(move |y| Position::new(x, y)))
    }

    /// Cells not on the border, in the same order as [`cells`](Self::cells).
    pub fn interior(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells().filter(move |cell| !self.on_border(*cell))
    }
}

/// What the generator should place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutRequest {
    pub size: GridSize,
    pub walls: usize,
    /// One entry per droid group: the number of droids stacked on its cell.
    pub droids: Vec<u32>,
    /// Starting concentration of the generated agent.
    pub concentration: i32,
    /// Shuffles candidate cells when set; otherwise cells are tried in order.
    pub seed: Option<u64>,
}

impl LayoutRequest {
    pub const DEFAULT_CONCENTRATION: i32 = 10;

    pub fn new(size: GridSize, walls: usize, droids: Vec<u32>) -> Self {
        Self {
            size,
            walls,
            droids,
            concentration: Self::DEFAULT_CONCENTRATION,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_concentration(mut self, concentration: i32) -> Self {
        self.concentration = concentration;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Number of cells the layout occupies, agent included.
    pub fn occupied_cells(&self) -> u64 {
        1 + self.walls as u64 + self.droids.len() as u64
    }

    /// Rejects requests that are malformed regardless of placement.
    pub fn check(&self) -> Result<(), LayoutError> {
        if self.size.width < 3 || self.size.height < 3 {
            return Err(LayoutError::invalid(format!(
                "a {}x{} grid has no interior cell for the agent",
                self.size.width, self.size.height
            )));
        }
        if i32::try_from(self.size.width).is_err() || i32::try_from(self.size.height).is_err() {
            return Err(LayoutError::invalid("grid dimensions exceed the coordinate range"));
        }
        if self.droids.contains(&0) {
            return Err(LayoutError::invalid("droid groups must hold at least one droid"));
        }
        if self.concentration < 0 {
            return Err(LayoutError::invalid("starting concentration cannot be negative"));
        }
        if self.occupied_cells() > self.size.area() {
            return Err(LayoutError::invalid(format!(
                "{} pieces do not fit on {} cells",
                self.occupied_cells(),
                self.size.area()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_and_interior_partition_the_grid() {
        let size = GridSize::new(4, 3);
        let interior: Vec<_> = size.interior().collect();

        assert_eq!(size.cells().count(), 12);
        assert_eq!(interior, vec![Position::new(1, 1), Position::new(2, 1)]);
        assert!(size.on_border(Position::new(3, 2)));
        assert!(!size.on_border(Position::new(4, 2)));
    }

    #[test]
    fn cells_iterate_x_major() {
        let size = GridSize::new(2, 2);
        let cells: Vec<_> = size.cells().collect();

        assert_eq!(
            cells,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn rejects_malformed_requests() {
        let too_small = LayoutRequest::new(GridSize::new(2, 5), 0, vec![1]);
        let empty_group = LayoutRequest::new(GridSize::new(5, 5), 0, vec![2, 0]);
        let crowded = LayoutRequest::new(GridSize::new(3, 3), 4, vec![1; 5]);

        for request in [too_small, empty_group, crowded] {
            let err = request.check().unwrap_err();
            assert_eq!(err.error_code(), "invalid_request", "{request:?}");
        }
    }

    #[test]
    fn accepts_a_full_grid() {
        let request = LayoutRequest::new(GridSize::new(3, 3), 4, vec![1; 4]);
        assert!(request.check().is_ok());
    }
}
