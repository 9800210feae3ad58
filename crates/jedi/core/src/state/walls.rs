use std::collections::BTreeSet;

use super::Position;

/// Immutable set of blocked cells for one search run.
///
/// Built once when a problem is constructed and only read afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Walls {
    cells: BTreeSet<Position>,
}

impl Walls {
    pub fn new<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }
}

impl FromIterator<Position> for Walls {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self::new(iter)
    }
}
