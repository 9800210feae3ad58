use std::collections::BTreeMap;

use super::Position;

/// A stack of identical droids occupying one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DroidGroup {
    pub position: Position,
    pub count: u32,
}

impl DroidGroup {
    pub const fn new(position: Position, count: u32) -> Self {
        Self { position, count }
    }
}

/// Remaining droid groups keyed by cell.
///
/// Backed by an ordered map so that two sets holding the same groups compare
/// and hash equal no matter how they were built. Groups with a zero count are
/// never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<DroidGroup>", into = "Vec<DroidGroup>")
)]
pub struct DroidSet {
    groups: BTreeMap<Position, u32>,
}

impl DroidSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from groups. Repeated positions are merged by summing
    /// their counts; empty groups are dropped.
    pub fn from_groups<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = DroidGroup>,
    {
        let mut set = Self::new();
        for group in groups {
            set.insert(group);
        }
        set
    }

    pub fn insert(&mut self, group: DroidGroup) {
        if group.count == 0 {
            return;
        }
        *self.groups.entry(group.position).or_default() += group.count;
    }

    pub fn count_at(&self, position: Position) -> Option<u32> {
        self.groups.get(&position).copied()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.groups.contains_key(&position)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of individual droids across all groups.
    pub fn total_droids(&self) -> u64 {
        self.groups.values().map(|&count| u64::from(count)).sum()
    }

    /// Iterates over groups in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = DroidGroup> + '_ {
        self.groups
            .iter()
            .map(|(&position, &count)| DroidGroup::new(position, count))
    }

    /// Kills one droid at `position`, removing the group when it empties.
    ///
    /// Returns the count left on the cell, or `None` if no group was there.
    pub fn strike_one(&mut self, position: Position) -> Option<u32> {
        let count = self.groups.get_mut(&position)?;
        *count -= 1;
        let left = *count;
        if left == 0 {
            self.groups.remove(&position);
        }
        Some(left)
    }

    /// Removes the whole group at `position`, returning how many droids it held.
    pub fn clear_cell(&mut self, position: Position) -> Option<u32> {
        self.groups.remove(&position)
    }
}

impl From<Vec<DroidGroup>> for DroidSet {
    fn from(groups: Vec<DroidGroup>) -> Self {
        Self::from_groups(groups)
    }
}

impl From<DroidSet> for Vec<DroidGroup> {
    fn from(set: DroidSet) -> Self {
        set.iter().collect()
    }
}

impl FromIterator<DroidGroup> for DroidSet {
    fn from_iter<I: IntoIterator<Item = DroidGroup>>(iter: I) -> Self {
        Self::from_groups(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_repeated_positions() {
        let set = DroidSet::from_groups([
            DroidGroup::new(Position::new(1, 1), 2),
            DroidGroup::new(Position::new(1, 1), 3),
            DroidGroup::new(Position::new(0, 0), 0),
        ]);

        assert_eq!(set.len(), 1);
        assert_eq!(set.count_at(Position::new(1, 1)), Some(5));
        assert!(!set.contains(Position::ORIGIN));
    }

    #[test]
    fn strike_one_removes_emptied_group() {
        let mut set = DroidSet::from_groups([DroidGroup::new(Position::new(2, 0), 2)]);

        assert_eq!(set.strike_one(Position::new(2, 0)), Some(1));
        assert_eq!(set.count_at(Position::new(2, 0)), Some(1));
        assert_eq!(set.strike_one(Position::new(2, 0)), Some(0));
        assert!(set.is_empty());
        assert_eq!(set.strike_one(Position::new(2, 0)), None);
    }

    #[test]
    fn clear_cell_ignores_count() {
        let mut set = DroidSet::from_groups([
            DroidGroup::new(Position::new(3, 3), 6),
            DroidGroup::new(Position::new(0, 3), 1),
        ]);

        assert_eq!(set.clear_cell(Position::new(3, 3)), Some(6));
        assert_eq!(set.len(), 1);
        assert_eq!(set.total_droids(), 1);
    }

    #[test]
    fn iterates_in_position_order() {
        let set: DroidSet = [
            DroidGroup::new(Position::new(5, 0), 1),
            DroidGroup::new(Position::new(-1, 4), 1),
            DroidGroup::new(Position::new(2, 2), 1),
        ]
        .into_iter()
        .collect();

        let order: Vec<Position> = set.iter().map(|g| g.position).collect();
        assert_eq!(
            order,
            vec![Position::new(-1, 4), Position::new(2, 2), Position::new(5, 0)]
        );
    }
}
