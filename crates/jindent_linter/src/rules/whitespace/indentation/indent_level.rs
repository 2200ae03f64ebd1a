//! Sets of acceptable indentation columns.

use std::collections::BTreeSet;
use std::fmt;

/// One or more columns a line may start at.
///
/// Values never change after construction; every operation returns a new set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentLevel {
    levels: BTreeSet<i32>,
}

impl IndentLevel {
    pub fn new(indent: i32) -> Self {
        Self {
            levels: BTreeSet::from([indent]),
        }
    }

    /// Every level shifted by `offset`.
    pub fn with_offset(&self, offset: i32) -> Self {
        Self {
            levels: self.levels.iter().map(|level| level + offset).collect(),
        }
    }

    /// This set plus the given columns.
    pub fn add_acceptable(&self, additions: &[i32]) -> Self {
        let mut levels = self.levels.clone();
        levels.extend(additions);
        Self { levels }
    }

    /// Union of two sets.
    pub fn combine(&self, other: &IndentLevel) -> Self {
        Self {
            levels: self.levels.union(&other.levels).copied().collect(),
        }
    }

    pub fn is_multi_level(&self) -> bool {
        self.levels.len() > 1
    }

    pub fn is_acceptable(&self, indent: i32) -> bool {
        self.levels.contains(&indent)
    }

    /// Membership for wrapped lines: exact under a strict condition,
    /// otherwise anything at or right of the smallest level.
    pub fn is_acceptable_with_force_strict(&self, indent: i32, force_strict: bool) -> bool {
        if force_strict {
            self.is_acceptable(indent)
        } else {
            !self.is_greater_than(indent)
        }
    }

    /// True when even the smallest level is right of `indent`.
    pub fn is_greater_than(&self, indent: i32) -> bool {
        self.first_level() > indent
    }

    pub fn first_level(&self) -> i32 {
        self.levels.first().copied().unwrap_or(0)
    }

    pub fn levels(&self) -> impl Iterator<Item = i32> + '_ {
        self.levels.iter().copied()
    }
}

impl fmt::Display for IndentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_multi_level() {
            let rendered: Vec<String> = self.levels().map(|level| level.to_string()).collect();
            write!(f, "[{}]", rendered.join(", "))
        } else {
            write!(f, "{}", self.first_level())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_level() {
        let level = IndentLevel::new(4);
        assert!(level.is_acceptable(4));
        assert!(!level.is_acceptable(0));
        assert!(!level.is_multi_level());
        assert_eq!(level.to_string(), "4");
    }

    #[test]
    fn test_offset_shifts_every_level() {
        let level = IndentLevel::new(4).add_acceptable(&[10]).with_offset(4);
        assert_eq!(level.levels().collect::<Vec<_>>(), vec![8, 14]);
        assert_eq!(level.first_level(), 8);
    }

    #[test]
    fn test_offset_keeps_cardinality() {
        let bases = [
            IndentLevel::new(0),
            IndentLevel::new(4).add_acceptable(&[9]),
            IndentLevel::new(2).add_acceptable(&[6, 13, 21]),
        ];
        for base in &bases {
            for offset in [-4, 0, 2, 8] {
                let shifted = base.with_offset(offset);
                assert_eq!(shifted.levels().count(), base.levels().count());
                assert!(shifted.levels().all(|level| base.is_acceptable(level - offset)));
                assert_eq!(shifted.is_multi_level(), base.is_multi_level());
            }
        }
    }

    #[test]
    fn test_force_strict_acceptance() {
        let level = IndentLevel::new(8);
        assert!(level.is_acceptable_with_force_strict(8, true));
        assert!(!level.is_acceptable_with_force_strict(12, true));
        assert!(level.is_acceptable_with_force_strict(12, false));
        assert!(!level.is_acceptable_with_force_strict(6, false));
    }

    #[test]
    fn test_multi_level_display() {
        let level = IndentLevel::new(31).combine(&IndentLevel::new(8));
        assert!(level.is_multi_level());
        assert_eq!(level.to_string(), "[8, 31]");
    }

    #[test]
    fn test_is_greater_than_uses_smallest_level() {
        let level = IndentLevel::new(8).add_acceptable(&[4]);
        assert!(level.is_greater_than(2));
        assert!(!level.is_greater_than(4));
        assert!(!level.is_greater_than(6));
    }

    #[test]
    fn test_duplicates_collapse() {
        let level = IndentLevel::new(4).add_acceptable(&[4, 8, 4]);
        assert_eq!(level.levels().count(), 2);
        assert_eq!(level, IndentLevel::new(8).combine(&IndentLevel::new(4)));
    }
}
