//! Board descriptors and the legality oracle that produces them.

mod rules;

pub use rules::ConnectNRules;

use derive_getters::Getters;
use serde::Serialize;

/// A validated `(width, height, n)` triple.
///
/// Only a [`BoardOracle`] can produce one, so holding a `BoardConfig` means
/// the oracle accepted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize)]
pub struct BoardConfig {
    /// Columns on the board.
    width: i32,
    /// Rows on the board.
    height: i32,
    /// Run length required to win.
    n: i32,
}

/// Decides whether a board can host a legal game.
///
/// Implementors answer [`accepts`](BoardOracle::accepts); the provided
/// [`try_build`](BoardOracle::try_build) turns an accepted triple into a
/// [`BoardConfig`]. At minimum non-positive dimensions and an `n` larger than
/// both dimensions must be refused.
pub trait BoardOracle: std::fmt::Debug {
    /// Returns true if the triple describes a playable board.
    fn accepts(&self, width: i32, height: i32, n: i32) -> bool;

    /// Builds a board descriptor, or `None` if the triple is illegal.
    fn try_build(&self, width: i32, height: i32, n: i32) -> Option<BoardConfig> {
        self.accepts(width, height, n)
            .then_some(BoardConfig { width, height, n })
    }
}

impl<T: BoardOracle + ?Sized> BoardOracle for &T {
    fn accepts(&self, width: i32, height: i32, n: i32) -> bool {
        (**self).accepts(width, height, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct SquareOnly;

    impl BoardOracle for SquareOnly {
        fn accepts(&self, width: i32, height: i32, _n: i32) -> bool {
            width == height
        }
    }

    #[test]
    fn try_build_follows_accepts() {
        let board = SquareOnly.try_build(5, 5, 3).expect("square board accepted");
        assert_eq!(*board.width(), 5);
        assert_eq!(*board.height(), 5);
        assert_eq!(*board.n(), 3);
        assert!(SquareOnly.try_build(5, 4, 3).is_none());
    }

    #[test]
    fn reference_delegates() {
        let oracle = &SquareOnly;
        assert!(oracle.try_build(2, 2, 2).is_some());
    }
}
