use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    /// Signed encoding used by the negamax search: +1 for X, -1 for O.
    pub fn sign(&self) -> Option<i32> {
        match self {
            Mark::X => Some(1),
            Mark::O => Some(-1),
            Mark::Empty => None,
        }
    }

    pub fn from_sign(side: i32) -> Mark {
        if side > 0 { Mark::X } else { Mark::O }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

/// A completed triplet, kept for display highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps_marks() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_sign_round_trips_through_from_sign() {
        assert_eq!(Mark::from_sign(Mark::X.sign().unwrap()), Mark::X);
        assert_eq!(Mark::from_sign(Mark::O.sign().unwrap()), Mark::O);
    }
}
