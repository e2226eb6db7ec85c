//! The two sides of the board.

use std::fmt;
use std::ops::Not;

/// A team: White or Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Team {
    White = 0,
    Black = 1,
}

impl Team {
    /// Total number of teams.
    pub const COUNT: usize = 2;

    /// All teams in index order.
    pub const ALL: [Team; 2] = [Team::White, Team::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposing team.
    #[inline]
    pub const fn flip(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Row direction this team's pawns advance in.
    ///
    /// White starts on row 0 and moves toward increasing rows; Black starts on
    /// row 7 and moves toward decreasing rows.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    /// Row the team's pawns start on. A pawn here may advance two squares.
    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Team::White => 1,
            Team::Black => 6,
        }
    }

    /// Human-readable name ("White" / "Black").
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Team::White => "White",
            Team::Black => "Black",
        }
    }
}

impl Not for Team {
    type Output = Team;

    #[inline]
    fn not(self) -> Team {
        self.flip()
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Team;

    #[test]
    fn index_values() {
        assert_eq!(Team::White.index(), 0);
        assert_eq!(Team::Black.index(), 1);
    }

    #[test]
    fn flip_and_not() {
        assert_eq!(Team::White.flip(), Team::Black);
        assert_eq!(!Team::Black, Team::White);
        assert_eq!(!!Team::White, Team::White);
    }

    #[test]
    fn forward_directions_oppose() {
        assert_eq!(Team::White.forward(), 1);
        assert_eq!(Team::Black.forward(), -1);
        assert_eq!(Team::White.forward() + Team::Black.forward(), 0);
    }

    #[test]
    fn home_ranks() {
        assert_eq!(Team::White.home_rank(), 1);
        assert_eq!(Team::Black.home_rank(), 6);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Team::White), "White");
        assert_eq!(format!("{}", Team::Black), "Black");
    }
}
