//! Team-qualified pieces and their integer identifiers.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::team::Team;

/// Identifier used for an empty square at the integer boundary.
pub const EMPTY: i8 = -1;

/// Display glyphs indexed by piece identifier.
const SYMBOLS: [char; Piece::COUNT] = [
    '\u{2659}', '\u{2656}', '\u{2658}', '\u{2657}', '\u{2655}', '\u{2654}',
    '\u{265F}', '\u{265C}', '\u{265E}', '\u{265D}', '\u{265B}', '\u{265A}',
];

/// A piece of a given team, stored as its identifier.
///
/// Identifiers 0-5 are White (pawn, rook, knight, bishop, queen, king) and
/// 6-11 are Black in the same order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    /// Number of distinct pieces.
    pub const COUNT: usize = 12;

    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Team::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Team::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Team::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Team::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Team::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Team::White);
    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Team::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Team::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Team::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Team::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Team::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Team::Black);

    /// All pieces in identifier order.
    pub const ALL: [Piece; Piece::COUNT] = [
        Self::WHITE_PAWN,
        Self::WHITE_ROOK,
        Self::WHITE_KNIGHT,
        Self::WHITE_BISHOP,
        Self::WHITE_QUEEN,
        Self::WHITE_KING,
        Self::BLACK_PAWN,
        Self::BLACK_ROOK,
        Self::BLACK_KNIGHT,
        Self::BLACK_BISHOP,
        Self::BLACK_QUEEN,
        Self::BLACK_KING,
    ];

    /// Create a piece from a kind and a team.
    #[inline]
    pub const fn new(kind: PieceKind, team: Team) -> Piece {
        Piece(team as u8 * PieceKind::COUNT as u8 + kind as u8)
    }

    /// Resolve an identifier. [`EMPTY`] and anything outside 0-11 yield `None`.
    #[inline]
    pub const fn from_id(id: i8) -> Option<Piece> {
        if id >= 0 && (id as usize) < Piece::COUNT {
            Some(Piece(id as u8))
        } else {
            None
        }
    }

    /// Parse a layout letter: uppercase is White, lowercase is Black.
    pub fn from_letter(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let team = if c.is_ascii_uppercase() {
            Team::White
        } else {
            Team::Black
        };
        Some(Piece::new(kind, team))
    }

    /// Return the identifier (0-11).
    #[inline]
    pub const fn id(self) -> u8 {
        self.0
    }

    /// Return the team. Identifiers below 6 are White.
    #[inline]
    pub const fn team(self) -> Team {
        if (self.0 as usize) < PieceKind::COUNT {
            Team::White
        } else {
            Team::Black
        }
    }

    /// Return the kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match PieceKind::from_index(self.0 % PieceKind::COUNT as u8) {
            Some(kind) => kind,
            None => PieceKind::King,
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.kind(), PieceKind::King)
    }

    /// Unicode chess glyph for this piece.
    #[inline]
    pub const fn symbol(self) -> char {
        SYMBOLS[self.0 as usize]
    }

    /// Layout letter: uppercase for White, lowercase for Black.
    pub fn letter(self) -> char {
        let c = self.kind().letter();
        match self.team() {
            Team::White => c.to_ascii_uppercase(),
            Team::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.team() {
            Team::White => 'W',
            Team::Black => 'B',
        };
        write!(f, "{}{}", prefix, self.kind().letter().to_ascii_uppercase())
    }
}
