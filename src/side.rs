use serde::Deserialize;
use serde::Serialize;

/// One of the two players. White always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
    /// Mover of the 1-indexed ply: White on odd plies, Black on even.
    pub const fn of_ply(ply: usize) -> Self {
        match ply % 2 {
            1 => Self::White,
            _ => Self::Black,
        }
    }
}

impl From<Side> for shakmaty::Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => shakmaty::Color::White,
            Side::Black => shakmaty::Color::Black,
        }
    }
}

impl From<shakmaty::Color> for Side {
    fn from(color: shakmaty::Color) -> Self {
        match color {
            shakmaty::Color::White => Side::White,
            shakmaty::Color::Black => Side::Black,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::White => write!(f, "WHITE"),
            Self::Black => write!(f, "BLACK"),
        }
    }
}
