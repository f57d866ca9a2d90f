use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}
impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
    pub fn symbol(self) -> char {
        match self {
            Player::One => '1',
            Player::Two => '2',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A board coordinate a token can move to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Offset this coordinate, returning `None` if it leaves a `width` x `height` grid.
    pub fn offset(self, drow: i8, dcol: i8, width: u8, height: u8) -> Option<Move> {
        let row = self.row as i16 + drow as i16;
        let col = self.col as i16 + dcol as i16;
        if (0..height as i16).contains(&row) && (0..width as i16).contains(&col) {
            Some(Move::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Euclidean distance between two coordinates.
    pub fn distance(self, other: Move) -> f64 {
        let dr = self.row as f64 - other.row as f64;
        let dc = self.col as f64 - other.col as f64;
        (dr * dr + dc * dc).sqrt()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// Knight jumps, in the order moves are enumerated
pub const KNIGHT_DIRECTIONS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
