use std::fmt;

use crate::error::BoardError;
use crate::movegen::legal_moves_into;
use crate::types::*;

/// An Isolation board.
///
/// Every cell a token has ever occupied stays blocked, including the cell
/// each token currently stands on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    blocked: Vec<bool>,
    locations: [Option<Move>; 2],
    active: Player,
    move_count: u32,
}

impl Board {
    /// Empty board with player one to move.
    pub fn new(width: u8, height: u8) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions {
                width: width as usize,
                height: height as usize,
            });
        }
        Ok(Board {
            width,
            height,
            blocked: vec![false; width as usize * height as usize],
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        })
    }

    /// Builds a board from rows of cells: `.` blank, `X` blocked, `1`/`2` tokens.
    ///
    /// Whitespace inside a row is ignored, so the output of `Display` parses
    /// back. The move count is the number of non-blank cells.
    pub fn from_layout(layout: &str, active: Player) -> Result<Self, BoardError> {
        let rows: Vec<Vec<char>> = layout
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if width == 0 || width > u8::MAX as usize || height > u8::MAX as usize {
            return Err(BoardError::InvalidDimensions { width, height });
        }

        let mut board = Board::new(width as u8, height as u8)?;
        board.active = active;

        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(BoardError::InvalidLayout(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    width
                )));
            }
            for (c, &ch) in row.iter().enumerate() {
                let cell = Move::new(r as u8, c as u8);
                let player = match ch {
                    '.' => continue,
                    'X' | 'x' => None,
                    '1' => Some(Player::One),
                    '2' => Some(Player::Two),
                    other => {
                        return Err(BoardError::InvalidLayout(format!(
                            "unexpected cell '{}' at {}",
                            other, cell
                        )))
                    }
                };
                if let Some(p) = player {
                    if board.locations[p.idx()].is_some() {
                        return Err(BoardError::InvalidLayout(format!(
                            "player {} placed twice",
                            p.symbol()
                        )));
                    }
                    board.locations[p.idx()] = Some(cell);
                }
                let idx = board.index(cell);
                board.blocked[idx] = true;
                board.move_count += 1;
            }
        }
        Ok(board)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn inactive_player(&self) -> Player {
        self.active.other()
    }

    /// Number of moves made so far (zero exactly at the initial position).
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn player_location(&self, player: Player) -> Option<Move> {
        self.locations[player.idx()]
    }

    #[inline]
    fn index(&self, cell: Move) -> usize {
        cell.row as usize * self.width as usize + cell.col as usize
    }

    pub fn in_bounds(&self, cell: Move) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    pub fn is_blank(&self, cell: Move) -> bool {
        self.in_bounds(cell) && !self.blocked[self.index(cell)]
    }

    /// Blank cells in row-major order.
    pub fn blank_cells(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(self.blocked.len());
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = Move::new(row, col);
                if !self.blocked[self.index(cell)] {
                    out.push(cell);
                }
            }
        }
        out
    }

    pub fn blank_cell_count(&self) -> usize {
        self.blocked.iter().filter(|b| !**b).count()
    }

    /// Legal moves for `player`, as if it were that player's turn.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        let mut out = Vec::with_capacity(8);
        legal_moves_into(self, player, &mut out);
        out
    }

    /// Legal moves for the player to move.
    pub fn active_moves(&self) -> Vec<Move> {
        self.legal_moves(self.active)
    }

    /// The player to move loses once it has no legal moves.
    pub fn is_loser(&self, player: Player) -> bool {
        player == self.active && self.active_moves().is_empty()
    }

    pub fn is_winner(&self, player: Player) -> bool {
        player == self.inactive_player() && self.active_moves().is_empty()
    }

    /// Applies `mv` for the active player after checking it is legal.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        if !self.active_moves().contains(&mv) {
            return Err(BoardError::IllegalMove {
                mv,
                player: self.active,
            });
        }
        self.place(mv);
        Ok(())
    }

    /// Returns a new board with `mv` applied, leaving `self` untouched.
    ///
    /// `mv` must come from the active player's legal moves.
    pub fn forecast_move(&self, mv: Move) -> Board {
        debug_assert!(
            self.active_moves().contains(&mv),
            "forecast of illegal move {mv}"
        );
        let mut next = self.clone();
        next.place(mv);
        next
    }

    fn place(&mut self, mv: Move) {
        let idx = self.index(mv);
        self.blocked[idx] = true;
        self.locations[self.active.idx()] = Some(mv);
        self.active = self.active.other();
        self.move_count += 1;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            let mut cells = Vec::with_capacity(self.width as usize);
            for col in 0..self.width {
                let cell = Move::new(row, col);
                let ch = if self.locations[0] == Some(cell) {
                    Player::One.symbol()
                } else if self.locations[1] == Some(cell) {
                    Player::Two.symbol()
                } else if self.blocked[self.index(cell)] {
                    'X'
                } else {
                    '.'
                };
                cells.push(ch.to_string());
            }
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
