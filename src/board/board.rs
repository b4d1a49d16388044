//! Board structure: two occupancy masks, one per player

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::bitboard::Bitboard;
use super::{Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Errors from parsing the text form of a board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("unexpected character {0:?} in board text")]
    InvalidChar(char),

    #[error("board text has {0} cells, expected 64")]
    WrongCellCount(usize),
}

/// Game board.
///
/// A cell is never set in both masks, so every cell has exactly one state.
/// `Board` is `Copy`: successor states always get their own snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Player one discs
    one: Bitboard,
    /// Player two discs
    two: Bitboard,
}

impl Board {
    /// Empty board (no discs)
    pub fn new() -> Self {
        Self {
            one: Bitboard::new(),
            two: Bitboard::new(),
        }
    }

    /// Standard opening: four discs in the center, player one on (3,4) and (4,3)
    pub fn initial() -> Self {
        let mut board = Self::new();
        board.place(Pos::new(3, 3), Player::Two);
        board.place(Pos::new(3, 4), Player::One);
        board.place(Pos::new(4, 3), Player::One);
        board.place(Pos::new(4, 4), Player::Two);
        board
    }

    /// Get cell state at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.one.get(pos) {
            Cell::Player1
        } else if self.two.get(pos) {
            Cell::Player2
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.one.get(pos) && !self.two.get(pos)
    }

    /// Put a disc of `player` on `pos`, replacing whatever was there.
    /// No flipping; use `rules::apply_move` for game moves.
    #[inline]
    pub fn place(&mut self, pos: Pos, player: Player) {
        match player {
            Player::One => {
                self.two.clear(pos);
                self.one.set(pos);
            }
            Player::Two => {
                self.one.clear(pos);
                self.two.set(pos);
            }
        }
    }

    /// Set a cell to an arbitrary state
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        match cell.player() {
            Some(player) => self.place(pos, player),
            None => self.remove(pos),
        }
    }

    /// Remove a disc
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        self.one.clear(pos);
        self.two.clear(pos);
    }

    /// Discs of one player
    #[inline]
    pub fn discs(&self, player: Player) -> Bitboard {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }

    /// All occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.one.union(self.two)
    }

    /// Disc count for a player
    #[inline]
    pub fn count(&self, player: Player) -> u32 {
        self.discs(player).count()
    }

    /// Total discs on board
    #[inline]
    pub fn disc_count(&self) -> u32 {
        self.one.count() + self.two.count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// Flat row-major cell list
    pub fn cells(&self) -> [Cell; TOTAL_CELLS] {
        let mut cells = [Cell::Empty; TOTAL_CELLS];
        for (idx, cell) in cells.iter_mut().enumerate() {
            *cell = self.get(Pos::from_index(idx));
        }
        cells
    }

    /// Build a board from a flat row-major cell list
    pub fn from_cells(cells: &[Cell; TOTAL_CELLS]) -> Self {
        let mut board = Self::new();
        for (idx, &cell) in cells.iter().enumerate() {
            board.set(Pos::from_index(idx), cell);
        }
        board
    }

    /// The single cell that went from empty to occupied between `self` and
    /// `later`. `None` if no cell or more than one cell was filled.
    pub fn placed_between(&self, later: &Board) -> Option<Pos> {
        let filled = later.occupied().bits() & !self.occupied().bits();
        if filled.count_ones() == 1 {
            Some(Pos::from_index(filled.trailing_zeros() as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(Pos::new(r as u8, c as u8)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parse 64 cells in row-major order. `.`/`0` empty, `1`/`X` player one,
    /// `2`/`O` player two; whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(TOTAL_CELLS);
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match ch {
                '.' | '0' => Cell::Empty,
                '1' | 'X' | 'x' => Cell::Player1,
                '2' | 'O' | 'o' => Cell::Player2,
                other => return Err(BoardParseError::InvalidChar(other)),
            };
            cells.push(cell);
        }

        let cells: [Cell; TOTAL_CELLS] = cells
            .try_into()
            .map_err(|v: Vec<Cell>| BoardParseError::WrongCellCount(v.len()))?;
        Ok(Board::from_cells(&cells))
    }
}
