use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::block::Block;
use crate::data::{
    BlockKind, Dir, Orientation, Pos, BOARD_SIZE, DELIVERY_LENGTH, EXIT_ROW, MAX_GRID,
};
use crate::vec2d::Vec2d;

/// Occupancy grid value marking an unoccupied cell.
const EMPTY: u8 = 255;

/// Display labels by block list position; the delivery vehicle is
/// conventionally placed first. Presentation only - never part of equality
/// or fingerprints.
const LABELS: &[u8] = b"*ABCDEFGHIJKLMNOPQRSTUVWXY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A block specification violates grid bounds or length limits.
    InvalidPlacement,
    /// An attempted placement collides with an occupied cell.
    Overlap,
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            BoardError::InvalidPlacement => {
                write!(f, "invalid placement - block does not fit the grid")
            }
            BoardError::Overlap => write!(f, "overlap - target cells are already occupied"),
        }
    }
}

impl Error for BoardError {}

/// Canonical identity of a board state: the multiset of block codes in
/// ascending order. Boards holding the same blocks in any internal list
/// order fingerprint identically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(Vec<u16>);

impl Fingerprint {
    pub fn codes(&self) -> &[u16] {
        &self.0
    }
}

/// One full puzzle state: a list of blocks plus the derived occupancy grid.
///
/// Boards are snapshots - `successors` returns new boards and existing ones
/// never change once built. States are compared by fingerprint only.
#[derive(Clone)]
pub struct Board {
    size: u8,
    blocks: Vec<Block>,
    grid: Vec2d<u8>,
}

impl Board {
    pub fn new() -> Board {
        Board::with_size(BOARD_SIZE)
    }

    pub fn with_size(size: u8) -> Board {
        assert!(size >= 1 && size <= MAX_GRID);
        Board {
            size,
            blocks: Vec::new(),
            grid: Vec2d::new_square(size, EMPTY),
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// True iff every cell the block would occupy is in bounds and empty.
    /// Side-effect-free query.
    pub fn is_placeable(&self, block: Block) -> bool {
        self.in_bounds(block) && block.cells().all(|pos| self.grid[pos] == EMPTY)
    }

    fn in_bounds(&self, block: Block) -> bool {
        let end = match block.orientation {
            Orientation::Horizontal => block.pos.c + block.length,
            Orientation::Vertical => block.pos.r + block.length,
        };
        block.pos.r < self.size && block.pos.c < self.size && end <= self.size
    }

    fn has_delivery(&self) -> bool {
        self.blocks.iter().any(|b| b.kind == BlockKind::Delivery)
    }

    /// Appends the block and fills its cells in the occupancy grid.
    pub fn place(&mut self, block: Block) -> Result<(), BoardError> {
        if !self.in_bounds(block) {
            return Err(BoardError::InvalidPlacement);
        }
        if block.kind == BlockKind::Delivery {
            // exactly one delivery vehicle, horizontal on the exit row
            if self.has_delivery()
                || block.orientation != Orientation::Horizontal
                || block.length != DELIVERY_LENGTH
                || block.pos.r != EXIT_ROW
            {
                return Err(BoardError::InvalidPlacement);
            }
        }
        if block.cells().any(|pos| self.grid[pos] != EMPTY) {
            return Err(BoardError::Overlap);
        }
        let idx = self.blocks.len() as u8;
        for pos in block.cells() {
            self.grid[pos] = idx;
        }
        self.blocks.push(block);
        Ok(())
    }

    pub fn add_delivery(&mut self, c: u8) -> Result<(), BoardError> {
        self.place(Block::new(
            EXIT_ROW,
            c,
            DELIVERY_LENGTH,
            BlockKind::Delivery,
            Orientation::Horizontal,
        )?)
    }

    pub fn add_car_a(&mut self, r: u8, c: u8) -> Result<(), BoardError> {
        self.place(Block::new(r, c, 2, BlockKind::CarA, Orientation::Horizontal)?)
    }

    pub fn add_car_b(&mut self, r: u8, c: u8) -> Result<(), BoardError> {
        self.place(Block::new(r, c, 2, BlockKind::CarB, Orientation::Vertical)?)
    }

    pub fn add_truck(&mut self, r: u8, c: u8, orientation: Orientation) -> Result<(), BoardError> {
        self.place(Block::new(r, c, 3, BlockKind::Truck, orientation)?)
    }

    pub fn add_obstacle(&mut self, r: u8, c: u8) -> Result<(), BoardError> {
        self.place(Block::new(
            r,
            c,
            1,
            BlockKind::Obstacle,
            Orientation::Horizontal,
        )?)
    }

    /// True iff the delivery vehicle has reached the exit edge.
    pub fn is_solved(&self) -> bool {
        self.blocks
            .iter()
            .any(|b| b.kind == BlockKind::Delivery && b.pos.c == 0)
    }

    /// One step of the addressed block, or None when the step is blocked by
    /// the border or an occupied cell. Obstacles and off-axis directions
    /// yield no step either - a frequent, expected outcome, not an error.
    pub fn try_step(&self, idx: usize, dir: Dir) -> Option<Block> {
        let block = self.blocks[idx];
        if !block.is_movable() || dir.axis() != block.orientation {
            return None;
        }
        let target = match dir {
            Dir::Left => {
                if block.pos.c == 0 {
                    return None;
                }
                Pos::new(block.pos.r, block.pos.c - 1)
            }
            Dir::Right => {
                let c = block.pos.c + block.length;
                if c == self.size {
                    return None;
                }
                Pos::new(block.pos.r, c)
            }
            Dir::Up => {
                if block.pos.r == 0 {
                    return None;
                }
                Pos::new(block.pos.r - 1, block.pos.c)
            }
            Dir::Down => {
                let r = block.pos.r + block.length;
                if r == self.size {
                    return None;
                }
                Pos::new(r, block.pos.c)
            }
        };
        if self.grid[target] != EMPTY {
            return None;
        }
        Some(block.translate(dir))
    }

    /// All boards one legal step away. Each movable block is tried in both
    /// of its axis directions exactly once per call.
    pub fn successors(&self) -> Vec<(usize, Dir, Board)> {
        let mut next = Vec::new();
        for (idx, block) in self.blocks.iter().enumerate() {
            if !block.is_movable() {
                continue;
            }
            let dirs = match block.orientation {
                Orientation::Horizontal => [Dir::Left, Dir::Right],
                Orientation::Vertical => [Dir::Up, Dir::Down],
            };
            for &dir in &dirs {
                if let Some(moved) = self.try_step(idx, dir) {
                    next.push((idx, dir, self.replace(idx, moved)));
                }
            }
        }
        next
    }

    /// Snapshot with one block's position swapped out; only the moved
    /// block's cells are rewritten.
    fn replace(&self, idx: usize, block: Block) -> Board {
        let mut board = self.clone();
        for pos in board.blocks[idx].cells() {
            board.grid[pos] = EMPTY;
        }
        for pos in block.cells() {
            board.grid[pos] = idx as u8;
        }
        board.blocks[idx] = block;
        board
    }

    pub fn fingerprint(&self) -> Fingerprint {
        let mut codes: Vec<u16> = self.blocks.iter().map(|b| b.code()).collect();
        codes.sort_unstable();
        Fingerprint(codes)
    }

    fn label(&self, idx: u8) -> char {
        if self.blocks[usize::from(idx)].kind == BlockKind::Obstacle {
            '-'
        } else {
            LABELS.get(usize::from(idx)).map(|&b| b as char).unwrap_or('?')
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Display for Board {
    /// Framed double-width diagram with row/column rulers; the missing left
    /// border on the exit row marks the exit.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut ruler = String::from(" ");
        for c in 0..self.size {
            ruler.push_str(&format!("  {}", c));
        }
        let border = "-".repeat(3 * usize::from(self.size) - 1);

        writeln!(f, "{}", ruler)?;
        writeln!(f, " +{}+", border)?;
        for r in 0..self.size {
            let gap = self.has_delivery() && r == EXIT_ROW;
            write!(f, "{}{}", r, if gap { ' ' } else { '|' })?;
            for c in 0..self.size {
                let idx = self.grid[Pos::new(r, c)];
                let ch = if idx == EMPTY { ' ' } else { self.label(idx) };
                write!(f, "{}{}", ch, ch)?;
                if c + 1 < self.size {
                    write!(f, " ")?;
                }
            }
            writeln!(f, "|{}", r)?;
        }
        writeln!(f, " +{}+", border)?;
        writeln!(f, "{}", ruler)
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} blocks on a {}x{} grid",
            self.blocks.len(),
            self.size,
            self.size
        )?;
        for (idx, block) in self.blocks.iter().enumerate() {
            writeln!(
                f,
                "{}: {:?} {:?} at ({},{}) len {} code {:#06x}",
                self.label(idx as u8),
                block.kind,
                block.orientation,
                block.pos.r,
                block.pos.c,
                block.length,
                block.code(),
            )?;
        }
        Ok(())
    }
}
