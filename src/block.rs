use crate::board::BoardError;
use crate::data::{BlockKind, Dir, Orientation, Pos, MAX_GRID};

/// One vehicle or obstacle. Immutable - moving a block produces a new value.
///
/// Blocks have no stable identity beyond their five semantic fields; two
/// blocks with equal fields are interchangeable as far as the search is
/// concerned. Their position in a board's block list is presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub pos: Pos,
    pub length: u8,
    pub orientation: Orientation,
    pub kind: BlockKind,
}

impl Block {
    pub fn new(
        r: u8,
        c: u8,
        length: u8,
        kind: BlockKind,
        orientation: Orientation,
    ) -> Result<Block, BoardError> {
        if r >= MAX_GRID || c >= MAX_GRID || length == 0 || length > 3 {
            return Err(BoardError::InvalidPlacement);
        }
        Ok(Block {
            pos: Pos::new(r, c),
            length,
            orientation,
            kind,
        })
    }

    pub fn is_movable(self) -> bool {
        self.kind.is_movable()
    }

    /// Cells the block occupies, in axis order starting at `pos`.
    pub fn cells(self) -> impl Iterator<Item = Pos> {
        let Pos { r, c } = self.pos;
        let vertical = self.orientation == Orientation::Vertical;
        (0..self.length).map(move |i| {
            if vertical {
                Pos::new(r + i, c)
            } else {
                Pos::new(r, c + i)
            }
        })
    }

    /// Canonical 10-bit position code:
    ///
    /// ```text
    /// | 3 bit | 3 bit | 1 bit    | 2 bit  | 1 bit       |
    /// |   r   |   c   | vertical | length | is_delivery |
    /// ```
    ///
    /// A pure function of the semantic fields and nothing else - blocks that
    /// only differ in their list position get the same code on purpose.
    pub fn code(self) -> u16 {
        let vertical = (self.orientation == Orientation::Vertical) as u16;
        let delivery = (self.kind == BlockKind::Delivery) as u16;
        u16::from(self.pos.r) << 7
            | u16::from(self.pos.c) << 4
            | vertical << 3
            | u16::from(self.length) << 1
            | delivery
    }

    /// The block shifted one cell along its axis. Bounds and collisions are
    /// the board's job; stepping off the grid edge is a caller bug.
    pub fn translate(self, dir: Dir) -> Block {
        debug_assert_eq!(dir.axis(), self.orientation);
        let Pos { r, c } = self.pos;
        let pos = match dir {
            Dir::Up => Pos::new(r - 1, c),
            Dir::Down => Pos::new(r + 1, c),
            Dir::Left => Pos::new(r, c - 1),
            Dir::Right => Pos::new(r, c + 1),
        };
        Block { pos, ..self }
    }
}
