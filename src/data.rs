use std::fmt;
use std::fmt::{Display, Formatter};

/// Grid dimension of a standard puzzle.
pub const BOARD_SIZE: u8 = 6;

/// Row the delivery vehicle travels along; the exit sits at its left edge.
pub const EXIT_ROW: u8 = 2;

/// The delivery vehicle is always a horizontal length-2 block.
pub const DELIVERY_LENGTH: u8 = 2;

/// Largest supported grid so the 3-bit coordinate fields in block codes
/// can never overflow.
pub const MAX_GRID: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    /// Axis a step in this direction moves along.
    pub fn axis(self) -> Orientation {
        match self {
            Dir::Up | Dir::Down => Orientation::Vertical,
            Dir::Left | Dir::Right => Orientation::Horizontal,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "up"),
            Dir::Down => write!(f, "down"),
            Dir::Left => write!(f, "left"),
            Dir::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// The vehicle that has to reach the exit.
    Delivery,
    /// Length-2 car, placed horizontally by the convenience constructors.
    CarA,
    /// Length-2 car, placed vertically by the convenience constructors.
    CarB,
    /// Length-3 truck, either orientation.
    Truck,
    /// Fixed single-cell obstacle.
    Obstacle,
}

impl BlockKind {
    pub fn is_movable(self) -> bool {
        self != BlockKind::Obstacle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_axes() {
        assert_eq!(Dir::Up.axis(), Orientation::Vertical);
        assert_eq!(Dir::Down.axis(), Orientation::Vertical);
        assert_eq!(Dir::Left.axis(), Orientation::Horizontal);
        assert_eq!(Dir::Right.axis(), Orientation::Horizontal);
    }

    #[test]
    fn only_obstacles_are_fixed() {
        for &kind in &[
            BlockKind::Delivery,
            BlockKind::CarA,
            BlockKind::CarB,
            BlockKind::Truck,
        ] {
            assert!(kind.is_movable());
        }
        assert!(!BlockKind::Obstacle.is_movable());
    }
}
