use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Flat row-major square grid indexed by `Pos`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    size: u8,
}

impl<T: Copy> Vec2d<T> {
    pub(crate) fn new_square(size: u8, default: T) -> Vec2d<T> {
        assert!(size > 0);
        Vec2d {
            data: vec![default; usize::from(size) * usize::from(size)],
            size,
        }
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.data[usize::from(pos.r) * usize::from(self.size) + usize::from(pos.c)]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        &mut self.data[usize::from(pos.r) * usize::from(self.size) + usize::from(pos.c)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_indexing() {
        let mut grid = Vec2d::new_square(3, 0u8);
        grid[Pos::new(0, 2)] = 1;
        grid[Pos::new(2, 0)] = 2;
        assert_eq!(grid[Pos::new(0, 2)], 1);
        assert_eq!(grid[Pos::new(2, 0)], 2);
        assert_eq!(grid[Pos::new(1, 1)], 0);
    }
}
