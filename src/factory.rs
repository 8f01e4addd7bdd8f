//! Fixed example puzzles. Pure data - the boards are built through the same
//! placement API the generator uses.

use crate::board::{Board, BoardError};
use crate::data::Orientation::{Horizontal, Vertical};

pub const NAMES: &[&str] = &["easy", "hard", "harder", "hardest"];

pub fn by_name(name: &str) -> Option<Board> {
    match name {
        "easy" => Some(easy()),
        "hard" => Some(hard()),
        "harder" => Some(harder()),
        "hardest" => Some(hardest()),
        _ => None,
    }
}

fn build<F>(f: F) -> Board
where
    F: FnOnce(&mut Board) -> Result<(), BoardError>,
{
    let mut board = Board::new();
    f(&mut board).expect("example board data is valid");
    board
}

/// ```text
///    0  1  2  3  4  5
///  +-----------------+
/// 0|AA    CC GG GG GG|0
/// 1|AA BB CC         |1
/// 2 AA BB       ** **|2
/// 3|      FF FF FF HH|3
/// 4|      DD       HH|4
/// 5|EE EE DD       HH|5
///  +-----------------+
///    0  1  2  3  4  5
/// ```
pub fn easy() -> Board {
    build(|b| {
        b.add_delivery(4)?;
        b.add_truck(0, 0, Vertical)?;
        b.add_car_b(1, 1)?;
        b.add_car_b(0, 2)?;
        b.add_car_b(4, 2)?;
        b.add_car_a(5, 0)?;
        b.add_truck(3, 2, Horizontal)?;
        b.add_truck(0, 3, Horizontal)?;
        b.add_truck(3, 5, Vertical)
    })
}

pub fn hard() -> Board {
    build(|b| {
        b.add_delivery(4)?;
        b.add_car_a(0, 0)?;
        b.add_car_a(3, 0)?;
        b.add_car_a(5, 1)?;
        b.add_car_b(4, 0)?;
        b.add_car_b(1, 1)?;
        b.add_car_b(0, 2)?;
        b.add_car_b(2, 2)?;
        b.add_truck(4, 1, Horizontal)?;
        b.add_car_b(2, 3)?;
        b.add_car_a(1, 3)?;
        b.add_car_a(3, 4)?;
        b.add_car_b(4, 5)
    })
}

pub fn harder() -> Board {
    build(|b| {
        b.add_delivery(4)?;
        b.add_truck(0, 0, Horizontal)?;
        b.add_truck(1, 0, Vertical)?;
        b.add_truck(1, 1, Horizontal)?;
        b.add_car_b(2, 1)?;
        b.add_car_b(2, 2)?;
        b.add_car_b(2, 3)?;
        b.add_car_b(4, 2)?;
        b.add_car_b(0, 5)?;
        b.add_car_a(4, 0)?;
        b.add_car_a(5, 3)?;
        b.add_car_a(3, 4)
    })
}

pub fn hardest() -> Board {
    build(|b| {
        b.add_delivery(2)?;
        b.add_truck(0, 0, Vertical)?;
        b.add_truck(0, 1, Vertical)?;
        b.add_car_a(4, 0)?;
        b.add_car_a(5, 0)?;
        b.add_car_a(5, 2)?;
        b.add_car_a(3, 4)?;
        b.add_car_a(1, 3)?;
        b.add_car_b(0, 2)?;
        b.add_car_b(3, 3)?;
        b.add_car_b(4, 4)?;
        b.add_car_b(1, 5)?;
        b.add_truck(0, 3, Horizontal)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BlockKind;

    #[test]
    fn all_names_resolve() {
        for &name in NAMES {
            let board = by_name(name).unwrap();
            let deliveries = board
                .blocks()
                .iter()
                .filter(|b| b.kind == BlockKind::Delivery)
                .count();
            assert_eq!(deliveries, 1, "{}", name);
            assert!(!board.is_solved(), "{}", name);
        }
        assert!(by_name("nonexistent").is_none());
    }

    #[test]
    fn block_counts() {
        assert_eq!(easy().blocks().len(), 9);
        assert_eq!(hard().blocks().len(), 13);
        assert_eq!(harder().blocks().len(), 12);
        assert_eq!(hardest().blocks().len(), 13);
    }

    #[test]
    fn fingerprints_are_stable() {
        for &name in NAMES {
            assert_eq!(
                by_name(name).unwrap().fingerprint(),
                by_name(name).unwrap().fingerprint()
            );
        }
    }
}
