//! Obstacle module - the single roaming hazard cell
//!
//! The obstacle is not part of the grid. It sits on an empty cell and costs a
//! life when the falling piece touches it.

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::types::{Rgb, RAINBOW_COLORS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Obstacle {
    pub x: i8,
    pub y: i8,
    pub color: Rgb,
}

/// Put the obstacle on a uniformly chosen empty cell with a rainbow color.
///
/// Returns `None` when the board has no empty cell.
pub fn place_obstacle(board: &Board, rng: &mut SimpleRng) -> Option<Obstacle> {
    let free = board.free_cells();
    let &(x, y) = rng.pick(&free)?;
    let color = *rng.pick(&RAINBOW_COLORS)?;
    Some(Obstacle { x, y, color })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GRID_HEIGHT;

    const GREY: Rgb = Rgb::new(90, 90, 90);

    #[test]
    fn test_never_lands_on_occupied_cell() {
        let mut rng = SimpleRng::new(3);
        let mut board = Board::new();
        for row in 2..GRID_HEIGHT as usize {
            board.fill_row(row, GREY);
        }
        for _ in 0..200 {
            let o = place_obstacle(&board, &mut rng).unwrap();
            assert!(!board.is_occupied(o.x, o.y));
            assert!(o.y < 2);
        }
    }

    #[test]
    fn test_single_free_cell_is_chosen() {
        let mut rng = SimpleRng::new(11);
        let mut board = Board::new();
        for row in 0..GRID_HEIGHT as usize {
            board.fill_row(row, GREY);
        }
        board.set(6, 8, None).unwrap();

        let o = place_obstacle(&board, &mut rng).unwrap();
        assert_eq!((o.x, o.y), (6, 8));
        assert!(RAINBOW_COLORS.contains(&o.color));
    }

    #[test]
    fn test_full_board_leaves_obstacle_absent() {
        let mut rng = SimpleRng::new(5);
        let mut board = Board::new();
        for row in 0..GRID_HEIGHT as usize {
            board.fill_row(row, GREY);
        }
        assert_eq!(place_obstacle(&board, &mut rng), None);
    }
}
