//! Strategies that put a whole fleet onto a board.

use crate::board::Board;
use crate::common::PlacementError;
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

/// Source of random integers used by placement.
pub trait RandomSource {
    /// Random integer in `min..max_exclusive`. Callers guarantee the range is non-empty.
    fn next_int(&mut self, min: usize, max_exclusive: usize) -> usize;
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn next_int(&mut self, min: usize, max_exclusive: usize) -> usize {
        self.random_range(min..max_exclusive)
    }
}

/// Places ships onto a board.
pub trait ShipPlacementStrategy {
    /// Place every ship of `ships`, in order. The board takes ownership of each one.
    fn place_ships(&mut self, board: &mut Board, ships: Vec<Ship>) -> Result<(), PlacementError>;
}

/// Picks each ship's position uniformly among all legal positions left on the board.
///
/// Ships are placed in the order given, so earlier ships see an emptier board.
#[derive(Debug, Clone)]
pub struct RandomShipPlacement<R> {
    rng: R,
}

impl<R: RandomSource> RandomShipPlacement<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Hand the random source back.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RandomSource> ShipPlacementStrategy for RandomShipPlacement<R> {
    fn place_ships(&mut self, board: &mut Board, ships: Vec<Ship>) -> Result<(), PlacementError> {
        for ship in ships {
            let candidates = legal_positions(board, &ship);
            if candidates.is_empty() {
                log::warn!("no legal position left for {}", ship.name());
                return Err(PlacementError::NoLegalPosition {
                    ship: ship.name().to_string(),
                });
            }
            let (start, orientation) = candidates[self.rng.next_int(0, candidates.len())];
            log::debug!(
                "{}: {} candidate positions, chose {} {:?}",
                ship.name(),
                candidates.len(),
                start,
                orientation
            );
            board.place_ship(ship, start, orientation)?;
        }
        Ok(())
    }
}

/// Every start cell and orientation where `ship` fits right now, scanning
/// columns left to right, rows top to bottom, horizontal before vertical.
pub fn legal_positions(board: &Board, ship: &Ship) -> Vec<(Coordinate, Orientation)> {
    board
        .cells()
        .flat_map(|start| Orientation::ALL.into_iter().map(move |o| (start, o)))
        .filter(|&(start, o)| board.can_place_ship(ship, start, o))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_positions_on_exact_fit_board() {
        let board = Board::new(3, 1);
        let ship = Ship::new("Tug", 3);
        let positions = legal_positions(&board, &ship);
        assert_eq!(
            positions,
            vec![(Coordinate::new('A', 1), Orientation::Horizontal)]
        );
    }

    #[test]
    fn single_cell_ship_counts_both_orientations() {
        let board = Board::new(2, 2);
        let ship = Ship::new("Dinghy", 1);
        assert_eq!(legal_positions(&board, &ship).len(), 8);
    }
}
