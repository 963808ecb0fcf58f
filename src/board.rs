//! A player's board: bounds, ship placement and guess lookup.

use core::fmt;

use crate::common::BoardError;
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

/// Board owned by one player, holding the ships placed on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u32,
    height: u32,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty board. Columns run `A..` for `width` letters, rows `1..=height`.
    pub fn new(width: u32, height: u32) -> Self {
        Board {
            width,
            height,
            ships: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Ships on the board, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships that are not sunk.
    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Place `ship` with its first cell at `start`, extending along `orientation`.
    /// The board takes ownership of the ship on success.
    pub fn place_ship(
        &mut self,
        mut ship: Ship,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if ship.has_been_placed() {
            return Err(BoardError::AlreadyPlaced);
        }
        let coords = self
            .legal_coordinates(&ship, start, orientation)
            .ok_or(BoardError::IllegalPosition)?;
        ship.place(&coords, orientation)?;
        log::debug!(
            "placed {} at {} ({:?}) on {}x{} board",
            ship.name(),
            start,
            orientation,
            self.width,
            self.height
        );
        self.ships.push(ship);
        Ok(())
    }

    /// Returns `true` if `ship` could be placed at `start` along `orientation`.
    pub fn can_place_ship(&self, ship: &Ship, start: Coordinate, orientation: Orientation) -> bool {
        self.legal_coordinates(ship, start, orientation).is_some()
    }

    /// First ship, in placement order, whose footprint covers `coordinate`.
    /// Cells already hit still count as part of the footprint.
    pub fn get_ship_at(&self, coordinate: Coordinate) -> Option<&Ship> {
        self.ships.iter().find(|s| s.occupies(coordinate))
    }

    pub(crate) fn get_ship_at_mut(&mut self, coordinate: Coordinate) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|s| s.occupies(coordinate))
    }

    pub fn is_coordinate_occupied(&self, coordinate: Coordinate) -> bool {
        self.get_ship_at(coordinate).is_some()
    }

    /// Column within `A..A+width`, row within `1..=height`.
    pub fn is_coordinate_in_bounds(&self, coordinate: Coordinate) -> bool {
        let column_ok = coordinate
            .column_index()
            .is_some_and(|idx| idx < self.width);
        column_ok && coordinate.row() >= 1 && coordinate.row() <= self.height
    }

    /// Every cell on the board, column by column (`A1, A2, .., B1, ..`).
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.width).flat_map(move |col| {
            (1..=self.height).filter_map(move |row| Coordinate::from_index(col, row))
        })
    }

    /// Cells a ship of this length would cover from `start`. Shared by the
    /// legality check and the commit.
    fn prospective_coordinates(
        ship: &Ship,
        start: Coordinate,
        orientation: Orientation,
    ) -> Option<Vec<Coordinate>> {
        (0..ship.length())
            .map(|i| start.shifted(orientation, i))
            .collect()
    }

    fn legal_coordinates(
        &self,
        ship: &Ship,
        start: Coordinate,
        orientation: Orientation,
    ) -> Option<Vec<Coordinate>> {
        if ship.length() == 0 {
            return None;
        }
        let coords = Self::prospective_coordinates(ship, start, orientation)?;
        let legal = coords
            .iter()
            .all(|c| self.is_coordinate_in_bounds(*c) && !self.is_coordinate_occupied(*c));
        legal.then_some(coords)
    }
}

impl fmt::Display for Board {
    /// Renders the grid: `.` water, the ship's initial for intact cells, `X` for hits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.width {
            match Coordinate::from_index(col, 1) {
                Some(c) => write!(f, " {}", c.column())?,
                None => write!(f, " ?")?,
            }
        }
        writeln!(f)?;
        for row in 1..=self.height {
            write!(f, "{:>3}", row)?;
            for col in 0..self.width {
                let ch = match Coordinate::from_index(col, row) {
                    Some(c) => match self.get_ship_at(c) {
                        Some(ship) if ship.hits().contains(&c) => 'X',
                        Some(ship) => ship.name().chars().next().unwrap_or('S'),
                        None => '.',
                    },
                    None => '?',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
