//! Ship definitions, placement validation and damage tracking.

use core::fmt;
use core::str::FromStr;

use crate::common::{ConfigError, ShipError};
use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Cells extend to the right, one column at a time.
    Horizontal,
    /// Cells extend downwards, one row at a time.
    Vertical,
}

impl Orientation {
    /// Both orientations, horizontal first.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

/// Kinds of ship a fleet can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipType {
    Battleship,
    Destroyer,
}

impl ShipType {
    /// Every supported ship type.
    pub const ALL: [ShipType; 2] = [ShipType::Battleship, ShipType::Destroyer];

    /// Ship's name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipType::Battleship => "Battleship",
            ShipType::Destroyer => "Destroyer",
        }
    }

    /// Ship's length.
    pub const fn length(self) -> usize {
        match self {
            ShipType::Battleship => 5,
            ShipType::Destroyer => 4,
        }
    }

    /// Build a fresh, unplaced ship of this type.
    pub fn create(self) -> Ship {
        Ship::new(self.name(), self.length())
    }
}

impl FromStr for ShipType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShipType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnsupportedShipType(s.to_string()))
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship that may be placed once and then takes damage.
///
/// Once placed, the live coordinates shrink as hits land: every hit cell moves
/// from [`Ship::coordinates`] to [`Ship::hits`]. Both sets together form the
/// ship's footprint on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    name: String,
    length: usize,
    coordinates: Option<Vec<Coordinate>>,
    orientation: Option<Orientation>,
    hits: Vec<Coordinate>,
}

impl Ship {
    /// Create an unplaced ship.
    pub fn new(name: impl Into<String>, length: usize) -> Self {
        Self {
            name: name.into(),
            length,
            coordinates: None,
            orientation: None,
            hits: Vec::new(),
        }
    }

    /// Ship's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of cells the ship covers.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Cells not yet hit, in placement order. `None` until placed.
    pub fn coordinates(&self) -> Option<&[Coordinate]> {
        self.coordinates.as_deref()
    }

    /// Orientation chosen at placement.
    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// Cells hit so far, in the order the hits landed.
    pub fn hits(&self) -> &[Coordinate] {
        &self.hits
    }

    /// Place the ship on `coordinates`, which must be exactly `length` cells
    /// running contiguously from the first one along `orientation`.
    ///
    /// Does not check whether the ship was placed before; [`Board`] guards that.
    ///
    /// [`Board`]: crate::Board
    pub fn place(
        &mut self,
        coordinates: &[Coordinate],
        orientation: Orientation,
    ) -> Result<(), ShipError> {
        if !self.are_coordinates_valid(coordinates, orientation) {
            return Err(ShipError::InvalidPlacement);
        }
        self.coordinates = Some(coordinates.to_vec());
        self.orientation = Some(orientation);
        Ok(())
    }

    /// Record a hit on a live cell of this ship.
    pub fn register_hit(&mut self, coordinate: Coordinate) -> Result<(), ShipError> {
        let live = self.coordinates.as_mut().ok_or(ShipError::NotPlaced)?;
        let idx = live
            .iter()
            .position(|c| *c == coordinate)
            .ok_or(ShipError::CoordinateNotOccupied(coordinate))?;
        live.remove(idx);
        self.hits.push(coordinate);
        Ok(())
    }

    /// Returns `true` once placed.
    pub fn has_been_placed(&self) -> bool {
        self.coordinates.is_some()
    }

    /// Check if the ship is sunk (placed and no live cells left).
    pub fn is_sunk(&self) -> bool {
        self.coordinates.as_ref().is_some_and(|live| live.is_empty())
    }

    /// Whether the ship's footprint, hit or not, covers `coordinate`.
    pub fn occupies(&self, coordinate: Coordinate) -> bool {
        match &self.coordinates {
            Some(live) => live.contains(&coordinate) || self.hits.contains(&coordinate),
            None => false,
        }
    }

    fn are_coordinates_valid(&self, coordinates: &[Coordinate], orientation: Orientation) -> bool {
        if coordinates.len() != self.length {
            return false;
        }
        let Some(start) = coordinates.first() else {
            return false;
        };
        coordinates
            .iter()
            .enumerate()
            .all(|(i, c)| start.shifted(orientation, i) == Some(*c))
    }
}
