//! Probability-based guessing for computer players.

use std::collections::{HashMap, HashSet};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::common::GuessResult;
use crate::coordinate::Coordinate;
use crate::player::Player;
use crate::ship::Orientation;

/// Placements covering known hits are weighted by `HIT_BIAS^hits`, so squares
/// next to confirmed hits stand out.
const HIT_BIAS: f64 = 10.0;

/// Lower temperature biases sampling towards the likeliest cells.
const TEMPERATURE: f64 = 0.5;

/// Density matrix indexed `[column][row - 1]`.
pub type Density = Vec<Vec<f64>>;

/// What a computer player has learned about one opponent's board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShotLog {
    hits: HashSet<Coordinate>,
    misses: HashSet<Coordinate>,
}

impl ShotLog {
    pub fn hits(&self) -> &HashSet<Coordinate> {
        &self.hits
    }

    pub fn misses(&self) -> &HashSet<Coordinate> {
        &self.misses
    }

    pub fn has_tried(&self, coordinate: Coordinate) -> bool {
        self.hits.contains(&coordinate) || self.misses.contains(&coordinate)
    }
}

/// Computer player's brain: its own random source plus a shot log per opponent.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    rng: SmallRng,
    logs: HashMap<u32, ShotLog>,
}

impl ComputerPlayer {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            rng,
            logs: HashMap::new(),
        }
    }

    /// Deterministic computer player for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Shot log against the opponent numbered `opponent`, if any shots were fired.
    pub fn shot_log(&self, opponent: u32) -> Option<&ShotLog> {
        self.logs.get(&opponent)
    }

    /// Choose a cell of `opponent`'s board to fire at.
    ///
    /// Returns `None` only when the opponent has no board or the board has no cells.
    pub fn choose_guess(&mut self, opponent: &Player) -> Option<Coordinate> {
        let board = opponent.board()?;
        let empty = ShotLog::default();
        let shots = self.logs.get(&opponent.number()).unwrap_or(&empty);

        let pdf = calc_pdf(board, shots);
        if let Some(guess) = sample_pdf(board, &pdf, TEMPERATURE, &mut self.rng) {
            log::debug!("{} density pick {}", opponent, guess);
            return Some(guess);
        }

        let untried: Vec<Coordinate> = board.cells().filter(|c| !shots.has_tried(*c)).collect();
        if untried.is_empty() {
            // Every cell was tried already; any in-bounds cell keeps the game moving.
            return board.cells().next();
        }
        let guess = untried[self.rng.random_range(0..untried.len())];
        log::debug!("{} uniform pick {}", opponent, guess);
        Some(guess)
    }

    /// Record the outcome of a shot at the opponent numbered `opponent`.
    pub fn handle_guess_result(&mut self, opponent: u32, guess: Coordinate, result: &GuessResult) {
        let shots = self.logs.entry(opponent).or_default();
        if result.is_hit() {
            shots.hits.insert(guess);
        } else {
            shots.misses.insert(guess);
        }
    }
}

/// Relative likelihood that each untried cell holds part of a ship still afloat.
///
/// Only the lengths of unsunk ships are used, and cells belonging to sunk ships
/// are treated like misses. Tried cells always get zero weight.
pub fn calc_pdf(board: &Board, shots: &ShotLog) -> Density {
    let width = board.width() as usize;
    let height = board.height() as usize;
    let mut matrix = vec![vec![0.0f64; height]; width];

    let sunk: HashSet<Coordinate> = board
        .ships()
        .iter()
        .filter(|s| s.is_sunk())
        .flat_map(|s| s.hits().iter().copied())
        .collect();
    let blocked = |c: &Coordinate| shots.misses.contains(c) || sunk.contains(c);
    let live_hit = |c: &Coordinate| shots.hits.contains(c) && !sunk.contains(c);

    let lengths = board
        .ships()
        .iter()
        .filter(|s| !s.is_sunk())
        .map(|s| s.length())
        .filter(|&len| len > 0);

    for len in lengths {
        for start in board.cells() {
            for orientation in Orientation::ALL {
                let cells: Vec<Coordinate> = (0..len)
                    .filter_map(|k| start.shifted(orientation, k))
                    .filter(|c| board.is_coordinate_in_bounds(*c))
                    .collect();
                if cells.len() != len || cells.iter().any(|c| blocked(c)) {
                    continue;
                }
                let n_hits = cells.iter().filter(|c| live_hit(*c)).count();
                let weight = HIT_BIAS.powi(n_hits as i32);
                for c in cells.iter().filter(|c| !shots.has_tried(**c)) {
                    if let Some((col, row)) = cell_index(c) {
                        matrix[col][row] += weight;
                    }
                }
            }
        }
    }

    normalize(matrix)
}

fn normalize(mut matrix: Density) -> Density {
    let total: f64 = matrix.iter().flatten().sum();
    if total > 0.0 {
        for v in matrix.iter_mut().flatten() {
            *v /= total;
        }
    }
    matrix
}

/// Sample a cell from `pdf` with the given temperature. Returns `None` if the
/// density carries no weight.
pub fn sample_pdf<R: Rng + ?Sized>(
    board: &Board,
    pdf: &Density,
    temperature: f64,
    rng: &mut R,
) -> Option<Coordinate> {
    let adjusted: Vec<(Coordinate, f64)> = board
        .cells()
        .filter_map(|c| {
            let (col, row) = cell_index(&c)?;
            let p = *pdf.get(col)?.get(row)?;
            (p > 0.0).then(|| (c, p.powf(1.0 / temperature)))
        })
        .collect();
    let total: f64 = adjusted.iter().map(|(_, w)| w).sum();
    if total <= 0.0 {
        return None;
    }

    let threshold: f64 = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (c, w) in &adjusted {
        cumulative += w;
        if threshold < cumulative {
            return Some(*c);
        }
    }
    adjusted.last().map(|(c, _)| *c)
}

fn cell_index(c: &Coordinate) -> Option<(usize, usize)> {
    let col = c.column_index()? as usize;
    let row = (c.row() as usize).checked_sub(1)?;
    Some((col, row))
}
