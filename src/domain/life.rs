//! Sparse Life engine.
//!
//! The board is a set of live coordinates. Each generation only visits live
//! cells and their neighbors, so cost scales with population rather than
//! with grid area.

use std::collections::HashSet;

use rand::Rng;
use rayon::prelude::*;

use super::{Cell, Coord, GridBounds, Pattern};

/// All currently alive coordinates
pub type LiveSet = HashSet<Coord>;

/// Count how many of `coord`'s clipped neighbors are in `live`
fn count_live_neighbors(bounds: &GridBounds, live: &LiveSet, coord: Coord) -> usize {
    bounds
        .neighbors(coord)
        .into_iter()
        .filter(|n| live.contains(n))
        .count()
}

/// Dead cells adjacent to at least one live cell, the only places a birth can happen
fn birth_candidates(bounds: &GridBounds, live: &LiveSet) -> LiveSet {
    live.iter()
        .flat_map(|&coord| bounds.neighbors(coord))
        .filter(|n| !live.contains(n))
        .collect()
}

fn next_state(bounds: &GridBounds, live: &LiveSet, coord: Coord) -> Cell {
    let current = Cell::from_alive(live.contains(&coord));
    current.evolve(count_live_neighbors(bounds, live, coord))
}

/// Pure functional evolution - returns the next generation (serial).
/// Survivors come from the live cells, births from their dead neighbors.
pub fn step(bounds: &GridBounds, live: &LiveSet) -> LiveSet {
    let survivors = live
        .iter()
        .copied()
        .filter(|&coord| next_state(bounds, live, coord).is_alive());

    let births = birth_candidates(bounds, live)
        .into_iter()
        .filter(|&coord| next_state(bounds, live, coord).is_alive());

    survivors.chain(births).collect()
}

/// Parallel evolution using rayon; same result as [`step`]
pub fn step_parallel(bounds: &GridBounds, live: &LiveSet) -> LiveSet {
    let survivors: Vec<Coord> = live
        .par_iter()
        .copied()
        .filter(|&coord| next_state(bounds, live, coord).is_alive())
        .collect();

    let candidates = birth_candidates(bounds, live);
    let births: Vec<Coord> = candidates
        .par_iter()
        .copied()
        .filter(|&coord| next_state(bounds, live, coord).is_alive())
        .collect();

    survivors.into_iter().chain(births).collect()
}

/// Draw `count` coordinates uniformly from the visible grid.
/// Duplicates collapse, so the result may hold fewer than `count` cells.
pub fn random_seed<R: Rng>(bounds: &GridBounds, rng: &mut R, count: usize) -> LiveSet {
    let (w, h) = bounds.dimensions();
    if w <= 0 || h <= 0 {
        return LiveSet::new();
    }

    (0..count)
        .map(|_| Coord::new(rng.random_range(0..w), rng.random_range(0..h)))
        .collect()
}

/// LifeEngine owns the live set and advances it one generation at a time.
#[derive(Clone, Debug)]
pub struct LifeEngine {
    bounds: GridBounds,
    live: LiveSet,
    generation: u64,
}

impl LifeEngine {
    /// Create an engine with no live cells
    pub fn new(bounds: GridBounds) -> Self {
        Self::with_cells(bounds, LiveSet::new())
    }

    /// Create an engine starting from the given live cells
    pub fn with_cells(bounds: GridBounds, cells: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            bounds,
            live: cells.into_iter().collect(),
            generation: 0,
        }
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn cells(&self) -> &LiveSet {
        &self.live
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    pub fn is_alive(&self, coord: Coord) -> bool {
        self.live.contains(&coord)
    }

    /// Neighbor positions of `coord` within this engine's bounds
    pub fn neighbors(&self, coord: Coord) -> Vec<Coord> {
        self.bounds.neighbors(coord)
    }

    /// Compute the next generation without touching the current one
    pub fn next_generation(&self) -> LiveSet {
        step(&self.bounds, &self.live)
    }

    /// Replace the live set with the next generation
    pub fn advance(&mut self) {
        self.live = self.next_generation();
        self.generation += 1;
        log::trace!("generation {} population {}", self.generation, self.live.len());
    }

    /// Flip a cell, returning whether it is now alive
    pub fn toggle(&mut self, coord: Coord) -> bool {
        if self.live.remove(&coord) {
            false
        } else {
            self.live.insert(coord);
            true
        }
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.live = LiveSet::new();
        self.generation = 0;
    }

    /// Replace the board with `count` random cells
    pub fn reseed<R: Rng>(&mut self, rng: &mut R, count: usize) {
        self.live = random_seed(&self.bounds, rng, count);
        self.generation = 0;
    }

    /// Stamp a pattern with its top-left corner at `origin`.
    /// Cells landing outside the visible grid are skipped; returns how many were placed.
    pub fn place(&mut self, pattern: &Pattern, origin: Coord) -> usize {
        let bounds = self.bounds;
        let placed: Vec<Coord> = pattern
            .cells
            .iter()
            .filter_map(|&(dcol, drow)| origin.checked_offset(dcol, drow))
            .filter(|&coord| bounds.contains(coord))
            .collect();

        let count = placed.len();
        self.live.extend(placed);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand::{SeedableRng, rngs::StdRng};

    fn bounds() -> GridBounds {
        GridBounds::new(40, 40)
    }

    fn set(cells: &[(i32, i32)]) -> LiveSet {
        cells.iter().map(|&c| Coord::from(c)).collect()
    }

    #[test]
    fn test_empty_stays_empty() {
        assert!(step(&bounds(), &LiveSet::new()).is_empty());
    }

    #[test]
    fn test_lonely_cell_dies() {
        assert!(step(&bounds(), &set(&[(5, 5)])).is_empty());
        assert!(step(&bounds(), &set(&[(5, 5), (6, 5)])).is_empty());
    }

    #[test]
    fn test_block_is_still_life() {
        let block = set(&[(5, 5), (6, 5), (5, 6), (6, 6)]);
        assert_eq!(step(&bounds(), &block), block);
    }

    #[test]
    fn test_corner_block_is_still_life() {
        let block = set(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(step(&bounds(), &block), block);
    }

    #[test]
    fn test_survival_with_two_or_three() {
        // Center of an L-tromino has two neighbors
        let next = step(&bounds(), &set(&[(5, 5), (6, 5), (5, 6)]));
        assert!(next.contains(&Coord::new(5, 5)));

        // Center of a T has three neighbors
        let next = step(&bounds(), &set(&[(5, 5), (4, 5), (6, 5), (5, 6)]));
        assert!(next.contains(&Coord::new(5, 5)));
    }

    #[test]
    fn test_overcrowded_cell_dies() {
        let plus = set(&[(5, 5), (4, 5), (6, 5), (5, 4), (5, 6)]);
        let next = step(&bounds(), &plus);
        assert!(!next.contains(&Coord::new(5, 5)));
    }

    #[test]
    fn test_birth_with_exactly_three() {
        let next = step(&bounds(), &set(&[(4, 4), (6, 4), (5, 6)]));
        assert!(next.contains(&Coord::new(5, 5)));

        // Two neighbors is not enough
        let next = step(&bounds(), &set(&[(4, 4), (6, 4)]));
        assert!(!next.contains(&Coord::new(5, 5)));

        // Four is too many
        let next = step(&bounds(), &set(&[(4, 4), (6, 4), (4, 6), (6, 6)]));
        assert!(!next.contains(&Coord::new(5, 5)));
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = set(&[(4, 5), (5, 5), (6, 5)]);
        let vertical = set(&[(5, 4), (5, 5), (5, 6)]);

        assert_eq!(step(&bounds(), &horizontal), vertical);
        assert_eq!(step(&bounds(), &vertical), horizontal);
    }

    #[test]
    fn test_glider_moves_diagonally() {
        let glider = set(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        let mut live = glider.clone();
        for _ in 0..4 {
            live = step(&bounds(), &live);
        }

        let moved: LiveSet = glider.iter().map(|c| c.offset(1, 1)).collect();
        assert_eq!(live, moved);
    }

    #[test]
    fn test_step_leaves_input_untouched() {
        let blinker = set(&[(4, 5), (5, 5), (6, 5)]);
        let copy = blinker.clone();
        let _ = step(&bounds(), &blinker);
        assert_eq!(blinker, copy);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let b = bounds();
        let mut rng = StdRng::seed_from_u64(7);
        let mut live = random_seed(&b, &mut rng, 600);

        for _ in 0..10 {
            let serial = step(&b, &live);
            assert_eq!(step_parallel(&b, &live), serial);
            live = serial;
        }
    }

    #[test]
    fn test_random_seed_within_bounds() {
        let b = GridBounds::new(40, 30);
        let mut rng = StdRng::seed_from_u64(42);
        let seeded = random_seed(&b, &mut rng, 500);

        assert!(seeded.len() <= 500);
        assert!(!seeded.is_empty());
        assert!(seeded.iter().all(|&c| b.contains(c)));
    }

    #[test]
    fn test_random_seed_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_seed(&bounds(), &mut rng, 0).is_empty());
    }

    #[test]
    fn test_random_seed_degenerate_grid() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_seed(&GridBounds::new(0, 10), &mut rng, 5).is_empty());
    }

    #[test]
    fn test_engine_advance_replaces_set() {
        let mut engine = LifeEngine::with_cells(bounds(), set(&[(4, 5), (5, 5), (6, 5)]));
        engine.advance();

        assert_eq!(engine.generation(), 1);
        assert!(engine.is_alive(Coord::new(5, 4)));
        assert!(!engine.is_alive(Coord::new(4, 5)));
        assert_eq!(engine.population(), 3);
    }

    #[test]
    fn test_engine_neighbors_use_its_bounds() {
        let engine = LifeEngine::new(GridBounds::new(5, 5));
        assert_eq!(engine.neighbors(Coord::new(2, 2)).len(), 8);
        assert_eq!(engine.neighbors(Coord::new(0, 4)).len(), 5);
    }

    #[test]
    fn test_next_generation_is_pure() {
        let engine = LifeEngine::with_cells(bounds(), set(&[(4, 5), (5, 5), (6, 5)]));
        let next = engine.next_generation();

        assert_eq!(next, set(&[(5, 4), (5, 5), (5, 6)]));
        assert_eq!(engine.generation(), 0);
        assert!(engine.is_alive(Coord::new(4, 5)));
    }

    #[test]
    fn test_extreme_cells_step_without_overflow() {
        let live = set(&[(i32::MAX, 5), (i32::MIN, 0), (3, i32::MAX)]);
        assert!(step(&bounds(), &live).is_empty());
        assert!(step_parallel(&bounds(), &live).is_empty());

        let mut engine = LifeEngine::with_cells(bounds(), live);
        engine.advance();
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_place_far_origin_skips_overflowing_cells() {
        let mut engine = LifeEngine::new(bounds());
        assert_eq!(engine.place(&presets::glider(), Coord::new(i32::MAX, i32::MAX)), 0);
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_engine_toggle() {
        let mut engine = LifeEngine::new(bounds());
        assert!(engine.toggle(Coord::new(3, 3)));
        assert!(engine.is_alive(Coord::new(3, 3)));
        assert!(!engine.toggle(Coord::new(3, 3)));
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_engine_clear_resets() {
        let mut engine = LifeEngine::with_cells(bounds(), set(&[(1, 1), (2, 1), (3, 1)]));
        engine.advance();
        engine.clear();

        assert_eq!(engine.population(), 0);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_engine_reseed() {
        let mut engine = LifeEngine::new(bounds());
        engine.advance();
        let mut rng = StdRng::seed_from_u64(3);
        engine.reseed(&mut rng, 120);

        assert_eq!(engine.generation(), 0);
        assert!(engine.population() > 0 && engine.population() <= 120);
    }

    #[test]
    fn test_engine_place_clips_to_grid() {
        let mut engine = LifeEngine::new(GridBounds::new(10, 10));
        let block = presets::block();

        assert_eq!(engine.place(&block, Coord::new(2, 2)), 4);
        assert_eq!(engine.place(&block, Coord::new(9, 9)), 1);
        assert_eq!(engine.population(), 5);
    }
}
