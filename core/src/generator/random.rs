use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::*;

/// Purely random layout of `count` distinct mines, reproducible from `seed`.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
    count: usize,
}

impl RandomMineGenerator {
    pub fn new(seed: u64, count: usize) -> Self {
        Self { seed, count }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, (width, height): Coord2) -> Vec<Coord2> {
        if width <= 0 || height <= 0 {
            return Vec::new();
        }

        let total_cells = (width as usize).saturating_mul(height as usize);
        let count = if self.count > total_cells {
            log::warn!(
                "Minefield already full, requested {} mines but only {} fit",
                self.count,
                total_cells
            );
            total_cells
        } else {
            self.count
        };

        // row-major mask, cell `i` is `(i % width, i / width)`
        let mut mines = alloc::vec![false; total_cells];
        let mut free_cells = total_cells;
        let mut rng = SmallRng::seed_from_u64(self.seed);

        for _ in 0..count {
            // index among the cells that are still free
            let mut place = rng.random_range(0..free_cells);
            for cell in mines.iter_mut() {
                if *cell {
                    continue;
                }
                if place == 0 {
                    *cell = true;
                    break;
                }
                place -= 1;
            }
            free_cells -= 1;
        }

        let width = width as usize;
        let coords: Vec<Coord2> = mines
            .iter()
            .enumerate()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|(i, _)| ((i % width) as Coord, (i / width) as Coord))
            .collect();
        log::debug!("Generated {} mines with seed {}", coords.len(), self.seed);
        coords
    }
}
