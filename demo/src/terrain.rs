//! Seeded random terrain, the default grid supplier of the demo.

use rand::{Rng, RngExt};
use wavefront_core::{CostClass, Grid, Point};

pub const DEFAULT_WIDTH: i32 = 30;
pub const DEFAULT_HEIGHT: i32 = 30;

/// Fill a `width × height` grid with uniformly random classes. `keep_open`
/// cells draw from the passable classes only, so they are never walls.
pub fn random_grid(width: i32, height: i32, keep_open: &[Point], rng: &mut impl Rng) -> Grid {
    Grid::from_fn(width, height, |p| {
        let classes = if keep_open.contains(&p) {
            &CostClass::ALL[..3]
        } else {
            &CostClass::ALL[..]
        };
        classes[rng.random_range(0..classes.len())]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn endpoints_are_never_walls() {
        let keep = [Point::new(1, 1), Point::new(11, 11)];
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let g = random_grid(DEFAULT_WIDTH, DEFAULT_HEIGHT, &keep, &mut rng);
            for p in keep {
                assert_ne!(g.get(p), Some(CostClass::Wall), "seed {seed}");
            }
        }
    }

    #[test]
    fn kept_cells_draw_every_passable_class() {
        let p = Point::new(0, 0);
        let mut rng = StdRng::seed_from_u64(3);
        let drawn: Vec<_> = (0..200)
            .filter_map(|_| random_grid(1, 1, &[p], &mut rng).get(p))
            .collect();
        for c in &CostClass::ALL[..3] {
            assert!(drawn.contains(c), "{c} never drawn");
        }
    }

    #[test]
    fn same_seed_same_grid() {
        let a = random_grid(8, 8, &[], &mut StdRng::seed_from_u64(7));
        let b = random_grid(8, 8, &[], &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn all_classes_appear() {
        let g = random_grid(30, 30, &[], &mut StdRng::seed_from_u64(1));
        for c in CostClass::ALL {
            assert!(g.count(c) > 0, "no {c} cells");
        }
    }
}
