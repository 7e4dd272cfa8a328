use seawar::{Coord, SeaGrid, SeaState, ShipVector, STANDARD_FLEET, STANDARD_FLEET_CELLS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_fleet(seed: u64) -> (SeaGrid, Vec<ShipVector>) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = SeaGrid::new(10, 10).unwrap();
    let ships = grid.place_fleet_randomly(&mut rng, &STANDARD_FLEET).unwrap();
    (grid, ships)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_never_touches(seed in any::<u64>()) {
        let (grid, ships) = random_fleet(seed);
        prop_assert_eq!(grid.count_where(SeaState::is_ship), STANDARD_FLEET_CELLS);
        for v in &ships {
            for c in v.border() {
                if grid.is_in_bounds(c.x, c.y) {
                    prop_assert_eq!(grid.state(c.x, c.y).unwrap(), SeaState::Border);
                }
            }
        }
    }

    #[test]
    fn trace_recovers_each_ship(seed in any::<u64>()) {
        let (grid, ships) = random_fleet(seed);
        for v in &ships {
            let expected: Vec<Coord> = v.cells().collect();
            for c in v.cells() {
                prop_assert_eq!(grid.trace_ship(c.x, c.y).unwrap(), expected.clone());
            }
        }
    }

    #[test]
    fn suitable_vectors_avoid_new_ship(
        seed in any::<u64>(),
        x in 0..10usize,
        y in 0..10usize,
        len in 1..=4usize,
        vertical in any::<bool>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = SeaGrid::new(10, 10).unwrap();
        grid.place_fleet_randomly(&mut rng, &[3, 2, 1]).unwrap();
        let v = if vertical {
            ShipVector::vertical(x, y, len).unwrap()
        } else {
            ShipVector::horizontal(x, y, len).unwrap()
        };
        prop_assume!(grid.is_vector_placeable(&v));
        grid.place_ship(v).unwrap();

        let mut blocked: Vec<Coord> = v.cells().collect();
        blocked.extend(v.border());
        for other in grid.suitable_vectors(len) {
            prop_assert!(other.cells().all(|c| !blocked.contains(&c)));
        }
    }
}
