use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use sparse_life::sparselife::{COORD_MAX, COORD_MIN, neighbors};
use sparse_life::{SparseLife, SparseLifeConfig};

fn set_cells(engine: &mut SparseLife, cells: &[(i64, i64)]) {
    for &(x, y) in cells {
        engine.add_alive_cell(x, y);
    }
}

fn collect_live(engine: &SparseLife) -> HashSet<(i64, i64)> {
    let mut out = HashSet::new();
    engine.for_each_live(|x, y| {
        out.insert((x, y));
    });
    out
}

fn assert_alive(engine: &SparseLife, cells: &[(i64, i64)]) {
    for &(x, y) in cells {
        assert!(engine.is_alive(x, y), "expected alive at ({x},{y})");
    }
}

fn assert_dead(engine: &SparseLife, cells: &[(i64, i64)]) {
    for &(x, y) in cells {
        assert!(!engine.is_alive(x, y), "expected dead at ({x},{y})");
    }
}

fn step_naive(cells: &HashSet<(i64, i64)>) -> HashSet<(i64, i64)> {
    let mut next = HashSet::new();
    let mut candidates = HashSet::new();
    for &(x, y) in cells {
        candidates.insert((x, y));
        candidates.extend(neighbors(x, y));
    }

    for (x, y) in candidates {
        let count = neighbors(x, y)
            .iter()
            .filter(|&c| cells.contains(c))
            .count();
        let alive = cells.contains(&(x, y));
        let next_alive = if alive {
            count == 2 || count == 3
        } else {
            count == 3
        };
        if next_alive {
            next.insert((x, y));
        }
    }

    next
}

fn random_soup(seed: u64, radius: i64, density: f64) -> Vec<(i64, i64)> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut cells = Vec::new();
    for y in -radius..=radius {
        for x in -radius..=radius {
            if rng.random::<f64>() < density {
                cells.push((x, y));
            }
        }
    }
    cells
}

#[test]
fn insertion_is_idempotent() {
    let mut once = SparseLife::new();
    once.add_alive_cell(3, -2);

    let mut twice = SparseLife::new();
    twice.add_alive_cell(3, -2);
    twice.add_alive_cell(3, -2);

    assert_eq!(collect_live(&once), collect_live(&twice));
    assert_eq!(once.population(), twice.population());
    assert_eq!(once.candidates(), twice.candidates());
}

#[test]
fn empty_universe_stays_empty() {
    let mut engine = SparseLife::new();
    engine.step_n(10);
    assert_eq!(engine.population(), 0);
    assert!(engine.is_empty());
    assert!(engine.candidates().is_empty());
    assert_eq!(engine.bounds(), None);
}

#[test]
fn block_is_stable() {
    let mut engine = SparseLife::new();
    let block = [(0, 0), (1, 0), (0, 1), (1, 1)];
    set_cells(&mut engine, &block);

    for _ in 0..5 {
        engine.iterate();
        assert_alive(&engine, &block);
        assert_eq!(engine.population(), 4);
    }
    assert_dead(&engine, &[(2, 0), (2, 1), (-1, 0), (-1, 1)]);
}

#[test]
fn blinker_oscillates() {
    let mut engine = SparseLife::new();
    set_cells(&mut engine, &[(0, 0), (1, 0), (2, 0)]);

    engine.iterate();
    assert_alive(&engine, &[(1, -1), (1, 0), (1, 1)]);
    assert_dead(&engine, &[(0, 0), (2, 0)]);
    assert_eq!(engine.population(), 3);

    engine.iterate();
    assert_alive(&engine, &[(0, 0), (1, 0), (2, 0)]);
    assert_dead(&engine, &[(1, -1), (1, 1)]);
}

#[test]
fn glider_moves_down_right_every_four_steps() {
    let mut engine = SparseLife::new();
    let glider = [(1, 0), (2, -1), (0, -2), (1, -2), (2, -2)];
    set_cells(&mut engine, &glider);

    engine.step_n(4);

    let shifted = [(2, -1), (3, -2), (1, -3), (2, -3), (3, -3)];
    assert_alive(&engine, &shifted);
    assert_dead(&engine, &[(1, 0), (0, -2), (1, -2), (2, -2)]);
    assert_eq!(engine.population(), 5);
}

#[test]
fn lone_cell_dies() {
    let mut engine = SparseLife::new();
    engine.add_alive_cell(0, 0);
    engine.step_n(5);

    assert!(engine.is_empty());
    assert_eq!(engine.bounds(), None);
}

#[test]
fn blinker_wraps_across_x_extreme() {
    let mut engine = SparseLife::new();
    set_cells(&mut engine, &[(COORD_MAX, 0), (COORD_MIN, 0), (COORD_MIN + 1, 0)]);

    engine.iterate();
    assert_alive(&engine, &[(COORD_MIN, -1), (COORD_MIN, 0), (COORD_MIN, 1)]);
    assert_dead(&engine, &[(COORD_MAX, 0), (COORD_MIN + 1, 0)]);

    engine.iterate();
    assert_alive(&engine, &[(COORD_MAX, 0), (COORD_MIN, 0), (COORD_MIN + 1, 0)]);
}

#[test]
fn block_spanning_the_corner_is_stable() {
    let mut engine = SparseLife::new();
    let block = [
        (COORD_MAX, COORD_MAX),
        (COORD_MIN, COORD_MAX),
        (COORD_MAX, COORD_MIN),
        (COORD_MIN, COORD_MIN),
    ];
    set_cells(&mut engine, &block);

    engine.step_n(3);
    assert_eq!(collect_live(&engine), block.into_iter().collect::<HashSet<_>>());
}

#[test]
fn matches_naive_on_small_random_seed() {
    let mut engine = SparseLife::new();
    let seed = random_soup(0xBADC0FFEE, 8, 0.33);
    engine.add_alive_cells(seed.iter().copied());
    let mut naive: HashSet<_> = seed.into_iter().collect();

    for _ in 0..8 {
        assert_eq!(collect_live(&engine), naive);
        engine.iterate();
        naive = step_naive(&naive);
    }
}

#[test]
fn candidates_cover_every_changed_cell() {
    let mut engine = SparseLife::new();
    engine.add_alive_cells(random_soup(0xC0DE_CAFE, 10, 0.4));

    for _ in 0..10 {
        let before = collect_live(&engine);
        let visited: HashSet<_> = engine.candidates().iter().copied().collect();
        engine.iterate();
        let after = collect_live(&engine);

        for cell in before.symmetric_difference(&after) {
            assert!(
                visited.contains(cell),
                "changed cell {cell:?} was never a candidate"
            );
        }
    }
}

#[test]
fn seeding_mid_simulation_joins_next_step() {
    let mut engine = SparseLife::new();
    set_cells(&mut engine, &[(0, 0), (1, 0), (2, 0)]);

    engine.iterate();
    set_cells(&mut engine, &[(10, 10), (11, 10), (10, 11), (11, 11)]);
    assert!(engine.is_alive(10, 10));

    engine.iterate();
    assert_alive(&engine, &[(0, 0), (1, 0), (2, 0), (10, 10), (11, 11)]);
    assert_eq!(engine.population(), 7);
}

#[test]
fn far_apart_populations_evolve_independently() {
    let mut engine = SparseLife::new();
    let far = 4_000_000_000_000i64;
    set_cells(&mut engine, &[(0, 0), (1, 0), (2, 0)]);
    set_cells(&mut engine, &[(far, -far), (far + 1, -far), (far + 2, -far)]);

    engine.iterate();
    assert_alive(&engine, &[(1, 1), (far + 1, -far + 1), (far + 1, -far - 1)]);
    assert_eq!(engine.bounds(), Some((1, -far - 1, far + 1, 1)));
}

#[test]
fn dedup_and_parallel_configs_match_default() {
    let seed = random_soup(0xD37E_A515, 24, 0.3);

    let run = |config: SparseLifeConfig| {
        let mut engine = SparseLife::with_config(config);
        engine.add_alive_cells(seed.iter().copied());
        engine.step_n(12);
        (engine.population(), collect_live(&engine), engine.live_cells())
    };

    let plain = run(SparseLifeConfig::default().dedup_candidates(false));
    let dedup = run(SparseLifeConfig::default().dedup_candidates(true));
    let parallel = run(
        SparseLifeConfig::default()
            .dedup_candidates(false)
            .thread_count(4)
            .parallel_threshold(1),
    );

    assert_eq!(plain.0, dedup.0);
    assert_eq!(plain.1, dedup.1);
    // The parallel path keeps candidate order, so even store order matches.
    assert_eq!(plain.2, parallel.2);
}
