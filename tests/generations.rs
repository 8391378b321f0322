use torus_life::{Grid, LifeConfig, Simulation};

fn place(width: usize, height: usize, live: &[(isize, isize)]) -> Simulation {
    let mut grid = Grid::new(width, height).unwrap();
    for &(x, y) in live {
        grid.set_alive(x, y, true);
    }
    Simulation::from_grid(grid)
}

fn snapshot(grid: &Grid) -> Vec<bool> {
    let mut cells = Vec::with_capacity(grid.width() * grid.height());
    for y in 0..grid.height() as isize {
        for x in 0..grid.width() as isize {
            cells.push(grid.is_alive(x, y));
        }
    }
    cells
}

fn live_cells(grid: &Grid) -> Vec<(isize, isize)> {
    let mut cells = Vec::new();
    for y in 0..grid.height() as isize {
        for x in 0..grid.width() as isize {
            if grid.is_alive(x, y) {
                cells.push((x, y));
            }
        }
    }
    cells
}

// Pinned against rand 0.8 `StdRng::seed_from_u64(42)`; a change here means the
// seeding order, the sweep, or the RNG stream changed.
#[test]
#[rustfmt::skip]
fn dense_seed_42_run_is_pinned() {
    let mut sim = Simulation::with_seed(10, 10, 3, 42).unwrap();
    let gen0: Vec<(isize, isize)> = vec![
        (1, 0), (2, 0), (5, 0), (9, 0), (0, 1), (3, 1), (2, 2), (8, 2), (1, 3),
        (7, 3), (8, 3), (0, 4), (2, 4), (3, 4), (6, 4), (1, 5), (5, 5), (6, 5),
        (8, 5), (9, 5), (9, 6), (3, 7), (9, 7), (1, 8), (6, 8), (7, 8), (7, 9),
    ];
    assert_eq!(live_cells(sim.current()), gen0);

    sim.advance();
    let gen1: Vec<(isize, isize)> = vec![
        (0, 0), (1, 0), (2, 0), (0, 1), (3, 1), (9, 1), (1, 2), (2, 2), (7, 2),
        (8, 2), (9, 2), (1, 3), (3, 3), (7, 3), (8, 3), (9, 3), (0, 4), (2, 4),
        (5, 4), (6, 4), (1, 5), (2, 5), (5, 5), (6, 5), (7, 5), (8, 5), (9, 5),
        (9, 6), (0, 7), (8, 7), (6, 8), (7, 8), (8, 8), (0, 9), (1, 9), (2, 9),
        (7, 9), (8, 9),
    ];
    assert_eq!(live_cells(sim.current()), gen1);

    sim.advance();
    let gen2: Vec<(isize, isize)> = vec![
        (3, 0), (8, 0), (3, 1), (1, 2), (3, 2), (7, 2), (3, 3), (3, 4), (4, 4),
        (5, 4), (1, 5), (2, 5), (5, 5), (7, 5), (8, 5), (9, 5), (1, 6), (6, 6),
        (8, 7), (0, 8), (6, 8), (0, 9), (2, 9), (6, 9), (8, 9),
    ];
    assert_eq!(live_cells(sim.current()), gen2);
    assert_eq!(sim.generation(), 2);
}

#[test]
fn sparse_seed_42_run_dies_out() {
    let mut sim = Simulation::with_seed(10, 10, 15, 42).unwrap();
    let gen0: Vec<(isize, isize)> = vec![(1, 0), (0, 4), (6, 4), (5, 5), (9, 5), (7, 8)];
    assert_eq!(live_cells(sim.current()), gen0);
    sim.advance();
    sim.advance();
    assert_eq!(sim.current().live_count(), 0);
}

#[test]
fn different_seeds_usually_differ() {
    let a = Simulation::with_seed(40, 40, 15, 1).unwrap();
    let b = Simulation::with_seed(40, 40, 15, 2).unwrap();
    assert_ne!(snapshot(a.current()), snapshot(b.current()));
}

#[test]
fn glider_returns_home_on_torus() {
    // A glider moves one cell diagonally every four generations, so on an 8x8
    // torus it is back where it started after 32.
    let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    let mut sim = place(8, 8, &glider);
    let start = snapshot(sim.current());

    for _ in 0..4 {
        sim.advance();
    }
    let shifted = place(8, 8, &[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]);
    assert_eq!(snapshot(sim.current()), snapshot(shifted.current()));

    for _ in 4..32 {
        sim.advance();
        assert_eq!(sim.current().live_count(), 5);
    }
    assert_eq!(snapshot(sim.current()), start);
}

#[test]
fn config_builds_square_board() {
    let config = LifeConfig {
        cell_size: 20,
        window_size: 200,
        ..LifeConfig::default()
    };
    let mut sim = Simulation::from_config(&config, 3).unwrap();
    assert_eq!((sim.width(), sim.height()), (10, 10));
    sim.advance();
    assert_eq!(sim.current().width(), 10);
    assert_eq!(sim.current().height(), 10);
}

#[test]
fn invalid_config_is_rejected() {
    let config = LifeConfig {
        density_divisor: 0,
        ..LifeConfig::default()
    };
    assert!(Simulation::from_config(&config, 3).is_err());
}
