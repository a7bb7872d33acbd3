use rand::{rngs::StdRng, Rng, SeedableRng};
use wormlife_lib::{step, Axis, Board, ColorGrid, Config, Direction, Error, NeighborTable, Status, TunnelMap};

fn no_tunnels(height: isize, width: isize) -> TunnelMap {
    TunnelMap::from_links(height, width, &[], &[]).unwrap()
}

#[test]
fn blinker() -> Result<(), Box<dyn std::error::Error>> {
    let board = Board::from_plaintext(
        ".....\n\
         .....\n\
         .ooo.\n\
         .....\n\
         .....",
    );
    let table = NeighborTable::new(5, 5, &no_tunnels(5, 5));
    let next = step(&board, &table)?;
    let expected = Board::from_plaintext(
        ".....\n\
         ..o..\n\
         ..o..\n\
         ..o..\n\
         .....",
    );
    assert_eq!(next, expected);
    Ok(())
}

#[test]
fn life_rule_boundary() -> Result<(), Box<dyn std::error::Error>> {
    const RING: [(isize, isize); 8] = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 2),
        (2, 0),
        (2, 1),
        (2, 2),
    ];
    let table = NeighborTable::new(3, 3, &no_tunnels(3, 3));
    for center_alive in [false, true] {
        for neighbors in 0..=8 {
            let board = Board::from_fn(3, 3, |coord| {
                if coord == (1, 1) {
                    center_alive
                } else {
                    RING[..neighbors].contains(&coord)
                }
            });
            let next = step(&board, &table)?;
            let expected = if center_alive {
                neighbors == 2 || neighbors == 3
            } else {
                neighbors == 3
            };
            assert_eq!(
                next.get((1, 1)),
                Some(expected),
                "center_alive = {center_alive}, neighbors = {neighbors}"
            );
        }
    }
    Ok(())
}

#[test]
fn tunnel_override() -> Result<(), Box<dyn std::error::Error>> {
    let tunnels = TunnelMap::from_links(1, 6, &[((0, 0), (0, 5))], &[])?;
    let table = NeighborTable::new(1, 6, &tunnels);
    assert_eq!(table.get((0, 0), Direction::Left), Some((0, 5)));
    assert_eq!(table.get((0, 5), Direction::Right), Some((0, 0)));
    // The in-grid neighbors of the mouths are untouched.
    assert_eq!(table.get((0, 0), Direction::Right), Some((0, 1)));
    assert_eq!(table.get((0, 5), Direction::Left), Some((0, 4)));
    Ok(())
}

#[test]
fn destinations_stay_in_bounds() -> Result<(), Box<dyn std::error::Error>> {
    let tunnels = TunnelMap::from_links(
        4,
        7,
        &[((0, 0), (3, 6)), ((1, 2), (2, 5))],
        &[((0, 3), (3, 3))],
    )?;
    let table = NeighborTable::new(4, 7, &tunnels);
    for row in 0..4 {
        for col in 0..7 {
            for direction in Direction::ALL {
                if let Some((r, c)) = table.get((row, col), direction) {
                    assert!(0 <= r && r < 4 && 0 <= c && c < 7);
                }
            }
        }
    }
    Ok(())
}

#[test]
fn tunnel_symmetry() -> Result<(), Box<dyn std::error::Error>> {
    let tunnels = TunnelMap::from_links(
        5,
        5,
        &[((1, 0), (3, 4)), ((2, 1), (2, 3))],
        &[((0, 2), (4, 2))],
    )?;
    let table = NeighborTable::new(5, 5, &tunnels);
    for axis in [Axis::Horizontal, Axis::Vertical] {
        for (a, b) in tunnels.links(axis) {
            let direction = Direction::ALL
                .into_iter()
                .find(|&d| d.axis() == axis && table.get(a, d) == Some(b))
                .expect("one direction of a mouth must resolve to its partner");
            assert_eq!(table.get(b, direction.opposite()), Some(a));
        }
    }
    Ok(())
}

#[test]
fn adjacent_mouths_not_double_counted() -> Result<(), Box<dyn std::error::Error>> {
    let tunnels = TunnelMap::from_links(1, 2, &[((0, 0), (0, 1))], &[])?;
    let table = NeighborTable::new(1, 2, &tunnels);
    // Each mouth reaches its partner through exactly one direction;
    // the lower-precedence Left lookup is suppressed.
    assert_eq!(table.get((0, 0), Direction::Right), Some((0, 1)));
    assert_eq!(table.get((0, 0), Direction::Left), None);
    assert_eq!(table.get((0, 1), Direction::Right), Some((0, 0)));
    assert_eq!(table.get((0, 1), Direction::Left), None);
    // Two live cells that each see one neighbor must both die.
    let board = Board::from_plaintext("oo");
    let next = step(&board, &table)?;
    assert_eq!(next, Board::from_plaintext(".."));
    Ok(())
}

#[test]
fn diagonal_composes_vertical_then_horizontal() -> Result<(), Box<dyn std::error::Error>> {
    let tunnels = TunnelMap::from_links(3, 3, &[], &[((0, 0), (2, 2))])?;
    let table = NeighborTable::new(3, 3, &tunnels);
    // The vertical hop teleports, the horizontal hop continues from the
    // far mouth.
    assert_eq!(table.get((0, 0), Direction::Up), Some((2, 2)));
    assert_eq!(table.diagonal((0, 0), Direction::Up, Direction::Left), Some((2, 1)));
    // A missing vertical hop kills the diagonal even though hopping
    // horizontally first would have succeeded.
    assert_eq!(table.get((0, 1), Direction::Up), None);
    assert_eq!(table.diagonal((0, 1), Direction::Up, Direction::Left), None);
    Ok(())
}

#[test]
fn from_grids_pairs_by_color() -> Result<(), Box<dyn std::error::Error>> {
    let horizontal = ColorGrid::from_fn(2, 4, |coord| match coord {
        (0, 0) | (1, 3) => 0xFF0000,
        (0, 2) | (1, 1) => 0x00FF00,
        _ => 0x000000,
    });
    let vertical = ColorGrid::from_fn(2, 4, |_| 0x000000);
    let tunnels = TunnelMap::from_grids(2, 4, &horizontal, &vertical, 0x000000)?;
    assert_eq!(tunnels.partner(Axis::Horizontal, (0, 0)), Some((1, 3)));
    assert_eq!(tunnels.partner(Axis::Horizontal, (1, 3)), Some((0, 0)));
    assert_eq!(tunnels.partner(Axis::Horizontal, (0, 2)), Some((1, 1)));
    assert_eq!(tunnels.partner(Axis::Vertical, (0, 0)), None);
    assert_eq!(tunnels.links(Axis::Horizontal).count(), 2);

    // The same links given directly must build the same table.
    let from_links = TunnelMap::from_links(
        2,
        4,
        &[((0, 0), (1, 3)), ((0, 2), (1, 1))],
        &[],
    )?;
    assert_eq!(
        NeighborTable::new(2, 4, &tunnels),
        NeighborTable::new(2, 4, &from_links)
    );
    Ok(())
}

#[test]
fn malformed_tunnel_groups() {
    let vertical = ColorGrid::from_fn(3, 3, |_| 0x000000);

    let lone = ColorGrid::from_fn(3, 3, |coord| if coord == (1, 1) { 0x0000FF } else { 0 });
    let result = TunnelMap::from_grids(3, 3, &lone, &vertical, 0);
    assert!(matches!(
        result,
        Err(Error::MalformedTunnel { axis: Axis::Horizontal, color: 0x0000FF, ref coords }) if coords.len() == 1
    ));

    let triple = ColorGrid::from_fn(3, 3, |(row, _)| if row == 0 { 0x0000FF } else { 0 });
    let result = TunnelMap::from_grids(3, 3, &triple, &vertical, 0);
    assert!(matches!(
        result,
        Err(Error::MalformedTunnel { ref coords, .. }) if coords.len() == 3
    ));
}

#[test]
fn dimension_mismatch() {
    let small = ColorGrid::from_fn(2, 3, |_| 0);
    let full = ColorGrid::from_fn(3, 3, |_| 0);
    let result = TunnelMap::from_grids(3, 3, &small, &full, 0);
    assert_eq!(
        result,
        Err(Error::DimensionMismatch {
            expected: (3, 3),
            found: (2, 3),
        })
    );
}

#[test]
fn duplicate_and_out_of_bounds_mouths() {
    let result = TunnelMap::from_links(1, 6, &[((0, 0), (0, 1)), ((0, 0), (0, 2))], &[]);
    assert_eq!(
        result,
        Err(Error::DuplicateMouth {
            axis: Axis::Horizontal,
            coord: (0, 0),
        })
    );

    let result = TunnelMap::from_links(1, 6, &[((0, 3), (0, 3))], &[]);
    assert!(matches!(result, Err(Error::DuplicateMouth { .. })));

    let result = TunnelMap::from_links(1, 6, &[], &[((0, 9), (0, 1))]);
    assert_eq!(
        result,
        Err(Error::MouthOutOfBounds {
            axis: Axis::Vertical,
            mouth: (0, 9),
            board: (1, 6),
        })
    );
}

#[test]
fn invalid_milestones() {
    let board = Board::new(3, 3);
    let tunnels = no_tunnels(3, 3);
    for milestones in [vec![], vec![0], vec![10, 5], vec![5, 5]] {
        let result = Config::new(milestones).simulation(board.clone(), &tunnels);
        assert!(matches!(result, Err(Error::InvalidMilestone(_))));
    }
}

#[test]
fn determinism() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(0x776F726D);
    let board = Board::from_fn(12, 16, |_| rng.gen_bool(0.35));
    let tunnels = TunnelMap::from_links(
        12,
        16,
        &[((2, 0), (9, 15))],
        &[((0, 5), (11, 5)), ((3, 8), (7, 12))],
    )?;
    let table = NeighborTable::new(12, 16, &tunnels);
    assert_eq!(table, NeighborTable::new(12, 16, &tunnels));
    assert_eq!(step(&board, &table)?, step(&board, &table)?);
    Ok(())
}

#[test]
fn milestone_run_is_history_independent() -> Result<(), Box<dyn std::error::Error>> {
    let board = Board::from_plaintext(
        ".o......\n\
         ..o.....\n\
         ooo.....\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         ........",
    );
    let tunnels = TunnelMap::from_links(8, 8, &[((3, 0), (3, 7))], &[((0, 4), (7, 4))])?;

    let mut all_milestones = None;
    let mut sim = Config::default().simulation(board.clone(), &tunnels)?;
    let status = sim.run(None, |generation, board| {
        if generation == 100 {
            all_milestones = Some(board.clone());
        }
    })?;
    assert_eq!(status, Status::Done);
    assert_eq!(sim.generation(), 1000);

    let mut only_100 = None;
    let mut sim = Config::new(vec![100]).simulation(board, &tunnels)?;
    sim.run(None, |_, board| only_100 = Some(board.clone()))?;
    assert_eq!(sim.generation(), 100);

    assert_eq!(all_milestones, only_100);
    Ok(())
}

#[test]
fn run_can_be_paused_between_generations() -> Result<(), Box<dyn std::error::Error>> {
    let board = Board::from_plaintext(
        ".....\n\
         .....\n\
         .ooo.\n\
         .....\n\
         .....",
    );
    let tunnels = no_tunnels(5, 5);
    let mut sim = Config::new(vec![5]).simulation(board, &tunnels)?;
    assert_eq!(sim.status(), Status::Initialized);

    assert_eq!(sim.run(Some(2), |_, _| ())?, Status::Stepping);
    assert_eq!(sim.generation(), 2);
    assert_eq!(sim.run(Some(2), |_, _| ())?, Status::Stepping);
    assert_eq!(sim.generation(), 4);

    let mut emitted = Vec::new();
    assert_eq!(sim.run(None, |generation, _| emitted.push(generation))?, Status::Done);
    assert_eq!(sim.generation(), 5);
    assert_eq!(emitted, vec![5]);

    // Done is terminal.
    assert_eq!(sim.advance()?, None);
    assert_eq!(sim.generation(), 5);
    Ok(())
}
