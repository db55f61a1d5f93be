use swipedots_core::*;

fn seeded(level: Level) -> Grid {
    let options = GridOptions {
        seed: Some(0x5eed),
        ..Default::default()
    };
    Grid::with_options(level, options).unwrap()
}

fn pitches(n: f32) -> f32 {
    CellPitch::default().get() * n
}

fn uncolored_count(grid: &Grid) -> DotCount {
    grid.iter_dots()
        .filter(|dot| !dot.is_obstacle() && !dot.is_colored())
        .count()
        .try_into()
        .unwrap()
}

fn colored_mask(grid: &Grid) -> Vec<bool> {
    grid.iter_dots().map(Dot::is_colored).collect()
}

fn assert_invariants(grid: &Grid) {
    assert_eq!(grid.dots_to_win(), uncolored_count(grid));
    assert!(grid.iter_dots().filter(|dot| dot.is_obstacle()).all(Dot::is_colored));
    let anchor = &grid[grid.current_dot()];
    assert!(anchor.is_colored() && !anchor.is_obstacle());
}

#[test]
fn construction_counts_everything_but_start() {
    let level = Level::default();
    let grid = seeded(level.clone());

    assert_eq!(grid.dots_to_win(), level.non_obstacle_count() - 1);
    assert_eq!(grid.current_dot(), level.start);
    assert_invariants(&grid);
}

#[test]
fn sub_pitch_drags_change_nothing() {
    let mut grid = seeded(Level::default());
    let before = colored_mask(&grid);

    for translation in [
        Translation::ZERO,
        Translation::new(pitches(0.99), 0.0),
        Translation::new(0.0, -pitches(0.5)),
        Translation::new(-pitches(0.7), pitches(0.7)),
    ] {
        assert!(!grid.drag_gesture(translation));
    }

    assert_eq!(colored_mask(&grid), before);
    assert_eq!(grid.current_dot(), (0, 0));
    assert_eq!(grid.dots_to_win(), 21);
}

#[test]
fn dots_to_win_never_increases_between_resets() {
    let mut grid = seeded(Level::default());
    let moves = [
        (pitches(4.0), 0.0),
        (0.0, pitches(1.0)),
        (-pitches(1.0), 0.0),
        (0.0, pitches(9.0)),
        (-pitches(5.0), pitches(0.2)),
        (0.0, -pitches(2.0)),
        (pitches(2.0), 0.0),
        (0.0, -pitches(3.0)),
    ];

    let mut last = grid.dots_to_win();
    for translation in moves {
        grid.drag_gesture(translation.into());
        assert!(grid.dots_to_win() <= last);
        assert_invariants(&grid);
        last = grid.dots_to_win();
    }
}

#[test]
fn out_of_bounds_drag_stops_at_edge() {
    let mut grid = seeded(Level::new((3, 4), Vec::new(), (1, 1)).unwrap());

    let walk = grid.drag(Translation::new(pitches(25.0), -pitches(1.0)));

    assert_eq!(walk.stop, StopReason::HitEdge);
    assert_eq!(walk.path, vec![(1, 2), (1, 3)]);
    assert_eq!(grid.current_dot(), (1, 3));
    assert!(grid[(1, 2)].is_colored());
    assert!(grid[(1, 3)].is_colored());
    assert_eq!(grid.dots_to_win(), 9);
    assert_invariants(&grid);
}

#[test]
fn adjacent_obstacle_blocks_the_path() {
    let mut grid = seeded(Level::new((3, 3), [(1, 1)], (0, 1)).unwrap());
    let before = grid.dots_to_win();

    let walk = grid.drag(Translation::new(0.0, pitches(2.0)));

    assert_eq!(walk.stop, StopReason::HitObstacle);
    assert_eq!(walk.outcome, DragOutcome::NoChange);
    assert_eq!(grid.current_dot(), (0, 1));
    assert!(grid[(1, 1)].is_colored());
    assert!(!grid[(2, 1)].is_colored());
    assert_eq!(grid.dots_to_win(), before);
    assert_invariants(&grid);
}

#[test]
fn one_by_three_is_won_in_one_drag() {
    let mut grid = seeded(Level::new((1, 3), Vec::new(), (0, 0)).unwrap());
    assert_eq!(grid.dots_to_win(), 2);

    assert!(grid.drag_gesture(Translation::new(pitches(2.0), 0.0)));

    assert!(grid[(0, 1)].is_colored());
    assert!(grid[(0, 2)].is_colored());
    assert_eq!(grid.dots_to_win(), 0);
    assert_eq!(grid.state(), GridState::Won);
}

#[test]
fn reset_after_win_restores_initial_board() {
    let level = Level::new((2, 2), [(1, 1)], (0, 0)).unwrap();
    let mut grid = seeded(level.clone());
    let initial = grid.dots_to_win();

    assert!(!grid.drag_gesture(Translation::new(pitches(1.0), 0.0)));
    assert!(!grid.drag_gesture(Translation::new(-pitches(1.0), 0.0)));
    assert!(grid.drag_gesture(Translation::new(0.0, pitches(1.0))));

    grid.reset_grid();

    assert_eq!(grid.dots_to_win(), initial);
    assert_eq!(grid.current_dot(), level.start);
    for dot in grid.iter_dots() {
        let expected = dot.is_obstacle() || dot.coordinates() == level.start;
        assert_eq!(dot.is_colored(), expected, "{:?}", dot.coordinates());
    }
    assert_invariants(&grid);
}

#[test]
fn full_playthrough_of_default_level() {
    let mut grid = seeded(Level::default());
    let route = [
        (Direction::Right, 4),
        (Direction::Down, 4),
        (Direction::Left, 4),
        (Direction::Up, 4),
        (Direction::Down, 2),
        (Direction::Right, 3),
        (Direction::Up, 1),
        (Direction::Down, 1),
        (Direction::Left, 2),
        (Direction::Down, 1),
        (Direction::Right, 1),
    ];

    let mut outcomes = Vec::new();
    for (direction, steps) in route {
        outcomes.push(grid.walk(Stroke::new(direction, steps)).outcome);
        assert_invariants(&grid);
    }

    assert_eq!(outcomes.last(), Some(&DragOutcome::Won));
    assert!(grid.is_won());
}
