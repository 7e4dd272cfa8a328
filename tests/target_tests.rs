use seawar::{
    play_one_shot, Coord, FieldConfig, SeaError, SeaGrid, SeaState, Signal, TargetGrid,
    TargetState,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_record_hit_marks_probable_neighbours() -> Result<(), SeaError> {
    let mut overlay = TargetGrid::new(5, 5)?;
    overlay.record_result(&[Coord::new(2, 2)], Signal::Hit)?;

    assert_eq!(overlay.state(2, 2)?, TargetState::Hit);
    for (x, y) in [(2, 1), (1, 2), (3, 2), (2, 3)] {
        assert_eq!(overlay.state(x, y)?, TargetState::Probable);
    }
    for (x, y) in [(1, 1), (3, 1), (1, 3), (3, 3)] {
        assert_eq!(overlay.state(x, y)?, TargetState::Border);
    }
    assert_eq!(overlay.count_where(TargetState::is_empty), 25 - 9);
    Ok(())
}

#[test]
fn test_select_target_prefers_probable() -> Result<(), SeaError> {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut overlay = TargetGrid::new(5, 5)?;
    overlay.record_result(&[Coord::new(2, 2)], Signal::Hit)?;

    let probable = [
        Coord::new(2, 1),
        Coord::new(1, 2),
        Coord::new(3, 2),
        Coord::new(2, 3),
    ];
    let mut seen = [false; 4];
    for _ in 0..200 {
        let target = overlay.select_target(&mut rng)?;
        let idx = probable.iter().position(|&c| c == target);
        assert!(idx.is_some(), "picked {} outside the probable cells", target);
        if let Some(i) = idx {
            seen[i] = true;
        }
    }
    assert!(seen.iter().all(|&s| s));
    Ok(())
}

#[test]
fn test_second_hit_prunes_perpendicular_candidates() -> Result<(), SeaError> {
    let mut overlay = TargetGrid::new(5, 5)?;
    overlay.record_result(&[Coord::new(2, 2)], Signal::Hit)?;
    overlay.record_result(&[Coord::new(3, 2)], Signal::Hit)?;

    assert_eq!(
        overlay.coords_where(TargetState::is_probable),
        vec![Coord::new(1, 2), Coord::new(4, 2)]
    );
    assert_eq!(overlay.state(2, 1)?, TargetState::Border);
    assert_eq!(overlay.state(2, 3)?, TargetState::Border);
    Ok(())
}

#[test]
fn test_record_miss() -> Result<(), SeaError> {
    let mut overlay = TargetGrid::new(5, 5)?;
    overlay.record_result(&[Coord::new(0, 4)], Signal::Miss)?;
    assert_eq!(overlay.state(0, 4)?, TargetState::Miss);
    assert!(overlay.get(0, 4)?.is_shot());
    assert_eq!(overlay.count_where(TargetState::is_empty), 24);
    Ok(())
}

#[test]
fn test_record_kill_leaves_no_probable() -> Result<(), SeaError> {
    let mut overlay = TargetGrid::new(5, 5)?;
    overlay.record_result(&[Coord::new(1, 1)], Signal::Hit)?;
    assert!(overlay.count_where(TargetState::is_probable) > 0);

    overlay.record_result(&[Coord::new(1, 1), Coord::new(2, 1)], Signal::Killed)?;
    assert_eq!(overlay.count_where(TargetState::is_probable), 0);
    assert_eq!(overlay.state(1, 1)?, TargetState::Hit);
    assert_eq!(overlay.state(2, 1)?, TargetState::Hit);
    for y in 0..=2 {
        for x in 0..=3 {
            if y == 1 && (x == 1 || x == 2) {
                continue;
            }
            assert_eq!(overlay.state(x, y)?, TargetState::Border, "at ({}, {})", x, y);
        }
    }
    assert_eq!(overlay.state(4, 1)?, TargetState::Empty);
    Ok(())
}

#[test]
fn test_kill_keeps_earlier_misses() -> Result<(), SeaError> {
    let mut overlay = TargetGrid::new(3, 3)?;
    overlay.record_result(&[Coord::new(0, 0)], Signal::Miss)?;
    overlay.record_result(&[Coord::new(1, 1)], Signal::Win)?;
    assert_eq!(overlay.state(0, 0)?, TargetState::Miss);
    assert_eq!(overlay.count_where(TargetState::is_border), 7);
    Ok(())
}

#[test]
fn test_select_target_falls_back_to_empty() -> Result<(), SeaError> {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut overlay = TargetGrid::new(2, 1)?;
    overlay.record_result(&[Coord::new(0, 0)], Signal::Miss)?;
    for _ in 0..10 {
        assert_eq!(overlay.select_target(&mut rng)?, Coord::new(1, 0));
    }
    Ok(())
}

#[test]
fn test_select_target_exhausted() -> Result<(), SeaError> {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut overlay = TargetGrid::new(1, 1)?;
    overlay.record_result(&[Coord::new(0, 0)], Signal::Miss)?;
    assert_eq!(overlay.select_target(&mut rng).unwrap_err(), SeaError::NoTargetsLeft);
    Ok(())
}

#[test]
fn test_record_result_out_of_bounds() -> Result<(), SeaError> {
    let mut overlay = TargetGrid::new(3, 3)?;
    let before = overlay.clone();
    assert_eq!(
        overlay
            .record_result(&[Coord::new(1, 1), Coord::new(3, 1)], Signal::Killed)
            .unwrap_err(),
        SeaError::OutOfBounds { x: 3, y: 1 }
    );
    assert_eq!(overlay, before);
    Ok(())
}

#[test]
fn test_play_one_shot_single_ship() -> Result<(), SeaError> {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut enemy = SeaGrid::from_rows(&["...", ".#.", "..."])?;
    let mut overlay = TargetGrid::new(3, 3)?;

    let mut shots = 0;
    let last = loop {
        shots += 1;
        let answer = play_one_shot(&mut overlay, &mut enemy, &mut rng)?;
        if answer.signal == Signal::Win {
            break answer;
        }
        assert_eq!(answer.signal, Signal::Miss);
    };
    assert!(shots <= 9);
    assert_eq!(last.coords, vec![Coord::new(1, 1)]);
    assert_eq!(enemy.state(1, 1)?, SeaState::Killed);
    assert_eq!(overlay.state(1, 1)?, TargetState::Hit);
    assert!(overlay.coords_where(TargetState::is_open).is_empty());
    Ok(())
}

#[test]
fn test_hunt_standard_fleet() -> Result<(), SeaError> {
    for seed in 0..10 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let (mut enemy, _) = FieldConfig::default().random_fleet_grid(&mut rng)?;
        let mut overlay = TargetGrid::new(10, 10)?;

        let mut kills = 0;
        let mut shots = 0;
        loop {
            shots += 1;
            let answer = play_one_shot(&mut overlay, &mut enemy, &mut rng)?;
            if answer.signal.is_kill() {
                kills += 1;
                assert_eq!(overlay.count_where(TargetState::is_probable), 0);
            }
            if answer.signal == Signal::Win {
                break;
            }
        }
        assert_eq!(kills, 10);
        assert!(shots <= 100);
        assert!(!enemy.has_surviving_ship());
        assert_eq!(enemy.count_where(SeaState::is_killed), 20);
    }
    Ok(())
}
