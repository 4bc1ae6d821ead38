//! Tests for the LPA* state model: grid, keys, and the aggregate's open set

use lifelong_planning::config::SearchConfig;
use lifelong_planning::coordinate::Coordinate;
use lifelong_planning::error::PlanningError;
use lifelong_planning::lpastar::{Key, LpAstarCore};
use lifelong_planning::matrix::{LpState, INFINITY, STEP_COST};

fn core_5x5() -> LpAstarCore {
    LpAstarCore::new(5, 5, Coordinate::new(4, 4), "manhattan").unwrap()
}

#[test]
fn test_fresh_grid_is_unreached() {
    let core = core_5x5();
    let m = core.matrix();
    assert_eq!(m.iter().count(), 25);
    assert!(m.iter().all(|s| s.g == INFINITY && s.r == INFINITY));
    assert!(m.iter().all(|s| m[s.coordinate] == *s));
}

#[test]
fn test_unknown_heuristic_rejected_up_front() {
    match LpAstarCore::new(1000, 1000, Coordinate::new(0, 0), "diagonal") {
        Err(PlanningError::UnknownHeuristic(name)) => assert_eq!(name, "diagonal"),
        other => panic!("expected UnknownHeuristic, got {:?}", other.map(|c| c.goal())),
    }
}

#[test]
fn test_queue_pops_smallest_key_first() {
    let mut core = core_5x5();
    let cells = [
        (Coordinate::new(0, 0), 8, 8),
        (Coordinate::new(3, 3), 1, 1),
        (Coordinate::new(2, 2), 2, 2),
        (Coordinate::new(4, 0), INFINITY, 4),
    ];
    for (c, g, r) in cells {
        let s = core.matrix_mut().get_mut(c).unwrap();
        s.g = g;
        s.r = r;
        core.enqueue(c).unwrap();
    }

    let mut keys = Vec::new();
    while let Ok(s) = core.queue_mut().pop() {
        keys.push((s.coordinate, core.key(&s)));
    }
    assert_eq!(
        keys,
        vec![
            (Coordinate::new(3, 3), Key::new(1, 1)),
            (Coordinate::new(2, 2), Key::new(2, 2)),
            // g is infinite, r + h = 4 + 4
            (Coordinate::new(4, 0), Key::new(8, 4)),
            (Coordinate::new(0, 0), Key::new(8, 8)),
        ]
    );
}

#[test]
fn test_ties_on_first_break_on_second() {
    let mut core = core_5x5();
    let a = Coordinate::new(4, 2);
    let b = Coordinate::new(4, 3);
    // a: min(5, 3 + 2) = 5, min(5, 3) = 3
    core.matrix_mut()[a] = LpState { coordinate: a, g: 5, r: 3 };
    // b: min(5, 4 + 1) = 5, min(5, 4) = 4
    core.matrix_mut()[b] = LpState { coordinate: b, g: 5, r: 4 };
    core.enqueue(b).unwrap();
    core.enqueue(a).unwrap();

    assert_eq!(core.key_at(a).unwrap(), Key::new(5, 3));
    assert_eq!(core.key_at(b).unwrap(), Key::new(5, 4));
    assert_eq!(core.queue_mut().pop().unwrap().coordinate, a);
    assert_eq!(core.queue_mut().pop().unwrap().coordinate, b);
}

#[test]
fn test_stale_entries_are_detectable() {
    let mut core = core_5x5();
    let c = Coordinate::new(1, 1);

    core.matrix_mut()[c].r = 6;
    core.enqueue(c).unwrap();
    // Improved later; the queued copy is now stale
    core.matrix_mut()[c].r = 2;
    core.enqueue(c).unwrap();
    assert_eq!(core.queue().len(), 2);

    let mut acted_on = Vec::new();
    while let Ok(popped) = core.queue_mut().pop() {
        let live = core.matrix()[popped.coordinate];
        if popped != live {
            continue;
        }
        acted_on.push(core.key(&live));
    }
    assert_eq!(acted_on, vec![Key::new(2 + 3, 2)]);
}

#[test]
fn test_consistency_after_relaxing_from_goal() {
    let mut core = core_5x5();
    let goal = core.goal();
    core.matrix_mut()[goal].r = 0;
    assert!(!core.matrix()[goal].is_consistent());

    core.enqueue(goal).unwrap();
    let top = core.queue_mut().pop().unwrap();
    assert_eq!(core.key(&top), Key::new(0, 0));

    let (matrix, queue) = core.parts_mut();
    matrix[goal].g = matrix[goal].r;
    assert!(matrix[goal].is_consistent());

    let neighbours: Vec<Coordinate> = matrix.in_bounds_neighbours(goal).collect();
    assert_eq!(neighbours.len(), 3);
    for n in neighbours {
        matrix[n].r = matrix[goal].g + STEP_COST;
        queue.push(matrix[n]);
    }
    assert_eq!(core.queue().len(), 3);
    assert!(core.queue().top().unwrap().r == 1);
}

#[test]
fn test_out_of_range_access() {
    let mut core = core_5x5();
    assert!(matches!(
        core.key_at(Coordinate::new(5, 0)),
        Err(PlanningError::OutOfRange { .. })
    ));
    assert!(matches!(
        core.enqueue(Coordinate::new(0, -1)),
        Err(PlanningError::OutOfRange { .. })
    ));
    assert!(core.queue().is_empty());
}

#[test]
fn test_from_config() {
    let config = SearchConfig::from_toml_str(
        r#"
        height = 3
        width = 7
        heuristic = "euclidean"
        goal = { x = 6, y = 2 }
        "#,
    )
    .unwrap();
    let core = LpAstarCore::from_config(&config).unwrap();
    assert_eq!(core.matrix().height(), 3);
    assert_eq!(core.matrix().width(), 7);
    assert_eq!(core.goal(), Coordinate::new(6, 2));
    assert_eq!(core.heuristic_name(), "euclidean");
}

#[test]
fn test_from_config_with_unknown_heuristic() {
    let config = SearchConfig {
        height: 2,
        width: 2,
        goal: Coordinate::new(1, 1),
        heuristic: "nope".to_string(),
    };
    assert!(matches!(
        LpAstarCore::from_config(&config),
        Err(PlanningError::UnknownHeuristic(_))
    ));
}
