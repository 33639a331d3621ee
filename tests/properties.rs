use grid_search::{
    Algorithm, GridGraph, Outcome, Point, PriorityQueue, Role, Scenario, SearchEvent, Visit,
    DEFAULT_TRAVEL_COST, UNVISITED_COST,
};

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

#[test]
fn equal_priorities_keep_insertion_order() {
    let mut queue = PriorityQueue::new();
    for (name, priority) in [("first 3", 3), ("first 1", 1), ("only 2", 2), ("second 1", 1)] {
        queue.enqueue(name, priority);
    }
    let order: Vec<_> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
    assert_eq!(order, vec!["first 1", "second 1", "only 2", "first 3"]);
}

#[test]
fn resize_preserves_overlap() {
    let mut grid = GridGraph::new(3, 3).unwrap();
    grid.set_traversable(p(0, 0), false).unwrap();
    grid.set_travel_cost(p(2, 1), 6).unwrap();
    grid.set_travel_cost(p(1, 2), 8).unwrap();

    grid.resize(5, 2).unwrap();
    assert_eq!(grid.node_count(), 10);
    assert!(!grid.get_node(0, 0).unwrap().traversable());
    assert_eq!(grid.get_node(2, 1).unwrap().travel_cost(), 6);
    for (x, y) in [(3, 0), (4, 0), (3, 1), (4, 1)] {
        let node = grid.get_node(x, y).unwrap();
        assert!(node.traversable());
        assert_eq!(node.travel_cost(), DEFAULT_TRAVEL_COST);
    }
    // Row 2 no longer exists.
    assert!(grid.get_node(1, 2).is_err());
    // Edges follow the new bounds.
    assert!(grid.get_node(2, 1).unwrap().neighbour(grid_search::Direction::Right).is_some());
    assert!(grid.get_node(2, 1).unwrap().neighbour(grid_search::Direction::Down).is_none());
}

#[test]
fn search_after_resize() {
    let mut grid = GridGraph::new(2, 2).unwrap();
    let trace = grid.search(Algorithm::Dijkstra, p(0, 0), p(1, 1)).unwrap().run();
    assert!(trace.outcome().is_found());
    grid.resize(4, 3).unwrap();
    for node in grid.nodes() {
        assert_eq!(node.cost_to_start(), UNVISITED_COST);
        assert_eq!(node.predecessor(), None);
    }
    for algorithm in Algorithm::ALL {
        grid.reset_search_state();
        let trace = grid.search(algorithm, p(0, 0), p(3, 2)).unwrap().run();
        assert!(trace.outcome().is_found(), "{algorithm}");
    }
}

#[test]
fn second_run_without_reset_is_corrupted() {
    for algorithm in [Algorithm::BreadthFirst, Algorithm::DepthFirst, Algorithm::Dijkstra] {
        let mut grid = GridGraph::new(3, 3).unwrap();
        let first = grid.search(algorithm, p(0, 0), p(2, 2)).unwrap().run();
        assert!(first.outcome().is_found());
        // Every neighbour of the start is still claimed from the first run.
        let second = grid.search(algorithm, p(0, 0), p(2, 2)).unwrap().run();
        assert_eq!(second.outcome(), &Outcome::NoPathFound, "{algorithm}");
        assert_eq!(second.steps(), 1);

        grid.reset_search_state();
        let third = grid.search(algorithm, p(0, 0), p(2, 2)).unwrap().run();
        assert_eq!(third.outcome(), first.outcome());
    }
}

#[test]
fn wall_separates_start_and_goal() {
    let mut scenario: Scenario = "
        S.#..
        ..#..
        ..#.G
    "
    .parse()
    .unwrap();
    assert!(!scenario.grid.reachable(&scenario.start, &scenario.goal));
    for algorithm in Algorithm::ALL {
        let trace = scenario.run(algorithm).unwrap();
        assert_eq!(trace.outcome(), &Outcome::NoPathFound, "{algorithm}");
        // Only the left side was explored.
        assert!(trace.expanded().iter().all(|c| c.x < 2));
    }
}

#[test]
fn bfs_three_by_three() {
    let mut grid = GridGraph::new(3, 3).unwrap();
    let events: Vec<SearchEvent> = grid
        .search(Algorithm::BreadthFirst, p(0, 0), p(2, 2))
        .unwrap()
        .collect();
    let visit = |x, y, role, step| {
        SearchEvent::Visit(Visit {
            position: p(x, y),
            role,
            step,
        })
    };
    let expected = vec![
        visit(0, 0, Role::Start, 0),
        visit(1, 0, Role::Visited, 1),
        visit(0, 1, Role::Visited, 2),
        visit(2, 0, Role::Visited, 3),
        visit(1, 1, Role::Visited, 4),
        visit(0, 2, Role::Visited, 5),
        visit(2, 1, Role::Visited, 6),
        visit(1, 2, Role::Visited, 7),
        visit(2, 2, Role::Goal, 8),
        visit(2, 1, Role::OnFinalPath, 9),
        visit(2, 0, Role::OnFinalPath, 9),
        visit(1, 0, Role::OnFinalPath, 9),
        SearchEvent::Finished(Outcome::PathFound {
            path: vec![p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)],
            cost: 4,
        }),
    ];
    assert_eq!(events, expected);
}

// Equal costs on a plateau come out of the queue in insertion order, which makes the
// cost-ordered searches expand the grid exactly like breadth-first search does.
#[test]
fn cost_ordered_three_by_three() {
    let visit = |x, y, role, step| {
        SearchEvent::Visit(Visit {
            position: p(x, y),
            role,
            step,
        })
    };
    let expected = vec![
        visit(0, 0, Role::Start, 0),
        visit(1, 0, Role::Visited, 1),
        visit(0, 1, Role::Visited, 2),
        visit(2, 0, Role::Visited, 3),
        visit(1, 1, Role::Visited, 4),
        visit(0, 2, Role::Visited, 5),
        visit(2, 1, Role::Visited, 6),
        visit(1, 2, Role::Visited, 7),
        visit(2, 2, Role::Goal, 8),
        visit(2, 1, Role::OnFinalPath, 9),
        visit(2, 0, Role::OnFinalPath, 9),
        visit(1, 0, Role::OnFinalPath, 9),
        SearchEvent::Finished(Outcome::PathFound {
            path: vec![p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)],
            cost: 4,
        }),
    ];
    for algorithm in [Algorithm::Dijkstra, Algorithm::Astar] {
        let mut grid = GridGraph::new(3, 3).unwrap();
        let events: Vec<SearchEvent> = grid.search(algorithm, p(0, 0), p(2, 2)).unwrap().collect();
        assert_eq!(events, expected, "{algorithm}");
    }
}

#[test]
fn max_travel_cost_next_to_start() {
    let mut grid = GridGraph::new(3, 1).unwrap();
    grid.set_travel_cost(p(1, 0), i32::MAX).unwrap();
    for algorithm in Algorithm::ALL {
        grid.reset_search_state();
        let trace = grid.search(algorithm, p(0, 0), p(1, 0)).unwrap().run();
        assert_eq!(trace.outcome().cost(), Some(i32::MAX as i64), "{algorithm}");
    }
}

#[test]
fn path_through_two_max_cost_cells() {
    let mut grid = GridGraph::new(3, 1).unwrap();
    grid.set_travel_cost(p(1, 0), i32::MAX).unwrap();
    grid.set_travel_cost(p(2, 0), i32::MAX).unwrap();
    for algorithm in Algorithm::ALL {
        grid.reset_search_state();
        let trace = grid.search(algorithm, p(0, 0), p(2, 0)).unwrap().run();
        assert_eq!(trace.outcome().cost(), Some(2 * i32::MAX as i64), "{algorithm}");
        let path = trace.outcome().path().unwrap();
        assert_eq!(grid.path_cost(path).ok(), trace.outcome().cost());
    }
}

#[test]
fn long_cheap_detour_beats_max_cost_shortcut() {
    // S M G
    // . . .
    let mut grid = GridGraph::new(3, 2).unwrap();
    grid.set_travel_cost(p(1, 0), i32::MAX).unwrap();
    for algorithm in [Algorithm::Dijkstra, Algorithm::Astar] {
        grid.reset_search_state();
        let trace = grid.search(algorithm, p(0, 0), p(2, 0)).unwrap().run();
        assert_eq!(trace.outcome().cost(), Some(4), "{algorithm}");
        assert_eq!(
            trace.outcome().path(),
            Some(&[p(0, 0), p(0, 1), p(1, 1), p(2, 1), p(2, 0)][..])
        );
    }
}

#[test]
fn uniform_grid_hop_counts_agree() {
    let mut grid = GridGraph::new(6, 4).unwrap();
    let lengths: Vec<usize> = [Algorithm::BreadthFirst, Algorithm::Dijkstra, Algorithm::Astar]
        .into_iter()
        .map(|algorithm| {
            grid.reset_search_state();
            let trace = grid.search(algorithm, p(5, 0), p(0, 3)).unwrap().run();
            trace.outcome().path().map_or(0, <[Point]>::len)
        })
        .collect();
    assert_eq!(lengths, vec![9, 9, 9]);
}

#[test]
fn weighted_searches_agree_on_cost() {
    let mut scenario: Scenario = "
        S9111
        19191
        11191
        9999G
    "
    .parse()
    .unwrap();
    let dijkstra = scenario.run(Algorithm::Dijkstra).unwrap();
    let astar = scenario.run(Algorithm::Astar).unwrap();
    assert_eq!(dijkstra.outcome().cost(), Some(11));
    assert_eq!(astar.outcome().cost(), dijkstra.outcome().cost());
    let bfs = scenario.run(Algorithm::BreadthFirst).unwrap();
    assert!(bfs.outcome().cost() >= dijkstra.outcome().cost());
}

#[test]
fn stepping_can_pause_and_resume() {
    let mut grid = GridGraph::new(4, 4).unwrap();
    let mut search = grid.search(Algorithm::Astar, p(0, 0), p(3, 3)).unwrap();
    let first: Vec<SearchEvent> = search.by_ref().take(2).collect();
    assert_eq!(first.len(), 2);
    assert_eq!(search.steps_taken(), 2);
    assert_eq!(search.grid().get_node(0, 0).unwrap().cost_to_start(), 0);
    let rest: Vec<SearchEvent> = search.collect();
    assert!(matches!(rest.last(), Some(SearchEvent::Finished(Outcome::PathFound { cost: 6, .. }))));
}
