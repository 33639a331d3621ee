use grid_search::{Algorithm, Role, Scenario, SearchEvent};

// Steps a breadth-first search through the layout
//  S . . #
//  . # . .
//  . # 3 G
// printing one line per processed cell, then the final picture, where
// - # marks a wall
// - digits are travel costs
// - S marks the start
// - G marks the goal

fn main() {
    let mut scenario: Scenario = "
        S..#
        .#..
        .#3G
    "
    .parse()
    .unwrap();
    println!("{}", scenario);
    let algorithm: Algorithm = std::env::args()
        .nth(1)
        .map(|s| s.parse().unwrap())
        .unwrap_or(Algorithm::BreadthFirst);

    let search = scenario.search(algorithm).unwrap();
    for event in search {
        match event {
            SearchEvent::Visit(visit) if visit.role == Role::OnFinalPath => {
                println!("        path {:?}", visit.position)
            }
            SearchEvent::Visit(visit) => {
                println!("step {:>2}: {:?} {:?}", visit.step, visit.role, visit.position)
            }
            SearchEvent::Finished(outcome) => println!("{:?}", outcome),
        }
    }

    let trace = scenario.run(algorithm).unwrap();
    print!("{}", trace.render(&scenario.grid));
}
