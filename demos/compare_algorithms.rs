use grid_search::{Algorithm, Scenario};

// Runs all four searches on the same weighted layout and compares how much of the
// grid each one explores against the cost of the path it returns.

fn main() {
    let mut scenario: Scenario = "
        S.......9.
        .#####..9.
        .#...#..9.
        .#.#.#....
        ...#...##G
    "
    .parse()
    .unwrap();
    println!("{}", scenario);
    for algorithm in Algorithm::ALL {
        let trace = scenario.run(algorithm).unwrap();
        println!(
            "{:>8}: {:>2} cells expanded, path cost {:?}",
            algorithm.to_string(),
            trace.steps(),
            trace.outcome().cost()
        );
        println!("{}", trace.render(&scenario.grid));
    }
}
