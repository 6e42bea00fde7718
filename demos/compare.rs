//! Compare greedy best-first and A* search on one scenario.
//!
//! Run: cargo run --bin compare [MAP_FILE | --random SEED]

use std::path::Path;

use wayfind_demos::{Report, Scenario, ScenarioError, USAGE, run_all};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ScenarioError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let scenario = match args.as_slice() {
        [] => Scenario::demo(),
        [flag, seed] if flag == "--random" => {
            let seed = seed
                .parse()
                .map_err(|_| ScenarioError::Usage(format!("invalid seed: {seed}\n{USAGE}")))?;
            Scenario::random(20, 40, 0.25, seed)
        }
        [path] if !path.starts_with('-') => Scenario::load(Path::new(path))?,
        _ => return Err(ScenarioError::Usage(USAGE.to_string())),
    };

    let runs = run_all(&scenario)?;
    print!("{}", Report::new(&scenario, &runs));
    Ok(())
}
