//! Timing harness shared by the `compare` binary.
//!
//! Builds a [`Scenario`] (the built-in demo grid, an ASCII map file, or a
//! seeded random grid), runs both search strategies on it while timing each
//! call, and renders a plain-text [`Report`].

use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

use rand::{RngExt, SeedableRng};
use wayfind_core::{BLOCKED, GridError, OccupancyGrid, Position, WALKABLE};
use wayfind_paths::{SearchError, SearchReport, Strategy, search};

/// Built-in demo grid: the column-1 walls force a detour and column 3 is
/// only open on the bottom row.
pub const DEMO_MAP: [[i32; 5]; 5] = [
    [0, 0, 0, 1, 0],
    [0, 1, 0, 1, 0],
    [0, 0, 0, 1, 0],
    [0, 1, 0, 1, 0],
    [0, 0, 0, 0, 0],
];

pub const USAGE: &str = "usage: compare [MAP_FILE | --random SEED]";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while preparing or running a scenario.
#[derive(Debug)]
pub enum ScenarioError {
    Io(std::io::Error),
    Grid(GridError),
    Search(SearchError),
    /// The map has no `S` or no `G`.
    MissingMarker(char),
    /// The map has more than one `S` or `G`.
    DuplicateMarker { ch: char, pos: Position },
    Usage(String),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read map: {e}"),
            Self::Grid(e) => write!(f, "invalid map: {e}"),
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::MissingMarker(ch) => write!(f, "map has no \u{201c}{ch}\u{201d} marker"),
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "map has a second \u{201c}{ch}\u{201d} marker at {pos}")
            }
            Self::Usage(s) => f.write_str(s),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScenarioError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for ScenarioError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SearchError> for ScenarioError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

/// A grid together with the start and goal to search between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub grid: OccupancyGrid,
    pub start: Position,
    pub goal: Position,
}

impl Scenario {
    /// The built-in [`DEMO_MAP`] from the top-left to the bottom-right corner.
    pub fn demo() -> Self {
        let mut grid = OccupancyGrid::new(DEMO_MAP.len(), DEMO_MAP[0].len());
        for (row, cells) in DEMO_MAP.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                grid.set(Position::new(row as i32, col as i32), cell);
            }
        }
        Self {
            grid,
            start: Position::new(0, 0),
            goal: Position::new(4, 4),
        }
    }

    /// Parse an ASCII map with exactly one `S` (start) and one `G` (goal).
    pub fn parse(text: &str) -> Result<Self, ScenarioError> {
        let mut start = None;
        let mut goal = None;
        for (row, line) in text.lines().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let slot = match ch {
                    'S' => &mut start,
                    'G' => &mut goal,
                    _ => continue,
                };
                let pos = Position::new(row as i32, col as i32);
                if slot.replace(pos).is_some() {
                    return Err(ScenarioError::DuplicateMarker { ch, pos });
                }
            }
        }

        let grid = OccupancyGrid::parse(text)?;
        Ok(Self {
            grid,
            start: start.ok_or(ScenarioError::MissingMarker('S'))?,
            goal: goal.ok_or(ScenarioError::MissingMarker('G'))?,
        })
    }

    /// Read and [`parse`](Self::parse) a map file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// A seeded random grid with roughly `wall_density` of its cells blocked.
    ///
    /// Start and goal sit in opposite corners and are always walkable; the
    /// goal is not guaranteed to be reachable.
    pub fn random(height: usize, width: usize, wall_density: f64, seed: u64) -> Self {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut grid = OccupancyGrid::new(height, width);
        for row in 0..height {
            for col in 0..width {
                let r: f64 = rng.random();
                if r < wall_density {
                    grid.set(Position::new(row as i32, col as i32), BLOCKED);
                }
            }
        }
        let start = Position::new(0, 0);
        let goal = Position::new(height as i32 - 1, width as i32 - 1);
        grid.set(start, WALKABLE);
        grid.set(goal, WALKABLE);
        Self { grid, start, goal }
    }
}

// ---------------------------------------------------------------------------
// Timing and reporting
// ---------------------------------------------------------------------------

/// Run `f` once and measure its wall-clock duration.
pub fn timed<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// One timed search.
#[derive(Debug, Clone)]
pub struct Run {
    pub report: SearchReport,
    pub elapsed: Duration,
}

/// Run every [`Strategy`] on `scenario`, timing each call.
pub fn run_all(scenario: &Scenario) -> Result<Vec<Run>, SearchError> {
    Strategy::ALL
        .iter()
        .map(|&strategy| {
            let (report, elapsed) =
                timed(|| search(&scenario.grid, scenario.start, scenario.goal, strategy));
            Ok(Run {
                report: report?,
                elapsed,
            })
        })
        .collect()
}

/// Format a path as `[(r, c), ...]`, or `None` when there is no path.
pub fn format_path(path: Option<&[Position]>) -> String {
    let Some(path) = path else {
        return "None".to_string();
    };
    let cells: Vec<String> = path.iter().map(Position::to_string).collect();
    format!("[{}]", cells.join(", "))
}

/// The comparison report printed by `compare`.
pub struct Report<'a> {
    pub scenario: &'a Scenario,
    pub runs: &'a [Run],
}

impl<'a> Report<'a> {
    pub fn new(scenario: &'a Scenario, runs: &'a [Run]) -> Self {
        Self { scenario, runs }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, run) in self.runs.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let r = &run.report;
            writeln!(f, "{}:", r.strategy)?;
            writeln!(f, "Path found: {}", format_path(r.path.as_deref()))?;
            writeln!(f, "Time taken: {:.10} seconds", run.elapsed.as_secs_f64())?;
            writeln!(
                f,
                "Nodes expanded: {}, enqueued: {}, peak frontier: {}",
                r.stats.expanded, r.stats.enqueued, r.stats.peak_frontier
            )?;
            if let Some(path) = &r.path {
                f.write_str(&self.scenario.grid.render_path(path))?;
            }
        }

        f.write_str("\nPath Quality Comparison:\n")?;
        for run in self.runs {
            match run.report.path_len() {
                Some(n) => writeln!(f, "Length of path found by {}: {n}", run.report.strategy)?,
                None => writeln!(
                    f,
                    "Length of path found by {}: No path found",
                    run.report.strategy
                )?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_paths::{bfs_distance, is_valid_path};

    #[test]
    fn demo_matches_map_file() {
        let file = Scenario::parse(include_str!("../maps/detour.txt")).unwrap();
        assert_eq!(file, Scenario::demo());
    }

    #[test]
    fn parse_requires_markers() {
        assert!(matches!(
            Scenario::parse("...\n..G"),
            Err(ScenarioError::MissingMarker('S'))
        ));
        assert!(matches!(
            Scenario::parse("S..\n..."),
            Err(ScenarioError::MissingMarker('G'))
        ));
        assert!(matches!(
            Scenario::parse("S.S\n..G"),
            Err(ScenarioError::DuplicateMarker { ch: 'S', .. })
        ));
    }

    #[test]
    fn parse_reports_grid_errors() {
        let err = Scenario::parse("S.\n..G").unwrap_err();
        assert!(matches!(err, ScenarioError::Grid(GridError::Ragged { .. })));
        let err = Scenario::parse("S.\n?G").unwrap_err();
        assert!(matches!(err, ScenarioError::Grid(GridError::InvalidCell { ch: '?', .. })));
    }

    #[test]
    fn random_is_reproducible() {
        let a = Scenario::random(10, 15, 0.25, 7);
        let b = Scenario::random(10, 15, 0.25, 7);
        assert_eq!(a, b);
        assert!(a.grid.is_walkable(a.start));
        assert!(a.grid.is_walkable(a.goal));
        assert_eq!(a.goal, Position::new(9, 14));
    }

    #[test]
    fn run_all_on_demo() {
        let scenario = Scenario::demo();
        let runs = run_all(&scenario).unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].report.strategy, Strategy::Greedy);
        assert_eq!(runs[1].report.strategy, Strategy::AStar);
        assert_eq!(runs[1].report.path_len(), Some(9));
        for run in &runs {
            let path = run.report.path.as_deref().unwrap();
            assert!(is_valid_path(&scenario.grid, path, scenario.start, scenario.goal));
        }
    }

    #[test]
    fn random_scenarios_astar_is_optimal() {
        for seed in 0..20 {
            let s = Scenario::random(12, 20, 0.25, seed);
            let runs = run_all(&s).unwrap();
            let expected = bfs_distance(&s.grid, s.start, s.goal).map(|d| d as usize + 1);
            assert_eq!(runs[1].report.path_len(), expected);
        }
    }

    #[test]
    fn report_for_unreachable_goal() {
        let scenario = Scenario::parse(include_str!("../maps/enclosed.txt")).unwrap();
        let runs = run_all(&scenario).unwrap();
        let text = Report::new(&scenario, &runs).to_string();
        assert!(text.contains("Path found: None"));
        assert!(text.contains("Length of path found by A* Search: No path found"));
        assert!(text.contains("Length of path found by Greedy Best-First Search: No path found"));
    }

    #[test]
    fn report_lists_both_strategies() {
        let scenario = Scenario::demo();
        let runs = run_all(&scenario).unwrap();
        let text = Report::new(&scenario, &runs).to_string();
        assert!(text.starts_with("Greedy Best-First Search:\n"));
        assert!(text.contains("\nA* Search:\n"));
        assert!(text.contains("Length of path found by A* Search: 9"));
    }

    #[test]
    fn format_path_variants() {
        assert_eq!(format_path(None), "None");
        let p = [Position::new(0, 0), Position::new(0, 1)];
        assert_eq!(format_path(Some(&p[..])), "[(0, 0), (0, 1)]");
    }

    #[test]
    fn timed_returns_result() {
        let (v, elapsed) = timed(|| 21 * 2);
        assert_eq!(v, 42);
        assert!(elapsed <= Duration::from_secs(5));
    }
}
