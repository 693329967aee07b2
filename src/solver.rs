//! Solver entry points
//!
//! Wraps decoding, validation and the two-phase search behind `Solver` and
//! the free functions `solve`, `facecube`, `permutation`, `cycles` and
//! `solvable`.

use super::error::{Error, Result};
use super::facelet::{apply_maneuver, decode_pieces, encode};
use super::maneuver::Maneuver;
use super::search::{Search, SearchStats};
use super::tables::Tables;
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Step limit used when the caller has no preference
pub const DEFAULT_STEP_LIMIT: usize = 30;

static SHOW_PERF: AtomicBool = AtomicBool::new(false);

/// Set show-perf mode (outputs [PERF] lines to stderr after each solve)
pub fn set_show_perf(enabled: bool) {
    SHOW_PERF.store(enabled, Ordering::Relaxed);
}

/// A maneuver found by the solver, with search statistics
#[derive(Clone, Debug)]
pub struct Solution {
    pub maneuver: Maneuver,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

impl Solution {
    /// Number of moves
    pub fn len(&self) -> usize {
        self.maneuver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maneuver.is_empty()
    }
}

/// Finds a maneuver turning a source cube into a target cube
#[derive(Clone, Debug)]
pub struct Solver<'a> {
    source: &'a str,
    target: &'a str,
    step_limit: usize,
    optimal: bool,
}

impl<'a> Solver<'a> {
    /// Create a solver for two facelet strings (fast mode, default step limit)
    pub fn new(source: &'a str, target: &'a str) -> Self {
        Solver {
            source,
            target,
            step_limit: DEFAULT_STEP_LIMIT,
            optimal: false,
        }
    }

    /// Longest maneuver to accept
    pub fn step_limit(mut self, step_limit: usize) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// Search for a shortest maneuver instead of the first one found
    pub fn optimal(mut self, optimal: bool) -> Self {
        self.optimal = optimal;
        self
    }

    /// Run the search
    pub fn run(&self) -> Result<Solution> {
        let start = Instant::now();
        let source = decode_pieces(self.source).map_err(Error::InvalidSource)?;
        let target = decode_pieces(self.target).map_err(Error::InvalidTarget)?;

        if source == target {
            return Ok(Solution {
                maneuver: Maneuver::new(),
                stats: SearchStats::default(),
                elapsed: start.elapsed(),
            });
        }

        // Solving `relative` to the identity solves `source` to `target`
        let relative = target.inverse().multiply(&source);
        if relative.verify().is_err() {
            return Err(Error::Unsolvable);
        }

        let mut search = Search::new(Tables::get(), relative, self.step_limit);
        let found = search.solve(self.optimal);
        let stats = search.stats();
        let elapsed = start.elapsed();

        debug!(
            "{} search: {:?} in {:?} (phase-1 nodes {}, phase-2 nodes {}, phase-1 solutions {})",
            if self.optimal { "optimal" } else { "fast" },
            found.as_ref().map(|moves| moves.len()),
            elapsed,
            stats.phase1_nodes,
            stats.phase2_nodes,
            stats.phase1_solutions,
        );
        if SHOW_PERF.load(Ordering::Relaxed) {
            let nodes = stats.total_nodes();
            let ns_per_node = if nodes > 0 {
                elapsed.as_nanos() as f64 / nodes as f64
            } else {
                0.0
            };
            eprintln!(
                "[PERF] nodes={}, time={:.3}s, ns/node={:.1}",
                nodes,
                elapsed.as_secs_f64(),
                ns_per_node
            );
        }

        let moves = found.ok_or(Error::NotFound {
            step_limit: self.step_limit,
        })?;
        Ok(Solution {
            maneuver: Maneuver::from(moves),
            stats,
            elapsed,
        })
    }
}

/// Find a maneuver of at most `step_limit` moves turning `source` into `target`
///
/// With `optimal` the maneuver is a shortest one; otherwise the first found.
pub fn solve(source: &str, target: &str, step_limit: usize, optimal: bool) -> Result<String> {
    let solution = Solver::new(source, target)
        .step_limit(step_limit)
        .optimal(optimal)
        .run()?;
    Ok(solution.maneuver.to_string())
}

/// Facelets of `base` after applying `maneuver`
pub fn facecube(base: &str, maneuver: &str) -> Result<String> {
    apply_maneuver(base, maneuver)
}

/// Facelets of the solved cube after applying `maneuver`
pub fn permutation(maneuver: &str) -> Result<String> {
    let maneuver: Maneuver = maneuver.parse()?;
    Ok(encode(&maneuver.permutation()))
}

/// Cycle notation of the cubie permutation performed by `maneuver`
pub fn cycles(maneuver: &str) -> Result<String> {
    let maneuver: Maneuver = maneuver.parse()?;
    Ok(maneuver.permutation().cycles())
}

/// Check if a facelet string describes a cube reachable from the solved cube
pub fn solvable(cube: &str) -> bool {
    decode_pieces(cube).is_ok_and(|c| c.is_solvable())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::types::IDENTITY;

    #[test]
    fn test_same_cube() {
        let cube = permutation("R U F").unwrap();
        assert_eq!(solve(&cube, &cube, 0, true).unwrap(), "");
        assert_eq!(solve(IDENTITY, IDENTITY, 30, false).unwrap(), "");
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            solve("UUU", IDENTITY, 30, false),
            Err(Error::InvalidSource(ConfigError::WrongLength(3)))
        );
        assert_eq!(
            solve(IDENTITY, "", 30, false),
            Err(Error::InvalidTarget(ConfigError::WrongLength(0)))
        );
    }

    #[test]
    fn test_unsolvable() {
        let mut chars: Vec<char> = IDENTITY.chars().collect();
        chars.swap(7, 19); // flip UF
        let flipped: String = chars.into_iter().collect();
        assert!(!solvable(&flipped));
        assert_eq!(solve(&flipped, IDENTITY, 30, false), Err(Error::Unsolvable));
        assert_eq!(solve(IDENTITY, &flipped, 30, false), Err(Error::Unsolvable));
    }

    #[test]
    fn test_solver_builder() {
        let target = permutation("F R'").unwrap();
        let solution = Solver::new(IDENTITY, &target)
            .step_limit(5)
            .optimal(true)
            .run()
            .unwrap();
        assert_eq!(solution.maneuver.to_string(), "F R'");
        assert_eq!(solution.len(), 2);
        assert!(solution.stats.total_nodes() > 0);
    }

    #[test]
    fn test_solvable() {
        assert!(solvable(IDENTITY));
        assert!(solvable(&permutation("R U R' U'").unwrap()));
        assert!(!solvable(""));
        assert!(!solvable("not a cube"));
    }

    #[test]
    fn test_cycles() {
        assert_eq!(cycles("").unwrap(), "id");
        assert_eq!(cycles("R B' R F2 R' B R F2 R2").unwrap(), "(ufl,ubr,urf)");
        assert!(matches!(cycles("R X"), Err(Error::InvalidManeuver(_))));
    }
}
