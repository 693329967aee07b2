//! Two-phase IDA* search
//!
//! Phase 1 brings the cube into the subgroup H = <U, D, R2, F2, L2, B2>
//! (twist, flip and slice all 0), phase 2 solves it using only moves of H.
//! Both phases run depth-first with an exact remaining move budget and prune
//! with the admissible bounds from [`Tables`].
//!
//! - Fast mode returns the first solution: phase-1 length grows from its
//!   lower bound, and every phase-1 solution gets a short phase-2 IDA*.
//! - Optimal mode then searches every total length below the fast result,
//!   splitting it into every phase-1/phase-2 length pair, and returns the
//!   first hit, which is a shortest solution.
//!
//! When the fast pass finds nothing, the exhaustive search runs up to the
//! step limit, so `None` always means no solution exists within the limit.

use super::cubie::CubeState;
use super::moves::{Move, ALL_MOVES, PHASE2_MOVES};
use super::tables::Tables;
use log::trace;

/// Longest phase-2 search in fast mode; a phase-1 solution that needs more
/// is abandoned for a longer one
pub const FAST_PHASE2_DEPTH: usize = 10;

/// Counters collected during one search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited in phase 1
    pub phase1_nodes: u64,
    /// Nodes visited in phase 2
    pub phase2_nodes: u64,
    /// Phase-1 solutions handed to phase 2
    pub phase1_solutions: u64,
}

impl SearchStats {
    pub fn total_nodes(&self) -> u64 {
        self.phase1_nodes + self.phase2_nodes
    }
}

/// How many phase-2 moves to try after a phase-1 solution
#[derive(Clone, Copy, Debug)]
enum Phase2Budget {
    /// Anything up to the remaining step budget (capped at FAST_PHASE2_DEPTH)
    UpTo(usize),
    /// Exactly this total length
    Total(usize),
}

/// Search state for solving one cube
pub struct Search<'a> {
    tables: &'a Tables,
    cube: CubeState,
    step_limit: usize,
    moves: Vec<Move>,
    budget: Phase2Budget,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    /// Create a search that solves `cube` in at most `step_limit` moves
    pub fn new(tables: &'a Tables, cube: CubeState, step_limit: usize) -> Self {
        Search {
            tables,
            cube,
            step_limit,
            moves: Vec::new(),
            budget: Phase2Budget::UpTo(step_limit),
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Run the search; `None` if nothing fits within the step limit
    pub fn solve(&mut self, optimal: bool) -> Option<Vec<Move>> {
        if self.cube.is_solved() {
            return Some(Vec::new());
        }
        match self.solve_fast() {
            Some(found) if optimal => Some(self.solve_shorter(found.len()).unwrap_or(found)),
            Some(found) => Some(found),
            None => {
                trace!("fast pass failed, searching exhaustively");
                self.solve_shorter(self.step_limit.saturating_add(1))
            }
        }
    }

    /// First solution found by growing the phase-1 length
    fn solve_fast(&mut self) -> Option<Vec<Move>> {
        let (twist, flip, slice) = self.cube.phase1_coords();
        let lower = self.tables.phase1_bound(twist, flip, slice);

        for l1 in lower..=self.step_limit {
            #[cfg(feature = "debug_search")]
            eprintln!("solve_fast: phase-1 depth {}", l1);

            self.moves.clear();
            self.budget = Phase2Budget::UpTo(self.step_limit - l1);
            if self.phase1(twist, flip, slice, l1) {
                trace!("fast solution with {} phase-1 moves", l1);
                return Some(std::mem::take(&mut self.moves));
            }
        }
        None
    }

    /// Exhaustive search over all lengths shorter than `upper`
    fn solve_shorter(&mut self, upper: usize) -> Option<Vec<Move>> {
        let (twist, flip, slice) = self.cube.phase1_coords();
        let lower = self.tables.phase1_bound(twist, flip, slice);

        for total in lower..upper {
            trace!("optimal search at length {}", total);
            for l1 in lower..=total {
                #[cfg(feature = "debug_search")]
                eprintln!("solve_shorter: total {} phase-1 depth {}", total, l1);

                self.moves.clear();
                self.budget = Phase2Budget::Total(total);
                if self.phase1(twist, flip, slice, l1) {
                    return Some(std::mem::take(&mut self.moves));
                }
            }
        }
        None
    }

    /// Phase-1 search with exactly `togo` moves left
    ///
    /// On success the solution is left in `self.moves`.
    fn phase1(&mut self, twist: usize, flip: usize, slice: usize, togo: usize) -> bool {
        self.stats.phase1_nodes += 1;
        if togo == 0 {
            return self.tables.phase1_bound(twist, flip, slice) == 0 && self.start_phase2();
        }

        let last = self.moves.last().copied();
        for (slot, &m) in ALL_MOVES.iter().enumerate() {
            if last.is_some_and(|prev| !m.may_follow(prev)) {
                continue;
            }
            // A phase-1 solution ending in a phase-2 move is found one move
            // shorter
            if togo == 1 && m.is_phase2() {
                continue;
            }
            let t = self.tables.twist_move.get(twist, slot);
            let f = self.tables.flip_move.get(flip, slot);
            let s = self.tables.slice_move.get(slice, slot);
            if self.tables.phase1_bound(t, f, s) >= togo {
                continue;
            }
            self.moves.push(m);
            if self.phase1(t, f, s, togo - 1) {
                return true;
            }
            self.moves.pop();
        }
        false
    }

    /// Hand a phase-1 solution to phase 2
    fn start_phase2(&mut self) -> bool {
        self.stats.phase1_solutions += 1;
        let l1 = self.moves.len();
        let cube = self.cube.apply_all(&self.moves);
        let (corner, edge8, edge4) = cube.phase2_coords();
        let lower = self.tables.phase2_bound(corner, edge8, edge4);

        let (min_depth, max_depth) = match self.budget {
            Phase2Budget::UpTo(limit) => (lower, limit.min(FAST_PHASE2_DEPTH)),
            Phase2Budget::Total(total) => (total - l1, total - l1),
        };

        #[cfg(feature = "debug_search")]
        eprintln!(
            "start_phase2: l1={} moves={:?} bound={} depths={}..={}",
            l1, self.moves, lower, min_depth, max_depth
        );

        for l2 in min_depth.max(lower)..=max_depth {
            if self.phase2(corner, edge8, edge4, l2) {
                trace!("phase 2 solved in {} moves after {} phase-1 moves", l2, l1);
                return true;
            }
        }
        false
    }

    /// Phase-2 search with exactly `togo` moves left
    fn phase2(&mut self, corner: usize, edge8: usize, edge4: usize, togo: usize) -> bool {
        self.stats.phase2_nodes += 1;
        if togo == 0 {
            return corner == 0 && edge8 == 0 && edge4 == 0;
        }

        let last = self.moves.last().copied();
        for (slot, &m) in PHASE2_MOVES.iter().enumerate() {
            if last.is_some_and(|prev| !m.may_follow(prev)) {
                continue;
            }
            let c = self.tables.corner_move.get(corner, slot);
            let e8 = self.tables.edge8_move.get(edge8, slot);
            let e4 = self.tables.edge4_move.get(edge4, slot);
            if self.tables.phase2_bound(c, e8, e4) >= togo {
                continue;
            }
            self.moves.push(m);
            if self.phase2(c, e8, e4, togo - 1) {
                return true;
            }
            self.moves.pop();
        }
        false
    }
}
