//! Rubik's Cube solver - Kociemba's two-phase algorithm
//!
//! Cubes are given as 54-character facelet strings (faces U, R, F, D, L, B,
//! nine stickers each) and maneuvers as face-turn text such as `R U2 F'`.
//!
//! The search uses:
//! - Cubie-level cube algebra with compile-time move transforms
//! - Reduced coordinates with move tables and BFS-built pruning tables
//! - IDA* over two phases: into the subgroup <U, D, R2, F2, L2, B2>, then solved
//! - A fast first-solution mode and an optimal shortest-solution mode
//!
//! # Example
//!
//! ```
//! use cube_solver::{facecube, permutation, solve, IDENTITY};
//!
//! let scrambled = permutation("R U R' F2").unwrap();
//! let maneuver = solve(&scrambled, IDENTITY, 30, true).unwrap();
//! assert_eq!(maneuver.split_whitespace().count(), 4);
//! assert_eq!(facecube(&scrambled, &maneuver).unwrap(), IDENTITY);
//! ```

mod coord;
pub mod cubie;
mod error;
pub mod facelet;
mod maneuver;
pub mod moves;
mod search;
mod solver;
mod tables;
pub mod types;

pub use cubie::CubeState;
pub use error::{ConfigError, Error, ManeuverError, Result};
pub use maneuver::Maneuver;
pub use moves::{Move, ALL_MOVES, PHASE2_MOVES};
pub use search::SearchStats;
pub use solver::{
    cycles, facecube, permutation, set_show_perf, solvable, solve, Solution, Solver,
    DEFAULT_STEP_LIMIT,
};
pub use tables::{default_cache_dir, init, init_cached, Tables, CACHE_FILENAME};
pub use types::IDENTITY;
