//! cube-solver - Rubik's Cube solver command line
//!
//! Subcommands:
//! - solve: find a maneuver from a source cube to a target cube
//! - color: apply a maneuver to a cube and print its facelets
//! - perm: print the cubie permutation of a maneuver in cycle notation
//! - check: tell whether a facelet string is a solvable cube
//!
//! Cubes are 54-character facelet strings; `cid` stands for the solved cube.
//!
//! Usage: cube-solver solve <src> [--target <tgt>] [--steps N] [--fast]

use clap::{Parser, Subcommand};
use cube_solver::{
    cycles, default_cache_dir, facecube, facelet, init_cached, permutation, set_show_perf,
    Error, Solver, DEFAULT_STEP_LIMIT, IDENTITY,
};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cube-solver")]
#[command(about = "Two-phase Rubik's Cube solver")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Verbose output (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print [PERF] lines to stderr after each solve
    #[arg(long = "perf", global = true)]
    perf: bool,

    /// Directory for the table cache (defaults to the user cache directory)
    #[arg(long = "cache-dir", global = true)]
    cache_dir: Option<PathBuf>,

    /// Build the tables in memory without reading or writing the cache
    #[arg(long = "no-cache", global = true)]
    no_cache: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Find a maneuver turning <SOURCE> into the target cube
    Solve {
        /// Source facelets
        source: String,

        /// Target facelets (defaults to the solved cube)
        #[arg(short = 't', long = "target", default_value = "cid")]
        target: String,

        /// Longest maneuver to accept
        #[arg(short = 'n', long = "steps", default_value_t = DEFAULT_STEP_LIMIT)]
        steps: usize,

        /// Return the first maneuver found instead of a shortest one
        #[arg(long = "fast")]
        fast: bool,
    },

    /// Apply a maneuver to a cube and print the resulting facelets
    Color {
        /// Maneuver, e.g. "R U2 F'"
        maneuver: String,

        /// Cube to start from (defaults to the solved cube)
        #[arg(short = 'c', long = "cube", default_value = "cid")]
        cube: String,
    },

    /// Print the cubie permutation performed by a maneuver
    Perm {
        /// Maneuver, e.g. "R U2 F'"
        maneuver: String,

        /// Print the facelets of the solved cube after the maneuver instead
        #[arg(long = "facelets")]
        facelets: bool,
    },

    /// Check whether a facelet string describes a solvable cube
    Check {
        /// Facelets to check
        cube: String,
    },
}

/// Expand the `cid` shorthand for the solved cube
fn cube_arg(arg: &str) -> &str {
    if arg == "cid" {
        IDENTITY
    } else {
        arg
    }
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
    set_show_perf(args.perf);

    let cache_dir = if args.no_cache {
        None
    } else {
        args.cache_dir.or_else(default_cache_dir)
    };

    match run(args.command, cache_dir) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.status_code());
        }
    }
}

fn run(command: Command, cache_dir: Option<PathBuf>) -> Result<String, Error> {
    match command {
        Command::Solve {
            source,
            target,
            steps,
            fast,
        } => {
            if let Some(dir) = cache_dir {
                init_cached(&dir);
            }
            let solution = Solver::new(cube_arg(&source), cube_arg(&target))
                .step_limit(steps)
                .optimal(!fast)
                .run()?;
            log::info!(
                "{} moves in {:.3}s",
                solution.len(),
                solution.elapsed.as_secs_f64()
            );
            Ok(solution.maneuver.to_string())
        }
        Command::Color { maneuver, cube } => facecube(cube_arg(&cube), &maneuver),
        Command::Perm {
            maneuver,
            facelets: true,
        } => permutation(&maneuver),
        Command::Perm { maneuver, .. } => cycles(&maneuver),
        Command::Check { cube } => Ok(match facelet::decode(cube_arg(&cube)) {
            Ok(_) => "solvable".to_string(),
            Err(reason) => format!("not solvable: {}", reason),
        }),
    }
}
