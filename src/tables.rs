//! Move and pruning tables
//!
//! Built once per process on first use and read-only afterwards. Move tables
//! map `(coordinate, move)` to the coordinate after the move; pruning tables
//! hold the exact distance to the solved coordinate pair, which is a lower
//! bound on the moves needed for the whole cube.
//!
//! The tables can also be kept in a cache file (see [`init_cached`]) so later
//! processes load them instead of rebuilding.

use super::coord::*;
use super::cubie::CubeState;
use super::moves::{Move, ALL_MOVES, PHASE2_MOVES};
use log::{debug, info, warn};
use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Instant;

/// Marks an entry the breadth-first search has not reached yet
const UNVISITED: u8 = u8::MAX;

static TABLES: OnceLock<Tables> = OnceLock::new();

/// Name of the table file inside a cache directory
pub const CACHE_FILENAME: &str = "cube-solver-tables.bin";

/// Leading bytes of a table file; bump the version when the layout changes
const CACHE_MAGIC: &[u8; 8] = b"CUBETBL1";

/// Transition table of one coordinate under a fixed set of moves
#[derive(Debug, PartialEq, Eq)]
pub struct MoveTable {
    n_moves: usize,
    data: Vec<u16>,
}

impl MoveTable {
    /// Build by applying every move to a representative cube of each coordinate
    fn build(
        size: usize,
        moves: &[Move],
        set: fn(&mut CubeState, usize),
        get: fn(&CubeState) -> usize,
    ) -> Self {
        let n_moves = moves.len();
        let mut data = vec![0u16; size * n_moves];
        let mut cube = CubeState::SOLVED;
        for coord in 0..size {
            set(&mut cube, coord);
            for (slot, &m) in moves.iter().enumerate() {
                data[coord * n_moves + slot] = get(&cube.apply(m)) as u16;
            }
        }
        MoveTable { n_moves, data }
    }

    /// Coordinate after the move in `slot` (index into the move set)
    #[inline]
    pub fn get(&self, coord: usize, slot: usize) -> usize {
        self.data[coord * self.n_moves + slot] as usize
    }

    pub fn size(&self) -> usize {
        self.data.len() / self.n_moves
    }

    fn write_to(&self, w: &mut impl Write) -> io::Result<()> {
        write_u32(w, self.data.len() as u32)?;
        for &entry in &self.data {
            w.write_all(&entry.to_le_bytes())?;
        }
        Ok(())
    }

    /// Read a table stored by `write_to`, expecting `size` coordinates
    fn read_from(r: &mut impl Read, size: usize, n_moves: usize) -> io::Result<Self> {
        expect_len(read_u32(r)? as usize, size * n_moves)?;
        let mut bytes = vec![0u8; size * n_moves * 2];
        r.read_exact(&mut bytes)?;
        let data: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        if data.iter().any(|&next| next as usize >= size) {
            return Err(corrupt("move table entry out of range"));
        }
        Ok(MoveTable { n_moves, data })
    }
}

/// Distance table over the product of two coordinates
#[derive(Debug, PartialEq, Eq)]
pub struct PruningTable {
    /// Size of the second coordinate
    width: usize,
    data: Vec<u8>,
    max_depth: u8,
}

impl PruningTable {
    /// Breadth-first search from the solved pair (0, 0)
    fn build(first: &MoveTable, second: &MoveTable) -> Self {
        let width = second.size();
        let n_moves = first.n_moves;
        let mut data = vec![UNVISITED; first.size() * width];
        let mut queue = VecDeque::new();
        data[0] = 0;
        queue.push_back(0usize);
        let mut max_depth = 0;

        while let Some(index) = queue.pop_front() {
            let depth = data[index];
            max_depth = max_depth.max(depth);
            let (a, b) = (index / width, index % width);
            for slot in 0..n_moves {
                let next = first.get(a, slot) * width + second.get(b, slot);
                if data[next] == UNVISITED {
                    data[next] = depth + 1;
                    queue.push_back(next);
                }
            }
        }

        PruningTable {
            width,
            data,
            max_depth,
        }
    }

    /// Moves needed to bring both coordinates to 0
    #[inline]
    pub fn distance(&self, first: usize, second: usize) -> usize {
        self.data[first * self.width + second] as usize
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Number of entries the search reached
    pub fn reached(&self) -> usize {
        self.data.iter().filter(|&&d| d != UNVISITED).count()
    }

    fn write_to(&self, w: &mut impl Write) -> io::Result<()> {
        write_u32(w, self.data.len() as u32)?;
        w.write_all(&self.data)
    }

    /// Read a table stored by `write_to` for the given pair of move tables
    fn read_from(r: &mut impl Read, first: &MoveTable, second: &MoveTable) -> io::Result<Self> {
        let width = second.size();
        expect_len(read_u32(r)? as usize, first.size() * width)?;
        let mut data = vec![0u8; first.size() * width];
        r.read_exact(&mut data)?;
        if data[0] != 0 || data.contains(&UNVISITED) {
            return Err(corrupt("pruning table incomplete"));
        }
        let max_depth = data.iter().copied().max().unwrap_or(0);
        Ok(PruningTable {
            width,
            data,
            max_depth,
        })
    }
}

/// All tables used by the two-phase search
///
/// Obtained through [`Tables::get`], [`init_cached`] or the cache file
/// functions; there is no way to build a detached copy in memory.
///
/// ```compile_fail
/// let tables = cube_solver::Tables::build();
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Tables {
    pub twist_move: MoveTable,
    pub flip_move: MoveTable,
    pub slice_move: MoveTable,
    pub corner_move: MoveTable,
    pub edge8_move: MoveTable,
    pub edge4_move: MoveTable,
    pub slice_twist_prune: PruningTable,
    pub slice_flip_prune: PruningTable,
    pub edge4_edge8_prune: PruningTable,
    pub edge4_corner_prune: PruningTable,
}

impl Tables {
    /// Get the process-wide tables, building them on first use
    ///
    /// Concurrent first callers block until the build is finished.
    pub fn get() -> &'static Tables {
        TABLES.get_or_init(Tables::build)
    }

    /// Build every table from scratch
    fn build() -> Tables {
        let start = Instant::now();

        let twist_move =
            MoveTable::build(N_TWIST, &ALL_MOVES, CubeState::set_twist, CubeState::twist);
        let flip_move = MoveTable::build(N_FLIP, &ALL_MOVES, CubeState::set_flip, CubeState::flip);
        let slice_move =
            MoveTable::build(N_SLICE, &ALL_MOVES, CubeState::set_slice, CubeState::slice);
        let corner_move = MoveTable::build(
            N_CORNER,
            &PHASE2_MOVES,
            CubeState::set_corner,
            CubeState::corner,
        );
        let edge8_move =
            MoveTable::build(N_EDGE8, &PHASE2_MOVES, CubeState::set_edge8, CubeState::edge8);
        let edge4_move =
            MoveTable::build(N_EDGE4, &PHASE2_MOVES, CubeState::set_edge4, CubeState::edge4);
        debug!("move tables built in {:?}", start.elapsed());

        let slice_twist_prune = PruningTable::build(&slice_move, &twist_move);
        let slice_flip_prune = PruningTable::build(&slice_move, &flip_move);
        let edge4_edge8_prune = PruningTable::build(&edge4_move, &edge8_move);
        let edge4_corner_prune = PruningTable::build(&edge4_move, &corner_move);

        info!(
            "tables built in {:?} (pruning depths: slice/twist {}, slice/flip {}, edge4/edge8 {}, edge4/corner {})",
            start.elapsed(),
            slice_twist_prune.max_depth(),
            slice_flip_prune.max_depth(),
            edge4_edge8_prune.max_depth(),
            edge4_corner_prune.max_depth(),
        );

        Tables {
            twist_move,
            flip_move,
            slice_move,
            corner_move,
            edge8_move,
            edge4_move,
            slice_twist_prune,
            slice_flip_prune,
            edge4_edge8_prune,
            edge4_corner_prune,
        }
    }

    /// Load the tables from `dir`, or build them and store them there
    ///
    /// A missing or unreadable file is rebuilt; failing to write the new file
    /// is logged and otherwise ignored.
    pub fn load_or_build(dir: &Path) -> Tables {
        let path = dir.join(CACHE_FILENAME);
        match Tables::load_from(&path) {
            Ok(tables) => {
                info!("tables loaded from {}", path.display());
                return tables;
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no table cache at {}", path.display());
            }
            Err(e) => warn!("ignoring table cache {}: {}", path.display(), e),
        }

        let tables = Tables::build();
        if let Err(e) = fs::create_dir_all(dir).and_then(|_| tables.save_to(&path)) {
            warn!("cannot write table cache {}: {}", path.display(), e);
        }
        tables
    }

    /// Write every table to `path`
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        w.write_all(CACHE_MAGIC)?;
        for table in self.move_tables() {
            table.write_to(&mut w)?;
        }
        for table in self.pruning_tables() {
            table.write_to(&mut w)?;
        }
        w.flush()?;
        debug!("tables written to {}", path.display());
        Ok(())
    }

    /// Read tables written by `save_to`
    ///
    /// Sizes and entry ranges are checked; a file that fails the checks is
    /// reported as `InvalidData`.
    pub fn load_from(path: &Path) -> io::Result<Tables> {
        let mut r = BufReader::new(File::open(path)?);
        let mut magic = [0u8; 8];
        r.read_exact(&mut magic)?;
        if &magic != CACHE_MAGIC {
            return Err(corrupt("unknown table file header"));
        }

        let n1 = ALL_MOVES.len();
        let n2 = PHASE2_MOVES.len();
        let twist_move = MoveTable::read_from(&mut r, N_TWIST, n1)?;
        let flip_move = MoveTable::read_from(&mut r, N_FLIP, n1)?;
        let slice_move = MoveTable::read_from(&mut r, N_SLICE, n1)?;
        let corner_move = MoveTable::read_from(&mut r, N_CORNER, n2)?;
        let edge8_move = MoveTable::read_from(&mut r, N_EDGE8, n2)?;
        let edge4_move = MoveTable::read_from(&mut r, N_EDGE4, n2)?;
        let slice_twist_prune = PruningTable::read_from(&mut r, &slice_move, &twist_move)?;
        let slice_flip_prune = PruningTable::read_from(&mut r, &slice_move, &flip_move)?;
        let edge4_edge8_prune = PruningTable::read_from(&mut r, &edge4_move, &edge8_move)?;
        let edge4_corner_prune = PruningTable::read_from(&mut r, &edge4_move, &corner_move)?;

        if r.read(&mut [0u8; 1])? != 0 {
            return Err(corrupt("trailing data after tables"));
        }

        Ok(Tables {
            twist_move,
            flip_move,
            slice_move,
            corner_move,
            edge8_move,
            edge4_move,
            slice_twist_prune,
            slice_flip_prune,
            edge4_edge8_prune,
            edge4_corner_prune,
        })
    }

    fn move_tables(&self) -> [&MoveTable; 6] {
        [
            &self.twist_move,
            &self.flip_move,
            &self.slice_move,
            &self.corner_move,
            &self.edge8_move,
            &self.edge4_move,
        ]
    }

    fn pruning_tables(&self) -> [&PruningTable; 4] {
        [
            &self.slice_twist_prune,
            &self.slice_flip_prune,
            &self.edge4_edge8_prune,
            &self.edge4_corner_prune,
        ]
    }

    /// Lower bound on the moves needed to reach the phase-2 subgroup
    #[inline]
    pub fn phase1_bound(&self, twist: usize, flip: usize, slice: usize) -> usize {
        self.slice_twist_prune
            .distance(slice, twist)
            .max(self.slice_flip_prune.distance(slice, flip))
    }

    /// Lower bound on the phase-2 moves needed to solve the cube
    #[inline]
    pub fn phase2_bound(&self, corner: usize, edge8: usize, edge4: usize) -> usize {
        self.edge4_edge8_prune
            .distance(edge4, edge8)
            .max(self.edge4_corner_prune.distance(edge4, corner))
    }
}

/// Build the tables now instead of on the first solve
pub fn init() {
    Tables::get();
}

/// Set up the process-wide tables from a cache directory
///
/// Loads `dir`/[`CACHE_FILENAME`] when it holds valid tables, otherwise
/// builds them and writes the file. Has no effect once the tables exist.
pub fn init_cached(dir: &Path) -> &'static Tables {
    TABLES.get_or_init(|| Tables::load_or_build(dir))
}

/// Per-user cache directory for the table file, if one can be determined
pub fn default_cache_dir() -> Option<PathBuf> {
    let base = if cfg!(windows) {
        std::env::var_os("LOCALAPPDATA").map(PathBuf::from)
    } else if cfg!(target_os = "macos") {
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join("Library").join("Caches"))
    } else {
        std::env::var_os("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".cache")))
    };
    base.map(|dir| dir.join("cube-solver"))
}

fn write_u32(w: &mut impl Write, value: u32) -> io::Result<()> {
    w.write_all(&value.to_le_bytes())
}

fn read_u32(r: &mut impl Read) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn expect_len(found: usize, expected: usize) -> io::Result<()> {
    if found != expected {
        return Err(corrupt(&format!(
            "table has {} entries, expected {}",
            found, expected
        )));
    }
    Ok(())
}

fn corrupt(reason: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, reason.to_string())
}
