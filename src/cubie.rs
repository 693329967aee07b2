//! Cubie-level cube representation
//!
//! A cube is stored as four small arrays: which corner/edge piece occupies
//! each slot ("replaced-by" convention) and how it is twisted/flipped there.
//! Composition follows the convention `a.multiply(&b)` = apply `a`, then `b`,
//! so the state after a move sequence is `SOLVED * m1 * m2 * ...`.

use super::error::ConfigError;
use super::moves::Move;
use super::types::*;

/// Full permutation + orientation state of a 3x3x3 cube - no heap allocation
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeState {
    /// Corner piece in each corner slot
    pub cp: [u8; NUM_CORNERS],
    /// Corner twist in each slot (0..3)
    pub co: [u8; NUM_CORNERS],
    /// Edge piece in each edge slot
    pub ep: [u8; NUM_EDGES],
    /// Edge flip in each slot (0..2)
    pub eo: [u8; NUM_EDGES],
}

impl CubeState {
    pub const SOLVED: CubeState = CubeState {
        cp: [0, 1, 2, 3, 4, 5, 6, 7],
        co: [0; NUM_CORNERS],
        ep: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        eo: [0; NUM_EDGES],
    };

    /// Compose two transforms: apply `self`, then `other`
    pub const fn multiply(&self, other: &CubeState) -> CubeState {
        let mut out = CubeState::SOLVED;
        let mut i = 0;
        while i < NUM_CORNERS {
            let from = other.cp[i] as usize;
            out.cp[i] = self.cp[from];
            out.co[i] = (self.co[from] + other.co[i]) % 3;
            i += 1;
        }
        let mut i = 0;
        while i < NUM_EDGES {
            let from = other.ep[i] as usize;
            out.ep[i] = self.ep[from];
            out.eo[i] = (self.eo[from] + other.eo[i]) % 2;
            i += 1;
        }
        out
    }

    /// The inverse transform: `x.multiply(&x.inverse()) == SOLVED`
    pub fn inverse(&self) -> CubeState {
        let mut out = CubeState::SOLVED;
        for i in 0..NUM_CORNERS {
            out.cp[self.cp[i] as usize] = i as u8;
        }
        for i in 0..NUM_CORNERS {
            out.co[i] = (3 - self.co[out.cp[i] as usize]) % 3;
        }
        for i in 0..NUM_EDGES {
            out.ep[self.ep[i] as usize] = i as u8;
        }
        for i in 0..NUM_EDGES {
            out.eo[i] = (2 - self.eo[out.ep[i] as usize]) % 2;
        }
        out
    }

    /// Apply a single move
    #[inline]
    pub fn apply(&self, m: Move) -> CubeState {
        self.multiply(m.cube())
    }

    /// Apply a sequence of moves in order
    pub fn apply_all(&self, moves: &[Move]) -> CubeState {
        moves.iter().fold(*self, |cube, &m| cube.apply(m))
    }

    /// Check if this is the solved cube
    #[inline]
    pub fn is_solved(&self) -> bool {
        *self == CubeState::SOLVED
    }

    /// Permutation parity of the corners (0 = even, 1 = odd)
    pub fn corner_parity(&self) -> u8 {
        parity(&self.cp)
    }

    /// Permutation parity of the edges (0 = even, 1 = odd)
    pub fn edge_parity(&self) -> u8 {
        parity(&self.ep)
    }

    /// Check that every corner and edge piece occurs exactly once
    pub fn check_pieces(&self) -> Result<(), ConfigError> {
        let mut seen = [false; NUM_CORNERS];
        for (slot, &c) in self.cp.iter().enumerate() {
            let c = c as usize;
            if c >= NUM_CORNERS {
                return Err(ConfigError::UnknownCorner {
                    slot: corner_name(slot),
                });
            }
            if seen[c] {
                return Err(ConfigError::DuplicateCorner {
                    piece: corner_name(c),
                });
            }
            seen[c] = true;
        }
        let mut seen = [false; NUM_EDGES];
        for (slot, &e) in self.ep.iter().enumerate() {
            let e = e as usize;
            if e >= NUM_EDGES {
                return Err(ConfigError::UnknownEdge {
                    slot: edge_name(slot),
                });
            }
            if seen[e] {
                return Err(ConfigError::DuplicateEdge { piece: edge_name(e) });
            }
            seen[e] = true;
        }
        Ok(())
    }

    /// Check that the cube is reachable from the solved cube by face turns
    pub fn verify(&self) -> Result<(), ConfigError> {
        self.check_pieces()?;
        if self.corner_parity() != self.edge_parity() {
            return Err(ConfigError::Parity);
        }
        if self.co.iter().map(|&o| o as usize).sum::<usize>() % 3 != 0 {
            return Err(ConfigError::Twist);
        }
        if self.eo.iter().map(|&o| o as usize).sum::<usize>() % 2 != 0 {
            return Err(ConfigError::Flip);
        }
        Ok(())
    }

    /// Check reachability without the reason
    #[inline]
    pub fn is_solvable(&self) -> bool {
        self.verify().is_ok()
    }

    /// Disjoint-cycle notation of the cubie permutation
    ///
    /// Twisted/flipped pieces that stay in place are written `(+urf)`,
    /// cycles as `(-dfr,+drb,-ubr,+urf)`, longest cycles first. The sign in
    /// front of a piece is the orientation it picks up when it moves into the
    /// next slot. The solved cube is `id`.
    pub fn cycles(&self) -> String {
        let mut out = String::new();
        let (fixed, cycles) = decompose(&self.cp);
        for c in fixed {
            if self.co[c] != 0 {
                out.push_str(&format!("({}{})", twist_sign(self.co[c]), corner_name(c)));
            }
        }
        for cycle in cycles {
            let n = cycle.len();
            let parts: Vec<String> = (0..n)
                .map(|k| {
                    let ori = self.co[cycle[(k + n - 1) % n]];
                    format!("{}{}", twist_sign(ori), corner_name(cycle[k]))
                })
                .collect();
            out.push_str(&format!("({})", parts.join(",")));
        }
        let (fixed, cycles) = decompose(&self.ep);
        for e in fixed {
            if self.eo[e] != 0 {
                out.push_str(&format!("(+{})", edge_name(e)));
            }
        }
        for cycle in cycles {
            let n = cycle.len();
            let parts: Vec<String> = (0..n)
                .map(|k| {
                    let ori = self.eo[cycle[(k + n - 1) % n]];
                    format!("{}{}", twist_sign(ori), edge_name(cycle[k]))
                })
                .collect();
            out.push_str(&format!("({})", parts.join(",")));
        }
        if out.is_empty() {
            out.push_str("id");
        }
        out
    }
}

impl Default for CubeState {
    fn default() -> Self {
        CubeState::SOLVED
    }
}

impl std::fmt::Debug for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CubeState(cp={:?} co={:?} ep={:?} eo={:?})",
            self.cp, self.co, self.ep, self.eo
        )
    }
}

impl std::ops::Mul for CubeState {
    type Output = CubeState;

    #[inline]
    fn mul(self, rhs: CubeState) -> CubeState {
        self.multiply(&rhs)
    }
}

/// Permutation parity by counting inversions
fn parity(perm: &[u8]) -> u8 {
    let mut inversions = 0;
    for i in 0..perm.len() {
        for j in i + 1..perm.len() {
            if perm[i] > perm[j] {
                inversions += 1;
            }
        }
    }
    (inversions % 2) as u8
}

fn twist_sign(ori: u8) -> &'static str {
    match ori {
        1 => "+",
        2 => "-",
        _ => "",
    }
}

/// Split a permutation into fixed points and cycles (longest first)
///
/// Each cycle starts at `perm[i]` for its smallest slot `i` and ends at `i`.
fn decompose(perm: &[u8]) -> (Vec<usize>, Vec<Vec<usize>>) {
    let mut fixed = Vec::new();
    let mut cycles: Vec<Vec<usize>> = Vec::new();
    let mut visited = vec![false; perm.len()];
    for i in 0..perm.len() {
        if visited[i] {
            continue;
        }
        let mut cycle = Vec::new();
        let mut j = perm[i] as usize;
        while j != i {
            visited[j] = true;
            cycle.push(j);
            j = perm[j] as usize;
        }
        visited[i] = true;
        cycle.push(i);
        if cycle.len() > 1 {
            cycles.push(cycle);
        } else {
            fixed.push(i);
        }
    }
    cycles.sort_by(|a, b| b.len().cmp(&a.len()));
    (fixed, cycles)
}
