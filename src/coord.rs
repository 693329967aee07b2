//! Reduced coordinates of a cube
//!
//! Phase 1 works on orientations and the set of slots holding the four
//! middle-slice edges; phase 2 on the permutations inside the subgroup
//! <U, D, R2, F2, L2, B2>. Every coordinate is 0 on the solved cube.

use super::cubie::CubeState;
use super::types::*;

/// 3^7 corner twists
pub const N_TWIST: usize = 2187;
/// 2^11 edge flips
pub const N_FLIP: usize = 2048;
/// C(12,4) slot sets of the slice edges
pub const N_SLICE: usize = 495;
/// 8! corner permutations
pub const N_CORNER: usize = 40320;
/// 8! permutations of the U/D-layer edges
pub const N_EDGE8: usize = 40320;
/// 4! permutations of the slice edges
pub const N_EDGE4: usize = 24;

/// Binomial coefficient, 0 when `k > n`
pub const fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = if k > n - k { n - k } else { k };
    let mut result = 1;
    let mut i = 0;
    while i < k {
        result = result * (n - i) / (i + 1);
        i += 1;
    }
    result
}

/// Lexicographic rank of a permutation of `0..perm.len()`
pub fn rank(perm: &[u8]) -> usize {
    let n = perm.len();
    let mut r = 0;
    for i in 0..n {
        let smaller = perm[i + 1..].iter().filter(|&&p| p < perm[i]).count();
        r = r * (n - i) + smaller;
    }
    r
}

/// Inverse of [`rank`]: write the permutation with the given rank into `out`,
/// offsetting every value by `base`
pub fn unrank(mut index: usize, base: u8, out: &mut [u8]) {
    let n = out.len();
    let mut digits = [0usize; NUM_EDGES];
    for i in (0..n).rev() {
        digits[i] = index % (n - i);
        index /= n - i;
    }
    let mut available: Vec<u8> = (0..n as u8).collect();
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = base + available.remove(digits[i]);
    }
}

impl CubeState {
    /// Corner twist coordinate (0..N_TWIST)
    pub fn twist(&self) -> usize {
        self.co[..NUM_CORNERS - 1]
            .iter()
            .fold(0, |t, &o| t * 3 + o as usize)
    }

    pub fn set_twist(&mut self, mut twist: usize) {
        let mut sum = 0;
        for i in (0..NUM_CORNERS - 1).rev() {
            self.co[i] = (twist % 3) as u8;
            sum += self.co[i];
            twist /= 3;
        }
        self.co[NUM_CORNERS - 1] = (3 - sum % 3) % 3;
    }

    /// Edge flip coordinate (0..N_FLIP)
    pub fn flip(&self) -> usize {
        self.eo[..NUM_EDGES - 1]
            .iter()
            .fold(0, |f, &o| f * 2 + o as usize)
    }

    pub fn set_flip(&mut self, mut flip: usize) {
        let mut sum = 0;
        for i in (0..NUM_EDGES - 1).rev() {
            self.eo[i] = (flip % 2) as u8;
            sum += self.eo[i];
            flip /= 2;
        }
        self.eo[NUM_EDGES - 1] = sum % 2;
    }

    /// Which four slots hold the slice edges (0..N_SLICE)
    pub fn slice(&self) -> usize {
        let mut a = 0;
        let mut x = 0;
        for j in (0..NUM_EDGES).rev() {
            if self.ep[j] as usize >= FR {
                a += binomial(NUM_EDGES - 1 - j, x + 1);
                x += 1;
            }
        }
        a
    }

    /// Place the slice edges (in order FR, FL, BL, BR) into the slot set
    /// `slice`, the remaining edges in order into the other slots
    pub fn set_slice(&mut self, mut slice: usize) {
        let mut x = NUM_SLICE_EDGES;
        let mut next_slice = FR as u8;
        let mut next_other = 0u8;
        for j in 0..NUM_EDGES {
            let c = binomial(NUM_EDGES - 1 - j, x);
            if x > 0 && slice >= c {
                self.ep[j] = next_slice;
                next_slice += 1;
                slice -= c;
                x -= 1;
            } else {
                self.ep[j] = next_other;
                next_other += 1;
            }
        }
    }

    /// Corner permutation coordinate (0..N_CORNER)
    #[inline]
    pub fn corner(&self) -> usize {
        rank(&self.cp)
    }

    pub fn set_corner(&mut self, corner: usize) {
        unrank(corner, 0, &mut self.cp);
    }

    /// Permutation of the eight U/D-layer edges; only meaningful once the
    /// slice edges are back in the slice
    #[inline]
    pub fn edge8(&self) -> usize {
        rank(&self.ep[..FR])
    }

    pub fn set_edge8(&mut self, edge8: usize) {
        unrank(edge8, 0, &mut self.ep[..FR]);
    }

    /// Permutation of the four slice edges inside the slice
    pub fn edge4(&self) -> usize {
        let mut perm = [0u8; NUM_SLICE_EDGES];
        for (p, &e) in perm.iter_mut().zip(&self.ep[FR..]) {
            *p = e.wrapping_sub(FR as u8);
        }
        rank(&perm)
    }

    pub fn set_edge4(&mut self, edge4: usize) {
        unrank(edge4, FR as u8, &mut self.ep[FR..]);
    }

    /// Phase-1 coordinates (twist, flip, slice)
    #[inline]
    pub fn phase1_coords(&self) -> (usize, usize, usize) {
        (self.twist(), self.flip(), self.slice())
    }

    /// Phase-2 coordinates (corner, edge8, edge4)
    #[inline]
    pub fn phase2_coords(&self) -> (usize, usize, usize) {
        (self.corner(), self.edge8(), self.edge4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{Move, ALL_MOVES, PHASE2_MOVES};

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(12, 4), N_SLICE);
        assert_eq!(binomial(11, 4), 330);
        assert_eq!(binomial(3, 4), 0);
        assert_eq!(binomial(0, 0), 1);
    }

    #[test]
    fn test_rank_unrank() {
        assert_eq!(rank(&[0, 1, 2, 3]), 0);
        assert_eq!(rank(&[3, 2, 1, 0]), 23);
        let mut out = [0u8; 8];
        for index in [0, 1, 719, 5040, 40319] {
            unrank(index, 0, &mut out);
            assert_eq!(rank(&out), index);
        }
    }

    #[test]
    fn test_solved_is_zero() {
        let c = CubeState::SOLVED;
        assert_eq!(c.phase1_coords(), (0, 0, 0));
        assert_eq!(c.phase2_coords(), (0, 0, 0));
    }

    #[test]
    fn test_setters_invert_getters() {
        let mut c = CubeState::SOLVED;
        for t in [0, 1, 1000, N_TWIST - 1] {
            c.set_twist(t);
            assert_eq!(c.twist(), t);
            assert_eq!(c.co.iter().map(|&o| o as usize).sum::<usize>() % 3, 0);
        }
        for f in [0, 1, 777, N_FLIP - 1] {
            c.set_flip(f);
            assert_eq!(c.flip(), f);
        }
        for s in 0..N_SLICE {
            let mut c = CubeState::SOLVED;
            c.set_slice(s);
            assert_eq!(c.slice(), s);
            assert!(c.check_pieces().is_ok());
        }
        for e in [0, 5, N_EDGE4 - 1] {
            c.set_edge4(e);
            assert_eq!(c.edge4(), e);
        }
        for e in [0, 12345, N_EDGE8 - 1] {
            c.set_edge8(e);
            assert_eq!(c.edge8(), e);
            c.set_corner(e);
            assert_eq!(c.corner(), e);
        }
    }

    #[test]
    fn test_slice_extremes() {
        let mut c = CubeState::SOLVED;
        c.set_slice(N_SLICE - 1);
        assert_eq!(&c.ep[..4], &[8, 9, 10, 11]);
    }

    #[test]
    fn test_phase1_subgroup() {
        // Phase-2 moves keep the phase-1 coordinates at zero
        for m in PHASE2_MOVES {
            assert_eq!(m.cube().phase1_coords(), (0, 0, 0), "move {}", m);
        }
        let others = ALL_MOVES.iter().filter(|m| !m.is_phase2());
        for &m in others {
            assert_ne!(m.cube().phase1_coords(), (0, 0, 0), "move {}", m);
        }
        assert_ne!(Move::F.cube().flip(), 0);
        assert_eq!(Move::R.cube().flip(), 0);
    }
}
