//! Face turns and their cubie-level transforms

use super::cubie::CubeState;
use super::types::*;

/// One of the 18 face turns; `U3` is U' (counter-clockwise)
///
/// Discriminant is `3 * face + power - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Move {
    U, U2, U3,
    R, R2, R3,
    F, F2, F3,
    D, D2, D3,
    L, L2, L3,
    B, B2, B3,
}

pub const NUM_MOVES: usize = 18;

/// All moves in canonical order (index = discriminant)
#[rustfmt::skip]
pub const ALL_MOVES: [Move; NUM_MOVES] = [
    Move::U, Move::U2, Move::U3,
    Move::R, Move::R2, Move::R3,
    Move::F, Move::F2, Move::F3,
    Move::D, Move::D2, Move::D3,
    Move::L, Move::L2, Move::L3,
    Move::B, Move::B2, Move::B3,
];

pub const NUM_PHASE2_MOVES: usize = 10;

/// Moves that keep the cube inside the phase-2 subgroup <U, D, R2, F2, L2, B2>
#[rustfmt::skip]
pub const PHASE2_MOVES: [Move; NUM_PHASE2_MOVES] = [
    Move::U, Move::U2, Move::U3,
    Move::R2, Move::F2,
    Move::D, Move::D2, Move::D3,
    Move::L2, Move::B2,
];

const BASIC_U: CubeState = CubeState {
    cp: [3, 0, 1, 2, 4, 5, 6, 7],
    co: [0; NUM_CORNERS],
    ep: [3, 0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11],
    eo: [0; NUM_EDGES],
};

const BASIC_R: CubeState = CubeState {
    cp: [4, 1, 2, 0, 7, 5, 6, 3],
    co: [2, 0, 0, 1, 1, 0, 0, 2],
    ep: [8, 1, 2, 3, 11, 5, 6, 7, 4, 9, 10, 0],
    eo: [0; NUM_EDGES],
};

const BASIC_F: CubeState = CubeState {
    cp: [1, 5, 2, 3, 0, 4, 6, 7],
    co: [1, 2, 0, 0, 2, 1, 0, 0],
    ep: [0, 9, 2, 3, 4, 8, 6, 7, 1, 5, 10, 11],
    eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
};

const BASIC_D: CubeState = CubeState {
    cp: [0, 1, 2, 3, 5, 6, 7, 4],
    co: [0; NUM_CORNERS],
    ep: [0, 1, 2, 3, 5, 6, 7, 4, 8, 9, 10, 11],
    eo: [0; NUM_EDGES],
};

const BASIC_L: CubeState = CubeState {
    cp: [0, 2, 6, 3, 4, 1, 5, 7],
    co: [0, 1, 2, 0, 0, 2, 1, 0],
    ep: [0, 1, 10, 3, 4, 5, 9, 7, 8, 2, 6, 11],
    eo: [0; NUM_EDGES],
};

const BASIC_B: CubeState = CubeState {
    cp: [0, 1, 3, 7, 4, 5, 2, 6],
    co: [0, 0, 1, 2, 0, 0, 2, 1],
    ep: [0, 1, 2, 11, 4, 5, 6, 10, 8, 9, 3, 7],
    eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
};

/// Transform of every move, in canonical order
pub static MOVE_CUBES: [CubeState; NUM_MOVES] = build_move_cubes();

const fn build_move_cubes() -> [CubeState; NUM_MOVES] {
    let basic = [BASIC_U, BASIC_R, BASIC_F, BASIC_D, BASIC_L, BASIC_B];
    let mut cubes = [CubeState::SOLVED; NUM_MOVES];
    let mut face = 0;
    while face < NUM_FACES {
        let quarter = basic[face];
        let half = quarter.multiply(&quarter);
        cubes[3 * face] = quarter;
        cubes[3 * face + 1] = half;
        cubes[3 * face + 2] = half.multiply(&quarter);
        face += 1;
    }
    cubes
}

impl Move {
    /// Move from its canonical index
    #[inline]
    pub fn from_index(index: usize) -> Option<Move> {
        ALL_MOVES.get(index).copied()
    }

    /// Move from a face and a power (1, 2 or 3 quarter turns clockwise)
    #[inline]
    pub fn new(face: Face, power: u8) -> Option<Move> {
        if face >= NUM_FACES || !(1..=3).contains(&power) {
            return None;
        }
        Some(ALL_MOVES[3 * face + power as usize - 1])
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Face being turned
    #[inline]
    pub fn face(self) -> Face {
        self as usize / 3
    }

    /// Number of clockwise quarter turns (1..=3)
    #[inline]
    pub fn power(self) -> u8 {
        self as u8 % 3 + 1
    }

    /// The move that undoes this one
    #[inline]
    pub fn inverse(self) -> Move {
        ALL_MOVES[3 * self.face() + (3 - self.power()) as usize]
    }

    /// Whether the move is allowed in phase 2 (any U/D turn, or a half turn)
    #[inline]
    pub fn is_phase2(self) -> bool {
        let face = self.face();
        face == U || face == D || self.power() == 2
    }

    /// Cubie-level transform of this move
    #[inline]
    pub fn cube(self) -> &'static CubeState {
        &MOVE_CUBES[self as usize]
    }

    /// Whether `self` may follow `prev` in a search sequence
    ///
    /// Rejects a second turn of the same face, and for opposite faces only
    /// the order with the U/R/F face first is allowed.
    #[inline]
    pub fn may_follow(self, prev: Move) -> bool {
        let (a, b) = (prev.face(), self.face());
        a != b && !(is_opposite(a, b) && a > b)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SUFFIX: [&str; 3] = ["", "2", "'"];
        write!(
            f,
            "{}{}",
            face_char(self.face()),
            SUFFIX[self.power() as usize - 1]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexing() {
        for (i, m) in ALL_MOVES.iter().enumerate() {
            assert_eq!(m.index(), i);
            assert_eq!(Move::from_index(i), Some(*m));
            assert_eq!(Move::new(m.face(), m.power()), Some(*m));
        }
        assert_eq!(Move::from_index(NUM_MOVES), None);
        assert_eq!(Move::new(U, 0), None);
        assert_eq!(Move::new(NUM_FACES, 1), None);
    }

    #[test]
    fn test_face_power() {
        assert_eq!(Move::R3.face(), R);
        assert_eq!(Move::R3.power(), 3);
        assert_eq!(Move::B2.face(), B);
        assert_eq!(Move::B2.power(), 2);
    }

    #[test]
    fn test_inverse() {
        assert_eq!(Move::U.inverse(), Move::U3);
        assert_eq!(Move::U3.inverse(), Move::U);
        assert_eq!(Move::F2.inverse(), Move::F2);
        for m in ALL_MOVES {
            assert!(m.cube().multiply(m.inverse().cube()).is_solved());
        }
    }

    #[test]
    fn test_phase2_moves() {
        let phase2: Vec<Move> = ALL_MOVES.into_iter().filter(|m| m.is_phase2()).collect();
        let mut expected = PHASE2_MOVES.to_vec();
        expected.sort();
        assert_eq!(phase2, expected);
    }

    #[test]
    fn test_may_follow() {
        assert!(!Move::R.may_follow(Move::R2));
        assert!(Move::L.may_follow(Move::R));
        assert!(!Move::R.may_follow(Move::L));
        assert!(Move::D3.may_follow(Move::U));
        assert!(!Move::U.may_follow(Move::D));
        assert!(Move::F.may_follow(Move::U));
    }

    #[test]
    fn test_display() {
        let text: Vec<String> = ALL_MOVES[..6].iter().map(|m| m.to_string()).collect();
        assert_eq!(text, ["U", "U2", "U'", "R", "R2", "R'"]);
    }

    #[test]
    fn test_move_cube_orientation_sums() {
        for m in ALL_MOVES {
            assert!(m.cube().verify().is_ok(), "{} is not a valid cube", m);
        }
    }
}
