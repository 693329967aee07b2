//! Core type definitions: faces, cubie slots and the facelet layout

/// Faces: U=0, R=1, F=2, D=3, L=4, B=5 (also the facelet colors)
pub type Face = usize;
pub const U: Face = 0;
pub const R: Face = 1;
pub const F: Face = 2;
pub const D: Face = 3;
pub const L: Face = 4;
pub const B: Face = 5;
pub const NUM_FACES: usize = 6;

/// Facelets per face, and in total
pub const FACE_SIZE: usize = 9;
pub const NUM_FACELETS: usize = NUM_FACES * FACE_SIZE;

/// Corner slots: URF=0, UFL=1, ULB=2, UBR=3, DFR=4, DLF=5, DBL=6, DRB=7
pub type Corner = usize;
pub const URF: Corner = 0;
pub const UFL: Corner = 1;
pub const ULB: Corner = 2;
pub const UBR: Corner = 3;
pub const DFR: Corner = 4;
pub const DLF: Corner = 5;
pub const DBL: Corner = 6;
pub const DRB: Corner = 7;
pub const NUM_CORNERS: usize = 8;

/// Edge slots: UR=0, UF=1, UL=2, UB=3, DR=4, DF=5, DL=6, DB=7, FR=8, FL=9, BL=10, BR=11
pub type Edge = usize;
pub const UR: Edge = 0;
pub const UF: Edge = 1;
pub const UL: Edge = 2;
pub const UB: Edge = 3;
pub const DR: Edge = 4;
pub const DF: Edge = 5;
pub const DL: Edge = 6;
pub const DB: Edge = 7;
pub const FR: Edge = 8;
pub const FL: Edge = 9;
pub const BL: Edge = 10;
pub const BR: Edge = 11;
pub const NUM_EDGES: usize = 12;

/// The four middle-slice edges are FR..=BR
pub const NUM_SLICE_EDGES: usize = 4;

/// Solved cube in facelet notation
pub const IDENTITY: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

/// Face letters in canonical order
pub const FACE_CHARS: [char; NUM_FACES] = ['U', 'R', 'F', 'D', 'L', 'B'];

/// Facelet index of each face's center
#[inline]
pub fn center_of(face: Face) -> usize {
    face * FACE_SIZE + 4
}

/// Facelets of each corner slot, starting with the U/D sticker, clockwise
pub const CORNER_FACELET: [[usize; 3]; NUM_CORNERS] = [
    [8, 9, 20],   // URF: U9 R1 F3
    [6, 18, 38],  // UFL: U7 F1 L3
    [0, 36, 47],  // ULB: U1 L1 B3
    [2, 45, 11],  // UBR: U3 B1 R3
    [29, 26, 15], // DFR: D3 F9 R7
    [27, 44, 24], // DLF: D1 L9 F7
    [33, 53, 42], // DBL: D7 B9 L7
    [35, 17, 51], // DRB: D9 R9 B7
];

/// Facelets of each edge slot, reference sticker first
pub const EDGE_FACELET: [[usize; 2]; NUM_EDGES] = [
    [5, 10],  // UR
    [7, 19],  // UF
    [3, 37],  // UL
    [1, 46],  // UB
    [32, 16], // DR
    [28, 25], // DF
    [30, 43], // DL
    [34, 52], // DB
    [23, 12], // FR
    [21, 41], // FL
    [50, 39], // BL
    [48, 14], // BR
];

/// Colors of each corner piece, in the order of `CORNER_FACELET`
pub const CORNER_COLOR: [[Face; 3]; NUM_CORNERS] = [
    [U, R, F],
    [U, F, L],
    [U, L, B],
    [U, B, R],
    [D, F, R],
    [D, L, F],
    [D, B, L],
    [D, R, B],
];

/// Colors of each edge piece, in the order of `EDGE_FACELET`
pub const EDGE_COLOR: [[Face; 2]; NUM_EDGES] = [
    [U, R],
    [U, F],
    [U, L],
    [U, B],
    [D, R],
    [D, F],
    [D, L],
    [D, B],
    [F, R],
    [F, L],
    [B, L],
    [B, R],
];

/// Get face letter
#[inline]
pub fn face_char(face: Face) -> char {
    FACE_CHARS[face]
}

/// Convert a facelet letter to a face
pub fn char_to_face(c: char) -> Option<Face> {
    match c {
        'U' => Some(U),
        'R' => Some(R),
        'F' => Some(F),
        'D' => Some(D),
        'L' => Some(L),
        'B' => Some(B),
        _ => None,
    }
}

/// Check if two faces are opposite (U/D, R/L, F/B)
#[inline]
pub fn is_opposite(a: Face, b: Face) -> bool {
    a.abs_diff(b) == 3
}

/// Get corner name (lowercase, as used in cycle notation)
pub fn corner_name(corner: Corner) -> &'static str {
    const NAMES: [&str; NUM_CORNERS] = ["urf", "ufl", "ulb", "ubr", "dfr", "dlf", "dbl", "drb"];
    NAMES[corner]
}

/// Get edge name (lowercase, as used in cycle notation)
pub fn edge_name(edge: Edge) -> &'static str {
    const NAMES: [&str; NUM_EDGES] = [
        "ur", "uf", "ul", "ub", "dr", "df", "dl", "db", "fr", "fl", "bl", "br",
    ];
    NAMES[edge]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_to_face() {
        assert_eq!(char_to_face('U'), Some(U));
        assert_eq!(char_to_face('B'), Some(B));
        assert_eq!(char_to_face('u'), None);
        assert_eq!(char_to_face('X'), None);
    }

    #[test]
    fn test_opposite_faces() {
        assert!(is_opposite(U, D));
        assert!(is_opposite(L, R));
        assert!(is_opposite(B, F));
        assert!(!is_opposite(U, R));
        assert!(!is_opposite(F, F));
    }

    #[test]
    fn test_facelets_cover_every_sticker_once() {
        let mut seen = [false; NUM_FACELETS];
        for face in 0..NUM_FACES {
            seen[center_of(face)] = true;
        }
        for corner in CORNER_FACELET {
            for f in corner {
                assert!(!seen[f], "facelet {} used twice", f);
                seen[f] = true;
            }
        }
        for edge in EDGE_FACELET {
            for f in edge {
                assert!(!seen[f], "facelet {} used twice", f);
                seen[f] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_facelet_colors_match_identity() {
        let identity: Vec<char> = IDENTITY.chars().collect();
        for (slot, facelets) in CORNER_FACELET.iter().enumerate() {
            for (k, &f) in facelets.iter().enumerate() {
                assert_eq!(identity[f], face_char(CORNER_COLOR[slot][k]));
            }
        }
        for (slot, facelets) in EDGE_FACELET.iter().enumerate() {
            for (k, &f) in facelets.iter().enumerate() {
                assert_eq!(identity[f], face_char(EDGE_COLOR[slot][k]));
            }
        }
    }
}
