//! Facelet string encoding and decoding
//!
//! A facelet string lists the 54 stickers face by face (U, R, F, D, L, B),
//! each face read row by row as seen from outside the cube. The letter of a
//! sticker names the face whose center has the same color.

use super::cubie::CubeState;
use super::error::{ConfigError, Result};
use super::maneuver::Maneuver;
use super::types::*;

/// Decode a facelet string, checking only that it describes real pieces
///
/// Parity, twist and flip are not checked, so the result may be unreachable.
pub fn decode_pieces(facelets: &str) -> std::result::Result<CubeState, ConfigError> {
    let faces = parse_faces(facelets)?;
    let mut cube = CubeState::SOLVED;

    for slot in 0..NUM_CORNERS {
        let stickers = CORNER_FACELET[slot].map(|f| faces[f]);
        let ori = stickers
            .iter()
            .position(|&c| c == U || c == D)
            .ok_or(ConfigError::UnknownCorner {
                slot: corner_name(slot),
            })?;
        // Read clockwise from the U/D sticker; all three colors must match
        let colors = [stickers[ori], stickers[(ori + 1) % 3], stickers[(ori + 2) % 3]];
        let piece = CORNER_COLOR
            .iter()
            .position(|piece_colors| *piece_colors == colors)
            .ok_or(ConfigError::UnknownCorner {
                slot: corner_name(slot),
            })?;
        cube.cp[slot] = piece as u8;
        cube.co[slot] = ori as u8;
    }

    for slot in 0..NUM_EDGES {
        let [a, b] = EDGE_FACELET[slot].map(|f| faces[f]);
        let (piece, ori) = EDGE_COLOR
            .iter()
            .enumerate()
            .find_map(|(piece, colors)| match *colors {
                [x, y] if x == a && y == b => Some((piece, 0)),
                [x, y] if x == b && y == a => Some((piece, 1)),
                _ => None,
            })
            .ok_or(ConfigError::UnknownEdge {
                slot: edge_name(slot),
            })?;
        cube.ep[slot] = piece as u8;
        cube.eo[slot] = ori;
    }

    cube.check_pieces()?;
    Ok(cube)
}

/// Decode a facelet string into a reachable cube
pub fn decode(facelets: &str) -> std::result::Result<CubeState, ConfigError> {
    let cube = decode_pieces(facelets)?;
    cube.verify()?;
    Ok(cube)
}

/// Encode a cube as a facelet string
pub fn encode(cube: &CubeState) -> String {
    let mut faces = [U; NUM_FACELETS];
    for face in 0..NUM_FACES {
        faces[center_of(face)] = face;
    }
    for slot in 0..NUM_CORNERS {
        let ori = cube.co[slot] as usize;
        for k in 0..3 {
            faces[CORNER_FACELET[slot][(k + ori) % 3]] = CORNER_COLOR[cube.cp[slot] as usize][k];
        }
    }
    for slot in 0..NUM_EDGES {
        let ori = cube.eo[slot] as usize;
        for k in 0..2 {
            faces[EDGE_FACELET[slot][(k + ori) % 2]] = EDGE_COLOR[cube.ep[slot] as usize][k];
        }
    }
    faces.iter().map(|&f| face_char(f)).collect()
}

/// Apply a maneuver to a facelet string and return the resulting facelets
pub fn apply_maneuver(base: &str, maneuver: &str) -> Result<String> {
    let cube = decode(base)?;
    let maneuver: Maneuver = maneuver.parse()?;
    Ok(encode(&cube.apply_all(maneuver.moves())))
}

/// Check length, alphabet, symbol counts and centers
fn parse_faces(facelets: &str) -> std::result::Result<[Face; NUM_FACELETS], ConfigError> {
    let len = facelets.chars().count();
    if len != NUM_FACELETS {
        return Err(ConfigError::WrongLength(len));
    }

    let mut faces = [U; NUM_FACELETS];
    let mut counts = [0usize; NUM_FACES];
    for (index, symbol) in facelets.chars().enumerate() {
        let face = char_to_face(symbol).ok_or(ConfigError::InvalidSymbol { index, symbol })?;
        faces[index] = face;
        counts[face] += 1;
    }

    for (face, &count) in counts.iter().enumerate() {
        if count != FACE_SIZE {
            return Err(ConfigError::WrongCount {
                symbol: face_char(face),
                count,
            });
        }
    }

    for face in 0..NUM_FACES {
        let found = faces[center_of(face)];
        if found != face {
            return Err(ConfigError::MisplacedCenter {
                face: face_char(face),
                found: face_char(found),
            });
        }
    }

    Ok(faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;

    const AFTER_R: &str = "UUFUUFUUFRRRRRRRRRFFDFFDFFDDDBDDBDDBLLLLLLLLLUBBUBBUBB";
    const AFTER_R_F: &str = "UUFUUFLLLURRURRFRRFFFFFFDDDRRRDDBDDBLLDLLDLLBUBBUBBUBB";
    const AFTER_URF: &str = "UURUUFLLFURBURBFRBFFRFFRDDDRRRDDBDDLFFDLLDLLBULLUBBUBB";

    #[test]
    fn test_identity_round_trip() {
        let cube = decode(IDENTITY).unwrap();
        assert!(cube.is_solved());
        assert_eq!(encode(&cube), IDENTITY);
    }

    #[test]
    fn test_single_turns() {
        let r = CubeState::SOLVED.apply(Move::R);
        assert_eq!(encode(&r), AFTER_R);
        assert_eq!(encode(&r.apply(Move::F)), AFTER_R_F);
        assert_eq!(apply_maneuver(IDENTITY, "U R F").unwrap(), AFTER_URF);
    }

    #[test]
    fn test_decode_matches_moves() {
        for (text, moves) in [
            (AFTER_R, vec![Move::R]),
            (AFTER_R_F, vec![Move::R, Move::F]),
            (AFTER_URF, vec![Move::U, Move::R, Move::F]),
        ] {
            let cube = decode(text).unwrap();
            assert_eq!(cube, CubeState::SOLVED.apply_all(&moves));
            assert_eq!(encode(&cube), text);
        }
    }

    #[test]
    fn test_length_and_symbols() {
        assert_eq!(
            decode(&IDENTITY[..53]),
            Err(ConfigError::WrongLength(53))
        );
        let bad = IDENTITY.replacen('R', "X", 1);
        assert_eq!(
            decode(&bad),
            Err(ConfigError::InvalidSymbol {
                index: 9,
                symbol: 'X'
            })
        );
        let lower = IDENTITY.to_lowercase();
        assert!(matches!(
            decode(&lower),
            Err(ConfigError::InvalidSymbol { index: 0, .. })
        ));
    }

    #[test]
    fn test_wrong_count() {
        let mut chars: Vec<char> = IDENTITY.chars().collect();
        chars[0] = 'R';
        let text: String = chars.into_iter().collect();
        assert_eq!(
            decode(&text),
            Err(ConfigError::WrongCount {
                symbol: 'U',
                count: 8
            })
        );
    }

    #[test]
    fn test_misplaced_center() {
        let mut chars: Vec<char> = IDENTITY.chars().collect();
        chars.swap(center_of(U), center_of(R));
        let text: String = chars.into_iter().collect();
        assert_eq!(
            decode(&text),
            Err(ConfigError::MisplacedCenter {
                face: 'U',
                found: 'R'
            })
        );
    }

    #[test]
    fn test_unknown_piece() {
        // URF loses its U sticker to the UR edge
        let mut chars: Vec<char> = IDENTITY.chars().collect();
        chars.swap(CORNER_FACELET[URF][0], EDGE_FACELET[UR][1]);
        let text: String = chars.into_iter().collect();
        assert_eq!(decode(&text), Err(ConfigError::UnknownCorner { slot: "urf" }));

        // UF ends up with two F stickers
        let mut chars: Vec<char> = IDENTITY.chars().collect();
        chars.swap(EDGE_FACELET[UF][0], EDGE_FACELET[FR][0]);
        let text: String = chars.into_iter().collect();
        assert_eq!(decode(&text), Err(ConfigError::UnknownEdge { slot: "uf" }));
    }

    #[test]
    fn test_duplicate_piece() {
        // URF shows the UFL colors and ULB shows the UBR colors
        let mut chars: Vec<char> = IDENTITY.chars().collect();
        chars.swap(CORNER_FACELET[ULB][0], CORNER_FACELET[URF][1]);
        chars.swap(CORNER_FACELET[URF][0], CORNER_FACELET[ULB][1]);
        let text: String = chars.into_iter().collect();
        assert_eq!(
            decode_pieces(&text),
            Err(ConfigError::DuplicateCorner { piece: "ufl" })
        );
    }

    #[test]
    fn test_corner_colors_must_all_match() {
        // U and D stickers of URF and DFR exchanged: counts and side colors
        // are intact, but D R F is no corner
        let mut chars: Vec<char> = IDENTITY.chars().collect();
        chars.swap(CORNER_FACELET[URF][0], CORNER_FACELET[DFR][0]);
        let text: String = chars.into_iter().collect();
        assert_eq!(decode_pieces(&text), Err(ConfigError::UnknownCorner { slot: "urf" }));
        assert!(!crate::solvable(&text));
        assert!(matches!(
            apply_maneuver(&text, ""),
            Err(crate::Error::InvalidConfiguration(ConfigError::UnknownCorner { .. }))
        ));

        // Mirrored side stickers read U F R, which is no corner either
        let mut chars: Vec<char> = IDENTITY.chars().collect();
        chars.swap(CORNER_FACELET[URF][1], CORNER_FACELET[URF][2]);
        let text: String = chars.into_iter().collect();
        assert_eq!(decode_pieces(&text), Err(ConfigError::UnknownCorner { slot: "urf" }));
    }

    #[test]
    fn test_same_face_swaps_rejected() {
        // Exchanging two differently colored U stickers of a turned cube
        let turned = encode(&CubeState::SOLVED.apply(Move::R));
        let chars: Vec<char> = turned.chars().collect();
        for a in 0..FACE_SIZE {
            for b in a + 1..FACE_SIZE {
                if a == 4 || b == 4 || chars[a] == chars[b] {
                    continue;
                }
                let mut swapped = chars.clone();
                swapped.swap(a, b);
                let text: String = swapped.into_iter().collect();
                assert!(decode_pieces(&text).is_err(), "U{} <-> U{}", a + 1, b + 1);
                assert!(!crate::solvable(&text), "U{} <-> U{}", a + 1, b + 1);
            }
        }
    }

    #[test]
    fn test_invariants() {
        // Swapping the two stickers of UF flips that edge
        let mut chars: Vec<char> = IDENTITY.chars().collect();
        chars.swap(EDGE_FACELET[UF][0], EDGE_FACELET[UF][1]);
        let flipped: String = chars.into_iter().collect();
        assert_eq!(decode(&flipped), Err(ConfigError::Flip));
        assert!(decode_pieces(&flipped).is_ok());

        // Rotating the stickers of URF twists that corner
        let mut chars: Vec<char> = IDENTITY.chars().collect();
        let [a, b, c] = CORNER_FACELET[URF];
        let (ca, cb, cc) = (chars[a], chars[b], chars[c]);
        chars[a] = cc;
        chars[b] = ca;
        chars[c] = cb;
        let twisted: String = chars.into_iter().collect();
        assert_eq!(decode(&twisted), Err(ConfigError::Twist));

        // Exchanging the UR and UF edges breaks parity
        let mut chars: Vec<char> = IDENTITY.chars().collect();
        chars.swap(EDGE_FACELET[UR][1], EDGE_FACELET[UF][1]);
        let swapped: String = chars.into_iter().collect();
        assert_eq!(decode(&swapped), Err(ConfigError::Parity));
    }

    #[test]
    fn test_apply_maneuver_errors() {
        assert!(matches!(
            apply_maneuver("UUU", "R"),
            Err(crate::Error::InvalidConfiguration(ConfigError::WrongLength(3)))
        ));
        assert!(matches!(
            apply_maneuver(IDENTITY, "R Q"),
            Err(crate::Error::InvalidManeuver(_))
        ));
    }
}
