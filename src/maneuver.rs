//! Move sequences and their text form
//!
//! The text form is a whitespace-separated list of face turns: a face letter
//! (`U R F D L B`) optionally followed by `2` (half turn) or `'` (counter-clockwise).

use super::cubie::CubeState;
use super::error::ManeuverError;
use super::moves::Move;
use super::types::*;
use std::str::FromStr;

/// An ordered sequence of face turns
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Maneuver {
    moves: Vec<Move>,
}

impl Maneuver {
    /// Create an empty maneuver
    pub fn new() -> Self {
        Maneuver { moves: Vec::new() }
    }

    /// Parse a maneuver from text
    pub fn parse(text: &str) -> Result<Self, ManeuverError> {
        let moves = text
            .split_whitespace()
            .enumerate()
            .map(|(index, token)| {
                parse_token(token).ok_or_else(|| ManeuverError::UnknownToken {
                    index,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Maneuver { moves })
    }

    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Append a move
    pub fn push(&mut self, m: Move) -> &mut Self {
        self.moves.push(m);
        self
    }

    /// The maneuver that undoes this one
    pub fn inverse(&self) -> Maneuver {
        Maneuver {
            moves: self.moves.iter().rev().map(|m| m.inverse()).collect(),
        }
    }

    /// Cube obtained by applying this maneuver to the solved cube
    pub fn permutation(&self) -> CubeState {
        CubeState::SOLVED.apply_all(&self.moves)
    }
}

/// Parse one `<face>[2|']` token
fn parse_token(token: &str) -> Option<Move> {
    let mut chars = token.chars();
    let face = char_to_face(chars.next()?)?;
    let power = match chars.as_str() {
        "" => 1,
        "2" => 2,
        "'" => 3,
        _ => return None,
    };
    Move::new(face, power)
}

impl FromStr for Maneuver {
    type Err = ManeuverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Maneuver::parse(s)
    }
}

impl From<Vec<Move>> for Maneuver {
    fn from(moves: Vec<Move>) -> Self {
        Maneuver { moves }
    }
}

impl std::fmt::Display for Maneuver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, m) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", m)?;
        }
        Ok(())
    }
}
