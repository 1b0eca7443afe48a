//! The pair of dice shown on the table.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::rng::{GameRng, DIE_FACES};

/// Glyphs for faces 1 through 6.
const FACE_GLYPHS: [char; 6] = ['⚀', '⚁', '⚂', '⚃', '⚄', '⚅'];

/// Two dice, each showing a face in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)")]
pub struct Dice(u8, u8);

impl Dice {
    /// Dice as shown before the first roll of a round.
    pub const RESET: Dice = Dice(1, 1);

    /// Create a pair of dice, rejecting faces outside `1..=6`.
    pub fn new(first: u8, second: u8) -> Result<Self, GameError> {
        let valid = |face: u8| (1..=DIE_FACES).contains(&face);
        if valid(first) && valid(second) {
            Ok(Self(first, second))
        } else {
            Err(GameError::InvalidDice { first, second })
        }
    }

    #[must_use]
    pub fn first(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn second(self) -> u8 {
        self.1
    }

    /// Roll two independent dice.
    pub fn roll(rng: &mut GameRng) -> Self {
        Self(rng.roll_die(), rng.roll_die())
    }

    /// Sum of both faces.
    #[must_use]
    pub fn sum(self) -> u32 {
        u32::from(self.0) + u32::from(self.1)
    }

    /// Both dice show six.
    #[must_use]
    pub fn is_double_six(self) -> bool {
        self.0 == DIE_FACES && self.1 == DIE_FACES
    }

    /// Glyphs for both faces.
    #[must_use]
    pub fn glyphs(self) -> [char; 2] {
        [face_glyph(self.0), face_glyph(self.1)]
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::RESET
    }
}

impl TryFrom<(u8, u8)> for Dice {
    type Error = GameError;

    fn try_from((first, second): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(first, second)
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// Glyph for a single face. Out-of-range faces render as `?`.
#[must_use]
pub fn face_glyph(face: u8) -> char {
    match face {
        1..=6 => FACE_GLYPHS[usize::from(face - 1)],
        _ => '?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_and_double_six() {
        assert_eq!(Dice::new(2, 1).unwrap().sum(), 3);
        assert!(Dice::new(6, 6).unwrap().is_double_six());
        assert!(!Dice::new(6, 5).unwrap().is_double_six());
        assert!(!Dice::RESET.is_double_six());
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Dice::new(1, 6).unwrap().glyphs(), ['⚀', '⚅']);
        assert_eq!(face_glyph(3), '⚂');
        assert_eq!(face_glyph(0), '?');
        assert_eq!(face_glyph(7), '?');
    }

    #[test]
    fn test_default_is_reset() {
        assert_eq!(Dice::default(), Dice(1, 1));
    }

    #[test]
    fn test_invalid_faces_rejected() {
        assert!(matches!(
            Dice::new(0, 3),
            Err(GameError::InvalidDice { first: 0, second: 3 })
        ));
        assert!(Dice::new(4, 7).is_err());
        assert_eq!(Dice::new(6, 1).unwrap().first(), 6);
        assert_eq!(Dice::new(6, 1).unwrap().second(), 1);
    }

    #[test]
    fn test_deserialize_rejects_bad_faces() {
        let dice: Dice = serde_json::from_str("[3,5]").unwrap();
        assert_eq!(dice, Dice::new(3, 5).unwrap());
        assert!(serde_json::from_str::<Dice>("[0,9]").is_err());
    }

    #[test]
    fn test_double_six_frequency() {
        let mut rng = GameRng::new(99);
        let trials = 36_000;
        let hits = (0..trials).filter(|_| Dice::roll(&mut rng).is_double_six()).count();

        // Expect ~1000 (1/36)
        assert!((800..=1200).contains(&hits), "double six hit {hits} times");
    }
}
