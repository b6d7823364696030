//! Die faces and dice rolling

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Outcome symbol on one die
///
/// Every face is equally likely. This is a five-way uniform draw, not a
/// physical six-sided die with a doubled face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieFace {
    Attack,
    Heal,
    One,
    Two,
    Three,
}

impl DieFace {
    pub const ALL: [DieFace; 5] = [
        DieFace::Attack,
        DieFace::Heal,
        DieFace::One,
        DieFace::Two,
        DieFace::Three,
    ];

    /// Faces that score victory points in sets of three
    pub const NUMERALS: [DieFace; 3] = [DieFace::One, DieFace::Two, DieFace::Three];

    /// Numeric value of a numeral face
    pub fn numeral(&self) -> Option<u32> {
        match self {
            DieFace::One => Some(1),
            DieFace::Two => Some(2),
            DieFace::Three => Some(3),
            DieFace::Attack | DieFace::Heal => None,
        }
    }

    /// Single-character glyph for text rendering
    pub fn glyph(&self) -> &'static str {
        match self {
            DieFace::Attack => "\u{2197}",
            DieFace::Heal => "\u{2665}",
            DieFace::One => "1",
            DieFace::Two => "2",
            DieFace::Three => "3",
        }
    }
}

impl fmt::Display for DieFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DieFace::Attack => write!(f, "Attack"),
            DieFace::Heal => write!(f, "Heal"),
            DieFace::One => write!(f, "1"),
            DieFace::Two => write!(f, "2"),
            DieFace::Three => write!(f, "3"),
        }
    }
}

impl Distribution<DieFace> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DieFace {
        DieFace::ALL[rng.gen_range(0..DieFace::ALL.len())]
    }
}

/// One turn's dice, in positional order
pub type Dice = SmallVec<[DieFace; 8]>;

/// Keep decision per die position (true = keep)
pub type KeepMask = SmallVec<[bool; 8]>;

/// Roll `n` independent dice
pub fn roll_dice<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Dice {
    (0..n).map(|_| rng.gen::<DieFace>()).collect()
}

/// Redraw every die whose mask entry is false, keeping the rest in place
///
/// The mask length must already be validated against the dice.
pub fn reroll<R: Rng + ?Sized>(rng: &mut R, dice: &[DieFace], keep: &[bool]) -> Dice {
    debug_assert_eq!(dice.len(), keep.len());
    dice.iter()
        .zip(keep)
        .map(|(&face, &kept)| if kept { face } else { rng.gen::<DieFace>() })
        .collect()
}

/// Count how many dice show `face`
pub fn count_face(dice: &[DieFace], face: DieFace) -> usize {
    dice.iter().filter(|&&d| d == face).count()
}

/// Format dice as `[Attack, 1, Heal, ...]`
pub fn format_dice(dice: &[DieFace]) -> String {
    let faces: Vec<String> = dice.iter().map(|d| d.to_string()).collect();
    format!("[{}]", faces.join(", "))
}
