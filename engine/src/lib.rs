use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

pub mod aliases;
pub mod api;
pub mod attack;
pub mod character;
pub mod checks;
pub mod error;

pub use api::{process_args, Resolution};
pub use character::{Character, CharacterError};
pub use error::CommandError;

/// Die size used by checks, saves and attacks.
pub const D20: i32 = 20;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdMode {
    #[default]
    Normal,
    Advantage,
    Disadvantage,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiceError {
    #[error("die size must be at least 1, got {0}")]
    InvalidDieSize(i32),
    #[error("dice quantity must be at least 1, got {0}")]
    InvalidQuantity(i32),
    #[error("damage total does not fit in an i32")]
    Overflow,
}

enum Source {
    Seeded(ChaCha8Rng),
    Scripted { faces: Vec<i32>, next: usize },
}

pub struct Dice {
    source: Source,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self { source: Source::Seeded(ChaCha8Rng::seed_from_u64(seed)) }
    }

    pub fn from_entropy() -> Self {
        Self { source: Source::Seeded(ChaCha8Rng::from_entropy()) }
    }

    /// Replays `faces` in order, wrapping around when exhausted. Each face is
    /// clamped into the range of the die being rolled.
    pub fn from_scripted(faces: Vec<i32>) -> Self {
        Self { source: Source::Scripted { faces, next: 0 } }
    }

    /// One face of a die with `sides` sides, in `1..=sides`.
    fn face(&mut self, sides: i32) -> i32 {
        match &mut self.source {
            Source::Seeded(rng) => rng.gen_range(1..=sides),
            Source::Scripted { faces, next } => {
                if faces.is_empty() {
                    return 1;
                }
                let face = faces[*next % faces.len()];
                *next += 1;
                face.clamp(1, sides)
            }
        }
    }
}

/// A single check roll: the modified result and the raw die face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    pub modified: i32,
    pub natural: i32,
}

impl RollOutcome {
    /// Combine two independent rolls. Each component is picked on its own, so
    /// the kept `modified` and `natural` can come from different rolls.
    pub fn combine(self, other: RollOutcome, mode: AdMode) -> RollOutcome {
        match mode {
            AdMode::Normal => self,
            AdMode::Advantage => RollOutcome {
                modified: self.modified.max(other.modified),
                natural: self.natural.max(other.natural),
            },
            AdMode::Disadvantage => RollOutcome {
                modified: self.modified.min(other.modified),
                natural: self.natural.min(other.natural),
            },
        }
    }
}

fn modified_roll(dice: &mut Dice, modifier: i32, die_size: i32) -> RollOutcome {
    let natural = dice.face(die_size);
    let modified = natural.saturating_add(modifier).max(0);
    trace!(die_size, natural, modifier, modified, "rolled check");
    RollOutcome { modified, natural }
}

/// Roll one die of `die_size` sides and apply `modifier`, flooring at 0.
pub fn roll_check(dice: &mut Dice, modifier: i32, die_size: i32) -> Result<RollOutcome, DiceError> {
    if die_size < 1 {
        return Err(DiceError::InvalidDieSize(die_size));
    }
    Ok(modified_roll(dice, modifier, die_size))
}

pub fn roll_d20(dice: &mut Dice, modifier: i32) -> RollOutcome {
    modified_roll(dice, modifier, D20)
}

/// Roll a d20 once, or twice and combine when rolling with (dis)advantage.
pub fn roll_with_mode(dice: &mut Dice, modifier: i32, mode: AdMode) -> RollOutcome {
    let first = roll_d20(dice, modifier);
    match mode {
        AdMode::Normal => first,
        AdMode::Advantage | AdMode::Disadvantage => {
            let second = roll_d20(dice, modifier);
            first.combine(second, mode)
        }
    }
}

/// `quantity` dice of `die_size` sides. The multiplier scales the dice only,
/// not the modifier (doubling dice on a critical hit).
pub fn roll_damage(
    dice: &mut Dice,
    quantity: i32,
    die_size: i32,
    modifier: i32,
    multiplier: i32,
) -> Result<i32, DiceError> {
    if quantity < 1 {
        return Err(DiceError::InvalidQuantity(quantity));
    }
    if die_size < 1 {
        return Err(DiceError::InvalidDieSize(die_size));
    }
    let mut sum: i32 = 0;
    for _ in 0..quantity {
        sum = sum.checked_add(dice.face(die_size)).ok_or(DiceError::Overflow)?;
    }
    sum.checked_mul(multiplier)
        .and_then(|total| total.checked_add(modifier))
        .ok_or(DiceError::Overflow)
}

/// D&D ability modifier = floor((score - 10) / 2) for integer scores.
pub fn ability_mod(score: i32) -> i32 {
    // `div_euclid` with positive divisor matches mathematical floor division.
    // Widened so every i32 score is accepted; the halved result always fits.
    (i64::from(score) - 10).div_euclid(2) as i32
}
