use thiserror::Error;

use crate::CharacterError;

/// Everything that can stop a command before it produces a result. Input
/// errors are reported before any die is rolled.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("expecting two or three arguments, got {count}")]
    MalformedCommand { count: usize },
    #[error("expecting \"check\" or \"save\", got {0:?}")]
    UnknownVariant(String),
    #[error("expecting \"advantage\" or \"disadvantage\", got {0:?}")]
    UnknownAdvantageState(String),
    #[error("character has no trait {0:?}")]
    UnknownTrait(String),
    #[error("trait {key:?} has non-numeric value {value:?}")]
    InvalidTraitValue { key: String, value: String },
    #[error("adding {key:?} pushes the modifier out of range")]
    ModifierOutOfRange { key: String },
    #[error("invalid attack modifier: {0}")]
    InvalidAttackModifier(String),
    #[error("attack takes at most two modifiers, got {count}")]
    TooManyArguments { count: usize },
    #[error("command {0} is invalid")]
    UnknownCommand(String),
    #[error(transparent)]
    CharacterLoad(#[from] CharacterError),
}
