use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aliases::advantage_state;
use crate::character::PROFICIENCY;
use crate::{ability_mod, roll_with_mode, AdMode, Character, CommandError, Dice, RollOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Check,
    Save,
}

impl Variant {
    pub fn parse(token: &str) -> Result<Variant, CommandError> {
        match token {
            "check" => Ok(Variant::Check),
            "save" => Ok(Variant::Save),
            other => Err(CommandError::UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Check => "check",
            Variant::Save => "save",
        })
    }
}

/// A validated `<skill> <check|save> [advantage|disadvantage]` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCommand {
    pub skill: String,
    pub variant: Variant,
    pub mode: AdMode,
}

impl SkillCommand {
    /// `args[0]` must already be the canonical trait key.
    pub fn parse(args: &[String]) -> Result<SkillCommand, CommandError> {
        let (skill, variant, mode) = match args {
            [skill, variant] => (skill, variant, None),
            [skill, variant, mode] => (skill, variant, Some(mode)),
            _ => return Err(CommandError::MalformedCommand { count: args.len() }),
        };
        let variant = Variant::parse(variant)?;
        let mode = match mode {
            None => AdMode::Normal,
            Some(token) => advantage_state(token)
                .ok_or_else(|| CommandError::UnknownAdvantageState(token.clone()))?,
        };
        Ok(SkillCommand { skill: skill.clone(), variant, mode })
    }

    pub fn resolve(self, character: &Character, dice: &mut Dice) -> Result<CheckResult, CommandError> {
        let modifier = skill_modifier(character, &self.skill, self.variant)?;
        debug!(skill = %self.skill, variant = %self.variant, mode = ?self.mode, modifier, "resolving skill roll");
        let outcome = roll_with_mode(dice, modifier, self.mode);
        Ok(CheckResult { skill: self.skill, variant: self.variant, mode: self.mode, modifier, outcome })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub skill: String,
    pub variant: Variant,
    pub mode: AdMode,
    pub modifier: i32,
    pub outcome: RollOutcome,
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} rolled a {} with a natural {}",
            self.skill, self.variant, self.outcome.modified, self.outcome.natural
        )
    }
}

/// Integer value of a numeric trait.
pub(crate) fn trait_value(character: &Character, key: &str) -> Result<i32, CommandError> {
    let raw = character
        .get(key)
        .ok_or_else(|| CommandError::UnknownTrait(key.to_string()))?;
    raw.trim().parse().map_err(|_| CommandError::InvalidTraitValue {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

/// `modifier` plus the integer value of `key`.
pub(crate) fn add_trait(modifier: i32, character: &Character, key: &str) -> Result<i32, CommandError> {
    modifier
        .checked_add(trait_value(character, key)?)
        .ok_or_else(|| CommandError::ModifierOutOfRange { key: key.to_string() })
}

/// Ability modifier of `skill`, plus the proficiency bonus when the
/// character is proficient in this kind of roll.
pub fn skill_modifier(
    character: &Character,
    skill: &str,
    variant: Variant,
) -> Result<i32, CommandError> {
    let mut modifier = ability_mod(trait_value(character, skill)?);
    let proficient = match variant {
        Variant::Save => character.save_proficient(skill),
        Variant::Check => character.check_proficient(skill),
    };
    if proficient {
        modifier = add_trait(modifier, character, PROFICIENCY)?;
    }
    Ok(modifier)
}

