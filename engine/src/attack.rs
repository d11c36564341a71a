use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aliases::{advantage_state, canonical_trait};
use crate::character::PROFICIENCY;
use crate::checks::{add_trait, trait_value};
use crate::{ability_mod, roll_with_mode, AdMode, Character, CommandError, Dice, RollOutcome};

pub const DEFAULT_ATTACK_SKILL: &str = "strength";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttackToken {
    Mode(AdMode),
    Skill(&'static str),
}

fn classify(token: &str) -> Result<AttackToken, CommandError> {
    if let Some(mode) = advantage_state(token) {
        Ok(AttackToken::Mode(mode))
    } else if let Some(skill) = canonical_trait(token) {
        Ok(AttackToken::Skill(skill))
    } else {
        Err(CommandError::InvalidAttackModifier(format!(
            "{:?} is neither a skill nor advantage/disadvantage",
            token
        )))
    }
}

/// Validated attack modifiers: the ability that drives the roll and the
/// advantage state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackCommand {
    pub skill: &'static str,
    pub mode: AdMode,
}

impl Default for AttackCommand {
    fn default() -> Self {
        Self { skill: DEFAULT_ATTACK_SKILL, mode: AdMode::Normal }
    }
}

impl AttackCommand {
    /// Accepts up to two modifiers in either order, at most one of each kind.
    pub fn parse(args: &[String]) -> Result<AttackCommand, CommandError> {
        let mut cmd = AttackCommand::default();
        match args {
            [] => {}
            [one] => match classify(one)? {
                AttackToken::Mode(mode) => cmd.mode = mode,
                AttackToken::Skill(skill) => cmd.skill = skill,
            },
            [a, b] => match (classify(a)?, classify(b)?) {
                (AttackToken::Mode(mode), AttackToken::Skill(skill))
                | (AttackToken::Skill(skill), AttackToken::Mode(mode)) => {
                    cmd.mode = mode;
                    cmd.skill = skill;
                }
                _ => {
                    return Err(CommandError::InvalidAttackModifier(format!(
                        "{:?} and {:?} must be one skill and one of advantage/disadvantage",
                        a, b
                    )));
                }
            },
            _ => return Err(CommandError::TooManyArguments { count: args.len() }),
        }
        Ok(cmd)
    }

    pub fn resolve(self, character: &Character, dice: &mut Dice) -> Result<AttackResult, CommandError> {
        let modifier = attack_modifier(character, self.skill)?;
        debug!(skill = self.skill, mode = ?self.mode, modifier, "resolving attack roll");
        let outcome = roll_with_mode(dice, modifier, self.mode);
        Ok(AttackResult { skill: self.skill.to_string(), mode: self.mode, modifier, outcome })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResult {
    pub skill: String,
    pub mode: AdMode,
    pub modifier: i32,
    pub outcome: RollOutcome,
}

impl fmt::Display for AttackResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "attack rolled a {} with a natural {}",
            self.outcome.modified, self.outcome.natural
        )
    }
}

/// Attack bonus: ability modifier plus proficiency. Proficiency is always
/// added; weapon proficiency is not modelled.
pub fn attack_modifier(character: &Character, skill: &str) -> Result<i32, CommandError> {
    add_trait(ability_mod(trait_value(character, skill)?), character, PROFICIENCY)
}

