use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::aliases::{canonical_trait, TopLevel};
use crate::attack::{AttackCommand, AttackResult};
use crate::checks::{CheckResult, SkillCommand};
use crate::{Character, CharacterError, CommandError, Dice};

/// The outcome of one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    Check(CheckResult),
    Attack(AttackResult),
    /// A recognized command that does nothing yet.
    Pending { command: String },
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Check(res) => fmt::Display::fmt(res, f),
            Resolution::Attack(res) => fmt::Display::fmt(res, f),
            Resolution::Pending { command } => write!(f, "{}: not yet implemented", command),
        }
    }
}

/// First-token classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Skill(&'static str),
    TopLevel(TopLevel),
}

impl Command {
    pub fn classify(token: &str) -> Result<Command, CommandError> {
        if let Some(skill) = canonical_trait(token) {
            Ok(Command::Skill(skill))
        } else if let Some(cmd) = TopLevel::parse(token) {
            Ok(Command::TopLevel(cmd))
        } else {
            Err(CommandError::UnknownCommand(token.to_string()))
        }
    }
}

/// Interpret a free-form command such as `con save adv` or `attack dex`.
///
/// Tokens are validated before `load_character` is called, and it is called
/// only for commands that need the character.
pub fn process_args<S: AsRef<str>>(
    args: &[S],
    load_character: impl FnOnce() -> Result<Character, CharacterError>,
    dice: &mut Dice,
) -> Result<Resolution, CommandError> {
    let mut args: Vec<String> = args.iter().map(|a| a.as_ref().trim().to_lowercase()).collect();
    let Some(first) = args.first() else {
        return Err(CommandError::MalformedCommand { count: 0 });
    };

    let command = Command::classify(first)?;
    debug!(?command, args = ?args, "dispatching");
    match command {
        Command::Skill(skill) => {
            args[0] = skill.to_string();
            let cmd = SkillCommand::parse(&args)?;
            let character = load_character()?;
            Ok(Resolution::Check(cmd.resolve(&character, dice)?))
        }
        Command::TopLevel(TopLevel::Attack) => {
            let cmd = AttackCommand::parse(&args[1..])?;
            let character = load_character()?;
            Ok(Resolution::Attack(cmd.resolve(&character, dice)?))
        }
        Command::TopLevel(pending) => Ok(Resolution::Pending { command: pending.name().to_string() }),
    }
}
