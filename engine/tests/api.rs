use engine::api::Command;
use engine::aliases::TopLevel;
use engine::{process_args, Character, CharacterError, CommandError, Dice, Resolution};

fn no_load() -> Result<Character, CharacterError> {
    panic!("character should not be loaded")
}

#[test]
fn classify_skills_and_commands() {
    assert_eq!(Command::classify("con").unwrap(), Command::Skill("constitution"));
    assert_eq!(Command::classify("perf").unwrap(), Command::Skill("performance"));
    assert_eq!(Command::classify("attack").unwrap(), Command::TopLevel(TopLevel::Attack));
    assert_eq!(Command::classify("gen").unwrap(), Command::TopLevel(TopLevel::Gen));
}

#[test]
fn unknown_command_names_the_token() {
    let mut dice = Dice::from_seed(1);
    let err = process_args(&["frobnicate"], no_load, &mut dice).unwrap_err();
    assert!(matches!(&err, CommandError::UnknownCommand(t) if t == "frobnicate"));
    assert_eq!(err.to_string(), "command frobnicate is invalid");
}

#[test]
fn empty_input_is_malformed() {
    let mut dice = Dice::from_seed(1);
    let none: [&str; 0] = [];
    let err = process_args(&none, no_load, &mut dice).unwrap_err();
    assert!(matches!(err, CommandError::MalformedCommand { count: 0 }));
}

#[test]
fn pending_commands_do_not_load_or_roll() {
    let mut dice = Dice::from_seed(1);
    for cmd in ["damage", "autogen", "gen"] {
        let res = process_args(&[cmd, "2d6"], no_load, &mut dice).unwrap();
        assert_eq!(res, Resolution::Pending { command: cmd.to_string() });
        assert_eq!(res.to_string(), format!("{}: not yet implemented", cmd));
    }
}

#[test]
fn loader_runs_once_for_valid_commands() {
    let mut calls = 0;
    let mut dice = Dice::from_seed(4);
    let res = process_args(
        &["attack", "dis"],
        || {
            calls += 1;
            Character::new().with("strength", "10")?.with("proficiency", "2")
        },
        &mut dice,
    );
    assert!(res.is_ok());
    assert_eq!(calls, 1);
}
