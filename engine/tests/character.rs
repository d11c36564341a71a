use engine::{process_args, Character, CharacterError, CommandError, Dice};
use std::fs;

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("character.txt");
    let c = Character::new()
        .with("strength", "16")
        .unwrap()
        .with("proficiency", "2")
        .unwrap()
        .with("save_proficiencies", "['strength', 'constitution']")
        .unwrap()
        .with("check_proficiencies", "athletics,perception")
        .unwrap();
    c.save(&path).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "check_proficiencies:athletics,perception\nproficiency:2\nsave_proficiencies:['strength', 'constitution']\nstrength:16\n"
    );
    assert_eq!(Character::load(&path).unwrap(), c);
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = Character::load(dir.path().join("nobody.txt")).unwrap_err();
    assert!(matches!(err, CharacterError::NotFound(_)));
}

#[test]
fn malformed_line_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("character.txt");
    fs::write(&path, "strength:16\nthis line has no separator\n").unwrap();
    let err = Character::load(&path).unwrap_err();
    assert!(matches!(err, CharacterError::Parse { line: 2, .. }));
}

#[test]
fn load_errors_surface_through_dispatch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let mut dice = Dice::from_seed(3);
    let err = process_args(&["str", "check"], || Character::load(&path), &mut dice).unwrap_err();
    assert!(matches!(err, CommandError::CharacterLoad(CharacterError::NotFound(_))));
}

#[test]
fn file_backed_save_resolves() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("character.txt");
    fs::write(&path, "constitution:14\nproficiency:2\nsave_proficiencies:con\n").unwrap();
    let mut dice = Dice::from_scripted(vec![12]);
    let res = process_args(&["con", "save"], || Character::load(&path), &mut dice).unwrap();
    assert_eq!(res.to_string(), "constitution save rolled a 16 with a natural 12");
}
