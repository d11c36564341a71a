//! Spoken forms accepted on the command line and the trait keys they map to.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::AdMode;

static TRAIT_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let groups: &[(&str, &[&str])] = &[
        ("strength", &["str"]),
        ("dexterity", &["dex"]),
        ("constitution", &["con"]),
        ("intelligence", &["int"]),
        ("wisdom", &["wis"]),
        ("charisma", &["cha"]),
        ("athletics", &["ath"]),
        ("acrobatics", &["acro"]),
        (
            "sleight_of_hand",
            &[
                "slight of hand",
                "slightofhand",
                "slight",
                "sleight of hand",
                "sleightofhand",
                "sleight",
            ],
        ),
        ("stealth", &[]),
        ("arcana", &[]),
        ("history", &["hist"]),
        ("investigation", &["invest"]),
        ("nature", &["nat"]),
        ("religion", &["rel"]),
        ("animal_handling", &["animal handling", "animalhandling", "anim"]),
        ("insight", &["ins"]),
        ("medicine", &["med"]),
        ("perception", &["per"]),
        ("survival", &["sur"]),
        ("deception", &["dec"]),
        ("intimidation", &["intim"]),
        ("performance", &["perform", "perf"]),
        ("persuasion", &["persuade", "pers"]),
    ];

    let mut map = HashMap::new();
    for (canonical, aliases) in groups {
        map.insert(*canonical, *canonical);
        for alias in *aliases {
            map.insert(*alias, *canonical);
        }
    }
    map
});

/// Commands that are not skill names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopLevel {
    Attack,
    Damage,
    Autogen,
    Gen,
}

impl TopLevel {
    pub fn parse(token: &str) -> Option<TopLevel> {
        match token {
            "attack" => Some(TopLevel::Attack),
            "damage" => Some(TopLevel::Damage),
            "autogen" => Some(TopLevel::Autogen),
            "gen" => Some(TopLevel::Gen),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TopLevel::Attack => "attack",
            TopLevel::Damage => "damage",
            TopLevel::Autogen => "autogen",
            TopLevel::Gen => "gen",
        }
    }
}

/// Canonical trait key for an ability or skill alias.
pub fn canonical_trait(token: &str) -> Option<&'static str> {
    TRAIT_ALIASES.get(token).copied()
}

/// `Some(mode)` for advantage/disadvantage aliases, `None` otherwise.
pub fn advantage_state(token: &str) -> Option<AdMode> {
    match token {
        "advantage" | "adv" => Some(AdMode::Advantage),
        "disadvantage" | "dis" => Some(AdMode::Disadvantage),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_long_forms_agree() {
        assert_eq!(canonical_trait("str"), Some("strength"));
        assert_eq!(canonical_trait("strength"), Some("strength"));
        assert_eq!(canonical_trait("slight"), Some("sleight_of_hand"));
        assert_eq!(canonical_trait("animal handling"), Some("animal_handling"));
        assert_eq!(canonical_trait("pers"), Some("persuasion"));
        assert_eq!(canonical_trait("attack"), None);
    }

    #[test]
    fn advantage_aliases() {
        assert_eq!(advantage_state("adv"), Some(AdMode::Advantage));
        assert_eq!(advantage_state("dis"), Some(AdMode::Disadvantage));
        assert_eq!(advantage_state("normal"), None);
    }

    #[test]
    fn top_level_names_round_trip() {
        for cmd in [TopLevel::Attack, TopLevel::Damage, TopLevel::Autogen, TopLevel::Gen] {
            assert_eq!(TopLevel::parse(cmd.name()), Some(cmd));
        }
    }
}
