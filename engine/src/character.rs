use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::{fs, io, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::aliases::canonical_trait;

pub const PROFICIENCY: &str = "proficiency";
pub const SAVE_PROFICIENCIES: &str = "save_proficiencies";
pub const CHECK_PROFICIENCIES: &str = "check_proficiencies";

#[derive(Debug, Error)]
pub enum CharacterError {
    #[error("character file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read or write character file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: expected `key:value`, got {text:?}")]
    Parse { line: usize, text: String },
    #[error("entry {key:?}:{value:?} may not contain ':' or a line break")]
    InvalidEntry { key: String, value: String },
}

/// A character's traits, keyed by lowercase trait name. Stored on disk as one
/// `key:value` pair per line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Character {
    traits: BTreeMap<String, String>,
}

impl Character {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CharacterError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => CharacterError::NotFound(path.to_path_buf()),
            _ => CharacterError::Io { path: path.to_path_buf(), source },
        })?;
        let character = Self::parse(&text)?;
        debug!(path = %path.display(), traits = character.traits.len(), "loaded character");
        Ok(character)
    }

    pub fn parse(text: &str) -> Result<Self, CharacterError> {
        let mut traits = BTreeMap::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim_end();
            if line.is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                return Err(CharacterError::Parse { line: idx + 1, text: raw.to_string() });
            };
            if value.contains(':') {
                return Err(CharacterError::Parse { line: idx + 1, text: raw.to_string() });
            }
            traits.insert(key.to_string(), value.to_string());
        }
        Ok(Self { traits })
    }

    /// Lines sorted by key, each terminated by `\n`.
    pub fn to_file_string(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.traits {
            let _ = writeln!(out, "{}:{}", key, value);
        }
        out
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CharacterError> {
        let path = path.as_ref();
        fs::write(path, self.to_file_string())
            .map_err(|source| CharacterError::Io { path: path.to_path_buf(), source })
    }

    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), CharacterError> {
        let (key, value) = (key.into(), value.into());
        let bad = |s: &str| s.contains([':', '\n', '\r']);
        if key.is_empty() || bad(&key) || bad(&value) {
            return Err(CharacterError::InvalidEntry { key, value });
        }
        self.traits.insert(key, value);
        Ok(())
    }

    /// Builder form of [`Character::set`].
    pub fn with(mut self, key: &str, value: &str) -> Result<Self, CharacterError> {
        self.set(key, value)?;
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.traits.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    pub fn save_proficient(&self, skill: &str) -> bool {
        self.list_contains(SAVE_PROFICIENCIES, skill)
    }

    pub fn check_proficient(&self, skill: &str) -> bool {
        self.list_contains(CHECK_PROFICIENCIES, skill)
    }

    /// Entries of a list-valued trait such as `[strength, 'con']`, canonicalized
    /// through the alias table. A missing key is an empty list.
    pub fn list(&self, key: &str) -> Vec<String> {
        let Some(raw) = self.get(key) else {
            return Vec::new();
        };
        raw.trim()
            .trim_start_matches('[')
            .trim_end_matches(']')
            .split(',')
            .map(|item| item.trim().trim_matches(|c: char| c == '\'' || c == '"').trim().to_lowercase())
            .filter(|item| !item.is_empty())
            .map(|item| canonical_trait(&item).map(str::to_string).unwrap_or(item))
            .collect()
    }

    fn list_contains(&self, key: &str, skill: &str) -> bool {
        self.list(key).iter().any(|entry| entry == skill)
    }
}
