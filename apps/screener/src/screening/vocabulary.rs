//! Skill vocabulary: the fixed list of skills the extractor looks for.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Skills recognised when no `SKILLS_FILE` is configured.
const BUILTIN_SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "javascript",
    "sql",
    "machine learning",
    "data analysis",
    "project management",
    "communication",
    "leadership",
    "problem solving",
    "time management",
    "teamwork",
    "critical thinking",
    "cloud computing",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "agile methodologies",
    "scrum",
    "devops",
    "git",
    "html",
    "css",
    "react",
    "node.js",
    "django",
    "flask",
];

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("Skill vocabulary is empty")]
    Empty,

    #[error("Failed to read skill vocabulary from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Immutable, ordered set of lowercase skill names.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    skills: Vec<String>,
    lookup: HashSet<String>,
    max_phrase_len: usize,
}

impl SkillVocabulary {
    /// Normalizes each entry (trim, lowercase, single spaces) and keeps the first
    /// occurrence of duplicates.
    pub fn new<I, S>(entries: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vocab = Self::collect(entries);
        if vocab.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(vocab)
    }

    pub fn builtin() -> Self {
        Self::collect(BUILTIN_SKILLS.iter().copied())
    }

    fn collect<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skills = Vec::new();
        let mut lookup = HashSet::new();

        for entry in entries {
            let skill = normalize(entry.as_ref());
            if skill.is_empty() {
                continue;
            }
            if lookup.insert(skill.clone()) {
                skills.push(skill);
            }
        }

        let max_phrase_len = skills
            .iter()
            .map(|s| s.split(' ').count())
            .max()
            .unwrap_or(1);

        Self {
            skills,
            lookup,
            max_phrase_len,
        }
    }

    /// Loads a vocabulary file: one skill per line, `#` starts a comment line.
    pub fn from_file(path: &Path) -> Result<Self, VocabularyError> {
        let contents = std::fs::read_to_string(path).map_err(|source| VocabularyError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::new(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.lookup.contains(candidate)
    }

    /// Skills in insertion order.
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Longest entry measured in space-separated words.
    pub fn max_phrase_len(&self) -> usize {
        self.max_phrase_len
    }
}

fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
