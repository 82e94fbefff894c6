//! Skill extraction: finds vocabulary entries that occur as whole tokens in free text.
//!
//! Two matching strategies are supported:
//! - `Token`: each token is looked up on its own, so multi-word entries such as
//!   "machine learning" can never match.
//! - `Phrase` (default): runs of up to `max_phrase_len` consecutive tokens are
//!   joined with a single space and looked up as well. Runs stop at clause
//!   punctuation. Every `Token` match is also a `Phrase` match.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::screening::tokenizer::Tokenizer;
use crate::screening::vocabulary::SkillVocabulary;

/// Deduplicated, lowercase skill names in a stable order.
pub type SkillSet = BTreeSet<String>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    Token,
    #[default]
    Phrase,
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStrategy::Token => f.write_str("token"),
            MatchStrategy::Phrase => f.write_str("phrase"),
        }
    }
}

impl FromStr for MatchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "token" => Ok(MatchStrategy::Token),
            "phrase" => Ok(MatchStrategy::Phrase),
            other => Err(format!("expected 'token' or 'phrase', got '{other}'")),
        }
    }
}

/// Owns the tokenizer and vocabulary; constructed once and shared read-only.
#[derive(Debug)]
pub struct SkillExtractor {
    tokenizer: Tokenizer,
    vocabulary: SkillVocabulary,
    strategy: MatchStrategy,
}

impl SkillExtractor {
    pub fn new(tokenizer: Tokenizer, vocabulary: SkillVocabulary, strategy: MatchStrategy) -> Self {
        Self {
            tokenizer,
            vocabulary,
            strategy,
        }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Returns the vocabulary entries present in `text`. Always a subset of the vocabulary.
    ///
    /// Phrases never span clause punctuation (`.,;:!?`), so "time. Management"
    /// is not "time management".
    pub fn extract(&self, text: &str) -> SkillSet {
        let lowered = text.to_lowercase();
        let clauses = self.tokenizer.clauses(&lowered);

        let max_n = match self.strategy {
            MatchStrategy::Token => 1,
            MatchStrategy::Phrase => self.vocabulary.max_phrase_len(),
        };

        let mut found = SkillSet::new();
        for tokens in &clauses {
            for start in 0..tokens.len() {
                for n in 1..=max_n.min(tokens.len() - start) {
                    let candidate = if n == 1 {
                        tokens[start].to_string()
                    } else {
                        tokens[start..start + n].join(" ")
                    };
                    if self.vocabulary.contains(&candidate) {
                        found.insert(candidate);
                    }
                }
            }
        }

        debug!(
            clauses = clauses.len(),
            skills = found.len(),
            strategy = %self.strategy,
            "Extracted skills"
        );
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor(strategy: MatchStrategy) -> SkillExtractor {
        SkillExtractor::new(
            Tokenizer::new().unwrap(),
            SkillVocabulary::builtin(),
            strategy,
        )
    }

    fn set(items: &[&str]) -> SkillSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_job_description_skills() {
        let skills = extractor(MatchStrategy::Phrase)
            .extract("Looking for a Python developer with SQL and AWS experience.");
        assert_eq!(skills, set(&["python", "sql", "aws"]));
    }

    #[test]
    fn test_symbolic_skills_match() {
        let skills = extractor(MatchStrategy::Token).extract("John Smith\nc++, kubernetes");
        assert_eq!(skills, set(&["c++", "kubernetes"]));
    }

    #[test]
    fn test_duplicates_collapse() {
        let skills = extractor(MatchStrategy::Token).extract("Docker docker DOCKER");
        assert_eq!(skills, set(&["docker"]));
    }

    #[test]
    fn test_token_strategy_misses_multi_word_skills() {
        let skills =
            extractor(MatchStrategy::Token).extract("Machine learning and data analysis with Git");
        assert_eq!(skills, set(&["git"]));
    }

    #[test]
    fn test_phrase_strategy_matches_multi_word_skills() {
        let skills = extractor(MatchStrategy::Phrase)
            .extract("Machine   Learning, data-analysis\nand project\nmanagement with Git");
        assert_eq!(
            skills,
            set(&["machine learning", "data analysis", "project management", "git"])
        );
    }

    #[test]
    fn test_phrases_do_not_cross_clause_punctuation() {
        let skills = extractor(MatchStrategy::Phrase)
            .extract("Good with time. Management of teams; problem, solving things");
        assert!(skills.is_empty());

        let skills = extractor(MatchStrategy::Phrase).extract("Strong problem solving, time management.");
        assert_eq!(skills, set(&["problem solving", "time management"]));
    }

    #[test]
    fn test_dotted_run_without_space_is_not_split() {
        let skills = extractor(MatchStrategy::Phrase).extract("python.sql");
        assert!(skills.is_empty());
        let skills = extractor(MatchStrategy::Phrase).extract("python. sql");
        assert_eq!(skills, set(&["python", "sql"]));
    }

    #[test]
    fn test_phrase_is_superset_of_token() {
        let text = "Node.js, React and critical thinking; scrum master, devops";
        let token = extractor(MatchStrategy::Token).extract(text);
        let phrase = extractor(MatchStrategy::Phrase).extract(text);
        assert!(token.is_subset(&phrase));
        assert!(phrase.contains("critical thinking"));
        assert!(!token.contains("critical thinking"));
    }

    #[test]
    fn test_substrings_do_not_match() {
        let skills = extractor(MatchStrategy::Phrase).extract("javascripting pythonic gitlab");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_result_is_subset_of_vocabulary() {
        let ex = extractor(MatchStrategy::Phrase);
        let skills = ex.extract("Python, Rust, Go, SQL, machine learning, Haskell, aws");
        assert!(skills.iter().all(|s| ex.vocabulary().contains(s)));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let ex = extractor(MatchStrategy::Phrase);
        let text = "Jane Doe\npython, sql, docker";
        assert_eq!(ex.extract(text), ex.extract(text));
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(extractor(MatchStrategy::Phrase).extract("").is_empty());
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocab = SkillVocabulary::new(["Rust", "site reliability engineering"]).unwrap();
        let ex = SkillExtractor::new(Tokenizer::new().unwrap(), vocab, MatchStrategy::Phrase);
        let skills = ex.extract("Rust engineer focused on Site Reliability Engineering.");
        assert_eq!(skills, set(&["rust", "site reliability engineering"]));
    }

    #[test]
    fn test_strategy_parse_and_display() {
        assert_eq!("TOKEN".parse::<MatchStrategy>().unwrap(), MatchStrategy::Token);
        assert_eq!("phrase".parse::<MatchStrategy>().unwrap(), MatchStrategy::Phrase);
        assert!("fuzzy".parse::<MatchStrategy>().is_err());
        assert_eq!(MatchStrategy::Phrase.to_string(), "phrase");
    }
}
