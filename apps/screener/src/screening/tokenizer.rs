use regex::Regex;
use thiserror::Error;

/// Word characters plus `+`/`#`, optionally joined by inner dots: `c++`, `c#`, `node.js`.
/// A dot with no following space also joins, so `python.sql` is one token and matches nothing.
const TOKEN_PATTERN: &str = r"[\w+#]+(?:\.[\w+#]+)*";

/// Punctuation between two tokens that ends a clause. Whitespace, line breaks,
/// hyphens and slashes do not.
const CLAUSE_BREAKS: &[char] = &['.', ',', ';', ':', '!', '?'];

#[derive(Debug, Error)]
#[error("Failed to build tokenizer: {0}")]
pub struct TokenizerError(#[from] regex::Error);

/// Splits lowercased text into word-level tokens, grouped by clause.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self, TokenizerError> {
        Ok(Self {
            pattern: Regex::new(TOKEN_PATTERN)?,
        })
    }

    /// Tokens of `text` (already lowercased), split into clauses at sentence
    /// and list punctuation. Empty clauses are never returned.
    pub fn clauses<'t>(&self, text: &'t str) -> Vec<Vec<&'t str>> {
        let mut clauses = Vec::new();
        let mut current = Vec::new();
        let mut last_end = 0;

        for m in self.pattern.find_iter(text) {
            let gap = &text[last_end..m.start()];
            if gap.contains(CLAUSE_BREAKS) && !current.is_empty() {
                clauses.push(std::mem::take(&mut current));
            }
            current.push(m.as_str());
            last_end = m.end();
        }
        if !current.is_empty() {
            clauses.push(current);
        }
        clauses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        Tokenizer::new()
            .unwrap()
            .clauses(text)
            .concat()
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_punctuation_is_dropped() {
        assert_eq!(
            tokens("python, sql and aws experience."),
            vec!["python", "sql", "and", "aws", "experience"]
        );
    }

    #[test]
    fn test_symbolic_skill_names_stay_whole() {
        assert_eq!(
            tokens("c++, c# / node.js (asp.net)"),
            vec!["c++", "c#", "node.js", "asp.net"]
        );
    }

    #[test]
    fn test_hyphen_splits_tokens() {
        assert_eq!(tokens("machine-learning"), vec!["machine", "learning"]);
    }

    #[test]
    fn test_dot_without_space_joins_words() {
        assert_eq!(tokens("python.sql"), vec!["python.sql"]);
        assert_eq!(tokens("python. sql"), vec!["python", "sql"]);
    }

    #[test]
    fn test_clause_breaks() {
        let tokenizer = Tokenizer::new().unwrap();
        assert_eq!(
            tokenizer.clauses("time. management; problem, solving\nand data-analysis"),
            vec![
                vec!["time"],
                vec!["management"],
                vec!["problem"],
                vec!["solving", "and", "data", "analysis"],
            ]
        );
    }

    #[test]
    fn test_empty_and_garbled_input() {
        let tokenizer = Tokenizer::new().unwrap();
        assert!(tokenizer.clauses("").is_empty());
        assert!(tokenizer.clauses(" \n\t--- ... ,,,").is_empty());
    }
}
