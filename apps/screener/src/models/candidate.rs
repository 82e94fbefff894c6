use serde::{Serialize, Serializer};

use crate::screening::skills::SkillSet;

/// Outcome of screening one resume. Built once and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateResult {
    pub candidate_name: String,
    pub file_name: String,
    /// Percentage in [0, 100], 2 decimals.
    pub match_score: f64,
    #[serde(serialize_with = "serialize_joined")]
    pub matching_skills: SkillSet,
    /// Position in the upload batch; breaks score ties.
    pub upload_index: usize,
}

impl CandidateResult {
    pub fn matching_skills_display(&self) -> String {
        join_skills(&self.matching_skills)
    }
}

pub fn join_skills(skills: &SkillSet) -> String {
    skills
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn serialize_joined<S: Serializer>(skills: &SkillSet, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&join_skills(skills))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jane() -> CandidateResult {
        CandidateResult {
            candidate_name: "Jane Doe".to_string(),
            file_name: "jane.txt".to_string(),
            match_score: 66.67,
            matching_skills: ["sql", "python"].iter().map(|s| s.to_string()).collect(),
            upload_index: 0,
        }
    }

    #[test]
    fn test_matching_skills_are_comma_joined() {
        assert_eq!(jane().matching_skills_display(), "python, sql");
    }

    #[test]
    fn test_serializes_as_table_row() {
        let value = serde_json::to_value(jane()).unwrap();
        assert_eq!(
            value,
            json!({
                "candidate_name": "Jane Doe",
                "file_name": "jane.txt",
                "match_score": 66.67,
                "matching_skills": "python, sql",
                "upload_index": 0
            })
        );
    }
}
