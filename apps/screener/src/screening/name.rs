pub const UNKNOWN_CANDIDATE: &str = "Unknown Candidate";

/// Takes the first line of the resume as the candidate's display name.
/// Heuristic only: whatever the first non-blank line says is accepted as the name.
pub fn candidate_name(resume_text: &str) -> String {
    resume_text
        .trim()
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .unwrap_or(UNKNOWN_CANDIDATE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line_is_name() {
        assert_eq!(candidate_name("Jane Doe\nSkills: Python"), "Jane Doe");
    }

    #[test]
    fn test_leading_blank_lines_and_padding_are_skipped() {
        assert_eq!(candidate_name("\n\n   John Smith  \r\nc++"), "John Smith");
    }

    #[test]
    fn test_empty_text_is_unknown() {
        assert_eq!(candidate_name(""), UNKNOWN_CANDIDATE);
        assert_eq!(candidate_name("  \n\t \n"), UNKNOWN_CANDIDATE);
    }

    #[test]
    fn test_non_name_first_line_is_accepted() {
        assert_eq!(
            candidate_name("CURRICULUM VITAE\nJane Doe"),
            "CURRICULUM VITAE"
        );
    }
}
