use crate::screening::skills::SkillSet;

/// Job skills also present in the resume.
pub fn matching_skills(resume_skills: &SkillSet, job_skills: &SkillSet) -> SkillSet {
    resume_skills.intersection(job_skills).cloned().collect()
}

/// Percentage of job skills covered by the resume, rounded to 2 decimals.
/// Returns 0.0 when the job has no recognised skills.
pub fn match_score(resume_skills: &SkillSet, job_skills: &SkillSet) -> f64 {
    if job_skills.is_empty() {
        return 0.0;
    }
    let matched = resume_skills.intersection(job_skills).count();
    let score = matched as f64 / job_skills.len() as f64 * 100.0;
    round2(score.clamp(0.0, 100.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
