//! Prompt template for the career-advisor suggestion call.

use crate::models::opportunity::Opportunity;
use crate::models::profile::StudentProfile;

pub const SUGGESTION_PROMPT_TEMPLATE: &str = r#"You are an AI Career Advisor. Your goal is to help students improve their job prospects with encouraging and actionable advice.
Task: Analyze a student's resume, a job/project opportunity, and the match score (%) assigned between them.

OPPORTUNITY REQUIREMENTS:
- Title: {opp_title}
- Organization: {opp_org}
- Role: {opp_role}
- Required Skills: {opp_skills}
- Required Certifications: {opp_certs}

STUDENT PROFILE:
- Objective: {stu_objective}
- Skills: {stu_skills}
- Projects: {stu_projects}
- Certifications: {stu_certs}
- Experience: {stu_experience}
- Education: {stu_education}

MATCH SCORE: {score}%

Instructions:
1. ONLY return a bulleted list of recommendations to bridge these gaps and improve the score. Respond ONLY in the following format:
    * The specific skills the student should learn to improve their match score.
    * A link to a relevant GitHub repository (public and working) showcasing a similar project that the student can use for inspiration.
    * A working link to a relevant online course or certification that teaches the missing skill (from Coursera, edX, Udemy, or similar).

Key Rules:
- Use a positive and user-friendly tone.
- ONLY return direct and concise main bullets with clear actions and real URLs (courses, repos, docs).
- Avoid long descriptions or paragraphs.
- Prioritize free, high-quality resources when possible."#;

fn or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        "N/A"
    } else {
        value
    }
}

/// Renders the advisor prompt for one opportunity + the full student profile.
pub fn render_suggestion_prompt(
    profile: &StudentProfile,
    opportunity: &Opportunity,
    match_score: f64,
) -> String {
    SUGGESTION_PROMPT_TEMPLATE
        .replace("{opp_title}", or_na(&opportunity.title))
        .replace("{opp_org}", or_na(&opportunity.organization))
        .replace("{opp_role}", or_na(&opportunity.role))
        .replace("{opp_skills}", &opportunity.required_skills.join(", "))
        .replace("{opp_certs}", &opportunity.mandatory_certifications.join(", "))
        .replace("{stu_objective}", or_na(&profile.objective))
        .replace("{stu_skills}", &profile.skills.join(", "))
        .replace("{stu_projects}", &profile.projects.join(", "))
        .replace("{stu_certs}", &profile.certifications.join(", "))
        .replace("{stu_experience}", &profile.experience.join(", "))
        .replace("{stu_education}", &profile.education.join(", "))
        .replace("{score}", &((match_score * 100.0).round() as i64).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_substitutes_all_placeholders() {
        let profile = StudentProfile {
            objective: "Break into data engineering".to_string(),
            skills: vec!["Python".to_string(), "SQL".to_string()],
            ..Default::default()
        };
        let opportunity = Opportunity {
            title: "Data Intern".to_string(),
            organization: "Acme".to_string(),
            required_skills: vec!["Python".to_string(), "AWS".to_string()],
            ..Default::default()
        };

        let prompt = render_suggestion_prompt(&profile, &opportunity, 0.653);
        assert!(prompt.contains("Title: Data Intern"));
        assert!(prompt.contains("Required Skills: Python, AWS"));
        assert!(prompt.contains("Skills: Python, SQL"));
        assert!(prompt.contains("MATCH SCORE: 65%"));
        assert!(prompt.contains("Role: N/A"));
        assert!(!prompt.contains('{'), "unsubstituted placeholder left in prompt");
    }
}
