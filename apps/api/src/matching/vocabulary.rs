//! The known-skill vocabulary: an immutable configuration constant loaded
//! once at process start. All entries are stored in canonical lowercase form
//! so membership checks line up with normalized skill tokens.

use std::collections::HashSet;
use std::sync::LazyLock;

static KNOWN_SKILLS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        // Software engineering
        "python", "c++", "sql", "flask", "tensorflow", "postgresql", "sqlite", "langchain",
        "mongodb", "node.js", "machine learning", "firebase", "scikit-learn", "rest apis", "aws",
        "cloud", "react.js", "javascript", "nlp", "openai", "faiss", "hugging face", "dynamodb",
        "full stack", "web development", "express", "semantic search", "streamlit",
        "microcontrollers", "iot", "embedded systems", "rtos", "rag",
        // Finance
        "trading", "portfolio", "risk", "derivatives", "compliance", "audit",
        "financial modeling",
        // Legal
        "litigation", "contracts", "regulatory", "due diligence", "legal research",
        // Healthcare
        "clinical", "medical", "patient care", "hipaa", "ehr", "telemedicine",
        // Marketing
        "seo", "sem", "social media", "content marketing", "analytics", "campaign management",
        "google analytics", "hubspot", "instagram ads", "facebook business manager",
        "email marketing", "analytics reports", "keyword research", "seo optimization",
        "adobe illustrator", "canva", "graphic design", "branding", "digital campaigns",
        "google ads", "ppc campaigns", "marketing strategy", "organic traffic",
        "social media marketing", "rebranding", "market research", "customer segmentation",
        "a/b testing", "copywriting", "linkedin ads", "youtube ads",
        "sales funnel optimization", "crm management", "lead generation",
        "conversion rate optimization", "email automation", "influencer marketing",
        "performance marketing", "web analytics", "marketing automation",
        // HR and people operations
        "recruitment", "onboarding", "performance management", "compensation", "benefits",
        "employee relations", "bamboohr", "workday", "empathy", "communication",
        "conflict resolution", "survey design", "spss analysis", "excel", "tableau",
        "resume screening", "scheduling interviews", "organizational psychology",
        // Tooling
        "figma", "trello", "asana", "slack",
    ])
});

/// True when a normalized token is a known skill.
pub fn is_known_skill(token: &str) -> bool {
    KNOWN_SKILLS.contains(token)
}

/// Iterates every vocabulary entry (canonical lowercase form).
pub fn known_skills() -> impl Iterator<Item = &'static str> {
    KNOWN_SKILLS.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::normalizer::normalize_token;

    #[test]
    fn known_skill_lookup_expects_canonical_form() {
        assert!(is_known_skill("python"));
        assert!(is_known_skill("machine learning"));
        assert!(!is_known_skill("Python"));
        assert!(!is_known_skill("basket weaving"));
    }

    #[test]
    fn vocabulary_entries_are_already_normalized() {
        for skill in known_skills() {
            assert_eq!(normalize_token(skill), skill, "vocabulary entry {skill:?}");
        }
    }
}
