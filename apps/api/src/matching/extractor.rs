//! Skill extraction: derives a canonical skill set from raw skill lines and
//! free-text fields, combining dictionary substring matching with filtered
//! named-entity recognition.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use tracing::warn;

use crate::matching::normalizer::{normalize_keywords, normalize_token};
use crate::matching::vocabulary::{is_known_skill, known_skills};
use crate::models::opportunity::Opportunity;
use crate::models::profile::StudentProfile;
use crate::nlp::EntityRecognizer;

/// Words that mark an entity as non-nominal (verbs, adjectives, adverbs,
/// pronouns). Entities containing one of these, or a numeral, are not skill
/// names ("developed quickly", "improved 30%"). A deliberately small lexicon:
/// the vocabulary gate downstream discards anything it misses.
static NON_NOMINAL_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        // Verbs common in resume and posting prose
        "developed", "develop", "developing", "built", "build", "building", "created", "create",
        "creating", "designed", "design", "designing", "implemented", "implement", "implementing",
        "managed", "manage", "managing", "led", "lead", "leading", "improved", "improve",
        "improving", "increased", "increase", "delivered", "deliver", "worked", "work", "working",
        "used", "use", "using", "wrote", "write", "writing", "collaborated", "collaborate",
        "maintained", "maintain", "deployed", "deploy", "achieved", "achieve", "completed",
        "complete", "organized", "organize", "supported", "support",
        // Adjectives and adverbs
        "strong", "good", "excellent", "proficient", "skilled", "experienced", "advanced",
        "basic", "fluent", "new", "fast", "quickly", "highly", "very", "successfully",
        "effectively", "efficiently", "extensive", "responsible",
        // Pronouns
        "i", "we", "you", "he", "she", "it", "they", "my", "our", "your", "their", "me", "us",
        "them", "this", "that", "these", "those",
    ])
});

fn is_numeral(token: &str) -> bool {
    let trimmed = token.trim_matches(|c: char| matches!(c, '%' | '+' | ',' | '.'));
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}

/// True when no token of the entity is a verb, adjective, adverb, numeral, or
/// pronoun. Entities failing this gate are phrases, not skill names.
fn is_nominal_phrase(entity_text: &str) -> bool {
    entity_text
        .split_whitespace()
        .all(|tok| !is_numeral(tok) && !NON_NOMINAL_WORDS.contains(tok.to_lowercase().as_str()))
}

/// Processes line-oriented raw skill fields: strips bullet prefixes, drops a
/// leading "Label:" if present, splits the remainder on commas, normalizes.
pub fn process_raw_skills<S: AsRef<str>>(lines: &[S]) -> BTreeSet<String> {
    let mut skills = BTreeSet::new();
    for line in lines {
        let line = line.as_ref().replace('\n', " ");
        let after_label = match line.split_once(':') {
            Some((_, rest)) => rest,
            None => line.as_str(),
        };
        skills.extend(normalize_keywords(after_label.split(',')));
    }
    skills
}

/// Dictionary strategy: any vocabulary entry appearing as a substring of the
/// text (case-insensitive) is a candidate.
pub fn dictionary_match(text: &str) -> BTreeSet<String> {
    let lowered = text.to_lowercase();
    known_skills()
        .filter(|skill| lowered.contains(skill))
        .map(str::to_string)
        .collect()
}

/// Named-entity strategy plus dictionary strategy over one free-text field.
///
/// Entities are kept only when their category is a skill-candidate category,
/// they pass the nominal-phrase gate, and their normalized form is in the
/// known vocabulary. A failing recognizer call degrades to dictionary-only
/// matching; it is never propagated.
pub async fn extract_skill_entities(
    recognizer: &dyn EntityRecognizer,
    text: &str,
) -> BTreeSet<String> {
    let flattened = text.replace('\n', " ");
    let mut skills = dictionary_match(&flattened);

    if flattened.trim().is_empty() {
        return skills;
    }

    match recognizer.recognize(&flattened).await {
        Ok(entities) => {
            for entity in entities {
                if !entity.is_skill_candidate() || !is_nominal_phrase(&entity.text) {
                    continue;
                }
                let normalized = normalize_token(&entity.text);
                if is_known_skill(&normalized) {
                    skills.insert(normalized);
                }
            }
        }
        Err(e) => {
            warn!("Entity recognition failed, using dictionary matches only: {e}");
        }
    }
    skills
}

/// Full skill set for a student profile: raw skill lines plus entity and
/// dictionary extraction over projects, experience, and certification text.
pub async fn extract_profile_skills(
    recognizer: &dyn EntityRecognizer,
    profile: &StudentProfile,
) -> BTreeSet<String> {
    let mut skills = process_raw_skills(&profile.skills);
    skills.extend(extract_skill_entities(recognizer, &profile.projects.join(" ")).await);
    skills.extend(extract_skill_entities(recognizer, &profile.experience.join(" ")).await);
    skills.extend(extract_skill_entities(recognizer, &profile.certifications.join(" ")).await);
    skills
}

/// Full skill set for an opportunity: required-skill lines plus entity and
/// dictionary extraction over description, role, and certification text.
pub async fn extract_opportunity_skills(
    recognizer: &dyn EntityRecognizer,
    opportunity: &Opportunity,
) -> BTreeSet<String> {
    let mut skills = process_raw_skills(&opportunity.required_skills);
    skills.extend(extract_skill_entities(recognizer, &opportunity.description).await);
    skills.extend(extract_skill_entities(recognizer, &opportunity.role).await);
    skills.extend(
        extract_skill_entities(recognizer, &opportunity.mandatory_certifications.join(" ")).await,
    );
    skills
}
