//! Match scoring: exact-set overlap, fuzzy string matching, and
//! certification similarity combined into one weighted final score.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::matching::similarity::{aggregate_similarity, embed_list};
use crate::nlp::Embedder;

/// Score given for certifications when the opportunity states no requirement
/// and the student's certifications mention none of its skills. Absence of
/// stated requirements is not certain compatibility, hence neutral rather
/// than 1.0. Policy choice to confirm with domain owners.
pub const CERT_NEUTRAL_SCORE: f64 = 0.5;

/// Relative weight of each scoring signal. Exact overlap is privileged over
/// the fuzzy and certification signals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub overlap: f64,
    pub fuzzy: f64,
    pub cert: f64,
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.overlap + self.fuzzy + self.cert
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            overlap: 0.6,
            fuzzy: 0.3,
            cert: 0.1,
        }
    }
}

/// All sub-scores alongside the final score, for explainability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub overlap_score: f64,
    pub fuzzy_score: f64,
    pub cert_score: f64,
    pub final_score: f64,
}

/// Rounded to 3 decimals for determinism and display.
fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Fuzzy-matches student skills against opportunity skills. A student skill
/// matches when its closest opportunity skill by Sørensen–Dice ratio (a
/// sequence-similarity ratio over character bigrams, not an edit distance)
/// reaches the cutoff. Each student skill contributes at most one match; the
/// result is the set of matched opportunity skills.
fn fuzzy_match_skills<'a>(
    student_skills: &BTreeSet<String>,
    opportunity_skills: &'a BTreeSet<String>,
    cutoff: f64,
) -> BTreeSet<&'a str> {
    let mut matched = BTreeSet::new();
    for skill in student_skills {
        let best = opportunity_skills
            .iter()
            .map(|opp| (opp.as_str(), strsim::sorensen_dice(skill, opp)))
            .max_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((opp, ratio)) = best {
            if ratio >= cutoff {
                matched.insert(opp);
            }
        }
    }
    matched
}

/// Certification signal. With no mandatory certifications specified: 1.0 if
/// any student certification textually contains any opportunity skill
/// keyword (case-insensitive substring), else the neutral default. With
/// certifications specified: embedding aggregate similarity of the two lists.
fn certification_similarity(
    student_certs: &[String],
    opportunity_certs: &[String],
    opportunity_skills: &BTreeSet<String>,
    embedder: &dyn Embedder,
) -> f64 {
    if opportunity_certs.is_empty() {
        let mentioned = student_certs.iter().any(|cert| {
            let cert = cert.to_lowercase();
            opportunity_skills.iter().any(|skill| cert.contains(skill))
        });
        return if mentioned { 1.0 } else { CERT_NEUTRAL_SCORE };
    }

    let student = embed_list(embedder, student_certs.iter().map(String::as_str));
    let required = embed_list(embedder, opportunity_certs.iter().map(String::as_str));
    aggregate_similarity(&student, &required)
}

/// Combines the three signals into a final score in [0, 1].
///
/// Skill sets must already be normalized; canonical-form equality is the
/// exact-match relation. Ratio denominators floor at 1 so an opportunity
/// listing no skills never divides by zero.
pub fn compute_match_score(
    student_skills: &BTreeSet<String>,
    student_certs: &[String],
    opportunity_skills: &BTreeSet<String>,
    opportunity_certs: &[String],
    weights: ScoreWeights,
    fuzzy_cutoff: f64,
    embedder: &dyn Embedder,
) -> MatchBreakdown {
    let denominator = opportunity_skills.len().max(1) as f64;

    let exact_matches = student_skills.intersection(opportunity_skills).count();
    let overlap_score = exact_matches as f64 / denominator;

    let fuzzy_matches = fuzzy_match_skills(student_skills, opportunity_skills, fuzzy_cutoff);
    let fuzzy_score = fuzzy_matches.len() as f64 / denominator;

    let cert_score =
        certification_similarity(student_certs, opportunity_certs, opportunity_skills, embedder);

    let final_score = weights.overlap * overlap_score
        + weights.fuzzy * fuzzy_score
        + weights.cert * cert_score;

    MatchBreakdown {
        overlap_score: round3(overlap_score),
        fuzzy_score: round3(fuzzy_score),
        cert_score: round3(cert_score),
        final_score: round3(final_score.min(1.0)),
    }
}
