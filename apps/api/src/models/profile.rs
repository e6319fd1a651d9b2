use serde::{Deserialize, Serialize};

/// A student profile as produced by the external document-field-extraction
/// collaborator. This service never parses resume documents itself; it
/// receives the already-extracted fields as plain data.
///
/// Every field defaults to empty so a sparse or partially-extracted record
/// deserializes cleanly and simply contributes nothing to matching.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub social_links: Vec<String>,
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Raw skill lines as they appeared in the document, e.g.
    /// "• Languages: Python, SQL". Canonical skill tokens are derived, not
    /// stored here.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub education_raw: String,
    /// Set by the upstream extractor when document analysis failed. A profile
    /// carrying this marker is a user-visible, recoverable state, not a crash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StudentProfile {
    /// True when extraction produced nothing usable at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.objective.is_empty()
            && self.social_links.is_empty()
            && self.certifications.is_empty()
            && self.skills.is_empty()
            && self.experience.is_empty()
            && self.projects.is_empty()
            && self.education.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_record_deserializes_with_defaults() {
        let profile: StudentProfile =
            serde_json::from_str(r#"{"name": "Asha Rao", "skills": ["Python, SQL"]}"#).unwrap();
        assert_eq!(profile.name, "Asha Rao");
        assert_eq!(profile.skills.len(), 1);
        assert!(profile.certifications.is_empty());
        assert!(profile.error.is_none());
        assert!(!profile.is_empty());
    }

    #[test]
    fn error_marker_round_trips() {
        let profile: StudentProfile =
            serde_json::from_str(r#"{"error": "model timeout"}"#).unwrap();
        assert_eq!(profile.error.as_deref(), Some("model timeout"));
        assert!(profile.is_empty());
    }
}
