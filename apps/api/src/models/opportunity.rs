use serde::{Deserialize, Serialize};

/// A posted internship or project opportunity. Stored as one JSON file per
/// opportunity; `title` drives the filename.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Opportunity {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub organization: String,
    /// "Internship" or "Project".
    #[serde(default, rename = "type")]
    pub opportunity_type: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub faculty: String,
    #[serde(default)]
    pub stipend: String,
    #[serde(default)]
    pub mandatory_certifications: Vec<String>,
}

impl Opportunity {
    /// Required-field validation for newly posted opportunities.
    /// Returns the names of missing fields.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.organization.trim().is_empty() {
            missing.push("organization");
        }
        if self.required_skills.iter().all(|s| s.trim().is_empty()) {
            missing.push("required_skills");
        }
        if self.duration.trim().is_empty() {
            missing.push("duration");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_uses_wire_name() {
        let opp: Opportunity = serde_json::from_str(
            r#"{"title": "Data Intern", "type": "Internship", "required_skills": ["sql"]}"#,
        )
        .unwrap();
        assert_eq!(opp.opportunity_type, "Internship");
        let json = serde_json::to_value(&opp).unwrap();
        assert_eq!(json["type"], "Internship");
    }

    #[test]
    fn missing_fields_are_reported() {
        let opp = Opportunity {
            title: "ML Intern".to_string(),
            required_skills: vec!["python".to_string()],
            ..Default::default()
        };
        let missing = opp.missing_required_fields();
        assert_eq!(missing, vec!["organization", "duration", "description"]);
    }
}
