use serde::Deserialize;

/// Difficulty tier of a learning path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// Body for POST /learning-paths: everything but the generated fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLearningPathRequest {
    pub title: String,
    pub description: Option<String>,
    pub language: String,
    pub difficulty: String,
    #[serde(default)]
    pub total_modules: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_all_tiers() {
        assert_eq!(Difficulty::parse("beginner"), Some(Difficulty::Beginner));
        assert_eq!(
            Difficulty::parse("intermediate"),
            Some(Difficulty::Intermediate)
        );
        assert_eq!(Difficulty::parse("advanced"), Some(Difficulty::Advanced));
        assert_eq!(Difficulty::parse("expert"), None);
        assert_eq!(Difficulty::parse("Beginner"), None);
    }

    #[test]
    fn create_request_accepts_camel_case_body() {
        let req: CreateLearningPathRequest = serde_json::from_str(
            r#"{"title":"Rust 101","language":"rust","difficulty":"beginner","totalModules":3}"#,
        )
        .unwrap();
        assert_eq!(req.total_modules, 3);
        assert!(req.description.is_none());
    }
}
