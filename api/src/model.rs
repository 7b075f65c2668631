//! Wire model for typing-test results joined with their owner's profile.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One row of `typing_test_results`, with the related `profiles` row embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResultRecord {
    pub id: String,
    pub created_at: String,
    pub test_type: String,
    pub difficulty: Difficulty,
    pub wpm: u32,
    pub accuracy: f64,
    pub errors_count: u32,
    pub duration_seconds: u32,
    /// `None` when the join found no profile for the result's owner.
    #[serde(rename = "profiles", default)]
    pub profile: Option<Profile>,
}

/// Subset of the profile columns selected alongside each result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "matricula", default)]
    pub enrollment_id: Option<String>,
    #[serde(rename = "cpf", default)]
    pub national_id: Option<String>,
}

impl Profile {
    pub fn full_name(&self) -> Option<&str> {
        non_empty(self.full_name.as_deref())
    }

    pub fn email(&self) -> Option<&str> {
        non_empty(self.email.as_deref())
    }

    pub fn enrollment_id(&self) -> Option<&str> {
        non_empty(self.enrollment_id.as_deref())
    }

    pub fn national_id(&self) -> Option<&str> {
        non_empty(self.national_id.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Test difficulty label. Known labels get their own variant; anything else is
/// kept verbatim so it can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "facil",
            Difficulty::Medium => "medio",
            Difficulty::Hard => "dificil",
            Difficulty::Other(label) => label.as_str(),
        }
    }
}

impl From<String> for Difficulty {
    fn from(label: String) -> Self {
        match label.as_str() {
            "facil" => Difficulty::Easy,
            "medio" => Difficulty::Medium,
            "dificil" => Difficulty::Hard,
            _ => Difficulty::Other(label),
        }
    }
}

impl From<&str> for Difficulty {
    fn from(label: &str) -> Self {
        Difficulty::from(label.to_string())
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn decodes_joined_row() {
        let row = json!({
            "id": "1",
            "user_id": "u-1",
            "created_at": "2024-01-02T10:00:00Z",
            "test_type": "texto",
            "difficulty": "facil",
            "wpm": 55,
            "accuracy": 97,
            "errors_count": 2,
            "duration_seconds": 60,
            "profiles": {
                "full_name": "Ana",
                "email": "a@x.com",
                "matricula": "123",
                "cpf": ""
            }
        });

        let record: TestResultRecord = serde_json::from_value(row).unwrap();
        assert_eq!(record.difficulty, Difficulty::Easy);
        assert_eq!(record.accuracy, 97.0);
        let profile = record.profile.unwrap();
        assert_eq!(profile.enrollment_id(), Some("123"));
        assert_eq!(profile.national_id(), None);
    }

    #[test]
    fn missing_or_null_profile_is_none() {
        let base = json!({
            "id": "2",
            "created_at": "2024-01-02T10:00:00Z",
            "test_type": "palavras",
            "difficulty": "medio",
            "wpm": 40,
            "accuracy": 88.5,
            "errors_count": 7,
            "duration_seconds": 120
        });
        let record: TestResultRecord = serde_json::from_value(base.clone()).unwrap();
        assert!(record.profile.is_none());

        let mut with_null = base;
        with_null["profiles"] = serde_json::Value::Null;
        let record: TestResultRecord = serde_json::from_value(with_null).unwrap();
        assert!(record.profile.is_none());
    }

    #[test]
    fn unknown_difficulty_is_kept_verbatim() {
        let difficulty: Difficulty = serde_json::from_value(json!("insano")).unwrap();
        assert_eq!(difficulty, Difficulty::Other("insano".into()));
        assert_eq!(difficulty.to_string(), "insano");
        assert_eq!(serde_json::to_value(&difficulty).unwrap(), json!("insano"));
        assert_eq!(serde_json::to_value(Difficulty::Hard).unwrap(), json!("dificil"));
    }

    #[test]
    fn empty_profile_fields_count_as_absent() {
        let profile = Profile {
            full_name: Some(String::new()),
            email: None,
            enrollment_id: Some(String::new()),
            national_id: Some("000.111.222-33".into()),
        };
        assert_eq!(profile.full_name(), None);
        assert_eq!(profile.enrollment_id(), None);
        assert_eq!(profile.national_id(), Some("000.111.222-33"));
    }
}
