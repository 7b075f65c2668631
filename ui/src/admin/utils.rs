use std::fmt;

use api::{Difficulty, Profile};

use crate::t;

/// Background and text classes for a difficulty badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DifficultyStyle {
    pub background: &'static str,
    pub text: &'static str,
}

impl DifficultyStyle {
    pub const EASY: Self = Self {
        background: "tone-bg--green",
        text: "tone-text--green",
    };
    pub const MEDIUM: Self = Self {
        background: "tone-bg--yellow",
        text: "tone-text--yellow",
    };
    pub const HARD: Self = Self {
        background: "tone-bg--red",
        text: "tone-text--red",
    };
    pub const NEUTRAL: Self = Self {
        background: "tone-bg--gray",
        text: "tone-text--gray",
    };

    pub fn class(&self) -> String {
        format!("{} {}", self.background, self.text)
    }
}

/// Unknown labels get the neutral pair.
pub fn difficulty_style(difficulty: &Difficulty) -> DifficultyStyle {
    match difficulty {
        Difficulty::Easy => DifficultyStyle::EASY,
        Difficulty::Medium => DifficultyStyle::MEDIUM,
        Difficulty::Hard => DifficultyStyle::HARD,
        Difficulty::Other(_) => DifficultyStyle::NEUTRAL,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentificationKind {
    Enrollment,
    National,
}

/// The single identification value shown for a result's owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identification {
    pub kind: IdentificationKind,
    pub value: String,
}

impl Identification {
    pub fn label(&self) -> String {
        match self.kind {
            IdentificationKind::Enrollment => t!("admin-id-enrollment"),
            IdentificationKind::National => t!("admin-id-national"),
        }
    }
}

impl fmt::Display for Identification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.value)
    }
}

/// Enrollment id when present, else national id, else the missing marker
/// (still under the national id label).
pub fn identification(profile: Option<&Profile>) -> Identification {
    if let Some(enrollment) = profile.and_then(Profile::enrollment_id) {
        return Identification {
            kind: IdentificationKind::Enrollment,
            value: enrollment.to_string(),
        };
    }

    Identification {
        kind: IdentificationKind::National,
        value: profile
            .and_then(Profile::national_id)
            .map(str::to_string)
            .unwrap_or_else(missing_value),
    }
}

/// Name (or the missing marker) and email (possibly empty) of a result's owner.
pub fn user_summary(profile: Option<&Profile>) -> (String, String) {
    let name = profile
        .and_then(Profile::full_name)
        .map(str::to_string)
        .unwrap_or_else(missing_value);
    let email = profile
        .and_then(Profile::email)
        .unwrap_or_default()
        .to_string();
    (name, email)
}

pub fn missing_value() -> String {
    t!("admin-missing")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn profile(enrollment: Option<&str>, national: Option<&str>) -> Profile {
        Profile {
            full_name: Some("Ana".into()),
            email: Some("a@x.com".into()),
            enrollment_id: enrollment.map(str::to_string),
            national_id: national.map(str::to_string),
        }
    }

    #[test]
    fn known_difficulties_have_distinct_styles() {
        let easy = difficulty_style(&Difficulty::Easy);
        let medium = difficulty_style(&Difficulty::Medium);
        let hard = difficulty_style(&Difficulty::Hard);

        assert_eq!(easy, DifficultyStyle::EASY);
        assert_ne!(easy, medium);
        assert_ne!(medium, hard);
        assert_ne!(easy, hard);
        assert_eq!(easy.class(), "tone-bg--green tone-text--green");
        // Deterministic for the same label.
        assert_eq!(difficulty_style(&"dificil".into()), hard);
    }

    #[test]
    fn unknown_difficulty_is_neutral() {
        for label in ["", "insano", "FACIL", "média"] {
            assert_eq!(difficulty_style(&label.into()), DifficultyStyle::NEUTRAL);
        }
    }

    #[test]
    fn enrollment_takes_precedence() {
        crate::i18n::init_fallback();
        let id = identification(Some(&profile(Some("123"), Some("111.222.333-44"))));
        assert_eq!(id.kind, IdentificationKind::Enrollment);
        assert_eq!(id.to_string(), "Matrícula: 123");
    }

    #[test]
    fn empty_enrollment_falls_back_to_national_id() {
        crate::i18n::init_fallback();
        let id = identification(Some(&profile(Some(""), Some("111.222.333-44"))));
        assert_eq!(id.kind, IdentificationKind::National);
        assert_eq!(id.to_string(), "CPF: 111.222.333-44");
    }

    #[test]
    fn nothing_to_show_is_na() {
        crate::i18n::init_fallback();
        assert_eq!(identification(None).to_string(), "CPF: N/A");
        assert_eq!(
            identification(Some(&profile(None, Some("")))).to_string(),
            "CPF: N/A"
        );
    }

    #[test]
    fn user_summary_falls_back_to_na() {
        crate::i18n::init_fallback();
        assert_eq!(
            user_summary(Some(&profile(None, None))),
            ("Ana".to_string(), "a@x.com".to_string())
        );
        assert_eq!(user_summary(None), ("N/A".to_string(), String::new()));
    }
}
