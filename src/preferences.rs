//! User personalization answers and the guided question flow.
//!
//! Preferences are ephemeral session state: created empty, filled in by a
//! short Q&A, handed to the suggestion generator and discarded when the
//! session ends. Nothing here is persisted.

use std::str::FromStr;

use thiserror::Error;

/// Requested flavor for the style-based suggestion variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordStyle {
    Simple,
    Stylish,
    Futuristic,
}

impl PasswordStyle {
    pub fn label(self) -> &'static str {
        match self {
            PasswordStyle::Simple => "Simple",
            PasswordStyle::Stylish => "Stylish",
            PasswordStyle::Futuristic => "Futuristic",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown password style: {0}")]
pub struct ParseStyleError(String);

impl FromStr for PasswordStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(PasswordStyle::Simple),
            "stylish" => Ok(PasswordStyle::Stylish),
            "futuristic" => Ok(PasswordStyle::Futuristic),
            other => Err(ParseStyleError(other.to_string())),
        }
    }
}

/// Optional personalization answers consumed by the suggestion generator.
///
/// Every field is optional; an absent field means "use the default".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserPreferences {
    pub nickname: Option<String>,
    pub idol: Option<String>,
    pub hobby: Option<String>,
    pub pet: Option<String>,
    pub place: Option<String>,
    pub style: Option<PasswordStyle>,
    pub symbol: Option<char>,
}

impl UserPreferences {
    fn apply(&mut self, key: PreferenceKey, input: &str) {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            // whitespace-only answers count as "not provided"
            return;
        }
        match key {
            PreferenceKey::Nickname => self.nickname = Some(trimmed.to_string()),
            PreferenceKey::Idol => self.idol = Some(trimmed.to_string()),
            PreferenceKey::Hobby => self.hobby = Some(trimmed.to_string()),
            PreferenceKey::Pet => self.pet = Some(trimmed.to_string()),
            PreferenceKey::Place => self.place = Some(trimmed.to_string()),
            PreferenceKey::Style => self.style = trimmed.parse().ok(),
            PreferenceKey::Symbol => self.symbol = trimmed.chars().next(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferenceKey {
    Nickname,
    Idol,
    Hobby,
    Pet,
    Place,
    Style,
    Symbol,
}

/// One prompt of the guided personalization flow.
#[derive(Debug)]
pub struct Question {
    pub key: PreferenceKey,
    pub prompt: &'static str,
    pub placeholder: &'static str,
}

/// The seven fixed questions, asked in order.
pub static QUESTIONS: [Question; 7] = [
    Question {
        key: PreferenceKey::Nickname,
        prompt: "Got a nickname you like?",
        placeholder: "e.g., Storm, Ace, Phoenix",
    },
    Question {
        key: PreferenceKey::Idol,
        prompt: "Any idol, character, or celebrity you admire?",
        placeholder: "e.g., Naruto, Tesla, Stark",
    },
    Question {
        key: PreferenceKey::Hobby,
        prompt: "What's your hobby or passion?",
        placeholder: "e.g., Gaming, Travel, Music",
    },
    Question {
        key: PreferenceKey::Pet,
        prompt: "Pet or favorite animal name?",
        placeholder: "e.g., Luna, Tiger, Shadow",
    },
    Question {
        key: PreferenceKey::Place,
        prompt: "City, college, or place close to your heart?",
        placeholder: "e.g., Tokyo, MIT, HomeBase",
    },
    Question {
        key: PreferenceKey::Style,
        prompt: "Preferred password style?",
        placeholder: "Simple / Stylish / Futuristic",
    },
    Question {
        key: PreferenceKey::Symbol,
        prompt: "Favorite symbol to use?",
        placeholder: "_ - @ # ! ~ *",
    },
];

/// Walks a user through the seven questions, one answer (or skip) each.
///
/// Answering or skipping the final question finalizes the preference set and
/// resets the interview for the next personalization session.
#[derive(Debug, Default)]
pub struct PreferenceInterview {
    position: usize,
    draft: UserPreferences,
}

impl PreferenceInterview {
    pub fn new() -> Self {
        Self::default()
    }

    /// The question currently awaiting an answer, `None` only mid-finalize.
    pub fn current_question(&self) -> Option<&'static Question> {
        QUESTIONS.get(self.position)
    }

    /// Records an answer for the current question and advances.
    ///
    /// Returns the finalized preferences when this was the last question.
    pub fn answer(&mut self, input: &str) -> Option<UserPreferences> {
        if let Some(question) = QUESTIONS.get(self.position) {
            self.draft.apply(question.key, input);
        }
        self.advance()
    }

    /// Skips the current question and advances.
    pub fn skip(&mut self) -> Option<UserPreferences> {
        self.advance()
    }

    fn advance(&mut self) -> Option<UserPreferences> {
        self.position += 1;
        if self.position < QUESTIONS.len() {
            return None;
        }
        self.position = 0;
        Some(std::mem::take(&mut self.draft))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_parsing() {
        assert_eq!("simple".parse(), Ok(PasswordStyle::Simple));
        assert_eq!(" Futuristic ".parse(), Ok(PasswordStyle::Futuristic));
        assert_eq!("STYLISH".parse(), Ok(PasswordStyle::Stylish));
        assert!("cyberpunk".parse::<PasswordStyle>().is_err());
    }

    #[test]
    fn test_full_interview() {
        let mut interview = PreferenceInterview::new();
        assert_eq!(
            interview.current_question().map(|q| q.key),
            Some(PreferenceKey::Nickname)
        );

        assert!(interview.answer("Storm").is_none());
        assert!(interview.answer("Tesla").is_none());
        assert!(interview.answer("Gaming").is_none());
        assert!(interview.answer("Luna").is_none());
        assert!(interview.answer("Tokyo").is_none());
        assert!(interview.answer("futuristic").is_none());
        let prefs = interview.answer("#").expect("final answer finalizes");

        assert_eq!(prefs.nickname.as_deref(), Some("Storm"));
        assert_eq!(prefs.idol.as_deref(), Some("Tesla"));
        assert_eq!(prefs.hobby.as_deref(), Some("Gaming"));
        assert_eq!(prefs.pet.as_deref(), Some("Luna"));
        assert_eq!(prefs.place.as_deref(), Some("Tokyo"));
        assert_eq!(prefs.style, Some(PasswordStyle::Futuristic));
        assert_eq!(prefs.symbol, Some('#'));
    }

    #[test]
    fn test_whitespace_answer_is_skip() {
        let mut interview = PreferenceInterview::new();
        interview.answer("   ");
        for _ in 0..5 {
            interview.skip();
        }
        let prefs = interview.skip().expect("skip at final question finalizes");
        assert_eq!(prefs, UserPreferences::default());
    }

    #[test]
    fn test_invalid_style_not_stored() {
        let mut interview = PreferenceInterview::new();
        for _ in 0..5 {
            interview.skip();
        }
        interview.answer("cyberpunk");
        let prefs = interview.skip().expect("finalizes");
        assert_eq!(prefs.style, None);
    }

    #[test]
    fn test_interview_resets_after_finalize() {
        let mut interview = PreferenceInterview::new();
        interview.answer("Storm");
        for _ in 0..5 {
            interview.skip();
        }
        let first = interview.skip().expect("finalizes");
        assert_eq!(first.nickname.as_deref(), Some("Storm"));

        // next session starts from an empty draft at the first question
        assert_eq!(
            interview.current_question().map(|q| q.key),
            Some(PreferenceKey::Nickname)
        );
        for _ in 0..6 {
            interview.skip();
        }
        let second = interview.skip().expect("finalizes");
        assert_eq!(second, UserPreferences::default());
    }
}
