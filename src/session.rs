//! Analysis pipeline and ephemeral session state.
//!
//! One analysis runs the exposure lookup (the only suspending step), then the
//! pure scoring and generation passes. The session object keeps the current
//! password, preferences and last result in memory only; losing it is safe.

use std::time::Duration;

use secrecy::SecretString;
use tokio::sync::mpsc;

use crate::evaluator::{calculate_strength_score, get_score_color, get_status_message};
use crate::exposure::ExposureChecker;
use crate::generator::generate_password_suggestions;
use crate::preferences::UserPreferences;
use crate::types::{PasswordSuggestion, ScoreColor, StrengthScore};

/// Everything the presentation layer needs to render one analysis.
#[derive(Clone, Debug)]
pub struct PasswordAnalysis {
    pub score: StrengthScore,
    pub times_exposed: u64,
    pub color: ScoreColor,
    pub message: String,
    pub suggestions: Vec<PasswordSuggestion>,
}

/// Runs the full pipeline for one password. Never fails: a degraded lookup
/// surfaces as `times_exposed == 0`.
pub async fn analyze_password(
    checker: &ExposureChecker,
    password: &SecretString,
    prefs: &UserPreferences,
) -> PasswordAnalysis {
    let times_exposed = checker.check_exposure(password).await;
    let score = calculate_strength_score(times_exposed, password);

    PasswordAnalysis {
        score,
        times_exposed,
        color: get_score_color(score),
        message: get_status_message(score, times_exposed),
        suggestions: generate_password_suggestions(password, prefs),
    }
}

/// Async variant that sends the analysis result via channel.
pub async fn analyze_password_tx(
    checker: &ExposureChecker,
    password: &SecretString,
    prefs: &UserPreferences,
    tx: mpsc::Sender<PasswordAnalysis>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    let analysis = analyze_password(checker, password, prefs).await;

    if let Err(_e) = tx.send(analysis).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", _e);
    }
}

/// Session state for one user: current password, preferences and the last
/// analysis. Updating preferences re-runs the suggestion generator alone,
/// leaving score and message untouched.
#[derive(Debug, Default)]
pub struct AdvisorSession {
    checker: ExposureChecker,
    preferences: UserPreferences,
    current_password: Option<SecretString>,
    last_analysis: Option<PasswordAnalysis>,
}

impl AdvisorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_checker(checker: ExposureChecker) -> Self {
        Self {
            checker,
            ..Default::default()
        }
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    pub fn last_analysis(&self) -> Option<&PasswordAnalysis> {
        self.last_analysis.as_ref()
    }

    /// Analyzes a password and stores it with the result.
    pub async fn analyze(&mut self, password: SecretString) -> &PasswordAnalysis {
        let analysis = analyze_password(&self.checker, &password, &self.preferences).await;
        self.current_password = Some(password);
        &*self.last_analysis.insert(analysis)
    }

    /// Replaces the preferences and regenerates suggestions for the current
    /// password without re-scoring it.
    pub fn set_preferences(&mut self, preferences: UserPreferences) {
        self.preferences = preferences;
        if let (Some(password), Some(analysis)) =
            (&self.current_password, self.last_analysis.as_mut())
        {
            analysis.suggestions = generate_password_suggestions(password, &self.preferences);
        }
    }

    /// Discards all session state.
    pub fn reset(&mut self) {
        self.preferences = UserPreferences::default();
        self.current_password = None;
        self.last_analysis = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn offline_checker() -> ExposureChecker {
        // closed port: the lookup fails fast and the pipeline fails open
        ExposureChecker::with_base_url("http://127.0.0.1:9/range")
    }

    #[tokio::test]
    async fn test_analyze_degrades_to_zero_exposure() {
        let analysis = analyze_password(
            &offline_checker(),
            &secret("Xk9$mQ2pLw"),
            &UserPreferences::default(),
        )
        .await;

        assert_eq!(analysis.times_exposed, 0);
        assert_eq!(analysis.score.value(), 100);
        assert_eq!(analysis.color, ScoreColor::Purple);
        assert!(analysis.message.contains("SHIELD ACTIVATED"));
        assert_eq!(analysis.suggestions.len(), 3);
    }

    #[tokio::test]
    async fn test_analyze_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let checker = offline_checker();
        let pwd = secret("Tiger123!");

        analyze_password_tx(&checker, &pwd, &UserPreferences::default(), tx).await;

        let analysis = rx.recv().await.expect("Should receive analysis");
        assert_eq!(analysis.suggestions.len(), 3);
    }

    #[tokio::test]
    async fn test_session_regenerates_suggestions_on_preference_change() {
        let mut session = AdvisorSession::with_checker(offline_checker());
        let before = session.analyze(secret("Tiger123!")).await.clone();

        session.set_preferences(UserPreferences {
            idol: Some("Tesla".to_string()),
            symbol: Some('#'),
            ..Default::default()
        });

        let after = session.last_analysis().expect("analysis retained");
        assert_eq!(after.score, before.score);
        assert_eq!(after.message, before.message);
        assert_eq!(after.suggestions[0].password, "TiGer#123#Tesla");
        assert_eq!(after.suggestions[0].description, "With your idol: Tesla");
    }

    #[tokio::test]
    async fn test_session_reset() {
        let mut session = AdvisorSession::with_checker(offline_checker());
        session.analyze(secret("Tiger123!")).await;
        session.set_preferences(UserPreferences {
            nickname: Some("Ace".to_string()),
            ..Default::default()
        });

        session.reset();
        assert!(session.last_analysis().is_none());
        assert_eq!(*session.preferences(), UserPreferences::default());
    }
}
