//! Password strength advisor engine
//!
//! This library scores a password with auditable heuristics plus a
//! k-anonymity breach-exposure lookup, and generates pattern-preserving
//! stronger variants, optionally personalized through a short Q&A.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_sentinel::{AdvisorSession, PreferenceInterview};
//! use secrecy::SecretString;
//!
//! # async fn demo() {
//! let mut session = AdvisorSession::new();
//!
//! let password = SecretString::new("Tiger123!".to_string().into());
//! let analysis = session.analyze(password).await;
//!
//! println!("Score: {}", analysis.score);
//! println!("Status: {}", analysis.message);
//! for suggestion in &analysis.suggestions {
//!     println!("{} - {}", suggestion.password, suggestion.description);
//! }
//!
//! // Personalize through the guided Q&A, then regenerate suggestions
//! let mut interview = PreferenceInterview::new();
//! interview.answer("Storm");
//! # }
//! ```

// Internal modules
mod evaluator;
mod exposure;
mod generator;
mod preferences;
mod sections;
mod session;
mod types;

// Public API
pub use evaluator::{calculate_strength_score, get_score_color, get_status_message};
pub use exposure::ExposureChecker;
pub use generator::{COMMON_SYMBOLS, generate_password_suggestions, generate_with_rng};
pub use preferences::{
    ParseStyleError, PasswordStyle, PreferenceInterview, PreferenceKey, QUESTIONS, Question,
    UserPreferences,
};
pub use session::{AdvisorSession, PasswordAnalysis, analyze_password, analyze_password_tx};
pub use types::{PasswordSuggestion, ScoreColor, StrengthScore};
