//! Failure taxonomy and classification of remote error text.
//!
//! The remote API reports failures as free text. [`classify`] walks an ordered
//! rule table of substring predicates and returns the first matching
//! [`ErrorCategory`]. New categories are added by appending a rule.

use thiserror::Error;

use super::Mode;

/// Message shown when no API key was configured.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "لم يتم تكوين Gemini API بشكل صحيح. يرجى التحقق من مفتاح API.";

/// Message shown when the remote API rejected the key.
pub const INVALID_CREDENTIAL_MESSAGE: &str =
    "مفتاح API المستخدم غير صالح. يرجى التحقق من تهيئة مفتاح API الخاص بك.";

/// Message shown when the quota or rate limit was hit.
pub const QUOTA_EXCEEDED_MESSAGE: &str =
    "لقد تجاوزت حصتك أو حد المعدل لواجهة برمجة تطبيقات Gemini. يرجى المحاولة مرة أخرى لاحقًا.";

/// Prefix for pass-through remote errors.
pub const REMOTE_ERROR_PREFIX: &str = "حدث خطأ أثناء الاتصال بـ Gemini API: ";

/// Message shown when a failure carries no usable text.
pub const UNKNOWN_ERROR_MESSAGE: &str = "حدث خطأ غير متوقع أثناء الاتصال بخدمة Gemini.";

/// Validation message for an empty person name.
pub const EMPTY_NAME_MESSAGE: &str = "الرجاء إدخال اسم الشخص.";

/// Validation message for a missing gender.
pub const MISSING_GENDER_MESSAGE: &str = "الرجاء تحديد جنس الشخص.";

/// Failure reported by a [`TextGenerator`](super::TextGenerator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// No API key is available.
    #[error("Gemini API key is not configured")]
    NotConfigured,
    /// The API answered with an error payload.
    #[error("{0}")]
    Api(String),
    /// The request never produced an API answer.
    #[error("{0}")]
    Transport(String),
    /// The API answered successfully but the body was unusable.
    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

/// Category of a remote failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The key was rejected.
    InvalidCredential,
    /// Quota exhausted or rate limited.
    QuotaExceeded,
    /// Any other remote failure; carries the raw message.
    Remote(String),
    /// No message to go on.
    Unknown,
}

/// Substring predicate used by a classification rule.
#[derive(Debug, Clone, Copy)]
enum Matcher {
    /// Case-sensitive substring.
    Contains(&'static str),
    /// Substring compared after lowercasing the message. Needle must be lowercase.
    ContainsIgnoreCase(&'static str),
}

impl Matcher {
    fn matches(self, message: &str, lowered: &str) -> bool {
        match self {
            Self::Contains(needle) => message.contains(needle),
            Self::ContainsIgnoreCase(needle) => lowered.contains(needle),
        }
    }
}

/// Category produced when a rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleCategory {
    InvalidCredential,
    QuotaExceeded,
}

/// Ordered classification rules. First match wins.
///
/// | # | predicate                               | category          |
/// |---|-----------------------------------------|-------------------|
/// | 1 | contains `API key not valid`            | InvalidCredential |
/// | 2 | contains `quota` (case-insensitive)      | QuotaExceeded     |
/// | 3 | contains `rate limit` (case-insensitive) | QuotaExceeded     |
const CLASSIFICATION_RULES: &[(Matcher, RuleCategory)] = &[
    (
        Matcher::Contains("API key not valid"),
        RuleCategory::InvalidCredential,
    ),
    (
        Matcher::ContainsIgnoreCase("quota"),
        RuleCategory::QuotaExceeded,
    ),
    (
        Matcher::ContainsIgnoreCase("rate limit"),
        RuleCategory::QuotaExceeded,
    ),
];

/// Classifies a raw failure message.
#[must_use]
pub fn classify(message: &str) -> ErrorCategory {
    let lowered = message.to_lowercase();
    let matched = CLASSIFICATION_RULES
        .iter()
        .find(|(matcher, _)| matcher.matches(message, &lowered))
        .map(|(_, category)| *category);

    match matched {
        Some(RuleCategory::InvalidCredential) => ErrorCategory::InvalidCredential,
        Some(RuleCategory::QuotaExceeded) => ErrorCategory::QuotaExceeded,
        None if message.trim().is_empty() => ErrorCategory::Unknown,
        None => ErrorCategory::Remote(message.to_string()),
    }
}

/// Kind of a failure shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No API key configured.
    Configuration,
    /// The key was rejected.
    InvalidCredential,
    /// Quota or rate limit hit.
    QuotaExceeded,
    /// Other remote failure.
    Remote,
    /// Failure without usable text.
    Unknown,
    /// Local guard failure; never reached the remote API.
    Validation,
}

/// A failure ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionError {
    /// Failure kind.
    pub kind: FailureKind,
    /// Localized message.
    pub message: String,
}

impl SessionError {
    /// Creates a validation failure.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Validation,
            message: message.into(),
        }
    }

    /// Validation failure for a text mode submitted without text.
    #[must_use]
    pub fn empty_text(mode: Mode) -> Self {
        Self::validation(mode.empty_input_message())
    }

    /// Returns true when the failure came from a local guard.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind, FailureKind::Validation)
    }
}

impl From<ErrorCategory> for SessionError {
    fn from(category: ErrorCategory) -> Self {
        match category {
            ErrorCategory::InvalidCredential => Self {
                kind: FailureKind::InvalidCredential,
                message: INVALID_CREDENTIAL_MESSAGE.to_string(),
            },
            ErrorCategory::QuotaExceeded => Self {
                kind: FailureKind::QuotaExceeded,
                message: QUOTA_EXCEEDED_MESSAGE.to_string(),
            },
            ErrorCategory::Remote(raw) => Self {
                kind: FailureKind::Remote,
                message: format!("{REMOTE_ERROR_PREFIX}{raw}"),
            },
            ErrorCategory::Unknown => Self {
                kind: FailureKind::Unknown,
                message: UNKNOWN_ERROR_MESSAGE.to_string(),
            },
        }
    }
}

impl From<&GenerateError> for SessionError {
    fn from(error: &GenerateError) -> Self {
        match error {
            GenerateError::NotConfigured => Self {
                kind: FailureKind::Configuration,
                message: NOT_CONFIGURED_MESSAGE.to_string(),
            },
            GenerateError::Api(message)
            | GenerateError::Transport(message)
            | GenerateError::InvalidResponse(message) => classify(message).into(),
        }
    }
}

impl From<GenerateError> for SessionError {
    fn from(error: GenerateError) -> Self {
        Self::from(&error)
    }
}
