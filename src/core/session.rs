//! Per-mode request lifecycle.
//!
//! Both session kinds share a [`Lifecycle`]:
//!
//! ```text
//! Idle ──edit──▶ Ready ──submit──▶ Loading ──settle──▶ Success | Failed
//!   ▲              │                                       │
//!   └───edit───────┴──────────────◀──────edit──────────────┘
//! ```
//!
//! A submit that fails the input guard goes straight to `Failed` with a
//! validation error. Each accepted submit is identified by a
//! [`RequestTicket`]; a settle whose ticket is not the one in flight is
//! discarded, which is how results of abandoned requests are dropped.

use thiserror::Error;

use super::Mode;
use super::diff::is_unchanged;
use super::errors::{MISSING_GENDER_MESSAGE, SessionError};
use super::prompts::{Gender, PoemLanguage, PoemRequest, SubmitInput};

/// Phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No valid input yet.
    #[default]
    Idle,
    /// Valid input present; submit allowed.
    Ready,
    /// Request in flight.
    Loading,
    /// Last request produced output.
    Success,
    /// Last request or submit attempt failed.
    Failed,
}

impl SessionPhase {
    /// Short status text for the status line.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Ready => "Ready",
            Self::Loading => "Waiting for model",
            Self::Success => "Done",
            Self::Failed => "Failed",
        }
    }
}

/// Identifies one submitted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    /// Mode the request was issued from.
    pub mode: Mode,
    /// App-wide unique, increasing request number.
    pub generation: u64,
}

/// Reason a submit did not start a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    /// A request is already in flight.
    #[error("a request is already in flight")]
    AlreadyLoading,
    /// The input guard failed; the session now shows this error.
    #[error("{}", .0.message)]
    Invalid(SessionError),
}

/// Request/response state shared by text and poem sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lifecycle {
    phase: SessionPhase,
    output: String,
    error: Option<SessionError>,
    in_flight: Option<RequestTicket>,
}

impl Lifecycle {
    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// True while a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Loading)
    }

    /// Output of the last successful request (may be stale after an edit).
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Current error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    /// Ticket of the request in flight.
    #[must_use]
    pub const fn in_flight(&self) -> Option<RequestTicket> {
        self.in_flight
    }

    /// Records an input edit. Ignored while loading.
    pub fn input_changed(&mut self, valid: bool) {
        if self.is_loading() {
            return;
        }
        self.error = None;
        self.phase = if valid {
            SessionPhase::Ready
        } else {
            SessionPhase::Idle
        };
    }

    /// Moves to `Loading` for `ticket`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected::AlreadyLoading`] if a request is in flight.
    pub fn begin(&mut self, ticket: RequestTicket) -> Result<(), SubmitRejected> {
        if self.is_loading() {
            return Err(SubmitRejected::AlreadyLoading);
        }
        self.phase = SessionPhase::Loading;
        self.error = None;
        self.in_flight = Some(ticket);
        Ok(())
    }

    /// Records a local guard failure.
    pub fn reject(&mut self, error: SessionError) {
        if self.is_loading() {
            return;
        }
        self.output.clear();
        self.error = Some(error);
        self.phase = SessionPhase::Failed;
    }

    /// Applies a settled result.
    ///
    /// Returns `false` and leaves the state untouched when `ticket` is not the
    /// request in flight.
    pub fn settle(&mut self, ticket: RequestTicket, result: Result<String, SessionError>) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }
        self.in_flight = None;
        match result {
            Ok(text) => {
                self.output = text.trim().to_string();
                self.error = None;
                self.phase = SessionPhase::Success;
            }
            Err(error) => {
                self.output.clear();
                self.error = Some(error);
                self.phase = SessionPhase::Failed;
            }
        }
        true
    }
}

/// Session for the three text modes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSession {
    input: String,
    submitted_input: String,
    /// Request lifecycle.
    pub lifecycle: Lifecycle,
}

impl TextSession {
    /// Current input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Input as it was when the last request was submitted.
    #[must_use]
    pub fn submitted_input(&self) -> &str {
        &self.submitted_input
    }

    /// Guard for submitting.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Replaces the input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if self.lifecycle.is_loading() {
            return;
        }
        self.input = text.into();
        let valid = self.can_submit();
        self.lifecycle.input_changed(valid);
    }

    /// Validates and starts a request for `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected`] when loading or when the input is blank; in
    /// the latter case the session shows a validation error.
    pub fn submit(
        &mut self,
        mode: Mode,
        generation: u64,
    ) -> Result<(RequestTicket, SubmitInput), SubmitRejected> {
        if self.lifecycle.is_loading() {
            return Err(SubmitRejected::AlreadyLoading);
        }
        if !self.can_submit() {
            let error = SessionError::empty_text(mode);
            self.lifecycle.reject(error.clone());
            return Err(SubmitRejected::Invalid(error));
        }
        let ticket = RequestTicket { mode, generation };
        self.lifecycle.begin(ticket)?;
        self.submitted_input = self.input.clone();
        Ok((
            ticket,
            SubmitInput::Text {
                mode,
                text: self.input.clone(),
            },
        ))
    }

    /// True when the shown output equals the text it was produced from.
    #[must_use]
    pub fn is_unchanged_result(&self) -> bool {
        !self.lifecycle.output().is_empty()
            && is_unchanged(&self.submitted_input, self.lifecycle.output())
    }
}

/// Session for poem generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoemSession {
    name: String,
    gender: Option<Gender>,
    language: PoemLanguage,
    include_emojis: bool,
    submitted: Option<PoemRequest>,
    /// Request lifecycle.
    pub lifecycle: Lifecycle,
}

impl PoemSession {
    /// Person name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Chosen gender.
    #[must_use]
    pub const fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Chosen language register.
    #[must_use]
    pub const fn language(&self) -> PoemLanguage {
        self.language
    }

    /// Whether emoji are requested.
    #[must_use]
    pub const fn include_emojis(&self) -> bool {
        self.include_emojis
    }

    /// Request of the last submit, if any.
    #[must_use]
    pub const fn submitted(&self) -> Option<&PoemRequest> {
        self.submitted.as_ref()
    }

    /// Guard for submitting.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty() && self.gender.is_some()
    }

    /// Replaces the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        if self.lifecycle.is_loading() {
            return;
        }
        self.name = name.into();
        self.touch();
    }

    /// Sets the gender.
    pub fn set_gender(&mut self, gender: Gender) {
        if self.lifecycle.is_loading() {
            return;
        }
        self.gender = Some(gender);
        self.touch();
    }

    /// Sets the language register.
    pub fn set_language(&mut self, language: PoemLanguage) {
        if self.lifecycle.is_loading() {
            return;
        }
        self.language = language;
        self.touch();
    }

    /// Sets whether emoji are requested.
    pub fn set_include_emojis(&mut self, include: bool) {
        if self.lifecycle.is_loading() {
            return;
        }
        self.include_emojis = include;
        self.touch();
    }

    fn touch(&mut self) {
        let valid = self.can_submit();
        self.lifecycle.input_changed(valid);
    }

    /// Validates and starts a poem request.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected`] when loading, when the name is blank, or
    /// when no gender is chosen.
    pub fn submit(
        &mut self,
        generation: u64,
    ) -> Result<(RequestTicket, SubmitInput), SubmitRejected> {
        if self.lifecycle.is_loading() {
            return Err(SubmitRejected::AlreadyLoading);
        }
        let gender = match (self.name.trim().is_empty(), self.gender) {
            (true, _) => Err(SessionError::empty_text(Mode::Poem)),
            (false, None) => Err(SessionError::validation(MISSING_GENDER_MESSAGE)),
            (false, Some(gender)) => Ok(gender),
        };
        let gender = match gender {
            Ok(gender) => gender,
            Err(error) => {
                self.lifecycle.reject(error.clone());
                return Err(SubmitRejected::Invalid(error));
            }
        };

        let ticket = RequestTicket {
            mode: Mode::Poem,
            generation,
        };
        self.lifecycle.begin(ticket)?;
        let request = PoemRequest {
            name: self.name.clone(),
            gender,
            language: self.language,
            include_emojis: self.include_emojis,
        };
        self.submitted = Some(request.clone());
        Ok((ticket, SubmitInput::Poem(request)))
    }

    /// Context line for the last submitted request.
    #[must_use]
    pub fn context_line(&self) -> Option<String> {
        self.submitted.as_ref().map(context_line)
    }

    /// Result title for the last submitted request.
    #[must_use]
    pub fn result_title(&self) -> Option<String> {
        self.submitted.as_ref().map(result_title)
    }
}

/// Describes the choices of `request`, e.g. `الاسم: سارة، الجنس: أنثى، اللغة: الفصحى`.
#[must_use]
pub fn context_line(request: &PoemRequest) -> String {
    let mut parts = vec![
        format!("الاسم: {}", request.name.trim()),
        format!("الجنس: {}", request.gender.label()),
        format!("اللغة: {}", request.language.label()),
    ];
    if request.include_emojis {
        parts.push("مع إيموجي".to_string());
    }
    parts.join("، ")
}

/// Result title, e.g. `قصيدة لـ سارة (الفصحى) مع إيموجي`.
#[must_use]
pub fn result_title(request: &PoemRequest) -> String {
    let mut title = format!("قصيدة لـ {} ({})", request.name.trim(), request.language.label());
    if request.include_emojis {
        title.push_str(" مع إيموجي");
    }
    title
}
