use crate::constants::{
    COLOR_ERROR, COLOR_OK, MSG_FAILED, MSG_INVALID_EMAIL, MSG_MISSING_FIELDS, MSG_SENDING,
    MSG_SENT,
};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Shape check only (`local@domain.tld`), not RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"))
        .is_match(email)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{}", MSG_MISSING_FIELDS)]
    MissingFields,
    #[error("{}", MSG_INVALID_EMAIL)]
    InvalidEmail,
    /// Anything else that went wrong mid-submission; the detail is for logs only.
    #[error("{}", MSG_FAILED)]
    Unexpected(String),
}

impl SubmitError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingFields => MSG_MISSING_FIELDS,
            Self::InvalidEmail => MSG_INVALID_EMAIL,
            Self::Unexpected(_) => MSG_FAILED,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    /// Required fields first, then email shape.
    pub fn validate(&self) -> Result<(), SubmitError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(SubmitError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(SubmitError::InvalidEmail);
        }
        Ok(())
    }
}

/// Text and palette for the single status line under the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: &'static str,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: &'static str) -> Self {
        Self { text, is_error: false }
    }

    pub fn error(text: &'static str) -> Self {
        Self { text, is_error: true }
    }

    #[inline]
    pub fn color(&self) -> &'static str {
        if self.is_error {
            COLOR_ERROR
        } else {
            COLOR_OK
        }
    }
}

impl From<&SubmitError> for StatusMessage {
    fn from(err: &SubmitError) -> Self {
        Self::error(err.message())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Error(SubmitError),
}

/// Outcome of a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Begin {
    /// Validation passed; show the message and run the submission.
    Sending(StatusMessage),
    /// Validation failed; show the message and stop.
    Rejected(StatusMessage),
    /// Valid, but a submission is already in flight; ignore this attempt.
    Busy,
}

/// Contact form validation and submission state.
///
/// Platform-free: the web layer reads the fields out of the DOM, drives the
/// phases around its simulated network delay, and writes back whatever
/// [`StatusMessage`] a transition returns.
#[derive(Debug, Default)]
pub struct ContactForm {
    phase: FormPhase,
}

impl ContactForm {
    #[inline]
    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// Every attempt is validated and a failure is always reported. While a
    /// submission is in flight its phase is kept, so its completion still lands.
    pub fn begin(&mut self, fields: &ContactFields) -> Begin {
        let in_flight = self.phase == FormPhase::Submitting;
        if !in_flight {
            self.phase = FormPhase::Validating;
        }
        match fields.validate() {
            Ok(()) if in_flight => Begin::Busy,
            Ok(()) => {
                self.phase = FormPhase::Submitting;
                Begin::Sending(StatusMessage::info(MSG_SENDING))
            }
            Err(err) => {
                let msg = StatusMessage::from(&err);
                if !in_flight {
                    self.phase = FormPhase::Error(err);
                }
                Begin::Rejected(msg)
            }
        }
    }

    /// The simulated round trip finished. Clearing the inputs is up to the
    /// caller (the web layer resets the form element).
    pub fn complete(&mut self) -> StatusMessage {
        self.phase = FormPhase::Success;
        StatusMessage::info(MSG_SENT)
    }

    pub fn fail(&mut self, detail: impl Into<String>) -> StatusMessage {
        let err = SubmitError::Unexpected(detail.into());
        let msg = StatusMessage::from(&err);
        self.phase = FormPhase::Error(err);
        msg
    }

    /// Next interaction after a finished attempt returns the form to idle.
    pub fn acknowledge(&mut self) {
        if matches!(self.phase, FormPhase::Success | FormPhase::Error(_)) {
            self.phase = FormPhase::Idle;
        }
    }
}
