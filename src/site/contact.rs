//! Contact form state
//!
//! Controlled fields plus a stub submission: nothing leaves the process, the
//! submit only waits out a simulated delay, logs the form and clears it.

use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{error, info};

use crate::models::{AppError, AppResult, ClientConfig, ContactForm};
use crate::utils::constants::DEFAULT_CONTACT_DELAY_MS;

/// Input names of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Company,
    Message,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Message => "message",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Company)
    }
}

impl FromStr for FormField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "company" => Ok(Self::Company),
            "message" => Ok(Self::Message),
            other => Err(AppError::unknown_field(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

#[derive(Debug)]
pub struct ContactFormState {
    form: ContactForm,
    status: SubmitStatus,
    /// Published so a view can disable the submit button while waiting
    submitting: watch::Sender<bool>,
    delay: Duration,
}

/// Clears the submitting flag however the submit future ends
struct SubmittingGuard<'a>(&'a watch::Sender<bool>);

impl<'a> SubmittingGuard<'a> {
    fn new(flag: &'a watch::Sender<bool>) -> Self {
        flag.send_replace(true);
        Self(flag)
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_CONTACT_DELAY_MS))
    }
}

impl ContactFormState {
    pub fn new(delay: Duration) -> Self {
        Self {
            form: ContactForm::default(),
            status: SubmitStatus::Idle,
            submitting: watch::channel(false).0,
            delay,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.contact_delay)
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        *self.submitting.borrow()
    }

    pub fn watch_submitting(&self) -> watch::Receiver<bool> {
        self.submitting.subscribe()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.form.name,
            FormField::Email => &self.form.email,
            FormField::Company => &self.form.company,
            FormField::Message => &self.form.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.form.name = value,
            FormField::Email => self.form.email = value,
            FormField::Company => self.form.company = value,
            FormField::Message => self.form.message = value,
        }
    }

    /// Change handler keyed by the input's `name` attribute
    pub fn update(&mut self, name: &str, value: impl Into<String>) -> AppResult<()> {
        let field: FormField = name.parse()?;
        self.set(field, value);
        Ok(())
    }

    /// Same guards the browser enforces with `required` and `type="email"`.
    /// Like `required`, whitespace counts as a value.
    pub fn validate(&self) -> AppResult<()> {
        for field in [FormField::Name, FormField::Email, FormField::Company, FormField::Message] {
            if field.is_required() && self.value(field).is_empty() {
                return Err(AppError::invalid_form(format!("{} is required", field.as_str())));
            }
        }
        if !self.form.email.contains('@') {
            return Err(AppError::invalid_form("email must contain '@'"));
        }
        Ok(())
    }

    /// Simulated submission. On success the fields reset to empty.
    pub async fn submit(&mut self) -> AppResult<()> {
        self.status = SubmitStatus::Idle;
        if let Err(e) = self.validate() {
            error!(code = e.code_str(), "Form submission error: {}", e.message);
            self.status = SubmitStatus::Error;
            return Err(e);
        }

        let _submitting = SubmittingGuard::new(&self.submitting);
        tokio::time::sleep(self.delay).await;

        info!(
            name = %self.form.name,
            email = %self.form.email,
            company = %self.form.company,
            message_len = self.form.message.len(),
            "Form submitted"
        );

        self.status = SubmitStatus::Success;
        self.form = ContactForm::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ErrorCode;

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::new(Duration::from_millis(1000));
        state.update("name", "Ada").unwrap();
        state.update("email", "ada@example.com").unwrap();
        state.update("company", "Analytical Engines").unwrap();
        state.update("message", "Let's talk").unwrap();
        state
    }

    #[test]
    fn test_fields_are_controlled() {
        let state = filled();
        assert_eq!(state.value(FormField::Name), "Ada");
        assert_eq!(state.form().company, "Analytical Engines");
        assert_eq!(state.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut state = ContactFormState::default();
        let err = state.update("phone", "555").unwrap_err();
        assert_eq!(err.code, ErrorCode::FormUnknownField);
        assert!(state.form().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_resets_fields() {
        let mut state = filled();
        let started = tokio::time::Instant::now();

        state.submit().await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert!(state.form().is_empty());
        assert_eq!(state.status(), SubmitStatus::Success);
        assert!(!state.is_submitting());
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_submit_keeps_fields() {
        let mut state = filled();
        state.set(FormField::Email, "not-an-email");

        let err = state.submit().await.unwrap_err();

        assert_eq!(err.code, ErrorCode::FormInvalid);
        assert_eq!(state.status(), SubmitStatus::Error);
        assert_eq!(state.value(FormField::Name), "Ada");
    }

    #[tokio::test(start_paused = true)]
    async fn test_flag_is_set_during_delay() {
        let mut state = filled();
        let mut submitting = state.watch_submitting();

        let observed = async {
            submitting.changed().await.unwrap();
            *submitting.borrow_and_update()
        };
        let (result, seen) = tokio::join!(state.submit(), observed);

        assert!(result.is_ok());
        assert!(seen);
        assert!(!state.is_submitting());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_submit_clears_flag() {
        let mut state = filled();

        let cancelled = tokio::time::timeout(Duration::from_millis(10), state.submit()).await;
        assert!(cancelled.is_err());
        assert!(!state.is_submitting());
        assert_eq!(state.value(FormField::Name), "Ada");

        state.set(FormField::Email, "bad");
        assert!(state.submit().await.is_err());
        assert_eq!(state.status(), SubmitStatus::Error);
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_whitespace_satisfies_required() {
        let mut state = filled();
        state.set(FormField::Message, "   ");
        assert!(state.validate().is_ok());

        state.set(FormField::Message, "");
        assert!(state.validate().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_company_is_optional() {
        let mut state = filled();
        state.set(FormField::Company, "");
        assert!(state.submit().await.is_ok());
    }
}
