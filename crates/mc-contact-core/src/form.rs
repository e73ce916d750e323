//! Contact form view model.
//!
//! Holds control values, per-field errors, the submit phase and the
//! transient banner/fallback blocks. The browser layer copies control values
//! in, calls the event methods, and renders whatever the model says.
//!
//! Phases: `Idle` → `Submitting` → `Idle`. An invalid form never leaves
//! `Idle`; a second submit while `Submitting` is ignored.

use mc_api_types::{ContactSubmission, FieldName, SubmitAck};
use mc_validation::{RuleSet, ValidationError};
use mc_whatsapp::{compose_whatsapp_url, contact_form_message};
use tracing::debug;

use crate::submit::SubmitError;

pub const SUCCESS_MESSAGE: &str = "Mensagem enviada com sucesso! Entraremos em contato em breve.";
pub const FALLBACK_PROMPT: &str = "Sua mensagem também foi preparada para o WhatsApp";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub name: String,
    pub value: String,
    pub error: Option<ValidationError>,
}

impl FieldState {
    fn new(name: String) -> Self {
        Self {
            name,
            value: String::new(),
            error: None,
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: u64,
    pub kind: BannerKind,
    pub text: String,
}

/// The "open in WhatsApp" block offered after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackOffer {
    pub id: u64,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A submission is already in flight.
    Busy,
    /// At least one field failed; errors are recorded on the fields.
    Invalid { failed: Vec<String> },
    /// Validation passed; deliver this payload, then call `finish_submit`.
    Started(ContactSubmission),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub banner: Banner,
    pub fallback: FallbackOffer,
    /// Whether the controls were emptied.
    pub reset: bool,
}

#[derive(Debug, Clone)]
pub struct ContactFormModel {
    rules: &'static RuleSet,
    fields: Vec<FieldState>,
    phase: FormPhase,
    started: bool,
    banner: Option<Banner>,
    fallback: Option<FallbackOffer>,
    fallback_number: String,
    in_flight: Option<ContactSubmission>,
    next_id: u64,
}

impl ContactFormModel {
    /// `controls` are the `name` attributes of the form's controls in page
    /// order; `fallback_number` receives the WhatsApp copy of submissions.
    pub fn new<I, S>(controls: I, fallback_number: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_rules(RuleSet::contact(), controls, fallback_number)
    }

    pub fn with_rules<I, S>(
        rules: &'static RuleSet,
        controls: I,
        fallback_number: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rules,
            fields: controls
                .into_iter()
                .map(|name| FieldState::new(name.into()))
                .collect(),
            phase: FormPhase::Idle,
            started: false,
            banner: None,
            fallback: None,
            fallback_number: fallback_number.into(),
            in_flight: None,
            next_id: 0,
        }
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FieldState> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn fallback(&self) -> Option<&FallbackOffer> {
        self.fallback.as_ref()
    }

    pub fn set_value(&mut self, name: &str, value: &str) {
        if let Some(field) = self.field_mut(name) {
            field.value = value.to_owned();
        }
    }

    /// Checks one field against its rule and records the outcome.
    pub fn validate_field(&mut self, name: &str) -> Result<(), ValidationError> {
        let rules = self.rules;
        let Some(field) = self.field_mut(name) else {
            return Ok(());
        };
        let outcome = rules.validate_field(&field.name, &field.value);
        field.error = outcome.clone().err();
        outcome
    }

    pub fn clear_field_error(&mut self, name: &str) {
        if let Some(field) = self.field_mut(name) {
            field.error = None;
        }
    }

    pub fn on_blur(&mut self, name: &str, value: &str) -> Result<(), ValidationError> {
        self.set_value(name, value);
        self.validate_field(name)
    }

    /// Clears the field's error while typing; a field that was already in
    /// error is re-checked so the message tracks the new value.
    pub fn on_input(&mut self, name: &str, value: &str) -> Result<(), ValidationError> {
        self.set_value(name, value);
        let was_in_error = self.field(name).is_some_and(FieldState::has_error);
        self.clear_field_error(name);
        if was_in_error {
            self.validate_field(name)
        } else {
            Ok(())
        }
    }

    /// Returns `true` only for the first focus of any control.
    pub fn note_focus(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }

    /// Validates every field, recording each error; never short-circuits.
    pub fn validate_form(&mut self) -> bool {
        let names: Vec<String> = self.fields.iter().map(|f| f.name.clone()).collect();
        names
            .iter()
            .map(|name| self.validate_field(name).is_ok())
            .fold(true, |all_valid, valid| all_valid && valid)
    }

    pub fn submission(&self) -> ContactSubmission {
        ContactSubmission::from_values(self.fields.iter().filter_map(|field| {
            FieldName::from_name(&field.name).map(|name| (name, field.value.as_str()))
        }))
    }

    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.is_submitting() {
            return SubmitAttempt::Busy;
        }

        if !self.validate_form() {
            let failed = self
                .fields
                .iter()
                .filter(|f| f.has_error())
                .map(|f| f.name.clone())
                .collect();
            return SubmitAttempt::Invalid { failed };
        }

        let submission = self.submission();
        self.phase = FormPhase::Submitting;
        self.in_flight = Some(submission.clone());
        SubmitAttempt::Started(submission)
    }

    /// Settles the in-flight submission. Returns `None` if nothing was in
    /// flight.
    pub fn finish_submit(&mut self, outcome: Result<SubmitAck, SubmitError>) -> Option<Completion> {
        let submission = self.in_flight.take()?;
        self.phase = FormPhase::Idle;

        let (kind, text, reset) = match outcome {
            Ok(_) => (BannerKind::Success, SUCCESS_MESSAGE.to_owned(), true),
            Err(err) => (BannerKind::Error, err.user_message(), false),
        };
        debug!(?kind, reset, "submission settled");

        if reset {
            for field in &mut self.fields {
                field.value.clear();
                field.error = None;
            }
        }

        let banner = Banner {
            id: self.issue_id(),
            kind,
            text,
        };
        let fallback = FallbackOffer {
            id: self.issue_id(),
            url: compose_whatsapp_url(&self.fallback_number, &contact_form_message(&submission)),
        };
        self.banner = Some(banner.clone());
        self.fallback = Some(fallback.clone());

        Some(Completion {
            banner,
            fallback,
            reset,
        })
    }

    /// Drops the banner if it is still the one with `id`.
    pub fn dismiss_banner(&mut self, id: u64) -> bool {
        if self.banner.as_ref().is_some_and(|b| b.id == id) {
            self.banner = None;
            true
        } else {
            false
        }
    }

    pub fn dismiss_fallback(&mut self, id: u64) -> bool {
        if self.fallback.as_ref().is_some_and(|f| f.id == id) {
            self.fallback = None;
            true
        } else {
            false
        }
    }

    fn issue_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::{Submitter, deliver};
    use async_trait::async_trait;
    use mc_whatsapp::{FORM_WHATSAPP_NUMBER, WhatsAppLink};

    const CONTROLS: [&str; 5] = ["name", "email", "phone", "subject", "message"];

    fn model() -> ContactFormModel {
        ContactFormModel::new(CONTROLS, FORM_WHATSAPP_NUMBER)
    }

    fn fill(model: &mut ContactFormModel, values: [&str; 5]) {
        for (name, value) in CONTROLS.iter().zip(values) {
            model.set_value(name, value);
        }
    }

    fn valid_values() -> [&'static str; 5] {
        [
            "Maria Souza",
            "maria@exemplo.com",
            "(62) 99999-9999",
            "orcamento",
            "Quero um orçamento de caibros.",
        ]
    }

    struct Instant;

    #[async_trait(?Send)]
    impl Submitter for Instant {
        async fn submit(&self, _: &ContactSubmission) -> Result<SubmitAck, SubmitError> {
            Ok(SubmitAck::default())
        }
    }

    struct Offline;

    #[async_trait(?Send)]
    impl Submitter for Offline {
        async fn submit(&self, _: &ContactSubmission) -> Result<SubmitAck, SubmitError> {
            Err(SubmitError::Network("connection refused".into()))
        }
    }

    #[test]
    fn short_message_is_the_only_error() {
        let mut model = model();
        fill(
            &mut model,
            ["Jo", "a@b.com", "(62) 99999-9999", "Orçamento", "short"],
        );
        assert_eq!(
            model.begin_submit(),
            SubmitAttempt::Invalid {
                failed: vec!["message".to_owned()]
            }
        );
        assert_eq!(model.phase(), FormPhase::Idle);
        let flagged: Vec<&str> = model
            .fields()
            .iter()
            .filter(|f| f.has_error())
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(flagged, ["message"]);
    }

    #[test]
    fn every_invalid_field_gets_an_error() {
        let mut model = model();
        assert!(!model.validate_form());
        assert!(model.fields().iter().all(FieldState::has_error));
    }

    #[test]
    fn clearing_twice_is_harmless() {
        let mut model = model();
        model.on_blur("email", "x").unwrap_err();
        model.clear_field_error("email");
        model.clear_field_error("email");
        assert!(!model.field("email").unwrap().has_error());
        model.clear_field_error("missing");
    }

    #[test]
    fn typing_in_a_clean_field_does_not_nag() {
        let mut model = model();
        assert!(model.on_input("email", "m").is_ok());
        assert!(!model.field("email").unwrap().has_error());
    }

    #[test]
    fn typing_in_a_flagged_field_rechecks_it() {
        let mut model = model();
        model.on_blur("email", "maria").unwrap_err();

        let still_bad = model.on_input("email", "maria@");
        assert!(still_bad.is_err());
        assert!(model.field("email").unwrap().has_error());

        assert!(model.on_input("email", "maria@exemplo.com").is_ok());
        assert!(!model.field("email").unwrap().has_error());
    }

    #[test]
    fn form_start_fires_once() {
        let mut model = model();
        assert!(model.note_focus());
        assert!(!model.note_focus());
    }

    #[tokio::test]
    async fn successful_submission_resets_and_offers_whatsapp() {
        let mut model = model();
        fill(&mut model, valid_values());

        let SubmitAttempt::Started(submission) = model.begin_submit() else {
            panic!("form should be valid");
        };
        assert!(model.is_submitting());
        assert_eq!(model.begin_submit(), SubmitAttempt::Busy);

        let outcome = deliver(&Instant, &submission).await;
        let completion = model.finish_submit(outcome).unwrap();

        assert_eq!(model.phase(), FormPhase::Idle);
        assert!(completion.reset);
        assert_eq!(completion.banner.kind, BannerKind::Success);
        assert_eq!(completion.banner.text, SUCCESS_MESSAGE);
        assert!(model.fields().iter().all(|f| f.value.is_empty() && !f.has_error()));

        let link = WhatsAppLink::parse(&completion.fallback.url).unwrap();
        assert_eq!(link.phone, FORM_WHATSAPP_NUMBER);
        for value in ["Maria Souza", "maria@exemplo.com", "(62) 99999-9999", "Quero um orçamento de caibros."] {
            assert!(link.text.contains(value), "{value} missing from {}", link.text);
        }
    }

    #[tokio::test]
    async fn failed_submission_keeps_values_and_shows_error() {
        let mut model = model();
        fill(&mut model, valid_values());
        let SubmitAttempt::Started(submission) = model.begin_submit() else {
            panic!("form should be valid");
        };

        let completion = model
            .finish_submit(deliver(&Offline, &submission).await)
            .unwrap();
        assert_eq!(completion.banner.kind, BannerKind::Error);
        assert_eq!(completion.banner.text, crate::submit::GENERIC_FAILURE_MESSAGE);
        assert!(!completion.reset);
        assert!(!model.is_submitting());
        assert_eq!(model.field("name").unwrap().value, "Maria Souza");
    }

    #[test]
    fn finish_without_submission_is_ignored() {
        let mut model = model();
        assert!(model.finish_submit(Ok(SubmitAck::default())).is_none());
    }

    #[test]
    fn newer_banner_replaces_older_and_stale_dismissals_are_ignored() {
        let mut model = model();
        fill(&mut model, valid_values());
        model.begin_submit();
        let first = model.finish_submit(Ok(SubmitAck::default())).unwrap();

        fill(&mut model, valid_values());
        model.begin_submit();
        let second = model.finish_submit(Ok(SubmitAck::default())).unwrap();

        assert_ne!(first.banner.id, second.banner.id);
        assert!(!model.dismiss_banner(first.banner.id));
        assert_eq!(model.banner(), Some(&second.banner));
        assert!(model.dismiss_banner(second.banner.id));
        assert!(model.banner().is_none());

        assert!(!model.dismiss_fallback(first.fallback.id));
        assert!(model.dismiss_fallback(second.fallback.id));
        assert!(model.fallback().is_none());
    }

    #[test]
    fn unnamed_controls_are_ignored_by_payload() {
        let mut model = ContactFormModel::new(
            ["name", "email", "phone", "subject", "message", "website"],
            FORM_WHATSAPP_NUMBER,
        );
        fill(&mut model, valid_values());
        model.set_value("website", "spam");
        assert!(model.validate_form());
        assert_eq!(model.submission().name, "Maria Souza");
    }
}
