//! Contact form field rules.
//!
//! A rule is checked in a fixed order: required, then pattern, then minimum
//! length. The first failing check supplies the error. Values are trimmed
//! before any check runs.

use mc_api_types::FieldName;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Este campo é obrigatório")]
    Required,
    #[error("{message}")]
    PatternMismatch { message: &'static str },
    #[error("{message}")]
    TooShort {
        message: &'static str,
        min_length: usize,
    },
}

#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: FieldName,
    pub required: bool,
    pub min_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub message: &'static str,
}

impl FieldRule {
    pub fn new(field: FieldName, message: &'static str) -> Self {
        Self {
            field,
            required: false,
            min_length: None,
            pattern: None,
            message,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn check(&self, raw: &str) -> Result<(), ValidationError> {
        let value = raw.trim();

        if value.is_empty() {
            return if self.required {
                Err(ValidationError::Required)
            } else {
                Ok(())
            };
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(value) {
                return Err(ValidationError::PatternMismatch {
                    message: self.message,
                });
            }
        }

        if let Some(min_length) = self.min_length {
            // UTF-16 units, matching the browser's `maxlength` and the counter.
            if value.encode_utf16().count() < min_length {
                return Err(ValidationError::TooShort {
                    message: self.message,
                    min_length,
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

static CONTACT_RULES: LazyLock<RuleSet> = LazyLock::new(RuleSet::build_contact);

impl RuleSet {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    /// The fixed rules of the contact page form.
    pub fn contact() -> &'static RuleSet {
        &CONTACT_RULES
    }

    fn build_contact() -> RuleSet {
        // Patterns are literals; a failure here is a programming error.
        let name = Regex::new(r"^[a-zA-Z\x{00C0}-\x{00FF}\s]+$").expect("name pattern");
        let email = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern");
        let phone = Regex::new(r"^\([0-9]{2}\)\s[0-9]{4,5}-[0-9]{4}$").expect("phone pattern");

        RuleSet::new(vec![
            FieldRule::new(
                FieldName::Name,
                "Nome deve conter apenas letras e ter pelo menos 2 caracteres",
            )
            .required()
            .min_length(2)
            .pattern(name),
            FieldRule::new(FieldName::Email, "Por favor, insira um e-mail válido")
                .required()
                .pattern(email),
            FieldRule::new(
                FieldName::Phone,
                "Por favor, insira um telefone válido no formato (XX) XXXXX-XXXX",
            )
            .required()
            .pattern(phone),
            FieldRule::new(FieldName::Subject, "Por favor, selecione um assunto").required(),
            FieldRule::new(FieldName::Message, "Mensagem deve ter pelo menos 10 caracteres")
                .required()
                .min_length(10),
        ])
    }

    pub fn rule(&self, field: FieldName) -> Option<&FieldRule> {
        self.rules.iter().find(|rule| rule.field == field)
    }

    /// Looks up a rule by the control's `name` attribute.
    pub fn rule_for_name(&self, name: &str) -> Option<&FieldRule> {
        FieldName::from_name(name).and_then(|field| self.rule(field))
    }

    /// Validates one control. Controls without a rule are always valid.
    pub fn validate_field(&self, name: &str, value: &str) -> Result<(), ValidationError> {
        let Some(rule) = self.rule_for_name(name) else {
            return Ok(());
        };
        let outcome = rule.check(value);
        if let Err(err) = &outcome {
            debug!(field = name, error = %err, "field rejected");
        }
        outcome
    }

    /// Validates every control, never stopping at the first failure.
    pub fn validate_form<'a, I>(&self, controls: I) -> FormReport
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut report = FormReport::default();
        for (name, value) in controls {
            report.checked += 1;
            if let Err(err) = self.validate_field(name, value) {
                report.errors.push((name.to_owned(), err));
            }
        }
        report
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    pub checked: usize,
    pub errors: Vec<(String, ValidationError)>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, name: &str) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, err)| err)
    }
}

/// Validates one control against the contact rules.
pub fn validate_field(name: &str, value: &str) -> Result<(), ValidationError> {
    RuleSet::contact().validate_field(name, value)
}

/// Validates all controls against the contact rules.
pub fn validate_form<'a, I>(controls: I) -> FormReport
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    RuleSet::contact().validate_form(controls)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME_MSG: &str = "Nome deve conter apenas letras e ter pelo menos 2 caracteres";
    const MESSAGE_MSG: &str = "Mensagem deve ter pelo menos 10 caracteres";

    #[test]
    fn empty_required_field_is_rejected_with_generic_message() {
        for field in FieldName::ALL {
            let err = validate_field(field.as_str(), "   ").unwrap_err();
            assert_eq!(err, ValidationError::Required);
            assert_eq!(err.to_string(), "Este campo é obrigatório");
        }
    }

    #[test]
    fn empty_optional_field_is_valid() {
        let rules = RuleSet::new(vec![
            FieldRule::new(FieldName::Subject, "assunto").min_length(3),
        ]);
        assert!(rules.validate_field("subject", "").is_ok());
        assert!(rules.validate_field("subject", "ab").is_err());
    }

    #[test]
    fn unknown_control_is_trivially_valid() {
        assert!(validate_field("newsletter", "").is_ok());
        assert!(validate_field("", "anything").is_ok());
    }

    #[test]
    fn name_accepts_accented_letters_and_spaces() {
        assert!(validate_field("name", "João Câmara").is_ok());
        assert!(validate_field("name", "Jo").is_ok());
        assert!(validate_field("name", "  Zé  ").is_ok());
    }

    #[test]
    fn pattern_check_precedes_length_check() {
        // "J" is too short, but "J1" fails the pattern first.
        let err = validate_field("name", "J1").unwrap_err();
        assert_eq!(
            err,
            ValidationError::PatternMismatch { message: NAME_MSG }
        );

        let err = validate_field("name", "J").unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooShort {
                message: NAME_MSG,
                min_length: 2
            }
        );
        assert_eq!(err.to_string(), NAME_MSG);
    }

    #[test]
    fn email_shape() {
        assert!(validate_field("email", "a@b.com").is_ok());
        assert!(validate_field("email", "cliente@madeiraco.com.br").is_ok());
        assert!(validate_field("email", "a@b").is_err());
        assert!(validate_field("email", "a b@c.com").is_err());
        assert!(validate_field("email", "a@@b.com").is_err());
    }

    #[test]
    fn brazilian_phone_formats() {
        assert!(validate_field("phone", "(62) 99999-9999").is_ok());
        assert!(validate_field("phone", "(62) 3290-1188").is_ok());
        assert!(validate_field("phone", "62 99999-9999").is_err());
        assert!(validate_field("phone", "(62)99999-9999").is_err());
        assert!(validate_field("phone", "(62) 999-9999").is_err());
        assert!(validate_field("phone", "(62) 99999-99990").is_err());
    }

    #[test]
    fn message_needs_ten_characters() {
        assert_eq!(
            validate_field("message", "short").unwrap_err(),
            ValidationError::TooShort {
                message: MESSAGE_MSG,
                min_length: 10
            }
        );
        assert!(validate_field("message", "orçamento!").is_ok());
        // Surrounding whitespace does not count.
        assert!(validate_field("message", "   123456789   ").is_err());
    }

    #[test]
    fn length_is_measured_in_utf16_units() {
        // Five astral-plane characters are ten UTF-16 units.
        assert!(validate_field("message", "🪵🪵🪵🪵🪵").is_ok());
        assert_eq!(
            validate_field("message", "🪵🪵🪵🪵").unwrap_err(),
            ValidationError::TooShort {
                message: MESSAGE_MSG,
                min_length: 10
            }
        );
    }

    #[test]
    fn subject_only_requires_a_value() {
        assert!(validate_field("subject", "Orçamento").is_ok());
        assert!(validate_field("subject", "x").is_ok());
    }

    #[test]
    fn form_reports_only_the_short_message() {
        let report = validate_form([
            ("name", "Jo"),
            ("email", "a@b.com"),
            ("phone", "(62) 99999-9999"),
            ("subject", "Orçamento"),
            ("message", "short"),
        ]);
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert!(report.error_for("message").is_some());
    }

    #[test]
    fn form_checks_every_field_without_short_circuit() {
        let report = validate_form([
            ("name", ""),
            ("email", "nope"),
            ("phone", ""),
            ("subject", ""),
            ("message", "oi"),
        ]);
        assert_eq!(report.checked, 5);
        assert_eq!(report.errors.len(), 5);
        for field in FieldName::ALL {
            assert!(report.error_for(field.as_str()).is_some(), "{field} missing");
        }
    }

    #[test]
    fn valid_form() {
        let report = validate_form([
            ("name", "Maria Souza"),
            ("email", "maria@exemplo.com"),
            ("phone", "(62) 3290-1188"),
            ("subject", "entrega"),
            ("message", "Gostaria de um orçamento de caibros."),
            ("website", ""),
        ]);
        assert!(report.is_valid());
        assert_eq!(report.checked, 6);
    }
}
