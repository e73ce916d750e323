use serde::{Deserialize, Serialize};
use std::fmt;

/// Named controls of the `#contact-form`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Subject,
        FieldName::Message,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Subject => "subject",
            FieldName::Message => "message",
        }
    }

    /// Maps a control's `name` attribute; unknown names have no rule.
    pub fn from_name(name: &str) -> Option<FieldName> {
        FieldName::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Builds a payload from raw control values, trimming each one.
    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = (FieldName, &'a str)>,
    {
        let mut submission = ContactSubmission::default();
        for (field, value) in values {
            let value = value.trim().to_owned();
            match field {
                FieldName::Name => submission.name = value,
                FieldName::Email => submission.email = value,
                FieldName::Phone => submission.phone = value,
                FieldName::Subject => submission.subject = value,
                FieldName::Message => submission.message = value,
            }
        }
        submission
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitAck {
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply body of `POST /contact`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactApiResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_match_form_controls() {
        for field in FieldName::ALL {
            assert_eq!(FieldName::from_name(field.as_str()), Some(field));
        }
        assert_eq!(FieldName::from_name("newsletter"), None);
    }

    #[test]
    fn submission_trims_values() {
        let submission = ContactSubmission::from_values([
            (FieldName::Name, "  Maria  "),
            (FieldName::Message, "\nPreciso de tábuas\t"),
        ]);
        assert_eq!(submission.name, "Maria");
        assert_eq!(submission.message, "Preciso de tábuas");
        assert_eq!(submission.email, "");
    }

    #[test]
    fn api_response_message_is_optional() {
        let parsed: ContactApiResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.message, None);

        let json = serde_json::to_value(ContactSubmission::default()).unwrap();
        assert!(json.get("phone").is_some());
    }
}
