use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// The contact form's fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const NAME_REQUIRED: &str = "Nome é obrigatório";
pub const EMAIL_REQUIRED: &str = "Email é obrigatório";
pub const EMAIL_INVALID: &str = "Email inválido";
pub const MESSAGE_REQUIRED: &str = "Mensagem é obrigatória";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormRecord {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
}

impl ContactFormRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => self.phone.as_deref().unwrap_or(""),
            Field::Message => &self.message,
        }
    }

    /// Blank phone input is stored as "no phone".
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = (!value.trim().is_empty()).then_some(value),
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Relay request body: `{name, email, phone?, message}`, trimmed.
    pub fn to_json(&self) -> Value {
        let mut body = json!({
            "name": self.name.trim(),
            "email": self.email.trim(),
            "message": self.message.trim(),
        });
        if let Some(phone) = self.phone.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            body["phone"] = json!(phone);
        }
        body
    }
}

/// Per-field validation messages. Empty means the record is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

// Same shape as the zod email rule the form was designed against. Its two
// lookaheads (no leading dot, no ".." in the local part) are checked by hand.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    let Some((local, _)) = email.split_once('@') else {
        return false;
    };
    !local.starts_with('.') && !local.contains("..") && EMAIL.is_match(email)
}

/// Checks a single field. Whitespace-only input counts as empty.
pub fn validate_field(record: &ContactFormRecord, field: Field) -> Option<&'static str> {
    let value = record.get(field).trim();
    match field {
        Field::Name if value.is_empty() => Some(NAME_REQUIRED),
        Field::Email if value.is_empty() => Some(EMAIL_REQUIRED),
        Field::Email if !is_valid_email(value) => Some(EMAIL_INVALID),
        Field::Message if value.is_empty() => Some(MESSAGE_REQUIRED),
        _ => None,
    }
}

pub fn validate(record: &ContactFormRecord) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        if let Some(message) = validate_field(record, field) {
            errors.insert(field, message);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, email: &str, message: &str) -> ContactFormRecord {
        ContactFormRecord {
            name: name.into(),
            email: email.into(),
            phone: None,
            message: message.into(),
        }
    }

    #[test]
    fn missing_name_is_the_only_error() {
        let errors = validate(&record("", "a@b.com", "hi"));
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert!(!errors.contains(Field::Email));
        assert!(!errors.contains(Field::Message));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn malformed_email_is_the_only_error() {
        let errors = validate(&record("A", "not-an-email", "hi"));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn empty_email_reports_required_not_invalid() {
        let errors = validate(&record("A", "   ", "hi"));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
    }

    #[test]
    fn blank_record_flags_every_required_field() {
        let errors = validate(&ContactFormRecord::default());
        let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Message]);
    }

    #[test]
    fn phone_is_never_validated() {
        let mut r = record("A", "a@b.com", "hi");
        r.set(Field::Phone, "not a number".into());
        assert!(validate(&r).is_empty());
    }

    #[test]
    fn email_grammar() {
        for ok in ["a@b.com", "first.last+tag@mail.example.org", "o'neil@x.co", "A_B-c@sub-domain.com.br"] {
            assert!(is_valid_email(ok), "{ok} should be accepted");
        }
        for bad in [
            "not-an-email",
            "@b.com",
            "a@b",
            "a@b.c",
            ".a@b.com",
            "a..b@c.com",
            "a.@b.com",
            "a@-b.com",
            "a b@c.com",
            "a@b..com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn json_body_omits_blank_phone() {
        let mut r = record(" Ana ", "ana@example.com", "Olá");
        assert_eq!(
            r.to_json(),
            json!({"name": "Ana", "email": "ana@example.com", "message": "Olá"})
        );

        r.set(Field::Phone, "(13) 99806-1936".into());
        assert_eq!(r.to_json()["phone"], "(13) 99806-1936");

        r.set(Field::Phone, "  ".into());
        assert_eq!(r.phone, None);
    }

    #[test]
    fn serde_skips_missing_phone() {
        let r = record("A", "a@b.com", "hi");
        let text = serde_json::to_string(&r).unwrap();
        assert!(!text.contains("phone"));
        let back: ContactFormRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(back, r);
    }
}
