//! Field-level validation rules.
//!
//! Each rule takes the raw (optional) value of one field and either returns the
//! cleaned value or a [`ValidationError`] naming that field. [`Checks`] runs a
//! sequence of rules over a payload and remembers every failure in field order,
//! so callers can report the first one (or prefer a particular field).

use crate::error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

/// Maximum length of emails, names, organisation names and roles.
pub const MAX_TEXT_LEN: usize = 255;
/// Maximum length of short columns (first/last name, org type, buckets).
pub const MAX_SHORT_LEN: usize = 100;
/// Maximum length of a phone number as typed.
pub const MAX_PHONE_LEN: usize = 50;

const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9 ().\-]+$").expect("phone pattern is a valid regex")
});

/// A required, non-blank text field no longer than `max_len` characters.
pub fn required_text(
    field: &str,
    label: &str,
    value: Option<String>,
    max_len: usize,
) -> Result<String, ValidationError> {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
    if value.is_empty() {
        return Err(ValidationError::missing(field, format!("{label} is required")));
    }
    if value.chars().count() > max_len {
        return Err(ValidationError::for_field(
            field,
            format!("{label} must be at most {max_len} characters"),
        ));
    }
    Ok(value)
}

/// A required email address in standard `local@domain.tld` syntax.
pub fn email_address(
    field: &str,
    label: &str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    let value = required_text(field, label, value, MAX_TEXT_LEN)?;
    if !EMAIL_RE.is_match(&value) {
        return Err(ValidationError::for_field(field, "Invalid email address"));
    }
    Ok(value)
}

/// A required phone number: an optional leading `+`, then digits and the usual
/// separators, with between 7 and 15 digits overall.
pub fn phone_number(
    field: &str,
    label: &str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    let value = required_text(field, label, value, MAX_PHONE_LEN)?;
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if !PHONE_RE.is_match(&value) || !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        return Err(ValidationError::for_field(field, "Invalid phone number"));
    }
    Ok(value)
}

/// An optional value that must be one of `allowed` when present.
/// Blank strings count as absent.
pub fn optional_choice(
    field: &str,
    label: &str,
    value: Option<String>,
    allowed: &[&str],
) -> Result<Option<String>, ValidationError> {
    let value = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    match value {
        None => Ok(None),
        Some(v) if allowed.contains(&v.as_str()) => Ok(Some(v)),
        Some(_) => Err(ValidationError::for_field(
            field,
            format!("{label} must be one of: {}", allowed.join(", ")),
        )),
    }
}

/// Any number of selections, each one of `allowed`. Duplicates collapse,
/// keeping the first occurrence.
pub fn choices(
    field: &str,
    label: &str,
    values: Option<Vec<String>>,
    allowed: &[&str],
) -> Result<Vec<String>, ValidationError> {
    let mut selected: Vec<String> = Vec::new();
    for value in values.unwrap_or_default() {
        let Some(choice) = optional_choice(field, label, Some(value), allowed)? else {
            continue;
        };
        if !selected.contains(&choice) {
            selected.push(choice);
        }
    }
    Ok(selected)
}

/// Runs rules over a payload and keeps every failure in the order checked.
///
/// Failed fields yield an empty placeholder value; the caller must not use the
/// cleaned values unless [`Checks::finish`] returns `Ok`.
#[derive(Debug, Default)]
pub struct Checks {
    errors: Vec<ValidationError>,
}

impl Checks {
    pub fn new() -> Self {
        Self::default()
    }

    fn record<T: Default>(&mut self, result: Result<T, ValidationError>) -> T {
        result.unwrap_or_else(|err| {
            self.errors.push(err);
            T::default()
        })
    }

    pub fn text(&mut self, field: &str, label: &str, value: Option<String>, max_len: usize) -> String {
        self.record(required_text(field, label, value, max_len))
    }

    pub fn email(&mut self, field: &str, label: &str, value: Option<String>) -> String {
        self.record(email_address(field, label, value))
    }

    pub fn phone(&mut self, field: &str, label: &str, value: Option<String>) -> String {
        self.record(phone_number(field, label, value))
    }

    pub fn choice(
        &mut self,
        field: &str,
        label: &str,
        value: Option<String>,
        allowed: &[&str],
    ) -> Option<String> {
        self.record(optional_choice(field, label, value, allowed))
    }

    pub fn choices(
        &mut self,
        field: &str,
        label: &str,
        values: Option<Vec<String>>,
        allowed: &[&str],
    ) -> Vec<String> {
        self.record(choices(field, label, values, allowed))
    }

    /// Every failure so far, in the order the fields were checked.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Reports the first failing field, if any.
    pub fn finish(self) -> Result<(), ValidationError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Like [`Checks::finish`], but a malformed value on `field` wins over
    /// earlier failures. A missing `field` keeps its place in field order.
    pub fn finish_preferring(mut self, field: &str) -> Result<(), ValidationError> {
        if let Some(pos) = self
            .errors
            .iter()
            .position(|err| err.field.as_deref() == Some(field) && !err.is_missing())
        {
            return Err(self.errors.swap_remove(pos));
        }
        self.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_required_text_trims_and_rejects_blank() {
        assert_eq!(required_text("role", "Role", some("  Partner "), 255).unwrap(), "Partner");

        let err = required_text("role", "Role", some("   "), 255).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("role"));
        assert_eq!(err.message, "Role is required");
        assert!(err.is_missing());

        assert!(required_text("role", "Role", None, 255).is_err());
    }

    #[test]
    fn test_required_text_enforces_length_in_characters() {
        let exactly = "é".repeat(100);
        assert!(required_text("firstName", "First name", Some(exactly), 100).is_ok());

        let err = required_text("firstName", "First name", Some("a".repeat(101)), 100).unwrap_err();
        assert_eq!(err.message, "First name must be at most 100 characters");
        assert!(!err.is_missing());
    }

    #[test]
    fn test_email_address() {
        assert!(email_address("email", "Email", some("test@example.com")).is_ok());
        assert!(email_address("email", "Email", some("user.name+tag@domain.co.uk")).is_ok());

        for bad in ["not-an-email", "@example.com", "test@", "a@b", "a b@example.com"] {
            let err = email_address("email", "Email", some(bad)).unwrap_err();
            assert_eq!(err.message, "Invalid email address", "accepted {bad}");
        }
        assert_eq!(
            email_address("email", "Email", None).unwrap_err().message,
            "Email is required"
        );
    }

    #[test]
    fn test_phone_number() {
        for good in ["+15551234567", "+1 (555) 123-4567", "555.123.4567", "0207 946 0958"] {
            assert!(phone_number("phone", "Phone number", some(good)).is_ok(), "rejected {good}");
        }
        for bad in ["12345", "call me maybe", "+1 555 123 4567 8901 23", "1+5551234567"] {
            let err = phone_number("phone", "Phone number", some(bad)).unwrap_err();
            assert_eq!(err.message, "Invalid phone number", "accepted {bad}");
        }
    }

    #[test]
    fn test_optional_choice_treats_blank_as_absent() {
        assert_eq!(optional_choice("stageFocus", "Stage focus", some(" "), &["Seed"]).unwrap(), None);
        assert_eq!(
            optional_choice("stageFocus", "Stage focus", some("Seed"), &["Seed"]).unwrap(),
            Some("Seed".to_string())
        );
        let err = optional_choice("stageFocus", "Stage focus", some("Series Z"), &["Seed", "Other"])
            .unwrap_err();
        assert_eq!(err.message, "Stage focus must be one of: Seed, Other");
    }

    #[test]
    fn test_choices_deduplicates_in_order() {
        let picked = choices(
            "investorTypes",
            "Investor type",
            Some(vec!["Angel".into(), "VC".into(), "Angel".into(), "".into()]),
            &["VC", "Angel"],
        )
        .unwrap();
        assert_eq!(picked, vec!["Angel".to_string(), "VC".to_string()]);
    }

    #[test]
    fn test_checks_reports_first_failure_or_preferred_field() {
        let mut checks = Checks::new();
        checks.text("orgName", "Organization name", None, 255);
        checks.phone("phone", "Phone number", some("nope"));
        assert_eq!(checks.errors().len(), 2);
        assert_eq!(checks.finish().unwrap_err().field.as_deref(), Some("orgName"));

        let mut checks = Checks::new();
        checks.text("orgName", "Organization name", None, 255);
        checks.phone("phone", "Phone number", some("nope"));
        let err = checks.finish_preferring("phone").unwrap_err();
        assert_eq!(err.message, "Invalid phone number");

        let mut checks = Checks::new();
        checks.text("orgName", "Organization name", None, 255);
        assert_eq!(
            checks.finish_preferring("phone").unwrap_err().field.as_deref(),
            Some("orgName")
        );
    }

    #[test]
    fn test_missing_preferred_field_keeps_field_order() {
        let mut checks = Checks::new();
        checks.text("orgName", "Organization name", None, 255);
        checks.phone("phone", "Phone number", None);
        let err = checks.finish_preferring("phone").unwrap_err();
        assert_eq!(err.field.as_deref(), Some("orgName"));
        assert_eq!(err.message, "Organization name is required");
    }
}
