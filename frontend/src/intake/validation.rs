use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::intake::model::{Bottleneck, Field, IntakeDraft, LeadVolume, Step};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const COMPANY_REQUIRED: &str = "Company is required";
pub const INDUSTRY_REQUIRED: &str = "Industry is required";
pub const SELECT_LEAD_VOLUME: &str = "Please select your monthly lead volume";
pub const SELECT_BOTTLENECK: &str = "Please select your biggest bottleneck";

// local@domain.tld, no whitespace, exactly one @
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Field → message map produced by a step guard. Empty means the step passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: Field, message: &str) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    pub fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn extend(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// Step 1: name and a well-formed email.
pub fn validate_contact(draft: &IntakeDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if is_blank(&draft.name) {
        errors.insert(Field::Name, NAME_REQUIRED);
    }
    if is_blank(&draft.email) {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&draft.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }
    errors
}

/// Step 2: company, industry and a lead volume bucket.
pub fn validate_company(draft: &IntakeDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if is_blank(&draft.company) {
        errors.insert(Field::Company, COMPANY_REQUIRED);
    }
    if is_blank(&draft.industry) {
        errors.insert(Field::Industry, INDUSTRY_REQUIRED);
    }
    if draft.monthly_lead_volume.parse::<LeadVolume>().is_err() {
        errors.insert(Field::MonthlyLeadVolume, SELECT_LEAD_VOLUME);
    }
    errors
}

/// Step 3: a bottleneck from the list. Tools and notes are optional.
pub fn validate_requirements(draft: &IntakeDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if draft.biggest_bottleneck.parse::<Bottleneck>().is_err() {
        errors.insert(Field::BiggestBottleneck, SELECT_BOTTLENECK);
    }
    errors
}

/// Runs only the guard belonging to `step`.
pub fn validate_step(step: Step, draft: &IntakeDraft) -> FieldErrors {
    match step {
        Step::Contact => validate_contact(draft),
        Step::Company => validate_company(draft),
        Step::Requirements => validate_requirements(draft),
        Step::Submitted => FieldErrors::new(),
    }
}

pub fn validate_all(draft: &IntakeDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for step in Step::FORM_STEPS {
        errors.extend(validate_step(step, draft));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::test_support::complete_draft;

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("jane.doe+leads@acme.example.com"));
        assert!(is_valid_email("  a@b.co "));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn contact_requires_name_and_email() {
        let errors = validate_contact(&IntakeDraft::default());
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));

        let draft = IntakeDraft {
            name: "   ".to_string(),
            email: "not-an-email".to_string(),
            ..IntakeDraft::default()
        };
        let errors = validate_contact(&draft);
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
    }

    #[test]
    fn contact_accepts_minimal_valid_input() {
        let draft = IntakeDraft {
            name: "J".to_string(),
            email: "a@b.co".to_string(),
            ..IntakeDraft::default()
        };
        assert!(validate_contact(&draft).is_empty());
    }

    #[test]
    fn company_requires_known_volume_bucket() {
        let mut draft = complete_draft();
        draft.monthly_lead_volume = "a lot".to_string();
        let errors = validate_company(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::MonthlyLeadVolume), Some(SELECT_LEAD_VOLUME));
    }

    #[test]
    fn requirements_ignore_optional_fields() {
        let mut draft = IntakeDraft::default();
        draft.biggest_bottleneck = "calendar-management".to_string();
        assert!(validate_requirements(&draft).is_empty());

        draft.biggest_bottleneck = String::new();
        let errors = validate_requirements(&draft);
        assert_eq!(errors.get(Field::BiggestBottleneck), Some(SELECT_BOTTLENECK));
        assert!(errors.get(Field::CurrentTools).is_none());
        assert!(errors.get(Field::Notes).is_none());
    }

    #[test]
    fn step_guards_are_not_cumulative() {
        // Only step 1 fields filled in; steps 2 and 3 must not report them.
        let draft = IntakeDraft {
            biggest_bottleneck: "other".to_string(),
            ..IntakeDraft::default()
        };
        let errors = validate_step(Step::Requirements, &draft);
        assert!(errors.is_empty());
        assert!(validate_step(Step::Submitted, &draft).is_empty());
    }

    #[test]
    fn validate_all_collects_every_step() {
        let errors = validate_all(&IntakeDraft::default());
        let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Name,
                Field::Email,
                Field::Company,
                Field::Industry,
                Field::MonthlyLeadVolume,
                Field::BiggestBottleneck,
            ]
        );
        assert!(validate_all(&complete_draft()).is_empty());
    }
}
