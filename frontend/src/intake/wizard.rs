use chrono::{DateTime, Utc};

use crate::intake::model::{Field, IntakeDraft, IntakeRecord, Step};
use crate::intake::store::{IntakeStore, StorageBackend, StoreError};
use crate::intake::validation::{self, FieldErrors};

/// Outcome of a "Next" press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advanced(Step),
    /// The step guard failed; `IntakeWizard::errors` says why.
    Invalid,
    /// The action does not apply to the current step.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Accepted(IntakeRecord),
    Invalid,
    Ignored,
}

/// Three-step intake form: contact info, company details, requirements.
///
/// Moving forward runs only the current step's guard. A failing guard
/// touches nothing but the error map, so entered values survive. Moving back
/// never validates.
#[derive(Debug, Clone)]
pub struct IntakeWizard {
    step: Step,
    draft: IntakeDraft,
    errors: FieldErrors,
    opened_at: DateTime<Utc>,
}

impl IntakeWizard {
    pub fn new(opened_at: DateTime<Utc>) -> Self {
        Self {
            step: Step::Contact,
            draft: IntakeDraft::default(),
            errors: FieldErrors::new(),
            opened_at,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &IntakeDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Updates one draft field and drops its pending error. Returns `false`
    /// once the form has been submitted.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.step == Step::Submitted {
            return false;
        }
        self.draft.set(field, value.into());
        self.errors.remove(field);
        true
    }

    pub fn next(&mut self) -> Transition {
        let target = match self.step {
            Step::Contact => Step::Company,
            Step::Company => Step::Requirements,
            Step::Requirements | Step::Submitted => return Transition::Ignored,
        };

        let errors = validation::validate_step(self.step, &self.draft);
        if !errors.is_empty() {
            log::info!("Step {} blocked on {} field(s)", self.step.number(), errors.len());
            self.errors = errors;
            return Transition::Invalid;
        }

        self.errors.clear();
        self.step = target;
        Transition::Advanced(target)
    }

    pub fn back(&mut self) -> Step {
        self.step = match self.step {
            Step::Company => Step::Contact,
            Step::Requirements => Step::Company,
            other => return other,
        };
        self.errors.clear();
        self.step
    }

    /// Final step guard. On success the record is stamped with `now`, appended
    /// to `store`, and the wizard moves to `Submitted`. A storage failure
    /// leaves the wizard on the requirements step.
    pub fn submit<B: StorageBackend>(
        &mut self,
        store: &IntakeStore<B>,
        now: DateTime<Utc>,
    ) -> Result<Submission, StoreError> {
        if self.step != Step::Requirements {
            return Ok(Submission::Ignored);
        }

        let errors = validation::validate_step(Step::Requirements, &self.draft);
        if !errors.is_empty() {
            self.errors = errors;
            return Ok(Submission::Invalid);
        }

        // Earlier steps can be edited through set_field after they passed.
        let record = match IntakeRecord::from_draft(&self.draft, now) {
            Ok(record) => record,
            Err(errors) => {
                self.errors = errors;
                return Ok(Submission::Invalid);
            }
        };

        let count = store.append(&record)?;
        log::info!("Intake submitted, {} record(s) stored", count);

        self.errors.clear();
        self.step = Step::Submitted;
        Ok(Submission::Accepted(record))
    }

    /// Starts a new request. Only in-memory state is cleared.
    pub fn reset(&mut self) -> bool {
        if self.step != Step::Submitted {
            return false;
        }
        self.step = Step::Contact;
        self.draft = IntakeDraft::default();
        self.errors.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::model::{Bottleneck, LeadVolume};
    use crate::intake::store::{MemoryStorage, STORAGE_KEY};
    use crate::intake::test_support::complete_draft;
    use chrono::{Duration, TimeZone};

    fn opened() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 10, 14, 0, 0).unwrap()
    }

    fn fill(wizard: &mut IntakeWizard, draft: &IntakeDraft) {
        for field in [
            Field::Name,
            Field::Email,
            Field::Company,
            Field::Industry,
            Field::MonthlyLeadVolume,
            Field::BiggestBottleneck,
            Field::CurrentTools,
            Field::Notes,
        ] {
            wizard.set_field(field, draft.get(field));
        }
    }

    fn at_requirements(draft: &IntakeDraft) -> IntakeWizard {
        let mut wizard = IntakeWizard::new(opened());
        fill(&mut wizard, draft);
        assert_eq!(wizard.next(), Transition::Advanced(Step::Company));
        assert_eq!(wizard.next(), Transition::Advanced(Step::Requirements));
        wizard
    }

    #[test]
    fn starts_on_contact_with_empty_draft() {
        let wizard = IntakeWizard::new(opened());
        assert_eq!(wizard.step(), Step::Contact);
        assert_eq!(wizard.draft(), &IntakeDraft::default());
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn empty_name_blocks_step_one() {
        let mut wizard = IntakeWizard::new(opened());
        wizard.set_field(Field::Email, "a@b.co");

        assert_eq!(wizard.next(), Transition::Invalid);
        assert_eq!(wizard.step(), Step::Contact);
        assert!(wizard.errors().get(Field::Name).is_some());
        assert!(wizard.errors().get(Field::Email).is_none());
        assert_eq!(wizard.draft().email, "a@b.co");
    }

    #[test]
    fn email_shape_gates_step_one() {
        let mut wizard = IntakeWizard::new(opened());
        wizard.set_field(Field::Name, "Jane");
        wizard.set_field(Field::Email, "not-an-email");
        assert_eq!(wizard.next(), Transition::Invalid);
        assert_eq!(wizard.step(), Step::Contact);
        assert_eq!(wizard.errors().get(Field::Email), Some(validation::EMAIL_INVALID));
        assert_eq!(wizard.draft().email, "not-an-email");

        wizard.set_field(Field::Email, "a@b.co");
        assert!(wizard.errors().is_empty());
        assert_eq!(wizard.next(), Transition::Advanced(Step::Company));
    }

    #[test]
    fn step_two_checks_only_its_own_fields() {
        let mut wizard = IntakeWizard::new(opened());
        wizard.set_field(Field::Name, "Jane");
        wizard.set_field(Field::Email, "jane@acme.co");
        wizard.next();

        assert_eq!(wizard.next(), Transition::Invalid);
        let failed: Vec<Field> = wizard.errors().iter().map(|(f, _)| f).collect();
        assert_eq!(failed, vec![Field::Company, Field::Industry, Field::MonthlyLeadVolume]);
        assert_eq!(wizard.step(), Step::Company);
    }

    #[test]
    fn back_never_fails_and_keeps_values() {
        let mut draft = complete_draft();
        draft.biggest_bottleneck = String::new();
        let mut wizard = at_requirements(&draft);
        wizard.set_field(Field::Notes, "call after 3pm");

        let before = wizard.draft().clone();
        assert_eq!(wizard.back(), Step::Company);
        assert_eq!(wizard.back(), Step::Contact);
        assert_eq!(wizard.back(), Step::Contact);
        assert_eq!(wizard.draft(), &before);

        // Forward again re-runs only the guards
        assert_eq!(wizard.next(), Transition::Advanced(Step::Company));
        assert_eq!(wizard.next(), Transition::Advanced(Step::Requirements));
        assert_eq!(wizard.draft().notes, "call after 3pm");
    }

    #[test]
    fn back_clears_errors() {
        let mut wizard = IntakeWizard::new(opened());
        wizard.set_field(Field::Name, "Jane");
        wizard.set_field(Field::Email, "jane@acme.co");
        wizard.next();
        wizard.next();
        assert!(!wizard.errors().is_empty());
        wizard.back();
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn next_is_ignored_on_the_last_step() {
        let mut wizard = at_requirements(&complete_draft());
        assert_eq!(wizard.next(), Transition::Ignored);
        assert_eq!(wizard.step(), Step::Requirements);
    }

    #[test]
    fn submit_appends_a_stamped_record() {
        let store = IntakeStore::new(MemoryStorage::new());
        let mut wizard = at_requirements(&complete_draft());
        let now = wizard.opened_at() + Duration::seconds(42);

        let record = match wizard.submit(&store, now).unwrap() {
            Submission::Accepted(record) => record,
            other => panic!("expected acceptance, got {:?}", other),
        };

        assert_eq!(wizard.step(), Step::Submitted);
        assert!(record.submitted_at() > wizard.opened_at());
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.email, "jane@acme.co");
        assert_eq!(record.company, "Acme");
        assert_eq!(record.industry, "SaaS");
        assert_eq!(record.monthly_lead_volume, LeadVolume::UpTo100);
        assert_eq!(record.biggest_bottleneck, Bottleneck::SlowResponse);

        let stored = store.records().unwrap();
        assert_eq!(stored, vec![record]);
    }

    #[test]
    fn submit_without_bottleneck_stays_on_step_three() {
        let store = IntakeStore::new(MemoryStorage::new());
        let mut draft = complete_draft();
        draft.biggest_bottleneck = String::new();
        let mut wizard = at_requirements(&draft);

        assert_eq!(wizard.submit(&store, Utc::now()).unwrap(), Submission::Invalid);
        assert_eq!(wizard.step(), Step::Requirements);
        assert_eq!(
            wizard.errors().get(Field::BiggestBottleneck),
            Some(validation::SELECT_BOTTLENECK)
        );
        assert!(store.records().unwrap().is_empty());
    }

    #[test]
    fn submit_catches_fields_edited_after_their_step() {
        let store = IntakeStore::new(MemoryStorage::new());
        let mut wizard = at_requirements(&complete_draft());
        wizard.set_field(Field::Email, "broken");

        assert_eq!(wizard.submit(&store, Utc::now()).unwrap(), Submission::Invalid);
        assert_eq!(wizard.step(), Step::Requirements);
        assert_eq!(wizard.errors().get(Field::Email), Some(validation::EMAIL_INVALID));
        assert!(store.records().unwrap().is_empty());
    }

    #[test]
    fn submit_is_ignored_before_step_three() {
        let store = IntakeStore::new(MemoryStorage::new());
        let mut wizard = IntakeWizard::new(opened());
        fill(&mut wizard, &complete_draft());
        assert_eq!(wizard.submit(&store, Utc::now()).unwrap(), Submission::Ignored);
        assert_eq!(wizard.step(), Step::Contact);
    }

    #[test]
    fn storage_failure_keeps_the_draft() {
        let storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY, "][").unwrap();
        let store = IntakeStore::new(storage);
        let mut wizard = at_requirements(&complete_draft());

        assert!(matches!(wizard.submit(&store, Utc::now()), Err(StoreError::Corrupt(_))));
        assert_eq!(wizard.step(), Step::Requirements);
        assert_eq!(wizard.draft(), &complete_draft());
    }

    #[test]
    fn reset_clears_draft_but_not_store() {
        let store = IntakeStore::new(MemoryStorage::new());
        let mut wizard = at_requirements(&complete_draft());
        wizard.submit(&store, Utc::now()).unwrap();

        assert!(!wizard.set_field(Field::Name, "late edit"));
        assert!(wizard.reset());
        assert_eq!(wizard.step(), Step::Contact);
        assert_eq!(wizard.draft(), &IntakeDraft::default());
        assert!(wizard.errors().is_empty());
        assert_eq!(store.records().unwrap().len(), 1);

        assert!(!wizard.reset());
    }

    #[test]
    fn each_submission_adds_one_record() {
        let store = IntakeStore::new(MemoryStorage::new());
        let mut wizard = IntakeWizard::new(opened());
        for i in 0..3 {
            let mut draft = complete_draft();
            draft.company = format!("Company {}", i);
            fill(&mut wizard, &draft);
            wizard.next();
            wizard.next();
            assert!(matches!(
                wizard.submit(&store, opened() + Duration::minutes(i)).unwrap(),
                Submission::Accepted(_)
            ));
            wizard.reset();
        }

        let companies: Vec<String> = store.records().unwrap().into_iter().map(|r| r.company).collect();
        assert_eq!(companies, vec!["Company 0", "Company 1", "Company 2"]);
    }
}
