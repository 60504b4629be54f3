use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::intake::validation::{self, FieldErrors};

/// The wizard's position. Steps are numbered 1..=3 in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Contact,
    Company,
    Requirements,
    Submitted,
}

impl Step {
    pub const FORM_STEPS: [Step; 3] = [Step::Contact, Step::Company, Step::Requirements];

    pub fn number(&self) -> u8 {
        match self {
            Step::Contact => 1,
            Step::Company => 2,
            Step::Requirements => 3,
            Step::Submitted => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Contact => "Contact Info",
            Step::Company => "Company Details",
            Step::Requirements => "Requirements",
            Step::Submitted => "Submitted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Company,
    Industry,
    MonthlyLeadVolume,
    BiggestBottleneck,
    CurrentTools,
    Notes,
}

impl Field {
    /// The form control id, which is also the key used in stored records.
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Industry => "industry",
            Field::MonthlyLeadVolume => "monthlyLeadVolume",
            Field::BiggestBottleneck => "biggestBottleneck",
            Field::CurrentTools => "currentTools",
            Field::Notes => "notes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Company => "Company Name",
            Field::Industry => "Industry",
            Field::MonthlyLeadVolume => "Monthly Lead Volume",
            Field::BiggestBottleneck => "Biggest Bottleneck",
            Field::CurrentTools => "Current Tools",
            Field::Notes => "Additional Notes",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::CurrentTools | Field::Notes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption(pub String);

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown option '{}'", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadVolume {
    #[serde(rename = "0-50")]
    UpTo50,
    #[serde(rename = "51-100")]
    UpTo100,
    #[serde(rename = "101-250")]
    UpTo250,
    #[serde(rename = "251-500")]
    UpTo500,
    #[serde(rename = "500+")]
    Over500,
}

impl LeadVolume {
    pub const ALL: [LeadVolume; 5] = [
        LeadVolume::UpTo50,
        LeadVolume::UpTo100,
        LeadVolume::UpTo250,
        LeadVolume::UpTo500,
        LeadVolume::Over500,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            LeadVolume::UpTo50 => "0-50",
            LeadVolume::UpTo100 => "51-100",
            LeadVolume::UpTo250 => "101-250",
            LeadVolume::UpTo500 => "251-500",
            LeadVolume::Over500 => "500+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeadVolume::UpTo50 => "0-50 leads/month",
            LeadVolume::UpTo100 => "51-100 leads/month",
            LeadVolume::UpTo250 => "101-250 leads/month",
            LeadVolume::UpTo500 => "251-500 leads/month",
            LeadVolume::Over500 => "500+ leads/month",
        }
    }
}

impl FromStr for LeadVolume {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadVolume::ALL
            .into_iter()
            .find(|v| v.value() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bottleneck {
    SlowResponse,
    ManualQualification,
    CalendarManagement,
    LeadLoss,
    NoAutomation,
    Other,
}

impl Bottleneck {
    pub const ALL: [Bottleneck; 6] = [
        Bottleneck::SlowResponse,
        Bottleneck::ManualQualification,
        Bottleneck::CalendarManagement,
        Bottleneck::LeadLoss,
        Bottleneck::NoAutomation,
        Bottleneck::Other,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Bottleneck::SlowResponse => "slow-response",
            Bottleneck::ManualQualification => "manual-qualification",
            Bottleneck::CalendarManagement => "calendar-management",
            Bottleneck::LeadLoss => "lead-loss",
            Bottleneck::NoAutomation => "no-automation",
            Bottleneck::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Bottleneck::SlowResponse => "Slow response times",
            Bottleneck::ManualQualification => "Manual qualification process",
            Bottleneck::CalendarManagement => "Calendar management chaos",
            Bottleneck::LeadLoss => "Leads falling through cracks",
            Bottleneck::NoAutomation => "No automation at all",
            Bottleneck::Other => "Other",
        }
    }
}

impl FromStr for Bottleneck {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bottleneck::ALL
            .into_iter()
            .find(|b| b.value() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// In-progress form state. Every field is kept as the raw text the user
/// entered so nothing is lost when a step fails validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub industry: String,
    pub monthly_lead_volume: String,
    pub biggest_bottleneck: String,
    pub current_tools: String,
    pub notes: String,
}

impl IntakeDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Industry => &self.industry,
            Field::MonthlyLeadVolume => &self.monthly_lead_volume,
            Field::BiggestBottleneck => &self.biggest_bottleneck,
            Field::CurrentTools => &self.current_tools,
            Field::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Industry => &mut self.industry,
            Field::MonthlyLeadVolume => &mut self.monthly_lead_volume,
            Field::BiggestBottleneck => &mut self.biggest_bottleneck,
            Field::CurrentTools => &mut self.current_tools,
            Field::Notes => &mut self.notes,
        };
        *slot = value;
    }
}

/// A finished submission as stored in the browser and exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRecord {
    pub name: String,
    pub email: String,
    pub company: String,
    pub industry: String,
    pub monthly_lead_volume: LeadVolume,
    pub biggest_bottleneck: Bottleneck,
    #[serde(default)]
    pub current_tools: String,
    #[serde(default)]
    pub notes: String,
    #[serde(with = "iso_millis")]
    submitted_at: DateTime<Utc>,
}

impl IntakeRecord {
    /// Builds a record from a draft, checking every step's fields. The
    /// timestamp is truncated to milliseconds, the precision it is stored at.
    pub fn from_draft(draft: &IntakeDraft, submitted_at: DateTime<Utc>) -> Result<Self, FieldErrors> {
        let errors = validation::validate_all(draft);
        if !errors.is_empty() {
            return Err(errors);
        }

        let monthly_lead_volume = draft.monthly_lead_volume.parse::<LeadVolume>().map_err(|_| {
            FieldErrors::single(Field::MonthlyLeadVolume, validation::SELECT_LEAD_VOLUME)
        })?;
        let biggest_bottleneck = draft.biggest_bottleneck.parse::<Bottleneck>().map_err(|_| {
            FieldErrors::single(Field::BiggestBottleneck, validation::SELECT_BOTTLENECK)
        })?;

        Ok(Self {
            name: draft.name.clone(),
            // The shape check runs on the trimmed address; store what was checked.
            email: draft.email.trim().to_string(),
            company: draft.company.clone(),
            industry: draft.industry.clone(),
            monthly_lead_volume,
            biggest_bottleneck,
            current_tools: draft.current_tools.clone(),
            notes: draft.notes.clone(),
            submitted_at: submitted_at.trunc_subsecs(3),
        })
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}

/// ISO-8601 in UTC with millisecond precision and a `Z` suffix.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::test_support::complete_draft;
    use chrono::TimeZone;

    #[test]
    fn options_parse_from_their_values() {
        for volume in LeadVolume::ALL {
            assert_eq!(volume.value().parse::<LeadVolume>(), Ok(volume));
        }
        for bottleneck in Bottleneck::ALL {
            assert_eq!(bottleneck.value().parse::<Bottleneck>(), Ok(bottleneck));
        }
        assert!("".parse::<LeadVolume>().is_err());
        assert!("1000+".parse::<LeadVolume>().is_err());
        assert!("Slow response times".parse::<Bottleneck>().is_err());
    }

    #[test]
    fn draft_get_and_set_cover_every_field() {
        let fields = [
            Field::Name,
            Field::Email,
            Field::Company,
            Field::Industry,
            Field::MonthlyLeadVolume,
            Field::BiggestBottleneck,
            Field::CurrentTools,
            Field::Notes,
        ];
        let mut draft = IntakeDraft::default();
        for field in fields {
            draft.set(field, format!("value for {}", field.id()));
        }
        for field in fields {
            assert_eq!(draft.get(field), format!("value for {}", field.id()));
        }
    }

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let at = Utc.with_ymd_and_hms(2025, 1, 31, 9, 15, 2).unwrap();
        let record = IntakeRecord::from_draft(&complete_draft(), at).unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["monthlyLeadVolume"], "51-100");
        assert_eq!(json["biggestBottleneck"], "slow-response");
        assert_eq!(json["currentTools"], "");
        assert_eq!(json["submittedAt"], "2025-01-31T09:15:02.000Z");
    }

    #[test]
    fn record_reads_documents_written_by_browsers() {
        let raw = r#"{
            "name": "Sam",
            "email": "sam@example.org",
            "company": "Globex",
            "industry": "Consulting",
            "monthlyLeadVolume": "500+",
            "biggestBottleneck": "lead-loss",
            "currentTools": "HubSpot",
            "notes": "",
            "submittedAt": "2024-11-02T17:04:59.321Z"
        }"#;
        let record: IntakeRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.monthly_lead_volume, LeadVolume::Over500);
        assert_eq!(record.biggest_bottleneck, Bottleneck::LeadLoss);
        assert_eq!(
            record.submitted_at(),
            Utc.with_ymd_and_hms(2024, 11, 2, 17, 4, 59).unwrap() + chrono::Duration::milliseconds(321)
        );
    }

    #[test]
    fn from_draft_truncates_to_milliseconds() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap() + chrono::Duration::nanoseconds(1_234_567);
        let record = IntakeRecord::from_draft(&complete_draft(), at).unwrap();
        assert_eq!(record.submitted_at().timestamp_subsec_nanos(), 1_000_000);
    }

    #[test]
    fn from_draft_stores_the_checked_email() {
        let mut draft = complete_draft();
        draft.email = "  jane@acme.co\t".to_string();
        let record = IntakeRecord::from_draft(&draft, Utc::now()).unwrap();

        assert_eq!(record.email, "jane@acme.co");
        assert!(
            regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap().is_match(&record.email),
            "stored email {:?} is not local@domain.tld",
            record.email
        );
    }

    #[test]
    fn from_draft_rejects_incomplete_drafts() {
        let mut draft = complete_draft();
        draft.company = "  ".to_string();
        draft.monthly_lead_volume = String::new();
        let errors = IntakeRecord::from_draft(&draft, Utc::now()).unwrap_err();
        assert!(errors.get(Field::Company).is_some());
        assert!(errors.get(Field::MonthlyLeadVolume).is_some());
        assert!(errors.get(Field::Name).is_none());
    }
}
