use crate::intake::model::IntakeDraft;

/// A draft that passes every step.
pub fn complete_draft() -> IntakeDraft {
    IntakeDraft {
        name: "Jane Doe".to_string(),
        email: "jane@acme.co".to_string(),
        company: "Acme".to_string(),
        industry: "SaaS".to_string(),
        monthly_lead_volume: "51-100".to_string(),
        biggest_bottleneck: "slow-response".to_string(),
        current_tools: String::new(),
        notes: String::new(),
    }
}
