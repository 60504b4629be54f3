use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::config::SITE;

pub enum PlanCta {
    BookCall,
    RequestSetup,
}

pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub setup_fee: &'static str,
    pub monthly: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
    pub cta_label: &'static str,
    pub cta: PlanCta,
}

pub const PLANS: &[Plan] = &[
    Plan {
        id: "starter",
        name: "Starter",
        setup_fee: "$499",
        monthly: "$999",
        description: "Perfect for small teams getting started with lead automation",
        features: &[
            "Up to 100 leads/month",
            "Single calendar integration",
            "Basic qualification workflow",
            "Email notifications",
            "Standard support (email)",
            "Monthly performance report",
        ],
        highlighted: false,
        cta_label: "Get Started",
        cta: PlanCta::BookCall,
    },
    Plan {
        id: "pro",
        name: "Pro",
        setup_fee: "$999",
        monthly: "$1,499",
        description: "For growing teams with higher volume and advanced needs",
        features: &[
            "Up to 500 leads/month",
            "Multiple calendar sync (team scheduling)",
            "Advanced qualification with scoring",
            "Email + SMS notifications",
            "Priority support (email + chat)",
            "Weekly analytics dashboard",
            "CRM integration (1 platform)",
            "Custom branding on forms",
            "A/B testing for qualification flows",
        ],
        highlighted: true,
        cta_label: "Get Started",
        cta: PlanCta::BookCall,
    },
    Plan {
        id: "managed",
        name: "Managed",
        setup_fee: "Custom",
        monthly: "Custom",
        description: "White-glove service for enterprise teams with complex workflows",
        features: &[
            "Unlimited leads",
            "Enterprise calendar features",
            "Custom qualification logic",
            "Multi-channel notifications",
            "Dedicated success manager",
            "Real-time analytics + reporting",
            "Multiple CRM integrations",
            "Full white-label solution",
            "Custom integrations & webhooks",
            "SLA guarantee",
            "Quarterly strategy reviews",
        ],
        highlighted: false,
        cta_label: "Contact Sales",
        cta: PlanCta::RequestSetup,
    },
];

#[derive(Properties, PartialEq)]
pub struct PlanCardProps {
    pub index: usize,
}

#[function_component(PlanCard)]
pub fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &PLANS[props.index];
    let price = if plan.monthly == "Custom" {
        html! { <span class="plan-price">{"Custom"}</span> }
    } else {
        html! {
            <>
                <span class="plan-price">{plan.monthly}</span>
                <span class="plan-period">{"/month"}</span>
            </>
        }
    };

    let cta = match plan.cta {
        PlanCta::BookCall => html! {
            <a href={SITE.primary_cta_url} target="_blank" rel="noopener noreferrer" class="plan-cta">
                {plan.cta_label}
            </a>
        },
        PlanCta::RequestSetup => html! {
            <Link<Route> to={Route::Intake} classes="plan-cta">
                {plan.cta_label}
            </Link<Route>>
        },
    };

    html! {
        <div class={classes!("plan-card", plan.highlighted.then(|| "highlighted"))} id={plan.id}>
            <div class="plan-header">
                <h3>{plan.name}</h3>
                if plan.highlighted {
                    <span class="plan-badge">{"Most popular"}</span>
                }
            </div>
            <p class="plan-description">{plan.description}</p>
            <p class="plan-pricing">{price}</p>
            <p class="plan-setup">{format!("{} one-time setup", plan.setup_fee)}</p>
            {cta}
            <ul class="plan-features">
                { for plan.features.iter().map(|f| html! { <li>{"✓ "}{*f}</li> }) }
            </ul>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <div class="pricing-page">
            <style>
                {r#"
                .pricing-page { padding: 96px 24px; max-width: 1200px; margin: 0 auto; }
                .pricing-intro { text-align: center; max-width: 640px; margin: 0 auto; }
                .pricing-intro h1 { font-size: 2.5rem; font-weight: 700; color: #111827; }
                .pricing-intro p { margin-top: 1.5rem; font-size: 1.125rem; color: #4b5563; }
                .plan-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 32px; margin-top: 4rem; align-items: start; }
                .plan-card { border-radius: 24px; padding: 32px; background: #fff; box-shadow: 0 10px 15px rgba(0,0,0,0.08); border: 1px solid #e5e7eb; }
                .plan-card.highlighted { background: #2563eb; color: #fff; border-color: #2563eb; }
                .plan-header { display: flex; justify-content: space-between; align-items: center; }
                .plan-badge { border-radius: 999px; background: rgba(255,255,255,0.1); padding: 4px 12px; font-size: 0.75rem; font-weight: 600; }
                .plan-description, .plan-setup { color: #4b5563; }
                .plan-card.highlighted .plan-description, .plan-card.highlighted .plan-setup { color: #dbeafe; }
                .plan-price { font-size: 2.25rem; font-weight: 700; }
                .plan-cta { display: block; text-align: center; margin-top: 1.5rem; padding: 10px; border-radius: 6px; background: #2563eb; color: #fff; font-weight: 600; text-decoration: none; }
                .plan-card.highlighted .plan-cta { background: #fff; color: #2563eb; }
                .plan-features { list-style: none; padding: 0; margin-top: 2rem; line-height: 2; }
                "#}
            </style>
            <div class="pricing-intro">
                <h1>{"Simple, transparent pricing"}</h1>
                <p>{"Choose the plan that fits your team and volume needs."}</p>
            </div>
            <div class="plan-grid">
                { for (0..PLANS.len()).map(|index| html! { <PlanCard index={index} /> }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_highlighted_plan_and_managed_goes_to_intake() {
        assert_eq!(PLANS.iter().filter(|p| p.highlighted).count(), 1);
        let managed = PLANS.iter().find(|p| p.id == "managed").unwrap();
        assert!(matches!(managed.cta, PlanCta::RequestSetup));
    }
}
