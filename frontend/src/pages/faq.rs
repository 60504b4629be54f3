use yew::prelude::*;
use web_sys::MouseEvent;
use yew_router::prelude::*;

use crate::Route;
use crate::config::SITE;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    pub answer: AttrValue,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

pub struct FaqSection {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

pub const FAQ_SECTIONS: &[FaqSection] = &[
    FaqSection {
        title: "Getting Started",
        items: &[
            ("How long does setup take?", "Most teams are up and running within 48 hours. The process includes: initial consultation (1 hour), integration setup (4-8 hours), qualification workflow design (2-4 hours), and testing (2 hours). We handle the technical work while you focus on defining your qualification criteria."),
            ("What do I need to get started?", "You'll need: access to your calendar (Google, Outlook, or Apple), your CRM credentials if integrating, a list of qualification questions you want to ask, and clarity on your ideal customer profile. We'll guide you through everything else."),
            ("Can I try it before committing?", "Yes! Book a call and we can set up a limited pilot to test the system with a subset of your leads. This lets you see results before making a full commitment."),
        ],
    },
    FaqSection {
        title: "Integrations",
        items: &[
            ("What platforms do you integrate with?", "Calendars: Google Calendar, Outlook, Apple Calendar. CRMs: HubSpot, Salesforce, Pipedrive, Zoho. Lead sources: Website forms, Zapier, webhooks. We can also build custom integrations for enterprise plans."),
            ("Will this work with my existing tools?", "Most likely yes. We support the major platforms and can connect via API or Zapier for others. If you use a niche tool, we can explore custom integration options during the consultation."),
            ("What if I don't have a CRM?", "No problem! The system works independently and stores lead data. You can export to CSV or use our basic CRM features. We can also help you select and implement a CRM if needed."),
        ],
    },
    FaqSection {
        title: "Qualification & Booking",
        items: &[
            ("Can I customize the qualification questions?", "Absolutely. You have full control over the questions, logic, conditional flows, and scoring that determine lead qualification. We help you design an effective workflow during setup."),
            ("How does the AI qualification work?", "The AI analyzes lead responses in real-time, scores them based on your criteria, and routes them accordingly. High-quality leads go straight to booking, while others might get alternative resources or follow-up sequences."),
            ("Can leads book with specific team members?", "Yes. You can set up round-robin distribution, let leads choose from available team members, or route based on criteria like industry, company size, or location."),
            ("What happens to unqualified leads?", "You decide! Options include: sending them resources, adding to a nurture sequence, offering a different meeting type, or simply thanking them with no immediate action."),
            ("How do you prevent double bookings?", "We sync with your calendar in real-time, check availability before showing time slots, and lock slots during the booking process. We also respect buffer times and event types you configure."),
        ],
    },
    FaqSection {
        title: "Pricing & Plans",
        items: &[
            ("What's included in the setup fee?", "Setup includes: consultation and workflow design, calendar and CRM integration, custom form creation, qualification logic configuration, team training, quality assurance testing, and go-live support."),
            ("Can I change plans later?", "Yes, you can upgrade or downgrade anytime. Upgrades are prorated for the current billing period. Downgrades take effect at the next billing cycle."),
            ("What happens if I exceed my lead limit?", "We'll notify you when you approach your limit. You can upgrade to the next tier or pay an overage fee of $5 per additional lead. We never stop processing leads without notice."),
            ("Is there a contract?", "Starter and Pro plans are month-to-month. Managed plans typically include a 6-month commitment. All plans require 30 days notice to cancel."),
        ],
    },
    FaqSection {
        title: "Security & Support",
        items: &[
            ("Is my data secure?", "Yes. We use enterprise-grade encryption (AES-256), SOC 2 compliant infrastructure, and never share your data. You maintain ownership of all lead data and can export it anytime."),
            ("What about GDPR compliance?", "Our system is GDPR compliant. We provide features for consent management, data deletion requests, and data portability. Privacy policies and terms can be customized for your business."),
            ("Do you offer an API?", "Yes, Pro and Managed plans include API access for custom integrations, data retrieval, and automation triggers."),
            ("What kind of support do you provide?", "Starter: Email support (24-hour response). Pro: Email + chat support (4-hour response). Managed: Dedicated success manager with phone/video support."),
            ("Can you help optimize my workflow?", "Yes! Pro and Managed plans include regular performance reviews. We analyze your data, suggest improvements, and help you refine qualification criteria to improve conversion rates."),
        ],
    },
];

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-page">
            <section class="faq-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Frequently asked questions about our lead automation system."}</p>
            </section>

            <section class="faq-section">
                { for FAQ_SECTIONS.iter().map(|section| html! {
                    <>
                        <h2>{section.title}</h2>
                        { for section.items.iter().map(|(question, answer)| html! {
                            <FaqItem question={*question} answer={*answer} />
                        }) }
                    </>
                }) }
            </section>

            <section class="faq-cta">
                <h2>{"Still have questions?"}</h2>
                <p>
                    {"Email us at "}
                    <a href={format!("mailto:{}", SITE.contact_email)}>{SITE.contact_email}</a>
                    {" or request a setup and we'll walk you through it."}
                </p>
                <Link<Route> to={Route::Intake} classes="faq-cta-button">
                    {"Request Setup"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .faq-page {
                    padding: 96px 24px;
                    max-width: 800px;
                    margin: 0 auto;
                    color: #111827;
                }
                .faq-hero {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .faq-hero h1 {
                    font-size: 2.25rem;
                    font-weight: 700;
                }
                .faq-hero p {
                    color: #4b5563;
                    margin-top: 1rem;
                }
                .faq-section h2 {
                    font-size: 1.25rem;
                    color: #2563eb;
                    margin: 2.5rem 0 1rem;
                }
                .faq-item {
                    border-bottom: 1px solid #e5e7eb;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 1rem;
                    font-weight: 600;
                    color: #111827;
                    text-align: left;
                }
                .toggle-icon {
                    font-size: 1.5rem;
                    color: #2563eb;
                    margin-left: 1rem;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease-out;
                    color: #4b5563;
                    line-height: 1.6;
                }
                .faq-item.open .faq-answer {
                    max-height: 500px;
                    padding-bottom: 1.25rem;
                }
                .faq-cta {
                    margin-top: 4rem;
                    text-align: center;
                    background: #eff6ff;
                    border-radius: 12px;
                    padding: 2rem;
                }
                .faq-cta a {
                    color: #2563eb;
                }
                .faq-cta-button {
                    display: inline-block;
                    margin-top: 1.5rem;
                    background: #2563eb;
                    color: #fff !important;
                    padding: 12px 24px;
                    border-radius: 6px;
                    font-weight: 600;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_answered_questions() {
        for section in FAQ_SECTIONS {
            assert!(!section.items.is_empty(), "{} is empty", section.title);
            for (question, answer) in section.items {
                assert!(question.ends_with('?'), "{}", question);
                assert!(!answer.is_empty());
            }
        }
    }
}
