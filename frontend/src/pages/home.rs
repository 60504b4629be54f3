use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::config::SITE;
use crate::pages::pricing::PLANS;

const BENEFITS: &[(&str, &str, &str)] = &[
    ("⚡", "Instant Response", "Respond to leads within seconds, not hours. Never miss a hot prospect again."),
    ("🎯", "Smart Qualification", "AI-powered qualification ensures only the best-fit leads reach your calendar."),
    ("⏰", "24/7 Availability", "Your autopilot works around the clock, booking calls even when you're offline."),
    ("📅", "Calendar Sync", "Seamlessly syncs with your existing calendar. No double bookings, ever."),
    ("👥", "Team Routing", "Round-robin distribution ensures even workload across your sales team."),
    ("⚙", "Fully Customizable", "Tailor qualification questions, booking flows, and notifications to your needs."),
];

const STEPS: &[(&str, &str)] = &[
    ("Connect Your Tools", "Link your calendar, CRM, and lead sources. We integrate with all major platforms."),
    ("Configure Your Workflow", "Set your qualification criteria, booking rules, and notification preferences."),
    ("Start Converting", "Watch as qualified leads automatically flow into your calendar, ready to close."),
];

const DELIVERABLES: &[&str] = &[
    "Custom landing page with embedded booking form",
    "AI-powered lead qualification system",
    "Automated calendar scheduling with conflict detection",
    "Email and SMS notifications for leads and team",
    "Analytics dashboard with conversion tracking",
    "CRM integration and data sync",
    "Ongoing support and optimization",
];

const FAQ_TEASER: &[(&str, &str)] = &[
    ("How long does setup take?", "Most teams are up and running within 48 hours. We handle the technical setup while you focus on defining your qualification criteria."),
    ("What platforms do you integrate with?", "We integrate with all major calendars (Google, Outlook, Apple), CRMs (HubSpot, Salesforce, Pipedrive), and lead sources."),
    ("Can I customize the qualification questions?", "Absolutely. You have full control over the questions, logic, and scoring that determine lead qualification."),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home">
            <section class="hero">
                <h1>{SITE.tagline}</h1>
                <p class="hero-subtitle">
                    {"Stop losing leads to slow response times. Our automated system qualifies prospects, \
                      books calls, and gets them on your calendar while you sleep."}
                </p>
                <div class="hero-actions">
                    <a href={SITE.primary_cta_url} target="_blank" rel="noopener noreferrer" class="btn-primary">
                        {"Book a Call"}
                    </a>
                    <Link<Route> to={Route::Intake} classes="btn-secondary">{"Request Setup"}</Link<Route>>
                    <Link<Route> to={Route::Demo} classes="btn-ghost">{"Watch Demo →"}</Link<Route>>
                </div>
            </section>

            <section class="home-section">
                <h2>{"Why teams choose our autopilot"}</h2>
                <p class="section-subtitle">{"Transform your lead process from manual chaos to automated precision"}</p>
                <div class="benefit-grid">
                    { for BENEFITS.iter().map(|(icon, title, text)| html! {
                        <div class="benefit">
                            <span class="benefit-icon">{*icon}</span>
                            <div>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="home-section alt">
                <h2>{"How it works"}</h2>
                <p class="section-subtitle">{"Get from setup to booked calls in three simple steps"}</p>
                <div class="steps">
                    { for STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                        <div class="step">
                            <div class="step-number">{(i + 1).to_string()}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="home-section">
                <h2>{"What you get"}</h2>
                <p class="section-subtitle">{"Everything you need to automate your lead-to-booking process"}</p>
                <ul class="deliverables">
                    { for DELIVERABLES.iter().map(|d| html! { <li>{"✓ "}{*d}</li> }) }
                </ul>
            </section>

            <section class="home-section alt">
                <h2>{"Simple, transparent pricing"}</h2>
                <p class="section-subtitle">{"Choose the plan that fits your volume and needs"}</p>
                <div class="pricing-teaser">
                    { for PLANS.iter().map(|plan| html! {
                        <div class={classes!("teaser-card", plan.highlighted.then(|| "highlighted"))}>
                            <h3>{plan.name}</h3>
                            if plan.highlighted {
                                <span class="teaser-badge">{"Popular"}</span>
                            }
                            <p class="teaser-price">{plan.monthly}</p>
                            <p>{plan.description}</p>
                            <Link<Route> to={Route::Pricing} classes="btn-ghost">{"View Details"}</Link<Route>>
                        </div>
                    }) }
                </div>
            </section>

            <section class="home-section">
                <h2>{"Frequently asked questions"}</h2>
                <div class="faq-teaser">
                    { for FAQ_TEASER.iter().map(|(q, a)| html! {
                        <div class="faq-teaser-item">
                            <h3>{*q}</h3>
                            <p>{*a}</p>
                        </div>
                    }) }
                </div>
                <Link<Route> to={Route::Faq} classes="btn-ghost">{"View all FAQs →"}</Link<Route>>
            </section>

            <section class="final-cta">
                <h2>{"Ready to automate your bookings?"}</h2>
                <p>{"Join hundreds of teams already converting more leads on autopilot."}</p>
                <div class="hero-actions">
                    <a href={SITE.primary_cta_url} target="_blank" rel="noopener noreferrer" class="btn-primary">
                        {"Book a Call"}
                    </a>
                    <Link<Route> to={Route::Intake} classes="btn-secondary">{"Get Started"}</Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .home { color: #111827; }
                .hero {
                    padding: 140px 24px 96px;
                    text-align: center;
                    background: linear-gradient(180deg, #eff6ff 0%, #ffffff 100%);
                }
                .hero h1 { font-size: 3rem; font-weight: 800; letter-spacing: -0.02em; }
                .hero-subtitle { max-width: 640px; margin: 1.5rem auto 0; font-size: 1.125rem; color: #4b5563; line-height: 1.7; }
                .hero-actions { display: flex; gap: 16px; justify-content: center; flex-wrap: wrap; margin-top: 2.5rem; }
                .btn-primary, .btn-secondary, .btn-ghost {
                    padding: 12px 24px; border-radius: 6px; font-weight: 600; text-decoration: none;
                }
                .btn-primary { background: #2563eb; color: #fff; }
                .btn-primary:hover { background: #1d4ed8; }
                .btn-secondary { border: 1px solid #2563eb; color: #2563eb; }
                .btn-ghost { color: #2563eb; }
                .home-section { padding: 96px 24px; max-width: 1100px; margin: 0 auto; text-align: center; }
                .home-section.alt { background: #f9fafb; max-width: none; }
                .home-section h2 { font-size: 2rem; font-weight: 700; }
                .section-subtitle { color: #4b5563; margin-top: 1rem; }
                .benefit-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 32px; margin-top: 3rem; text-align: left; }
                .benefit { display: flex; gap: 16px; }
                .benefit-icon { font-size: 1.5rem; }
                .benefit p, .step p, .faq-teaser-item p { color: #4b5563; line-height: 1.6; }
                .steps { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 32px; max-width: 1100px; margin: 3rem auto 0; }
                .step-number {
                    width: 48px; height: 48px; margin: 0 auto 1rem; border-radius: 50%;
                    background: #2563eb; color: #fff; display: flex; align-items: center; justify-content: center;
                    font-size: 1.25rem; font-weight: 700;
                }
                .deliverables { list-style: none; padding: 0; margin: 3rem auto 0; max-width: 560px; text-align: left; line-height: 2.2; }
                .pricing-teaser { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 24px; max-width: 1100px; margin: 3rem auto 0; }
                .teaser-card { background: #fff; border: 1px solid #e5e7eb; border-radius: 16px; padding: 32px; }
                .teaser-card.highlighted { border: 2px solid #2563eb; }
                .teaser-badge { background: #dbeafe; color: #1d4ed8; border-radius: 999px; padding: 2px 10px; font-size: 0.75rem; font-weight: 600; }
                .teaser-price { font-size: 2rem; font-weight: 700; margin: 1rem 0; }
                .faq-teaser { max-width: 760px; margin: 3rem auto 2rem; text-align: left; }
                .faq-teaser-item { padding: 1.25rem 0; border-bottom: 1px solid #e5e7eb; }
                .final-cta { padding: 96px 24px; text-align: center; background: #2563eb; color: #fff; }
                .final-cta p { color: #dbeafe; margin-top: 1rem; }
                .final-cta .btn-primary { background: #fff; color: #2563eb; }
                .final-cta .btn-secondary { border-color: #fff; color: #fff; }
                @media (max-width: 768px) {
                    .hero h1 { font-size: 2.25rem; }
                }
                "#}
            </style>
        </div>
    }
}
