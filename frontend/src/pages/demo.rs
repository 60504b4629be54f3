use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::async_state::StateDemo;
use crate::config::SITE;

const WALKTHROUGH: &[(&str, &str)] = &[
    ("Lead Capture Form", "A branded form that captures essential lead information and begins the qualification process."),
    ("Smart Qualification", "AI-powered questions adapt based on responses to accurately score and qualify each lead."),
    ("Instant Booking", "Qualified leads immediately see your calendar availability and can book a time that works for both parties."),
    ("Automated Confirmations", "Both the lead and your team receive instant confirmation and reminder notifications."),
    ("Analytics Dashboard", "Track conversion rates, booking volume, and lead quality metrics in real-time."),
];

#[function_component(Demo)]
pub fn demo() -> Html {
    html! {
        <div class="demo-page">
            <section class="demo-intro">
                <h1>{"See It In Action"}</h1>
                <p>{"Experience how our autopilot turns leads into booked calls automatically"}</p>
            </section>

            <section class="demo-launch">
                <div class="demo-play">{"▶"}</div>
                <p>
                    {"Click the button below to explore our live demo environment and see the full lead \
                      qualification and booking workflow."}
                </p>
                <a href={SITE.demo_url} target="_blank" rel="noopener noreferrer" class="demo-launch-button">
                    {"Launch Demo ↗"}
                </a>
            </section>

            <section class="demo-walkthrough">
                <h2>{"What you'll see"}</h2>
                { for WALKTHROUGH.iter().enumerate().map(|(i, (title, text))| html! {
                    <div class="walkthrough-step">
                        <div class="walkthrough-number">{(i + 1).to_string()}</div>
                        <div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    </div>
                }) }
            </section>

            <section class="demo-states">
                <h2>{"Loading, empty and error states"}</h2>
                <StateDemo />
            </section>

            <section class="demo-cta">
                <h2>{"Ready to get started?"}</h2>
                <p>{"After seeing the demo, schedule a call to discuss implementing this for your team."}</p>
                <div class="demo-cta-actions">
                    <a href={SITE.primary_cta_url} target="_blank" rel="noopener noreferrer" class="demo-launch-button">
                        {"Book a Call"}
                    </a>
                    <Link<Route> to={Route::Intake} classes="demo-secondary">{"Request Setup"}</Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .demo-page { padding: 96px 24px; max-width: 900px; margin: 0 auto; color: #111827; }
                .demo-intro { text-align: center; }
                .demo-intro h1 { font-size: 2.5rem; font-weight: 700; }
                .demo-intro p { color: #4b5563; margin-top: 1rem; font-size: 1.125rem; }
                .demo-launch {
                    margin-top: 3rem; padding: 64px 24px; text-align: center;
                    border-radius: 16px; background: #f3f4f6; border: 2px dashed #d1d5db;
                }
                .demo-play { font-size: 3rem; color: #2563eb; }
                .demo-launch p { max-width: 520px; margin: 1rem auto 2rem; color: #4b5563; }
                .demo-launch-button {
                    display: inline-block; background: #2563eb; color: #fff; padding: 12px 24px;
                    border-radius: 6px; font-weight: 600; text-decoration: none;
                }
                .demo-walkthrough, .demo-states { margin-top: 4rem; }
                .demo-walkthrough h2, .demo-states h2 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1.5rem; }
                .walkthrough-step { display: flex; gap: 16px; margin-bottom: 1.5rem; }
                .walkthrough-number {
                    flex-shrink: 0; width: 36px; height: 36px; border-radius: 50%;
                    background: #dbeafe; color: #1d4ed8; font-weight: 700;
                    display: flex; align-items: center; justify-content: center;
                }
                .walkthrough-step p { color: #4b5563; margin-top: 0.25rem; }
                .demo-cta { margin-top: 4rem; text-align: center; background: #eff6ff; border-radius: 12px; padding: 2.5rem; }
                .demo-cta p { color: #4b5563; margin: 1rem 0 1.5rem; }
                .demo-cta-actions { display: flex; gap: 16px; justify-content: center; flex-wrap: wrap; }
                .demo-secondary {
                    padding: 12px 24px; border-radius: 6px; border: 1px solid #2563eb;
                    color: #2563eb; font-weight: 600; text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
