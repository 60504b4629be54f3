use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use chrono::Utc;
use log::{error, info};

use crate::components::notification::{Toast, ToastSlot};
use crate::config::SITE;
use crate::intake::export;
use crate::intake::model::{Bottleneck, Field, IntakeRecord, LeadVolume, Step};
use crate::intake::store::{IntakeStore, LocalStorage};
use crate::intake::wizard::{IntakeWizard, Submission, Transition};

pub enum IntakeMsg {
    SetField(Field, String),
    Next,
    Back,
    Submit,
    Export,
    Reset,
    DismissToast,
    ClearStoreError,
}

pub struct IntakePage {
    wizard: IntakeWizard,
    store: IntakeStore<LocalStorage>,
    toast: ToastSlot,
    store_error: Option<String>,
    last_submission: Option<IntakeRecord>,
}

impl Component for IntakePage {
    type Message = IntakeMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            wizard: IntakeWizard::new(Utc::now()),
            store: IntakeStore::new(LocalStorage),
            toast: ToastSlot::default(),
            store_error: None,
            last_submission: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            IntakeMsg::SetField(field, value) => self.wizard.set_field(field, value),
            IntakeMsg::Next => {
                if let Transition::Advanced(step) = self.wizard.next() {
                    info!("Intake advanced to step {}", step.number());
                }
                true
            }
            IntakeMsg::Back => {
                self.wizard.back();
                true
            }
            IntakeMsg::Submit => {
                let now = Utc::now();
                match self.wizard.submit(&self.store, now) {
                    Ok(Submission::Accepted(record)) => {
                        info!(
                            "Intake completed {}s after opening",
                            (now - self.wizard.opened_at()).num_seconds()
                        );
                        self.store_error = None;
                        self.last_submission = Some(record);
                        self.toast.show("Your request has been submitted successfully!");
                    }
                    Ok(Submission::Invalid) | Ok(Submission::Ignored) => {}
                    Err(e) => {
                        error!("Failed to store intake submission: {}", e);
                        self.store_error = Some(e.to_string());
                    }
                }
                true
            }
            IntakeMsg::Export => {
                let today = Utc::now().date_naive();
                match self.store.export_all(today) {
                    Ok(doc) => match export::download(&doc) {
                        Ok(()) => {
                            self.store_error = None;
                            self.toast.show("Submissions exported successfully!");
                        }
                        Err(e) => {
                            error!("Download failed: {:?}", e);
                            self.store_error = Some("Your browser blocked the download.".to_string());
                        }
                    },
                    Err(e) => {
                        error!("Failed to export submissions: {}", e);
                        self.store_error = Some(e.to_string());
                    }
                }
                true
            }
            IntakeMsg::Reset => {
                self.store_error = None;
                self.last_submission = None;
                self.wizard.reset()
            }
            IntakeMsg::DismissToast => {
                self.toast.dismiss();
                true
            }
            IntakeMsg::ClearStoreError => {
                self.store_error = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let content = if self.wizard.step() == Step::Submitted {
            self.view_submitted(ctx)
        } else {
            self.view_form(ctx)
        };

        html! {
            <div class="intake-page">
                <style>{INTAKE_CSS}</style>
                <div class="intake-container">
                    if let Some(message) = &self.store_error {
                        <div class="store-error" role="alert">
                            <span>{ message }</span>
                            <button onclick={ctx.link().callback(|_| IntakeMsg::ClearStoreError)}>{"✕"}</button>
                        </div>
                    }
                    { content }
                </div>
                if let Some((id, message)) = self.toast.current() {
                    <Toast
                        id={id}
                        message={message.to_string()}
                        on_dismiss={ctx.link().callback(|_| IntakeMsg::DismissToast)}
                    />
                }
            </div>
        }
    }
}

impl IntakePage {
    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let step = self.wizard.step();
        let step_fields = match step {
            Step::Contact => html! {
                <div class="field-grid">
                    { self.text_input(ctx, Field::Name, "text", "") }
                    { self.text_input(ctx, Field::Email, "email", "you@company.com") }
                </div>
            },
            Step::Company => html! {
                <>
                    <div class="field-grid">
                        { self.text_input(ctx, Field::Company, "text", "") }
                        { self.text_input(ctx, Field::Industry, "text", "e.g., SaaS, E-commerce, Consulting") }
                    </div>
                    { self.select(
                        ctx,
                        Field::MonthlyLeadVolume,
                        "Select range",
                        LeadVolume::ALL.iter().map(|v| (v.value(), v.label())).collect(),
                    ) }
                </>
            },
            Step::Requirements => html! {
                <>
                    { self.select(
                        ctx,
                        Field::BiggestBottleneck,
                        "Select issue",
                        Bottleneck::ALL.iter().map(|b| (b.value(), b.label())).collect(),
                    ) }
                    { self.text_input(ctx, Field::CurrentTools, "text", "e.g., HubSpot, Calendly, Google Calendar") }
                    { self.textarea(ctx, Field::Notes, "Tell us anything else we should know about your needs...") }
                </>
            },
            Step::Submitted => html! {},
        };

        let primary = if step == Step::Requirements {
            html! {
                <button type="button" class="primary-button" onclick={ctx.link().callback(|_| IntakeMsg::Submit)}>
                    {"Submit Request"}
                </button>
            }
        } else {
            html! {
                <button type="button" class="primary-button" onclick={ctx.link().callback(|_| IntakeMsg::Next)}>
                    {"Next"}
                </button>
            }
        };

        html! {
            <>
                <div class="intake-header">
                    <h1>{"Request Setup"}</h1>
                    <p>{"Tell us about your needs and we'll create a custom proposal for your team."}</p>
                </div>
                { self.progress() }
                <form class="intake-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                    <h2>{ format!("Step {} of 3: {}", step.number(), step.title()) }</h2>
                    { step_fields }
                    <div class="form-actions">
                        if step != Step::Contact {
                            <button type="button" class="secondary-button" onclick={ctx.link().callback(|_| IntakeMsg::Back)}>
                                {"Back"}
                            </button>
                        } else {
                            <p class="required-note"><span class="required">{"*"}</span>{" Required fields"}</p>
                        }
                        { primary }
                    </div>
                </form>
            </>
        }
    }

    fn view_submitted(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="intake-done">
                <div class="done-icon">{"✓"}</div>
                <h1>{"Thank you for your request!"}</h1>
                <p>{"We've received your setup request and will be in touch within 24 hours to discuss next steps."}</p>
                if let Some(record) = &self.last_submission {
                    <p class="received-at">{ format!("Received {}", record.submitted_at().format("%b %-d, %Y at %H:%M UTC")) }</p>
                }
                <div class="done-actions">
                    <button class="secondary-button" onclick={ctx.link().callback(|_| IntakeMsg::Export)}>
                        {"Download Submissions (JSON)"}
                    </button>
                    <button class="link-button" onclick={ctx.link().callback(|_| IntakeMsg::Reset)}>
                        {"Submit Another Request"}
                    </button>
                </div>
                <p class="contact-line">
                    {"Questions? Email us at "}
                    <a href={format!("mailto:{}", SITE.contact_email)}>{SITE.contact_email}</a>
                </p>
            </div>
        }
    }

    fn progress(&self) -> Html {
        let current = self.wizard.step().number();
        html! {
            <ol class="intake-progress">
                { for Step::FORM_STEPS.iter().map(|s| {
                    let class = match s.number() {
                        n if n < current => "done",
                        n if n == current => "current",
                        _ => "upcoming",
                    };
                    html! {
                        <li class={class}>
                            <span class="progress-number">{s.number().to_string()}</span>
                            <span class="progress-title">{s.title()}</span>
                        </li>
                    }
                }) }
            </ol>
        }
    }

    fn label(&self, field: Field) -> Html {
        html! {
            <label>
                {field.label()}
                if field.is_required() {
                    <span class="required">{" *"}</span>
                }
            </label>
        }
    }

    fn error(&self, field: Field) -> Html {
        match self.wizard.errors().get(field) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        }
    }

    fn text_input(&self, ctx: &Context<Self>, field: Field, input_type: &'static str, placeholder: &'static str) -> Html {
        let invalid = self.wizard.errors().get(field).is_some();
        html! {
            <div class="field">
                { self.label(field) }
                <input
                    type={input_type}
                    id={field.id()}
                    class={classes!(invalid.then(|| "invalid"))}
                    placeholder={placeholder}
                    value={self.wizard.draft().get(field).to_string()}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        IntakeMsg::SetField(field, input.value())
                    })}
                />
                { self.error(field) }
            </div>
        }
    }

    fn select(&self, ctx: &Context<Self>, field: Field, prompt: &'static str, options: Vec<(&'static str, &'static str)>) -> Html {
        let invalid = self.wizard.errors().get(field).is_some();
        let current = self.wizard.draft().get(field).to_string();
        html! {
            <div class="field">
                { self.label(field) }
                <select
                    id={field.id()}
                    class={classes!(invalid.then(|| "invalid"))}
                    onchange={ctx.link().callback(move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        IntakeMsg::SetField(field, select.value())
                    })}
                >
                    <option value="" selected={current.is_empty()}>{prompt}</option>
                    { for options.into_iter().map(|(value, label)| html! {
                        <option value={value} selected={current == value}>{label}</option>
                    }) }
                </select>
                { self.error(field) }
            </div>
        }
    }

    fn textarea(&self, ctx: &Context<Self>, field: Field, placeholder: &'static str) -> Html {
        html! {
            <div class="field">
                { self.label(field) }
                <textarea
                    id={field.id()}
                    rows="4"
                    placeholder={placeholder}
                    value={self.wizard.draft().get(field).to_string()}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        IntakeMsg::SetField(field, input.value())
                    })}
                />
                { self.error(field) }
            </div>
        }
    }
}

const INTAKE_CSS: &str = r#"
.intake-page {
    background: #fff;
    padding: 96px 24px;
    min-height: 100vh;
}
.intake-container {
    max-width: 768px;
    margin: 0 auto;
}
.intake-header {
    text-align: center;
}
.intake-header h1, .intake-done h1 {
    font-size: 2rem;
    font-weight: 700;
    color: #111827;
}
.intake-header p, .intake-done p {
    margin-top: 1rem;
    font-size: 1.125rem;
    color: #4b5563;
}
.intake-progress {
    display: flex;
    justify-content: space-between;
    list-style: none;
    padding: 0;
    margin: 3rem 0 2rem;
}
.intake-progress li {
    display: flex;
    align-items: center;
    gap: 8px;
    color: #9ca3af;
}
.intake-progress li.current, .intake-progress li.done {
    color: #2563eb;
}
.progress-number {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 28px;
    height: 28px;
    border-radius: 50%;
    border: 2px solid currentColor;
    font-weight: 700;
    font-size: 0.875rem;
}
.intake-progress li.done .progress-number {
    background: #2563eb;
    color: #fff;
}
.intake-form h2 {
    font-size: 1.125rem;
    color: #111827;
    margin-bottom: 1.5rem;
}
.field-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 24px;
}
.field {
    margin-bottom: 24px;
}
.field label {
    display: block;
    font-size: 0.875rem;
    font-weight: 500;
    color: #111827;
}
.field input, .field select, .field textarea {
    margin-top: 8px;
    display: block;
    width: 100%;
    border: 1px solid #d1d5db;
    border-radius: 6px;
    padding: 8px 12px;
    font-size: 1rem;
    color: #111827;
    box-sizing: border-box;
}
.field .invalid {
    border-color: #dc2626;
}
.field-error {
    margin-top: 4px;
    font-size: 0.875rem;
    color: #dc2626;
}
.required {
    color: #dc2626;
}
.required-note {
    font-size: 0.875rem;
    color: #4b5563;
}
.form-actions {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 24px;
}
.primary-button {
    border: none;
    border-radius: 6px;
    background: #2563eb;
    color: #fff;
    padding: 12px 24px;
    font-size: 1rem;
    font-weight: 600;
    cursor: pointer;
}
.primary-button:hover {
    background: #3b82f6;
}
.secondary-button {
    border: 1px solid #d1d5db;
    border-radius: 6px;
    background: #fff;
    color: #111827;
    padding: 12px 24px;
    font-size: 1rem;
    font-weight: 600;
    cursor: pointer;
}
.link-button {
    border: none;
    background: none;
    color: #2563eb;
    font-size: 1rem;
    font-weight: 600;
    cursor: pointer;
}
.intake-done {
    text-align: center;
}
.done-icon {
    margin: 0 auto;
    display: flex;
    align-items: center;
    justify-content: center;
    width: 64px;
    height: 64px;
    border-radius: 50%;
    background: #dcfce7;
    color: #16a34a;
    font-size: 2rem;
}
.done-actions {
    margin-top: 2.5rem;
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
    justify-content: center;
}
.received-at {
    font-size: 0.875rem !important;
    color: #6b7280 !important;
}
.contact-line {
    margin-top: 2rem;
    font-size: 0.875rem !important;
}
.contact-line a {
    color: #2563eb;
}
.store-error {
    display: flex;
    justify-content: space-between;
    align-items: center;
    background: #fef2f2;
    border: 1px solid #fecaca;
    color: #991b1b;
    border-radius: 8px;
    padding: 12px 16px;
    margin-bottom: 24px;
}
.store-error button {
    background: none;
    border: none;
    color: inherit;
    cursor: pointer;
}
"#;
