use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config::TOAST_DURATION_MS;

/// Holds the toast currently on screen. Every `show` gets a fresh id so the
/// same text shown twice still restarts the dismiss timer.
#[derive(Debug, Default)]
pub struct ToastSlot {
    seq: u32,
    current: Option<String>,
}

impl ToastSlot {
    pub fn show(&mut self, message: impl Into<String>) {
        self.seq = self.seq.wrapping_add(1);
        self.current = Some(message.into());
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<(u32, &str)> {
        self.current.as_deref().map(|m| (self.seq, m))
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub id: u32,
    pub message: String,
    pub on_dismiss: Callback<()>,
    #[prop_or(TOAST_DURATION_MS)]
    pub duration_ms: u32,
}

/// Transient notice in the corner of the screen. Dismisses itself after
/// `duration_ms`; the timer restarts whenever the id or message changes.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let duration = props.duration_ms;
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(duration, move || {
                    on_dismiss.emit(());
                });
                move || drop(timeout)
            },
            (props.id, props.message.clone()),
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast" role="status" aria-live="polite">
            <style>
                {r#"
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        position: fixed;
                        right: 24px;
                        bottom: 24px;
                        display: flex;
                        align-items: center;
                        gap: 12px;
                        max-width: 360px;
                        padding: 14px 18px;
                        background: #111827;
                        color: #fff;
                        border-radius: 8px;
                        box-shadow: 0 10px 25px rgba(0,0,0,0.2);
                        animation: toastIn 0.25s ease-out forwards;
                        z-index: 50;
                    }
                    .toast-close {
                        background: none;
                        border: none;
                        color: #9ca3af;
                        cursor: pointer;
                        font-size: 16px;
                    }
                "#}
            </style>
            <span class="toast-icon">{"✓"}</span>
            <span class="toast-message">{&props.message}</span>
            <button class="toast-close" aria-label="Dismiss" onclick={close}>{"✕"}</button>
        </div>
    }
}
