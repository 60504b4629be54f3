use yew::prelude::*;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;

use crate::config;

/// The five states every data-fetching view has to render.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncState<T> {
    Idle,
    Loading,
    Success(T),
    Empty,
    Error(String),
}

impl<T> AsyncState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, AsyncState::Loading)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AsyncState::Idle => "idle",
            AsyncState::Loading => "loading",
            AsyncState::Success(_) => "success",
            AsyncState::Empty => "empty",
            AsyncState::Error(_) => "error",
        }
    }
}

impl<T> AsyncState<Vec<T>> {
    /// A successful fetch with nothing in it renders as `Empty`.
    pub fn from_result(result: Result<Vec<T>, String>) -> Self {
        match result {
            Ok(items) if items.is_empty() => AsyncState::Empty,
            Ok(items) => AsyncState::Success(items),
            Err(e) => AsyncState::Error(e),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoItem {
    pub id: u32,
    pub title: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DemoScenario {
    Success,
    Empty,
    Error,
}

const DEMO_DELAY_MS: u32 = 1_500;

pub fn simulate(scenario: DemoScenario) -> Result<Vec<DemoItem>, String> {
    match scenario {
        DemoScenario::Success => Ok(vec![
            DemoItem { id: 1, title: "First item" },
            DemoItem { id: 2, title: "Second item" },
            DemoItem { id: 3, title: "Third item" },
        ]),
        DemoScenario::Empty => Ok(Vec::new()),
        DemoScenario::Error => Err("Network request failed".to_string()),
    }
}

#[function_component(StateDemo)]
pub fn state_demo() -> Html {
    let state = use_state(|| AsyncState::<Vec<DemoItem>>::Idle);

    let fetch = {
        let state = state.clone();
        Callback::from(move |scenario: DemoScenario| {
            state.set(AsyncState::Loading);
            let state = state.clone();
            spawn_local(async move {
                TimeoutFuture::new(DEMO_DELAY_MS).await;
                state.set(AsyncState::from_result(simulate(scenario)));
            });
        })
    };

    let reset = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(AsyncState::Idle))
    };

    let button = |label: &'static str, scenario: DemoScenario| {
        let fetch = fetch.clone();
        html! {
            <button
                class="demo-button"
                disabled={state.is_loading()}
                onclick={Callback::from(move |_: MouseEvent| fetch.emit(scenario))}
            >
                {label}
            </button>
        }
    };

    let body = match &*state {
        AsyncState::Idle => html! {
            <p class="state-hint">{"Click a button above to fetch data"}</p>
        },
        AsyncState::Loading => html! {
            <div class="state-loading">
                <span class="loading-spinner" aria-hidden="true"></span>
                <p>{"Fetching data from the server"}</p>
            </div>
        },
        AsyncState::Success(items) => html! {
            <div>
                <p class="state-hint">{format!("Loaded {} items", items.len())}</p>
                <ul class="state-items">
                    { for items.iter().map(|item| html! { <li key={item.id}>{item.title}</li> }) }
                </ul>
            </div>
        },
        AsyncState::Empty => html! {
            <div class="state-empty">
                <h4>{"No items found"}</h4>
                <p>{"Try a different search or create a new item"}</p>
            </div>
        },
        AsyncState::Error(message) => {
            let retry = fetch.clone();
            html! {
                <div class="state-error">
                    <h4>{"Something went wrong"}</h4>
                    <p>{message}</p>
                    <button class="demo-button" onclick={Callback::from(move |_: MouseEvent| retry.emit(DemoScenario::Success))}>
                        {"Try again"}
                    </button>
                </div>
            }
        }
    };

    html! {
        <div class="state-demo">
            <style>
                {r#"
                    .state-demo { border: 1px solid #e5e7eb; border-radius: 12px; padding: 24px; }
                    .state-controls { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 16px; }
                    .demo-button { padding: 8px 14px; border-radius: 6px; border: 1px solid #d1d5db; background: #fff; cursor: pointer; }
                    .demo-button:disabled { opacity: 0.5; cursor: not-allowed; }
                    .state-panel { min-height: 160px; display: flex; align-items: center; justify-content: center; text-align: center; }
                    .state-error h4 { color: #b91c1c; }
                    .loading-spinner {
                        display: inline-block; width: 24px; height: 24px;
                        border: 3px solid #dbeafe; border-top-color: #2563eb; border-radius: 50%;
                        animation: spin 1s linear infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                "#}
            </style>
            <p class="state-hint">{"Click a button to see how each state renders."}</p>
            <div class="state-controls">
                { button("Load Success", DemoScenario::Success) }
                { button("Load Empty", DemoScenario::Empty) }
                { button("Load Error", DemoScenario::Error) }
                <button class="demo-button" disabled={state.is_loading()} onclick={reset}>{"Reset"}</button>
            </div>
            <div class="state-panel">{ body }</div>
            <p class="state-current"><code>{format!("Current state: {}", state.label())}</code></p>
        </div>
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthInfo {
    pub ok: bool,
    pub timestamp: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// Small status line fed by `GET /api/health`.
#[function_component(HealthStatus)]
pub fn health_status() -> Html {
    let state = use_state(|| AsyncState::<HealthInfo>::Idle);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                state.set(AsyncState::Loading);
                spawn_local(async move {
                    let result = match Request::get(&format!("{}/api/health", config::get_backend_url()))
                        .send()
                        .await
                    {
                        Ok(response) if response.ok() => match response.json::<HealthInfo>().await {
                            Ok(info) => AsyncState::Success(info),
                            Err(e) => AsyncState::Error(format!("Failed to parse response: {}", e)),
                        },
                        Ok(response) => AsyncState::Error(format!("Status {}", response.status())),
                        Err(e) => AsyncState::Error(format!("Request failed: {}", e)),
                    };
                    if let AsyncState::Error(ref e) = result {
                        log::warn!("Health check failed: {}", e);
                    }
                    state.set(result);
                });
                || ()
            },
            (),
        );
    }

    let (class, text) = match &*state {
        AsyncState::Idle | AsyncState::Loading => ("health-pending", "Checking status…".to_string()),
        AsyncState::Success(info) if info.ok => (
            "health-ok",
            format!(
                "All systems operational{}",
                info.version.as_deref().map(|v| format!(" · v{}", v)).unwrap_or_default()
            ),
        ),
        AsyncState::Success(_) | AsyncState::Empty => ("health-down", "Service degraded".to_string()),
        AsyncState::Error(_) => ("health-down", "Status unavailable".to_string()),
    };
    let checked_at = match &*state {
        AsyncState::Success(info) => format!("Checked at {}", info.timestamp),
        _ => String::new(),
    };

    html! {
        <span class={classes!("health-status", class)} title={checked_at}>
            <span class="health-dot"></span>
            {text}
        </span>
    }
}
