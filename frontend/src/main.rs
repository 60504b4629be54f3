use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use chrono::Datelike;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod intake {
    pub mod model;
    pub mod validation;
    pub mod store;
    pub mod export;
    pub mod wizard;
    #[cfg(test)]
    pub mod test_support;
}
mod components {
    pub mod notification;
    pub mod async_state;
}
mod pages {
    pub mod home;
    pub mod pricing;
    pub mod demo;
    pub mod faq;
    pub mod privacy;
    pub mod intake;
}

use pages::{
    home::Home,
    pricing::Pricing,
    demo::Demo,
    faq::Faq,
    privacy::PrivacyPolicy,
    intake::IntakePage,
};
use components::async_state::HealthStatus;
use config::SITE;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/pricing")]
    Pricing,
    #[at("/demo")]
    Demo,
    #[at("/faq")]
    Faq,
    #[at("/privacy")]
    Privacy,
    #[at("/intake")]
    Intake,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::Demo => {
            info!("Rendering Demo page");
            html! { <Demo /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Intake => {
            info!("Rendering Intake page");
            html! { <IntakePage /> }
        },
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="nav-cta">{"Back to home"}</Link<Route>>
        </div>
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = window.as_ref().and_then(|w| w.document()).map(|document| {
                Closure::wrap(Box::new(move || {
                    let scroll_top = document
                        .document_element()
                        .map(|el| el.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > 20);
                }) as Box<dyn FnMut()>)
            });

            if let (Some(window), Some(callback)) = (&window, &scroll_callback) {
                if window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("Could not attach scroll listener");
                }
            }

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {SITE.site_name}
                </Link<Route>>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for SITE.navigation.iter().map(|(label, route)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route.clone()} classes="nav-link">
                                {*label}
                            </Link<Route>>
                        </div>
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Intake} classes="nav-cta">
                            {"Request Setup"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}


#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <h3>{SITE.site_name}</h3>
                    <p>{SITE.description}</p>
                </div>
                <div class="footer-links">
                    { for SITE.navigation.iter().map(|(label, route)| html! {
                        <Link<Route> to={route.clone()}>{*label}</Link<Route>>
                    }) }
                    <Link<Route> to={Route::Privacy}>{"Privacy"}</Link<Route>>
                    <a href={format!("mailto:{}", SITE.contact_email)}>{"Contact"}</a>
                </div>
                <div class="footer-social">
                    <a href={SITE.social.twitter} target="_blank" rel="noopener noreferrer">{"Twitter"}</a>
                    <a href={SITE.social.linkedin} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                    <a href={SITE.social.github} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                </div>
            </div>
            <div class="footer-bottom">
                <span>{format!("© {} {}. All rights reserved.", year, SITE.site_name)}</span>
                <HealthStatus />
            </div>
        </footer>
    }
}


const LAYOUT_CSS: &str = r#"
    * { box-sizing: border-box; }
    body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; background: #fff; }
    h1, h2, h3, h4, p { margin: 0; }
    .top-nav {
        position: fixed; top: 0; left: 0; right: 0; z-index: 40;
        background: rgba(255,255,255,0.9); backdrop-filter: blur(8px);
        transition: box-shadow 0.2s ease;
    }
    .top-nav.scrolled { box-shadow: 0 1px 8px rgba(0,0,0,0.08); }
    .nav-content { max-width: 1200px; margin: 0 auto; padding: 16px 24px; display: flex; align-items: center; justify-content: space-between; }
    .nav-logo { font-weight: 700; font-size: 1.25rem; color: #111827; text-decoration: none; }
    .nav-right { display: flex; align-items: center; gap: 24px; }
    .nav-link { color: #374151; text-decoration: none; font-weight: 500; }
    .nav-link:hover { color: #2563eb; }
    .nav-cta { background: #2563eb; color: #fff; padding: 8px 16px; border-radius: 6px; text-decoration: none; font-weight: 600; }
    .burger-menu { display: none; flex-direction: column; gap: 4px; background: none; border: none; cursor: pointer; }
    .burger-menu span { width: 24px; height: 2px; background: #111827; }
    .site-footer { background: #111827; color: #d1d5db; padding: 48px 24px 24px; }
    .footer-content { max-width: 1200px; margin: 0 auto; display: flex; flex-wrap: wrap; gap: 48px; justify-content: space-between; }
    .footer-brand { max-width: 360px; }
    .footer-brand h3 { color: #fff; margin-bottom: 0.75rem; }
    .footer-links, .footer-social { display: flex; flex-direction: column; gap: 8px; }
    .site-footer a { color: #d1d5db; text-decoration: none; }
    .site-footer a:hover { color: #fff; }
    .footer-bottom {
        max-width: 1200px; margin: 32px auto 0; padding-top: 16px; border-top: 1px solid #374151;
        display: flex; flex-wrap: wrap; gap: 12px; justify-content: space-between; font-size: 0.875rem;
    }
    .health-status { display: inline-flex; align-items: center; gap: 6px; }
    .health-dot { width: 8px; height: 8px; border-radius: 50%; background: #9ca3af; }
    .health-ok .health-dot { background: #22c55e; }
    .health-down .health-dot { background: #ef4444; }
    .not-found { min-height: 70vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 16px; }
    .not-found h1 { font-size: 4rem; color: #2563eb; }
    @media (max-width: 768px) {
        .burger-menu { display: flex; }
        .nav-right { display: none; }
        .nav-right.mobile-menu-open {
            display: flex; flex-direction: column; align-items: flex-start;
            position: absolute; top: 100%; left: 0; right: 0; padding: 16px 24px; background: #fff;
        }
    }
"#;

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{LAYOUT_CSS}</style>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}


fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
