use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod content;
mod scroll;
mod components {
    pub mod contact_form;
    pub mod glowing_orb;
    pub mod image_fallback;
    pub mod nav;
    pub mod reveal;
    pub mod scroll_progress;
    pub mod ui;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::{nav::Nav, scroll_progress::ScrollProgress};
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! {
                <>
                    <Nav />
                    <ScrollProgress />
                    <Home />
                </>
            }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

const BASE_CSS: &str = r#"
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        background: #0a0a0a;
        color: #f5f5f5;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        overflow-x: hidden;
    }
    .container {
        max-width: 1280px;
        margin: 0 auto;
    }
    .centered {
        text-align: center;
    }
    .muted {
        color: #a3a3a3;
    }
    .small {
        font-size: 0.875rem;
    }
    .strong {
        font-weight: 600;
    }
    .gradient-text {
        background: linear-gradient(90deg, #f97316, #eab308);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .pulse-dot {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 9999px;
        background: #22c55e;
        animation: pulse 2s ease-in-out infinite;
    }
    @keyframes pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.5; }
    }
    .btn {
        border-radius: 0.5rem;
        font-weight: 600;
        cursor: pointer;
        text-decoration: none;
        display: inline-block;
        transition: all 0.3s ease;
    }
    .btn-primary {
        color: #000;
        border: none;
        background: linear-gradient(90deg, #f97316, #eab308);
    }
    .btn-primary:hover {
        background: linear-gradient(90deg, #ea580c, #ca8a04);
        box-shadow: 0 12px 24px rgba(249, 115, 22, 0.25);
    }
    .btn-outline {
        color: #f5f5f5;
        background: transparent;
        border: 2px solid rgba(255, 255, 255, 0.2);
    }
    .btn-outline:hover {
        background: rgba(249, 115, 22, 0.1);
    }
    .btn-sm { padding: 0.5rem 1rem; font-size: 0.875rem; }
    .btn-lg { padding: 1.25rem 2rem; font-size: 1.125rem; }
    .btn-block { width: 100%; }
    .card {
        background: #141414;
        border: 1px solid rgba(255, 255, 255, 0.08);
        border-radius: 0.75rem;
        padding: 1.5rem;
        text-align: left;
        transition: box-shadow 0.3s ease;
    }
    .card:hover {
        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.4);
    }
    .card-title {
        font-size: 1.25rem;
        margin: 0 0 0.75rem;
        transition: color 0.3s ease;
    }
    .badge {
        display: inline-block;
        padding: 0.2rem 0.6rem;
        border-radius: 9999px;
        font-size: 0.75rem;
        font-weight: 500;
        transition: background 0.2s ease;
    }
    .badge-secondary {
        background: #262626;
    }
    .badge-secondary:hover {
        background: rgba(249, 115, 22, 0.2);
    }
    .badge-outline {
        border: 1px solid rgba(255, 255, 255, 0.2);
    }
    .badge-filled {
        color: #fff;
    }
    .reveal {
        opacity: 0;
        transition: opacity 0.8s ease, transform 0.8s ease;
    }
    .reveal.from-below { transform: translateY(50px); }
    .reveal.from-left { transform: translateX(-50px); }
    .reveal.from-right { transform: translateX(50px); }
    .reveal.revealed {
        opacity: 1;
        transform: none;
    }
"#;

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{BASE_CSS}</style>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
