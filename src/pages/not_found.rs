use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1.5rem; text-align: center; padding: 2rem;">
            <h1 class="gradient-text" style="font-size: 4rem; margin: 0;">{"404"}</h1>
            <p class="muted">{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Back to the portfolio"}
            </Link<Route>>
        </div>
    }
}
