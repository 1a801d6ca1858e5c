use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::scroll;

#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_event_with_window("scroll", move |_: Event| {
            progress.set(scroll::scroll_progress(
                scroll::current_scroll_y(),
                scroll::document_scroll_height(),
                scroll::viewport_height(),
            ));
        });
    }

    html! {
        <div
            class="scroll-progress"
            style={format!(
                "position: fixed; top: 0; left: 0; right: 0; height: 4px; z-index: 60; \
                 transform-origin: left; transform: scaleX({}); \
                 background: linear-gradient(90deg, #f97316, #eab308);",
                *progress
            )}
        />
    }
}
