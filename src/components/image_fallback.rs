use log::warn;
use yew::prelude::*;

/// Grey placeholder with a broken-image outline.
const ERROR_IMG_SRC: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iODgiIGhlaWdodD0iODgiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyIgc3Ryb2tlPSIjMDAwIiBzdHJva2UtbGluZWpvaW49InJvdW5kIiBvcGFjaXR5PSIuMyIgZmlsbD0ibm9uZSIgc3Ryb2tlLXdpZHRoPSIzLjciPjxyZWN0IHg9IjE2IiB5PSIxNiIgd2lkdGg9IjU2IiBoZWlnaHQ9IjU2IiByeD0iNiIvPjxwYXRoIGQ9Im0xNiA1OCAxNi0xOCAzMiAzMiIvPjxjaXJjbGUgY3g9IjUzIiBjeT0iMzUiIHI9IjciLz48L3N2Zz4KCg==";

#[derive(Properties, PartialEq)]
pub struct ImageWithFallbackProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ImageWithFallback)]
pub fn image_with_fallback(props: &ImageWithFallbackProps) -> Html {
    let failed = use_state_eq(|| false);

    let onerror = {
        let failed = failed.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            warn!("Image failed to load: {}", src);
            failed.set(true);
        })
    };

    if *failed {
        html! {
            <div class={classes!("image-fallback", props.class.clone())}
                 style="display: flex; align-items: center; justify-content: center; background: #1f1f1f;">
                <img src={ERROR_IMG_SRC} alt="Error loading image" data-original-url={props.src.clone()} />
            </div>
        }
    } else {
        html! {
            <img src={props.src.clone()} alt={props.alt.clone()} class={props.class.clone()} onerror={onerror} />
        }
    }
}
