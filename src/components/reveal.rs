use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::scroll;

/// Where a block slides in from.
#[derive(Clone, Copy, PartialEq, Default)]
pub enum Direction {
    #[default]
    Up,
    Left,
    Right,
}

impl Direction {
    fn class(self) -> &'static str {
        match self {
            Direction::Up => "from-below",
            Direction::Left => "from-left",
            Direction::Right => "from-right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub direction: Direction,
    /// Stagger before the block fades in once it is in view.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

fn in_viewport(node: &NodeRef) -> bool {
    node.cast::<Element>()
        .map(|el| scroll::should_reveal(el.get_bounding_client_rect().top(), scroll::viewport_height()))
        .unwrap_or(false)
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_state_eq(|| false);
    let revealed = use_state_eq(|| false);

    // Blocks already on screen at load reveal without a scroll
    {
        let node = node.clone();
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |_| {
                if in_viewport(&node) {
                    in_view.set(true);
                }
                || ()
            },
            (),
        );
    }

    {
        let node = node.clone();
        let in_view = in_view.clone();
        use_event_with_window("scroll", move |_: Event| {
            if !*in_view && in_viewport(&node) {
                in_view.set(true);
            }
        });
    }

    {
        let revealed = revealed.clone();
        let delay = props.delay_ms;
        use_effect_with_deps(
            move |in_view| {
                let timeout = in_view.then(|| Timeout::new(delay, move || revealed.set(true)));
                move || drop(timeout)
            },
            *in_view,
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.direction.class(), (*revealed).then(|| "revealed"), props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}
