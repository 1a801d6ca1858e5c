use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GlowingOrbProps {
    #[prop_or_default]
    pub class: Classes,
    /// Seconds before the pulse starts.
    #[prop_or_default]
    pub delay: f64,
}

#[function_component(GlowingOrb)]
pub fn glowing_orb(props: &GlowingOrbProps) -> Html {
    html! {
        <>
            <style>
                {r#"
                    .glowing-orb {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(24px);
                        opacity: 0.3;
                        pointer-events: none;
                        animation: orbPulse 6s ease-in-out infinite;
                    }
                    @keyframes orbPulse {
                        0% { transform: scale(1); opacity: 0.3; }
                        50% { transform: scale(1.1); opacity: 0.5; }
                        100% { transform: scale(1); opacity: 0.3; }
                    }
                "#}
            </style>
            <div
                class={classes!("glowing-orb", props.class.clone())}
                style={format!("animation-delay: {}s;", props.delay)}
            />
        </>
    }
}
