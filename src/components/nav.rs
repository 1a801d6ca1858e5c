use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::scroll::{self, SectionId};

/// Open/closed state of the burger menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    pub fn close(self) -> Self {
        Self { open: false }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(MenuState::default);
    let is_scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| SectionId::Home);

    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    let scroll_y = scroll::current_scroll_y();
                    is_scrolled.set(scroll::is_scrolled(scroll_y));
                    // Between sections the previous highlight stays
                    if let Some(section) = scroll::active_section(scroll_y, &scroll::section_bounds()) {
                        active.set(section);
                    }
                };
                update();

                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(update);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let go_to = {
        let menu = menu.clone();
        move |section: SectionId| {
            let menu = menu.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                debug!("Navigating to {}", section.id());
                scroll::scroll_to_section(section);
                menu.set(menu.close());
            })
        }
    };

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggle());
        })
    };

    let desktop_items = SectionId::ALL.into_iter().map(|section| {
        let is_active = *active == section;
        html! {
            <button
                key={section.id()}
                class={classes!("nav-link", is_active.then(|| "active"))}
                onclick={go_to(section)}
            >
                {section.label()}
                if is_active {
                    <span class="nav-underline"></span>
                }
            </button>
        }
    });

    let mobile_items = SectionId::ALL.into_iter().map(|section| {
        html! {
            <button
                key={section.id()}
                class={classes!("mobile-link", (*active == section).then(|| "active"))}
                onclick={go_to(section)}
            >
                {section.label()}
            </button>
        }
    });

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        transition: all 0.3s ease;
                        background: transparent;
                        animation: navDrop 0.5s ease-out;
                    }
                    @keyframes navDrop {
                        from { transform: translateY(-100px); }
                        to { transform: translateY(0); }
                    }
                    .top-nav.scrolled {
                        background: rgba(10, 10, 10, 0.8);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.3);
                    }
                    .nav-content {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-weight: bold;
                        font-size: 1.5rem;
                        cursor: pointer;
                        background: none;
                        border: none;
                        transition: transform 0.2s ease;
                    }
                    .nav-logo:hover {
                        transform: scale(1.05);
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        position: relative;
                        padding: 0.5rem 0.75rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #f5f5f5;
                        background: none;
                        border: none;
                        cursor: pointer;
                        transition: color 0.2s ease, transform 0.2s ease;
                    }
                    .nav-link:hover {
                        color: #f97316;
                        transform: scale(1.05);
                    }
                    .nav-link.active {
                        color: #f97316;
                    }
                    .nav-underline {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        height: 2px;
                        background: linear-gradient(90deg, #f97316, #eab308);
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        padding: 0.5rem;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #f5f5f5;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    .burger-menu.open span:nth-child(1) {
                        transform: translateY(7px) rotate(45deg);
                    }
                    .burger-menu.open span:nth-child(2) {
                        opacity: 0;
                    }
                    .burger-menu.open span:nth-child(3) {
                        transform: translateY(-7px) rotate(-45deg);
                    }
                    .mobile-menu {
                        display: none;
                        padding: 1rem 1.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                        background: rgba(10, 10, 10, 0.95);
                    }
                    .mobile-link {
                        display: block;
                        width: 100%;
                        text-align: left;
                        padding: 0.5rem 0.75rem;
                        margin-bottom: 0.5rem;
                        font-size: 0.875rem;
                        color: #f5f5f5;
                        background: none;
                        border: none;
                        border-radius: 0.5rem;
                        cursor: pointer;
                    }
                    .mobile-link:hover {
                        color: #f97316;
                        background: rgba(249, 115, 22, 0.05);
                    }
                    .mobile-link.active {
                        color: #f97316;
                        background: rgba(249, 115, 22, 0.1);
                    }
                    @media (max-width: 1024px) {
                        .nav-links, .nav-cta {
                            display: none;
                        }
                        .burger-menu {
                            display: flex;
                        }
                        .mobile-menu.open {
                            display: block;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <button class="nav-logo gradient-text" onclick={go_to(SectionId::Home)}>
                    {config::OWNER_NAME}
                </button>

                <div class="nav-links">
                    { for desktop_items }
                </div>

                <div class="nav-cta">
                    <button class="btn btn-primary btn-sm" onclick={go_to(SectionId::Contact)}>
                        {"Hire Me"}
                    </button>
                </div>

                <button
                    class={classes!("burger-menu", menu.is_open().then(|| "open"))}
                    aria-label="Toggle menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div class={classes!("mobile-menu", menu.is_open().then(|| "open"))}>
                { for mobile_items }
                <button class="btn btn-primary btn-sm btn-block" onclick={go_to(SectionId::Contact)}>
                    {"Hire Me"}
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggling_twice_returns_to_closed() {
        let menu = MenuState::default();
        assert!(menu.toggle().is_open());
        assert_eq!(menu.toggle().toggle(), menu);
    }

    #[test]
    fn close_is_idempotent() {
        let open = MenuState::default().toggle();
        assert!(!open.close().is_open());
        assert_eq!(open.close().close(), MenuState::default());
    }
}
