use log::{debug, info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::ui::Card;
use crate::contact::{ContactField, ContactForm};

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        warn!("No window to open WhatsApp link in");
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        warn!("Failed to open WhatsApp link: {:?}", e);
    }
}

#[function_component(WhatsAppContactForm)]
pub fn whatsapp_contact_form() -> Html {
    let form = use_state(ContactForm::default);

    let on_field = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .or_else(|| e.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value()))
                .unwrap_or_default();
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.submit() {
                Ok(link) => {
                    info!("Opening WhatsApp chat");
                    open_in_new_tab(&link);
                    form.set(next);
                }
                Err(err) => debug!("Contact form not sent: {}", err),
            }
        })
    };

    html! {
        <Reveal delay_ms={200} class={classes!("contact-form-wrapper")}>
            <style>
                {r#"
                    .contact-form-wrapper {
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .contact-card {
                        border: 2px solid rgba(34, 197, 94, 0.25);
                        transition: border-color 0.3s ease, box-shadow 0.3s ease;
                    }
                    .contact-card:hover {
                        border-color: rgba(34, 197, 94, 0.45);
                    }
                    .contact-header {
                        text-align: center;
                        margin-bottom: 1.5rem;
                    }
                    .contact-icon {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2rem;
                        background: linear-gradient(90deg, #22c55e, #10b981);
                    }
                    .contact-title {
                        font-size: 1.5rem;
                        font-weight: 600;
                        background: linear-gradient(90deg, #22c55e, #10b981);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .form-field {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        margin-bottom: 1.5rem;
                        text-align: left;
                    }
                    .form-field input, .form-field textarea {
                        background: #1a1a1a;
                        color: #f5f5f5;
                        border: 2px solid transparent;
                        border-radius: 0.5rem;
                        padding: 0.75rem;
                        font: inherit;
                        transition: border-color 0.2s ease;
                    }
                    .form-field input:focus, .form-field textarea:focus {
                        outline: none;
                        border-color: rgba(249, 115, 22, 0.5);
                    }
                    .form-field textarea {
                        resize: none;
                    }
                    .send-button {
                        width: 100%;
                        padding: 1.25rem;
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #fff;
                        border: none;
                        border-radius: 0.5rem;
                        cursor: pointer;
                        background: linear-gradient(90deg, #22c55e, #10b981);
                        transition: transform 0.2s ease, box-shadow 0.3s ease;
                    }
                    .send-button:hover {
                        transform: scale(1.02);
                        box-shadow: 0 12px 24px rgba(16, 185, 129, 0.25);
                    }
                    .send-button:active {
                        transform: scale(0.98);
                    }
                    .response-note {
                        margin-top: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        color: #a3a3a3;
                    }
                    @media (max-width: 768px) {
                        .form-row {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <Card class={classes!("contact-card")}>
                <div class="contact-header">
                    <div class="contact-icon">{"💬"}</div>
                    <h3 class="contact-title">{"Send Message via WhatsApp"}</h3>
                    <p class="muted">
                        {"Fill out the form below and click send to start a WhatsApp conversation with me instantly!"}
                    </p>
                </div>
                <form onsubmit={onsubmit}>
                    <div class="form-row">
                        <div class="form-field">
                            <label for="name">{"👤 Name *"}</label>
                            <input
                                id="name"
                                name="name"
                                placeholder="Your full name"
                                required={true}
                                value={form.name.clone()}
                                oninput={on_field(ContactField::Name)}
                            />
                        </div>
                        <div class="form-field">
                            <label for="email">{"@ Email (Optional)"}</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                placeholder="your.email@example.com"
                                value={form.email.clone()}
                                oninput={on_field(ContactField::Email)}
                            />
                        </div>
                    </div>
                    <div class="form-field">
                        <label for="message">{"💬 Message *"}</label>
                        <textarea
                            id="message"
                            name="message"
                            rows="5"
                            placeholder="Tell me about your project, requirements, or just say hello!"
                            required={true}
                            value={form.message.clone()}
                            oninput={on_field(ContactField::Message)}
                        />
                    </div>
                    <button type="submit" class="send-button">
                        {"➤ Send via WhatsApp"}
                    </button>
                    <div class="response-note">
                        <span class="pulse-dot"></span>
                        <span>{"Usually responds within 2-4 hours"}</span>
                    </div>
                </form>
            </Card>
        </Reveal>
    }
}
