use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::contact_form::WhatsAppContactForm;
use crate::components::glowing_orb::GlowingOrb;
use crate::components::image_fallback::ImageWithFallback;
use crate::components::reveal::{Direction, Reveal};
use crate::components::ui::{Badge, BadgeVariant, Card};
use crate::config;
use crate::content::{self, ContactChannel};
use crate::scroll::{self, SectionId};

/// `target`/`rel` for a link: web links open in a new tab.
fn link_target(channel: &ContactChannel) -> (Option<&'static str>, Option<&'static str>) {
    if channel.is_external() {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    }
}

fn scroll_to(section: SectionId) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_section(section);
    })
}

#[function_component(Hero)]
fn hero() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let text_shift = scroll::parallax_offset(scroll_y, 50.0);
    let image_shift = scroll::parallax_offset(scroll_y, 100.0);

    let socials = content::social_links().map(|social| {
        let (target, rel) = link_target(social);
        html! {
            <a key={social.title} href={social.href} target={target} rel={rel} class="social-button" aria-label={social.title}>
                {social.icon.glyph()}
            </a>
        }
    });

    html! {
        <section id={SectionId::Home.id()} class="hero">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        overflow: hidden;
                        padding: 5rem 1.5rem 0;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(135deg, rgba(249, 115, 22, 0.05), transparent, rgba(234, 179, 8, 0.05));
                    }
                    .orb-top-left {
                        top: 5rem;
                        left: 5rem;
                        width: 18rem;
                        height: 18rem;
                        background: linear-gradient(90deg, rgba(249, 115, 22, 0.1), rgba(234, 179, 8, 0.1));
                    }
                    .orb-bottom-right {
                        bottom: 5rem;
                        right: 5rem;
                        width: 24rem;
                        height: 24rem;
                        background: linear-gradient(90deg, rgba(168, 85, 247, 0.1), rgba(236, 72, 153, 0.1));
                    }
                    .hero-grid {
                        position: relative;
                        z-index: 10;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .hero-text > * + * {
                        margin-top: 2rem;
                    }
                    .hero-text {
                        animation: slideFromLeft 0.8s ease-out both;
                    }
                    .hero-image {
                        position: relative;
                        max-width: 32rem;
                        margin: 0 auto;
                        animation: slideFromRight 0.8s ease-out 0.4s both;
                    }
                    @keyframes slideFromLeft {
                        from { opacity: 0; translate: -50px 0; }
                        to { opacity: 1; translate: 0 0; }
                    }
                    @keyframes slideFromRight {
                        from { opacity: 0; translate: 50px 0; }
                        to { opacity: 1; translate: 0 0; }
                    }
                    @keyframes riseIn {
                        from { opacity: 0; translate: 0 30px; }
                        to { opacity: 1; translate: 0 0; }
                    }
                    .rise {
                        animation: riseIn 0.8s ease-out both;
                    }
                    .status-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(34, 197, 94, 0.3);
                        background: linear-gradient(90deg, rgba(34, 197, 94, 0.2), rgba(16, 185, 129, 0.2));
                        color: #4ade80;
                        font-size: 0.875rem;
                    }
                    .hero h1 {
                        font-size: 4.5rem;
                        font-weight: bold;
                        line-height: 1.1;
                        letter-spacing: -0.02em;
                        margin: 0;
                    }
                    .hero h2 {
                        font-size: 2.25rem;
                        font-weight: normal;
                        margin: 1rem 0 0;
                    }
                    .hero-description {
                        font-size: 1.25rem;
                        line-height: 1.7;
                        max-width: 42rem;
                    }
                    .hero-actions {
                        display: flex;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }
                    .hero-stats {
                        display: flex;
                        gap: 2rem;
                        padding-top: 1rem;
                    }
                    .stat {
                        text-align: center;
                    }
                    .stat-value {
                        font-size: 1.5rem;
                        font-weight: bold;
                    }
                    .image-glow {
                        position: absolute;
                        inset: 0;
                        border-radius: 1rem;
                        transform: rotate(6deg);
                        filter: blur(24px);
                        background: linear-gradient(90deg, rgba(249, 115, 22, 0.2), rgba(234, 179, 8, 0.2));
                    }
                    .image-frame {
                        position: relative;
                        padding: 0.5rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(10, 10, 10, 0.8);
                    }
                    .profile-image {
                        width: 100%;
                        height: auto;
                        border-radius: 0.75rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    }
                    .socials {
                        position: absolute;
                        bottom: -1rem;
                        left: -1rem;
                        display: flex;
                        gap: 0.75rem;
                        animation: popIn 0.5s ease-out 1.5s both;
                    }
                    @keyframes popIn {
                        from { opacity: 0; transform: scale(0); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    .social-button {
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(10, 10, 10, 0.8);
                        text-decoration: none;
                        box-shadow: 0 10px 20px rgba(0, 0, 0, 0.3);
                        transition: transform 0.3s ease;
                    }
                    .social-button:hover {
                        transform: translateY(-2px) scale(1.1);
                    }
                    @media (max-width: 1024px) {
                        .hero-grid {
                            grid-template-columns: 1fr;
                        }
                        .hero h1 {
                            font-size: 3rem;
                        }
                        .hero h2 {
                            font-size: 1.5rem;
                        }
                    }
                "#}
            </style>
            <div class="hero-backdrop"></div>
            <GlowingOrb class={classes!("orb-top-left")} />
            <GlowingOrb class={classes!("orb-bottom-right")} delay={2.0} />

            <div class="container hero-grid">
                <div class="hero-text" style={format!("transform: translateY({}px);", text_shift)}>
                    <div class="status-badge rise" style="animation-delay: 0.2s;">
                        <span class="pulse-dot"></span>
                        <span>{"Available for Projects"}</span>
                    </div>

                    <div>
                        <h1 class="rise" style="animation-delay: 0.4s;">
                            {"Hi, I'm "}
                            <span class="gradient-text">{config::OWNER_NAME}</span>
                        </h1>
                        <h2 class="muted rise" style="animation-delay: 0.6s;">{config::OWNER_ROLE}</h2>
                    </div>

                    <p class="hero-description muted rise" style="animation-delay: 0.8s;">
                        {"I'm passionate about building scalable web applications and automating deployments. Currently pursuing BCA while crafting impactful digital solutions with "}
                        <span style="color: #f97316; font-weight: 600;">{"MERN"}</span>{", "}
                        <span style="color: #eab308; font-weight: 600;">{"Next.js"}</span>{", and "}
                        <span style="color: #22c55e; font-weight: 600;">{"DevOps"}</span>{" technologies."}
                    </p>

                    <div class="hero-actions rise" style="animation-delay: 1s;">
                        <button class="btn btn-primary btn-lg" onclick={scroll_to(SectionId::Contact)}>
                            {"Get In Touch →"}
                        </button>
                        <a href={config::asset_url(config::RESUME_PATH)} target="_blank" rel="noopener noreferrer">
                            <button class="btn btn-outline btn-lg">{"⬇ Download CV"}</button>
                        </a>
                    </div>

                    <div class="hero-stats rise" style="animation-delay: 1.2s;">
                        { for content::STATS.iter().map(|stat| html! {
                            <div class="stat" key={stat.label}>
                                <div class="stat-value" style={format!("color: {};", stat.color)}>{stat.value}</div>
                                <div class="muted small">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="hero-image" style={format!("transform: translateY({}px);", image_shift)}>
                    <div class="image-glow"></div>
                    <div class="image-frame">
                        <ImageWithFallback
                            src={config::asset_url(config::PROFILE_IMAGE_PATH)}
                            alt={format!("{} - Full Stack Developer", config::OWNER_NAME)}
                            class={classes!("profile-image")}
                        />
                    </div>
                    <div class="socials">
                        { for socials }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id={SectionId::About.id()} class="section">
            <div class="container">
                <Reveal class={classes!("narrow", "centered")}>
                    <h2 class="section-title gradient-text">{"About Me"}</h2>
                    <div class="about-text muted">
                        { for content::ABOUT.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Skills)]
fn skills() -> Html {
    html! {
        <section id={SectionId::Skills.id()} class="section tinted">
            <div class="container">
                <Reveal>
                    <h2 class="section-title gradient-text">{"Skills & Expertise"}</h2>
                </Reveal>
                <div class="grid grid-2">
                    { for content::SKILLS.iter().enumerate().map(|(i, category)| html! {
                        <Reveal key={category.name} delay_ms={i as u32 * 100}>
                            <Card class={classes!("full-height")}>
                                <h3 class="card-title">{"✨ "}{category.name}</h3>
                                <div class="badge-row">
                                    { for category.skills.iter().map(|skill| html! {
                                        <Badge key={*skill}>{*skill}</Badge>
                                    }) }
                                </div>
                            </Card>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Projects)]
fn projects() -> Html {
    html! {
        <section id={SectionId::Projects.id()} class="section">
            <div class="container">
                <Reveal>
                    <h2 class="section-title gradient-text">{"Featured Projects"}</h2>
                </Reveal>
                <div class="grid grid-3">
                    { for content::PROJECTS.iter().enumerate().map(|(i, project)| html! {
                        <Reveal key={project.title} delay_ms={i as u32 * 100}>
                            <Card class={classes!("full-height", "project-card")}>
                                <div class="project-header">
                                    <Badge variant={BadgeVariant::Filled} style={AttrValue::from(project.theme.gradient())}>
                                        {project.status}
                                    </Badge>
                                    <span class="project-icon">{project.icon.glyph()}</span>
                                </div>
                                <h3 class="card-title project-title">{project.title}</h3>
                                <p class="muted">{project.description}</p>
                                <div class="badge-row">
                                    { for project.tech.iter().map(|tech| html! {
                                        <Badge key={*tech} variant={BadgeVariant::Outline}>{*tech}</Badge>
                                    }) }
                                </div>
                            </Card>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(EducationSection)]
fn education_section() -> Html {
    html! {
        <section id={SectionId::Education.id()} class="section tinted">
            <div class="container">
                <Reveal>
                    <h2 class="section-title gradient-text">{"Education"}</h2>
                </Reveal>
                <div class="narrow stack">
                    { for content::EDUCATION.iter().enumerate().map(|(i, entry)| {
                        let direction = if i % 2 == 0 { Direction::Left } else { Direction::Right };
                        html! {
                            <Reveal key={entry.qualification} direction={direction} delay_ms={i as u32 * 200}>
                                <Card>
                                    <h3 class="card-title">{entry.qualification}</h3>
                                    <p class="muted">{entry.institution}</p>
                                    {
                                        if let Some((label, value)) = entry.expected {
                                            html! {
                                                <div class="grid grid-2">
                                                    <div>
                                                        <p class="muted">{label}</p>
                                                        <p class="strong">{value}</p>
                                                    </div>
                                                    <div>
                                                        <p class="muted">{"Current SGPA"}</p>
                                                        <p class="strong" style={format!("color: {};", entry.score_color)}>{entry.score}</p>
                                                    </div>
                                                </div>
                                            }
                                        } else {
                                            html! {
                                                <p class="strong" style={format!("color: {};", entry.score_color)}>{entry.score}</p>
                                            }
                                        }
                                    }
                                </Card>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section id={SectionId::Contact.id()} class="section">
            <div class="container centered">
                <Reveal>
                    <h2 class="section-title gradient-text">{"Let's Build Something Together 🚀"}</h2>
                    <p class="lead muted">
                        {"Ready to collaborate on your next project? Let's connect and create something amazing together."}
                    </p>
                </Reveal>

                <WhatsAppContactForm />

                <div class="grid grid-4 channels">
                    { for content::CONTACT_CHANNELS.iter().enumerate().map(|(i, channel)| {
                        let (target, rel) = link_target(channel);
                        html! {
                            <Reveal key={channel.title} delay_ms={400 + i as u32 * 100}>
                                <a href={channel.href} target={target} rel={rel} class="channel-link">
                                    <Card class={classes!("channel-card")}>
                                        <div class="channel-icon">{channel.icon.glyph()}</div>
                                        <p class="strong">{channel.title}</p>
                                        <p class="muted small">{channel.subtitle}</p>
                                    </Card>
                                </a>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <p class="muted">
                {format!("© 2025 {}. Built with Rust, Yew & WebAssembly. All rights reserved.", config::OWNER_NAME)}
            </p>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="portfolio">
            <style>
                {r#"
                    .section {
                        padding: 5rem 1.5rem;
                    }
                    .section.tinted {
                        background: rgba(38, 38, 38, 0.2);
                    }
                    .section-title {
                        font-size: 3rem;
                        font-weight: bold;
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .narrow {
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .stack > * + * {
                        margin-top: 2rem;
                    }
                    .about-text {
                        font-size: 1.125rem;
                        line-height: 1.8;
                    }
                    .grid {
                        display: grid;
                        gap: 2rem;
                    }
                    .grid-2 { grid-template-columns: repeat(2, 1fr); }
                    .grid-3 { grid-template-columns: repeat(3, 1fr); }
                    .grid-4 { grid-template-columns: repeat(4, 1fr); gap: 1.5rem; }
                    .full-height {
                        height: 100%;
                    }
                    .badge-row {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                    .project-card {
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .project-card:hover {
                        transform: translateY(-0.5rem);
                    }
                    .project-card:hover .project-title {
                        color: #f97316;
                    }
                    .project-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                        margin-bottom: 0.5rem;
                    }
                    .lead {
                        font-size: 1.25rem;
                        max-width: 42rem;
                        margin: 0 auto 3rem;
                    }
                    .channels {
                        max-width: 56rem;
                        margin: 3rem auto 0;
                    }
                    .channel-link {
                        display: block;
                        color: inherit;
                        text-decoration: none;
                        transition: transform 0.3s ease;
                    }
                    .channel-link:hover {
                        transform: translateY(-5px) scale(1.05);
                    }
                    .channel-icon {
                        font-size: 2rem;
                        color: #f97316;
                        margin-bottom: 1rem;
                    }
                    .footer {
                        padding: 2rem 1.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                        text-align: center;
                    }
                    @media (max-width: 1280px) {
                        .grid-3 { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 1024px) {
                        .grid-2, .grid-3 { grid-template-columns: 1fr; }
                        .grid-4 { grid-template-columns: repeat(2, 1fr); }
                        .section-title { font-size: 2.25rem; }
                    }
                    @media (max-width: 640px) {
                        .grid-4 { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <Hero />
            <About />
            <Skills />
            <Projects />
            <EducationSection />
            <Contact />
            <Footer />
        </div>
    }
}
