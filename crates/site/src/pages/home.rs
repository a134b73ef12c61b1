use crate::components::forms::{DemoRequestForm, EarlyAccessForm};
use leptos::prelude::*;

const FEATURES: &[(&str, &str)] = &[
    ("Smart Adherence", "AI-driven reminders that patients actually listen to."),
    ("Clinical Workflow", "Seamless integration with your existing health systems."),
    ("Patient Engagement", "Personalized video content for every medication."),
];

const DEMO_AGENDA: &[&str] = &[
    "Full walkthrough of the provider dashboard",
    "Custom implementation strategy session",
    "Pricing and ROI analysis for your scale",
];

/// The landing page: hero with the waitlist form, mission, demo request.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <HeroSection/>
        <MissionSection/>
        <DemoSection/>
    }
}

// -- Hero -------------------------------------------------------------------

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-grid">
                <div class="hero-copy">
                    <span class="pill">"Join the revolution"</span>
                    <h1>
                        "Save time."
                        <br/>
                        <span class="accent">"Healthcare online."</span>
                    </h1>
                    <p class="lead">
                        "We are building the future of patient adherence and communication. "
                        "Talking Pills helps organizations scale care with intelligent, personalized video interactions."
                    </p>
                    <EarlyAccessForm/>
                </div>
                <div class="hero-visual">
                    <div class="video-card">
                        <span class="play" aria-hidden="true">"▶"</span>
                        <h3>"Talking Pills Demo"</h3>
                        <p class="muted">"Watch how it works"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

// -- Mission ----------------------------------------------------------------

#[component]
fn MissionSection() -> impl IntoView {
    view! {
        <section id="mission" class="band">
            <div class="container">
                <div class="section-heading">
                    <h2>"Our Mission"</h2>
                    <p class="lead">
                        "We exist to simplify the complex world of medication management. "
                        "By combining human empathy with scalable technology, we ensure no patient is left confused about their health."
                    </p>
                </div>
                <div class="card-grid">
                    {FEATURES
                        .iter()
                        .map(|(title, desc)| {
                            view! {
                                <article class="card">
                                    <h3>{*title}</h3>
                                    <p class="muted">{*desc}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

// -- Demo -------------------------------------------------------------------

#[component]
fn DemoSection() -> impl IntoView {
    view! {
        <section id="contact-us" class="split">
            <div class="container split-grid">
                <div class="split-copy">
                    <h2>"Experience the platform"</h2>
                    <p class="lead">
                        "See how Talking Pills can transform your organization's patient outreach. "
                        "Schedule a personalized demo with our product team."
                    </p>
                    <ul class="checklist">
                        {DEMO_AGENDA.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                    </ul>
                </div>
                <DemoRequestForm/>
            </div>
        </section>
    }
}
