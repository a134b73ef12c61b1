use leptos::prelude::*;

#[component]
pub fn MissionPage() -> impl IntoView {
    view! {
        <section class="mission">
            <div class="container split-grid">
                <div class="mission-copy">
                    <h1>"Our Mission"</h1>
                    <p class="mission-lead">"To eliminate medication confusion on a global scale."</p>
                    <p>
                        "We transform complex prescriptions into AI-powered, 3D visual experiences that patients actually understand. "
                        "By removing language and literacy barriers, we ensure no one has to guess how to take their medicine safely. "
                        "We are building the universal understanding layer for healthcare, restoring dignity to patients and peace of mind to caregivers."
                    </p>
                </div>
                <div class="video-card" aria-hidden="true">
                    <span class="play">"♥"</span>
                    <h3>"Understanding, not guessing"</h3>
                </div>
            </div>
        </section>
    }
}
