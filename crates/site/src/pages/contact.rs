use crate::components::forms::DemoRequestForm;
use leptos::prelude::*;

#[component]
pub fn ContactUsPage() -> impl IntoView {
    view! {
        <section class="split">
            <div class="container split-grid">
                <div class="split-copy">
                    <h1>"Contact Us"</h1>
                    <p class="lead">
                        "Tell us about your organization and we will set up a walkthrough of Talking Pills for your team."
                    </p>
                </div>
                <DemoRequestForm/>
            </div>
        </section>
    }
}
