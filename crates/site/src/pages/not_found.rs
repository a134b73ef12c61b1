use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="narrow">
            <div class="container container-narrow section-heading">
                <h1>"404 Page Not Found"</h1>
                <p class="lead">"The page you are looking for does not exist."</p>
                <a href="/" class="button">"Back to home"</a>
            </div>
        </section>
    }
}
