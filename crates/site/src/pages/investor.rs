use crate::components::forms::InvestorRequestForm;
use leptos::prelude::*;

#[component]
pub fn InvestorDeckPage() -> impl IntoView {
    view! {
        <section class="narrow">
            <div class="container container-narrow">
                <div class="section-heading">
                    <h1>"Investor Deck"</h1>
                    <p class="lead">
                        "Request access to our fundraising materials. We review every request personally."
                    </p>
                </div>
                <InvestorRequestForm/>
            </div>
        </section>
    }
}
