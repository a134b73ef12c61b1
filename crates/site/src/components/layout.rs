use crate::Page;
use leptos::prelude::*;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/mission", "Mission"),
    ("/contact-us", "Contact Us"),
];

/// Header, footer and the toast region shared by every page.
#[component]
pub fn Layout(current: Page, children: Children) -> impl IntoView {
    let investor_class = if current == Page::InvestorDeck {
        "button button-secondary"
    } else {
        "button"
    };

    view! {
        <div class="site">
            <header class="site-header">
                <div class="container header-inner">
                    <a href="/" class="brand">
                        <span class="brand-mark" aria-hidden="true">"♥"</span>
                        <span class="brand-name">"TalkingPills"</span>
                    </a>
                    <nav class="site-nav">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| view! { <a href=*href class="nav-link">{*label}</a> })
                            .collect_view()}
                        <a href="/investor-deck" class=investor_class>"Investor Deck"</a>
                    </nav>
                </div>
            </header>
            <main class="site-main">{children()}</main>
            <Footer/>
            <div id="toast" class="toast" role="status" aria-live="polite" hidden=true></div>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer" id="contact">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <span class="brand-name">"TalkingPills"</span>
                    <p class="muted">
                        "Revolutionizing healthcare adherence through intelligent, patient-centric technology."
                    </p>
                </div>
                <div>
                    <h4>"Company"</h4>
                    <ul>
                        <li><a href="/mission">"Mission"</a></li>
                        <li><a href="/contact-us">"Contact Us"</a></li>
                        <li><a href="/investor-deck">"Investors"</a></li>
                    </ul>
                </div>
                <div>
                    <h4>"Legal"</h4>
                    <ul>
                        <li>"Privacy Policy"</li>
                        <li>"Terms of Service"</li>
                    </ul>
                </div>
                <div>
                    <h4>"Contact"</h4>
                    <p>"hello@talkingpills.health"</p>
                    <p>"+1 (555) 123-4567"</p>
                    <p>"San Francisco, CA"</p>
                </div>
            </div>
            <div class="container footer-legal">"© Talking Pills Inc. All rights reserved."</div>
        </footer>
    }
}
