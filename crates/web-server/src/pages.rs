use axum::{http::StatusCode, response::Html};
use site::Page;

/// # GET /
pub async fn home() -> Html<String> {
    Html(site::render(Page::Home))
}

/// # GET /mission
pub async fn mission() -> Html<String> {
    Html(site::render(Page::Mission))
}

/// # GET /contact-us
pub async fn contact_us() -> Html<String> {
    Html(site::render(Page::ContactUs))
}

/// # GET /investor-deck
pub async fn investor_deck() -> Html<String> {
    Html(site::render(Page::InvestorDeck))
}

/// Any route that matches nothing else.
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(site::render(Page::NotFound)))
}
