//! # Talking Pills Site
//!
//! The marketing pages, rendered on the server. Forms are plain HTML; the
//! browser script at `/assets/site.js` submits them to the API as JSON and
//! shows the outcome.

#![recursion_limit = "256"]

use leptos::prelude::*;

pub mod components;
pub mod pages;

use components::layout::Layout;
use pages::{ContactUsPage, HomePage, InvestorDeckPage, MissionPage, NotFoundPage};

/// Every page the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Mission,
    ContactUs,
    InvestorDeck,
    NotFound,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Talking Pills | Healthcare online",
            Page::Mission => "Our Mission | Talking Pills",
            Page::ContactUs => "Contact Us | Talking Pills",
            Page::InvestorDeck => "Investor Deck | Talking Pills",
            Page::NotFound => "Page not found | Talking Pills",
        }
    }
}

/// Renders a complete HTML document for `page`.
pub fn render(page: Page) -> String {
    let body = match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::Mission => view! { <MissionPage/> }.into_any(),
        Page::ContactUs => view! { <ContactUsPage/> }.into_any(),
        Page::InvestorDeck => view! { <InvestorDeckPage/> }.into_any(),
        Page::NotFound => view! { <NotFoundPage/> }.into_any(),
    };

    let document = view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta
                    name="description"
                    content="Talking Pills turns complex prescriptions into visual, spoken guidance patients understand."
                />
                <title>{page.title()}</title>
                <link rel="stylesheet" href="/assets/site.css"/>
            </head>
            <body>
                <Layout current=page>{body}</Layout>
                <script src="/assets/site.js"></script>
            </body>
        </html>
    };

    format!("<!DOCTYPE html>{}", document.to_html())
}
