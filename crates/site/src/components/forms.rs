//! The three submission forms.
//!
//! Each form carries its API route in `data-endpoint`; `site.js` posts the
//! fields as JSON and swaps in the `.form-success` panel on success.

use core_types::{CHECK_SIZES, INVESTOR_TYPES, ORG_TYPES, STAGE_FOCUS};
use leptos::prelude::*;

fn options(values: &'static [&'static str], placeholder: &'static str) -> impl IntoView {
    view! {
        <option value="" selected=true disabled=true>{placeholder}</option>
        {values
            .iter()
            .map(|value| view! { <option value=*value>{*value}</option> })
            .collect_view()}
    }
}

/// The single-field waitlist form in the landing hero.
#[component]
pub fn EarlyAccessForm() -> impl IntoView {
    view! {
        <div class="form-card form-inline" data-form="early-access">
            <form class="inline-form" data-endpoint="/api/early-access">
                <input
                    type="email"
                    name="email"
                    required=true
                    autocomplete="email"
                    placeholder="Enter your email"
                />
                <button type="submit" class="button">"Join Early Access"</button>
            </form>
            <p class="form-success" hidden=true>"Thanks for joining!"</p>
        </div>
    }
}

/// Organization and contact details for a product walkthrough.
#[component]
pub fn DemoRequestForm() -> impl IntoView {
    view! {
        <div class="form-card" data-form="demo-request">
            <form class="stacked-form" data-endpoint="/api/demo-request">
                <h3>"Request a Demo"</h3>
                <label class="field">
                    <span>"Organization Name"</span>
                    <input type="text" name="orgName" required=true placeholder="Acme Health"/>
                </label>
                <div class="field-row">
                    <label class="field">
                        <span>"Full Name"</span>
                        <input type="text" name="fullName" required=true placeholder="John Doe"/>
                    </label>
                    <label class="field">
                        <span>"Role / Title"</span>
                        <input type="text" name="role" required=true placeholder="Clinical Director"/>
                    </label>
                </div>
                <div class="field-row">
                    <label class="field">
                        <span>"Work Email"</span>
                        <input
                            type="email"
                            name="workEmail"
                            required=true
                            autocomplete="email"
                            placeholder="john@company.com"
                        />
                    </label>
                    <label class="field">
                        <span>"Phone Number"</span>
                        <input
                            type="tel"
                            name="phone"
                            required=true
                            autocomplete="tel"
                            placeholder="+1 (555) 000-0000"
                        />
                    </label>
                </div>
                <label class="field">
                    <span>"Organization Type"</span>
                    <select name="orgType" required=true>{options(ORG_TYPES, "Select type")}</select>
                </label>
                <button type="submit" class="button button-block">"Schedule Demo"</button>
            </form>
            <div class="form-success" hidden=true>
                <h3>"Request Received!"</h3>
                <p>"We will reach out to your team shortly to schedule your demo."</p>
            </div>
        </div>
    }
}

/// Contact details plus an optional investment profile.
#[component]
pub fn InvestorRequestForm() -> impl IntoView {
    view! {
        <div class="form-card" data-form="investor-request">
            <form class="stacked-form" data-endpoint="/api/investor-request">
                <h3 class="form-section">"Contact Details"</h3>
                <div class="field-row">
                    <label class="field">
                        <span>"First Name"</span>
                        <input type="text" name="firstName" required=true placeholder="Jane"/>
                    </label>
                    <label class="field">
                        <span>"Last Name"</span>
                        <input type="text" name="lastName" required=true placeholder="Smith"/>
                    </label>
                </div>
                <label class="field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        name="email"
                        required=true
                        autocomplete="email"
                        placeholder="jane@venture.com"
                    />
                </label>

                <h3 class="form-section">"Firm Details"</h3>
                <div class="field-row">
                    <label class="field">
                        <span>"Firm Name"</span>
                        <input type="text" name="firmName" required=true placeholder="Acme Ventures"/>
                    </label>
                    <label class="field">
                        <span>"Role"</span>
                        <input type="text" name="role" required=true placeholder="Partner"/>
                    </label>
                </div>

                <h3 class="form-section">"Investment Profile (Optional)"</h3>
                <fieldset class="field checkbox-grid">
                    <legend>"Investor Type"</legend>
                    {INVESTOR_TYPES
                        .iter()
                        .map(|kind| {
                            view! {
                                <label class="check">
                                    <input type="checkbox" name="investorTypes" value=*kind/>
                                    <span>{*kind}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </fieldset>
                <div class="field-row">
                    <label class="field">
                        <span>"Typical Check Size"</span>
                        <select name="checkSize">{options(CHECK_SIZES, "Select range")}</select>
                    </label>
                    <label class="field">
                        <span>"Stage Focus"</span>
                        <select name="stageFocus">{options(STAGE_FOCUS, "Select stage")}</select>
                    </label>
                </div>
                <button type="submit" class="button button-block">"Request Access"</button>
            </form>
            <div class="form-success" hidden=true>
                <h3>"Deck Requested"</h3>
                <p>"Thank you for your interest. We will review your request."</p>
            </div>
        </div>
    }
}
