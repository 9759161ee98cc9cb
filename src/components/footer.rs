//! Footer Component
//!
//! Doubles as the contact section: company links, contact details, legal.

use leptos::prelude::*;
use leptos_reveal::scroll_to;
use site_core::navigation::Section;

const COMPANY_LINKS: [(&str, Section); 4] = [
    ("About Us", Section::About),
    ("Our Services", Section::Services),
    ("Portfolio", Section::Portfolio),
    ("News & Insights", Section::News),
];

const SERVICE_LINKS: [&str; 4] = [
    "Business Consulting",
    "Financial Advisory",
    "Risk Management",
    "Digital Transformation",
];

const CONTACT_INFO: [(&str, &str); 3] = [
    ("+1 (555) 123-4567", "tel:+15551234567"),
    ("contact@procorp.com", "mailto:contact@procorp.com"),
    ("123 Business Ave, Suite 100\nNew York, NY 10001", "#"),
];

const SOCIAL_LINKS: [&str; 3] = ["LinkedIn", "Twitter", "Facebook"];

const LEGAL_LINKS: [&str; 4] = ["Privacy Policy", "Terms of Service", "Cookie Policy", "Accessibility"];

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer id="contact" class="site-footer">
            <div class="section-padding">
                <div class="container-custom footer-grid">
                    <div>
                        <h3 class="footer-brand">"ProCorp"</h3>
                        <p>
                            "Professional excellence delivered daily. We provide comprehensive \
                             business solutions with a commitment to quality and innovation."
                        </p>
                        <div class="social-links">
                            {SOCIAL_LINKS
                                .into_iter()
                                .map(|label| view! { <a href="#" aria-label=label>{label}</a> })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h4>"Company"</h4>
                        <ul>
                            {COMPANY_LINKS
                                .into_iter()
                                .map(|(label, section)| {
                                    view! {
                                        <li>
                                            <button class="link-button" on:click=move |_| { scroll_to(section); }>
                                                {label}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4>"Services"</h4>
                        <ul>
                            {SERVICE_LINKS
                                .into_iter()
                                .map(|label| view! { <li><a href="#">{label}</a></li> })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4>"Contact Us"</h4>
                        <ul class="contact-list">
                            {CONTACT_INFO
                                .into_iter()
                                .map(|(label, href)| view! { <li><a href=href class="pre-line">{label}</a></li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <div class="container-custom footer-bottom-bar">
                    <div>{format!("© {} ProCorp. All rights reserved.", year)}</div>
                    <div class="legal-links">
                        {LEGAL_LINKS
                            .into_iter()
                            .map(|label| view! { <a href="#">{label}</a> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
