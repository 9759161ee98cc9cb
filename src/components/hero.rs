//! Hero Component

use leptos::prelude::*;
use leptos_reveal::{scroll_to, use_scroll_reveal, RevealStyle};
use site_core::navigation::Section;

const STATS: [(&str, &str); 3] = [
    ("500+", "Clients Served"),
    ("25+", "Awards Won"),
    ("15+", "Years Experience"),
];

#[component]
pub fn Hero() -> impl IntoView {
    let root = NodeRef::<leptos::html::Section>::new();
    use_scroll_reveal(root, RevealStyle::FadeIn, || ());

    view! {
        <section id="hero" class="section-padding hero" node_ref=root>
            <div class="container-custom">
                <div class="hero-inner">
                    <h1 class="hero-title fade-in">
                        "Professional Excellence"
                        <span class="hero-title-accent">"Delivered Daily"</span>
                    </h1>

                    <p class="hero-lead fade-in">
                        "We provide comprehensive business solutions with a commitment to quality, \
                         innovation, and client satisfaction that has defined our industry leadership \
                         for over a decade."
                    </p>

                    <div class="hero-actions fade-in">
                        <button class="btn-professional" on:click=move |_| { scroll_to(Section::Services); }>
                            "Our Services"
                        </button>
                        <button class="btn-outline" on:click=move |_| { scroll_to(Section::About); }>
                            "Learn More"
                        </button>
                    </div>

                    <div class="hero-stats fade-in">
                        {STATS
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <div class="stat-card hover-lift">
                                        <div class="stat-value">{value}</div>
                                        <div class="stat-label">{label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
