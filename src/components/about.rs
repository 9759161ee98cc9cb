//! About Component

use leptos::prelude::*;
use leptos_reveal::{use_scroll_reveal, RevealStyle};

const VALUES: [(&str, &str); 3] = [
    (
        "Mission",
        "To deliver exceptional business solutions that drive growth and success for our clients through innovation and dedication.",
    ),
    (
        "Vision",
        "To be the leading provider of professional services, recognized for our expertise, integrity, and commitment to excellence.",
    ),
    (
        "Values",
        "Integrity, innovation, collaboration, and client success form the foundation of everything we do in our organization.",
    ),
];

const ACHIEVEMENTS: [&str; 6] = [
    "ISO 9001:2015 Certified Quality Management",
    "Award-winning customer service excellence",
    "Trusted by Fortune 500 companies",
    "Sustainable business practices leader",
    "Innovation in digital transformation",
    "Community partnership initiatives",
];

const STORY: [&str; 3] = [
    "Since our establishment in 2008, we have grown from a small team of dedicated professionals \
     to a globally recognized organization serving clients across multiple industries and continents.",
    "Our commitment to quality, innovation, and client satisfaction has earned us numerous industry \
     awards and the trust of over 500 businesses worldwide. We continue to evolve and adapt to meet \
     the changing needs of our clients.",
    "Today, we stand as a testament to what can be achieved through dedication, expertise, and an \
     unwavering commitment to excellence in everything we do.",
];

#[component]
pub fn About() -> impl IntoView {
    let root = NodeRef::<leptos::html::Section>::new();
    use_scroll_reveal(root, RevealStyle::SlideUp, || ());

    view! {
        <section id="about" class="section-padding bg-muted" node_ref=root>
            <div class="container-custom">
                <div class="section-header slide-up">
                    <h2>"About Our Company"</h2>
                    <p>
                        "Founded on principles of excellence and innovation, we have been serving \
                         businesses worldwide with comprehensive solutions for over 15 years."
                    </p>
                </div>

                <div class="about-grid">
                    <div class="slide-up">
                        <h3>"Our Story"</h3>
                        <div class="prose">
                            {STORY.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                        </div>
                    </div>
                    <div class="slide-up">
                        <h3>"Key Achievements"</h3>
                        <ul class="check-list">
                            {ACHIEVEMENTS.into_iter().map(|a| view! { <li>{a}</li> }).collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="values-grid">
                    {VALUES
                        .into_iter()
                        .map(|(title, description)| {
                            view! {
                                <div class="value-card hover-lift slide-up">
                                    <h3>{title}</h3>
                                    <p>{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
