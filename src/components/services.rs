//! Services Component

use leptos::prelude::*;
use leptos_reveal::{scroll_to, use_scroll_reveal, RevealStyle};
use site_core::navigation::Section;

struct Service {
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

const SERVICES: [Service; 6] = [
    Service {
        title: "Business Consulting",
        description: "Strategic planning and business optimization services to help your organization achieve sustainable growth and competitive advantage.",
        features: ["Strategic Planning", "Process Optimization", "Market Analysis", "Growth Strategy"],
    },
    Service {
        title: "Financial Advisory",
        description: "Comprehensive financial services including investment planning, risk management, and performance optimization for sustainable success.",
        features: ["Investment Planning", "Risk Assessment", "Financial Analysis", "Portfolio Management"],
    },
    Service {
        title: "Risk Management",
        description: "Identify, assess, and mitigate business risks with our comprehensive risk management solutions and compliance frameworks.",
        features: ["Risk Assessment", "Compliance Audits", "Security Planning", "Crisis Management"],
    },
    Service {
        title: "Human Resources",
        description: "Complete HR solutions from talent acquisition to employee development, performance management, and organizational culture building.",
        features: ["Talent Acquisition", "Performance Management", "Training Programs", "Culture Development"],
    },
    Service {
        title: "Operations Management",
        description: "Streamline your operations with our expertise in process improvement, quality management, and operational excellence frameworks.",
        features: ["Process Improvement", "Quality Management", "Supply Chain", "Operational Excellence"],
    },
    Service {
        title: "Digital Transformation",
        description: "Navigate the digital landscape with our comprehensive transformation services, technology integration, and digital strategy development.",
        features: ["Digital Strategy", "Technology Integration", "Change Management", "Innovation Labs"],
    },
];

#[component]
pub fn Services() -> impl IntoView {
    let root = NodeRef::<leptos::html::Section>::new();
    use_scroll_reveal(root, RevealStyle::FadeIn, || ());

    view! {
        <section id="services" class="section-padding" node_ref=root>
            <div class="container-custom">
                <div class="section-header fade-in">
                    <h2>"Our Services"</h2>
                    <p>
                        "We offer a comprehensive suite of professional services designed to help \
                         your business thrive in today's competitive marketplace."
                    </p>
                </div>

                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="service-card hover-lift fade-in">
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                    <ul class="feature-list">
                                        {service.features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="cta-panel fade-in">
                    <h3>"Ready to Transform Your Business?"</h3>
                    <p>
                        "Contact us today to discuss how our professional services can help your \
                         organization achieve its goals and unlock its full potential."
                    </p>
                    <button class="btn-professional" on:click=move |_| { scroll_to(Section::Contact); }>
                        "Get Started Today"
                    </button>
                </div>
            </div>
        </section>
    }
}
