//! Portfolio Component
//!
//! Backend-fed project grid with a fixed category filter.

use leptos::prelude::*;
use leptos_reveal::{scroll_to, use_scroll_reveal, RevealStyle};
use site_core::domain::{PortfolioItem, PORTFOLIO_CATEGORIES};
use site_core::navigation::Section;
use site_core::store::RemoteCollection;
use site_core::view_state::ViewState;

use crate::collection::load_collection;
use crate::commands;
use crate::context::use_app_context;
use crate::format;

/// One project card
#[component]
fn ProjectCard(item: PortfolioItem) -> impl IntoView {
    view! {
        <div class="project-card hover-lift slide-up">
            <div class="project-thumb">
                <span>{format::initial(&item.title)}</span>
                {item.featured.then(|| view! { <span class="badge featured">"Featured"</span> })}
            </div>
            <div class="project-body">
                <div class="project-date">{format::year(&item.created_at)}</div>
                <h3>{item.title.clone()}</h3>
                <p>{item.description.clone()}</p>
                <div class="tag-list">
                    {item
                        .technologies
                        .iter()
                        .map(|tech| view! { <span class="tag">{tech.clone()}</span> })
                        .collect_view()}
                </div>
                {(!item.results.is_empty()).then(|| view! { <h4>"Key Results:"</h4> })}
                <ul class="result-list">
                    {item.results.iter().map(|r| view! { <li>{r.clone()}</li> }).collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
pub fn Portfolio() -> impl IntoView {
    let ctx = use_app_context();
    let root = NodeRef::<leptos::html::Section>::new();
    let items = RwSignal::new(RemoteCollection::<PortfolioItem>::new());
    let view_state = RwSignal::new(ViewState::new());

    let backend = ctx.backend();
    load_collection(items, view_state, async move { commands::list_portfolio(&backend).await });

    let visible = Memo::new(move |_| {
        items.with(|c| view_state.with(|v| v.visible(c.items()).into_iter().cloned().collect::<Vec<_>>()))
    });

    use_scroll_reveal(root, RevealStyle::SlideUp, move || visible.track());

    view! {
        <section id="portfolio" class="section-padding bg-muted" node_ref=root>
            <div class="container-custom">
                <div class="section-header slide-up">
                    <h2>"Our Portfolio"</h2>
                    <p>
                        "Explore our successful projects and the measurable impact we've delivered \
                         for clients across various industries and business challenges."
                    </p>
                </div>

                // Category Filter
                <div class="category-filter slide-up">
                    {PORTFOLIO_CATEGORIES
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    class=move || {
                                        if view_state.with(|v| v.is_selected(category.id)) {
                                            "filter-button selected"
                                        } else {
                                            "filter-button"
                                        }
                                    }
                                    on:click=move |_| view_state.update(|v| v.set_category(category.id))
                                >
                                    {category.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <Show when=move || items.with(|c| c.is_loading() && c.items().is_empty())>
                    <div class="loading-spinner" aria-label="Loading projects"></div>
                </Show>

                <div class="projects-grid">
                    <For
                        each=move || visible.get()
                        key=|item| item.id.clone()
                        children=move |item| view! { <ProjectCard item=item /> }
                    />
                </div>

                <Show when=move || !items.with(|c| c.is_loading()) && visible.with(|v| v.is_empty())>
                    <p class="empty-note">"No projects in this category yet."</p>
                </Show>

                <div class="cta-panel slide-up">
                    <h3>"Ready to Start Your Project?"</h3>
                    <p>"Let's discuss how we can help you achieve similar results for your organization."</p>
                    <button class="btn-professional" on:click=move |_| { scroll_to(Section::Contact); }>
                        "Start Your Project"
                    </button>
                </div>
            </div>
        </section>
    }
}
