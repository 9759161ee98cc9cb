//! News Component
//!
//! Published articles with a category filter built from the loaded data,
//! expandable bodies and "Load more" paging.

use leptos::prelude::*;
use leptos_reveal::{use_scroll_reveal, RevealStyle};
use site_core::domain::NewsArticle;
use site_core::store::RemoteCollection;
use site_core::view_state::{categories_of, ViewState, ALL_CATEGORIES};

use crate::collection::load_collection;
use crate::commands;
use crate::context::use_app_context;
use crate::format;
use crate::markdown::render_article;

fn category_label(category: &str) -> String {
    if category == ALL_CATEGORIES {
        "All".to_string()
    } else {
        category.to_string()
    }
}

#[component]
fn ArticleCard(article: NewsArticle, view_state: RwSignal<ViewState>) -> impl IntoView {
    let id = StoredValue::new(article.id.clone());
    let expanded = move || view_state.with(|v| v.is_expanded(&id.read_value()));
    let body = render_article(&article.content);

    view! {
        <article class="article-card hover-lift fade-in">
            <div class="article-main">
                <div class="article-meta">
                    <span>{format::long_date(&article.created_at)}</span>
                    <span>{article.author_name.clone()}</span>
                    {article.category.clone().map(|c| view! { <span class="badge">{c}</span> })}
                    <span>{format::read_time(article.read_time_minutes())}</span>
                </div>

                <h3>{article.title.clone()}</h3>
                <p class="article-excerpt">{article.excerpt.clone()}</p>

                <div
                    class=move || if expanded() { "article-body expanded" } else { "article-body" }
                    inner_html=body
                ></div>

                <button
                    class="link-button"
                    on:click=move |_| view_state.update(|v| v.toggle_expanded(&id.read_value()))
                >
                    {move || if expanded() { "Read Less" } else { "Read More" }}
                </button>
            </div>

            <div class="article-thumb">
                <span>{format::initial(&article.title)}</span>
            </div>
        </article>
    }
}

#[component]
pub fn News() -> impl IntoView {
    let ctx = use_app_context();
    let root = NodeRef::<leptos::html::Section>::new();
    let articles = RwSignal::new(RemoteCollection::<NewsArticle>::new());
    let view_state = RwSignal::new(ViewState::paged(ctx.config().news_page_size));

    let backend = ctx.backend();
    load_collection(articles, view_state, async move { commands::list_published_news(&backend).await });

    let categories = Memo::new(move |_| articles.with(|c| categories_of(c.items())));
    let shown = Memo::new(move |_| {
        articles.with(|c| view_state.with(|v| v.page(c.items()).into_iter().cloned().collect::<Vec<_>>()))
    });
    let has_more = move || articles.with(|c| view_state.with(|v| v.has_more(c.items())));

    use_scroll_reveal(root, RevealStyle::FadeIn, move || shown.track());

    view! {
        <section id="news" class="section-padding" node_ref=root>
            <div class="container-custom">
                <div class="section-header fade-in">
                    <h2>"Latest News & Insights"</h2>
                    <p>
                        "Stay informed with our latest industry insights, thought leadership \
                         articles, and analysis of emerging business trends."
                    </p>
                </div>

                // Only worth showing with at least two real categories
                <Show when=move || categories.with(|c| c.len() > 2)>
                    <div class="category-filter fade-in">
                        <For
                            each=move || categories.get()
                            key=|category| category.clone()
                            children=move |category| {
                                let label = category_label(&category);
                                let id = StoredValue::new(category);
                                view! {
                                    <button
                                        class=move || {
                                            if view_state.with(|v| v.is_selected(&id.read_value())) {
                                                "filter-button selected"
                                            } else {
                                                "filter-button"
                                            }
                                        }
                                        on:click=move |_| view_state.update(|v| v.set_category(id.get_value()))
                                    >
                                        {label}
                                    </button>
                                }
                            }
                        />
                    </div>
                </Show>

                <Show when=move || articles.with(|c| c.is_loading() && c.items().is_empty())>
                    <div class="loading-spinner" aria-label="Loading articles"></div>
                </Show>

                <div class="article-list">
                    <For
                        each=move || shown.get()
                        key=|article| article.id.clone()
                        children=move |article| view! { <ArticleCard article=article view_state=view_state /> }
                    />
                </div>

                <Show when=move || !articles.with(|c| c.is_loading()) && shown.with(|s| s.is_empty())>
                    <p class="empty-note">"No articles published yet."</p>
                </Show>

                <Show when=has_more>
                    <div class="load-more">
                        <button class="btn-outline" on:click=move |_| view_state.update(|v| v.show_more())>
                            "Load more"
                        </button>
                    </div>
                </Show>
            </div>
        </section>
    }
}
