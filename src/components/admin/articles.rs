//! News articles table: publish and unpublish

use leptos::prelude::*;
use site_core::admin::AdminAction;
use site_core::domain::NewsArticle;

use crate::context::use_app_context;
use crate::format;
use crate::store::{store_is_saving, store_run_action, use_admin_store, AdminStateStoreFields};

#[component]
fn ArticleRow(article: NewsArticle) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();
    let id = StoredValue::new(article.id.clone());
    let published = article.published;

    view! {
        <tr>
            <td class="strong truncate">{article.title.clone()}</td>
            <td>{article.author_name.clone()}</td>
            <td>
                <span class={if published { "badge default" } else { "badge outline" }}>
                    {if published { "Published" } else { "Draft" }}
                </span>
            </td>
            <td>{format::short_date(&article.created_at)}</td>
            <td>
                <button
                    class="btn-outline small"
                    disabled=move || store_is_saving(&store, &id.read_value())
                    on:click=move |_| {
                        store_run_action(
                            ctx,
                            store,
                            AdminAction::SetArticlePublished { id: id.get_value(), published: !published },
                            || {},
                        )
                    }
                >
                    {if published { "Unpublish" } else { "Publish" }}
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn ArticlesTable() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <div class="card">
            <div class="card-header">
                <h2>"News Articles"</h2>
                <p>"Manage news articles and blog posts"</p>
            </div>
            <div class="table-scroll">
                <table>
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Author"</th>
                            <th>"Status"</th>
                            <th>"Date"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.data().read().articles.items().to_vec()
                            key=|a| (a.id.clone(), a.published)
                            children=move |article| view! { <ArticleRow article=article /> }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}
